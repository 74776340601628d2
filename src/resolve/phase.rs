//! Phase sequencing logic.
//!
//! Determines the next (season, phase) in the game year. Only five pairs are
//! valid and they form a single cycle:
//!
//! - Spring Order   -> Spring Retreat
//! - Spring Retreat -> Fall Order
//! - Fall Order     -> Fall Retreat
//! - Fall Retreat   -> Winter Build
//! - Winter Build   -> Spring Order (next year)

use crate::board::{Phase, Season};
use crate::error::GameError;

/// Returns true if `(season, phase)` is one of the five reachable pairs.
pub fn is_valid_turn(season: Season, phase: Phase) -> bool {
    matches!(
        (season, phase),
        (Season::Spring | Season::Fall, Phase::Order | Phase::Retreat)
            | (Season::Winter, Phase::Build)
    )
}

/// Computes the pair that follows `(season, phase)`.
pub fn next_phase(season: Season, phase: Phase) -> Result<(Season, Phase), GameError> {
    match (season, phase) {
        (Season::Spring, Phase::Order) => Ok((Season::Spring, Phase::Retreat)),
        (Season::Spring, Phase::Retreat) => Ok((Season::Fall, Phase::Order)),
        (Season::Fall, Phase::Order) => Ok((Season::Fall, Phase::Retreat)),
        (Season::Fall, Phase::Retreat) => Ok((Season::Winter, Phase::Build)),
        (Season::Winter, Phase::Build) => Ok((Season::Spring, Phase::Order)),
        _ => Err(GameError::UnsupportedSeason { season, phase }),
    }
}
