//! Error type shared by the map, order, and turn controller.

use crate::board::{Phase, Season, UnitType};

/// Errors returned by map construction, order submission, and adjudication.
///
/// All errors are plain values: nothing is retried and nothing aborts the
/// process. The driver decides whether to skip, correct, or stop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("region '{0}' not found")]
    RegionNotFound(String),

    #[error("region '{0}' already exists")]
    DuplicateRegion(String),

    #[error("region '{0}' already occupied")]
    RegionOccupied(String),

    #[error("region '{0}' has no unit")]
    EmptyRegion(String),

    #[error("nation '{0}' not found")]
    NationNotFound(String),

    #[error("nation '{nation}' does not own the unit in '{region}'")]
    OwnershipViolation { nation: String, region: String },

    #[error("order for '{region}' names a {ordered:?} but the unit is a {actual:?}")]
    UnitTypeMismatch {
        region: String,
        ordered: UnitType,
        actual: UnitType,
    },

    #[error("destination '{0}' already occupied")]
    DestinationOccupied(String),

    #[error("'{from}' is not adjacent to '{to}'")]
    NotAdjacent { from: String, to: String },

    #[error("unsupported season/phase: {season:?} {phase:?}")]
    UnsupportedSeason { season: Season, phase: Phase },

    #[error("{0} orders cannot be executed")]
    UnsupportedOrderKind(&'static str),

    #[error("not allowed during {season:?} {phase:?}")]
    WrongPhase { season: Season, phase: Phase },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("invalid option '{0}'")]
    InvalidOption(String),
}
