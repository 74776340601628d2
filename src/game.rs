//! Turn controller.
//!
//! Holds the map, the nations, the current season and phase, and the game
//! options. Drivers submit orders through it, run adjudication once per
//! order phase, and advance the phase. Every event is logged inside the
//! span given to [`GameState::with_span`].

use tracing::Span;

use crate::board::{Map, Nation, Order, Phase, Region, Season, UnitType};
use crate::error::GameError;
use crate::options::GameOptions;
use crate::resolve::{is_valid_turn, next_phase, strength};

/// What adjudication did with an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderResult {
    /// The move was applied to the map.
    Executed,
    /// The order was taken into account but has no effect of its own.
    Accepted,
}

/// An adjudicated order with the strength it had before any move executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOrder {
    pub order: Order,
    pub nation: String,
    pub strength: i32,
    pub result: OrderResult,
}

/// The state of one game.
#[derive(Debug)]
pub struct GameState {
    pub year: u16,
    season: Season,
    phase: Phase,
    nations: Vec<Nation>,
    map: Map,
    pub options: GameOptions,
    /// Set once the current order phase has been adjudicated.
    adjudicated: bool,
    span: Span,
}

impl GameState {
    /// Creates a game at the given turn. The (season, phase) pair must be one
    /// of the five reachable pairs.
    pub fn new(
        map: Map,
        nations: Vec<Nation>,
        year: u16,
        season: Season,
        phase: Phase,
    ) -> Result<Self, GameError> {
        if !is_valid_turn(season, phase) {
            return Err(GameError::UnsupportedSeason { season, phase });
        }
        Ok(GameState {
            year,
            season,
            phase,
            nations,
            map,
            options: GameOptions::default(),
            adjudicated: false,
            span: tracing::debug_span!("game"),
        })
    }

    /// Replaces the span every event is recorded under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn with_options(mut self, options: GameOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets a single option by name.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), GameError> {
        self.options.set(name, value)
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Mutable map access for setup. Units placed here take part in the
    /// next adjudication.
    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    pub fn region(&self, key: &str) -> Result<&Region, GameError> {
        self.map.region(key)
    }

    pub fn nations(&self) -> &[Nation] {
        &self.nations
    }

    pub fn nation(&self, name: &str) -> Result<&Nation, GameError> {
        self.nations
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| GameError::NationNotFound(name.to_string()))
    }

    fn nation_index(&self, name: &str) -> Result<usize, GameError> {
        self.nations
            .iter()
            .position(|n| n.name == name)
            .ok_or_else(|| GameError::NationNotFound(name.to_string()))
    }

    fn require_order_phase(&self) -> Result<(), GameError> {
        if self.phase != Phase::Order || self.adjudicated {
            return Err(GameError::WrongPhase {
                season: self.season,
                phase: self.phase,
            });
        }
        Ok(())
    }

    /// Records `order` for `nation` and attaches it to the ordered unit.
    ///
    /// An earlier order for the same position is replaced in its slot.
    pub fn submit_order(&mut self, nation: &str, order: Order) -> Result<(), GameError> {
        let span = self.span.clone();
        let _enter = span.enter();

        let result = self.try_submit(nation, order.clone());
        match &result {
            Ok(()) => tracing::debug!(
                season = ?self.season,
                phase = ?self.phase,
                nation,
                order = %order,
                "order submitted"
            ),
            Err(e) => tracing::warn!(
                season = ?self.season,
                phase = ?self.phase,
                nation,
                order = %order,
                error = %e,
                "order rejected"
            ),
        }
        result
    }

    fn try_submit(&mut self, nation: &str, order: Order) -> Result<(), GameError> {
        self.require_order_phase()?;
        let idx = self.nation_index(nation)?;

        let position = order.position().to_string();
        let unit = self
            .map
            .region_mut(&position)?
            .unit
            .as_mut()
            .ok_or_else(|| GameError::EmptyRegion(position.clone()))?;
        if !unit.is_owned_by(nation) {
            return Err(GameError::OwnershipViolation {
                nation: nation.to_string(),
                region: position,
            });
        }
        if unit.unit_type != order.unit().unit_type {
            return Err(GameError::UnitTypeMismatch {
                region: position,
                ordered: order.unit().unit_type,
                actual: unit.unit_type,
            });
        }
        unit.order = Some(order.clone());

        self.nations[idx].record_order(order);
        Ok(())
    }

    /// Resolves the nation and every named region, then reads the unit type
    /// from the unit at `position`.
    fn order_unit_type(
        &self,
        nation: &str,
        position: &str,
        others: &[&str],
    ) -> Result<UnitType, GameError> {
        self.nation_index(nation)?;
        for key in others {
            self.map.region(key)?;
        }
        self.map
            .region(position)?
            .unit
            .as_ref()
            .map(|u| u.unit_type)
            .ok_or_else(|| GameError::EmptyRegion(position.to_string()))
    }

    pub fn add_hold_order(&mut self, nation: &str, position: &str) -> Result<(), GameError> {
        let unit_type = self.order_unit_type(nation, position, &[])?;
        self.submit_order(nation, Order::hold(unit_type, position))
    }

    pub fn add_move_order(
        &mut self,
        nation: &str,
        position: &str,
        dest: &str,
    ) -> Result<(), GameError> {
        let unit_type = self.order_unit_type(nation, position, &[dest])?;
        self.submit_order(nation, Order::movement(unit_type, position, dest))
    }

    pub fn add_support_order(
        &mut self,
        nation: &str,
        position: &str,
        source: &str,
        dest: &str,
    ) -> Result<(), GameError> {
        let unit_type = self.order_unit_type(nation, position, &[source, dest])?;
        self.submit_order(nation, Order::support(unit_type, position, source, dest))
    }

    pub fn add_convoy_order(
        &mut self,
        nation: &str,
        position: &str,
        source: &str,
        dest: &str,
    ) -> Result<(), GameError> {
        let unit_type = self.order_unit_type(nation, position, &[source, dest])?;
        self.submit_order(nation, Order::convoy(unit_type, position, source, dest))
    }

    /// Strength of `order` against the orders currently attached to units.
    pub fn strength(&self, order: &Order) -> i32 {
        strength(order, &self.map)
    }

    /// Runs the order phase.
    ///
    /// Strengths are computed for every submitted order first. Moves are then
    /// executed in submission order (nation by nation); the first failing
    /// move stops adjudication and its error is returned. Other orders are
    /// accepted without further effect. A successful pass closes the order
    /// phase: further submissions and adjudications fail with `WrongPhase`
    /// until the phase advances.
    pub fn adjudicate(&mut self) -> Result<Vec<ResolvedOrder>, GameError> {
        let span = self.span.clone();
        let _enter = span.enter();

        self.require_order_phase()?;

        let mut resolved: Vec<ResolvedOrder> = self
            .nations
            .iter()
            .flat_map(|n| n.orders().iter().map(move |o| (n, o)))
            .map(|(n, o)| ResolvedOrder {
                order: o.clone(),
                nation: n.name.clone(),
                strength: strength(o, &self.map),
                result: OrderResult::Accepted,
            })
            .collect();

        for entry in &mut resolved {
            tracing::debug!(
                season = ?self.season,
                phase = ?self.phase,
                nation = %entry.nation,
                order = %entry.order,
                strength = entry.strength,
                "adjudicating"
            );
            if let Err(e) = self.execute(&entry.order) {
                tracing::warn!(
                    season = ?self.season,
                    phase = ?self.phase,
                    nation = %entry.nation,
                    order = %entry.order,
                    error = %e,
                    "move failed"
                );
                return Err(e);
            }
            if entry.order.is_move() {
                entry.result = OrderResult::Executed;
            }
        }
        self.adjudicated = true;
        Ok(resolved)
    }

    fn execute(&mut self, order: &Order) -> Result<(), GameError> {
        let Order::Move { unit, dest } = order else {
            return Ok(());
        };
        if self.options.enforce_adjacency && !self.map.is_adjacent(&unit.position, dest) {
            return Err(GameError::NotAdjacent {
                from: unit.position.clone(),
                to: dest.clone(),
            });
        }
        order.execute(&mut self.map)
    }

    /// Moves to the next (season, phase).
    ///
    /// Leaving Fall Retreat updates supply-center owners when enabled.
    /// Entering Spring Order starts a new year. Entering any order phase
    /// clears every submitted order.
    pub fn advance_phase(&mut self) -> Result<(Season, Phase), GameError> {
        let span = self.span.clone();
        let _enter = span.enter();

        let (season, phase) = next_phase(self.season, self.phase).map_err(|e| {
            tracing::warn!(
                season = ?self.season,
                phase = ?self.phase,
                error = %e,
                "cannot advance"
            );
            e
        })?;

        if self.season == Season::Fall
            && self.phase == Phase::Retreat
            && self.options.capture_supply_centers
        {
            self.map.update_supply_center_owners();
        }
        if season == Season::Spring && phase == Phase::Order {
            self.year += 1;
        }
        self.season = season;
        self.phase = phase;
        self.adjudicated = false;

        if phase == Phase::Order {
            self.clear_orders();
        }

        tracing::info!(year = self.year, season = ?season, phase = ?phase, "phase advanced");
        Ok((season, phase))
    }

    fn clear_orders(&mut self) {
        for nation in &mut self.nations {
            nation.clear_orders();
        }
        self.map.clear_unit_orders();
    }
}
