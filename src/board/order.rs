//! Order types for the order phase.
//!
//! Represents the four order kinds: hold, move, support, and convoy. Every
//! order names the ordering unit's position; the remaining fields depend on
//! the kind. Orders are plain values that refer to regions by key.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::map::Map;
use super::unit::UnitType;
use crate::error::GameError;

/// A unit reference in an order: the unit type and the region it stands in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderUnit {
    pub unit_type: UnitType,
    pub position: String,
}

impl OrderUnit {
    pub fn new(unit_type: UnitType, position: &str) -> Self {
        OrderUnit {
            unit_type,
            position: position.to_string(),
        }
    }
}

/// An order for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Hold: `A Vie H`
    Hold { unit: OrderUnit },

    /// Move: `A Vie - Tri`
    Move { unit: OrderUnit, dest: String },

    /// Support: `A Bud S Vie - Tri`, or `A Bud S Vie` when supporting a hold.
    Support {
        unit: OrderUnit,
        source: String,
        dest: String,
    },

    /// Convoy: `F ADR C Ven - Tri`
    Convoy {
        unit: OrderUnit,
        source: String,
        dest: String,
    },
}

impl Order {
    pub fn hold(unit_type: UnitType, position: &str) -> Self {
        Order::Hold {
            unit: OrderUnit::new(unit_type, position),
        }
    }

    pub fn movement(unit_type: UnitType, position: &str, dest: &str) -> Self {
        Order::Move {
            unit: OrderUnit::new(unit_type, position),
            dest: dest.to_string(),
        }
    }

    pub fn support(unit_type: UnitType, position: &str, source: &str, dest: &str) -> Self {
        Order::Support {
            unit: OrderUnit::new(unit_type, position),
            source: source.to_string(),
            dest: dest.to_string(),
        }
    }

    pub fn convoy(unit_type: UnitType, position: &str, source: &str, dest: &str) -> Self {
        Order::Convoy {
            unit: OrderUnit::new(unit_type, position),
            source: source.to_string(),
            dest: dest.to_string(),
        }
    }

    /// The ordering unit.
    pub fn unit(&self) -> &OrderUnit {
        match self {
            Order::Hold { unit }
            | Order::Move { unit, .. }
            | Order::Support { unit, .. }
            | Order::Convoy { unit, .. } => unit,
        }
    }

    /// Key of the region holding the ordering unit.
    pub fn position(&self) -> &str {
        &self.unit().position
    }

    /// Where the displacement starts: the position for holds and moves, the
    /// assisted unit's region for supports and convoys.
    pub fn source(&self) -> &str {
        match self {
            Order::Hold { unit } | Order::Move { unit, .. } => &unit.position,
            Order::Support { source, .. } | Order::Convoy { source, .. } => source,
        }
    }

    /// Where the displacement ends: the position for holds, the target otherwise.
    pub fn destination(&self) -> &str {
        match self {
            Order::Hold { unit } => &unit.position,
            Order::Move { dest, .. }
            | Order::Support { dest, .. }
            | Order::Convoy { dest, .. } => dest,
        }
    }

    /// Short kind name used in logs and errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            Order::Hold { .. } => "hold",
            Order::Move { .. } => "move",
            Order::Support { .. } => "support",
            Order::Convoy { .. } => "convoy",
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Order::Move { .. })
    }

    /// Carries out the order on the map.
    ///
    /// A move relocates the unit from its position to its destination without
    /// checking adjacency. A hold leaves the map untouched. Supports and
    /// convoys have no effect of their own and are rejected.
    pub fn execute(&self, map: &mut Map) -> Result<(), GameError> {
        match self {
            Order::Hold { .. } => Ok(()),
            Order::Move { unit, dest } => {
                if map.region(dest)?.is_occupied() {
                    return Err(GameError::DestinationOccupied(dest.clone()));
                }
                let mut moving = map
                    .region_mut(&unit.position)?
                    .unit
                    .take()
                    .ok_or_else(|| GameError::EmptyRegion(unit.position.clone()))?;
                moving.region = dest.clone();
                map.region_mut(dest)?.unit = Some(moving);
                Ok(())
            }
            Order::Support { .. } | Order::Convoy { .. } => {
                Err(GameError::UnsupportedOrderKind(self.kind()))
            }
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit();
        write!(f, "{} {} ", unit.unit_type.order_char(), unit.position)?;
        match self {
            Order::Hold { .. } => write!(f, "H"),
            Order::Move { dest, .. } => write!(f, "- {}", dest),
            Order::Support { source, dest, .. } if source == dest => write!(f, "S {}", source),
            Order::Support { source, dest, .. } => write!(f, "S {} - {}", source, dest),
            Order::Convoy { source, dest, .. } => write!(f, "C {} - {}", source, dest),
        }
    }
}
