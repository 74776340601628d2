//! Unit types and ownership.
//!
//! Represents armies and fleets, the nation that owns them, the region they
//! occupy, and the order they were last given.

use serde::{Deserialize, Serialize};

use super::order::Order;
use super::region::Terrain;

/// The type of a military unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Army,
    Fleet,
}

impl UnitType {
    /// Returns the uppercase abbreviation used in order notation.
    pub const fn order_char(self) -> char {
        match self {
            UnitType::Army => 'A',
            UnitType::Fleet => 'F',
        }
    }

    /// Parses a unit type from its uppercase abbreviation.
    pub fn from_order_char(c: char) -> Option<UnitType> {
        match c {
            'A' => Some(UnitType::Army),
            'F' => Some(UnitType::Fleet),
            _ => None,
        }
    }

    /// Returns whether this unit type may stand in a region of the given terrain.
    pub const fn can_occupy(self, terrain: Terrain) -> bool {
        match (self, terrain) {
            (UnitType::Army, Terrain::Water) => false,
            _ => true,
        }
    }
}

/// A military unit on the map.
///
/// The region and the active order are held by key and by value, never by
/// reference: the map is the only owner of regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub nation: String,
    pub unit_type: UnitType,
    pub region: String,
    pub order: Option<Order>,
}

impl Unit {
    pub fn new(nation: &str, unit_type: UnitType, region: &str) -> Self {
        Unit {
            nation: nation.to_string(),
            unit_type,
            region: region.to_string(),
            order: None,
        }
    }

    /// Returns true if the unit belongs to `nation`.
    pub fn is_owned_by(&self, nation: &str) -> bool {
        self.nation == nation
    }
}
