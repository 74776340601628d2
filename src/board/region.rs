//! Regions of the map.
//!
//! A region is a land or water space with a unique key, an optional supply
//! center, an optional owner, at most one occupying unit, and a set of
//! outgoing adjacency edges.

use serde::{Deserialize, Serialize};

use super::unit::Unit;

/// The terrain of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Land,
    Water,
}

/// A single map region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub key: String,
    pub name: String,
    pub terrain: Terrain,
    pub supply_center: bool,
    /// Nation currently controlling the region, if any.
    pub owner: Option<String>,
    pub unit: Option<Unit>,
    /// Destination keys of outgoing edges, in insertion order without duplicates.
    edges: Vec<String>,
}

impl Region {
    pub fn new(key: &str, name: &str, terrain: Terrain, supply_center: bool) -> Self {
        Region {
            key: key.to_string(),
            name: name.to_string(),
            terrain,
            supply_center,
            owner: None,
            unit: None,
            edges: Vec::new(),
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.unit.is_some()
    }

    /// Keys of the regions this one has an edge to.
    pub fn edges(&self) -> &[String] {
        &self.edges
    }

    pub fn has_edge_to(&self, dest: &str) -> bool {
        self.edges.iter().any(|e| e == dest)
    }

    pub(crate) fn push_edge(&mut self, dest: &str) {
        if !self.has_edge_to(dest) {
            self.edges.push(dest.to_string());
        }
    }
}
