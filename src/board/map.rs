//! The map: an arena of regions keyed by their identity string.
//!
//! Regions own their occupying unit and their outgoing edges. Everything
//! else (units, orders, nations) refers to regions by key. Edges are
//! directed; callers add both directions for a symmetric border.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::region::{Region, Terrain};
use super::unit::{Unit, UnitType};
use crate::error::GameError;

/// The game map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    regions: BTreeMap<String, Region>,
}

impl Map {
    /// Creates an empty map.
    pub fn new() -> Self {
        Map::default()
    }

    /// Inserts a new region. An existing key is rejected, never overwritten.
    pub fn add_region(
        &mut self,
        key: &str,
        name: &str,
        terrain: Terrain,
        supply_center: bool,
    ) -> Result<(), GameError> {
        if self.regions.contains_key(key) {
            return Err(GameError::DuplicateRegion(key.to_string()));
        }
        self.regions
            .insert(key.to_string(), Region::new(key, name, terrain, supply_center));
        Ok(())
    }

    /// Adds a directed edge `src -> dest`. Both regions must exist.
    pub fn add_edge(&mut self, src: &str, dest: &str) -> Result<(), GameError> {
        if !self.regions.contains_key(dest) {
            return Err(GameError::RegionNotFound(dest.to_string()));
        }
        self.region_mut(src)?.push_edge(dest);
        Ok(())
    }

    /// Adds a directed edge from `src` to each of `dests`, in order.
    ///
    /// Stops at the first destination that does not exist and reports it.
    /// Edges added before that point are kept.
    pub fn add_edges(&mut self, src: &str, dests: &[&str]) -> Result<(), GameError> {
        self.region(src)?;
        for dest in dests {
            self.add_edge(src, dest)?;
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.regions.contains_key(key)
    }

    /// Looks up a region by key.
    pub fn region(&self, key: &str) -> Result<&Region, GameError> {
        self.regions
            .get(key)
            .ok_or_else(|| GameError::RegionNotFound(key.to_string()))
    }

    pub fn region_mut(&mut self, key: &str) -> Result<&mut Region, GameError> {
        self.regions
            .get_mut(key)
            .ok_or_else(|| GameError::RegionNotFound(key.to_string()))
    }

    /// All regions, ordered by key.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Places a new unit for `nation` in an empty region and returns it.
    pub fn add_unit(
        &mut self,
        nation: &str,
        unit_type: UnitType,
        key: &str,
    ) -> Result<&Unit, GameError> {
        let region = self.region_mut(key)?;
        if region.is_occupied() {
            return Err(GameError::RegionOccupied(key.to_string()));
        }
        let unit: &Unit = region.unit.insert(Unit::new(nation, unit_type, key));
        Ok(unit)
    }

    /// The unit standing in `key`, if the region exists and is occupied.
    pub fn unit(&self, key: &str) -> Option<&Unit> {
        self.regions.get(key).and_then(|r| r.unit.as_ref())
    }

    /// Detaches the active order from every unit.
    pub fn clear_unit_orders(&mut self) {
        for unit in self.regions.values_mut().filter_map(|r| r.unit.as_mut()) {
            unit.order = None;
        }
    }

    /// Every unit owned by `nation`, ordered by region key.
    pub fn units_of(&self, nation: &str) -> Vec<&Unit> {
        self.regions
            .values()
            .filter_map(|r| r.unit.as_ref())
            .filter(|u| u.is_owned_by(nation))
            .collect()
    }

    /// Keys of the regions `key` has an edge to.
    pub fn neighbor_keys(&self, key: &str) -> Result<&[String], GameError> {
        if key.is_empty() {
            return Err(GameError::InvalidArgument("region key is empty"));
        }
        Ok(self.region(key)?.edges())
    }

    /// The regions `key` has an edge to.
    pub fn neighbors(&self, key: &str) -> Result<Vec<&Region>, GameError> {
        Ok(self
            .neighbor_keys(key)?
            .iter()
            .filter_map(|k| self.regions.get(k))
            .collect())
    }

    /// The neighbors of `key` that currently hold a unit.
    pub fn neighbors_with_units(&self, key: &str) -> Result<Vec<&Region>, GameError> {
        let mut neighbors = self.neighbors(key)?;
        neighbors.retain(|r| r.is_occupied());
        Ok(neighbors)
    }

    /// Returns true if there is an edge `from -> to`.
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.regions.get(from).is_some_and(|r| r.has_edge_to(to))
    }

    /// Sets or clears the controlling nation of a region.
    pub fn set_owner(&mut self, key: &str, owner: Option<&str>) -> Result<(), GameError> {
        self.region_mut(key)?.owner = owner.map(str::to_string);
        Ok(())
    }

    /// Supply centers controlled by `nation`.
    pub fn supply_centers_of(&self, nation: &str) -> Vec<&Region> {
        self.regions
            .values()
            .filter(|r| r.supply_center && r.owner.as_deref() == Some(nation))
            .collect()
    }

    /// Hands every occupied supply center to the occupying unit's nation.
    /// Unoccupied centers keep their current owner.
    pub fn update_supply_center_owners(&mut self) {
        for region in self.regions.values_mut() {
            if !region.supply_center {
                continue;
            }
            if let Some(unit) = &region.unit {
                region.owner = Some(unit.nation.clone());
            }
        }
    }
}
