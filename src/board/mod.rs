//! Board representation.
//!
//! Contains the map of regions, units, orders, nations, and the season and
//! phase types.

pub mod map;
pub mod nation;
pub mod order;
pub mod region;
pub mod state;
pub mod unit;

pub use map::Map;
pub use nation::Nation;
pub use order::{Order, OrderUnit};
pub use region::{Region, Terrain};
pub use state::{Phase, Season};
pub use unit::{Unit, UnitType};
