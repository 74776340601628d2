//! Order resolution.
//!
//! Computes per-order contest strength and sequences the season/phase cycle.

pub mod phase;
pub mod strength;

pub use phase::{is_valid_turn, next_phase};
pub use strength::{contested_region, is_valid_support, strength};
