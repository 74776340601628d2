//! Contest strength of a single order.
//!
//! Strength starts at 1 for the ordering unit. Each unit next to the
//! contested region whose active order is a valid support for the same
//! (source, destination) pair adds 1; each other unit there moving along the
//! same pair subtracts 1. Strength is only computed here; comparing strengths
//! to decide a winner is left to the caller.

use crate::board::{Map, Order, Terrain, Unit, UnitType};

/// Returns the region an order contests: a move's destination, otherwise
/// the ordering unit's own position.
pub fn contested_region(order: &Order) -> &str {
    match order {
        Order::Move { dest, .. } => dest,
        _ => order.position(),
    }
}

/// Returns true if `support` assists exactly `order` and the supporting unit
/// can project into the order's destination. Armies cannot support into water.
pub fn is_valid_support(map: &Map, order: &Order, support: &Order, supporter: &Unit) -> bool {
    if support.source() != order.source() || support.destination() != order.destination() {
        return false;
    }
    if supporter.unit_type == UnitType::Fleet {
        return true;
    }
    map.region(order.destination()).is_ok_and(|r| r.terrain == Terrain::Land)
}

/// Computes the strength of `order` from the active orders of the units
/// around its contested region. Returns 1 if the region cannot be looked up.
pub fn strength(order: &Order, map: &Map) -> i32 {
    let neighbors = match map.neighbors_with_units(contested_region(order)) {
        Ok(n) => n,
        Err(_) => return 1,
    };

    let mut strength = 1;
    for region in neighbors {
        if region.key == order.position() {
            continue;
        }
        let Some(unit) = &region.unit else { continue };
        let Some(other) = &unit.order else { continue };

        match other {
            Order::Support { .. } if is_valid_support(map, order, other, unit) => strength += 1,
            Order::Move { .. }
                if other.source() == order.source()
                    && other.destination() == order.destination() =>
            {
                strength -= 1
            }
            _ => {}
        }
    }
    strength
}
