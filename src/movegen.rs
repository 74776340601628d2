//! Legal order generation.
//!
//! Enumerates the hold, move, support, and convoy orders available to a
//! unit, and picks random orders for a nation. Convoys are limited to a
//! single fleet carrying an army between two regions bordering its water.

use rand::Rng;

use crate::board::{Map, Order, Terrain, UnitType};

/// Generates all legal orders for the unit in region `key`.
///
/// Returns an empty vec if the region is unknown or empty.
pub fn legal_orders(map: &Map, key: &str) -> Vec<Order> {
    let Some(unit) = map.unit(key) else {
        return Vec::new();
    };
    let unit_type = unit.unit_type;
    let Ok(neighbors) = map.neighbors(key) else {
        return Vec::new();
    };

    let mut orders = vec![Order::hold(unit_type, key)];

    let reachable: Vec<&str> = neighbors
        .iter()
        .filter(|r| unit_type.can_occupy(r.terrain))
        .map(|r| r.key.as_str())
        .collect();

    for dest in &reachable {
        orders.push(Order::movement(unit_type, key, dest));
    }

    // Support holds and moves into every region this unit could reach.
    for dest in &reachable {
        if map.unit(dest).is_some() {
            orders.push(Order::support(unit_type, key, dest, dest));
        }
        let Ok(region) = map.region(dest) else { continue };
        for other in map.regions() {
            if other.key == key || other.key == *dest {
                continue;
            }
            let Some(mover) = &other.unit else { continue };
            if mover.unit_type.can_occupy(region.terrain) && map.is_adjacent(&other.key, dest) {
                orders.push(Order::support(unit_type, key, &other.key, dest));
            }
        }
    }

    let at_sea = map.region(key).is_ok_and(|r| r.terrain == Terrain::Water);
    if unit_type == UnitType::Fleet && at_sea {
        generate_convoys(map, key, &mut orders);
    }

    orders
}

fn generate_convoys(map: &Map, key: &str, orders: &mut Vec<Order>) {
    let Ok(shores) = map.neighbors(key) else { return };
    let shores: Vec<&str> = shores
        .iter()
        .filter(|r| r.terrain == Terrain::Land)
        .map(|r| r.key.as_str())
        .collect();

    for from in &shores {
        if !matches!(map.unit(from), Some(u) if u.unit_type == UnitType::Army) {
            continue;
        }
        for to in &shores {
            if to != from {
                orders.push(Order::convoy(UnitType::Fleet, key, from, to));
            }
        }
    }
}

/// Picks one random legal order for each of the nation's units.
pub fn random_orders(nation: &str, map: &Map, rng: &mut impl Rng) -> Vec<Order> {
    let mut orders = Vec::new();
    for unit in map.units_of(nation) {
        let legal = legal_orders(map, &unit.region);
        if !legal.is_empty() {
            let idx = rng.gen_range(0..legal.len());
            orders.push(legal[idx].clone());
        }
    }
    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn coast_map() -> Map {
        let mut map = Map::new();
        map.add_region("Ven", "Venice", Terrain::Land, true).unwrap();
        map.add_region("Tri", "Trieste", Terrain::Land, true).unwrap();
        map.add_region("Alb", "Albania", Terrain::Land, false).unwrap();
        map.add_region("ADR", "Adriatic Sea", Terrain::Water, false).unwrap();
        for (a, b) in [
            ("Ven", "Tri"),
            ("Tri", "Alb"),
            ("Ven", "ADR"),
            ("Tri", "ADR"),
            ("Alb", "ADR"),
        ] {
            map.add_edge(a, b).unwrap();
            map.add_edge(b, a).unwrap();
        }
        map
    }

    fn rendered(orders: &[Order]) -> Vec<String> {
        orders.iter().map(|o| o.to_string()).collect()
    }

    #[test]
    fn empty_region_has_no_orders() {
        let map = coast_map();
        assert!(legal_orders(&map, "Ven").is_empty());
        assert!(legal_orders(&map, "XYZ").is_empty());
    }

    #[test]
    fn army_cannot_move_to_water() {
        let mut map = coast_map();
        map.add_unit("Italy", UnitType::Army, "Ven").unwrap();
        let orders = rendered(&legal_orders(&map, "Ven"));
        assert!(orders.contains(&"A Ven H".to_string()));
        assert!(orders.contains(&"A Ven - Tri".to_string()));
        assert!(!orders.contains(&"A Ven - ADR".to_string()));
    }

    #[test]
    fn supports_cover_holds_and_moves() {
        let mut map = coast_map();
        map.add_unit("Italy", UnitType::Army, "Ven").unwrap();
        map.add_unit("Austria", UnitType::Army, "Tri").unwrap();
        map.add_unit("Austria", UnitType::Army, "Alb").unwrap();

        let orders = rendered(&legal_orders(&map, "Ven"));
        assert!(orders.contains(&"A Ven S Tri".to_string()));
        assert!(orders.contains(&"A Ven S Alb - Tri".to_string()));
    }

    #[test]
    fn fleet_at_sea_convoys_adjacent_armies() {
        let mut map = coast_map();
        map.add_unit("Italy", UnitType::Fleet, "ADR").unwrap();
        map.add_unit("Italy", UnitType::Army, "Ven").unwrap();

        let orders = rendered(&legal_orders(&map, "ADR"));
        assert!(orders.contains(&"F ADR C Ven - Tri".to_string()));
        assert!(orders.contains(&"F ADR C Ven - Alb".to_string()));
        assert!(!orders.iter().any(|o| o.starts_with("F ADR C Tri")));
    }

    #[test]
    fn random_orders_one_per_unit() {
        let mut map = coast_map();
        map.add_unit("Italy", UnitType::Army, "Ven").unwrap();
        map.add_unit("Italy", UnitType::Fleet, "ADR").unwrap();
        map.add_unit("Austria", UnitType::Army, "Tri").unwrap();

        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let orders = random_orders("Italy", &map, &mut rng);
            assert_eq!(orders.len(), 2);
            let mut positions: Vec<&str> = orders.iter().map(|o| o.position()).collect();
            positions.sort();
            assert_eq!(positions, ["ADR", "Ven"]);
        }
    }
}
