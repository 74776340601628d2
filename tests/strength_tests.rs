//! Support-strength scenarios on a small slice of the standard map.
//!
//! Regions: Vie, Bud, Tri, Ven, Rom, Tyr (land) and ADR, ION (water).
//! Borders: Vie-Bud-Tri-Tyr, Tri-Ven-ADR, Ven-Rom, ION-ADR.

use stabbr::board::{Map, Nation, Order, Phase, Season, Terrain, UnitType};
use stabbr::resolve::strength;
use stabbr::GameState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn border(map: &mut Map, a: &str, b: &str) {
    map.add_edge(a, b).unwrap();
    map.add_edge(b, a).unwrap();
}

fn scenario_map() -> Map {
    let mut map = Map::new();
    for (key, name, sc) in [
        ("Vie", "Vienna", true),
        ("Bud", "Budapest", true),
        ("Tri", "Trieste", true),
        ("Ven", "Venice", true),
        ("Rom", "Rome", true),
        ("Tyr", "Tyrolia", false),
    ] {
        map.add_region(key, name, Terrain::Land, sc).unwrap();
    }
    map.add_region("ADR", "Adriatic Sea", Terrain::Water, false).unwrap();
    map.add_region("ION", "Ionian Sea", Terrain::Water, false).unwrap();

    border(&mut map, "Vie", "Bud");
    border(&mut map, "Bud", "Tri");
    border(&mut map, "Tri", "Tyr");
    border(&mut map, "Tri", "Ven");
    border(&mut map, "Ven", "ADR");
    border(&mut map, "Ven", "Rom");
    border(&mut map, "ION", "ADR");
    map
}

fn new_game(units: &[(&str, UnitType, &str)]) -> GameState {
    let mut map = scenario_map();
    for (nation, unit_type, region) in units {
        map.add_unit(nation, *unit_type, region).unwrap();
    }
    let nations = vec![
        Nation::new("Austria", &["Vie", "Bud", "Tri"]),
        Nation::new("Italy", &["Ven", "Rom"]),
        Nation::new("Turkey", &[]),
    ];
    GameState::new(map, nations, 1901, Season::Spring, Phase::Order).unwrap()
}

fn order_of(game: &GameState, nation: &str, position: &str) -> Order {
    game.nation(nation)
        .unwrap()
        .order_at(position)
        .cloned()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn lone_hold_has_strength_one() {
    let mut game = new_game(&[("Austria", UnitType::Army, "Vie")]);
    game.add_hold_order("Austria", "Vie").unwrap();

    let hold = order_of(&game, "Austria", "Vie");
    assert_eq!(game.strength(&hold), 1);
}

#[test]
fn supported_hold_has_strength_two() {
    let mut game = new_game(&[
        ("Austria", UnitType::Army, "Vie"),
        ("Austria", UnitType::Army, "Bud"),
    ]);
    game.add_hold_order("Austria", "Vie").unwrap();
    game.add_support_order("Austria", "Bud", "Vie", "Vie").unwrap();

    let hold = order_of(&game, "Austria", "Vie");
    assert_eq!(game.strength(&hold), 2);
}

#[test]
fn unsupported_move_has_strength_one() {
    let mut game = new_game(&[("Austria", UnitType::Army, "Vie")]);
    game.add_move_order("Austria", "Vie", "Tri").unwrap();

    let mv = order_of(&game, "Austria", "Vie");
    assert_eq!(game.strength(&mv), 1);
}

#[test]
fn supported_move_has_strength_two() {
    let mut game = new_game(&[
        ("Austria", UnitType::Army, "Vie"),
        ("Austria", UnitType::Army, "Bud"),
    ]);
    game.add_move_order("Austria", "Vie", "Tri").unwrap();
    game.add_support_order("Austria", "Bud", "Vie", "Tri").unwrap();

    let mv = order_of(&game, "Austria", "Vie");
    assert_eq!(game.strength(&mv), 2);
}

#[test]
fn foreign_support_adds_to_strength() {
    let mut game = new_game(&[
        ("Austria", UnitType::Army, "Vie"),
        ("Austria", UnitType::Army, "Bud"),
        ("Italy", UnitType::Army, "Ven"),
    ]);
    game.add_move_order("Austria", "Vie", "Tri").unwrap();
    game.add_support_order("Austria", "Bud", "Vie", "Tri").unwrap();
    game.add_support_order("Italy", "Ven", "Vie", "Tri").unwrap();

    let mv = order_of(&game, "Austria", "Vie");
    assert_eq!(game.strength(&mv), 3);
}

#[test]
fn support_for_other_pair_is_ignored() {
    let mut game = new_game(&[
        ("Austria", UnitType::Army, "Vie"),
        ("Austria", UnitType::Army, "Bud"),
        ("Italy", UnitType::Army, "Ven"),
    ]);
    game.add_move_order("Austria", "Vie", "Tri").unwrap();
    game.add_support_order("Austria", "Bud", "Vie", "Tri").unwrap();
    game.add_support_order("Italy", "Ven", "Vie", "Bud").unwrap();

    let mv = order_of(&game, "Austria", "Vie");
    assert_eq!(game.strength(&mv), 2);
}

#[test]
fn army_cannot_support_into_water() {
    let mut game = new_game(&[
        ("Turkey", UnitType::Fleet, "ION"),
        ("Italy", UnitType::Army, "Ven"),
    ]);
    game.add_move_order("Turkey", "ION", "ADR").unwrap();
    game.add_support_order("Italy", "Ven", "ION", "ADR").unwrap();

    let mv = order_of(&game, "Turkey", "ION");
    assert_eq!(game.strength(&mv), 1);
}

#[test]
fn fleet_can_support_into_water() {
    let mut game = new_game(&[
        ("Turkey", UnitType::Fleet, "ION"),
        ("Italy", UnitType::Fleet, "Ven"),
    ]);
    game.add_move_order("Turkey", "ION", "ADR").unwrap();
    game.add_support_order("Italy", "Ven", "ION", "ADR").unwrap();

    let mv = order_of(&game, "Turkey", "ION");
    assert_eq!(game.strength(&mv), 2);
}

#[test]
fn strength_reads_map_directly() {
    let mut game = new_game(&[
        ("Austria", UnitType::Army, "Vie"),
        ("Austria", UnitType::Army, "Bud"),
    ]);
    game.add_hold_order("Austria", "Vie").unwrap();
    game.add_support_order("Austria", "Bud", "Vie", "Vie").unwrap();

    let hold = order_of(&game, "Austria", "Vie");
    assert_eq!(strength(&hold, game.map()), game.strength(&hold));
}

#[test]
fn adjudication_reports_pre_move_strengths() {
    let mut game = new_game(&[
        ("Austria", UnitType::Army, "Vie"),
        ("Austria", UnitType::Army, "Bud"),
        ("Italy", UnitType::Army, "Ven"),
    ]);
    game.add_move_order("Austria", "Vie", "Tri").unwrap();
    game.add_support_order("Austria", "Bud", "Vie", "Tri").unwrap();
    game.add_support_order("Italy", "Ven", "Vie", "Tri").unwrap();

    let resolved = game.adjudicate().unwrap();

    let mv = resolved.iter().find(|r| r.order.is_move()).unwrap();
    assert_eq!(mv.strength, 3);
    assert_eq!(game.map().unit("Tri").unwrap().nation, "Austria");
}
