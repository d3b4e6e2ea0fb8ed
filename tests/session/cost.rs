//! Tests for cost and point budget

use loadout_foundation::{DefName, Gender};
use loadout_session::{ScenarioStep, Session, SessionConfig, ThingTable};
use loadout_storage::{EquipmentKey, EquipmentRecord, PawnType};

use crate::common::{collaborators, session, session_with, sources, steel};

const NO_STEPS: &[ScenarioStep] = &[];

#[test]
fn cost_sums_pawns_equipment_and_animals() {
    let mut session = session();
    let steps = vec![
        ScenarioStep::ScatterNearStart {
            thing: DefName::new("Silver"),
            stuff: None,
            count: 25,
        },
        ScenarioStep::StartingAnimal {
            kind: Some(DefName::new("Dog")),
            count: 1,
        },
    ];
    session.initialize(&sources(), 2, &steps).unwrap();

    let cost = session.cost().clone();
    assert!((cost.pawns - 300.0).abs() < 1e-9);
    assert!((cost.equipment - 25.0).abs() < 1e-9);
    assert!((cost.animals - 60.0).abs() < 1e-9);
    assert!((cost.total - 385.0).abs() < 1e-9);
    assert_eq!(cost.per_pawn.len(), 3);
}

#[test]
fn starting_points_default_to_initial_cost() {
    let mut session = session();
    session.initialize(&sources(), 2, NO_STEPS).unwrap();

    assert_eq!(session.starting_points(), 300);
    assert_eq!(session.points_remaining(), 0);

    let knife = session.lookup_equipment(&steel("Knife"));
    session.add_equipment(knife.as_ref());
    assert_eq!(session.points_remaining(), -20);
}

#[test]
fn configured_starting_points_win() {
    let mut session = session_with(SessionConfig::default().with_starting_points(1000));
    session.initialize(&sources(), 2, NO_STEPS).unwrap();

    assert_eq!(session.starting_points(), 1000);
    assert_eq!(session.points_remaining(), 700);
}

#[test]
fn cost_reflects_edits_without_notification() {
    let mut session = session_with(SessionConfig::default().with_starting_points(1000));
    session.initialize(&sources(), 2, NO_STEPS).unwrap();
    let silver = session.lookup_equipment(&EquipmentKey::new("Silver", None));
    session.add_equipment_count(silver.as_ref(), 10);
    assert_eq!(session.points_remaining(), 690);

    session.equipment_mut()[0].set_count(100);
    assert_eq!(session.points_remaining(), 600);

    session.add_pawn("Cy", "Human", Gender::Male, PawnType::Colonist);
    assert_eq!(session.points_remaining(), 500);
}

#[test]
fn fractional_total_is_truncated() {
    let table = ThingTable::new().with_equipment(EquipmentRecord::new(
        EquipmentKey::new("Herb", None),
        "herb",
        0.6,
    ));
    let config = SessionConfig::default().with_starting_points(10);
    let mut session = Session::new(config, collaborators(table)).unwrap();
    session.initialize(&[], 0, NO_STEPS).unwrap();
    let herb = session.lookup_equipment(&EquipmentKey::new("Herb", None));
    session.add_equipment_count(herb.as_ref(), 3);

    assert!((session.cost().total - 1.8).abs() < 1e-9);
    assert_eq!(session.points_remaining(), 9);

    session.set_starting_points(25);
    assert_eq!(session.points_remaining(), 24);
}

#[test]
fn extreme_budget_does_not_overflow() {
    let mut session = session_with(SessionConfig::default().with_starting_points(i64::MIN));
    session.initialize(&sources(), 2, NO_STEPS).unwrap();
    assert_eq!(session.points_remaining(), i64::MIN);

    session.set_starting_points(i64::MAX);
    assert_eq!(session.points_remaining(), i64::MAX - 300);
}
