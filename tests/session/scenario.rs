//! Tests for scenario loading

use loadout_foundation::{DefName, Gender};
use loadout_session::{ScenarioStep, Session, SessionConfig, ThingTable};
use loadout_storage::{AnimalRecordKey, EquipmentKey, Stackable};

use crate::common::{collaborators, session, sources, steel, things};

fn scatter(thing: &str, stuff: Option<&str>, count: u32) -> ScenarioStep {
    ScenarioStep::ScatterNearStart {
        thing: DefName::new(thing),
        stuff: stuff.map(DefName::new),
        count,
    }
}

#[test]
fn granted_items_become_one_selection() {
    let mut session = session();
    let steps = vec![scatter("Silver", None, 5)];
    session.initialize(&sources(), 2, &steps).unwrap();

    let equipment = session.equipment();
    assert_eq!(equipment.len(), 1);
    assert_eq!(equipment[0].count(), 5);
    assert_eq!(equipment[0].record().key(), &EquipmentKey::new("Silver", None));

    let granted = equipment[0].clone();
    session.remove_equipment(&granted);
    assert!(session.equipment().is_empty());
}

#[test]
fn repeated_grants_merge() {
    let mut session = session();
    let steps = vec![
        scatter("Medicine", None, 3),
        ScenarioStep::StartWithColonists {
            thing: DefName::new("Medicine"),
            stuff: None,
            count: 4,
        },
    ];
    session.initialize(&sources(), 2, &steps).unwrap();

    let equipment = session.equipment();
    assert_eq!(equipment.len(), 1);
    assert_eq!(equipment[0].count(), 7);
}

#[test]
fn unusual_material_gets_non_standard_entry() {
    let mut session = session();
    let steps = vec![scatter("Knife", Some("Jade"), 1)];
    session.initialize(&sources(), 2, &steps).unwrap();

    let jade = EquipmentKey::new("Knife", Some(DefName::new("Jade")));
    assert_eq!(session.find_equipment(&jade).map(Stackable::count), Some(1));
    assert!(session.lookup_equipment(&jade).is_some());
    assert!(session.lookup_equipment(&steel("Knife")).is_some());
}

#[test]
fn unknown_item_is_skipped() {
    let mut session = session();
    let steps = vec![scatter("Ghost", None, 2), scatter("Silver", None, 1)];
    session.initialize(&sources(), 2, &steps).unwrap();

    assert_eq!(session.equipment().len(), 1);
}

#[test]
fn starting_animals_pick_a_variant_each() {
    let mut session = session();
    let steps = vec![ScenarioStep::StartingAnimal {
        kind: Some(DefName::new("Cat")),
        count: 3,
    }];
    session.initialize(&sources(), 2, &steps).unwrap();

    let total: u32 = session.animals().iter().map(Stackable::count).sum();
    assert_eq!(total, 3);
    assert!(session.animals().iter().all(|a| a.record().key().kind.as_str() == "Cat"));
    assert!(session.equipment().is_empty());
}

#[test]
fn random_pet_comes_from_weighted_kinds() {
    let mut session = session();
    let steps = vec![ScenarioStep::StartingAnimal { kind: None, count: 2 }];
    session.initialize(&sources(), 2, &steps).unwrap();

    let total: u32 = session.animals().iter().map(Stackable::count).sum();
    assert_eq!(total, 2);
    assert!(session.find_animal(&AnimalRecordKey::new("Dog", Gender::Male)).is_none());
}

#[test]
fn random_pet_without_kinds_is_skipped() {
    let table = ThingTable::new().with_equipment(
        loadout_storage::EquipmentRecord::new(EquipmentKey::new("Silver", None), "silver", 1.0),
    );
    let mut session = Session::new(SessionConfig::default(), collaborators(table)).unwrap();
    let steps = vec![ScenarioStep::StartingAnimal { kind: None, count: 1 }];
    session.initialize(&sources(), 2, &steps).unwrap();

    assert!(session.animals().is_empty());
}

#[test]
fn same_seed_same_animals() {
    let steps = vec![ScenarioStep::StartingAnimal {
        kind: Some(DefName::new("Cat")),
        count: 6,
    }];
    let load = || {
        let config = SessionConfig::default().with_rng_seed(7);
        let mut session = Session::new(config, collaborators(things())).unwrap();
        session.initialize(&sources(), 2, &steps).unwrap();
        session.animals().to_vec()
    };
    assert_eq!(load(), load());
}
