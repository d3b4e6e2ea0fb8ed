//! Integration tests for the roster
//!
//! Tests copying, editing, filtering, and removing pawns.

use loadout_foundation::{DefName, Gender};
use loadout_storage::{PawnType, Roster, SourcePawn};

#[test]
fn copies_are_independent_of_each_other() {
    let source = SourcePawn::new("s1", "Ann", "Human", Gender::Female);
    let mut roster = Roster::new();
    let a = roster.spawn_copy(&source, PawnType::Colonist);
    let b = roster.spawn_copy(&source, PawnType::Colonist);

    roster.get_mut(a).unwrap().set_name("Changed");
    assert_eq!(roster.get(a).unwrap().name(), "Changed");
    assert_eq!(roster.get(b).unwrap().name(), "Ann");
}

#[test]
fn pawns_keep_insertion_order() {
    let mut roster = Roster::new();
    for name in ["a", "b", "c"] {
        roster.spawn(name, DefName::new("Human"), Gender::None, PawnType::Colonist);
    }
    let names: Vec<&str> = roster.pawns().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn retagging_moves_pawn_between_views() {
    let mut roster = Roster::new();
    let id = roster.spawn("a", DefName::new("Human"), Gender::None, PawnType::Colonist);
    roster.get_mut(id).unwrap().set_pawn_type(PawnType::Hidden);

    assert_eq!(roster.of_type(PawnType::Colonist).count(), 0);
    assert_eq!(roster.of_type(PawnType::Hidden).count(), 1);
}

#[test]
fn clear_empties_roster() {
    let mut roster = Roster::new();
    roster.spawn("a", DefName::new("Human"), Gender::None, PawnType::Colonist);
    roster.clear();
    assert!(roster.is_empty());
}
