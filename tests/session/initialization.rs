//! Tests for session setup, reset, and hair lookups

use loadout_foundation::{DefName, ErrorKind, Gender, SourceId};
use loadout_session::{ScenarioStep, SessionConfig};
use loadout_storage::{PawnType, SourcePawn};

use crate::common::{session, session_with, sources};

const NO_STEPS: &[ScenarioStep] = &[];

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn initialize_splits_colony_and_world() {
    let mut session = session();
    session.initialize(&sources(), 2, NO_STEPS).unwrap();

    assert!(session.is_initialized());
    assert_eq!(session.pawns().len(), 3);
    assert_eq!(session.colony_pawns().len(), 2);
    assert_eq!(session.world_pawns().len(), 1);
    assert!(session.hidden_pawns().is_empty());
}

#[test]
fn identity_map_links_both_ways() {
    let mut session = session();
    session.initialize(&sources(), 2, NO_STEPS).unwrap();

    for source in sources() {
        let pawn = session.find_pawn(&source.id).unwrap();
        assert_eq!(session.find_source(pawn).map(|s| &s.id), Some(&source.id));
        assert_eq!(session.pawn(pawn).unwrap().name(), source.name);
    }
    assert!(session.find_pawn(&SourceId::new("stranger")).is_none());
}

#[test]
fn second_initialize_is_rejected() {
    let mut session = session();
    session.initialize(&sources(), 2, NO_STEPS).unwrap();

    let err = session.initialize(&sources(), 2, NO_STEPS).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AlreadyInitialized));
    assert_eq!(session.pawns().len(), 3);
}

#[test]
fn duplicate_source_leaves_session_untouched() {
    let mut session = session();
    let mut starting = sources();
    starting.push(SourcePawn::new("c1", "Copy", "Human", Gender::Male));

    let err = session.initialize(&starting, 2, NO_STEPS).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateSource(_)));
    assert!(!session.is_initialized());
    assert!(session.pawns().is_empty());

    session.initialize(&sources(), 2, NO_STEPS).unwrap();
    assert_eq!(session.pawns().len(), 3);
}

#[test]
fn invalid_config_is_rejected() {
    let config = SessionConfig::default().with_baseline_race("");
    let err = loadout_session::Session::new(
        config,
        crate::common::collaborators(crate::common::things()),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
}

// =============================================================================
// Reset and Flags
// =============================================================================

#[test]
fn reset_drops_state_and_allows_reinitialize() {
    let mut session = session();
    session.initialize(&sources(), 2, NO_STEPS).unwrap();
    session.set_active(true);
    session.set_filename("colony.xml");
    session.race_hairs(&DefName::new("Human")).unwrap();

    session.reset();
    assert!(!session.is_initialized());
    assert!(!session.is_active());
    assert!(session.filename().is_none());
    assert!(session.pawns().is_empty());
    assert!(session.find_pawn(&SourceId::new("c1")).is_none());

    session.initialize(&sources()[..1], 1, NO_STEPS).unwrap();
    assert_eq!(session.pawns().len(), 1);
}

#[test]
fn added_pawns_get_fresh_ids() {
    let mut session = session();
    session.initialize(&sources(), 2, NO_STEPS).unwrap();

    let extra = session.add_pawn("Cy", "Human", Gender::Male, PawnType::Hidden);
    assert_eq!(session.hidden_pawns().len(), 1);
    assert!(session.find_source(extra).is_none());
    assert!(session.pawns().iter().filter(|p| p.id() == extra).count() == 1);

    let removed = session.remove_pawn(extra).unwrap();
    assert_eq!(removed.name(), "Cy");
    assert!(session.pawn(extra).is_none());
}

#[test]
fn removed_pawn_keeps_its_association_until_reset() {
    let mut session = session();
    session.initialize(&sources(), 2, NO_STEPS).unwrap();

    let bo = session.find_pawn(&SourceId::new("c2")).unwrap();
    session.remove_pawn(bo).unwrap();
    assert_eq!(session.find_pawn(&SourceId::new("c2")), Some(bo));
    assert!(session.pawn(bo).is_none());
    assert!(session.remove_pawn(bo).is_none());

    session.clear_pawns();
    assert!(session.pawns().is_empty());
    assert!(session.find_pawn(&SourceId::new("c1")).is_some());

    session.reset();
    assert!(session.find_pawn(&SourceId::new("c1")).is_none());
}

// =============================================================================
// Hair
// =============================================================================

#[test]
fn hair_options_follow_pawn_race_and_gender() {
    let mut session = session();
    session.initialize(&sources(), 2, NO_STEPS).unwrap();

    let ann = session.find_pawn(&SourceId::new("c1")).unwrap();
    let names: Vec<String> = session
        .hair_options(ann)
        .into_iter()
        .map(|h| h.name.to_string())
        .collect();
    assert_eq!(names, vec!["Braids", "Mop"]);

    let lizard = session.find_pawn(&SourceId::new("c3")).unwrap();
    let names: Vec<String> = session
        .hair_options(lizard)
        .into_iter()
        .map(|h| h.name.to_string())
        .collect();
    assert_eq!(names, vec!["Frill"]);
}

#[test]
fn unknown_race_uses_baseline_hair() {
    let mut session = session_with(SessionConfig::default().with_baseline_race("Human"));
    let ghost = session.hair_options_for(&DefName::new("Ghost"), Gender::Male);
    let human = session.hair_options_for(&DefName::new("Human"), Gender::Male);
    assert_eq!(ghost, human);
    assert!(!ghost.is_empty());
}
