//! Integration tests for Error types
//!
//! Tests error construction, display, and error kinds.

use loadout_foundation::{Error, ErrorKind, SourceId};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_duplicate_source() {
    let err = Error::duplicate_source(SourceId::new("Colonist7"));
    assert!(matches!(err.kind, ErrorKind::DuplicateSource(_)));
    let msg = format!("{err}");
    assert!(msg.contains("Colonist7"));
}

#[test]
fn error_already_initialized() {
    let err = Error::already_initialized();
    assert!(matches!(err.kind, ErrorKind::AlreadyInitialized));
    assert_eq!(format!("{err}"), "session already initialized");
}

#[test]
fn error_invalid_config() {
    let err = Error::invalid_config("bad seed");
    assert!(matches!(err.kind, ErrorKind::InvalidConfig(_)));
    assert!(format!("{err}").contains("bad seed"));
}

// =============================================================================
// Error Trait
// =============================================================================

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::already_initialized());
}
