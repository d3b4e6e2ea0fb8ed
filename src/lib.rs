//! Loadout - State and valuation core for a character-build tool
//!
//! This crate re-exports all layers of the Loadout system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: loadout_session     — Cost aggregation, scenario loading, session control
//! Layer 2: loadout_appearance  — Race capabilities, cached hair resolution
//! Layer 1: loadout_storage     — Roster, identity map, selection registry
//! Layer 0: loadout_foundation  — Core types (DefName, PawnId, Color, Error)
//! ```

pub use loadout_appearance as appearance;
pub use loadout_foundation as foundation;
pub use loadout_session as session;
pub use loadout_storage as storage;
