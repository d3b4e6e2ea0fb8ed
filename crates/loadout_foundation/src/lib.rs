//! Core keys, identifiers, colors, and errors for Loadout.
//!
//! This crate provides:
//! - [`DefName`] - Stable template keys used for every cache and map
//! - [`SourceId`] / [`PawnId`] - Identities for source and editable pawns
//! - [`Gender`] and [`Color`] - Small value types shared by every layer
//! - [`Error`] - Error types with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod color;
pub mod entity;
pub mod error;
pub mod key;

pub use color::Color;
pub use entity::{Gender, PawnId};
pub use error::{Error, ErrorKind, Result};
pub use key::{DefName, SourceId};
