//! Race capability lookup and cached appearance resolution for Loadout.
//!
//! This crate provides:
//! - [`RaceCapabilityProvider`] - Per-race appearance overrides, with [`CapabilityTable`]
//! - [`TemplateCatalog`] - The environment's races and hair styles, with [`TemplateSet`]
//! - [`HairProvider`] - Resolves and caches [`RaceHairs`] per race

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod capability;
pub mod catalog;
pub mod hair;

pub use capability::{CapabilityRecord, CapabilityTable, RaceCapabilityProvider};
pub use catalog::{HairDef, HairGender, TemplateCatalog, TemplateSet};
pub use hair::{DEFAULT_HAIR_COLORS, HairProvider, RaceHairs};
