//! Pawn roster, identity map, and selection registry for Loadout.
//!
//! This crate provides:
//! - [`CustomPawn`] / [`SourcePawn`] - Editable pawns and the records they copy
//! - [`Roster`] - The session's owned list of editable pawns
//! - [`IdentityMap`] - Two-way association between pawns and their sources
//! - [`SelectionSet`] - Selection collections with deferred removal
//! - Equipment and animal records keyed by [`EquipmentKey`] / [`AnimalRecordKey`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod identity;
pub mod pawn;
pub mod record;
pub mod roster;
pub mod selection;

pub use identity::IdentityMap;
pub use pawn::{CustomPawn, PawnType, SourcePawn};
pub use record::{AnimalRecord, AnimalRecordKey, EquipmentKey, EquipmentRecord};
pub use roster::Roster;
pub use selection::{
    AddOutcome, AnimalSelections, EquipmentSelection, EquipmentSelections, PetSelections,
    SelectedAnimal, SelectedPet, Selection, SelectionSet, Stackable,
};
