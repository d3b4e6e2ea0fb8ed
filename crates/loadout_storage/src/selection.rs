//! Selection collections with deferred removal.
//!
//! A [`SelectionSet`] holds the live selections for one kind of thing
//! (equipment, animals, pets). Removal is two-phase:
//!
//! 1. [`SelectionSet::remove`] only queues the entry's key.
//! 2. Every observation ([`SelectionSet::read`], [`SelectionSet::find`],
//!    and every add) first drains the queue, removing each queued entry.
//!
//! Callers can therefore queue removals while iterating over a previous
//! read without invalidating it, and the next observation always reflects
//! every removal requested since the last one. Removing something that is
//! not selected is a silent no-op.
//!
//! Equipment and animals are [`Stackable`]: adding an already-selected key
//! merges into the existing entry, so there is at most one entry per key.
//! Pets are individuals and are only ever appended.

use loadout_foundation::DefName;
use loadout_foundation::Gender;
use tracing::trace;

use crate::record::{AnimalRecord, AnimalRecordKey, EquipmentKey, EquipmentRecord};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An entry in a [`SelectionSet`], identified by a key.
pub trait Selection {
    /// Identity used for lookup and removal.
    type Key: PartialEq + Clone;

    /// Returns this entry's identity.
    fn key(&self) -> &Self::Key;
}

/// A selection whose count grows when the same key is added again.
pub trait Stackable: Selection {
    /// Increases the count by `amount`.
    fn add_count(&mut self, amount: u32);

    /// Returns the current count.
    fn count(&self) -> u32;
}

/// Result of an add.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was created.
    Inserted,
    /// The count of an existing entry was increased.
    Merged,
    /// Nothing was added (absent record).
    Rejected,
}

impl AddOutcome {
    /// Returns true unless the add was rejected.
    #[must_use]
    pub const fn is_added(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Live selections plus the queue of pending removals.
#[derive(Clone, Debug)]
pub struct SelectionSet<S: Selection> {
    live: Vec<S>,
    pending: Vec<S::Key>,
}

impl<S: Selection> Default for SelectionSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Selection> SelectionSet<S> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Applies queued removals, then returns the live selections.
    pub fn read(&mut self) -> &[S] {
        self.drain_removals();
        &self.live
    }

    /// Applies queued removals, then returns the live selections for editing.
    pub fn read_mut(&mut self) -> &mut [S] {
        self.drain_removals();
        &mut self.live
    }

    /// Finds the live entry with the given key.
    pub fn find(&mut self, key: &S::Key) -> Option<&S> {
        self.drain_removals();
        self.live.iter().find(|s| s.key() == key)
    }

    /// Finds the live entry with the given key for editing.
    pub fn find_mut(&mut self, key: &S::Key) -> Option<&mut S> {
        self.drain_removals();
        self.live.iter_mut().find(|s| s.key() == key)
    }

    /// Queues an entry for removal at the next observation.
    pub fn remove(&mut self, selection: &S) {
        self.pending.push(selection.key().clone());
    }

    /// Queues the entry with the given key for removal at the next observation.
    pub fn remove_key(&mut self, key: S::Key) {
        self.pending.push(key);
    }

    /// Returns the number of queued removals.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.pending.len()
    }

    /// Appends an entry without merging.
    pub fn push(&mut self, selection: S) {
        self.drain_removals();
        self.live.push(selection);
    }

    /// Drops every entry and every queued removal.
    pub fn clear(&mut self) {
        self.live.clear();
        self.pending.clear();
    }

    fn drain_removals(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let queued = self.pending.len();
        let before = self.live.len();
        for key in self.pending.drain(..) {
            if let Some(pos) = self.live.iter().position(|s| s.key() == &key) {
                self.live.remove(pos);
            }
        }
        trace!(
            queued,
            removed = before - self.live.len(),
            "drained pending removals"
        );
    }
}

impl<S: Stackable> SelectionSet<S> {
    /// Merges `count` into the entry for `key`, or inserts `create(count)`.
    pub fn add_stacked(
        &mut self,
        key: &S::Key,
        count: u32,
        create: impl FnOnce(u32) -> S,
    ) -> AddOutcome {
        self.drain_removals();
        if let Some(existing) = self.live.iter_mut().find(|s| s.key() == key) {
            existing.add_count(count);
            return AddOutcome::Merged;
        }
        self.live.push(create(count));
        AddOutcome::Inserted
    }
}

// =============================================================================
// Equipment
// =============================================================================

/// A selected equipment record and how many units of it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquipmentSelection {
    record: EquipmentRecord,
    count: u32,
}

impl EquipmentSelection {
    /// Creates a selection.
    #[must_use]
    pub fn new(record: EquipmentRecord, count: u32) -> Self {
        Self { record, count }
    }

    /// Returns the selected record.
    #[must_use]
    pub const fn record(&self) -> &EquipmentRecord {
        &self.record
    }

    /// Sets the count directly.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }
}

impl Selection for EquipmentSelection {
    type Key = EquipmentKey;

    fn key(&self) -> &EquipmentKey {
        self.record.key()
    }
}

impl Stackable for EquipmentSelection {
    fn add_count(&mut self, amount: u32) {
        self.count = self.count.saturating_add(amount);
    }

    fn count(&self) -> u32 {
        self.count
    }
}

/// Selected equipment.
pub type EquipmentSelections = SelectionSet<EquipmentSelection>;

impl SelectionSet<EquipmentSelection> {
    /// Adds one canonical stack of `record`.
    pub fn add_record(&mut self, record: Option<&EquipmentRecord>) -> AddOutcome {
        match record {
            Some(record) => self.add_record_count(Some(record), record.stack_size()),
            None => AddOutcome::Rejected,
        }
    }

    /// Adds `count` units of `record`.
    pub fn add_record_count(&mut self, record: Option<&EquipmentRecord>, count: u32) -> AddOutcome {
        let Some(record) = record else {
            return AddOutcome::Rejected;
        };
        self.add_stacked(record.key(), count, |count| {
            EquipmentSelection::new(record.clone(), count)
        })
    }
}

// =============================================================================
// Animals
// =============================================================================

/// A selected animal variant and how many of them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectedAnimal {
    record: AnimalRecord,
    count: u32,
}

impl SelectedAnimal {
    /// Creates a selection.
    #[must_use]
    pub fn new(record: AnimalRecord, count: u32) -> Self {
        Self { record, count }
    }

    /// Returns the selected record.
    #[must_use]
    pub const fn record(&self) -> &AnimalRecord {
        &self.record
    }

    /// Sets the count directly.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }
}

impl Selection for SelectedAnimal {
    type Key = AnimalRecordKey;

    fn key(&self) -> &AnimalRecordKey {
        self.record.key()
    }
}

impl Stackable for SelectedAnimal {
    fn add_count(&mut self, amount: u32) {
        self.count = self.count.saturating_add(amount);
    }

    fn count(&self) -> u32 {
        self.count
    }
}

/// Selected animals.
pub type AnimalSelections = SelectionSet<SelectedAnimal>;

impl SelectionSet<SelectedAnimal> {
    /// Adds one animal of `record`'s variant.
    pub fn add_record(&mut self, record: Option<&AnimalRecord>) -> AddOutcome {
        self.add_record_count(record, 1)
    }

    /// Adds `count` animals of `record`'s variant.
    pub fn add_record_count(&mut self, record: Option<&AnimalRecord>, count: u32) -> AddOutcome {
        let Some(record) = record else {
            return AddOutcome::Rejected;
        };
        self.add_stacked(record.key(), count, |count| {
            SelectedAnimal::new(record.clone(), count)
        })
    }
}

// =============================================================================
// Pets
// =============================================================================

/// An individually identified pet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectedPet {
    /// Opaque identity.
    pub id: String,
    /// Given name.
    pub name: String,
    /// Animal race template.
    pub kind: DefName,
    /// Gender.
    pub gender: Gender,
}

impl SelectedPet {
    /// Creates a pet.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<DefName>,
        gender: Gender,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            gender,
        }
    }
}

impl Selection for SelectedPet {
    type Key = String;

    fn key(&self) -> &String {
        &self.id
    }
}

/// Selected pets.
pub type PetSelections = SelectionSet<SelectedPet>;
