//! Equipment and animal records known to the host.
//!
//! Building the full database (scanning every item definition and
//! classifying it) belongs to the host. The session only needs keyed lookups
//! and a way to admit a scenario item whose material combination the
//! database rejected.

use loadout_foundation::DefName;
use loadout_storage::{AnimalRecord, EquipmentKey, EquipmentRecord};

/// Keyed access to the host's equipment and animal database.
pub trait ThingCatalog {
    /// Looks up the record for an item/material pair.
    fn equipment(&self, key: &EquipmentKey) -> Option<EquipmentRecord>;

    /// Admits an item/material pair the database does not list, modelled on
    /// an existing record for the same item. Returns `None` if the item is
    /// unknown altogether.
    fn add_non_standard(&mut self, key: &EquipmentKey) -> Option<EquipmentRecord>;

    /// Every record variant for an animal kind.
    fn animals(&self, kind: &DefName) -> Vec<AnimalRecord>;

    /// Animal kinds eligible as a random pet, with their selection weight.
    fn pet_kinds(&self) -> Vec<(DefName, f32)>;
}

/// In-memory [`ThingCatalog`].
#[derive(Clone, Debug, Default)]
pub struct ThingTable {
    equipment: Vec<EquipmentRecord>,
    animals: Vec<AnimalRecord>,
    pets: Vec<(DefName, f32)>,
}

impl ThingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an equipment record.
    #[must_use]
    pub fn with_equipment(mut self, record: EquipmentRecord) -> Self {
        self.equipment.push(record);
        self
    }

    /// Builder method to add an animal record.
    #[must_use]
    pub fn with_animal(mut self, record: AnimalRecord) -> Self {
        self.animals.push(record);
        self
    }

    /// Builder method to make an animal kind eligible as a random pet.
    #[must_use]
    pub fn with_pet_kind(mut self, kind: impl Into<DefName>, petness: f32) -> Self {
        self.pets.push((kind.into(), petness));
        self
    }
}

impl ThingCatalog for ThingTable {
    fn equipment(&self, key: &EquipmentKey) -> Option<EquipmentRecord> {
        self.equipment.iter().find(|r| r.key() == key).cloned()
    }

    fn add_non_standard(&mut self, key: &EquipmentKey) -> Option<EquipmentRecord> {
        let template = self.equipment.iter().find(|r| r.key().thing == key.thing)?;
        let record = EquipmentRecord::new(key.clone(), template.label(), template.unit_cost())
            .with_stack_size(template.stack_size());
        self.equipment.push(record.clone());
        Some(record)
    }

    fn animals(&self, kind: &DefName) -> Vec<AnimalRecord> {
        self.animals
            .iter()
            .filter(|r| &r.key().kind == kind)
            .cloned()
            .collect()
    }

    fn pet_kinds(&self) -> Vec<(DefName, f32)> {
        self.pets.clone()
    }
}
