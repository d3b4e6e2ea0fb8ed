//! Immutable descriptions of selectable equipment and animals.

use std::fmt;

use loadout_foundation::{DefName, Gender};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity of an equipment kind: item template plus optional material.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquipmentKey {
    /// Item template.
    pub thing: DefName,
    /// Material ("stuff") template, for items made from one.
    pub stuff: Option<DefName>,
}

impl EquipmentKey {
    /// Creates a key.
    #[must_use]
    pub fn new(thing: impl Into<DefName>, stuff: Option<DefName>) -> Self {
        Self {
            thing: thing.into(),
            stuff,
        }
    }
}

impl fmt::Display for EquipmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.stuff {
            Some(stuff) => write!(f, "{}/{}", self.thing, stuff),
            None => write!(f, "{}", self.thing),
        }
    }
}

/// A distinguishable equipment kind with its valuation data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquipmentRecord {
    key: EquipmentKey,
    label: String,
    stack_size: u32,
    unit_cost: f64,
}

impl EquipmentRecord {
    /// Creates a record with a stack size of one.
    #[must_use]
    pub fn new(key: EquipmentKey, label: impl Into<String>, unit_cost: f64) -> Self {
        Self {
            key,
            label: label.into(),
            stack_size: 1,
            unit_cost,
        }
    }

    /// Builder method to set the canonical stack size.
    #[must_use]
    pub fn with_stack_size(mut self, stack_size: u32) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Returns the identity key.
    #[must_use]
    pub const fn key(&self) -> &EquipmentKey {
        &self.key
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the canonical stack size, the default amount for one add.
    #[must_use]
    pub const fn stack_size(&self) -> u32 {
        self.stack_size
    }

    /// Returns the cost of a single unit.
    #[must_use]
    pub const fn unit_cost(&self) -> f64 {
        self.unit_cost
    }
}

/// Identity of an animal selection: kind and gender variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimalRecordKey {
    /// Animal race template.
    pub kind: DefName,
    /// Gender variant.
    pub gender: Gender,
}

impl AnimalRecordKey {
    /// Creates a key.
    #[must_use]
    pub fn new(kind: impl Into<DefName>, gender: Gender) -> Self {
        Self {
            kind: kind.into(),
            gender,
        }
    }
}

/// A selectable animal variant with its valuation data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimalRecord {
    key: AnimalRecordKey,
    label: String,
    unit_cost: f64,
}

impl AnimalRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(key: AnimalRecordKey, label: impl Into<String>, unit_cost: f64) -> Self {
        Self {
            key,
            label: label.into(),
            unit_cost,
        }
    }

    /// Returns the identity key.
    #[must_use]
    pub const fn key(&self) -> &AnimalRecordKey {
        &self.key
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the cost of one animal.
    #[must_use]
    pub const fn unit_cost(&self) -> f64 {
        self.unit_cost
    }
}
