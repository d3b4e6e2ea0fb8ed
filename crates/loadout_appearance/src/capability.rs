//! Race-specific appearance capabilities.

use std::collections::{BTreeSet, HashMap};

use loadout_foundation::{Color, DefName};

/// Appearance overrides for one race.
#[derive(Clone, Debug, PartialEq)]
pub struct CapabilityRecord {
    /// Whether the race has hair at all.
    pub has_hair: bool,
    /// Hair tags the race is restricted to, if restricted.
    pub hair_tags: Option<BTreeSet<String>>,
    /// Custom hair palette, if the race defines one.
    pub hair_colors: Option<Vec<Color>>,
}

impl Default for CapabilityRecord {
    fn default() -> Self {
        Self {
            has_hair: true,
            hair_tags: None,
            hair_colors: None,
        }
    }
}

impl CapabilityRecord {
    /// A record for a race with unrestricted hair and the default palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A record for a race without hair.
    #[must_use]
    pub fn hairless() -> Self {
        Self {
            has_hair: false,
            ..Self::default()
        }
    }

    /// Builder method to restrict hair to the given tags.
    #[must_use]
    pub fn with_hair_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hair_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method to set a custom palette.
    #[must_use]
    pub fn with_hair_colors(mut self, colors: Vec<Color>) -> Self {
        self.hair_colors = Some(colors);
        self
    }
}

/// Answers which races carry appearance overrides.
pub trait RaceCapabilityProvider {
    /// Returns the race's override record, if it has one.
    fn capability_record(&self, race: &DefName) -> Option<&CapabilityRecord>;

    /// Returns true if the race has an override record.
    fn has_capability_record(&self, race: &DefName) -> bool {
        self.capability_record(race).is_some()
    }
}

/// In-memory [`RaceCapabilityProvider`].
#[derive(Clone, Debug, Default)]
pub struct CapabilityTable {
    records: HashMap<DefName, CapabilityRecord>,
}

impl CapabilityTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to register a race's record.
    #[must_use]
    pub fn with(mut self, race: impl Into<DefName>, record: CapabilityRecord) -> Self {
        self.insert(race, record);
        self
    }

    /// Registers or replaces a race's record.
    pub fn insert(&mut self, race: impl Into<DefName>, record: CapabilityRecord) {
        self.records.insert(race.into(), record);
    }
}

impl RaceCapabilityProvider for CapabilityTable {
    fn capability_record(&self, race: &DefName) -> Option<&CapabilityRecord> {
        self.records.get(race)
    }
}
