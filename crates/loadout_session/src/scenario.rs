//! Starting gear and animals granted by the scenario.

use loadout_foundation::DefName;
use loadout_storage::EquipmentKey;

/// One scenario part the session turns into selections.
#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioStep {
    /// Things scattered near the starting location.
    ScatterNearStart {
        /// Item template.
        thing: DefName,
        /// Material template.
        stuff: Option<DefName>,
        /// Number of units.
        count: u32,
    },
    /// Things placed with the starting colonists.
    StartWithColonists {
        /// Item template.
        thing: DefName,
        /// Material template.
        stuff: Option<DefName>,
        /// Number of units.
        count: u32,
    },
    /// Animals arriving with the colonists. No kind means a random pet each.
    StartingAnimal {
        /// Animal kind.
        kind: Option<DefName>,
        /// Number of animals.
        count: u32,
    },
}

impl ScenarioStep {
    /// Returns the equipment key and count for thing-granting steps.
    #[must_use]
    pub fn equipment(&self) -> Option<(EquipmentKey, u32)> {
        match self {
            Self::ScatterNearStart { thing, stuff, count }
            | Self::StartWithColonists { thing, stuff, count } => {
                Some((EquipmentKey::new(thing.clone(), stuff.clone()), *count))
            }
            Self::StartingAnimal { .. } => None,
        }
    }
}

/// Yields the scenario's steps in order.
pub trait ScenarioScanner {
    /// Returns every step the session should load.
    fn steps(&self) -> Vec<ScenarioStep>;
}

impl ScenarioScanner for [ScenarioStep] {
    fn steps(&self) -> Vec<ScenarioStep> {
        self.to_vec()
    }
}

impl ScenarioScanner for Vec<ScenarioStep> {
    fn steps(&self) -> Vec<ScenarioStep> {
        self.clone()
    }
}
