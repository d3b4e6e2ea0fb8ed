//! Per-race hair resolution with memoization.
//!
//! Each race resolves at most once per session to a [`RaceHairs`]:
//!
//! | Race's capability record                  | Result                                   |
//! |-------------------------------------------|------------------------------------------|
//! | none                                      | baseline                                 |
//! | no hair                                   | shared empty result                      |
//! | unrestricted, default palette             | baseline (same `Arc`)                    |
//! | unrestricted, custom palette              | baseline's option lists + custom palette |
//! | restricted to tags                        | own lists, styles matching any tag       |
//!
//! A tag-restricted race keeps its custom palette, or gets
//! [`DEFAULT_HAIR_COLORS`] when it has none. It never ends up colorless.
//!
//! The baseline is every style whose tags are not claimed by any
//! tag-restricted race, with [`DEFAULT_HAIR_COLORS`]. A race unknown to the
//! catalog falls back to the baseline race exactly once; if the baseline race
//! is unknown too, resolution yields `None`.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use loadout_foundation::{Color, DefName, Gender};
use tracing::debug;

use crate::capability::RaceCapabilityProvider;
use crate::catalog::{HairDef, HairGender, TemplateCatalog};

/// Natural hair tones used when a race defines no palette of its own.
pub const DEFAULT_HAIR_COLORS: [Color; 8] = [
    Color::rgb(0.2, 0.2, 0.2),
    Color::rgb(0.31, 0.28, 0.26),
    Color::rgb(0.25, 0.2, 0.15),
    Color::rgb(0.3, 0.2, 0.1),
    Color::rgb(0.352_941_2, 0.227_451, 0.125_490_2),
    Color::rgb(0.517_647_1, 0.325_490_2, 0.184_313_7),
    Color::rgb(0.756_862_8, 0.572_549, 0.333_333_3),
    Color::rgb(0.929_411_8, 0.792_156_9, 0.611_764_7),
];

/// Resolved hair options and palette for one race.
///
/// Option lists are shared, so derived results (a custom palette over the
/// baseline styles) never copy style data.
#[derive(Clone, Debug, Default)]
pub struct RaceHairs {
    male: Arc<[HairDef]>,
    female: Arc<[HairDef]>,
    ungendered: Arc<[HairDef]>,
    colors: Arc<[Color]>,
}

impl RaceHairs {
    /// Groups styles by gender and sorts each group by label, then name.
    #[must_use]
    pub fn from_styles<'a>(styles: impl IntoIterator<Item = &'a HairDef>, colors: &[Color]) -> Self {
        let mut male = Vec::new();
        let mut female = Vec::new();
        let mut ungendered = Vec::new();
        for style in styles {
            match style.gender {
                HairGender::Male | HairGender::MaleUsually => male.push(style.clone()),
                HairGender::Female | HairGender::FemaleUsually => female.push(style.clone()),
                HairGender::Any => ungendered.push(style.clone()),
            }
        }
        for list in [&mut male, &mut female, &mut ungendered] {
            list.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.name.cmp(&b.name)));
        }
        Self {
            male: male.into(),
            female: female.into(),
            ungendered: ungendered.into(),
            colors: colors.into(),
        }
    }

    /// Returns a result with the same option lists and a different palette.
    #[must_use]
    pub fn with_colors(&self, colors: &[Color]) -> Self {
        Self {
            male: Arc::clone(&self.male),
            female: Arc::clone(&self.female),
            ungendered: Arc::clone(&self.ungendered),
            colors: colors.into(),
        }
    }

    /// Styles meant for male pawns.
    #[must_use]
    pub fn male(&self) -> &[HairDef] {
        &self.male
    }

    /// Styles meant for female pawns.
    #[must_use]
    pub fn female(&self) -> &[HairDef] {
        &self.female
    }

    /// Styles meant for anyone.
    #[must_use]
    pub fn ungendered(&self) -> &[HairDef] {
        &self.ungendered
    }

    /// The palette.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Styles available to `gender`: its own list, then the ungendered list.
    ///
    /// `Gender::None` sees every list.
    pub fn options(&self, gender: Gender) -> impl Iterator<Item = &HairDef> + '_ {
        let none: &[HairDef] = &[];
        let (first, second) = match gender {
            Gender::Male => (&self.male[..], none),
            Gender::Female => (&self.female[..], none),
            Gender::None => (&self.male[..], &self.female[..]),
        };
        first.iter().chain(second).chain(self.ungendered.iter())
    }

    /// Returns true if no style is available at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty() && self.ungendered.is_empty()
    }

    /// Returns true if both results share the same option lists.
    #[must_use]
    pub fn shares_options_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.male, &other.male)
            && Arc::ptr_eq(&self.female, &other.female)
            && Arc::ptr_eq(&self.ungendered, &other.ungendered)
    }
}

/// Resolves hair options per race and caches the results.
pub struct HairProvider {
    races: Arc<dyn RaceCapabilityProvider>,
    templates: Arc<dyn TemplateCatalog>,
    baseline_race: DefName,
    cache: HashMap<DefName, Arc<RaceHairs>>,
    humanlike: Option<Arc<RaceHairs>>,
    no_hair: Arc<RaceHairs>,
}

impl HairProvider {
    /// Creates a provider with an empty cache.
    #[must_use]
    pub fn new(
        races: Arc<dyn RaceCapabilityProvider>,
        templates: Arc<dyn TemplateCatalog>,
        baseline_race: DefName,
    ) -> Self {
        Self {
            races,
            templates,
            baseline_race,
            cache: HashMap::new(),
            humanlike: None,
            no_hair: Arc::new(RaceHairs::default()),
        }
    }

    /// Returns the race whose resolution is the fallback for unknown races.
    #[must_use]
    pub fn baseline_race(&self) -> &DefName {
        &self.baseline_race
    }

    /// Resolves a race, falling back to the baseline race once.
    pub fn hairs_for_race(&mut self, race: &DefName) -> Option<Arc<RaceHairs>> {
        if let Some(hairs) = self.resolve(race) {
            return Some(hairs);
        }
        if *race == self.baseline_race {
            debug!(race = %race, "baseline race cannot be resolved");
            return None;
        }
        debug!(race = %race, baseline = %self.baseline_race, "unknown race, using baseline");
        let baseline = self.baseline_race.clone();
        self.resolve(&baseline)
    }

    /// Styles available to `gender` pawns of `race`. Empty when unresolvable.
    pub fn hairs(&mut self, race: &DefName, gender: Gender) -> Vec<HairDef> {
        self.hairs_for_race(race)
            .map(|hairs| hairs.options(gender).cloned().collect())
            .unwrap_or_default()
    }

    /// Number of races resolved so far.
    #[must_use]
    pub fn cached_races(&self) -> usize {
        self.cache.len()
    }

    /// Drops every cached resolution, including the baseline.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.humanlike = None;
    }

    /// Cache lookup, then one build attempt. Never falls back.
    fn resolve(&mut self, race: &DefName) -> Option<Arc<RaceHairs>> {
        if let Some(hairs) = self.cache.get(race) {
            return Some(Arc::clone(hairs));
        }
        let hairs = self.build(race)?;
        debug!(race = %race, styles = hairs.options(Gender::None).count(), "resolved hair");
        self.cache.insert(race.clone(), Arc::clone(&hairs));
        Some(hairs)
    }

    fn build(&mut self, race: &DefName) -> Option<Arc<RaceHairs>> {
        if !self.templates.has_race(race) {
            return None;
        }
        let races = Arc::clone(&self.races);
        let Some(record) = races.capability_record(race) else {
            return Some(self.humanlike());
        };
        if !record.has_hair {
            return Some(Arc::clone(&self.no_hair));
        }
        let hairs = match (&record.hair_tags, &record.hair_colors) {
            (None, None) => return Some(self.humanlike()),
            (None, Some(colors)) => {
                let colors = colors.clone();
                self.humanlike().with_colors(&colors)
            }
            (Some(tags), colors) => {
                let colors = colors.as_deref().unwrap_or(&DEFAULT_HAIR_COLORS);
                let styles = self
                    .templates
                    .hair_styles()
                    .iter()
                    .filter(|style| style.any_tag(|tag| tags.contains(tag)));
                RaceHairs::from_styles(styles, colors)
            }
        };
        Some(Arc::new(hairs))
    }

    /// The baseline resolution, built on first use.
    fn humanlike(&mut self) -> Arc<RaceHairs> {
        if let Some(hairs) = &self.humanlike {
            return Arc::clone(hairs);
        }
        let claimed: BTreeSet<&str> = self
            .templates
            .races()
            .iter()
            .filter_map(|race| self.races.capability_record(race))
            .filter_map(|record| record.hair_tags.as_ref())
            .flatten()
            .map(String::as_str)
            .collect();
        let styles = self
            .templates
            .hair_styles()
            .iter()
            .filter(|style| !style.any_tag(|tag| claimed.contains(tag)));
        let hairs = Arc::new(RaceHairs::from_styles(styles, &DEFAULT_HAIR_COLORS));
        debug!(
            claimed_tags = claimed.len(),
            styles = hairs.options(Gender::None).count(),
            "built baseline hair"
        );
        self.humanlike = Some(Arc::clone(&hairs));
        hairs
    }
}

impl std::fmt::Debug for HairProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HairProvider")
            .field("baseline_race", &self.baseline_race)
            .field("cached_races", &self.cache.len())
            .field("baseline_built", &self.humanlike.is_some())
            .finish_non_exhaustive()
    }
}
