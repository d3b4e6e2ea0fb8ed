//! The environment's race and hair style templates.

use loadout_foundation::DefName;

/// Which pawns a hair style is meant for.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum HairGender {
    /// Only male pawns.
    Male,
    /// Mostly male pawns.
    MaleUsually,
    /// Any pawn.
    #[default]
    Any,
    /// Mostly female pawns.
    FemaleUsually,
    /// Only female pawns.
    Female,
}

/// A hair style template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HairDef {
    /// Canonical name.
    pub name: DefName,
    /// Display label.
    pub label: String,
    /// Intended gender.
    pub gender: HairGender,
    /// Style tags races may restrict on.
    pub tags: Vec<String>,
}

impl HairDef {
    /// Creates a hair style labelled with its name.
    #[must_use]
    pub fn new<I, S>(name: impl Into<DefName>, gender: HairGender, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        Self {
            label: name.as_str().to_lowercase(),
            name,
            gender,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Builder method to set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns true if any of this style's tags satisfies `pred`.
    pub fn any_tag(&self, mut pred: impl FnMut(&str) -> bool) -> bool {
        self.tags.iter().any(|tag| pred(tag))
    }
}

/// Enumerates the environment's templates.
pub trait TemplateCatalog {
    /// Every humanlike race template.
    fn races(&self) -> &[DefName];

    /// Every hair style template.
    fn hair_styles(&self) -> &[HairDef];

    /// Returns true if the race is known.
    fn has_race(&self, race: &DefName) -> bool {
        self.races().contains(race)
    }
}

/// In-memory [`TemplateCatalog`].
#[derive(Clone, Debug, Default)]
pub struct TemplateSet {
    races: Vec<DefName>,
    hair_styles: Vec<HairDef>,
}

impl TemplateSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a race.
    #[must_use]
    pub fn with_race(mut self, race: impl Into<DefName>) -> Self {
        self.races.push(race.into());
        self
    }

    /// Builder method to add a hair style.
    #[must_use]
    pub fn with_hair(mut self, hair: HairDef) -> Self {
        self.hair_styles.push(hair);
        self
    }
}

impl TemplateCatalog for TemplateSet {
    fn races(&self) -> &[DefName] {
        &self.races
    }

    fn hair_styles(&self) -> &[HairDef] {
        &self.hair_styles
    }
}
