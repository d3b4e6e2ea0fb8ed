//! Editable pawns and the source records they are copied from.

use loadout_foundation::{Color, DefName, Gender, PawnId, SourceId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a pawn sits in the build.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PawnType {
    /// Member of the starting colony.
    #[default]
    Colonist,
    /// Reserve pawn left in the world.
    World,
    /// Pawn that exists only to anchor a relationship.
    Hidden,
    /// Placeholder created while editing.
    Temporary,
}

/// Read-only pawn record supplied by the host.
///
/// Never mutated by the core. It is the origin of the one-time copy and
/// the key for [`crate::IdentityMap`] lookups.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourcePawn {
    /// Stable identity.
    pub id: SourceId,
    /// Display name.
    pub name: String,
    /// Race template.
    pub race: DefName,
    /// Gender.
    pub gender: Gender,
    /// Hair style template, if any.
    pub hair: Option<DefName>,
    /// Hair color, if any.
    pub hair_color: Option<Color>,
}

impl SourcePawn {
    /// Creates a source record with no hair set.
    #[must_use]
    pub fn new(
        id: impl Into<SourceId>,
        name: impl Into<String>,
        race: impl Into<DefName>,
        gender: Gender,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            race: race.into(),
            gender,
            hair: None,
            hair_color: None,
        }
    }

    /// Builder method to set the hair style.
    #[must_use]
    pub fn with_hair(mut self, hair: impl Into<DefName>) -> Self {
        self.hair = Some(hair.into());
        self
    }

    /// Builder method to set the hair color.
    #[must_use]
    pub fn with_hair_color(mut self, color: Color) -> Self {
        self.hair_color = Some(color);
        self
    }
}

/// The editable pawn the user works on.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CustomPawn {
    id: PawnId,
    pawn_type: PawnType,
    name: String,
    race: DefName,
    gender: Gender,
    hair: Option<DefName>,
    hair_color: Option<Color>,
}

impl CustomPawn {
    /// Creates a pawn that has no source record.
    #[must_use]
    pub fn new(id: PawnId, name: impl Into<String>, race: DefName, gender: Gender) -> Self {
        Self {
            id,
            pawn_type: PawnType::Colonist,
            name: name.into(),
            race,
            gender,
            hair: None,
            hair_color: None,
        }
    }

    /// Copies a source record into a new editable pawn.
    #[must_use]
    pub fn copy_of(id: PawnId, source: &SourcePawn, pawn_type: PawnType) -> Self {
        Self {
            id,
            pawn_type,
            name: source.name.clone(),
            race: source.race.clone(),
            gender: source.gender,
            hair: source.hair.clone(),
            hair_color: source.hair_color,
        }
    }

    /// Returns the pawn's identity.
    #[must_use]
    pub const fn id(&self) -> PawnId {
        self.id
    }

    /// Returns the pawn's type tag.
    #[must_use]
    pub const fn pawn_type(&self) -> PawnType {
        self.pawn_type
    }

    /// Sets the pawn's type tag.
    pub fn set_pawn_type(&mut self, pawn_type: PawnType) {
        self.pawn_type = pawn_type;
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the race template.
    #[must_use]
    pub const fn race(&self) -> &DefName {
        &self.race
    }

    /// Returns the gender.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Sets the gender.
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Returns the hair style, if any.
    #[must_use]
    pub const fn hair(&self) -> Option<&DefName> {
        self.hair.as_ref()
    }

    /// Sets the hair style.
    pub fn set_hair(&mut self, hair: Option<DefName>) {
        self.hair = hair;
    }

    /// Returns the hair color, if any.
    #[must_use]
    pub const fn hair_color(&self) -> Option<Color> {
        self.hair_color
    }

    /// Sets the hair color.
    pub fn set_hair_color(&mut self, color: Option<Color>) {
        self.hair_color = color;
    }
}
