//! The session's owned list of editable pawns.
//!
//! The roster allocates [`PawnId`]s sequentially and never reuses them, so a
//! pawn removed from the roster can't be confused with a later one.

use loadout_foundation::{DefName, Gender, PawnId};

use crate::pawn::{CustomPawn, PawnType, SourcePawn};

/// Ordered collection of editable pawns.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    pawns: Vec<CustomPawn>,
    next_index: u64,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> PawnId {
        let id = PawnId::new(self.next_index);
        self.next_index += 1;
        id
    }

    /// Copies a source pawn into the roster, returns the new pawn's ID.
    pub fn spawn_copy(&mut self, source: &SourcePawn, pawn_type: PawnType) -> PawnId {
        let id = self.allocate();
        self.pawns.push(CustomPawn::copy_of(id, source, pawn_type));
        id
    }

    /// Creates a pawn with no source record, returns its ID.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        race: DefName,
        gender: Gender,
        pawn_type: PawnType,
    ) -> PawnId {
        let id = self.allocate();
        let mut pawn = CustomPawn::new(id, name, race, gender);
        pawn.set_pawn_type(pawn_type);
        self.pawns.push(pawn);
        id
    }

    /// Looks up a pawn.
    #[must_use]
    pub fn get(&self, id: PawnId) -> Option<&CustomPawn> {
        self.pawns.iter().find(|p| p.id() == id)
    }

    /// Looks up a pawn for editing.
    pub fn get_mut(&mut self, id: PawnId) -> Option<&mut CustomPawn> {
        self.pawns.iter_mut().find(|p| p.id() == id)
    }

    /// Removes a pawn, returning it if it was present.
    pub fn remove(&mut self, id: PawnId) -> Option<CustomPawn> {
        let pos = self.pawns.iter().position(|p| p.id() == id)?;
        Some(self.pawns.remove(pos))
    }

    /// Removes every pawn. IDs keep counting from where they were.
    pub fn clear(&mut self) {
        self.pawns.clear();
    }

    /// Returns all pawns in insertion order.
    #[must_use]
    pub fn pawns(&self) -> &[CustomPawn] {
        &self.pawns
    }

    /// Iterates over pawns with the given type tag.
    pub fn of_type(&self, pawn_type: PawnType) -> impl Iterator<Item = &CustomPawn> + '_ {
        self.pawns.iter().filter(move |p| p.pawn_type() == pawn_type)
    }

    /// Returns the number of pawns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pawns.len()
    }

    /// Returns true if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pawns.is_empty()
    }
}
