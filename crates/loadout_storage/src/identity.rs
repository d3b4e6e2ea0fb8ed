//! Two-way association between editable pawns and their source records.
//!
//! Maintains bidirectional indices for O(1) lookup:
//! - Forward: pawn -> source record it was copied from
//! - Reverse: source id -> pawn copied from it
//!
//! Both directions are filled once per session by [`IdentityMap::initialize`]
//! and are a bijection over the starting set. Pawns added later (for example
//! by the editor) are not in the map; lookups for them return `None`.

use std::collections::{HashMap, HashSet};

use loadout_foundation::{Error, PawnId, Result, SourceId};
use tracing::debug;

use crate::pawn::{PawnType, SourcePawn};
use crate::roster::Roster;

/// Bidirectional pawn/source index.
#[derive(Clone, Debug, Default)]
pub struct IdentityMap {
    /// Forward index: pawn -> source record.
    forward: HashMap<PawnId, SourcePawn>,
    /// Reverse index: source id -> pawn.
    reverse: HashMap<SourceId, PawnId>,
}

impl IdentityMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies every source pawn into `roster` and records both directions.
    ///
    /// Sources before `split` become colonists; the rest become world pawns.
    /// Any previous contents of the map are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if two sources share an id. The roster is left
    /// untouched in that case.
    pub fn initialize(
        &mut self,
        sources: &[SourcePawn],
        split: usize,
        roster: &mut Roster,
    ) -> Result<()> {
        let mut seen = HashSet::with_capacity(sources.len());
        for source in sources {
            if !seen.insert(&source.id) {
                return Err(Error::duplicate_source(source.id.clone()));
            }
        }

        self.clear();
        for (i, source) in sources.iter().enumerate() {
            let pawn_type = if i < split {
                PawnType::Colonist
            } else {
                PawnType::World
            };
            let id = roster.spawn_copy(source, pawn_type);
            self.forward.insert(id, source.clone());
            self.reverse.insert(source.id.clone(), id);
        }
        debug!(
            pawns = sources.len(),
            colonists = split.min(sources.len()),
            "copied starting pawns"
        );
        Ok(())
    }

    /// Returns the source record a pawn was copied from.
    #[must_use]
    pub fn find_source(&self, pawn: PawnId) -> Option<&SourcePawn> {
        self.forward.get(&pawn)
    }

    /// Returns the pawn copied from a source record.
    #[must_use]
    pub fn find_pawn(&self, source: &SourceId) -> Option<PawnId> {
        self.reverse.get(source).copied()
    }

    /// Returns the number of associations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Drops both indices.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }
}
