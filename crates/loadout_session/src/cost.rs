//! Cost aggregation.
//!
//! Nothing is cached between calls: selections can be edited in place by the
//! editor without any change notification, so every query resets the
//! [`CostDetails`] and rebuilds it from the roster and selections.

use loadout_foundation::PawnId;
use loadout_storage::{CustomPawn, EquipmentSelection, SelectedAnimal, Stackable};

/// Valuation of a single pawn (body, skills, worn gear).
pub trait PawnCostModel {
    /// Returns the pawn's cost.
    fn cost_of(&self, pawn: &CustomPawn) -> f64;
}

impl<F> PawnCostModel for F
where
    F: Fn(&CustomPawn) -> f64,
{
    fn cost_of(&self, pawn: &CustomPawn) -> f64 {
        self(pawn)
    }
}

/// The build's cost, recomputed on every query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostDetails {
    /// Sum of every part below.
    pub total: f64,
    /// Sum of pawn valuations.
    pub pawns: f64,
    /// Sum of equipment selections.
    pub equipment: f64,
    /// Sum of animal selections.
    pub animals: f64,
    /// Each pawn's valuation, in roster order.
    pub per_pawn: Vec<(PawnId, f64)>,
}

impl CostDetails {
    /// Zeroes every field.
    pub fn reset(&mut self) {
        self.total = 0.0;
        self.pawns = 0.0;
        self.equipment = 0.0;
        self.animals = 0.0;
        self.per_pawn.clear();
    }

    /// The total with its fractional part dropped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncated_total(&self) -> i64 {
        self.total.trunc() as i64
    }

    /// Points left from `starting_points` after paying the truncated total.
    ///
    /// Saturates at the `i64` bounds.
    #[must_use]
    pub fn points_remaining(&self, starting_points: i64) -> i64 {
        starting_points.saturating_sub(self.truncated_total())
    }
}

/// Sums in ascending order so the result does not depend on input order.
fn ordered_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

/// Computes [`CostDetails`] from a roster and its selections.
pub struct CostCalculator {
    model: Box<dyn PawnCostModel>,
}

impl CostCalculator {
    /// Creates a calculator that values pawns with `model`.
    #[must_use]
    pub fn new(model: Box<dyn PawnCostModel>) -> Self {
        Self { model }
    }

    /// Resets `into` and recomputes it.
    pub fn calculate(
        &self,
        into: &mut CostDetails,
        pawns: &[CustomPawn],
        equipment: &[EquipmentSelection],
        animals: &[SelectedAnimal],
    ) {
        into.reset();
        into.per_pawn = pawns
            .iter()
            .map(|pawn| (pawn.id(), self.model.cost_of(pawn)))
            .collect();
        into.pawns = ordered_sum(into.per_pawn.iter().map(|(_, cost)| *cost).collect());
        into.equipment = ordered_sum(
            equipment
                .iter()
                .map(|s| s.record().unit_cost() * f64::from(s.count()))
                .collect(),
        );
        into.animals = ordered_sum(
            animals
                .iter()
                .map(|s| s.record().unit_cost() * f64::from(s.count()))
                .collect(),
        );
        into.total = into.pawns + into.equipment + into.animals;
    }
}

impl std::fmt::Debug for CostCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CostCalculator").finish_non_exhaustive()
    }
}
