//! Session state for one character build.
//!
//! A [`Session`] owns everything one build needs: the roster and its
//! identity map, the three selection collections, the cost state, and the
//! hair cache. Nothing is global; [`Session::reset`] tears all of it down
//! at once before a new build starts.
//!
//! Initialization order matters:
//! 1. Appearance providers are (re)built.
//! 2. Source pawns are copied into the roster.
//! 3. Scenario gear and animals are loaded into the selections.
//! 4. The starting budget is fixed.

use std::sync::Arc;

use loadout_appearance::{HairDef, HairProvider, RaceCapabilityProvider, RaceHairs, TemplateCatalog};
use loadout_foundation::{DefName, Error, Gender, PawnId, Result, SourceId};
use loadout_storage::{
    AddOutcome, AnimalRecord, AnimalRecordKey, AnimalSelections, CustomPawn, EquipmentKey,
    EquipmentRecord, EquipmentSelection, EquipmentSelections, IdentityMap, PawnType,
    PetSelections, Roster, SelectedAnimal, SelectedPet, SourcePawn,
};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::catalog::ThingCatalog;
use crate::config::SessionConfig;
use crate::cost::{CostCalculator, CostDetails, PawnCostModel};
use crate::scenario::{ScenarioScanner, ScenarioStep};

/// External collaborators a session consults.
pub struct Collaborators {
    /// Per-race appearance overrides.
    pub races: Arc<dyn RaceCapabilityProvider>,
    /// The environment's race and hair templates.
    pub templates: Arc<dyn TemplateCatalog>,
    /// Equipment and animal records.
    pub things: Box<dyn ThingCatalog>,
    /// Per-pawn valuation.
    pub pawn_costs: Box<dyn PawnCostModel>,
}

/// State for one character build.
pub struct Session {
    config: SessionConfig,
    races: Arc<dyn RaceCapabilityProvider>,
    templates: Arc<dyn TemplateCatalog>,
    things: Box<dyn ThingCatalog>,
    hair: HairProvider,
    costs: CostCalculator,
    cost: CostDetails,
    roster: Roster,
    identity: IdentityMap,
    equipment: EquipmentSelections,
    animals: AnimalSelections,
    pets: PetSelections,
    starting_points: i64,
    rng: ChaCha8Rng,
    initialized: bool,
    active: bool,
    filename: Option<String>,
}

impl Session {
    /// Creates an uninitialized session.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: SessionConfig, collaborators: Collaborators) -> Result<Self> {
        config.validate()?;
        let Collaborators {
            races,
            templates,
            things,
            pawn_costs,
        } = collaborators;
        let hair = HairProvider::new(
            Arc::clone(&races),
            Arc::clone(&templates),
            config.baseline_race.clone(),
        );
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            starting_points: config.starting_points.unwrap_or(0),
            config,
            races,
            templates,
            things,
            hair,
            costs: CostCalculator::new(pawn_costs),
            cost: CostDetails::default(),
            roster: Roster::new(),
            identity: IdentityMap::new(),
            equipment: EquipmentSelections::new(),
            animals: AnimalSelections::new(),
            pets: PetSelections::new(),
            initialized: false,
            active: false,
            filename: None,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Copies the starting pawns and loads the scenario's gear and animals.
    ///
    /// Sources before `split` join the colony; the rest are world pawns.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is already initialized or if two
    /// sources share an id. No pawn is copied in either case.
    pub fn initialize<S>(&mut self, sources: &[SourcePawn], split: usize, scenario: &S) -> Result<()>
    where
        S: ScenarioScanner + ?Sized,
    {
        if self.initialized {
            return Err(Error::already_initialized());
        }
        self.hair = HairProvider::new(
            Arc::clone(&self.races),
            Arc::clone(&self.templates),
            self.config.baseline_race.clone(),
        );
        self.identity.initialize(sources, split, &mut self.roster)?;
        for step in scenario.steps() {
            self.load_step(&step);
        }
        self.starting_points = match self.config.starting_points {
            Some(points) => points,
            None => self.cost().truncated_total(),
        };
        self.initialized = true;
        debug!(
            pawns = self.roster.len(),
            equipment = self.equipment.read().len(),
            animals = self.animals.read().len(),
            starting_points = self.starting_points,
            "session initialized"
        );
        Ok(())
    }

    /// Drops every piece of session state, including the hair cache.
    pub fn reset(&mut self) {
        self.roster = Roster::new();
        self.identity.clear();
        self.equipment.clear();
        self.animals.clear();
        self.pets.clear();
        self.cost.reset();
        self.hair.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.rng_seed);
        self.starting_points = self.config.starting_points.unwrap_or(0);
        self.initialized = false;
        self.active = false;
        self.filename = None;
    }

    /// Returns true once [`Session::initialize`] has succeeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns true while the editor is open on this session.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the editor open or closed.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// The file this build was last saved to or loaded from.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Records the file this build was saved to or loaded from.
    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = Some(filename.into());
    }

    // =========================================================================
    // Scenario
    // =========================================================================

    fn load_step(&mut self, step: &ScenarioStep) {
        match step {
            ScenarioStep::ScatterNearStart { .. } | ScenarioStep::StartWithColonists { .. } => {
                if let Some((key, count)) = step.equipment() {
                    self.load_scenario_equipment(&key, count);
                }
            }
            ScenarioStep::StartingAnimal { kind, count } => {
                for _ in 0..*count {
                    self.load_scenario_animal(kind.as_ref());
                }
            }
        }
    }

    fn load_scenario_equipment(&mut self, key: &EquipmentKey, count: u32) {
        let record = self.things.equipment(key).or_else(|| {
            warn!(
                thing = %key.thing,
                stuff = ?key.stuff,
                "no equipment entry for scenario item, adding a non-standard entry"
            );
            self.things.add_non_standard(key)
        });
        if record.is_none() {
            warn!(thing = %key.thing, "scenario item is unknown, skipping it");
        }
        self.equipment.add_record_count(record.as_ref(), count);
    }

    fn load_scenario_animal(&mut self, kind: Option<&DefName>) {
        let kind = match kind {
            Some(kind) => kind.clone(),
            None => {
                let kinds = self.things.pet_kinds();
                match kinds.choose_weighted(&mut self.rng, |(_, weight)| *weight) {
                    Ok((kind, _)) => kind.clone(),
                    Err(err) => {
                        warn!(error = %err, "no random pet kind available for scenario animal");
                        return;
                    }
                }
            }
        };
        let variants = self.things.animals(&kind);
        match variants.choose(&mut self.rng) {
            Some(record) => {
                self.animals.add_record(Some(record));
            }
            None => warn!(kind = %kind, "failed to add the expected scenario animal"),
        }
    }

    // =========================================================================
    // Roster
    // =========================================================================

    /// Every pawn, in roster order.
    #[must_use]
    pub fn pawns(&self) -> &[CustomPawn] {
        self.roster.pawns()
    }

    /// Pawns with the given type tag.
    pub fn pawns_of_type(&self, pawn_type: PawnType) -> impl Iterator<Item = &CustomPawn> + '_ {
        self.roster.of_type(pawn_type)
    }

    /// Starting colonists.
    #[must_use]
    pub fn colony_pawns(&self) -> Vec<&CustomPawn> {
        self.pawns_of_type(PawnType::Colonist).collect()
    }

    /// Reserve pawns left in the world.
    #[must_use]
    pub fn world_pawns(&self) -> Vec<&CustomPawn> {
        self.pawns_of_type(PawnType::World).collect()
    }

    /// Hidden pawns.
    #[must_use]
    pub fn hidden_pawns(&self) -> Vec<&CustomPawn> {
        self.pawns_of_type(PawnType::Hidden).collect()
    }

    /// Temporary pawns.
    #[must_use]
    pub fn temporary_pawns(&self) -> Vec<&CustomPawn> {
        self.pawns_of_type(PawnType::Temporary).collect()
    }

    /// Looks up a pawn.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> Option<&CustomPawn> {
        self.roster.get(id)
    }

    /// Looks up a pawn for editing.
    pub fn pawn_mut(&mut self, id: PawnId) -> Option<&mut CustomPawn> {
        self.roster.get_mut(id)
    }

    /// Adds a pawn created in the editor. It has no source record.
    pub fn add_pawn(
        &mut self,
        name: impl Into<String>,
        race: impl Into<DefName>,
        gender: Gender,
        pawn_type: PawnType,
    ) -> PawnId {
        self.roster.spawn(name, race.into(), gender, pawn_type)
    }

    /// Removes a pawn from the roster.
    ///
    /// The identity map is fixed for the session and is not pruned:
    /// [`Session::find_pawn`] may still return the removed id, which
    /// [`Session::pawn`] then resolves to `None`.
    pub fn remove_pawn(&mut self, id: PawnId) -> Option<CustomPawn> {
        self.roster.remove(id)
    }

    /// Removes every pawn from the roster.
    ///
    /// The identity map is kept, as with [`Session::remove_pawn`]. Only
    /// [`Session::reset`] drops it.
    pub fn clear_pawns(&mut self) {
        self.roster.clear();
    }

    /// The source record a pawn was copied from.
    #[must_use]
    pub fn find_source(&self, pawn: PawnId) -> Option<&SourcePawn> {
        self.identity.find_source(pawn)
    }

    /// The pawn copied from a source record.
    #[must_use]
    pub fn find_pawn(&self, source: &SourceId) -> Option<PawnId> {
        self.identity.find_pawn(source)
    }

    // =========================================================================
    // Equipment
    // =========================================================================

    /// Looks up an equipment record in the host's catalog.
    #[must_use]
    pub fn lookup_equipment(&self, key: &EquipmentKey) -> Option<EquipmentRecord> {
        self.things.equipment(key)
    }

    /// Selected equipment, with queued removals applied.
    pub fn equipment(&mut self) -> &[EquipmentSelection] {
        self.equipment.read()
    }

    /// Selected equipment for editing counts.
    pub fn equipment_mut(&mut self) -> &mut [EquipmentSelection] {
        self.equipment.read_mut()
    }

    /// Adds one stack of `record`.
    pub fn add_equipment(&mut self, record: Option<&EquipmentRecord>) -> AddOutcome {
        self.equipment.add_record(record)
    }

    /// Adds `count` units of `record`.
    pub fn add_equipment_count(&mut self, record: Option<&EquipmentRecord>, count: u32) -> AddOutcome {
        self.equipment.add_record_count(record, count)
    }

    /// Queues a selection for removal.
    pub fn remove_equipment(&mut self, selection: &EquipmentSelection) {
        self.equipment.remove(selection);
    }

    /// Queues the selection for `key`, if any, for removal.
    pub fn remove_equipment_record(&mut self, key: &EquipmentKey) {
        self.equipment.remove_key(key.clone());
    }

    /// The live selection for `key`.
    pub fn find_equipment(&mut self, key: &EquipmentKey) -> Option<&EquipmentSelection> {
        self.equipment.find(key)
    }

    // =========================================================================
    // Animals and pets
    // =========================================================================

    /// Selected animals, with queued removals applied.
    pub fn animals(&mut self) -> &[SelectedAnimal] {
        self.animals.read()
    }

    /// Adds one animal of `record`'s variant.
    pub fn add_animal(&mut self, record: Option<&AnimalRecord>) -> AddOutcome {
        self.animals.add_record(record)
    }

    /// Queues an animal selection for removal.
    pub fn remove_animal(&mut self, animal: &SelectedAnimal) {
        self.animals.remove(animal);
    }

    /// The live selection for `key`.
    pub fn find_animal(&mut self, key: &AnimalRecordKey) -> Option<&SelectedAnimal> {
        self.animals.find(key)
    }

    /// Selected pets, with queued removals applied.
    pub fn pets(&mut self) -> &[SelectedPet] {
        self.pets.read()
    }

    /// Appends a pet. Pets are never merged.
    pub fn add_pet(&mut self, pet: SelectedPet) {
        self.pets.push(pet);
    }

    /// Queues a pet for removal.
    pub fn remove_pet(&mut self, pet: &SelectedPet) {
        self.pets.remove(pet);
    }

    /// The live pet with `id`.
    pub fn find_pet(&mut self, id: &str) -> Option<&SelectedPet> {
        self.pets.find(&id.to_owned())
    }

    // =========================================================================
    // Cost
    // =========================================================================

    /// Recomputes and returns the build's cost.
    pub fn cost(&mut self) -> &CostDetails {
        self.costs.calculate(
            &mut self.cost,
            self.roster.pawns(),
            self.equipment.read(),
            self.animals.read(),
        );
        &self.cost
    }

    /// The point budget.
    #[must_use]
    pub const fn starting_points(&self) -> i64 {
        self.starting_points
    }

    /// Overrides the point budget.
    pub fn set_starting_points(&mut self, points: i64) {
        self.starting_points = points;
    }

    /// Budget minus the truncated current cost.
    pub fn points_remaining(&mut self) -> i64 {
        let starting = self.starting_points;
        self.cost().points_remaining(starting)
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Resolved hair data for a race.
    pub fn race_hairs(&mut self, race: &DefName) -> Option<Arc<RaceHairs>> {
        self.hair.hairs_for_race(race)
    }

    /// Hair styles available to `gender` pawns of `race`.
    pub fn hair_options_for(&mut self, race: &DefName, gender: Gender) -> Vec<HairDef> {
        self.hair.hairs(race, gender)
    }

    /// Hair styles available to a pawn. Empty for an unknown pawn.
    pub fn hair_options(&mut self, pawn: PawnId) -> Vec<HairDef> {
        let Some(pawn) = self.roster.get(pawn) else {
            return Vec::new();
        };
        self.hair.hairs(pawn.race(), pawn.gender())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("pawns", &self.roster.len())
            .field("initialized", &self.initialized)
            .field("active", &self.active)
            .field("starting_points", &self.starting_points)
            .finish_non_exhaustive()
    }
}
