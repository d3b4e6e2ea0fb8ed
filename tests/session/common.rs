//! Shared fixtures for session tests.

use std::sync::Arc;

use loadout_appearance::{CapabilityRecord, CapabilityTable, HairDef, HairGender, TemplateSet};
use loadout_foundation::{DefName, Gender};
use loadout_session::{Collaborators, Session, SessionConfig, ThingTable};
use loadout_storage::{
    AnimalRecord, AnimalRecordKey, CustomPawn, EquipmentKey, EquipmentRecord, SourcePawn,
};

pub fn steel(thing: &str) -> EquipmentKey {
    EquipmentKey::new(thing, Some(DefName::new("Steel")))
}

pub fn things() -> ThingTable {
    ThingTable::new()
        .with_equipment(EquipmentRecord::new(steel("Knife"), "knife", 20.0))
        .with_equipment(
            EquipmentRecord::new(EquipmentKey::new("Medicine", None), "medicine", 18.0)
                .with_stack_size(10),
        )
        .with_equipment(EquipmentRecord::new(EquipmentKey::new("Silver", None), "silver", 1.0))
        .with_animal(AnimalRecord::new(AnimalRecordKey::new("Cat", Gender::Male), "cat", 40.0))
        .with_animal(AnimalRecord::new(AnimalRecordKey::new("Cat", Gender::Female), "cat", 40.0))
        .with_animal(AnimalRecord::new(AnimalRecordKey::new("Dog", Gender::Male), "dog", 60.0))
        .with_pet_kind("Cat", 1.0)
}

pub fn collaborators(things: ThingTable) -> Collaborators {
    let races = CapabilityTable::new()
        .with("Lizard", CapabilityRecord::new().with_hair_tags(["Scales"]));
    let templates = TemplateSet::new()
        .with_race("Human")
        .with_race("Lizard")
        .with_hair(HairDef::new("Mop", HairGender::Any, ["Urban"]))
        .with_hair(HairDef::new("Buzz", HairGender::Male, ["Urban"]))
        .with_hair(HairDef::new("Braids", HairGender::Female, ["Tribal"]))
        .with_hair(HairDef::new("Frill", HairGender::Any, ["Scales"]));
    Collaborators {
        races: Arc::new(races),
        templates: Arc::new(templates),
        things: Box::new(things),
        pawn_costs: Box::new(|_: &CustomPawn| 100.0),
    }
}

pub fn session() -> Session {
    Session::new(SessionConfig::default(), collaborators(things())).unwrap()
}

pub fn session_with(config: SessionConfig) -> Session {
    Session::new(config, collaborators(things())).unwrap()
}

pub fn sources() -> Vec<SourcePawn> {
    vec![
        SourcePawn::new("c1", "Ann", "Human", Gender::Female).with_hair("Braids"),
        SourcePawn::new("c2", "Bo", "Human", Gender::Male),
        SourcePawn::new("c3", "Sss", "Lizard", Gender::Male),
    ]
}
