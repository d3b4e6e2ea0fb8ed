//! Cost aggregation, scenario loading, and session control for Loadout.
//!
//! This crate provides:
//! - [`CostCalculator`] / [`CostDetails`] - Recomputes the build's total cost
//! - [`ThingCatalog`] - Equipment and animal records the host knows about
//! - [`ScenarioScanner`] - Starting gear and animals granted by the scenario
//! - [`SessionConfig`] - Budget, baseline race, and RNG seed
//! - [`Session`] - Owns one build session's state and wires the layers together

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod config;
pub mod cost;
pub mod scenario;
pub mod session;

pub use catalog::{ThingCatalog, ThingTable};
pub use config::SessionConfig;
pub use cost::{CostCalculator, CostDetails, PawnCostModel};
pub use scenario::{ScenarioScanner, ScenarioStep};
pub use session::{Collaborators, Session};
