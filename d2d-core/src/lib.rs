//! Core domain types for the truck-and-drone instance builder.
//!
//! These records describe one vehicle-routing instance as it is handed to the
//! downstream optimizer: the customer table, the truck configuration, the
//! selected drone configuration, and the pass-through run parameters.
//!
//! Constructors that carry invariants return `Result` so that malformed
//! input surfaces before anything is serialized. All records are immutable
//! once built.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bundle;
pub mod canonical;
mod drone;
mod problem;
mod scalar;
mod selector;
mod truck;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bundle::{InstanceBundle, RunParameters};
pub use canonical::{render_instance, write_instance};
pub use drone::{
    DroneCapability, DroneConfig, DroneModel, EnduranceDroneConfig, FlightProfile,
    LinearDroneConfig, NonlinearDroneConfig, RangeType, SpeedType,
};
pub use problem::{Customer, CustomerColumns, Problem, ProblemError};
pub use scalar::Scalar;
pub use selector::{CandidateSummary, SelectionError, require_variant, select_variant};
pub use truck::TruckConfig;
