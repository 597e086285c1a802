//! Loaders turning the on-disk instance inputs into `d2d-core` records.
//!
//! Responsibilities:
//! - Resolve input locations beneath an explicit [`ProblemsRoot`].
//! - Decode the truck and drone JSON files by their unit-bearing keys.
//! - Extract headers and customer records from problem text.
//!
//! Boundaries:
//! - Do not choose a drone variant or format output (live in `d2d-core`).
//! - Read each file fully before parsing; no handle outlives a loader call.
//!
//! Invariants:
//! - Candidate and coefficient order follows the source files.
//! - No global mutable state.

mod config;
mod error;
mod layout;
mod problem;

pub use config::{load_drone_configs, load_truck_config, parse_drone_configs, parse_truck_config};
pub use error::{LoadError, LoadErrorKind};
pub use layout::{
    CONFIG_DIR, DATA_DIR, PROBLEM_SUFFIX, ProblemsRoot, TRUCK_CONFIG_FILE, drone_config_file,
    problem_stem,
};
pub use problem::{CUSTOMERS_HEADER, DRONES_HEADER, TRUCKS_HEADER, load_problem, parse_problem};
