//! Facade crate for the truck-and-drone instance builder.
//!
//! This crate re-exports the domain records, the canonical serializer and the
//! input loaders so callers can assemble an instance without depending on
//! each workspace member.
//!
//! ```
//! use d2d_instance::{DroneModel, ProblemsRoot};
//!
//! let root = ProblemsRoot::new("problems");
//! let path = root.drone_config_path(DroneModel::Endurance);
//! assert!(path.ends_with("drone_endurance_config.json"));
//! ```

#![forbid(unsafe_code)]

pub use d2d_core::{
    Customer, DroneConfig, DroneModel, InstanceBundle, Problem, RangeType, RunParameters, Scalar,
    SelectionError, SpeedType, TruckConfig, render_instance, require_variant, select_variant,
    write_instance,
};
pub use d2d_data::{
    LoadError, LoadErrorKind, ProblemsRoot, load_drone_configs, load_problem, load_truck_config,
};
