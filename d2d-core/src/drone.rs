//! Drone configuration variants and their categorical attributes.
//!
//! A run uses exactly one energy model. The three models share a
//! [`DroneCapability`] and differ in the parameters the optimizer needs to
//! evaluate energy consumption, so they are expressed as variants of
//! [`DroneConfig`] rather than a class hierarchy.
//!
//! # Examples
//! ```
//! use d2d_core::{RangeType, SpeedType};
//!
//! assert_eq!(SpeedType::High.as_str(), "high");
//! assert_eq!(RangeType::Low.to_string(), "low");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Scalar;

/// Speed class of a drone configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SpeedType {
    /// Slow variant.
    #[default]
    Low,
    /// Fast variant.
    High,
}

/// Range class of a drone configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RangeType {
    /// Short-range variant.
    #[default]
    Low,
    /// Long-range variant.
    High,
}

impl SpeedType {
    /// Return the speed class as it appears in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl RangeType {
    /// Return the range class as it appears in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for SpeedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for RangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SpeedType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown speed type '{s}'")),
        }
    }
}

impl std::str::FromStr for RangeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown range type '{s}'")),
        }
    }
}

/// Energy consumption model requested for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum DroneModel {
    /// Linear power model.
    #[default]
    Linear,
    /// Nonlinear power model.
    NonLinear,
    /// Fixed endurance model.
    Endurance,
}

impl DroneModel {
    /// Return the selector value used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::NonLinear => "non-linear",
            Self::Endurance => "endurance",
        }
    }

    /// Return the label the optimizer uses to branch on the model.
    #[must_use]
    pub const fn kind_label(self) -> &'static str {
        match self {
            Self::Linear => "DroneLinearConfig",
            Self::NonLinear => "DroneNonlinearConfig",
            Self::Endurance => "DroneEnduranceConfig",
        }
    }
}

impl std::fmt::Display for DroneModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DroneModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "non-linear" => Ok(Self::NonLinear),
            "endurance" => Ok(Self::Endurance),
            _ => Err(format!("unknown drone model '{s}'")),
        }
    }
}

/// Attributes shared by every drone configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneCapability {
    /// Payload capacity in kilograms.
    pub capacity: Scalar,
    /// Speed class used for selection.
    pub speed_type: SpeedType,
    /// Range class used for selection.
    pub range_type: RangeType,
}

/// Flight envelope used by the power-based models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightProfile {
    /// Vertical takeoff speed in metres per second.
    pub takeoff_speed: Scalar,
    /// Horizontal cruise speed in metres per second.
    pub cruise_speed: Scalar,
    /// Vertical landing speed in metres per second.
    pub landing_speed: Scalar,
    /// Cruise altitude in metres.
    pub altitude: Scalar,
    /// Battery capacity in joules.
    pub battery: Scalar,
}

/// Drone parameters for the linear power model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDroneConfig {
    /// Shared attributes.
    pub capability: DroneCapability,
    /// Flight envelope.
    pub flight: FlightProfile,
    /// Power per kilogram of payload (W/kg).
    pub beta: Scalar,
    /// Base power draw (W).
    pub gamma: Scalar,
}

/// Drone parameters for the nonlinear power model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonlinearDroneConfig {
    /// Shared attributes.
    pub capability: DroneCapability,
    /// Flight envelope.
    pub flight: FlightProfile,
    /// Dimensionless thrust coefficient.
    pub k1: Scalar,
    /// Coefficient in sqrt(kg/m).
    pub k2: Scalar,
    /// Coefficient in sqrt(m/kg).
    pub c1: Scalar,
    /// Coefficient in sqrt(m/kg).
    pub c2: Scalar,
    /// Coefficient in kg/m.
    pub c4: Scalar,
    /// Coefficient in Ns/m.
    pub c5: Scalar,
}

/// Drone parameters for the fixed endurance model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnduranceDroneConfig {
    /// Shared attributes.
    pub capability: DroneCapability,
    /// Maximum flight time in seconds.
    pub fixed_time: Scalar,
    /// Maximum flight distance in metres.
    pub fixed_distance: Scalar,
    /// Constant flight speed in metres per second.
    pub drone_speed: Scalar,
}

/// One drone configuration candidate of any energy model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DroneConfig {
    /// Linear power model.
    Linear(LinearDroneConfig),
    /// Nonlinear power model.
    Nonlinear(NonlinearDroneConfig),
    /// Fixed endurance model.
    Endurance(EnduranceDroneConfig),
}

impl DroneConfig {
    /// Attributes shared by every variant.
    #[must_use]
    pub const fn capability(&self) -> &DroneCapability {
        match self {
            Self::Linear(config) => &config.capability,
            Self::Nonlinear(config) => &config.capability,
            Self::Endurance(config) => &config.capability,
        }
    }

    /// Payload capacity in kilograms.
    #[must_use]
    pub const fn capacity(&self) -> Scalar {
        self.capability().capacity
    }

    /// Speed class of this candidate.
    #[must_use]
    pub const fn speed_type(&self) -> SpeedType {
        self.capability().speed_type
    }

    /// Range class of this candidate.
    #[must_use]
    pub const fn range_type(&self) -> RangeType {
        self.capability().range_type
    }

    /// Energy model this candidate belongs to.
    #[must_use]
    pub const fn model(&self) -> DroneModel {
        match self {
            Self::Linear(_) => DroneModel::Linear,
            Self::Nonlinear(_) => DroneModel::NonLinear,
            Self::Endurance(_) => DroneModel::Endurance,
        }
    }

    /// Label printed ahead of the variant fields.
    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        self.model().kind_label()
    }
}

impl From<LinearDroneConfig> for DroneConfig {
    fn from(config: LinearDroneConfig) -> Self {
        Self::Linear(config)
    }
}

impl From<NonlinearDroneConfig> for DroneConfig {
    fn from(config: NonlinearDroneConfig) -> Self {
        Self::Nonlinear(config)
    }
}

impl From<EnduranceDroneConfig> for DroneConfig {
    fn from(config: EnduranceDroneConfig) -> Self {
        Self::Endurance(config)
    }
}
