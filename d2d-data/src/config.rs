//! JSON loaders for the truck configuration and drone candidate files.
//!
//! Keys in the source files carry their units (`"cruiseSpeed [m/s]"`), so
//! each field is mapped by exact key. A missing key is an error, never a
//! default. Numbers are read as [`Scalar`] values so integers stay integers.

use camino::Utf8Path;
use d2d_core::{
    DroneCapability, DroneConfig, DroneModel, EnduranceDroneConfig, FlightProfile,
    LinearDroneConfig, NonlinearDroneConfig, RangeType, Scalar, SpeedType, TruckConfig,
};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{LoadError, ProblemsRoot};

const TRUCK_COEFFICIENTS_KEY: &str = "T (hour)";

#[derive(Debug, Deserialize)]
struct TruckRecord {
    #[serde(rename = "V_max (m/s)")]
    maximum_velocity: Scalar,
    #[serde(rename = "M_t (kg)")]
    capacity: Scalar,
    #[serde(rename = "T (hour)")]
    coefficients: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct CapabilityRecord {
    #[serde(rename = "capacity [kg]")]
    capacity: Scalar,
    speed_type: SpeedType,
    #[serde(rename = "range")]
    range_type: RangeType,
}

impl From<CapabilityRecord> for DroneCapability {
    fn from(record: CapabilityRecord) -> Self {
        Self {
            capacity: record.capacity,
            speed_type: record.speed_type,
            range_type: record.range_type,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FlightRecord {
    #[serde(rename = "takeoffSpeed [m/s]")]
    takeoff_speed: Scalar,
    #[serde(rename = "cruiseSpeed [m/s]")]
    cruise_speed: Scalar,
    #[serde(rename = "landingSpeed [m/s]")]
    landing_speed: Scalar,
    #[serde(rename = "cruiseAlt [m]")]
    altitude: Scalar,
    #[serde(rename = "batteryPower [Joule]")]
    battery: Scalar,
}

impl From<FlightRecord> for FlightProfile {
    fn from(record: FlightRecord) -> Self {
        Self {
            takeoff_speed: record.takeoff_speed,
            cruise_speed: record.cruise_speed,
            landing_speed: record.landing_speed,
            altitude: record.altitude,
            battery: record.battery,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LinearRecord {
    #[serde(flatten)]
    capability: CapabilityRecord,
    #[serde(flatten)]
    flight: FlightRecord,
    #[serde(rename = "beta(w/kg)")]
    beta: Scalar,
    #[serde(rename = "gamma(w)")]
    gamma: Scalar,
}

impl From<LinearRecord> for LinearDroneConfig {
    fn from(record: LinearRecord) -> Self {
        Self {
            capability: record.capability.into(),
            flight: record.flight.into(),
            beta: record.beta,
            gamma: record.gamma,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EnduranceRecord {
    #[serde(flatten)]
    capability: CapabilityRecord,
    #[serde(rename = "FixedTime (s)")]
    fixed_time: Scalar,
    #[serde(rename = "FixedDistance (m)")]
    fixed_distance: Scalar,
    #[serde(rename = "Drone_speed (m/s)")]
    drone_speed: Scalar,
}

impl From<EnduranceRecord> for EnduranceDroneConfig {
    fn from(record: EnduranceRecord) -> Self {
        Self {
            capability: record.capability.into(),
            fixed_time: record.fixed_time,
            fixed_distance: record.fixed_distance,
            drone_speed: record.drone_speed,
        }
    }
}

/// Keys of the nonlinear power coefficients, in output order.
const NONLINEAR_KEYS: [&str; 6] = [
    "k1",
    "k2 (sqrt(kg/m)",
    "c1 (sqrt(m/kg)",
    "c2 (sqrt(m/kg)",
    "c4 (kg/m)",
    "c5 (Ns/m)",
];

#[derive(Debug, Deserialize)]
struct NonlinearRecord {
    #[serde(flatten)]
    capability: CapabilityRecord,
    #[serde(flatten)]
    flight: FlightRecord,
}

/// Load `truck_config.json` from `root`.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be read, a required key is
/// absent, or a coefficient is not a number.
pub fn load_truck_config(root: &ProblemsRoot) -> Result<TruckConfig, LoadError> {
    let path = root.truck_config_path();
    let text = read_input(&path)?;
    parse_truck_config(&path, &text)
}

/// Parse the contents of a truck configuration file read from `path`.
///
/// Coefficients keep the key order of the `T (hour)` object.
///
/// # Errors
/// See [`load_truck_config`].
pub fn parse_truck_config(path: &Utf8Path, text: &str) -> Result<TruckConfig, LoadError> {
    let outer = parse_object(path, text)?;
    let record = TruckRecord::deserialize(&Value::Object(outer)).map_err(|source| {
        LoadError::InvalidRecord {
            path: path.to_path_buf(),
            entry: "truck".to_owned(),
            source,
        }
    })?;
    let coefficients = record
        .coefficients
        .iter()
        .map(|(bucket, value)| {
            number(value).ok_or_else(|| LoadError::NotANumber {
                path: path.to_path_buf(),
                key: format!("{TRUCK_COEFFICIENTS_KEY}.{bucket}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!("loaded {} truck coefficients from {path}", coefficients.len());
    Ok(TruckConfig::new(
        record.maximum_velocity,
        record.capacity,
        coefficients,
    ))
}

/// Load every candidate of `model` from its configuration file under `root`.
///
/// Candidates keep the key order of the file, which is the selection
/// tie-break.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be read or a candidate does not
/// match the schema of `model`.
pub fn load_drone_configs(
    root: &ProblemsRoot,
    model: DroneModel,
) -> Result<Vec<DroneConfig>, LoadError> {
    let path = root.drone_config_path(model);
    let text = read_input(&path)?;
    parse_drone_configs(model, &path, &text)
}

/// Parse the contents of a drone candidate file for `model` read from `path`.
///
/// Every top-level value describes one candidate. The nonlinear file also
/// keeps shared coefficients at the top level, so its non-object values are
/// skipped; elsewhere they are an error.
///
/// # Errors
/// See [`load_drone_configs`].
pub fn parse_drone_configs(
    model: DroneModel,
    path: &Utf8Path,
    text: &str,
) -> Result<Vec<DroneConfig>, LoadError> {
    let outer = parse_object(path, text)?;
    let mut candidates = Vec::with_capacity(outer.len());
    for (entry, value) in &outer {
        if !value.is_object() {
            if model == DroneModel::NonLinear {
                debug!("skipping non-object entry `{entry}` in {path}");
                continue;
            }
            return Err(LoadError::EntryNotObject {
                path: path.to_path_buf(),
                entry: entry.clone(),
            });
        }
        let candidate = match model {
            DroneModel::Linear => {
                DroneConfig::Linear(decode_record::<LinearRecord>(path, entry, value)?.into())
            }
            DroneModel::NonLinear => {
                DroneConfig::Nonlinear(decode_nonlinear(path, &outer, entry, value)?)
            }
            DroneModel::Endurance => {
                DroneConfig::Endurance(decode_record::<EnduranceRecord>(path, entry, value)?.into())
            }
        };
        candidates.push(candidate);
    }
    debug!(
        "loaded {} {model} drone candidates from {path}",
        candidates.len()
    );
    Ok(candidates)
}

fn read_input(path: &Utf8Path) -> Result<String, LoadError> {
    d2d_fs::read_utf8_file(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_object(path: &Utf8Path, text: &str) -> Result<Map<String, Value>, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_record<'a, T: Deserialize<'a>>(
    path: &Utf8Path,
    entry: &str,
    value: &'a Value,
) -> Result<T, LoadError> {
    T::deserialize(value).map_err(|source| LoadError::InvalidRecord {
        path: path.to_path_buf(),
        entry: entry.to_owned(),
        source,
    })
}

fn decode_nonlinear(
    path: &Utf8Path,
    outer: &Map<String, Value>,
    entry: &str,
    value: &Value,
) -> Result<NonlinearDroneConfig, LoadError> {
    let record = decode_record::<NonlinearRecord>(path, entry, value)?;
    let [k1, k2, c1, c2, c4, c5] = NONLINEAR_KEYS
        .map(|key| coefficient(path, outer, entry, value, key));
    Ok(NonlinearDroneConfig {
        capability: record.capability.into(),
        flight: record.flight.into(),
        k1: k1?,
        k2: k2?,
        c1: c1?,
        c2: c2?,
        c4: c4?,
        c5: c5?,
    })
}

/// Read `key` from the candidate, falling back to the top-level object.
fn coefficient(
    path: &Utf8Path,
    outer: &Map<String, Value>,
    entry: &str,
    candidate: &Value,
    key: &'static str,
) -> Result<Scalar, LoadError> {
    let (scope, value) = match candidate.get(key) {
        Some(value) => (entry, value),
        None => match outer.get(key) {
            Some(value) => ("", value),
            None => {
                return Err(LoadError::MissingKey {
                    path: path.to_path_buf(),
                    entry: entry.to_owned(),
                    key,
                });
            }
        },
    };
    number(value).ok_or_else(|| LoadError::NotANumber {
        path: path.to_path_buf(),
        key: if scope.is_empty() {
            key.to_owned()
        } else {
            format!("{scope}.{key}")
        },
    })
}

fn number(value: &Value) -> Option<Scalar> {
    Scalar::deserialize(value).ok()
}
