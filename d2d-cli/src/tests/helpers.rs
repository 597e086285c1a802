//! Test helpers that lay out a problems directory on disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const TRUCK_JSON: &str = r#"{
    "V_max (m/s)": 15.557,
    "M_t (kg)": 1500,
    "T (hour)": {"0-1": 0.7, "1-2": 0.4, "2-3": 0.6}
}"#;

pub(super) const LINEAR_JSON: &str = r#"{
    "1": {
        "takeoffSpeed [m/s]": 7.8232, "cruiseSpeed [m/s]": 15.6464,
        "landingSpeed [m/s]": 3.9116, "cruiseAlt [m]": 50,
        "capacity [kg]": 1.5, "batteryPower [Joule]": 500000,
        "speed_type": "low", "range": "low",
        "beta(w/kg)": 24.2, "gamma(w)": 1392
    },
    "2": {
        "takeoffSpeed [m/s]": 7.8232, "cruiseSpeed [m/s]": 15.6464,
        "landingSpeed [m/s]": 3.9116, "cruiseAlt [m]": 50,
        "capacity [kg]": 2.27, "batteryPower [Joule]": 904033,
        "speed_type": "high", "range": "low",
        "beta(w/kg)": 24.2, "gamma(w)": 1392
    }
}"#;

pub(super) const ENDURANCE_JSON: &str = r#"{
    "1": {
        "speed_type": "low", "range": "high", "capacity [kg]": 2,
        "FixedTime (s)": 1800, "FixedDistance (m)": 10000, "Drone_speed (m/s)": 20
    }
}"#;

pub(super) const NONLINEAR_JSON: &str = r#"{
    "k1": 0.8554, "k2 (sqrt(kg/m)": 0.3051, "c1 (sqrt(m/kg)": 2.8037,
    "c2 (sqrt(m/kg)": 0.3177, "c4 (kg/m)": 0.0296, "c5 (Ns/m)": 0.0279,
    "1": {
        "takeoffSpeed [m/s]": 7.8232, "cruiseSpeed [m/s]": 15.6464,
        "landingSpeed [m/s]": 3.9116, "cruiseAlt [m]": 50,
        "capacity [kg]": 2.27, "batteryPower [Joule]": 904033,
        "speed_type": "low", "range": "low"
    }
}"#;

pub(super) const PROBLEM_TEXT: &str = "Customers 2\nnumber_staff 1\nnumber_drone 1\n\
     1.0 2.0 5.0 0\t3.0 4.0\n-1.0 0.0 2.5 1\t1.0 1.0\n";

/// A temporary problems directory holding every input file.
#[derive(Debug)]
pub(super) struct ProblemsTree {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ProblemsTree {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let config = root.join("config_parameter");
        write_utf8(&config.join("truck_config.json"), TRUCK_JSON);
        write_utf8(&config.join("drone_linear_config.json"), LINEAR_JSON);
        write_utf8(&config.join("drone_nonlinear_config.json"), NONLINEAR_JSON);
        write_utf8(&config.join("drone_endurance_config.json"), ENDURANCE_JSON);
        write_utf8(&root.join("data").join("two-customers.txt"), PROBLEM_TEXT);
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    fs::write(path, contents).expect("write fixture file");
}
