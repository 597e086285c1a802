//! Fixed locations of instance inputs beneath a problems directory.

use camino::{Utf8Path, Utf8PathBuf};
use d2d_core::DroneModel;

/// Directory holding the JSON configuration files.
pub const CONFIG_DIR: &str = "config_parameter";
/// Directory holding the problem text files.
pub const DATA_DIR: &str = "data";
/// Truck configuration file name.
pub const TRUCK_CONFIG_FILE: &str = "truck_config.json";
/// Suffix of problem text files.
pub const PROBLEM_SUFFIX: &str = ".txt";

/// Root of an input tree laid out as
/// `config_parameter/*.json` plus `data/<problem>.txt`.
///
/// The root is an explicit value so callers can point the loaders at any
/// directory, including test fixtures.
///
/// # Examples
///
/// ```
/// use d2d_core::DroneModel;
/// use d2d_data::ProblemsRoot;
///
/// let root = ProblemsRoot::new("problems");
/// assert_eq!(root.problem_path("6.5.1.txt"), "problems/data/6.5.1.txt");
/// assert_eq!(
///     root.drone_config_path(DroneModel::NonLinear),
///     "problems/config_parameter/drone_nonlinear_config.json"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemsRoot {
    root: Utf8PathBuf,
}

impl ProblemsRoot {
    /// Use `root` as the problems directory.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The problems directory itself.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    /// Location of `truck_config.json`.
    #[must_use]
    pub fn truck_config_path(&self) -> Utf8PathBuf {
        self.root.join(CONFIG_DIR).join(TRUCK_CONFIG_FILE)
    }

    /// Location of the candidate file for `model`.
    #[must_use]
    pub fn drone_config_path(&self, model: DroneModel) -> Utf8PathBuf {
        self.root.join(CONFIG_DIR).join(drone_config_file(model))
    }

    /// Location of the text file for `problem`, with or without its suffix.
    #[must_use]
    pub fn problem_path(&self, problem: &str) -> Utf8PathBuf {
        self.root
            .join(DATA_DIR)
            .join(format!("{}{PROBLEM_SUFFIX}", problem_stem(problem)))
    }
}

/// File name of the candidate list for `model`.
#[must_use]
pub const fn drone_config_file(model: DroneModel) -> &'static str {
    match model {
        DroneModel::Linear => "drone_linear_config.json",
        DroneModel::NonLinear => "drone_nonlinear_config.json",
        DroneModel::Endurance => "drone_endurance_config.json",
    }
}

/// Strip one trailing `.txt` from a problem name.
#[must_use]
pub fn problem_stem(problem: &str) -> &str {
    problem.strip_suffix(PROBLEM_SUFFIX).unwrap_or(problem)
}
