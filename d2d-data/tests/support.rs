//! Helpers shared by the loader behaviour and property tests.

use std::fs;

use camino::Utf8PathBuf;
use d2d_data::ProblemsRoot;

/// Checked-in problems directory used by the scenarios.
pub fn fixture_root() -> ProblemsRoot {
    ProblemsRoot::new(Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/problems"))
}

/// Scenario titles of `feature`, in file order.
pub fn scenario_titles(feature: &str) -> Vec<String> {
    let path = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/features")
        .join(feature);
    let contents = fs::read_to_string(&path).unwrap_or_else(|err| {
        panic!("failed to read feature file {path}: {err}");
    });
    contents
        .lines()
        .filter_map(|line| line.trim().strip_prefix("Scenario: "))
        .map(str::to_owned)
        .collect()
}
