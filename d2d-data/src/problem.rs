//! Parser for the problem text format.
//!
//! A problem file carries three labelled headers and one line per customer:
//!
//! ```text
//! Customers 2
//! number_staff 1
//! number_drone 1
//! 1.0 2.0 5.0 0	3.0 4.0
//! -1.0 0.0 2.5 1	1.0 1.0
//! ```
//!
//! The separator between the flag and the truck service time is a literal tab.
//! Records with a space there do not match and are ignored.

use std::sync::LazyLock;

use camino::Utf8Path;
use d2d_core::{Customer, CustomerColumns, Problem};
use log::{debug, warn};
use regex::{Captures, Regex};

use crate::{LoadError, ProblemsRoot, layout::problem_stem};

/// Label of the customer count header.
pub const CUSTOMERS_HEADER: &str = "Customers";
/// Label of the truck count header.
pub const TRUCKS_HEADER: &str = "number_staff";
/// Label of the drone count header.
pub const DRONES_HEADER: &str = "number_drone";

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static CUSTOMERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Customers (\d+)").expect("valid customers pattern"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static TRUCKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"number_staff (\d+)").expect("valid staff pattern"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static DRONES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"number_drone (\d+)").expect("valid drone pattern"));

#[expect(clippy::expect_used, reason = "pattern is a compile-time constant")]
static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([-\d.]+)\s+([-\d.]+)\s+([\d.]+)\s+(0|1)\t([\d.]+)\s+([\d.]+)")
        .expect("valid record pattern")
});

/// Names of the numeric record fields by capture group.
const FIELDS: [(usize, &str); 5] = [
    (1, "x"),
    (2, "y"),
    (3, "demand"),
    (5, "truck_service_time"),
    (6, "drone_service_time"),
];

/// Load `data/<name>.txt` beneath `root`.
///
/// `name` may carry the `.txt` suffix; the stored problem name never does.
///
/// # Errors
/// Returns [`LoadError`] when the file cannot be read, a header is missing,
/// a record field is malformed, or the record count disagrees with the
/// `Customers` header.
pub fn load_problem(root: &ProblemsRoot, name: &str) -> Result<Problem, LoadError> {
    let path = root.problem_path(name);
    let text = d2d_fs::read_utf8_file(&path).map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;
    parse_problem(problem_stem(name), &path, &text)
}

/// Parse problem text read from `path` into a [`Problem`] named `name`.
///
/// # Errors
/// See [`load_problem`].
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use d2d_data::parse_problem;
///
/// # fn main() -> Result<(), d2d_data::LoadError> {
/// let text = "Customers 1\nnumber_staff 1\nnumber_drone 2\n1.0 2.0 5.0 0\t3.0 4.0\n";
/// let problem = parse_problem("tiny", Utf8Path::new("tiny.txt"), text)?;
/// assert_eq!(problem.drones_count(), 2);
/// assert_eq!(problem.dronable(), &[true]);
/// # Ok(())
/// # }
/// ```
pub fn parse_problem(name: &str, path: &Utf8Path, text: &str) -> Result<Problem, LoadError> {
    let customers_count = header(path, text, &CUSTOMERS, CUSTOMERS_HEADER)?;
    let trucks_count = header(path, text, &TRUCKS, TRUCKS_HEADER)?;
    let drones_count = header(path, text, &DRONES, DRONES_HEADER)?;

    // The header is untrusted, so storage grows with the records found.
    let customers = RECORD
        .captures_iter(text)
        .enumerate()
        .map(|(index, captures)| record(path, index, &captures))
        .collect::<Result<Vec<_>, _>>()?;

    let found = customers.len();
    if found != customers_count {
        return Err(LoadError::CustomerCountMismatch {
            path: path.to_path_buf(),
            declared: customers_count,
            found,
        });
    }
    if found == 0 {
        warn!("{path} declares no customers");
    }
    debug!(
        "parsed {found} customers, {trucks_count} trucks and {drones_count} drones from {path}"
    );

    let columns: CustomerColumns = customers.into_iter().collect();
    Problem::new(name, customers_count, trucks_count, drones_count, columns).map_err(|source| {
        LoadError::InconsistentProblem {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn header(
    path: &Utf8Path,
    text: &str,
    pattern: &Regex,
    label: &'static str,
) -> Result<usize, LoadError> {
    let value = pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| LoadError::MissingHeader {
            path: path.to_path_buf(),
            label,
        })?
        .as_str();
    value.parse().map_err(|_| LoadError::InvalidHeader {
        path: path.to_path_buf(),
        label,
        value: value.to_owned(),
    })
}

fn record(path: &Utf8Path, index: usize, captures: &Captures<'_>) -> Result<Customer, LoadError> {
    let [x, y, demand, truck_service_time, drone_service_time] =
        FIELDS.map(|(group, field)| float_field(path, index, captures, group, field));
    Ok(Customer {
        x: x?,
        y: y?,
        demand: demand?,
        dronable: captures.get(4).is_some_and(|flag| flag.as_str() == "0"),
        truck_service_time: truck_service_time?,
        drone_service_time: drone_service_time?,
    })
}

fn float_field(
    path: &Utf8Path,
    index: usize,
    captures: &Captures<'_>,
    group: usize,
    field: &'static str,
) -> Result<f64, LoadError> {
    let raw = captures.get(group).map_or("", |m| m.as_str());
    raw.parse().map_err(|_| LoadError::InvalidField {
        path: path.to_path_buf(),
        record: index,
        field,
        value: raw.to_owned(),
    })
}
