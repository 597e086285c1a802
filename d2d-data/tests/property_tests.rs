//! Property-based tests for the problem and truck parsers.
//!
//! # Invariants tested
//!
//! - **Column lengths:** every customer column holds one entry per record.
//! - **Flag inversion:** a `0` flag loads as dronable and `1` as truck-only.
//! - **Determinism:** parsing the same text twice yields equal problems.
//! - **Coefficient order:** truck coefficients follow the source key order.
//! - **Integer form:** integer coefficients print exactly as written.

use camino::Utf8Path;
use d2d_core::Scalar;
use d2d_data::{parse_problem, parse_truck_config};
use proptest::prelude::*;

/// One generated body line together with its expected field values.
#[derive(Debug, Clone)]
struct Record {
    x: String,
    y: String,
    demand: String,
    flag: u8,
    truck_service_time: String,
    drone_service_time: String,
}

impl Record {
    fn line(&self) -> String {
        format!(
            "{} {}  {}\t{}\t{} {}",
            self.x, self.y, self.demand, self.flag, self.truck_service_time, self.drone_service_time
        )
    }
}

fn decimal(min: i32, max: i32) -> impl Strategy<Value = String> {
    (min..max, 0_u8..100).prop_map(|(whole, frac)| format!("{whole}.{frac:02}"))
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        decimal(-1000, 1000),
        decimal(-1000, 1000),
        decimal(0, 100),
        0_u8..=1,
        decimal(0, 600),
        decimal(0, 600),
    )
        .prop_map(
            |(x, y, demand, flag, truck_service_time, drone_service_time)| Record {
                x,
                y,
                demand,
                flag,
                truck_service_time,
                drone_service_time,
            },
        )
}

fn problem_text(records: &[Record]) -> String {
    let mut text = format!(
        "Customers {}\nnumber_staff 1\nnumber_drone 1\n",
        records.len()
    );
    for record in records {
        text.push_str(&record.line());
        text.push('\n');
    }
    text
}

fn parsed(raw: &str) -> f64 {
    raw.parse().expect("generated decimals parse")
}

fn path() -> &'static Utf8Path {
    Utf8Path::new("generated.txt")
}

proptest! {
    #[test]
    fn columns_follow_records(records in prop::collection::vec(record_strategy(), 0..40)) {
        let problem = parse_problem("generated", path(), &problem_text(&records))
            .expect("generated problem parses");
        prop_assert_eq!(problem.customers_count(), records.len());
        prop_assert_eq!(problem.y().len(), records.len());
        prop_assert_eq!(problem.drone_service_time().len(), records.len());

        for (customer, record) in problem.customers().zip(&records) {
            prop_assert_eq!(customer.x.to_bits(), parsed(&record.x).to_bits());
            prop_assert_eq!(customer.demand.to_bits(), parsed(&record.demand).to_bits());
            prop_assert_eq!(customer.dronable, record.flag == 0);
            prop_assert_eq!(
                customer.truck_service_time.to_bits(),
                parsed(&record.truck_service_time).to_bits()
            );
        }
    }

    #[test]
    fn parsing_is_deterministic(records in prop::collection::vec(record_strategy(), 0..20)) {
        let text = problem_text(&records);
        let first = parse_problem("generated", path(), &text).expect("first parse");
        let second = parse_problem("generated", path(), &text).expect("second parse");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn truck_coefficients_keep_key_order(values in prop::collection::vec(0_u16..1000, 0..24)) {
        let table = values
            .iter()
            .enumerate()
            .rev()
            .map(|(hour, value)| format!("\"{hour}\": {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        let text = format!(
            r#"{{"V_max (m/s)": 15.557, "M_t (kg)": 1500, "T (hour)": {{{table}}}}}"#
        );
        let truck = parse_truck_config(Utf8Path::new("truck.json"), &text).expect("truck parses");
        let expected: Vec<Scalar> = values
            .iter()
            .rev()
            .map(|value| Scalar::from(i64::from(*value)))
            .collect();
        prop_assert_eq!(&truck.coefficients, &expected);
        let printed: Vec<String> = truck.coefficients.iter().map(ToString::to_string).collect();
        let written: Vec<String> = values.iter().rev().map(ToString::to_string).collect();
        prop_assert_eq!(printed, written);
    }
}
