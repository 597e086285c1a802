//! Behavioural coverage for drone variant selection.

use std::cell::RefCell;

use d2d_core::{
    DroneCapability, DroneConfig, DroneModel, FlightProfile, LinearDroneConfig, RangeType, Scalar,
    SelectionError, SpeedType, require_variant, select_variant,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Candidates available to the scenario.
#[fixture]
pub fn candidates() -> RefCell<Vec<DroneConfig>> {
    RefCell::new(Vec::new())
}

/// Outcome of the selection step.
#[fixture]
pub fn selection() -> RefCell<Option<Result<DroneConfig, SelectionError>>> {
    RefCell::new(None)
}

fn linear(speed_type: SpeedType, range_type: RangeType, capacity: i64) -> DroneConfig {
    DroneConfig::Linear(LinearDroneConfig {
        capability: DroneCapability {
            capacity: Scalar::from(capacity),
            speed_type,
            range_type,
        },
        flight: FlightProfile {
            takeoff_speed: Scalar::Float(7.8232),
            cruise_speed: Scalar::Float(15.6464),
            landing_speed: Scalar::Float(3.9116),
            altitude: Scalar::Integer(50),
            battery: Scalar::Integer(904_033),
        },
        beta: Scalar::Float(24.2),
        gamma: Scalar::Integer(1392),
    })
}

fn recorded(
    selection: &RefCell<Option<Result<DroneConfig, SelectionError>>>,
) -> Result<DroneConfig, SelectionError> {
    selection
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("selection must be attempted"))
}

#[given("linear candidates low/low, high/low and low/high")]
fn three_linear_candidates(candidates: &RefCell<Vec<DroneConfig>>) {
    *candidates.borrow_mut() = vec![
        linear(SpeedType::Low, RangeType::Low, 1),
        linear(SpeedType::High, RangeType::Low, 2),
        linear(SpeedType::Low, RangeType::High, 3),
    ];
}

#[given("two linear candidates sharing the low/low classes")]
fn duplicate_candidates(candidates: &RefCell<Vec<DroneConfig>>) {
    *candidates.borrow_mut() = vec![
        linear(SpeedType::Low, RangeType::Low, 1),
        linear(SpeedType::Low, RangeType::Low, 9),
    ];
}

#[when("I select speed type high and range type low")]
fn select_high_low(
    candidates: &RefCell<Vec<DroneConfig>>,
    selection: &RefCell<Option<Result<DroneConfig, SelectionError>>>,
) {
    let list = candidates.borrow();
    let outcome = require_variant(DroneModel::Linear, &list, SpeedType::High, RangeType::Low)
        .copied();
    *selection.borrow_mut() = Some(outcome);
}

#[when("I select speed type low and range type low")]
fn select_low_low(
    candidates: &RefCell<Vec<DroneConfig>>,
    selection: &RefCell<Option<Result<DroneConfig, SelectionError>>>,
) {
    let list = candidates.borrow();
    let outcome =
        require_variant(DroneModel::Linear, &list, SpeedType::Low, RangeType::Low).copied();
    *selection.borrow_mut() = Some(outcome);
}

#[when("I require speed type high and range type high")]
fn require_high_high(
    candidates: &RefCell<Vec<DroneConfig>>,
    selection: &RefCell<Option<Result<DroneConfig, SelectionError>>>,
) {
    let list = candidates.borrow();
    assert!(select_variant(&list, SpeedType::High, RangeType::High).is_none());
    let outcome =
        require_variant(DroneModel::Linear, &list, SpeedType::High, RangeType::High).copied();
    *selection.borrow_mut() = Some(outcome);
}

#[then("the high/low candidate is returned")]
fn high_low_returned(selection: &RefCell<Option<Result<DroneConfig, SelectionError>>>) {
    match recorded(selection) {
        Ok(config) => {
            assert_eq!(config.speed_type(), SpeedType::High);
            assert_eq!(config.range_type(), RangeType::Low);
            assert_eq!(config.capacity(), Scalar::Integer(2));
        }
        Err(err) => panic!("selection should succeed, got {err}"),
    }
}

#[then("the first low/low candidate is returned")]
fn first_duplicate_returned(selection: &RefCell<Option<Result<DroneConfig, SelectionError>>>) {
    match recorded(selection) {
        Ok(config) => assert_eq!(config.capacity(), Scalar::Integer(1)),
        Err(err) => panic!("selection should succeed, got {err}"),
    }
}

#[then("selection fails naming the requested pair")]
fn selection_fails(selection: &RefCell<Option<Result<DroneConfig, SelectionError>>>) {
    match recorded(selection) {
        Ok(config) => panic!("expected no match, got {config:?}"),
        Err(SelectionError::NoMatch {
            model,
            speed_type,
            range_type,
            candidates,
        }) => {
            assert_eq!(model, DroneModel::Linear);
            assert_eq!(speed_type, SpeedType::High);
            assert_eq!(range_type, RangeType::High);
            let positions: Vec<usize> = candidates.iter().map(|c| c.position).collect();
            assert_eq!(positions, [0, 1, 2]);
        }
    }
}

#[scenario(path = "tests/features/variant_selection.feature", index = 0)]
fn selecting_unique_match(
    candidates: RefCell<Vec<DroneConfig>>,
    selection: RefCell<Option<Result<DroneConfig, SelectionError>>>,
) {
    let _ = (candidates, selection);
}

#[scenario(path = "tests/features/variant_selection.feature", index = 1)]
fn reporting_missing_pair(
    candidates: RefCell<Vec<DroneConfig>>,
    selection: RefCell<Option<Result<DroneConfig, SelectionError>>>,
) {
    let _ = (candidates, selection);
}

#[scenario(path = "tests/features/variant_selection.feature", index = 2)]
fn preferring_earliest_duplicate(
    candidates: RefCell<Vec<DroneConfig>>,
    selection: RefCell<Option<Result<DroneConfig, SelectionError>>>,
) {
    let _ = (candidates, selection);
}
