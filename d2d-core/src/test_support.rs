//! Ready-made records used by unit and behaviour tests.

use crate::{
    Customer, CustomerColumns, DroneCapability, DroneConfig, EnduranceDroneConfig, FlightProfile,
    InstanceBundle, LinearDroneConfig, Problem, RangeType, RunParameters, Scalar, SpeedType,
    TruckConfig,
};

/// A customer at `(x, y)` with fixed demand and service times.
#[must_use]
pub const fn customer(x: f64, y: f64, dronable: bool) -> Customer {
    Customer {
        x,
        y,
        demand: 1.0,
        dronable,
        truck_service_time: 60.0,
        drone_service_time: 30.0,
    }
}

/// The two-customer problem used throughout the behaviour scenarios.
///
/// # Panics
/// Panics if the fixture columns stop matching the declared count.
#[must_use]
pub fn two_customer_problem() -> Problem {
    let columns: CustomerColumns = [
        Customer {
            x: 1.0,
            y: 2.0,
            demand: 5.0,
            dronable: true,
            truck_service_time: 3.0,
            drone_service_time: 4.0,
        },
        Customer {
            x: -1.0,
            y: 0.0,
            demand: 2.5,
            dronable: false,
            truck_service_time: 1.0,
            drone_service_time: 1.0,
        },
    ]
    .into_iter()
    .collect();
    match Problem::new("two-customers", 2, 1, 1, columns) {
        Ok(problem) => problem,
        Err(err) => panic!("fixture problem must be valid: {err}"),
    }
}

/// A truck with three hourly coefficients and an integer capacity.
#[must_use]
pub fn sample_truck() -> TruckConfig {
    TruckConfig::new(
        Scalar::Float(15.557),
        Scalar::Integer(1500),
        [0.7, 0.4, 0.6].map(Scalar::Float).to_vec(),
    )
}

/// A linear drone with the given classes and a fractional capacity.
///
/// Altitude, battery and gamma are integers, as in the shipped files.
#[must_use]
pub const fn linear_drone(
    speed_type: SpeedType,
    range_type: RangeType,
    capacity: f64,
) -> DroneConfig {
    DroneConfig::Linear(LinearDroneConfig {
        capability: DroneCapability {
            capacity: Scalar::Float(capacity),
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

/// An endurance drone with the given classes and integer parameters.
#[must_use]
pub const fn endurance_drone(speed_type: SpeedType, range_type: RangeType) -> DroneConfig {
    DroneConfig::Endurance(EnduranceDroneConfig {
        capability: DroneCapability {
            capacity: Scalar::Integer(2),
            speed_type,
            range_type,
        },
        fixed_time: Scalar::Integer(1800),
        fixed_distance: Scalar::Integer(10_000),
        drone_speed: Scalar::Integer(20),
    })
}

/// A complete bundle with default run parameters and a high/low linear drone.
#[must_use]
pub fn sample_bundle() -> InstanceBundle {
    InstanceBundle::new(
        two_customer_problem(),
        RunParameters::default(),
        sample_truck(),
        linear_drone(SpeedType::High, RangeType::Low, 2.27),
    )
}
