//! Truck configuration shared by every truck in an instance.

use crate::Scalar;

/// Physical limits and hourly speed coefficients of the truck fleet.
///
/// `coefficients` keeps the order of the source table, one value per
/// discrete time bucket.
///
/// # Examples
///
/// ```
/// use d2d_core::{Scalar, TruckConfig};
///
/// let truck = TruckConfig::new(
///     Scalar::Float(15.557),
///     Scalar::Integer(1500),
///     vec![Scalar::Float(0.7), Scalar::Float(0.4)],
/// );
/// assert_eq!(truck.coefficients.len(), 2);
/// assert_eq!(truck.capacity.to_string(), "1500");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TruckConfig {
    /// Maximum velocity in metres per second.
    pub maximum_velocity: Scalar,
    /// Load capacity in kilograms.
    pub capacity: Scalar,
    /// Speed coefficients in source order.
    pub coefficients: Vec<Scalar>,
}

impl TruckConfig {
    /// Builds a truck configuration from its parts.
    #[must_use]
    pub const fn new(
        maximum_velocity: Scalar,
        capacity: Scalar,
        coefficients: Vec<Scalar>,
    ) -> Self {
        Self {
            maximum_velocity,
            capacity,
            coefficients,
        }
    }
}
