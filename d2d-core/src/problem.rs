//! Customer table and fleet sizes of a routing instance.

use thiserror::Error;

/// One customer location, assembled from the parallel columns of a
/// [`Problem`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Customer {
    /// Planar x coordinate.
    pub x: f64,
    /// Planar y coordinate.
    pub y: f64,
    /// Demand to be collected.
    pub demand: f64,
    /// Whether a drone may serve this customer.
    pub dronable: bool,
    /// Service time when visited by a truck, in seconds.
    pub truck_service_time: f64,
    /// Service time when visited by a drone, in seconds.
    pub drone_service_time: f64,
}

/// Column-oriented customer data, one entry per customer in source order.
///
/// Columns are filled together through [`CustomerColumns::push`]; the
/// length check happens when the columns are turned into a [`Problem`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerColumns {
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates.
    pub y: Vec<f64>,
    /// Demands.
    pub demands: Vec<f64>,
    /// Drone eligibility flags.
    pub dronable: Vec<bool>,
    /// Truck service times in seconds.
    pub truck_service_time: Vec<f64>,
    /// Drone service times in seconds.
    pub drone_service_time: Vec<f64>,
}

impl CustomerColumns {
    /// Append one customer to every column.
    pub fn push(&mut self, customer: Customer) {
        self.x.push(customer.x);
        self.y.push(customer.y);
        self.demands.push(customer.demand);
        self.dronable.push(customer.dronable);
        self.truck_service_time.push(customer.truck_service_time);
        self.drone_service_time.push(customer.drone_service_time);
    }

    fn lengths(&self) -> [(&'static str, usize); 6] {
        [
            ("x", self.x.len()),
            ("y", self.y.len()),
            ("demands", self.demands.len()),
            ("dronable", self.dronable.len()),
            ("truck_service_time", self.truck_service_time.len()),
            ("drone_service_time", self.drone_service_time.len()),
        ]
    }
}

impl FromIterator<Customer> for CustomerColumns {
    fn from_iter<I: IntoIterator<Item = Customer>>(iter: I) -> Self {
        let mut columns = Self::default();
        for customer in iter {
            columns.push(customer);
        }
        columns
    }
}

/// Errors returned by [`Problem::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProblemError {
    /// A customer column does not hold one entry per declared customer.
    #[error("{field} has {actual} entries but {expected} customers were declared")]
    LengthMismatch {
        /// Name of the offending column.
        field: &'static str,
        /// Declared customer count.
        expected: usize,
        /// Entries present in the column.
        actual: usize,
    },
}

/// A routing instance: fleet sizes and the customer table.
///
/// Every customer column has exactly `customers_count` entries and index `i`
/// refers to the same customer in all of them.
///
/// # Examples
///
/// ```
/// use d2d_core::{Customer, CustomerColumns, Problem};
///
/// # fn main() -> Result<(), d2d_core::ProblemError> {
/// let columns: CustomerColumns = [Customer {
///     x: 1.0,
///     y: 2.0,
///     demand: 5.0,
///     dronable: true,
///     truck_service_time: 3.0,
///     drone_service_time: 4.0,
/// }]
/// .into_iter()
/// .collect();
/// let problem = Problem::new("6.5.1", 1, 1, 1, columns)?;
/// assert_eq!(problem.x(), &[1.0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    problem: String,
    customers_count: usize,
    trucks_count: usize,
    drones_count: usize,
    columns: CustomerColumns,
}

impl Problem {
    /// Validates and constructs a [`Problem`].
    ///
    /// # Errors
    /// Returns [`ProblemError::LengthMismatch`] naming the first column whose
    /// length differs from `customers_count`.
    pub fn new(
        problem: impl Into<String>,
        customers_count: usize,
        trucks_count: usize,
        drones_count: usize,
        columns: CustomerColumns,
    ) -> Result<Self, ProblemError> {
        if let Some((field, actual)) = columns
            .lengths()
            .into_iter()
            .find(|(_, len)| *len != customers_count)
        {
            return Err(ProblemError::LengthMismatch {
                field,
                expected: customers_count,
                actual,
            });
        }
        Ok(Self {
            problem: problem.into(),
            customers_count,
            trucks_count,
            drones_count,
            columns,
        })
    }

    /// Problem identifier, without any file suffix.
    #[must_use]
    pub fn problem(&self) -> &str {
        &self.problem
    }

    /// Number of customers.
    #[must_use]
    pub const fn customers_count(&self) -> usize {
        self.customers_count
    }

    /// Number of trucks (technicians).
    #[must_use]
    pub const fn trucks_count(&self) -> usize {
        self.trucks_count
    }

    /// Number of drones.
    #[must_use]
    pub const fn drones_count(&self) -> usize {
        self.drones_count
    }

    /// X coordinates in customer order.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.columns.x
    }

    /// Y coordinates in customer order.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.columns.y
    }

    /// Demands in customer order.
    #[must_use]
    pub fn demands(&self) -> &[f64] {
        &self.columns.demands
    }

    /// Drone eligibility in customer order.
    #[must_use]
    pub fn dronable(&self) -> &[bool] {
        &self.columns.dronable
    }

    /// Truck service times in customer order.
    #[must_use]
    pub fn truck_service_time(&self) -> &[f64] {
        &self.columns.truck_service_time
    }

    /// Drone service times in customer order.
    #[must_use]
    pub fn drone_service_time(&self) -> &[f64] {
        &self.columns.drone_service_time
    }

    /// The customer at `index`, if any.
    #[must_use]
    pub fn customer(&self, index: usize) -> Option<Customer> {
        let columns = &self.columns;
        Some(Customer {
            x: *columns.x.get(index)?,
            y: *columns.y.get(index)?,
            demand: *columns.demands.get(index)?,
            dronable: *columns.dronable.get(index)?,
            truck_service_time: *columns.truck_service_time.get(index)?,
            drone_service_time: *columns.drone_service_time.get(index)?,
        })
    }

    /// Iterate over customers in source order.
    pub fn customers(&self) -> impl Iterator<Item = Customer> + '_ {
        (0..self.customers_count).filter_map(|index| self.customer(index))
    }
}
