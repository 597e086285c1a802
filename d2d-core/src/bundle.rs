//! The fully assembled instance handed to the serializer.

use crate::{DroneConfig, Problem, TruckConfig};

/// Optimizer settings passed through without interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParameters {
    /// Number of search iterations.
    pub iterations: usize,
    /// Tabu list length per neighbourhood.
    pub tabu_size: usize,
    /// Whether the optimizer should log progress.
    pub verbose: bool,
}

impl RunParameters {
    /// Iteration count used when none is configured.
    pub const DEFAULT_ITERATIONS: usize = 100;
    /// Tabu size used when none is configured.
    pub const DEFAULT_TABU_SIZE: usize = 10;

    /// Builds run parameters from their parts.
    #[must_use]
    pub const fn new(iterations: usize, tabu_size: usize, verbose: bool) -> Self {
        Self {
            iterations,
            tabu_size,
            verbose,
        }
    }
}

impl Default for RunParameters {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS, Self::DEFAULT_TABU_SIZE, false)
    }
}

/// Every record needed to describe one optimizer run.
///
/// Holding a bundle means every input was loaded and the drone variant was
/// selected, so serializing it cannot fail on missing data.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceBundle {
    /// Customer table and fleet sizes.
    pub problem: Problem,
    /// Pass-through optimizer settings.
    pub run: RunParameters,
    /// Truck configuration.
    pub truck: TruckConfig,
    /// The single selected drone configuration.
    pub drone: DroneConfig,
}

impl InstanceBundle {
    /// Groups the assembled records.
    #[must_use]
    pub const fn new(
        problem: Problem,
        run: RunParameters,
        truck: TruckConfig,
        drone: DroneConfig,
    ) -> Self {
        Self {
            problem,
            run,
            truck,
            drone,
        }
    }
}
