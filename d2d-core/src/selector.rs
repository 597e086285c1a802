//! Picks one drone configuration out of the candidates of a model.

use std::fmt;

use thiserror::Error;

use crate::{DroneConfig, DroneModel, RangeType, Scalar, SpeedType};

/// What a [`SelectionError`] reports about one rejected candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateSummary {
    /// Zero-based position in the candidate list.
    pub position: usize,
    /// Speed class of the candidate.
    pub speed_type: SpeedType,
    /// Range class of the candidate.
    pub range_type: RangeType,
    /// Payload capacity, which tells duplicate pairs apart.
    pub capacity: Scalar,
}

impl CandidateSummary {
    fn of(position: usize, candidate: &DroneConfig) -> Self {
        Self {
            position,
            speed_type: candidate.speed_type(),
            range_type: candidate.range_type(),
            capacity: candidate.capacity(),
        }
    }
}

impl fmt::Display for CandidateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}/{} capacity {}",
            self.position, self.speed_type, self.range_type, self.capacity
        )
    }
}

/// Errors returned by [`require_variant`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    /// No candidate carries the requested speed and range classes.
    #[error(
        "no {model} drone configuration has speed_type={speed_type} and range_type={range_type} (candidates: {})",
        describe_candidates(.candidates)
    )]
    NoMatch {
        /// Model whose candidates were searched.
        model: DroneModel,
        /// Requested speed class.
        speed_type: SpeedType,
        /// Requested range class.
        range_type: RangeType,
        /// Every candidate that was searched, in search order.
        candidates: Vec<CandidateSummary>,
    },
}

fn describe_candidates(candidates: &[CandidateSummary]) -> String {
    if candidates.is_empty() {
        return "none".to_owned();
    }
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Return the first candidate whose speed and range classes both match.
///
/// Candidate order is the tie-break when several records match.
///
/// # Examples
/// ```
/// use d2d_core::{select_variant, RangeType, SpeedType};
///
/// assert!(select_variant(&[], SpeedType::Low, RangeType::Low).is_none());
/// ```
#[must_use]
pub fn select_variant(
    candidates: &[DroneConfig],
    speed_type: SpeedType,
    range_type: RangeType,
) -> Option<&DroneConfig> {
    candidates.iter().find(|candidate| {
        candidate.speed_type() == speed_type && candidate.range_type() == range_type
    })
}

/// Like [`select_variant`], but a missing match is an error.
///
/// # Errors
/// Returns [`SelectionError::NoMatch`] listing the requested pair and a
/// summary of every candidate when nothing matches.
pub fn require_variant(
    model: DroneModel,
    candidates: &[DroneConfig],
    speed_type: SpeedType,
    range_type: RangeType,
) -> Result<&DroneConfig, SelectionError> {
    select_variant(candidates, speed_type, range_type).ok_or_else(|| SelectionError::NoMatch {
        model,
        speed_type,
        range_type,
        candidates: candidates
            .iter()
            .enumerate()
            .map(|(position, candidate)| CandidateSummary::of(position, candidate))
            .collect(),
    })
}
