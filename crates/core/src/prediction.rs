//! Heuristic relief-needs estimate.
//!
//! Needs scale linearly with population and with the mean of recent
//! severity scores relative to a baseline severity of 5.0.

#![allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "populations and unit counts stay far below 2^53; truncation is the intended rounding"
)]

use num_rational::BigRational;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEVERITY, HEURISTIC_MODEL, MAX_CONFIDENCE};

const FOOD_RATE: f64 = 0.25;
const MEDICAL_RATE: f64 = 0.06;
const SHELTER_RATE: f64 = 0.04;
const BASELINE_SEVERITY: f64 = 5.0;

/// Estimated relief units for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedsPrediction {
    pub region: String,
    pub food: i64,
    pub medical: i64,
    pub shelter: i64,
    pub confidence: f64,
    pub model: String,
}

/// Arithmetic mean of `values`, or [`DEFAULT_SEVERITY`] when empty.
///
/// The sum and division are exact; the result is rounded to `f64` once.
#[must_use]
pub fn mean_severity(values: &[f64]) -> f64 {
    if values.is_empty() {
        return DEFAULT_SEVERITY;
    }
    exact_mean(values).unwrap_or_else(|| values.iter().sum::<f64>() / values.len() as f64)
}

/// `None` when a value is not finite.
fn exact_mean(values: &[f64]) -> Option<f64> {
    let total = values.iter().map(|&v| BigRational::from_float(v)).sum::<Option<BigRational>>()?;
    (total / BigRational::from_integer(values.len().into())).to_f64()
}

/// Computes needs from a population and the recent severity scores of a region.
///
/// Unit counts are truncated toward zero, never rounded.
#[must_use]
pub fn estimate_needs(region: &str, population: i64, severities: &[f64]) -> NeedsPrediction {
    let severity = mean_severity(severities);
    let scale = severity / BASELINE_SEVERITY;
    let population = population as f64;
    let units = |rate: f64| (population * rate * scale) as i64;

    NeedsPrediction {
        region: region.to_owned(),
        food: units(FOOD_RATE),
        medical: units(MEDICAL_RATE),
        shelter: units(SHELTER_RATE),
        confidence: round2(MAX_CONFIDENCE.min(0.5 + severity / 10.0)),
        model: HEURISTIC_MODEL.to_owned(),
    }
}

/// Rounds to two decimals on the exact binary value, ties to even.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
