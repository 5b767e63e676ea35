use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::source::SeededRandomSource;

/// A value paired with its relative selection weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedOption<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> WeightedOption<T> {
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Check a weight vector and return its total.
pub fn validate_weights(weights: &[f64]) -> Result<f64, ConfigError> {
    if weights.is_empty() {
        return Err(ConfigError::EmptyOptions);
    }
    let mut total = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::InvalidWeight { index, weight });
        }
        total += weight;
    }
    if !total.is_finite() {
        return Err(ConfigError::NonFinite { name: "total weight", value: total });
    }
    if total > 0.0 {
        Ok(total)
    } else {
        Err(ConfigError::ZeroTotalWeight)
    }
}

/// Index of the selected weight.
///
/// Scans left to right and takes the first non-zero weight whose running
/// total reaches the roll, so input order decides ties.
pub fn choose_index(source: &mut SeededRandomSource, weights: &[f64]) -> Result<usize, ConfigError> {
    let total = validate_weights(weights)?;
    let roll = source.next_uniform() * total;

    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if w > 0.0 && cumulative >= roll {
            return Ok(i);
        }
    }

    // Rounding left the roll above the final running total.
    Ok(weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1))
}

pub fn choose_weighted<'a, T>(
    source: &mut SeededRandomSource,
    options: &'a [T],
    weights: &[f64],
) -> Result<&'a T, ConfigError> {
    if options.len() != weights.len() {
        return Err(ConfigError::LengthMismatch {
            options: options.len(),
            weights: weights.len(),
        });
    }
    let index = choose_index(source, weights)?;
    Ok(&options[index])
}

pub fn choose_option<'a, T>(
    source: &mut SeededRandomSource,
    options: &'a [WeightedOption<T>],
) -> Result<&'a T, ConfigError> {
    let weights: Vec<f64> = options.iter().map(|o| o.weight).collect();
    let index = choose_index(source, &weights)?;
    Ok(&options[index].value)
}
