//! Validation of the calculator form.

use serde::Serialize;

use crate::error::InputError;

/// Validated calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInput {
    pub calories: f64,
    pub weight_kg: f64,
}

impl CalculationInput {
    /// Validate numeric values. `None` weight falls back to `default_weight`.
    pub fn new(
        calories: f64,
        weight_kg: Option<f64>,
        default_weight: f64,
    ) -> Result<Self, InputError> {
        if !is_positive(calories) {
            return Err(InputError::InvalidCalories);
        }
        let weight_kg = match weight_kg {
            None => default_weight,
            Some(w) if is_positive(w) => w,
            Some(_) => return Err(InputError::InvalidWeight),
        };
        Ok(Self {
            calories,
            weight_kg,
        })
    }

    /// Validate raw form text. A blank weight field means "use the default".
    pub fn parse(
        calories_raw: &str,
        weight_raw: Option<&str>,
        default_weight: f64,
    ) -> Result<Self, InputError> {
        let calories_raw = calories_raw.trim();
        if calories_raw.is_empty() {
            return Err(InputError::MissingCalories);
        }
        let calories = calories_raw
            .parse::<f64>()
            .map_err(|_| InputError::InvalidCalories)?;

        let weight = match weight_raw.map(str::trim).filter(|w| !w.is_empty()) {
            None => None,
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| InputError::InvalidWeight)?),
        };

        Self::new(calories, weight, default_weight)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
