//! Per-activity duration estimates for a validated input.

use serde::Serialize;

use crate::activity::{Activity, Catalog};
use crate::calculator::{format_duration_label, required_seconds};
use crate::input::CalculationInput;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEstimate {
    pub activity: Activity,
    /// Always at least 1.
    pub target_seconds: u64,
    pub duration_label: String,
}

pub fn estimate(input: &CalculationInput, activity: &Activity) -> ActivityEstimate {
    let target_seconds = required_seconds(input.calories, input.weight_kg, activity.mets);
    ActivityEstimate {
        activity: activity.clone(),
        target_seconds,
        duration_label: format_duration_label(target_seconds),
    }
}

/// One estimate per catalog entry, in catalog order.
pub fn estimate_all(input: &CalculationInput, catalog: &Catalog) -> Vec<ActivityEstimate> {
    catalog.iter().map(|a| estimate(input, a)).collect()
}

/// Sentence echoing the parsed inputs above the result cards.
pub fn summary_line(input: &CalculationInput) -> String {
    format!(
        "Estimates for {} kcal at body weight {} kg.",
        input.calories, input.weight_kg
    )
}
