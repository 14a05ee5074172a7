//! Calorie to activity-duration conversion and time formatting.
//!
//! ```text
//! hours   = kcal / (METs × weight_kg × 1.05)
//! seconds = max(1, round(hours × 3600))
//! ```

/// Body weight used when the user leaves the field blank.
pub const DEFAULT_WEIGHT_KG: f64 = 60.0;

/// Correction factor applied to METs × weight in the energy formula.
pub const ENERGY_CORRECTION: f64 = 1.05;

const SECS_PER_HOUR: f64 = 3600.0;

/// Seconds needed to burn `calories` doing an activity of intensity `mets`.
///
/// Never returns less than one second, so even a tiny calorie amount yields
/// a challenge that can actually be started.
pub fn required_seconds(calories: f64, weight_kg: f64, mets: f64) -> u64 {
    let hours = calories / (mets * weight_kg * ENERGY_CORRECTION);
    let seconds = (hours * SECS_PER_HOUR).round();
    // NaN casts to 0 and is caught by the floor below.
    (seconds as u64).max(1)
}

/// A duration broken into clock components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

pub fn split_time(total_seconds: u64) -> ClockParts {
    ClockParts {
        hours: total_seconds / 3600,
        minutes: (total_seconds % 3600) / 60,
        seconds: total_seconds % 60,
    }
}

/// Live timer text: `MM:SS` below one hour, `HH:MM:SS` from then on.
pub fn format_clock(total_seconds: u64) -> String {
    let ClockParts {
        hours,
        minutes,
        seconds,
    } = split_time(total_seconds);
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Approximate label for an estimate, rounded to whole minutes (minimum 1).
pub fn format_duration_label(total_seconds: u64) -> String {
    let minutes = ((total_seconds as f64 / 60.0).round() as u64).max(1);
    if minutes < 60 {
        return format!("approx. {minutes} minutes");
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("approx. {hours} hours")
    } else {
        format!("approx. {hours} hours {rest} minutes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_300_kcal_at_60_kg() {
        let secs = required_seconds(300.0, 60.0, 7.0);
        assert_eq!(secs, 2449);
        assert_eq!(format_duration_label(secs), "approx. 41 minutes");
    }

    #[test]
    fn tiny_amounts_floor_at_one_second() {
        assert_eq!(required_seconds(0.0001, 60.0, 8.0), 1);
        assert_eq!(required_seconds(0.0, 60.0, 8.0), 1);
    }

    #[test]
    fn degenerate_inputs_still_floor_at_one_second() {
        assert_eq!(required_seconds(f64::NAN, 60.0, 3.3), 1);
        assert_eq!(required_seconds(-50.0, 60.0, 3.3), 1);
    }

    #[test]
    fn heavier_body_needs_less_time() {
        let light = required_seconds(200.0, 50.0, 4.0);
        let heavy = required_seconds(200.0, 90.0, 4.0);
        assert!(heavy < light);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "01:00:00");
        assert_eq!(format_clock(3661), "01:01:01");
    }

    #[test]
    fn label_formatting() {
        assert_eq!(format_duration_label(30), "approx. 1 minutes");
        assert_eq!(format_duration_label(1), "approx. 1 minutes");
        assert_eq!(format_duration_label(89), "approx. 1 minutes");
        assert_eq!(format_duration_label(90), "approx. 2 minutes");
        assert_eq!(format_duration_label(3570), "approx. 1 hours");
        assert_eq!(format_duration_label(3600), "approx. 1 hours");
        assert_eq!(format_duration_label(3900), "approx. 1 hours 5 minutes");
        assert_eq!(format_duration_label(7200 + 59 * 60), "approx. 2 hours 59 minutes");
    }

    #[test]
    fn split_time_components() {
        assert_eq!(
            split_time(3725),
            ClockParts {
                hours: 1,
                minutes: 2,
                seconds: 5
            }
        );
    }
}
