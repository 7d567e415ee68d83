use tracing::debug;

use crate::engine::constants::*;
use crate::models::{CalorieRange, ImtCategory, Workload};

/// Parse the leading decimal number of a form field.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"65kg"`
/// reads as 65. Returns NaN when no number is present.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let end = numeric_prefix_len(trimmed);
    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// Byte length of the longest `[+-]digits[.digits][e[+-]digits]` prefix.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;

    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        if mantissa_digits > 0 {
            i = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }

    i
}

/// Round to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// IMT from numeric weight (kg) and height (cm).
///
/// Undefined when either value is NaN, height is zero, or the quotient is
/// not finite.
pub fn bmi_from_measurements(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg.is_nan() || height_cm.is_nan() || height_cm == 0.0 {
        return None;
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return None;
    }

    Some(round_one_decimal(bmi))
}

/// IMT from raw weight and height fields.
pub fn compute_bmi(weight: &str, height: &str) -> Option<f64> {
    let bmi = bmi_from_measurements(parse_number(weight), parse_number(height));
    debug!(weight, height, ?bmi, "computed imt");
    bmi
}

/// Classify an IMT value.
///
/// Normal is closed on both ends; Overweight is open below and closed above.
pub fn classify_bmi(bmi: Option<f64>) -> ImtCategory {
    match bmi {
        None => ImtCategory::Unknown,
        Some(v) if v < IMT_NORMAL_MIN => ImtCategory::Kurus,
        Some(v) if v <= IMT_NORMAL_MAX => ImtCategory::Normal,
        Some(v) if v <= IMT_OVERWEIGHT_MAX => ImtCategory::Overweight,
        Some(_) => ImtCategory::Obesitas,
    }
}

/// Calorie range for a workload over `hours` of work.
pub fn calories_for_hours(workload: Workload, hours: f64) -> Option<CalorieRange> {
    if !workload.is_selected() || hours.is_nan() || hours < MIN_SHIFT_HOURS {
        return None;
    }

    let info = workload_info(workload);
    Some(CalorieRange {
        min: info.min * hours,
        max: info.max * hours,
    })
}

/// Calorie range from the workload selection and the raw duration field.
pub fn estimate_calories(workload: Workload, duration: &str) -> Option<CalorieRange> {
    let range = calories_for_hours(workload, parse_number(duration));
    debug!(%workload, duration, ?range, "estimated calories");
    range
}

/// Advisory for a numeric duration under the minimum shift length.
///
/// Input is never rejected; this only feeds the display.
pub fn duration_advisory(duration: &str) -> Option<&'static str> {
    let hours = parse_number(duration);
    (hours < MIN_SHIFT_HOURS).then_some(DURATION_ADVISORY)
}
