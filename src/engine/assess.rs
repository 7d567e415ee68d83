use tracing::debug;

use crate::engine::calculations::{classify_bmi, compute_bmi, duration_advisory, estimate_calories};
use crate::engine::recommend::recommend_menu;
use crate::models::{Assessment, FormInput};

/// Derive every output from the current form input.
///
/// Pure: equal inputs always give equal assessments.
pub fn assess(input: &FormInput) -> Assessment {
    let imt = compute_bmi(&input.weight, &input.height);
    let category = classify_bmi(imt);
    let calorie_range = estimate_calories(input.workload, &input.duration);
    let menu = recommend_menu(calorie_range);
    let advisory = duration_advisory(&input.duration);

    if let Some(message) = advisory {
        debug!(duration = %input.duration, "{}", message);
    }
    debug!(?imt, %category, ?calorie_range, "assessment derived");

    Assessment {
        input: input.clone(),
        imt,
        category,
        calorie_range,
        menu,
        advisory,
    }
}
