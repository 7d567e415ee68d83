use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ImtCategory, MenuRecommendation, Workload};

/// Raw form input, exactly as typed.
///
/// Numeric fields stay textual; parsing happens during derivation so that
/// incomplete input degrades to an undefined result instead of an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    /// Body weight in kilograms.
    pub weight: String,
    /// Body height in centimeters.
    pub height: String,
    pub workload: Workload,
    /// Working hours per day.
    pub duration: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            weight: String::new(),
            height: String::new(),
            workload: Workload::None,
            duration: "4".to_string(),
        }
    }
}

impl FormInput {
    /// Build a form from typed text, including the workload name.
    pub fn parse(
        weight: impl Into<String>,
        height: impl Into<String>,
        workload: &str,
        duration: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::new(weight, height, workload.parse()?, duration))
    }

    pub fn new(
        weight: impl Into<String>,
        height: impl Into<String>,
        workload: Workload,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            weight: weight.into(),
            height: height.into(),
            workload,
            duration: duration.into(),
        }
    }
}

/// Daily calorie expenditure range for a shift, in kcal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieRange {
    pub min: f64,
    pub max: f64,
}

/// Every value derived from one form input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub input: FormInput,
    /// IMT rounded to one decimal; absent when it cannot be computed.
    pub imt: Option<f64>,
    pub category: ImtCategory,
    pub calorie_range: Option<CalorieRange>,
    pub menu: Option<&'static MenuRecommendation>,
    /// Non-blocking notice about the shift length.
    pub advisory: Option<&'static str>,
}
