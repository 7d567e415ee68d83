use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use thiserror::Error;

/// Occupational workload tier (Beban Kerja).
///
/// `None` is the unselected state of a fresh form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Workload {
    Ringan,
    Sedang,
    Berat,
    #[default]
    None,
}

impl Workload {
    /// The three selectable tiers, lightest first.
    pub const TIERS: [Workload; 3] = [Workload::Ringan, Workload::Sedang, Workload::Berat];

    pub fn id(self) -> &'static str {
        match self {
            Workload::Ringan => "Ringan",
            Workload::Sedang => "Sedang",
            Workload::Berat => "Berat",
            Workload::None => "None",
        }
    }

    pub fn is_selected(self) -> bool {
        self != Workload::None
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Static reference entry for a workload tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadInfo {
    pub id: Workload,
    pub label: &'static str,
    /// Lower bound in kcal per working hour.
    pub min: f64,
    /// Upper bound in kcal per working hour.
    pub max: f64,
    pub examples: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ParseWorkloadError {
    pub input: String,
    pub suggestion: Option<Workload>,
}

impl fmt::Display for ParseWorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown workload '{}'", self.input)?;
        match self.suggestion {
            Some(w) => write!(f, " (did you mean '{}'?)", w),
            None => write!(f, " (expected Ringan, Sedang, Berat or None)"),
        }
    }
}

impl FromStr for Workload {
    type Err = ParseWorkloadError;

    /// Accepts the tier id, its roman numeral, or the English name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "-" => Ok(Workload::None),
            "ringan" | "i" | "light" => Ok(Workload::Ringan),
            "sedang" | "ii" | "moderate" => Ok(Workload::Sedang),
            "berat" | "iii" | "heavy" => Ok(Workload::Berat),
            _ => Err(ParseWorkloadError {
                input: s.to_string(),
                suggestion: suggest_workload(s),
            }),
        }
    }
}

/// Closest tier name by Jaro-Winkler similarity, if any scores above 0.8.
pub fn suggest_workload(input: &str) -> Option<Workload> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    Workload::TIERS
        .iter()
        .map(|w| (*w, jaro_winkler(&w.id().to_lowercase(), &needle)))
        .filter(|(_, score)| *score > 0.8)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(w, _)| w)
}
