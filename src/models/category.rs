use std::fmt;

use serde::{Deserialize, Serialize};

/// IMT classification per the Kemenkes RI population standard.
///
/// `Unknown` is reported whenever no IMT value could be derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImtCategory {
    Kurus,
    Normal,
    Overweight,
    Obesitas,
    Unknown,
}

impl ImtCategory {
    /// Defined categories in ascending IMT order.
    pub const CLASSIFIED: [ImtCategory; 4] = [
        ImtCategory::Kurus,
        ImtCategory::Normal,
        ImtCategory::Overweight,
        ImtCategory::Obesitas,
    ];

    pub fn is_known(self) -> bool {
        self != ImtCategory::Unknown
    }
}

impl fmt::Display for ImtCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImtCategory::Kurus => "Kurus",
            ImtCategory::Normal => "Normal",
            ImtCategory::Overweight => "Overweight",
            ImtCategory::Obesitas => "Obesitas",
            ImtCategory::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Display data attached to a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub description: &'static str,
    /// Legend text for the range, absent for `Unknown`.
    pub range_label: Option<&'static str>,
}
