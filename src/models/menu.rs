use serde::Serialize;

/// A single dish in a menu recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: &'static str,
    pub kcal: u32,
}

/// A menu bound to a calorie threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuRecommendation {
    /// Threshold in kcal; the catalog is sorted ascending on this field.
    pub calories: u32,
    pub items: &'static [MenuItem],
}

impl MenuRecommendation {
    /// Sum of the item calories.
    pub fn total_item_kcal(&self) -> u32 {
        self.items.iter().map(|item| item.kcal).sum()
    }
}
