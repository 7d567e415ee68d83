use tracing::debug;

use crate::engine::constants::MENU_TABLE;
use crate::models::{CalorieRange, MenuRecommendation};

/// Menu whose threshold is the highest one not above `target`.
///
/// Falls back to the smallest menu when every threshold exceeds the target.
pub fn select_menu(target: f64) -> &'static MenuRecommendation {
    let mut best = &MENU_TABLE[0];
    for menu in &MENU_TABLE {
        if f64::from(menu.calories) <= target {
            best = menu;
        } else {
            // Sorted ascending: nothing further can qualify.
            break;
        }
    }
    best
}

/// Menu recommendation for a calorie range, keyed on its lower bound.
pub fn recommend_menu(range: Option<CalorieRange>) -> Option<&'static MenuRecommendation> {
    let range = range?;
    let menu = select_menu(range.min);
    debug!(target = range.min, menu_kcal = menu.calories, "selected menu");
    Some(menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_menu_exact_thresholds() {
        for menu in &MENU_TABLE {
            assert_eq!(select_menu(f64::from(menu.calories)).calories, menu.calories);
        }
    }

    #[test]
    fn test_select_menu_between_thresholds() {
        assert_eq!(select_menu(1600.0).calories, 1200);
        assert_eq!(select_menu(1799.9).calories, 1200);
        assert_eq!(select_menu(3000.0).calories, 2500);
    }

    #[test]
    fn test_select_menu_out_of_range() {
        assert_eq!(select_menu(399.0).calories, 400);
        assert_eq!(select_menu(-50.0).calories, 400);
        assert_eq!(select_menu(10_000.0).calories, 4500);
        assert_eq!(select_menu(f64::INFINITY).calories, 4500);
    }

    #[test]
    fn test_recommend_requires_range() {
        assert!(recommend_menu(None).is_none());
        let range = CalorieRange {
            min: 800.0,
            max: 1600.0,
        };
        assert_eq!(recommend_menu(Some(range)).map(|m| m.calories), Some(800));
    }
}
