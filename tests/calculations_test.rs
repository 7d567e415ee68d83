use assert_float_eq::*;
use proptest::prelude::*;

use imt_calculator_rs::engine::{
    bmi_from_measurements, calories_for_hours, classify_bmi, compute_bmi, select_menu,
    MENU_TABLE, MIN_SHIFT_HOURS,
};
use imt_calculator_rs::models::{ImtCategory, Workload};

#[test]
fn test_reference_scenarios() {
    assert_eq!(compute_bmi("65", "170"), Some(22.5));
    assert_eq!(compute_bmi("50", "160"), Some(19.5));
    assert_eq!(compute_bmi("45", "170"), Some(15.6));
    assert_eq!(compute_bmi("80", "165"), Some(29.4));

    assert_eq!(classify_bmi(compute_bmi("65", "170")), ImtCategory::Normal);
    assert_eq!(classify_bmi(compute_bmi("50", "160")), ImtCategory::Normal);
    assert_eq!(classify_bmi(compute_bmi("45", "170")), ImtCategory::Kurus);
    assert_eq!(classify_bmi(compute_bmi("80", "165")), ImtCategory::Obesitas);
}

#[test]
fn test_zero_height_is_undefined() {
    for weight in ["0", "1", "65", "-10", "1000"] {
        assert_eq!(compute_bmi(weight, "0"), None);
        assert_eq!(classify_bmi(compute_bmi(weight, "0")), ImtCategory::Unknown);
    }
}

#[test]
fn test_non_numeric_is_undefined() {
    assert_eq!(compute_bmi("abc", "170"), None);
    assert_eq!(compute_bmi("65", ""), None);
    assert_eq!(compute_bmi("", ""), None);
}

#[test]
fn test_calorie_range_per_tier() {
    let expected = [
        (Workload::Ringan, 100.0, 200.0),
        (Workload::Sedang, 200.0, 350.0),
        (Workload::Berat, 350.0, 500.0),
    ];

    for (tier, per_hour_min, per_hour_max) in expected {
        let range = calories_for_hours(tier, 7.5).unwrap();
        assert_float_absolute_eq!(range.min, per_hour_min * 7.5, 1e-9);
        assert_float_absolute_eq!(range.max, per_hour_max * 7.5, 1e-9);
        assert_eq!(calories_for_hours(tier, 3.99), None);
        assert_eq!(calories_for_hours(tier, f64::NAN), None);
    }
}

#[test]
fn test_menu_edges() {
    assert_eq!(select_menu(0.0).calories, 400);
    assert_eq!(select_menu(-1.0).calories, 400);
    assert_eq!(select_menu(4500.0).calories, 4500);
    assert_eq!(select_menu(99_999.0).calories, 4500);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_bmi_matches_formula(weight in 1.0f64..300.0, height in 50.0f64..250.0) {
        let bmi = bmi_from_measurements(weight, height).unwrap();
        let height_m = height / 100.0;
        let expected = (weight / (height_m * height_m) * 10.0).round() / 10.0;
        prop_assert_eq!(bmi, expected);
    }

    #[test]
    fn prop_bmi_undefined_without_height(weight in -500.0f64..500.0) {
        prop_assert_eq!(bmi_from_measurements(weight, 0.0), None);
        prop_assert_eq!(bmi_from_measurements(f64::NAN, weight), None);
    }

    #[test]
    fn prop_category_is_monotonic(a in 5.0f64..60.0, b in 5.0f64..60.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rank = |c: ImtCategory| ImtCategory::CLASSIFIED.iter().position(|k| *k == c);
        prop_assert!(rank(classify_bmi(Some(lo))) <= rank(classify_bmi(Some(hi))));
    }

    #[test]
    fn prop_calorie_range_scales_with_hours(hours in 4.0f64..24.0) {
        for tier in Workload::TIERS {
            let range = calories_for_hours(tier, hours).unwrap();
            prop_assert!(range.min < range.max);
            prop_assert!(range.min >= 100.0 * MIN_SHIFT_HOURS);
        }
        prop_assert_eq!(calories_for_hours(Workload::None, hours), None);
    }

    #[test]
    fn prop_menu_is_highest_threshold_not_above_target(target in -1000.0f64..6000.0) {
        let menu = select_menu(target);
        // Same answer as a binary search over the sorted catalog.
        let idx = MENU_TABLE.partition_point(|m| f64::from(m.calories) <= target);
        let expected = MENU_TABLE[idx.saturating_sub(1)].calories;
        prop_assert_eq!(menu.calories, expected);
    }
}
