use crate::engine::constants::{
    category_info, workload_info, CALORIE_PLACEHOLDER, CALORIE_UNIT, HYPERTENSION_NOTE,
    HYPERTENSION_NOTE_TITLE, IMT_PLACEHOLDER, MENU_FOOTNOTE, MENU_TABLE,
};
use crate::models::{Assessment, CalorieRange, ImtCategory, MenuRecommendation, Workload};

/// IMT score text, or the placeholder when undefined.
pub fn format_imt(imt: Option<f64>) -> String {
    imt.map(|v| v.to_string())
        .unwrap_or_else(|| IMT_PLACEHOLDER.to_string())
}

/// Calorie range text, or the placeholder when undefined.
pub fn format_calorie_range(range: Option<CalorieRange>) -> String {
    match range {
        Some(r) => format!("{} - {}", r.min, r.max),
        None => CALORIE_PLACEHOLDER.to_string(),
    }
}

/// Display a full assessment in screen order.
pub fn display_assessment(assessment: &Assessment) {
    let info = category_info(assessment.category);

    println!();
    println!("=== Skor IMT Anda ===");
    println!();
    println!("  {}", format_imt(assessment.imt));
    println!("  [{}]", info.label);
    println!("  \"{}\"", info.description);

    println!();
    println!("=== Estimasi Kalori Kerja ===");
    println!();
    println!("  {}", format_calorie_range(assessment.calorie_range));
    println!("  {}", CALORIE_UNIT);

    let workload = assessment.input.workload;
    if workload.is_selected() {
        let info = workload_info(workload);
        println!("  [{}]", info.label);
        println!("  Contoh Aktivitas: {}", info.examples.join(", "));
    }

    if let Some(advisory) = assessment.advisory {
        println!("  ! {}", advisory);
    }

    if let Some(menu) = assessment.menu {
        display_menu(menu);
    }

    println!();
    println!("--- {} ---", HYPERTENSION_NOTE_TITLE);
    println!("{}", HYPERTENSION_NOTE);
    println!();
}

/// Display one menu recommendation with its footnote.
pub fn display_menu(menu: &MenuRecommendation) {
    let max_name_len = menu.items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    println!();
    println!("=== Rekomendasi Menu Asupan ===");
    println!();
    println!("  Target Menu: {} kkal", menu.calories);
    println!();

    for (i, item) in menu.items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>4} kkal",
            i + 1,
            item.name,
            item.kcal,
            width = max_name_len
        );
    }

    println!();
    println!("  Total: {} kkal", menu.total_item_kcal());
    println!("{}", MENU_FOOTNOTE);
}

/// Display the classification legend, workload tiers, and menu catalog.
pub fn display_reference_tables() {
    println!();
    println!("=== Klasifikasi IMT Indonesia ===");
    println!();
    for category in ImtCategory::CLASSIFIED {
        let info = category_info(category);
        println!(
            "  {:<10} {}",
            info.label,
            info.range_label.unwrap_or_default()
        );
    }

    println!();
    println!("=== Beban Kerja ===");
    println!();
    for tier in Workload::TIERS {
        let info = workload_info(tier);
        println!("  {} - {}-{} kkal/jam", info.label, info.min, info.max);
        println!("      {}", info.examples.join(", "));
    }

    println!();
    println!("=== Katalog Menu ({} items) ===", MENU_TABLE.len());
    for menu in &MENU_TABLE {
        println!();
        println!("  {} kkal", menu.calories);
        for item in menu.items {
            println!("    - {} ({} kkal)", item.name, item.kcal);
        }
    }
    println!();
}
