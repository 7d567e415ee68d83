use crate::models::{
    CategoryInfo, ImtCategory, MenuItem, MenuRecommendation, Workload, WorkloadInfo,
};

// ─────────────────────────────────────────────────────────────────────────────
// IMT thresholds (Kemenkes RI)
// ─────────────────────────────────────────────────────────────────────────────

/// Below this value the category is Kurus.
pub const IMT_NORMAL_MIN: f64 = 18.5;

/// Upper bound of Normal, inclusive.
pub const IMT_NORMAL_MAX: f64 = 25.0;

/// Upper bound of Overweight, inclusive. Anything above is Obesitas.
pub const IMT_OVERWEIGHT_MAX: f64 = 27.0;

// ─────────────────────────────────────────────────────────────────────────────
// Workload
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum shift length in hours (SNI).
pub const MIN_SHIFT_HOURS: f64 = 4.0;

/// Shown when a numeric duration is below `MIN_SHIFT_HOURS`.
pub const DURATION_ADVISORY: &str = "Minimal 4 jam sesuai standar SNI";

pub static WORKLOAD_RINGAN: WorkloadInfo = WorkloadInfo {
    id: Workload::Ringan,
    label: "Beban Kerja Ringan (I)",
    min: 100.0,
    max: 200.0,
    examples: &[
        "Menulis",
        "Merajut",
        "Menyetrika",
        "Mengetik",
        "Menyapu lantai",
        "Menggergaji (duduk)",
    ],
};

pub static WORKLOAD_SEDANG: WorkloadInfo = WorkloadInfo {
    id: Workload::Sedang,
    label: "Beban Kerja Sedang (II)",
    min: 200.0,
    max: 350.0,
    examples: &[
        "Menggergaji (berdiri)",
        "Memukul paku",
        "Menambal logam",
        "Mengemas barang",
        "Memompa",
        "Menempa besi",
    ],
};

pub static WORKLOAD_BERAT: WorkloadInfo = WorkloadInfo {
    id: Workload::Berat,
    label: "Beban Kerja Berat (III)",
    min: 350.0,
    max: 500.0,
    examples: &[
        "Mengepel (2 tangan)",
        "Membersihkan karpet",
        "Menggali lubang",
        "Menebang pohon",
        "Mendorong kereta muatan",
    ],
};

pub static WORKLOAD_NONE: WorkloadInfo = WorkloadInfo {
    id: Workload::None,
    label: "Pilih Beban Kerja",
    min: 0.0,
    max: 0.0,
    examples: &[],
};

/// Reference entry for a workload tier.
pub fn workload_info(workload: Workload) -> &'static WorkloadInfo {
    match workload {
        Workload::Ringan => &WORKLOAD_RINGAN,
        Workload::Sedang => &WORKLOAD_SEDANG,
        Workload::Berat => &WORKLOAD_BERAT,
        Workload::None => &WORKLOAD_NONE,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Category display data
// ─────────────────────────────────────────────────────────────────────────────

static CATEGORY_KURUS: CategoryInfo = CategoryInfo {
    label: "Kurus",
    description: "Berat badan Anda di bawah rentang normal. Disarankan untuk meningkatkan asupan nutrisi seimbang.",
    range_label: Some("< 18.5"),
};

static CATEGORY_NORMAL: CategoryInfo = CategoryInfo {
    label: "Normal",
    description: "Selamat! Berat badan Anda berada dalam rentang ideal. Pertahankan pola makan dan olahraga rutin.",
    range_label: Some("18.5 - 25.0"),
};

static CATEGORY_OVERWEIGHT: CategoryInfo = CategoryInfo {
    label: "Overweight",
    description: "Berat badan Anda sedikit melebihi batas normal. Perhatikan porsi makan dan tingkatkan aktivitas fisik.",
    range_label: Some("25.1 - 27.0"),
};

static CATEGORY_OBESITAS: CategoryInfo = CategoryInfo {
    label: "Obesitas",
    description: "Berat badan Anda masuk kategori obesitas. Sebaiknya konsultasikan dengan ahli gizi atau dokter.",
    range_label: Some("> 27.0"),
};

static CATEGORY_UNKNOWN: CategoryInfo = CategoryInfo {
    label: "-",
    description: "Masukkan data untuk melihat hasil.",
    range_label: None,
};

/// Display data for a category.
pub fn category_info(category: ImtCategory) -> &'static CategoryInfo {
    match category {
        ImtCategory::Kurus => &CATEGORY_KURUS,
        ImtCategory::Normal => &CATEGORY_NORMAL,
        ImtCategory::Overweight => &CATEGORY_OVERWEIGHT,
        ImtCategory::Obesitas => &CATEGORY_OBESITAS,
        ImtCategory::Unknown => &CATEGORY_UNKNOWN,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Static display text
// ─────────────────────────────────────────────────────────────────────────────

pub const MENU_FOOTNOTE: &str = "* Menu ini adalah rekomendasi asupan tambahan untuk menyeimbangkan energi yang dikeluarkan selama bekerja.";

pub const HYPERTENSION_NOTE_TITLE: &str = "Mengapa IMT Penting?";

pub const HYPERTENSION_NOTE: &str = "Indeks Massa Tubuh (IMT) yang tidak ideal sangat berkaitan erat dengan risiko Hipertensi. Menjaga IMT dalam rentang normal adalah langkah kunci dalam mengontrol tekanan darah dan mencegah komplikasi kardiovaskular.";

pub const IMT_PLACEHOLDER: &str = "--.-";

pub const CALORIE_PLACEHOLDER: &str = "-- - --";

/// Unit line shown under the calorie display, with or without a value.
pub const CALORIE_UNIT: &str = "kkal / hari";

// ─────────────────────────────────────────────────────────────────────────────
// Menu catalog
// ─────────────────────────────────────────────────────────────────────────────

const fn item(name: &'static str, kcal: u32) -> MenuItem {
    MenuItem { name, kcal }
}

/// Menu catalog, sorted ascending by threshold.
pub static MENU_TABLE: [MenuRecommendation; 7] = [
    MenuRecommendation {
        calories: 400,
        items: &[
            item("1 roti gandum isi telur & selada", 250),
            item("1 pisang ukuran sedang", 100),
            item("Teh manis hangat", 50),
        ],
    },
    MenuRecommendation {
        calories: 800,
        items: &[
            item("Nasi putih 150 gr", 250),
            item("Ayam goreng 1 potong sedang", 250),
            item("Tumis sayur", 100),
            item("Tahu goreng", 100),
            item("Jus jeruk", 100),
        ],
    },
    MenuRecommendation {
        calories: 1200,
        items: &[
            item("Nasi putih 200 gr", 330),
            item("Daging sapi semur 100 gr", 250),
            item("Tempe goreng", 150),
            item("Sayur sop", 150),
            item("Susu full cream", 200),
            item("Buah", 120),
        ],
    },
    MenuRecommendation {
        calories: 1800,
        items: &[
            item("Nasi putih 300 gr", 500),
            item("Ayam bakar 1 potong besar", 350),
            item("Telur dadar", 200),
            item("Tumis kangkung", 150),
            item("Tempe goreng", 200),
            item("Jus alpukat", 400),
        ],
    },
    MenuRecommendation {
        calories: 2500,
        items: &[
            item("Nasi putih 400 gr", 660),
            item("Daging rendang 150 gr", 450),
            item("Ayam goreng", 300),
            item("Tempe & tahu", 300),
            item("Sayur lodeh", 250),
            item("Susu + roti", 540),
        ],
    },
    MenuRecommendation {
        calories: 3500,
        items: &[
            item("Nasi putih 600 gr", 1000),
            item("Rendang 200 gr", 600),
            item("Ayam goreng besar", 400),
            item("Telur 2 butir", 300),
            item("Tempe goreng", 300),
            item("Sayur", 200),
            item("Jus alpukat + susu", 500),
            item("Snack kacang", 200),
        ],
    },
    MenuRecommendation {
        calories: 4500,
        items: &[
            item("Nasi putih 800 gr", 1300),
            item("Rendang 250 gr", 750),
            item("Ayam goreng besar", 400),
            item("Telur 3 butir", 450),
            item("Tempe + tahu", 400),
            item("Sayur bersantan", 300),
            item("Susu 2 gelas", 400),
            item("Roti + selai kacang", 300),
            item("Jus alpukat + madu", 500),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_table_sorted_ascending() {
        assert!(MENU_TABLE.windows(2).all(|w| w[0].calories < w[1].calories));
    }

    #[test]
    fn test_workload_bounds_ordered() {
        for tier in Workload::TIERS {
            let info = workload_info(tier);
            assert_eq!(info.id, tier);
            assert!(info.min < info.max);
            assert!(!info.examples.is_empty());
        }
        assert!(workload_info(Workload::None).examples.is_empty());
    }

    #[test]
    fn test_unknown_category_has_no_range() {
        assert_eq!(category_info(ImtCategory::Unknown).label, "-");
        assert!(category_info(ImtCategory::Unknown).range_label.is_none());
        for category in ImtCategory::CLASSIFIED {
            assert!(category_info(category).range_label.is_some());
        }
    }
}
