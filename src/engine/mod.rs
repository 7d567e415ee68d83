pub mod assess;
pub mod calculations;
pub mod constants;
pub mod recommend;

pub use assess::assess;
pub use calculations::{
    bmi_from_measurements, calories_for_hours, classify_bmi, compute_bmi, duration_advisory,
    estimate_calories, parse_number, round_one_decimal,
};
pub use constants::*;
pub use recommend::{recommend_menu, select_menu};
