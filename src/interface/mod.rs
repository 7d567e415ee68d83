pub mod prompts;
pub mod render;

pub use prompts::{
    collect_form_input, prompt_duration, prompt_height, prompt_weight, prompt_workload,
    prompt_yes_no,
};
pub use render::{
    display_assessment, display_menu, display_reference_tables, format_calorie_range, format_imt,
};
