use dialoguer::{Confirm, Input, Select};

use crate::engine::constants::workload_info;
use crate::engine::calculations::duration_advisory;
use crate::error::Result;
use crate::models::{FormInput, Workload};

/// Prompt for a free-text numeric field, prefilled with its current value.
///
/// The text is returned unparsed; invalid numbers simply leave the result undefined.
fn prompt_field(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Prompt for body weight in kilograms.
pub fn prompt_weight(current: &str) -> Result<String> {
    prompt_field("Berat Badan (kg), contoh: 65", current)
}

/// Prompt for body height in centimeters.
pub fn prompt_height(current: &str) -> Result<String> {
    prompt_field("Tinggi Badan (cm), contoh: 170", current)
}

/// Prompt for working hours per day.
///
/// Durations under the minimum are accepted; the advisory is echoed right away.
pub fn prompt_duration(current: &str) -> Result<String> {
    let duration = prompt_field("Durasi Kerja (Jam/Hari), minimal 4 jam", current)?;
    if let Some(advisory) = duration_advisory(&duration) {
        println!("  ! {}", advisory);
    }
    Ok(duration)
}

/// Prompt for the workload tier.
pub fn prompt_workload(current: Workload) -> Result<Workload> {
    let mut options: Vec<String> = Workload::TIERS
        .iter()
        .map(|tier| {
            let info = workload_info(*tier);
            format!("{} - {}", info.label, info.examples.join(", "))
        })
        .collect();
    options.push("Lewati (tanpa beban kerja)".to_string());

    let default = Workload::TIERS
        .iter()
        .position(|tier| *tier == current)
        .unwrap_or(Workload::TIERS.len());

    let selection = Select::new()
        .with_prompt("Jenis Beban Kerja")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(Workload::TIERS
        .get(selection)
        .copied()
        .unwrap_or(Workload::None))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a complete form, starting from the current values.
pub fn collect_form_input(current: &FormInput) -> Result<FormInput> {
    let weight = prompt_weight(&current.weight)?;
    let height = prompt_height(&current.height)?;
    let workload = prompt_workload(current.workload)?;
    let duration = prompt_duration(&current.duration)?;

    Ok(FormInput::new(weight, height, workload, duration))
}
