use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ImtError, Result};
use crate::models::{Assessment, FormInput, Workload};

/// One CSV row as typed; every cell is optional text.
#[derive(Debug, Deserialize)]
struct InputRecord {
    #[serde(default)]
    weight: String,
    #[serde(default)]
    height: String,
    #[serde(default)]
    workload: String,
    #[serde(default)]
    duration: String,
}

/// Load form inputs from a CSV file with a `weight,height,workload,duration` header.
///
/// Numeric cells are kept verbatim. An unrecognised workload fails with the
/// offending row number (1-based, header excluded).
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<FormInput>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut inputs = Vec::new();
    for (i, record) in rdr.deserialize::<InputRecord>().enumerate() {
        let record = record?;
        let workload: Workload = record
            .workload
            .parse()
            .map_err(|source| ImtError::UnknownWorkload { row: i + 1, source })?;

        inputs.push(FormInput::new(
            record.weight,
            record.height,
            workload,
            record.duration,
        ));
    }

    info!(rows = inputs.len(), "loaded batch inputs");
    Ok(inputs)
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write assessments to a CSV file, leaving undefined values empty.
pub fn write_results<P: AsRef<Path>>(path: P, results: &[Assessment]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "weight",
        "height",
        "workload",
        "duration",
        "imt",
        "category",
        "calorie_min",
        "calorie_max",
        "menu_kcal",
    ])?;

    for result in results {
        let input = &result.input;
        wtr.write_record([
            input.weight.clone(),
            input.height.clone(),
            input.workload.to_string(),
            input.duration.clone(),
            cell(result.imt),
            result.category.to_string(),
            cell(result.calorie_range.map(|r| r.min)),
            cell(result.calorie_range.map(|r| r.max)),
            result
                .menu
                .map(|m| m.calories.to_string())
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    info!(rows = results.len(), "wrote batch results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_inputs() {
        let csv = "weight,height,workload,duration\n65,170,Sedang,8\n50,160,,\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let inputs = load_inputs(file.path()).unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], FormInput::new("65", "170", Workload::Sedang, "8"));
        assert_eq!(inputs[1].workload, Workload::None);
        assert_eq!(inputs[1].duration, "");
    }

    #[test]
    fn test_load_inputs_bad_workload() {
        let csv = "weight,height,workload,duration\n65,170,Sedang,8\n65,170,Santai,8\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let err = load_inputs(file.path()).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }
}
