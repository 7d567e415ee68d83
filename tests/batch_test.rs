use std::fs;
use std::io::Write;

use tempfile::{tempdir, NamedTempFile};

use imt_calculator_rs::engine::assess;
use imt_calculator_rs::error::ImtError;
use imt_calculator_rs::state::{load_inputs, write_results};

#[test]
fn test_batch_writes_one_row_per_input() {
    let csv = "weight,height,workload,duration\n\
               65,170,Sedang,8\n\
               45,170,ringan,3\n\
               abc,170,,\n";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let inputs = load_inputs(file.path()).unwrap();
    let results: Vec<_> = inputs.iter().map(assess).collect();

    let dir = tempdir().unwrap();
    let out = dir.path().join("results.csv");
    write_results(&out, &results).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "weight,height,workload,duration,imt,category,calorie_min,calorie_max,menu_kcal"
    );
    assert_eq!(lines[1], "65,170,Sedang,8,22.5,Normal,1600,2800,1200");
    assert_eq!(lines[2], "45,170,Ringan,3,15.6,Kurus,,,");
    assert_eq!(lines[3], "abc,170,None,,,Unknown,,,");
}

#[test]
fn test_missing_input_file_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.csv");

    let err = load_inputs(&missing).unwrap_err();
    assert!(matches!(err, ImtError::Csv(_)));
    assert!(err.to_string().starts_with("CSV error"));
}

#[test]
fn test_batch_accepts_roman_numerals() {
    let csv = "weight,height,workload,duration\n70,175,III,8\n";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let inputs = load_inputs(file.path()).unwrap();
    let result = assess(&inputs[0]);
    assert_eq!(result.calorie_range.map(|r| r.min), Some(2800.0));
    assert_eq!(result.menu.map(|m| m.calories), Some(2500));
}
