use bodymetrics::api::assess_batch;
use bodymetrics::batch::{load_inputs, write_results};
use bodymetrics::config::PlannerParams;
use bodymetrics::error::BodyMetricsError;
use bodymetrics::units::{ActivityLevel, Gender, RawInput, UnitScheme};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    input_path: PathBuf,
    output_path: PathBuf,
}

impl TestContext {
    fn new(rows: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input_path = dir.path().join("people.csv");
        let output_path = dir.path().join("results.csv");

        let mut file = File::create(&input_path).unwrap();
        writeln!(file, "unit,weight,height,height_secondary,age,gender,activity").unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }

        Self {
            _dir: dir,
            input_path,
            output_path,
        }
    }
}

#[test]
fn test_load_valid_rows() {
    let ctx = TestContext::new(&[
        "metric,70,170,,30,male,moderately_active",
        "imperial,154,67,,45,female,sedentary",
        "mixed,70,5,7,60,other,very_active",
    ]);
    let inputs = load_inputs(&ctx.input_path).unwrap();

    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs[0], RawInput::default());
    assert_eq!(inputs[1].unit_scheme, UnitScheme::Imperial);
    assert_eq!(inputs[1].gender, Gender::Female);
    assert_eq!(inputs[1].activity_level, ActivityLevel::Sedentary);
    assert_eq!(inputs[2].height_secondary, 7.0);
}

#[test]
fn test_bad_rows_are_skipped() {
    let ctx = TestContext::new(&[
        "metric,70,170,,30,male,moderately_active",
        "furlongs,70,170,,30,male,moderately_active",
        "metric,heavy,170,,30,male,moderately_active",
        "metric,70,170,,30",
        "metric,80,180,,40,female,lightly_active",
    ]);
    let inputs = load_inputs(&ctx.input_path).unwrap();
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[1].weight_value, 80.0);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_inputs("no/such/file.csv").unwrap_err();
    assert!(matches!(err, BodyMetricsError::Io(_)));
}

#[test]
fn test_batch_preserves_order_and_isolates_failures() {
    let inputs = vec![
        RawInput::default(),
        RawInput {
            weight_value: -5.0,
            ..RawInput::default()
        },
        RawInput {
            weight_value: 45.0,
            ..RawInput::default()
        },
    ];
    let results = assess_batch(&inputs, &PlannerParams::default());

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().bmi.bmi, 24.22);
    assert!(matches!(
        results[1],
        Err(BodyMetricsError::InvalidMeasurement(_))
    ));
    assert_eq!(results[2].as_ref().unwrap().canonical.weight_kg, 45.0);
}

#[test]
fn test_write_results_csv() {
    let ctx = TestContext::new(&[]);
    let inputs = vec![
        RawInput::default(),
        RawInput {
            height_primary: 0.0,
            ..RawInput::default()
        },
    ];
    let outcomes = assess_batch(&inputs, &PlannerParams::default());
    let results: Vec<_> = inputs.into_iter().zip(outcomes).collect();
    write_results(&ctx.output_path, &results).unwrap();

    let mut rdr = csv::Reader::from_path(&ctx.output_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[0], "unit");
    assert_eq!(&headers[3], "bmi");

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "metric");
    assert_eq!(&rows[0][3], "24.22");
    assert_eq!(&rows[0][4], "Normal Weight");
    assert_eq!(&rows[0][5], "1672");
    assert!(rows[1][11].contains("height"));
}

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_columns_are_matched_by_header_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "reordered.csv",
        "Gender,age,activity,height,weight,unit\n\
         female,45,sedentary,67,154,imperial\n",
    );
    let inputs = load_inputs(&path).unwrap();

    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].unit_scheme, UnitScheme::Imperial);
    assert_eq!(inputs[0].weight_value, 154.0);
    assert_eq!(inputs[0].height_primary, 67.0);
    assert_eq!(inputs[0].height_secondary, 0.0);
    assert_eq!(inputs[0].age, 45);
    assert_eq!(inputs[0].gender, Gender::Female);
    assert_eq!(inputs[0].activity_level, ActivityLevel::Sedentary);
}

#[test]
fn test_missing_required_column_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "no_weight.csv",
        "unit,height,age,gender,activity\nmetric,170,30,male,sedentary\n",
    );
    match load_inputs(&path) {
        Err(BodyMetricsError::InvalidInput(msg)) => assert!(msg.contains("weight")),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}
