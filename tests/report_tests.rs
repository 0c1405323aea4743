use bodymetrics::api::{assess, Assessment};
use bodymetrics::config::PlannerParams;
use bodymetrics::report::{REPORT_FILE_NAME, REPORT_MIME};
use bodymetrics::units::{RawInput, UnitScheme};
use chrono::NaiveDate;
use regex::Regex;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn assess_default(raw: RawInput) -> Assessment {
    assess(&raw, &PlannerParams::default()).unwrap()
}

fn field<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines()
        .find_map(|line| line.strip_prefix(&format!("{}: ", key)))
}

#[test]
fn test_metric_report_fields() {
    let report = assess_default(RawInput::default()).report(date());
    let text = &report.text;

    assert_eq!(text.lines().next(), Some("BMI HEALTH REPORT"));
    assert_eq!(field(text, "Date"), Some("2026-10-18"));
    assert_eq!(field(text, "Height"), Some("170.0 cm"));
    assert_eq!(field(text, "Weight"), Some("70.0 kg"));
    assert_eq!(field(text, "BMI"), Some("24.22"));
    assert_eq!(field(text, "Category"), Some("Normal Weight"));
    assert_eq!(field(text, "BMR"), Some("1672 kcal/day"));
    assert_eq!(field(text, "Daily Calorie Needs"), Some("2592 kcal/day"));
    assert_eq!(field(text, "Ideal Weight Range"), Some("53.5 - 72.0 kg"));
    assert_eq!(field(text, "Goal"), Some("Maintain weight"));
    assert_eq!(field(text, "Target Daily Calories"), None);
    assert!(text.contains("Your BMI is within the normal range."));
}

#[test]
fn test_imperial_report_shows_pounds() {
    let report = assess_default(RawInput::defaults_for(UnitScheme::Imperial)).report(date());
    assert_eq!(
        field(&report.text, "Ideal Weight Range"),
        Some("118.2 - 159.0 lbs")
    );
    // Measurements are always reported in metric.
    assert_eq!(field(&report.text, "Weight"), Some("69.9 kg"));
    assert_eq!(field(&report.text, "Height"), Some("170.2 cm"));
}

#[test]
fn test_loss_plan_in_report() {
    let raw = RawInput {
        weight_value: 95.0,
        ..RawInput::default()
    };
    let a = assess_default(raw);
    let report = a.report(date());

    assert_eq!(field(&report.text, "Goal"), Some("Lose weight"));
    let expected = format!("{} kcal/day", a.energy.daily_calories - 500);
    assert_eq!(
        field(&report.text, "Target Daily Calories"),
        Some(expected.as_str())
    );
}

#[test]
fn test_report_layout_is_line_parseable() {
    let report = assess_default(RawInput::default()).report(date());
    let kv = Regex::new(r"^[A-Za-z ]+: \S.*$").unwrap();
    let heading = Regex::new(r"^[A-Z ]+$").unwrap();

    for line in report.lines() {
        assert!(!line.starts_with(' '), "indented line: {:?}", line);
        assert!(
            line.is_empty()
                || kv.is_match(line)
                || heading.is_match(line)
                || line.starts_with("---")
                || line.starts_with("Your BMI"),
            "unexpected line: {:?}",
            line
        );
    }

    let headings: Vec<&str> = report.lines().filter(|l| heading.is_match(l)).collect();
    assert_eq!(
        headings,
        vec![
            "BMI HEALTH REPORT",
            "MEASUREMENTS",
            "HEALTH METRICS",
            "WEIGHT PLAN",
            "RECOMMENDATIONS"
        ]
    );
}

#[test]
fn test_report_is_deterministic_for_a_date() {
    let raw = RawInput {
        weight_value: 48.0,
        ..RawInput::defaults_for(UnitScheme::Mixed)
    };
    let a = assess_default(raw).report(date());
    let b = assess_default(raw).report(date());
    assert_eq!(a, b);
}

#[test]
fn test_write_report_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(REPORT_FILE_NAME);
    let report = assess_default(RawInput::default()).report(date());
    report.write_to(&path).unwrap();

    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, report.text);
    assert_eq!(REPORT_MIME, "text/plain");
}

#[test]
fn test_loss_report_exact_text() {
    let raw = RawInput {
        weight_value: 80.0,
        ..RawInput::default()
    };
    let report = assess_default(raw).report(date());

    let expected = "\
BMI HEALTH REPORT
-----------------
Date: 2026-10-18

MEASUREMENTS
Height: 170.0 cm
Weight: 80.0 kg
BMI: 27.68
Category: Overweight

HEALTH METRICS
BMR: 1806 kcal/day
Daily Calorie Needs: 2799 kcal/day
Ideal Weight Range: 53.5 - 72.0 kg

WEIGHT PLAN
Goal: Lose weight
Target Daily Calories: 2299 kcal/day

RECOMMENDATIONS
Your BMI indicates you're overweight. Consider focusing on healthy dietary changes and increasing physical activity.
";
    assert_eq!(report.text, expected);
}
