use crate::api::Assessment;
use crate::error::{BmResult, BodyMetricsError};
use crate::units::{ActivityLevel, Gender, RawInput, UnitScheme};
use csv::StringRecord;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

pub const INPUT_HEADER: [&str; 7] = [
    "unit",
    "weight",
    "height",
    "height_secondary",
    "age",
    "gender",
    "activity",
];

/// Only this column may be absent; it defaults to 0.
const OPTIONAL_COLUMN: usize = 3;

/// Position of each `INPUT_HEADER` column in the file, matched by name.
struct ColumnMap([Option<usize>; INPUT_HEADER.len()]);

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> BmResult<Self> {
        let mut positions = [None; INPUT_HEADER.len()];
        for (slot, name) in positions.iter_mut().zip(INPUT_HEADER) {
            *slot = headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name));
        }

        let missing: Vec<&str> = INPUT_HEADER
            .iter()
            .zip(&positions)
            .enumerate()
            .filter(|(idx, (_, pos))| *idx != OPTIONAL_COLUMN && pos.is_none())
            .map(|(_, (name, _))| *name)
            .collect();
        if !missing.is_empty() {
            return Err(BodyMetricsError::InvalidInput(format!(
                "missing column(s) {}; expected header {}",
                missing.join(", "),
                INPUT_HEADER.join(",")
            )));
        }

        Ok(Self(positions))
    }

    /// Trimmed cell for column `idx`; `None` when the column or cell is absent.
    fn cell<'r>(&self, rec: &'r StringRecord, idx: usize) -> Option<&'r str> {
        self.0[idx].and_then(|pos| rec.get(pos)).map(str::trim)
    }

    fn parse<T: FromStr>(&self, rec: &StringRecord, idx: usize) -> Result<T, String> {
        let raw = self
            .cell(rec, idx)
            .ok_or_else(|| format!("missing value for column '{}'", INPUT_HEADER[idx]))?;
        raw.parse()
            .map_err(|_| format!("bad value '{}' in column '{}'", raw, INPUT_HEADER[idx]))
    }

    fn record(&self, rec: &StringRecord) -> Result<RawInput, String> {
        Ok(RawInput {
            unit_scheme: self.parse::<UnitScheme>(rec, 0)?,
            weight_value: self.parse(rec, 1)?,
            height_primary: self.parse(rec, 2)?,
            // Blank secondary height is allowed for metric/imperial rows.
            height_secondary: match self.cell(rec, OPTIONAL_COLUMN) {
                None | Some("") => 0.0,
                Some(_) => self.parse(rec, OPTIONAL_COLUMN)?,
            },
            age: self.parse(rec, 4)?,
            gender: self.parse::<Gender>(rec, 5)?,
            activity_level: self.parse::<ActivityLevel>(rec, 6)?,
        })
    }
}

/// Reads raw inputs from a headed CSV file. Columns are matched by header
/// name in any order. Unparseable rows are skipped.
pub fn load_inputs<P: AsRef<Path>>(path: P) -> BmResult<Vec<RawInput>> {
    let path = path.as_ref();
    debug!("Loading batch inputs from {}", path.display());

    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;

    let mut inputs = Vec::new();
    let mut skipped_count = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let line = row_idx + 2;
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV Parse Error: {}", line, e);
                skipped_count += 1;
                continue;
            }
        };
        match columns.record(&rec) {
            Ok(raw) => inputs.push(raw),
            Err(e) => {
                warn!("[Row {}] skipped: {}", line, e);
                skipped_count += 1;
            }
        }
    }

    if skipped_count > 0 {
        warn!("Skipped {} invalid rows in {}", skipped_count, path.display());
    }

    Ok(inputs)
}

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    unit: UnitScheme,
    weight_kg: String,
    height_cm: String,
    bmi: String,
    category: &'a str,
    bmr: Option<i64>,
    daily_calories: Option<i64>,
    ideal_lower_kg: String,
    ideal_upper_kg: String,
    goal: String,
    target_daily_calories: Option<i64>,
    error: String,
}

/// Writes one CSV row per input; failed rows carry the error text.
pub fn write_results<P: AsRef<Path>>(
    path: P,
    results: &[(RawInput, BmResult<Assessment>)],
) -> BmResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for (raw, result) in results {
        let row = match result {
            Ok(a) => ResultRow {
                unit: raw.unit_scheme,
                weight_kg: format!("{:.1}", a.canonical.weight_kg),
                height_cm: format!("{:.1}", a.canonical.height_cm()),
                bmi: format!("{:.2}", a.bmi.bmi),
                category: a.bmi.category.label(),
                bmr: Some(a.energy.bmr),
                daily_calories: Some(a.energy.daily_calories),
                ideal_lower_kg: format!("{:.1}", a.ideal_weight.lower_kg),
                ideal_upper_kg: format!("{:.1}", a.ideal_weight.upper_kg),
                goal: a.plan.goal.to_string(),
                target_daily_calories: a.plan.target_daily_calories,
                error: String::new(),
            },
            Err(e) => ResultRow {
                unit: raw.unit_scheme,
                weight_kg: String::new(),
                height_cm: String::new(),
                bmi: String::new(),
                category: "",
                bmr: None,
                daily_calories: None,
                ideal_lower_kg: String::new(),
                ideal_upper_kg: String::new(),
                goal: String::new(),
                target_daily_calories: None,
                error: e.to_string(),
            },
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
