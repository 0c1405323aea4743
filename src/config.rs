use crate::error::{BmResult, BodyMetricsError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub planner: PlannerParams,
    #[command(flatten)]
    pub report: ReportParams,
}

/// Longest accepted projection (ten years).
pub const MAX_PROJECTION_WEEKS: u32 = 520;
/// Largest accepted daily surplus/deficit, kcal.
pub const MAX_CALORIE_ADJUSTMENT: i64 = 5000;

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlannerParams {
    /// Length of the weight projection
    #[arg(long, default_value_t = 12)]
    pub projection_weeks: u32,
    /// Daily surplus/deficit applied when a gain or loss is recommended (kcal)
    #[arg(long, default_value_t = 500)]
    pub calorie_adjustment: i64,
    /// Energy content of one pound of body weight (kcal)
    #[arg(long, default_value_t = 3500.0)]
    pub kcal_per_lb: f64,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            projection_weeks: 12,
            calorie_adjustment: 500,
            kcal_per_lb: 3500.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportParams {
    /// Where the text report is written
    #[arg(short = 'o', long = "output", default_value = crate::report::REPORT_FILE_NAME)]
    pub report_path: String,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            report_path: crate::report::REPORT_FILE_NAME.to_string(),
        }
    }
}

impl PlannerParams {
    pub fn validate(&self) -> BmResult<()> {
        if !(1..=MAX_PROJECTION_WEEKS).contains(&self.projection_weeks) {
            return Err(BodyMetricsError::Config(format!(
                "projection_weeks must be between 1 and {}, got {}",
                MAX_PROJECTION_WEEKS, self.projection_weeks
            )));
        }
        if !(self.kcal_per_lb.is_finite() && self.kcal_per_lb > 0.0) {
            return Err(BodyMetricsError::Config(format!(
                "kcal_per_lb must be positive, got {}",
                self.kcal_per_lb
            )));
        }
        if !(0..=MAX_CALORIE_ADJUSTMENT).contains(&self.calorie_adjustment) {
            return Err(BodyMetricsError::Config(format!(
                "calorie_adjustment must be between 0 and {} kcal, got {}",
                MAX_CALORIE_ADJUSTMENT, self.calorie_adjustment
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BmResult<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BmResult<()> {
        self.planner.validate()
    }

    /// Copies values the user typed on the command line over file values.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(planner.projection_weeks);
        update_if_present!(planner.calorie_adjustment);
        update_if_present!(planner.kcal_per_lb);
        update_if_present!(report.report_path);
    }
}
