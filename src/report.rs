use crate::error::BmResult;
use crate::metrics::{BmiResult, EnergyResult, IdealWeightRange};
use crate::planner::{Goal, WeightPlan};
use crate::units::{CanonicalInput, UnitScheme};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const REPORT_FILE_NAME: &str = "bmi_health_report.txt";
pub const REPORT_MIME: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_on: NaiveDate,
    pub text: String,
}

impl Report {
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> BmResult<()> {
        fs::write(path, &self.text)?;
        Ok(())
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Renders the downloadable plain-text report. Pure: the date is passed in.
pub fn format(
    canonical: &CanonicalInput,
    bmi: &BmiResult,
    energy: &EnergyResult,
    ideal: &IdealWeightRange,
    plan: &WeightPlan,
    unit_scheme: UnitScheme,
    generated_on: NaiveDate,
) -> Report {
    let (ideal_lo, ideal_hi) = ideal.in_unit(unit_scheme);
    let target_line = match (plan.goal, plan.target_daily_calories) {
        (Goal::Gain | Goal::Lose, Some(target)) => {
            format!("Target Daily Calories: {} kcal/day\n", target)
        }
        _ => String::new(),
    };

    let text = format!(
        "BMI HEALTH REPORT\n\
         -----------------\n\
         Date: {date}\n\
         \n\
         MEASUREMENTS\n\
         Height: {height:.1} cm\n\
         Weight: {weight:.1} kg\n\
         BMI: {bmi:.2}\n\
         Category: {category}\n\
         \n\
         HEALTH METRICS\n\
         BMR: {bmr} kcal/day\n\
         Daily Calorie Needs: {calories} kcal/day\n\
         Ideal Weight Range: {ideal_lo:.1} - {ideal_hi:.1} {unit}\n\
         \n\
         WEIGHT PLAN\n\
         Goal: {goal} weight\n\
         {target_line}\
         \n\
         RECOMMENDATIONS\n\
         {description}\n",
        date = generated_on.format("%Y-%m-%d"),
        height = canonical.height_cm(),
        weight = canonical.weight_kg,
        bmi = bmi.bmi,
        category = bmi.category.label(),
        bmr = energy.bmr,
        calories = energy.daily_calories,
        unit = unit_scheme.weight_unit(),
        goal = plan.goal,
        description = bmi.description,
    );

    Report { generated_on, text }
}
