use crate::config::PlannerParams;
use crate::error::{BmResult, BodyMetricsError};
use crate::metrics::{self, BmiResult, EnergyResult, IdealWeightRange};
use crate::planner::{self, WeightPlan};
use crate::report::{self, Report};
use crate::units::{self, CanonicalInput, RawInput, UnitScheme};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything one pass of the pipeline produces for a single input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub unit_scheme: UnitScheme,
    pub canonical: CanonicalInput,
    pub bmi: BmiResult,
    pub energy: EnergyResult,
    pub ideal_weight: IdealWeightRange,
    pub plan: WeightPlan,
}

impl Assessment {
    pub fn report(&self, generated_on: NaiveDate) -> Report {
        report::format(
            &self.canonical,
            &self.bmi,
            &self.energy,
            &self.ideal_weight,
            &self.plan,
            self.unit_scheme,
            generated_on,
        )
    }
}

fn check_measurements(input: &CanonicalInput) -> BmResult<()> {
    if !(input.weight_kg.is_finite() && input.weight_kg > 0.0) {
        return Err(BodyMetricsError::InvalidMeasurement(format!(
            "weight must be a positive number of kg, got {}",
            input.weight_kg
        )));
    }
    if !(input.height_m.is_finite() && input.height_m > 0.0) {
        return Err(BodyMetricsError::InvalidMeasurement(format!(
            "height must be a positive number of metres, got {}",
            input.height_m
        )));
    }
    Ok(())
}

/// Service: run one input through normalize -> metrics -> planner.
/// Planner parameters outside their accepted ranges are a `Config` error.
pub fn assess(raw: &RawInput, params: &PlannerParams) -> BmResult<Assessment> {
    params.validate()?;
    let canonical = units::normalize(raw);
    check_measurements(&canonical)?;

    let bmi = metrics::compute_bmi(canonical.weight_kg, canonical.height_m);
    let energy = metrics::compute_energy(&canonical);
    let ideal_weight = metrics::compute_ideal_weight_range(canonical.height_m);

    let goal_plan = planner::plan_goal(bmi.category, params);
    let plan = planner::project_trajectory(
        canonical.weight_kg,
        &goal_plan,
        energy.daily_calories,
        params.projection_weeks,
    );

    debug!(
        "Assessed {:.1} kg / {:.2} m -> BMI {:.2} ({}), BMR {}, TDEE {}",
        canonical.weight_kg,
        canonical.height_m,
        bmi.bmi,
        bmi.category,
        energy.bmr,
        energy.daily_calories
    );

    Ok(Assessment {
        unit_scheme: raw.unit_scheme,
        canonical,
        bmi,
        energy,
        ideal_weight,
        plan,
    })
}

/// Service: assess many inputs in parallel. Output order follows input order.
pub fn assess_batch(inputs: &[RawInput], params: &PlannerParams) -> Vec<BmResult<Assessment>> {
    info!("Assessing {} inputs", inputs.len());
    inputs.par_iter().map(|raw| assess(raw, params)).collect()
}
