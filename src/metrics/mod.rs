pub mod category;
pub mod energy;

pub use self::category::{gauge_bands, BmiCategory, CategoryBand, CATEGORY_TABLE, GAUGE_RANGE};
pub use self::energy::{compute_bmr, compute_daily_calories};

use crate::units::{CanonicalInput, UnitScheme, KG_PER_LB};
use crate::util::round_to;
use serde::{Deserialize, Serialize};

pub const IDEAL_BMI_LOWER: f64 = 18.5;
pub const IDEAL_BMI_UPPER: f64 = 24.9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    pub bmr: i64,
    pub daily_calories: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealWeightRange {
    pub lower_kg: f64,
    pub upper_kg: f64,
}

impl IdealWeightRange {
    /// Bounds in the scheme's display unit (pounds for Imperial).
    pub fn in_unit(&self, scheme: UnitScheme) -> (f64, f64) {
        match scheme {
            UnitScheme::Imperial => (
                round_to(self.lower_kg / KG_PER_LB, 1),
                round_to(self.upper_kg / KG_PER_LB, 1),
            ),
            UnitScheme::Metric | UnitScheme::Mixed => (self.lower_kg, self.upper_kg),
        }
    }
}

/// BMI rounded to 2 decimals, classified on the rounded value.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> BmiResult {
    let bmi = round_to(weight_kg / height_m.powi(2), 2);
    let band = BmiCategory::band_for(bmi);
    BmiResult {
        bmi,
        category: band.category,
        color: band.color.to_string(),
        description: band.description.to_string(),
    }
}

/// Same formula for every gender.
pub fn compute_ideal_weight_range(height_m: f64) -> IdealWeightRange {
    let h2 = height_m.powi(2);
    IdealWeightRange {
        lower_kg: round_to(IDEAL_BMI_LOWER * h2, 1),
        upper_kg: round_to(IDEAL_BMI_UPPER * h2, 1),
    }
}

pub fn compute_energy(input: &CanonicalInput) -> EnergyResult {
    let bmr = compute_bmr(input.weight_kg, input.height_m, input.age, input.gender);
    EnergyResult {
        bmr,
        daily_calories: compute_daily_calories(bmr, input.activity_level),
    }
}
