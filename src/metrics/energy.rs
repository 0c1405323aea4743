use crate::units::{ActivityLevel, Gender};
use crate::util::round_int;

// Harris-Benedict (revised) coefficients: (base, per kg, per cm, per year of age)
const MALE_COEFFS: (f64, f64, f64, f64) = (88.362, 13.397, 4.799, 5.677);
const FEMALE_COEFFS: (f64, f64, f64, f64) = (447.593, 9.247, 3.098, 4.330);

/// Basal metabolic rate in kcal/day. `Other` uses the female equation.
pub fn compute_bmr(weight_kg: f64, height_m: f64, age: u32, gender: Gender) -> i64 {
    let (base, per_kg, per_cm, per_year) = match gender {
        Gender::Male => MALE_COEFFS,
        Gender::Female | Gender::Other => FEMALE_COEFFS,
    };
    let height_cm = height_m * 100.0;
    round_int(base + per_kg * weight_kg + per_cm * height_cm - per_year * age as f64)
}

pub fn compute_daily_calories(bmr: i64, activity: ActivityLevel) -> i64 {
    round_int(bmr as f64 * activity.factor())
}
