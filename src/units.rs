use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const KG_PER_LB: f64 = 0.453592;
pub const M_PER_INCH: f64 = 0.0254;
pub const CM_PER_FOOT: f64 = 30.48;
pub const CM_PER_INCH: f64 = 2.54;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum UnitScheme {
    Metric,   // kg, cm
    Imperial, // lb, in
    Mixed,    // kg, ft + in
}

impl UnitScheme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Metric => "Metric (kg, cm)",
            Self::Imperial => "Imperial (lbs, inches)",
            Self::Mixed => "Mixed (kg, feet/inches)",
        }
    }

    /// Unit used when weights are shown back to the user.
    pub fn weight_unit(&self) -> &'static str {
        match self {
            Self::Imperial => "lbs",
            Self::Metric | Self::Mixed => "kg",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to get daily energy expenditure.
    pub fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::LightlyActive => 1.375,
            Self::ModeratelyActive => 1.55,
            Self::VeryActive => 1.725,
            Self::ExtremelyActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtremelyActive => "Extremely Active",
        }
    }
}

/// Measurements exactly as entered, in the units of `unit_scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    pub unit_scheme: UnitScheme,
    pub weight_value: f64,
    /// cm (Metric), in (Imperial) or ft (Mixed).
    pub height_primary: f64,
    /// Extra inches, Mixed only.
    pub height_secondary: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl Default for RawInput {
    fn default() -> Self {
        Self::defaults_for(UnitScheme::Metric)
    }
}

impl RawInput {
    /// Initial form values for a scheme: 70 kg / 154 lb, 170 cm / 67 in / 5 ft 7 in.
    pub fn defaults_for(scheme: UnitScheme) -> Self {
        let (weight_value, height_primary, height_secondary) = match scheme {
            UnitScheme::Metric => (70.0, 170.0, 0.0),
            UnitScheme::Imperial => (154.0, 67.0, 0.0),
            UnitScheme::Mixed => (70.0, 5.0, 7.0),
        };
        Self {
            unit_scheme: scheme,
            weight_value,
            height_primary,
            height_secondary,
            age: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::ModeratelyActive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub weight: (f64, f64),
    pub height_primary: (f64, f64),
    pub height_secondary: (f64, f64),
    pub age: (u32, u32),
}

pub const AGE_BOUNDS: (u32, u32) = (2, 120);

impl InputBounds {
    pub fn for_scheme(scheme: UnitScheme) -> Self {
        match scheme {
            UnitScheme::Metric => Self {
                weight: (1.0, 300.0),
                height_primary: (50.0, 250.0),
                height_secondary: (0.0, 0.0),
                age: AGE_BOUNDS,
            },
            UnitScheme::Imperial => Self {
                weight: (1.0, 700.0),
                height_primary: (20.0, 100.0),
                height_secondary: (0.0, 0.0),
                age: AGE_BOUNDS,
            },
            UnitScheme::Mixed => Self {
                weight: (1.0, 300.0),
                height_primary: (1.0, 8.0),
                height_secondary: (0.0, 11.0),
                age: AGE_BOUNDS,
            },
        }
    }
}

fn clamp_f64(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

impl RawInput {
    /// Copy of this input with every field forced into the scheme's bounds.
    pub fn clamped(&self) -> Self {
        let b = InputBounds::for_scheme(self.unit_scheme);
        Self {
            weight_value: clamp_f64(self.weight_value, b.weight),
            height_primary: clamp_f64(self.height_primary, b.height_primary),
            height_secondary: clamp_f64(self.height_secondary, b.height_secondary),
            age: self.age.clamp(b.age.0, b.age.1),
            ..*self
        }
    }
}

/// Metric form every later stage works on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalInput {
    pub weight_kg: f64,
    pub height_m: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl CanonicalInput {
    pub fn height_cm(&self) -> f64 {
        self.height_m * 100.0
    }
}

pub fn normalize(raw: &RawInput) -> CanonicalInput {
    let (weight_kg, height_m) = match raw.unit_scheme {
        UnitScheme::Metric => (raw.weight_value, raw.height_primary / 100.0),
        UnitScheme::Imperial => (raw.weight_value * KG_PER_LB, raw.height_primary * M_PER_INCH),
        UnitScheme::Mixed => (
            raw.weight_value,
            (raw.height_primary * CM_PER_FOOT + raw.height_secondary * CM_PER_INCH) / 100.0,
        ),
    };

    CanonicalInput {
        weight_kg,
        height_m,
        age: raw.age,
        gender: raw.gender,
        activity_level: raw.activity_level,
    }
}
