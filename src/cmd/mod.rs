pub mod assess;
pub mod batch;
pub mod report;
pub mod scale;

use bodymetrics::units::{ActivityLevel, Gender, InputBounds, RawInput, UnitScheme};
use clap::Args;
use tracing::warn;

/// Measurement flags shared by `assess` and `report`. Omitted measurements
/// take the scheme's initial form values.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    #[arg(short, long, default_value = "metric")]
    pub unit: UnitScheme,

    /// kg for metric/mixed, lb for imperial
    #[arg(short, long)]
    pub weight: Option<f64>,

    /// cm for metric, inches for imperial, feet for mixed
    #[arg(short = 'H', long)]
    pub height: Option<f64>,

    /// Extra inches for the mixed scheme
    #[arg(long)]
    pub height_secondary: Option<f64>,

    #[arg(short, long, default_value_t = 30)]
    pub age: u32,

    #[arg(short, long, default_value = "male")]
    pub gender: Gender,

    #[arg(long, default_value = "moderately_active")]
    pub activity: ActivityLevel,
}

impl InputArgs {
    /// Builds the raw input, clamping every value into the scheme's range.
    pub fn to_raw(&self) -> RawInput {
        let defaults = RawInput::defaults_for(self.unit);
        let raw = RawInput {
            unit_scheme: self.unit,
            weight_value: self.weight.unwrap_or(defaults.weight_value),
            height_primary: self.height.unwrap_or(defaults.height_primary),
            height_secondary: self.height_secondary.unwrap_or(defaults.height_secondary),
            age: self.age,
            gender: self.gender,
            activity_level: self.activity,
        };

        clamp_with_warning(&raw, "command-line input")
    }
}

/// Clamps `raw` into its scheme's bounds, warning when anything changed.
pub fn clamp_with_warning(raw: &RawInput, source: &str) -> RawInput {
    let clamped = raw.clamped();
    if clamped != *raw {
        let b = InputBounds::for_scheme(raw.unit_scheme);
        warn!(
            "{} clamped to {} bounds (weight {:?}, height {:?}/{:?}, age {:?})",
            source, raw.unit_scheme, b.weight, b.height_primary, b.height_secondary, b.age
        );
    }
    clamped
}
