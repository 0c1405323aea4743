use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObeseI,
    ObeseII,
    ObeseIII,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBand {
    pub lower_bound: f64, // inclusive
    pub category: BmiCategory,
    pub color: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Ordered by `lower_bound`. The classifier and the gauge both read from here.
pub static CATEGORY_TABLE: [CategoryBand; 6] = [
    CategoryBand {
        lower_bound: f64::NEG_INFINITY,
        category: BmiCategory::Underweight,
        color: "#3366cc",
        label: "Underweight",
        description: "Your BMI indicates you're underweight. This may suggest insufficient calorie intake or other health issues.",
    },
    CategoryBand {
        lower_bound: 18.5,
        category: BmiCategory::Normal,
        color: "#4CAF50",
        label: "Normal Weight",
        description: "Your BMI is within the normal range. Keep maintaining a balanced diet and regular exercise.",
    },
    CategoryBand {
        lower_bound: 25.0,
        category: BmiCategory::Overweight,
        color: "#ff9800",
        label: "Overweight",
        description: "Your BMI indicates you're overweight. Consider focusing on healthy dietary changes and increasing physical activity.",
    },
    CategoryBand {
        lower_bound: 30.0,
        category: BmiCategory::ObeseI,
        color: "#f44336",
        label: "Obese (Class I)",
        description: "Your BMI indicates Class I obesity. Consider consulting a healthcare professional for personalized advice.",
    },
    CategoryBand {
        lower_bound: 35.0,
        category: BmiCategory::ObeseII,
        color: "#e91e63",
        label: "Obese (Class II)",
        description: "Your BMI indicates Class II obesity. It's recommended to consult with healthcare professionals for a tailored weight management plan.",
    },
    CategoryBand {
        lower_bound: 40.0,
        category: BmiCategory::ObeseIII,
        color: "#9c27b0",
        label: "Obese (Class III)",
        description: "Your BMI indicates Class III obesity. Please consult with healthcare professionals for medical guidance and support.",
    },
];

/// Visible range of the BMI gauge.
pub const GAUGE_RANGE: (f64, f64) = (10.0, 50.0);

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        Self::band_for(bmi).category
    }

    /// Band whose half-open interval contains `bmi`. NaN lands in the first band.
    pub fn band_for(bmi: f64) -> &'static CategoryBand {
        CATEGORY_TABLE
            .iter()
            .rev()
            .find(|band| bmi >= band.lower_bound)
            .unwrap_or(&CATEGORY_TABLE[0])
    }

    pub fn band(&self) -> &'static CategoryBand {
        // Table order matches declaration order.
        &CATEGORY_TABLE[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.band().label
    }

    pub fn color(&self) -> &'static str {
        self.band().color
    }

    pub fn description(&self) -> &'static str {
        self.band().description
    }

    /// Advice bullets. All obese classes share one list.
    pub fn health_tips(&self) -> &'static [&'static str] {
        match self {
            Self::Underweight => &[
                "Consider increasing your calorie intake with nutrient-dense foods",
                "Include healthy fats like avocados, nuts, and olive oil in your diet",
                "Incorporate strength training to build muscle mass",
                "Consult with a healthcare provider or dietitian for personalized advice",
            ],
            Self::Normal => &[
                "Maintain your balanced diet and regular exercise routine",
                "Aim for 150 minutes of moderate exercise per week",
                "Stay hydrated and get adequate sleep",
                "Continue regular health check-ups",
            ],
            Self::Overweight => &[
                "Focus on portion control and mindful eating",
                "Increase physical activity gradually (aim for 30 minutes daily)",
                "Reduce processed foods and added sugars",
                "Consider consulting a healthcare provider for personalized advice",
            ],
            Self::ObeseI | Self::ObeseII | Self::ObeseIII => &[
                "Consult with healthcare professionals for a comprehensive weight management plan",
                "Consider working with a registered dietitian for personalized nutrition guidance",
                "Start with gentle, low-impact exercises like walking or swimming",
                "Focus on sustainable lifestyle changes rather than quick fixes",
                "Monitor other health metrics like blood pressure and cholesterol",
            ],
        }
    }
}

/// Gauge segments clipped to `GAUGE_RANGE`: (from, to, band).
pub fn gauge_bands() -> Vec<(f64, f64, &'static CategoryBand)> {
    let (lo, hi) = GAUGE_RANGE;
    CATEGORY_TABLE
        .iter()
        .enumerate()
        .map(|(i, band)| {
            let start = band.lower_bound.max(lo);
            let end = CATEGORY_TABLE
                .get(i + 1)
                .map(|next| next.lower_bound)
                .unwrap_or(hi)
                .min(hi);
            (start, end, band)
        })
        .collect()
}
