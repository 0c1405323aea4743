mod gauge;

use bodymetrics::api::Assessment;
use bodymetrics::error::BmResult;
use bodymetrics::metrics::{BmiCategory, CategoryBand};
use bodymetrics::planner::WeightPlan;
use bodymetrics::units::RawInput;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Maps a `#rrggbb` display token to a terminal color.
fn hex_color(token: &str) -> Color {
    let hex = token.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::White;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
        _ => Color::White,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_bmi_summary(a: &Assessment) {
    let color = hex_color(&a.bmi.color);
    let mut table = new_table();

    table.add_row(vec![
        Cell::new("🔍 Your BMI").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", a.bmi.bmi))
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Category"),
        Cell::new(a.bmi.category.label()).fg(color),
    ]);
    table.add_row(vec![Cell::new("Summary"), Cell::new(&a.bmi.description)]);
    table.add_row(vec![Cell::new("Units"), Cell::new(a.unit_scheme.label())]);
    table.add_row(vec![
        Cell::new("Activity"),
        Cell::new(format!(
            "{} (x{})",
            a.canonical.activity_level.label(),
            a.canonical.activity_level.factor()
        )),
    ]);

    println!("\n{}", table);
}

pub fn print_gauge(bmi: f64) {
    let (bar, marker) = gauge::gauge_lines(bmi, 40);
    println!("\nBMI Scale (10-50)");
    println!("{}", bar);
    println!("{}", marker);
}

pub fn print_metric_cards(a: &Assessment) {
    let (lo, hi) = a.ideal_weight.in_unit(a.unit_scheme);
    let unit = a.unit_scheme.weight_unit();

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("BMR").add_attribute(Attribute::Bold),
        Cell::new("Daily Calories").add_attribute(Attribute::Bold),
        Cell::new("Ideal Weight Range").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(format!("{} kcal/day", a.energy.bmr)),
        Cell::new(format!("{} kcal/day", a.energy.daily_calories)),
        Cell::new(format!("{:.1} - {:.1} {}", lo, hi, unit)),
    ]);
    table.add_row(vec![
        Cell::new("Calories your body needs at rest"),
        Cell::new("Calories to maintain current weight"),
        Cell::new("Healthy weight range for your height"),
    ]);

    for i in 0..3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Center);
        }
    }

    println!("\n📈 Additional Health Insights\n{}", table);
}

pub fn print_health_tips(category: BmiCategory) {
    println!("\n💡 Personalized Health Tips");
    for tip in category.health_tips() {
        println!("  - {}", tip);
    }
}

pub fn print_weight_plan(plan: &WeightPlan) {
    println!("\n🗓️  Weight Management Plan");

    let (Some(target), Some(title)) = (plan.target_daily_calories, plan.chart_title()) else {
        println!("  Your weight is in the healthy range. Keep maintaining it.");
        return;
    };

    println!(
        "  Recommended daily calorie intake to {} weight: {} kcal/day",
        plan.goal.to_string().to_lowercase(),
        target
    );
    if let Some(summary) = plan.weekly_summary() {
        println!("  {}", summary);
    }

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Weeks").add_attribute(Attribute::Bold),
        Cell::new("Weight (kg)").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    for point in &plan.trajectory {
        table.add_row(vec![
            Cell::new(point.week),
            Cell::new(format!("{:.1}", point.projected_weight_kg)),
        ]);
    }

    println!("\n{}\n{}", title, table);
}

pub fn print_category_table(bands: &[(f64, f64, &'static CategoryBand)]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("BMI").add_attribute(Attribute::Bold),
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Color"),
    ]);

    for (start, end, band) in bands {
        let color = hex_color(band.color);
        table.add_row(vec![
            Cell::new(format!("{:.1} - {:.1}", start, end)),
            Cell::new(band.label).fg(color),
            Cell::new(band.color).fg(color),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_batch_summary(results: &[(RawInput, BmResult<Assessment>)]) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Unit"),
        Cell::new("Weight (kg)"),
        Cell::new("Height (cm)"),
        Cell::new("BMI").fg(Color::Cyan),
        Cell::new("Category"),
        Cell::new("BMR"),
        Cell::new("TDEE"),
        Cell::new("Goal"),
        Cell::new("Target"),
    ]);

    for i in 2..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (idx, (raw, result)) in results.iter().enumerate() {
        let row = match result {
            Ok(a) => vec![
                Cell::new(idx + 1),
                Cell::new(raw.unit_scheme),
                Cell::new(format!("{:.1}", a.canonical.weight_kg)),
                Cell::new(format!("{:.1}", a.canonical.height_cm())),
                Cell::new(format!("{:.2}", a.bmi.bmi)).fg(Color::Cyan),
                Cell::new(a.bmi.category.label()).fg(hex_color(&a.bmi.color)),
                Cell::new(a.energy.bmr),
                Cell::new(a.energy.daily_calories),
                Cell::new(a.plan.goal),
                Cell::new(
                    a.plan
                        .target_daily_calories
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ],
            Err(e) => vec![
                Cell::new(idx + 1),
                Cell::new(raw.unit_scheme),
                Cell::new(e).fg(Color::Red),
            ],
        };
        table.add_row(row);
    }
    println!("\n{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_tokens_parse_to_rgb() {
        assert_eq!(
            hex_color("#4CAF50"),
            Color::Rgb {
                r: 0x4c,
                g: 0xaf,
                b: 0x50
            }
        );
        assert_eq!(hex_color("teal"), Color::White);
    }
}
