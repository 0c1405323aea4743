use super::InputArgs;
use crate::reports;
use bodymetrics::api;
use bodymetrics::config::Config;
use bodymetrics::error::BmResult;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub config: Config,

    /// Print the assessment as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the text report to --output
    #[arg(long, default_value_t = false)]
    pub save: bool,
}

pub fn run(args: &AssessArgs, config: &Config) -> BmResult<()> {
    let raw = args.input.to_raw();
    let assessment = api::assess(&raw, &config.planner)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        reports::print_bmi_summary(&assessment);
        reports::print_gauge(assessment.bmi.bmi);
        reports::print_metric_cards(&assessment);
        reports::print_health_tips(assessment.bmi.category);
        reports::print_weight_plan(&assessment.plan);
    }

    if args.save {
        let report = assessment.report(chrono::Local::now().date_naive());
        report.write_to(&config.report.report_path)?;
        info!("📥 Report saved to {}", config.report.report_path);
    }

    Ok(())
}
