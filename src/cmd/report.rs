use super::InputArgs;
use bodymetrics::api;
use bodymetrics::config::Config;
use bodymetrics::error::BmResult;
use bodymetrics::report::REPORT_MIME;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub config: Config,

    /// Print the report to stdout instead of writing a file
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}

pub fn run(args: &ReportArgs, config: &Config) -> BmResult<()> {
    let raw = args.input.to_raw();
    let assessment = api::assess(&raw, &config.planner)?;
    let report = assessment.report(chrono::Local::now().date_naive());

    if args.stdout {
        print!("{}", report.text);
        return Ok(());
    }

    report.write_to(&config.report.report_path)?;
    info!(
        "📥 Wrote {} ({}, {} bytes)",
        config.report.report_path,
        REPORT_MIME,
        report.text.len()
    );
    Ok(())
}
