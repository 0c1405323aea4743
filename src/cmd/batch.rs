use super::clamp_with_warning;
use crate::reports;
use bodymetrics::config::Config;
use bodymetrics::error::BmResult;
use bodymetrics::{api, batch};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with columns unit,weight,height,height_secondary,age,gender,activity
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write per-row results as CSV instead of printing a table
    #[arg(long)]
    pub results: Option<PathBuf>,
}

pub fn run(args: &BatchArgs, config: &Config) -> BmResult<()> {
    let inputs: Vec<_> = batch::load_inputs(&args.input)?
        .iter()
        .enumerate()
        .map(|(idx, raw)| clamp_with_warning(raw, &format!("Input #{}", idx + 1)))
        .collect();

    if inputs.is_empty() {
        warn!("No usable rows in {}", args.input.display());
        return Ok(());
    }

    let outcomes = api::assess_batch(&inputs, &config.planner);
    let results: Vec<_> = inputs.into_iter().zip(outcomes).collect();

    let failed = results.iter().filter(|(_, r)| r.is_err()).count();
    if failed > 0 {
        warn!("{} of {} rows failed", failed, results.len());
    }

    match &args.results {
        Some(path) => {
            batch::write_results(path, &results)?;
            info!("Wrote {} rows to {}", results.len(), path.display());
        }
        None => reports::print_batch_summary(&results),
    }

    Ok(())
}
