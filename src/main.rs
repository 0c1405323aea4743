use bodymetrics::config::Config;
use bodymetrics::error::BmResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "BMI, BMR and daily calorie calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with planner/report settings; command-line flags win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute and display all metrics for one person
    Assess(cmd::assess::AssessArgs),
    /// Write the plain-text health report
    Report(cmd::report::ReportArgs),
    /// Assess every row of a CSV file
    Batch(cmd::batch::BatchArgs),
    /// Show the BMI category bands
    Scale,
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// File config (if any) as the base, explicit CLI flags on top.
fn resolve_config(path: Option<&str>, cli_config: &Config, matches: &ArgMatches) -> BmResult<Config> {
    let config = match path {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, matches);
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli, matches: &ArgMatches) -> BmResult<()> {
    // Flattened config flags live in the subcommand's matches, not the root.
    let sub_matches = matches.subcommand().map(|(_, m)| m).unwrap_or(matches);
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Assess(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::assess::run(args, &config)
        }
        Commands::Report(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::report::run(args, &config)
        }
        Commands::Batch(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::batch::run(args, &config)
        }
        Commands::Scale => {
            cmd::scale::run();
            Ok(())
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.debug);

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
