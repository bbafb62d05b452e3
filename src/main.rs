use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};

use pipeline_reporter::{commands, utils::config::Config};

#[derive(Parser)]
#[command(name = "pipeline-reporter")]
#[command(version)]
#[command(about = "Aggregate CI test artifacts into pipeline reports", long_about = None)]
struct Cli {
    /// Test artifact to parse: JUnit XML (*.xml), performance log
    /// (path containing "performance") or device-test log
    artifact: Option<PathBuf>,

    /// Write final-pipeline-report.{json,html} and pipeline_metrics.json
    #[arg(long)]
    generate_final_report: bool,

    /// Send final-pipeline-report.json to the Slack webhook
    #[arg(long)]
    send_to_slack: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let output_dir = Path::new(".");

    if cli.generate_final_report {
        commands::generate_final_report(&config, output_dir)?;
    } else if cli.send_to_slack {
        commands::send_to_slack(&config, output_dir)?;
    } else if let Some(artifact) = cli.artifact {
        commands::process_artifact(&config, &artifact, output_dir)?;
    } else {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    }

    Ok(())
}
