use chrono::Local;
use clap::Parser;
use gamification_dashboard::activity::{analyze, lookback_start, TrackerExport};
use gamification_dashboard::engine::{calculate_points, ActivityLog, RewardConfig};
use std::{fs, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Scores a tracked activity log into the document served by the dashboard.
#[derive(Parser)]
#[command(name = "score_activity")]
struct Cli {
    /// Activity log (JSON) to score, or a tracker export with --export
    input: PathBuf,

    /// Where to write the scoring document
    output: PathBuf,

    /// Reward weights (JSON); missing fields keep their defaults
    #[arg(short, long, env = "GAMIFICATION_REWARDS")]
    config: Option<PathBuf>,

    /// Treat the input as a tracker export of time entries and issue journals
    #[arg(long)]
    export: bool,

    /// How many days back to analyse a tracker export, 14 covers two weeks
    #[arg(long, default_value_t = 14)]
    days: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => serde_json::from_slice(&fs::read(path)?)?,
        None => RewardConfig::default(),
    };
    let input = fs::read(&cli.input)?;
    let log: ActivityLog = if cli.export {
        let export: TrackerExport = serde_json::from_slice(&input)?;
        let since = lookback_start(Local::now().date_naive(), cli.days);
        info!(%since, entries = export.time_entries.len(), "analysing tracker export");
        analyze(&export, since)
    } else {
        serde_json::from_slice(&input)?
    };

    let payload = calculate_points(&log, &config);
    let days = payload.points.values().map(|days| days.len()).max().unwrap_or(0);

    if let Some(parent) = cli.output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&cli.output, serde_json::to_vec_pretty(&payload)?)?;

    info!(
        users = payload.points.len(),
        days,
        "wrote scores to {}",
        cli.output.display()
    );
    Ok(())
}
