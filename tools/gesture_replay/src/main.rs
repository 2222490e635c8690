use std::{fs, path::PathBuf, process};

use anyhow::{bail, Context, Result};
use clap::Parser;
use touch_gestures::{GestureConfig, GestureEngine, GestureVerdict};

mod trace;

use trace::{parse_expected, parse_trace, TraceRecord};

/// Replays a recorded manipulation callback trace through the gesture engine.
#[derive(Debug, Parser)]
#[command(name = "gesture_replay", version)]
struct Cli {
    /// CSV trace of `starting`, `started`, `moved` and `completed` lines.
    trace: PathBuf,
    /// File with one expected verdict label per completed manipulation.
    #[arg(long)]
    expect: Option<PathBuf>,
    /// TOML threshold overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GestureConfig::from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => GestureConfig::default(),
    };

    let source = fs::read_to_string(&cli.trace)
        .with_context(|| format!("failed to open {}", cli.trace.display()))?;
    let records = parse_trace(&source, &cli.trace)?;
    log::info!("replaying {} callbacks from {}", records.len(), cli.trace.display());

    let verdicts = replay(GestureEngine::new(config), &records, &cli.trace)?;

    println!("verdict,ms,label");
    for (ms, verdict) in &verdicts {
        println!("verdict,{ms},{verdict}");
    }

    if let Some(expect_path) = &cli.expect {
        let expect_source = fs::read_to_string(expect_path)
            .with_context(|| format!("failed to open {}", expect_path.display()))?;
        let expected = parse_expected(&expect_source, expect_path)?;
        let actual: Vec<GestureVerdict> = verdicts.iter().map(|(_, verdict)| *verdict).collect();
        if actual != expected {
            eprintln!("expected verdicts: {}", join_labels(&expected));
            eprintln!("actual verdicts:   {}", join_labels(&actual));
            bail!("verdict sequence mismatch");
        }
    }

    Ok(())
}

fn replay(
    mut engine: GestureEngine,
    records: &[TraceRecord],
    origin: &std::path::Path,
) -> Result<Vec<(u64, GestureVerdict)>> {
    let mut verdicts = Vec::new();
    for record in records {
        let verdict = engine.handle(record.event).with_context(|| {
            format!(
                "{}:{} `{}` rejected",
                origin.display(),
                record.line_no,
                record.event.label()
            )
        })?;
        if let Some(verdict) = verdict {
            verdicts.push((record.ms, verdict));
        }
    }
    Ok(verdicts)
}

fn join_labels(verdicts: &[GestureVerdict]) -> String {
    verdicts
        .iter()
        .map(|verdict| verdict.label())
        .collect::<Vec<_>>()
        .join(",")
}
