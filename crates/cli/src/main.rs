mod outline_io;
mod pipeline;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nucleus_roi::host::{AreaMeter, CentreRotator, ShoelaceArea};
use nucleus_roi::outline::{angle_table, tip_index};
use nucleus_roi::record::{next_free_path, RecordLog};
use nucleus_roi::ProfileCfg;
use provenance::Payload;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Batch processing of traced nucleus outlines")]
struct Cmd {
    /// Optional label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Apply a list of transforms to an outline and write the result
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// e.g. "shuffle,trim:0.6,align-x,normalise:100,offset"
        #[arg(long)]
        steps: String,
        /// Record log to append to; defaults to a fresh roi_log*.txt next to --out
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Print point count, length, area and centroid as JSON
    Measure {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write the outline with its interior angle profile (x, y, angle)
    Profile {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = ProfileCfg::default().window)]
        window: usize,
        /// Start the table at the sharpest vertex
        #[arg(long)]
        tip: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            steps,
            log,
        } => run(&input, &out, &steps, log, cmd.tag),
        Action::Measure { input } => measure(&input),
        Action::Profile {
            input,
            out,
            window,
            tip,
        } => profile(&input, &out, window, tip, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run(
    input: &Path,
    out: &Path,
    steps: &str,
    log: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        steps,
        tag = ?tag,
        "run"
    );
    let steps = pipeline::parse_steps(steps)?;
    let poly = outline_io::read_outline(input)?;
    let mut records = RecordLog::new();
    let result = pipeline::apply(&poly, &steps, &CentreRotator, &mut records)?;
    outline_io::write_outline(out, &result)?;

    let log_path = log.unwrap_or_else(|| {
        let dir = out.parent().unwrap_or_else(|| Path::new("."));
        next_free_path(dir, "roi_log", "txt")
    });
    records
        .append_to(&log_path)
        .with_context(|| format!("appending records to {}", log_path.display()))?;
    tracing::info!(records = records.len(), log = %log_path.display(), "records_written");

    let mut payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "points_in": poly.len(),
        "points_out": result.len(),
        "log": log_path.to_string_lossy(),
    }));
    payload.steps = steps.iter().map(ToString::to_string).collect();
    payload.tag = tag;
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

#[derive(Serialize)]
struct Measurements {
    points: usize,
    length: f64,
    /// Absent for outlines with fewer than 3 points.
    area: Option<f64>,
    centroid: [f64; 2],
}

fn measure(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "measure");
    let poly = outline_io::read_outline(input)?;
    let c = poly.centroid()?;
    let m = Measurements {
        points: poly.len(),
        length: poly.length(),
        area: ShoelaceArea.area(&poly).ok(),
        centroid: [c.x, c.y],
    };
    println!("{}", serde_json::to_string_pretty(&m)?);
    Ok(())
}

fn profile(
    input: &Path,
    out: &Path,
    window: usize,
    tip: bool,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        window,
        tip,
        "profile"
    );
    let poly = outline_io::read_outline(input)?;
    let mut table = angle_table(&poly, ProfileCfg { window })?;
    let mut root = 0;
    if tip {
        if let Some(i) = tip_index(table.field(3)?) {
            table = table.rotate_to_index(i)?;
            root = i;
        }
    }
    outline_io::write_table(out, &table)?;
    let mut payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "window": window,
        "root_index": root,
    }));
    payload.tag = tag;
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": nucleus_roi::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
