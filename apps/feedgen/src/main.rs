//! feedgen — turn the field workbook into a static GTFS feed, then stagger
//! the extra fleet onto it.
//!
//! Two passes, runnable separately or as one pipeline:
//!
//! - `generate`: workbook CSV → `stops.txt`, `routes.txt`, `trips.txt`,
//!   `stop_times.txt`, `calendar.txt` for the source buses.
//! - `expand`: rewrite `trips.txt`/`stop_times.txt` with the derived buses
//!   appended and per-bus staggers applied.
//! - `run`: both, end to end — the recommended entry point, since it always
//!   rebuilds the base from the workbook before expanding.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use fg_core::GenerateConfig;
use fg_expand::{
    expand_stop_times, expand_trips, strip_derived_stop_times, strip_derived_trips,
    BusOffsetTable,
};
use fg_model::{read_workbook, Route, Workbook};
use fg_output::{
    build_feed, read_stop_times, read_trips, write_feed, write_stop_times, write_trips,
};
use fg_schedule::{build_schedule, DaySchedule};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "feedgen", version, about = "Static transit-feed generator")]
struct Cli {
    /// Optional JSON file overriding the built-in generation constants.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the base feed from the workbook export.
    Generate {
        /// Workbook CSV with the stop roster, distance table, and itineraries.
        #[arg(long)]
        workbook: PathBuf,
        /// Feed output directory.
        #[arg(long, default_value = "gtfs")]
        out: PathBuf,
    },
    /// Stagger the derived buses onto an existing feed.
    Expand {
        /// Feed directory containing trips.txt and stop_times.txt.
        #[arg(long, default_value = "gtfs")]
        dir: PathBuf,
    },
    /// Generate then expand, in one pipeline.
    Run {
        #[arg(long)]
        workbook: PathBuf,
        #[arg(long, default_value = "gtfs")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Generate { workbook, out } => {
            generate(&workbook, &out, &cfg)?;
        }
        Command::Expand { dir } => {
            expand(&dir)?;
        }
        Command::Run { workbook, out } => {
            generate(&workbook, &out, &cfg)?;
            expand(&out)?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GenerateConfig> {
    match path {
        None => Ok(GenerateConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))
        }
    }
}

// ── Generate pass ─────────────────────────────────────────────────────────────

fn generate(workbook_path: &Path, out: &Path, cfg: &GenerateConfig) -> Result<()> {
    let workbook = read_workbook(workbook_path)
        .with_context(|| format!("reading workbook {}", workbook_path.display()))?;
    info!(
        "workbook loaded: {} stops, {}/{} segments",
        workbook.stops.len(),
        workbook.segments(Route::A).len(),
        workbook.segments(Route::B).len()
    );

    let schedule = build_schedule(&workbook, cfg);
    let feed = build_feed(&workbook.stops, &schedule);
    write_feed(out, &feed)
        .with_context(|| format!("writing feed to {}", out.display()))?;

    print_generate_summary(&workbook, &schedule, out, cfg);
    Ok(())
}

fn print_generate_summary(
    workbook: &Workbook,
    schedule: &DaySchedule,
    out: &Path,
    cfg: &GenerateConfig,
) {
    println!("=== feed generation complete ===");
    println!("Stops: {}", workbook.stops.len());
    for route in Route::ALL {
        let stats = schedule.stats(route);
        println!(
            "{}: {} segments, {:.2} km, {} trips ({} buses)",
            route.id(),
            stats.segment_count,
            stats.total_km,
            stats.trip_count,
            cfg.buses_per_route
        );
    }
    println!("Feed written to {}", out.display());
}

// ── Expand pass ───────────────────────────────────────────────────────────────

fn expand(dir: &Path) -> Result<()> {
    let table = BusOffsetTable::default();

    // Strip anything a previous expansion appended so re-running derives the
    // extra buses fresh from the source rows instead of stacking up.
    let trips = strip_derived_trips(
        read_trips(dir).with_context(|| format!("reading trips.txt in {}", dir.display()))?,
        &table,
    );
    let stop_times = strip_derived_stop_times(
        read_stop_times(dir)
            .with_context(|| format!("reading stop_times.txt in {}", dir.display()))?,
        &table,
    );

    let expanded_trips = expand_trips(&trips, &table);
    let expanded_stop_times =
        expand_stop_times(&stop_times, &table).context("expanding stop_times")?;

    write_trips(dir, &expanded_trips).context("rewriting trips.txt")?;
    write_stop_times(dir, &expanded_stop_times).context("rewriting stop_times.txt")?;

    println!("=== fleet expansion complete ===");
    println!(
        "trips.txt      : {} rows ({} base + {} derived)",
        expanded_trips.len(),
        trips.len(),
        expanded_trips.len() - trips.len()
    );
    println!(
        "stop_times.txt : {} rows ({} base + {} derived)",
        expanded_stop_times.len(),
        stop_times.len(),
        expanded_stop_times.len() - stop_times.len()
    );
    Ok(())
}
