//! downtown: console report for the footfall model.
//!
//! Runs 50 customers, 3 stores and 2 surveyors on a 20 × 20 plane for 50
//! ticks, then prints a store exposure ranking and a per-surveyor regional
//! analysis.
//!
//! ```text
//! downtown [CONFIG.json] [--json OUT.json]
//! ```
//!
//! `CONFIG.json` holds any subset of `ModelConfig` fields; missing fields
//! take their defaults.  `--json` additionally writes the final statistics
//! to `OUT.json`.  Log verbosity follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ff_agent::Population;
use ff_core::{ModelConfig, Tick};
use ff_sim::{SimObserver, StoreStatistics, SurveyResults, create_model};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 42;
const TICKS:           u64 = 50;
const PROGRESS_EVERY:  u64 = 10;

// ── Command line ──────────────────────────────────────────────────────────────

struct Args {
    config: Option<PathBuf>,
    json:   Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { config: None, json: None };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => {
                let path = it.next().context("--json needs an output path")?;
                args.json = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path if args.config.is_none() => args.config = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument {extra}"),
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> Result<ModelConfig> {
    let Some(path) = path else {
        return Ok(ModelConfig { seed: Some(SEED), ..ModelConfig::default() });
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints a progress line every `every` completed ticks.
struct Progress {
    every: u64,
    total: u64,
}

impl SimObserver for Progress {
    fn on_tick_end(&mut self, tick: Tick, _population: &Population) {
        let done = tick.0 + 1;
        if done % self.every == 0 {
            println!("  completed {done}/{} ticks", self.total);
        }
    }
}

// ── JSON dump ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Report<'a> {
    config:  &'a ModelConfig,
    seed:    u64,
    ticks:   u64,
    stores:  StoreStatistics,
    surveys: SurveyResults,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = parse_args()?;
    let config = load_config(args.config.as_ref())?;

    println!("=== downtown footfall ===");
    println!(
        "Customers: {}  |  Stores: {}  |  Surveyors: {}  |  Plane: {} × {}",
        config.customer_count, config.store_count, config.surveyor_count,
        config.width, config.height,
    );
    println!();

    // 1. Build.
    let mut sim = create_model(config)?;
    info!(seed = sim.seed(), "running {TICKS} ticks");

    // 2. Run.
    let t0 = Instant::now();
    let mut progress = Progress { every: PROGRESS_EVERY, total: TICKS };
    sim.run_ticks(TICKS, &mut progress)?;
    let elapsed = t0.elapsed();
    println!();
    println!("Simulation complete in {:.3} s (seed {})", elapsed.as_secs_f64(), sim.seed());
    println!();

    // 3. Store exposure ranking.
    let stores = sim.store_statistics();
    println!("Store exposure ranking");
    println!("{:<6} {:<12} {:>10} {:>16}", "Rank", "Store", "Exposure", "Position");
    println!("{}", "-".repeat(47));
    for (rank, (name, exposure)) in sim.exposure_ranking().into_iter().enumerate() {
        let pos = stores[&name].position;
        println!(
            "{:<6} {:<12} {:>10} {:>16}",
            rank + 1,
            name,
            exposure,
            format!("({:.1}, {:.1})", pos.x, pos.y),
        );
    }
    println!();

    // 4. Regional analysis.
    println!("Regional analysis");
    println!(
        "{:<12} {:>6} {:>7} {:>10} {:>10} {:>8}",
        "Surveyor", "Flow", "Stores", "Exposure", "Density", "Heat"
    );
    println!("{}", "-".repeat(58));
    // Id order, so `Survey 2` prints ahead of `Survey 10`.
    for (agent, surveyor) in sim.population().surveyors() {
        let name = agent.name();
        match surveyor.latest() {
            Some(m) => println!(
                "{:<12} {:>6} {:>7} {:>10} {:>10.4} {:>8.2}",
                name,
                m.customer_flow,
                m.store_count,
                m.total_exposure,
                m.customer_density,
                m.business_heat,
            ),
            None => println!("{name:<12} (no measurement yet)"),
        }
    }

    // 5. Optional JSON dump.
    if let Some(path) = args.json {
        let report = Report {
            config: sim.config(),
            seed:   sim.seed(),
            ticks:  sim.tick().0,
            stores,
            surveys: sim.survey_results(),
        };
        let file = std::fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
        println!();
        println!("Wrote {}", path.display());
    }

    Ok(())
}
