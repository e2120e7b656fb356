//! headless — run the crowd contagion simulation without graphics.
//!
//! Stands in for the render loop: steps the simulation once per "frame" at
//! consecutive timestamps, logs the S/I/R curve, and prints the final
//! state of every agent.  Parameters come from an optional JSON config file
//! (any subset of `SimConfig` fields) with command-line overrides on top.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crowd_core::Tick;
use crowd_sim::{ContactMode, HealthCounts, SimConfig, SimObserver, Simulation, StepReport};

#[derive(Parser, Debug)]
#[command(about = "Headless crowd contagion simulation")]
struct Args {
    /// JSON file with SimConfig fields; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Search radius used every tick.
    #[arg(long, default_value_t = 10.0)]
    radius: f32,

    /// Log the S/I/R counts every N ticks.
    #[arg(long, default_value_t = 50)]
    log_every: u64,

    #[arg(long)]
    population: Option<usize>,

    #[arg(long)]
    initial_infected: Option<usize>,

    #[arg(long)]
    recovery_ticks: Option<u64>,

    #[arg(long)]
    density_factor: Option<usize>,

    #[arg(long)]
    stay_fraction: Option<f64>,

    /// Avoid markers that are already occupied.
    #[arg(long)]
    social_distancing: bool,

    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(v) = self.population {
            config.population = v;
        }
        if let Some(v) = self.initial_infected {
            config.initial_infected = v;
        }
        if let Some(v) = self.recovery_ticks {
            config.recovery_ticks = v;
        }
        if let Some(v) = self.density_factor {
            config.density_factor = v;
        }
        if let Some(v) = self.stay_fraction {
            config.stay_fraction = v;
        }
        if self.social_distancing {
            config.mode = ContactMode::SocialDistancing;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        Ok(config)
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the epidemic curve and remembers its peak.
struct CurveLogger {
    every:       u64,
    infections:  usize,
    peak:        (Tick, usize),
}

impl SimObserver for CurveLogger {
    fn on_tick_end(&mut self, report: &StepReport) {
        self.infections += report.infections;
    }

    fn on_snapshot(&mut self, tick: Tick, sim: &Simulation) {
        let HealthCounts { susceptible, infected, recovered } = sim.health_counts();
        if infected > self.peak.1 {
            self.peak = (tick, infected);
        }
        if self.every > 0 && tick.0 % self.every == 0 {
            info!(%tick, susceptible, infected, recovered, "progress");
        }
    }

    fn on_sim_end(&mut self, next_tick: Tick) {
        info!(
            ticks = next_tick.0,
            new_infections = self.infections,
            peak_tick = %self.peak.0,
            peak_infected = self.peak.1,
            "run finished"
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = args.sim_config()?;
    info!(
        population = config.population,
        markers = config.marker_count(),
        infected = config.initial_infected,
        recovery_ticks = config.recovery_ticks,
        mode = ?config.mode,
        seed = config.seed,
        "building simulation"
    );

    let mut sim = Simulation::new(config).context("building simulation")?;
    let mut logger = CurveLogger {
        every:      args.log_every,
        infections: 0,
        peak:       (Tick::ZERO, sim.health_counts().infected),
    };

    let t0 = Instant::now();
    sim.run_ticks(args.ticks, args.radius, Tick::ZERO, &mut logger)?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "simulation complete");

    println!("{:<8} {:<26} {:<12}", "Agent", "Position", "Health");
    println!("{}", "-".repeat(48));
    for agent in sim.agents() {
        let health = match agent.health() {
            h if h.is_recovered() => "recovered",
            h if h.is_infected() => "infected",
            _ => "susceptible",
        };
        println!("{:<8} {:<26} {:<12}", agent.id().0, agent.position().to_string(), health);
    }

    Ok(())
}
