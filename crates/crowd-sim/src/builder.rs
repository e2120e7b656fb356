//! Fluent builder for constructing a [`Simulation`].

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashSet as IdSet;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashSet as IdSet;

use tracing::debug;

use crowd_agent::AgentStore;
use crowd_core::{MarkerId, Point3, SimRng, Tick};
use crowd_spatial::{build_lattice, Marker};

use crate::{SimConfig, SimError, SimResult, Simulation};

/// Random marker draws per agent before falling back to picking among the
/// remaining empty markers directly.
const MAX_PLACEMENT_DRAWS: usize = 1_000;

/// Fluent builder for [`Simulation`].
///
/// # Optional inputs (have defaults)
///
/// | Method                       | Default                                      |
/// |------------------------------|----------------------------------------------|
/// | `.markers(v)`                | Random lattice of `config.marker_count()`    |
/// | `.initial_markers(v)`        | Each agent on a random empty marker          |
/// | `.initial_destinations(v)`   | Each agent heads for a random marker         |
///
/// The overrides exist for scripted scenarios and tests; a normal run only
/// needs the config.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .markers(vec![Point3::new(0.0, 2.0, 0.0), Point3::new(1.0, 2.0, 0.0)])
///     .initial_markers(vec![MarkerId(0), MarkerId(1)])
///     .build()?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    markers:      Option<Vec<Point3>>,
    placements:   Option<Vec<MarkerId>>,
    destinations: Option<Vec<MarkerId>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            markers:      None,
            placements:   None,
            destinations: None,
        }
    }

    /// Use these marker positions instead of a random lattice.
    pub fn markers(mut self, positions: Vec<Point3>) -> Self {
        self.markers = Some(positions);
        self
    }

    /// Start agent `i` on marker `v[i]`.  Must be length `population` with
    /// no marker used twice.
    pub fn initial_markers(mut self, markers: Vec<MarkerId>) -> Self {
        self.placements = Some(markers);
        self
    }

    /// Give agent `i` the position of marker `v[i]` as its destination.
    /// Must be length `population`.
    pub fn initial_destinations(mut self, markers: Vec<MarkerId>) -> Self {
        self.destinations = Some(markers);
        self
    }

    /// Validate inputs, lay out markers, place and seed agents, and return a
    /// ready-to-step [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let config = self.config;
        config.validate()?;
        let population = config.population;
        let mut rng = SimRng::new(config.seed);

        // ── Markers ───────────────────────────────────────────────────────
        let mut markers: Vec<Marker> = match self.markers {
            Some(positions) => positions.into_iter().map(Marker::new).collect(),
            None => build_lattice(&config.plane, config.marker_count(), &mut rng)?,
        };
        let marker_bound = MarkerId::try_from(markers.len()).map_err(|_| {
            SimError::Config(format!("{} markers exceed the MarkerId range", markers.len()))
        })?;
        if markers.len() < population {
            return Err(SimError::Config(format!(
                "population {population} exceeds the {} available markers",
                markers.len()
            )));
        }

        // ── Validate overrides ────────────────────────────────────────────
        if let Some(p) = &self.placements {
            check_len(p, population, "initial markers")?;
            check_in_range(p, markers.len())?;
            let mut seen: IdSet<MarkerId> = IdSet::default();
            seen.reserve(p.len());
            if let Some(dup) = p.iter().find(|m| !seen.insert(**m)) {
                return Err(SimError::Config(format!(
                    "marker {dup} is assigned to more than one agent"
                )));
            }
        }
        if let Some(d) = &self.destinations {
            check_len(d, population, "initial destinations")?;
            check_in_range(d, markers.len())?;
        }

        // ── Agents ────────────────────────────────────────────────────────
        let mut agents = AgentStore::with_capacity(population);
        let mut occupant_slot = Vec::with_capacity(population);
        let first_infected = population - config.initial_infected;

        for i in 0..population {
            let marker = match &self.placements {
                Some(p) => p[i],
                None => random_empty_marker(&markers, marker_bound, &mut rng),
            };
            let stays_put = config.stay_fraction > 0.0 && rng.gen_bool(config.stay_fraction);

            let position = markers[marker.index()].position();
            let id = agents.spawn(marker, position, stays_put);
            let agent = agents.at_mut(i);

            if i >= first_infected {
                agent.infect(Tick::ZERO);
            }

            let dest = match &self.destinations {
                Some(d) => d[i],
                None => MarkerId(rng.gen_range(0..marker_bound.0)),
            };
            agent.set_destination(markers[dest.index()].position());

            occupant_slot.push(markers[marker.index()].push(id));
        }

        debug!(
            agents = population,
            markers = markers.len(),
            infected = config.initial_infected,
            "simulation built"
        );

        Ok(Simulation {
            config,
            markers,
            agents,
            occupant_slot,
            rng,
            last_tick: None,
        })
    }
}

fn check_len(v: &[MarkerId], expected: usize, what: &'static str) -> SimResult<()> {
    if v.len() != expected {
        return Err(SimError::AgentCountMismatch {
            expected,
            got: v.len(),
            what,
        });
    }
    Ok(())
}

fn check_in_range(v: &[MarkerId], marker_count: usize) -> SimResult<()> {
    match v.iter().find(|m| m.index() >= marker_count) {
        Some(&bad) => Err(SimError::MarkerNotFound(bad)),
        None => Ok(()),
    }
}

/// Uniformly random marker with no occupants.
///
/// Rejection sampling over all markers first; once the draw budget is spent
/// the choice is made among the empty markers directly, which has the same
/// distribution.  `bound` is `markers.len()` as a `MarkerId`; the caller
/// guarantees at least one marker is empty.
fn random_empty_marker(markers: &[Marker], bound: MarkerId, rng: &mut SimRng) -> MarkerId {
    for _ in 0..MAX_PLACEMENT_DRAWS {
        let m = MarkerId(rng.gen_range(0..bound.0));
        if markers[m.index()].is_empty() {
            return m;
        }
    }
    let empty: Vec<MarkerId> = (0..bound.0)
        .map(MarkerId)
        .filter(|m| markers[m.index()].is_empty())
        .collect();
    empty[rng.gen_range(0..empty.len())]
}
