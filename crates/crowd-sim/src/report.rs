//! Per-tick and population summaries.

use crowd_agent::Agent;
use crowd_core::{Health, Tick};

/// What happened during one [`Simulation::step`](crate::Simulation::step).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub tick: Tick,
    /// Agents that moved to a new marker.
    pub relocated: usize,
    /// Agents that found no candidate and were given a new destination.
    pub redirected: usize,
    /// Susceptible → Infected transitions.
    pub infections: usize,
    /// Infected → Recovered transitions.
    pub recoveries: usize,
}

impl StepReport {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }
}

/// Population broken down by health state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HealthCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl HealthCounts {
    pub fn tally<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        let mut counts = Self::default();
        for agent in agents {
            match agent.health() {
                Health::Susceptible => counts.susceptible += 1,
                Health::Infected { .. } => counts.infected += 1,
                Health::Recovered => counts.recovered += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }
}
