//! Simulation configuration.

use crowd_core::MarkerId;
use crowd_spatial::Plane;

use crate::{SimError, SimResult};

/// How agents treat markers that other agents are already standing on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContactMode {
    /// Occupied markers are ordinary candidates.
    #[default]
    Regular,
    /// Occupied markers are never chosen as a relocation target.
    SocialDistancing,
}

/// Top-level simulation configuration.
///
/// Changing any field means building a new simulation; see
/// [`Simulation::reconfigure`](crate::Simulation::reconfigure).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of agents.
    pub population: usize,

    /// Plane dimensions in grid cells, and the surface height.
    pub plane: Plane,

    /// The last `initial_infected` agents created start infected at tick 0.
    pub initial_infected: usize,

    /// An agent recovers once it has been infected for strictly more than
    /// this many ticks.
    pub recovery_ticks: u64,

    /// Markers per agent.  Must be at least 1 so every agent can start on
    /// its own marker.
    pub density_factor: usize,

    /// Probability that an agent is created with the stay-put flag.
    pub stay_fraction: f64,

    pub mode: ContactMode,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl SimConfig {
    /// Number of markers laid out on the plane.
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.population.saturating_mul(self.density_factor)
    }

    /// Reject configurations that cannot produce a valid initial state.
    ///
    /// Plane-size and density problems are reported by the marker lattice
    /// builder, which knows the interior cell count.
    pub fn validate(&self) -> SimResult<()> {
        if self.density_factor == 0 {
            return Err(SimError::Config("density_factor must be at least 1".into()));
        }
        if self.marker_count() >= MarkerId::INVALID.index() {
            return Err(SimError::Config(format!(
                "population ({}) × density_factor ({}) exceeds the MarkerId range",
                self.population, self.density_factor
            )));
        }
        if self.initial_infected > self.population {
            return Err(SimError::Config(format!(
                "initial_infected ({}) exceeds population ({})",
                self.initial_infected, self.population
            )));
        }
        if !(0.0..=1.0).contains(&self.stay_fraction) {
            return Err(SimError::Config(format!(
                "stay_fraction must lie in [0, 1], got {}",
                self.stay_fraction
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            population:       75,
            plane:            Plane::default(),
            initial_infected: 10,
            recovery_ticks:   157,
            density_factor:   50,
            stay_fraction:    0.0,
            mode:             ContactMode::Regular,
            seed:             42,
        }
    }
}
