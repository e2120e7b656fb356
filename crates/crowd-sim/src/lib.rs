//! `crowd-sim` — the crowd contagion simulation.
//!
//! Agents hop between fixed markers on a plane.  Every tick each agent, in
//! creation order, scans the markers within a search radius, keeps those
//! that bring it closer to its destination, and moves to the one with the
//! best directional weight.  Landing on a marker that another agent already
//! occupies is the only contact channel for the contagion:
//!
//! ```text
//! for agent in creation order:
//!   ① Select     — best marker within radius that reduces distance to destination
//!   ② Move       — leave old marker, join new one            (or redirect if none)
//!   ③ Transmit   — susceptible mover catches / infected mover spreads
//!   ④ Recover    — infected longer than the threshold → recovered
//! ```
//!
//! State changes are visible immediately to agents processed later in the
//! same tick.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash for the agent id → slot index.                      |
//! | `serde`   | `Serialize`/`Deserialize` on `SimConfig` and nested types. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use crowd_core::Tick;
//! use crowd_sim::{NoopObserver, SimConfig, Simulation};
//!
//! let mut sim = Simulation::new(SimConfig::default())?;
//! let next = sim.run_ticks(100, 10.0, Tick::ZERO, &mut NoopObserver)?;
//! println!("{:?}", sim.health_counts());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod movement;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use config::{ContactMode, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{HealthCounts, StepReport};
pub use sim::Simulation;
