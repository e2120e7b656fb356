//! `crowd-core` — foundational types for the crowd contagion simulator.
//!
//! This crate is a dependency of every other `crowd-*` crate and has no
//! `crowd-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module     | Contents                                     |
//! |------------|----------------------------------------------|
//! | [`ids`]    | `AgentId`, `MarkerId`                        |
//! | [`geo`]    | `Point3`, distance and angle helpers         |
//! | [`time`]   | `Tick`                                       |
//! | [`health`] | `Health` state machine, `Color`              |
//! | [`rng`]    | `SimRng`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod health;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::Point3;
pub use health::{Color, Health};
pub use ids::{AgentId, MarkerId};
pub use rng::SimRng;
pub use time::Tick;
