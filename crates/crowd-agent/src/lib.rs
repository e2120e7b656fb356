//! `crowd-agent` — agent state and storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`agent`]   | `Agent`: position, destination, health, stay flag   |
//! | [`store`]   | `AgentStore`: creation-ordered arena + id → slot map |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the id → slot index.  |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Agent`.          |

pub mod agent;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use store::AgentStore;
