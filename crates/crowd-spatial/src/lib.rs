//! `crowd-spatial` — where agents can stand.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`plane`]   | `Plane` dimensions, interior bounds, cell → world mapping |
//! | [`grid`]    | `OccupancyGrid` used while placing markers                |
//! | [`marker`]  | `Marker`: fixed position + occupant list                  |
//! | [`lattice`] | `build_lattice` rejection sampler                         |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod grid;
pub mod lattice;
pub mod marker;
pub mod plane;


pub use error::{SpatialError, SpatialResult};
pub use grid::OccupancyGrid;
pub use lattice::{build_lattice, MAX_ATTEMPTS_PER_MARKER};
pub use marker::Marker;
pub use plane::{Plane, MARGIN, MARKER_LIFT};
