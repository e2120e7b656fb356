//! Marker lattice construction.
//!
//! Markers are dropped on distinct, uniformly drawn interior cells by
//! rejection sampling against an [`OccupancyGrid`].  The sampler assumes a
//! sparse fill; each marker gets a bounded number of draws so that a
//! misconfigured density surfaces as an error instead of a hang.

use tracing::debug;

use crowd_core::SimRng;

use crate::{Marker, OccupancyGrid, Plane, SpatialError, SpatialResult, MARGIN};

/// Rejected cell draws tolerated per marker before giving up.
pub const MAX_ATTEMPTS_PER_MARKER: usize = 10_000;

/// Place `count` markers on distinct interior cells of `plane`.
///
/// Markers are returned in placement order; that order defines their
/// `MarkerId`s.
pub fn build_lattice(plane: &Plane, count: usize, rng: &mut SimRng) -> SpatialResult<Vec<Marker>> {
    let (inner_w, inner_d) = plane.interior();
    if count > 0 && (inner_w == 0 || inner_d == 0) {
        return Err(SpatialError::PlaneTooSmall {
            width:  plane.width,
            depth:  plane.depth,
            margin: MARGIN,
        });
    }
    let cells = plane.interior_cells();
    if count > cells {
        return Err(SpatialError::TooDense { requested: count, cells });
    }

    let mut grid = OccupancyGrid::new(plane.width, plane.depth);
    let mut markers = Vec::with_capacity(count);
    let mut rejected = 0usize;

    while markers.len() < count {
        let x = rng.gen_range(0..inner_w) + MARGIN;
        let z = rng.gen_range(0..inner_d) + MARGIN;

        if grid.mark(x, z) {
            markers.push(Marker::new(plane.cell_to_world(x, z)));
            rejected = 0;
            continue;
        }

        rejected += 1;
        if rejected >= MAX_ATTEMPTS_PER_MARKER {
            return Err(SpatialError::PlacementExhausted {
                placed:    markers.len(),
                requested: count,
                attempts:  rejected,
            });
        }
    }

    debug!(
        markers = count,
        fill = count as f64 / cells.max(1) as f64,
        "marker lattice built"
    );
    Ok(markers)
}
