//! Relocation target selection.
//!
//! A marker `m` is a candidate for an agent at `p` heading to `d` when
//!
//! - `|m - p| <= radius`, and
//! - `|d - p| > |d - m|` (moving there strictly reduces distance to `d`).
//!
//! Candidates are ranked by
//!
//! ```text
//! w = | 1 + cos θ / (1 + |m - p|) |      θ = angle(m - p, d - p)
//! ```
//!
//! which favours markers in the direction of travel and softly penalises
//! distant ones.  The first marker (lowest index) wins ties.

use crowd_core::{MarkerId, Point3};
use crowd_spatial::Marker;

/// Directional weight of moving from `from` to `to` when heading for
/// `destination`.
pub fn directional_weight(from: Point3, to: Point3, destination: Point3) -> f32 {
    let step = to - from;
    let theta = Point3::angle(step, destination - from);
    (1.0 + theta.cos() / (1.0 + step.length())).abs()
}

/// Best relocation target among `markers`, or `None` if no marker passes
/// both the radius and the progress filter.
///
/// `skip` can veto otherwise eligible markers; it is only consulted for
/// markers that passed both filters.
pub fn select_marker<F>(
    from:        Point3,
    destination: Point3,
    markers:     &[Marker],
    radius:      f32,
    mut skip:    F,
) -> Option<MarkerId>
where
    F: FnMut(&Marker) -> bool,
{
    let remaining = from.distance(destination);
    let mut best: Option<(MarkerId, f32)> = None;

    for (id, marker) in (0..).map(MarkerId).zip(markers) {
        let pos = marker.position();
        if from.distance(pos) > radius {
            continue;
        }
        if remaining <= pos.distance(destination) {
            continue;
        }
        if skip(marker) {
            continue;
        }

        let w = directional_weight(from, pos, destination);
        if best.is_none_or(|(_, best_w)| w > best_w) {
            best = Some((id, w));
        }
    }

    best.map(|(id, _)| id)
}
