//! The ground plane that markers are laid out on.
//!
//! Grid cells are unit squares indexed `(x, z)` with `0 <= x < width` and
//! `0 <= z < depth`.  Markers are kept `MARGIN` cells away from every edge,
//! so the usable interior is `[MARGIN, width - MARGIN)` by
//! `[MARGIN, depth - MARGIN)`.  World coordinates are centred on the plane.

use crowd_core::Point3;

/// Cells kept free along each edge of the plane.
pub const MARGIN: u32 = 10;

/// Height of a marker above the plane surface.
pub const MARKER_LIFT: f32 = 2.0;

/// Plane dimensions (in grid cells) and surface height.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub width:  u32,
    pub depth:  u32,
    pub height: f32,
}

impl Plane {
    pub fn new(width: u32, depth: u32, height: f32) -> Self {
        Self { width, depth, height }
    }

    /// Interior extent along x and z.  Zero when the margin eats the axis.
    pub fn interior(&self) -> (u32, u32) {
        (
            self.width.saturating_sub(2 * MARGIN),
            self.depth.saturating_sub(2 * MARGIN),
        )
    }

    /// Number of interior cells available for markers.
    pub fn interior_cells(&self) -> usize {
        let (w, d) = self.interior();
        w as usize * d as usize
    }

    /// World position of a marker standing on cell `(x, z)`.
    pub fn cell_to_world(&self, x: u32, z: u32) -> Point3 {
        Point3::new(
            x as f32 - self.width as f32 / 2.0,
            self.height + MARKER_LIFT,
            z as f32 - self.depth as f32 / 2.0,
        )
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(150, 150, 0.0)
    }
}
