//! Occupancy grid consulted only while markers are being placed.

/// Row-major `width × depth` cell occupancy.
pub struct OccupancyGrid {
    width: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    pub fn new(width: u32, depth: u32) -> Self {
        Self {
            width,
            cells: vec![false; width as usize * depth as usize],
        }
    }

    #[inline]
    fn offset(&self, x: u32, z: u32) -> usize {
        z as usize * self.width as usize + x as usize
    }

    /// Mark `(x, z)`.  Returns `false` if it was already marked.
    pub fn mark(&mut self, x: u32, z: u32) -> bool {
        let i = self.offset(x, z);
        !std::mem::replace(&mut self.cells[i], true)
    }
}
