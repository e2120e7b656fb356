//! Markers: fixed waypoints that agents stand on.

use crowd_core::{AgentId, Point3};

/// A waypoint with an immutable position and the agents currently on it.
///
/// Occupancy is unbounded: several agents may share a marker, and that
/// sharing is what drives transmission.  Occupant order carries no meaning,
/// which lets removal be a `swap_remove` by slot.
#[derive(Clone, Debug)]
pub struct Marker {
    position:  Point3,
    occupants: Vec<AgentId>,
}

impl Marker {
    pub fn new(position: Point3) -> Self {
        Self { position, occupants: Vec::new() }
    }

    #[inline]
    pub fn position(&self) -> Point3 {
        self.position
    }

    #[inline]
    pub fn occupants(&self) -> &[AgentId] {
        &self.occupants
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Add `agent` and return the slot it was stored at.
    pub fn push(&mut self, agent: AgentId) -> usize {
        self.occupants.push(agent);
        self.occupants.len() - 1
    }

    /// Remove the occupant at `slot` in O(1).
    ///
    /// The last occupant is moved into `slot`; its id is returned so the
    /// caller can update that agent's recorded slot.  Returns `None` when the
    /// removed occupant was the last one.
    ///
    /// # Panics
    /// Panics if `slot` is out of range.
    pub fn swap_remove(&mut self, slot: usize) -> Option<AgentId> {
        self.occupants.swap_remove(slot);
        self.occupants.get(slot).copied()
    }
}
