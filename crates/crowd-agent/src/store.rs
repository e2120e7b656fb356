//! `AgentStore` — creation-ordered arena of agents.
//!
//! Agents live in a `Vec` in the order they were spawned; that order is the
//! processing order of a tick and the order the renderer builds its
//! instance buffers in.  Ids are assigned from a counter owned by the store
//! (starting at 1), and an explicit `AgentId → slot` map resolves ids found
//! in marker occupant lists back to agents.  Nothing assumes `id - 1 == slot`.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap as IdMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as IdMap;

use crowd_core::{AgentId, MarkerId, Point3};

use crate::Agent;

/// Owns every agent of one simulation.
#[derive(Default)]
pub struct AgentStore {
    agents:  Vec<Agent>,
    slots:   IdMap<AgentId, usize>,
    next_id: u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = IdMap::default();
        slots.reserve(capacity);
        Self {
            agents: Vec::with_capacity(capacity),
            slots,
            next_id: 1,
        }
    }

    /// Create a susceptible agent on `marker` and return its new id.
    pub fn spawn(&mut self, marker: MarkerId, position: Point3, stays_put: bool) -> AgentId {
        // `Default` leaves the counter at 0; ids start at 1 either way.
        let id = AgentId(self.next_id.max(1));
        self.next_id = id.0 + 1;

        self.slots.insert(id, self.agents.len());
        self.agents.push(Agent::new(id, marker, position, stays_put));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Storage slot of `id`, if it belongs to this store.
    #[inline]
    pub fn slot_of(&self, id: AgentId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        let slot = self.slot_of(id)?;
        Some(&self.agents[slot])
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        let slot = self.slot_of(id)?;
        Some(&mut self.agents[slot])
    }

    /// Agent at storage slot `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= len()`.
    #[inline]
    pub fn at(&self, slot: usize) -> &Agent {
        &self.agents[slot]
    }

    #[inline]
    pub fn at_mut(&mut self, slot: usize) -> &mut Agent {
        &mut self.agents[slot]
    }

    /// All agents in creation order.
    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }
}

impl<'a> IntoIterator for &'a AgentStore {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
