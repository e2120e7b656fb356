//! A single mobile agent.
//!
//! Health is private so that every change goes through [`Agent::infect`] or
//! [`Agent::recover`]; those are the only places the cached display color is
//! updated, which keeps health transitions monotonic and color in sync.

use crowd_core::{AgentId, Color, Health, MarkerId, Point3, Tick};

/// A mobile entity that hops between markers.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    id:          AgentId,
    position:    Point3,
    destination: Point3,
    marker:      MarkerId,
    health:      Health,
    color:       Color,
    stays_put:   bool,
}

impl Agent {
    /// A susceptible agent standing on `marker` at `position`.
    ///
    /// The destination starts at the origin until the owner assigns one.
    pub fn new(id: AgentId, marker: MarkerId, position: Point3, stays_put: bool) -> Self {
        let health = Health::Susceptible;
        Self {
            id,
            position,
            destination: Point3::ORIGIN,
            marker,
            health,
            color: health.color(),
            stays_put,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current position; always the position of [`marker`](Self::marker).
    #[inline]
    pub fn position(&self) -> Point3 {
        self.position
    }

    #[inline]
    pub fn destination(&self) -> Point3 {
        self.destination
    }

    /// The marker the agent currently occupies.
    #[inline]
    pub fn marker(&self) -> MarkerId {
        self.marker
    }

    #[inline]
    pub fn health(&self) -> Health {
        self.health
    }

    /// Cached display color, derived from [`health`](Self::health).
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn stays_put(&self) -> bool {
        self.stays_put
    }

    pub fn set_destination(&mut self, destination: Point3) {
        self.destination = destination;
    }

    /// Flag the agent as one that never relocates.
    pub fn make_stay(&mut self) {
        self.stays_put = true;
    }

    /// Move onto `marker`.  The caller keeps the markers' occupant lists in
    /// step with this.
    pub fn relocate(&mut self, marker: MarkerId, position: Point3) {
        self.marker = marker;
        self.position = position;
    }

    /// Susceptible → Infected at `now`.  Returns `false` (and changes
    /// nothing) for agents that are already infected or recovered.
    pub fn infect(&mut self, now: Tick) -> bool {
        if !self.health.is_susceptible() {
            return false;
        }
        self.set_health(Health::Infected { since: now });
        true
    }

    /// Infected → Recovered.  Returns `false` for any other state.
    pub fn recover(&mut self) -> bool {
        if !self.health.is_infected() {
            return false;
        }
        self.set_health(Health::Recovered);
        true
    }

    /// Recover if the infection is strictly older than `threshold` ticks.
    pub fn recover_if_due(&mut self, now: Tick, threshold: u64) -> bool {
        match self.health.infected_at() {
            Some(since) if now.since(since) > threshold => self.recover(),
            _ => false,
        }
    }

    fn set_health(&mut self, health: Health) {
        self.health = health;
        self.color = health.color();
    }
}
