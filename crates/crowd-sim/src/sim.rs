//! The `Simulation` struct and its tick.

use tracing::{debug, trace};

use crowd_agent::{Agent, AgentStore};
use crowd_core::{AgentId, Health, MarkerId, Point3, SimRng, Tick};
use crowd_spatial::Marker;

use crate::movement::select_marker;
use crate::{ContactMode, HealthCounts, SimBuilder, SimConfig, SimError, SimObserver, SimResult, StepReport};

/// All markers and agents of one run.
///
/// Invariants held between steps:
///
/// - every agent's position is its marker's position;
/// - every agent id appears in exactly one occupant list, the one of the
///   marker the agent points at, at the slot recorded in `occupant_slot`.
///
/// Create via [`Simulation::new`] or [`SimBuilder`].
pub struct Simulation {
    pub(crate) config: SimConfig,

    /// Fixed waypoints, indexed by `MarkerId`.
    pub(crate) markers: Vec<Marker>,

    /// Agents in creation order.
    pub(crate) agents: AgentStore,

    /// Index of each agent (by storage slot) within its marker's occupant
    /// list, so leaving a marker is a `swap_remove`.
    pub(crate) occupant_slot: Vec<usize>,

    /// Source of destination redraws during steps.
    pub(crate) rng: SimRng,

    /// Timestamp of the last completed step.
    pub(crate) last_tick: Option<Tick>,
}

impl Simulation {
    /// Build a simulation from `config` with a random marker lattice and
    /// random placement.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        SimBuilder::new(config).build()
    }

    /// Discard the whole population and rebuild it from `config`.
    ///
    /// On error the current simulation is left untouched.
    pub fn reconfigure(&mut self, config: SimConfig) -> SimResult<()> {
        *self = Simulation::new(config)?;
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every agent once, in creation order.
    ///
    /// `radius` bounds how far an agent may hop this tick.  `now` stamps new
    /// infections and drives recovery; it must not go backwards between
    /// calls.
    pub fn step(&mut self, radius: f32, now: Tick) -> SimResult<StepReport> {
        if radius.is_nan() || radius < 0.0 {
            return Err(SimError::InvalidRadius(radius));
        }
        if let Some(last) = self.last_tick {
            if now < last {
                return Err(SimError::TimeWentBackwards { last, now });
            }
        }

        let mut report = StepReport::new(now);

        for slot in 0..self.agents.len() {
            if !self.agents.at(slot).stays_put() {
                match self.select_target(slot, radius) {
                    Some(target) => {
                        self.move_agent(slot, target);
                        report.relocated += 1;
                        report.infections += self.transmit(slot, target, now);
                    }
                    None => {
                        let destination = self.random_marker_position();
                        self.agents.at_mut(slot).set_destination(destination);
                        report.redirected += 1;
                    }
                }
            }

            let agent = self.agents.at_mut(slot);
            if agent.recover_if_due(now, self.config.recovery_ticks) {
                trace!(agent = %agent.id(), tick = %now, "recovered");
                report.recoveries += 1;
            }
        }

        self.last_tick = Some(now);
        debug!(
            tick = %now,
            relocated = report.relocated,
            redirected = report.redirected,
            infections = report.infections,
            recoveries = report.recoveries,
            "step complete"
        );
        Ok(report)
    }

    /// Step `n` times at consecutive timestamps starting from `start`,
    /// notifying `observer` around each step.  Returns the timestamp the
    /// next step should use.
    pub fn run_ticks<O: SimObserver>(
        &mut self,
        n:        u64,
        radius:   f32,
        start:    Tick,
        observer: &mut O,
    ) -> SimResult<Tick> {
        let mut now = start;
        for _ in 0..n {
            observer.on_tick_start(now);
            let report = self.step(radius, now)?;
            observer.on_tick_end(&report);
            observer.on_snapshot(now, self);
            now = now + 1;
        }
        observer.on_sim_end(now);
        Ok(now)
    }

    fn select_target(&self, slot: usize, radius: f32) -> Option<MarkerId> {
        let agent = self.agents.at(slot);
        let distancing = self.config.mode == ContactMode::SocialDistancing;
        select_marker(
            agent.position(),
            agent.destination(),
            &self.markers,
            radius,
            |marker| distancing && !marker.is_empty(),
        )
    }

    /// Take the agent at `slot` off its marker and put it on `target`.
    fn move_agent(&mut self, slot: usize, target: MarkerId) {
        let agent = self.agents.at(slot);
        let (id, from) = (agent.id(), agent.marker());

        let vacated = self.occupant_slot[slot];
        if let Some(moved) = self.markers[from.index()].swap_remove(vacated) {
            let moved_slot = self.slot_of(moved);
            self.occupant_slot[moved_slot] = vacated;
        }

        let marker = &mut self.markers[target.index()];
        self.occupant_slot[slot] = marker.push(id);
        self.agents.at_mut(slot).relocate(target, marker.position());
    }

    /// Spread infection between the agent at `slot`, which has just arrived
    /// on `target`, and the other occupants.  Returns the number of new
    /// infections.
    fn transmit(&mut self, slot: usize, target: MarkerId, now: Tick) -> usize {
        let agent = self.agents.at(slot);
        let (id, health) = (agent.id(), agent.health());

        let others: Vec<usize> = self.markers[target.index()]
            .occupants()
            .iter()
            .filter(|&&o| o != id)
            .map(|&o| self.slot_of(o))
            .collect();

        match health {
            Health::Susceptible => {
                let exposed = others.iter().any(|&o| self.agents.at(o).health().is_infected());
                if exposed && self.agents.at_mut(slot).infect(now) {
                    trace!(agent = %id, marker = %target, tick = %now, "caught infection on arrival");
                    1
                } else {
                    0
                }
            }
            Health::Infected { .. } => {
                let mut infected = 0;
                for o in others {
                    let other = self.agents.at_mut(o);
                    if other.infect(now) {
                        trace!(agent = %other.id(), by = %id, marker = %target, tick = %now, "infected by arrival");
                        infected += 1;
                    }
                }
                infected
            }
            Health::Recovered => 0,
        }
    }

    fn random_marker_position(&mut self) -> Point3 {
        let m = self.rng.gen_range(0..self.markers.len());
        self.markers[m].position()
    }

    /// Storage slot of an id taken from an occupant list.
    ///
    /// # Panics
    /// Panics if the id is unknown, which means the occupancy bookkeeping is
    /// corrupt.
    fn slot_of(&self, id: AgentId) -> usize {
        self.agents
            .slot_of(id)
            .unwrap_or_else(|| panic!("marker occupant {id} is not a known agent"))
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// All agents in creation order — the order a renderer should build its
    /// per-instance buffers in.
    pub fn agents(&self) -> &[Agent] {
        self.agents.as_slice()
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.index())
    }

    /// Timestamp of the last completed step, `None` before the first.
    pub fn last_tick(&self) -> Option<Tick> {
        self.last_tick
    }

    pub fn health_counts(&self) -> HealthCounts {
        HealthCounts::tally(&self.agents)
    }

    /// `true` if agent positions and marker occupant lists agree in both
    /// directions.
    pub fn is_consistent(&self) -> bool {
        let occupants: usize = self.markers.iter().map(|m| m.occupants().len()).sum();
        if occupants != self.agents.len() {
            return false;
        }
        self.agents.iter().enumerate().all(|(slot, agent)| {
            let Some(marker) = self.markers.get(agent.marker().index()) else {
                return false;
            };
            agent.position() == marker.position()
                && marker.occupants().get(self.occupant_slot[slot]) == Some(&agent.id())
        })
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    pub fn set_destination(&mut self, id: AgentId, destination: Point3) -> SimResult<()> {
        self.agent_mut(id)?.set_destination(destination);
        Ok(())
    }

    /// Infect `id` at `now`.  Returns `false` if it was not susceptible.
    pub fn infect(&mut self, id: AgentId, now: Tick) -> SimResult<bool> {
        Ok(self.agent_mut(id)?.infect(now))
    }

    /// Recover `id`.  Returns `false` if it was not infected.
    pub fn recover(&mut self, id: AgentId) -> SimResult<bool> {
        Ok(self.agent_mut(id)?.recover())
    }

    /// Stop `id` from relocating in future steps.
    pub fn make_stay(&mut self, id: AgentId) -> SimResult<()> {
        self.agent_mut(id)?.make_stay();
        Ok(())
    }

    fn agent_mut(&mut self, id: AgentId) -> SimResult<&mut Agent> {
        self.agents.get_mut(id).ok_or(SimError::AgentNotFound(id))
    }
}
