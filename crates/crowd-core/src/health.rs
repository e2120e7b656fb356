//! Contagion state machine.
//!
//! ```text
//! Susceptible ──(co-occupancy with Infected)──▶ Infected ──(age > threshold)──▶ Recovered
//! ```
//!
//! Transitions only ever move rightwards; `Recovered` is terminal.

use crate::Tick;

/// Health state of an agent.  The infection timestamp lives inside the
/// `Infected` variant because it has no meaning in any other state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Health {
    #[default]
    Susceptible,
    Infected { since: Tick },
    Recovered,
}

impl Health {
    #[inline]
    pub fn is_susceptible(self) -> bool {
        matches!(self, Health::Susceptible)
    }

    #[inline]
    pub fn is_infected(self) -> bool {
        matches!(self, Health::Infected { .. })
    }

    #[inline]
    pub fn is_recovered(self) -> bool {
        matches!(self, Health::Recovered)
    }

    /// Tick at which the agent became infected, if currently infected.
    #[inline]
    pub fn infected_at(self) -> Option<Tick> {
        match self {
            Health::Infected { since } => Some(since),
            _ => None,
        }
    }

    /// Display color for this state.
    pub fn color(self) -> Color {
        match self {
            Health::Susceptible => Color::CYAN,
            Health::Infected { .. } => Color::YELLOW,
            Health::Recovered => Color::MAGENTA,
        }
    }
}

/// RGB display color in `[0, 1]`.  Alpha is always 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub [f32; 3]);

impl Color {
    pub const CYAN: Color = Color([0.0, 1.0, 1.0]);
    pub const YELLOW: Color = Color([1.0, 1.0, 0.0]);
    pub const MAGENTA: Color = Color([1.0, 0.0, 1.0]);

    /// RGBA with the implicit opaque alpha, as uploaded to an instance buffer.
    #[inline]
    pub fn rgba(self) -> [f32; 4] {
        let [r, g, b] = self.0;
        [r, g, b, 1.0]
    }
}
