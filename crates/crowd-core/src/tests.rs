//! Unit tests for crowd-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, MarkerId};

    #[test]
    fn index_and_try_from() {
        let id = MarkerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(MarkerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(MarkerId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::Point3;

    #[test]
    fn distance_is_euclidean() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn angle_between_axes() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let z = Point3::new(0.0, 0.0, 3.0);
        assert!((Point3::angle(x, z) - FRAC_PI_2).abs() < 1e-6);
        assert!(Point3::angle(x, x).abs() < 1e-3);
        let neg = Point3::new(-2.0, 0.0, 0.0);
        assert!((Point3::angle(x, neg) - PI).abs() < 1e-3);
    }

    #[test]
    fn angle_with_zero_vector_is_right_angle() {
        let x = Point3::new(1.0, 0.0, 0.0);
        assert_eq!(Point3::angle(x, Point3::ORIGIN), FRAC_PI_2);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(10).since(Tick(4)), 6);
        assert_eq!(Tick(4).since(Tick(10)), 0);
    }

    #[test]
    fn add_and_display() {
        assert_eq!(Tick(3) + 2, Tick(5));
        assert_eq!(Tick(9).to_string(), "T9");
    }
}

#[cfg(test)]
mod health {
    use crate::{Color, Health, Tick};

    #[test]
    fn predicates_are_exclusive() {
        let infected = Health::Infected { since: Tick(3) };
        assert!(infected.is_infected());
        assert!(!infected.is_recovered());
        assert!(!infected.is_susceptible());
        assert_eq!(infected.infected_at(), Some(Tick(3)));
        assert_eq!(Health::Recovered.infected_at(), None);
    }

    #[test]
    fn colors_per_state() {
        assert_eq!(Health::Susceptible.color(), Color::CYAN);
        assert_eq!(Health::Infected { since: Tick::ZERO }.color(), Color::YELLOW);
        assert_eq!(Health::Recovered.color(), Color::MAGENTA);
        assert_eq!(Color::YELLOW.rgba(), [1.0, 1.0, 0.0, 1.0]);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = SimRng::new(1);
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }
}
