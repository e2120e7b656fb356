//! Unit tests for crowd-agent.

#[cfg(test)]
mod agent {
    use crowd_core::{AgentId, Color, Health, MarkerId, Point3, Tick};

    use crate::Agent;

    fn fresh() -> Agent {
        Agent::new(AgentId(1), MarkerId(0), Point3::new(1.0, 2.0, 3.0), false)
    }

    #[test]
    fn starts_susceptible_and_cyan() {
        let a = fresh();
        assert_eq!(a.health(), Health::Susceptible);
        assert_eq!(a.color(), Color::CYAN);
        assert_eq!(a.destination(), Point3::ORIGIN);
    }

    #[test]
    fn infect_then_recover() {
        let mut a = fresh();
        assert!(a.infect(Tick(5)));
        assert_eq!(a.health(), Health::Infected { since: Tick(5) });
        assert_eq!(a.color(), Color::YELLOW);
        assert!(a.recover());
        assert_eq!(a.health(), Health::Recovered);
        assert_eq!(a.color(), Color::MAGENTA);
    }

    #[test]
    fn transitions_never_go_backwards() {
        let mut a = fresh();
        // Recovering a susceptible agent does nothing.
        assert!(!a.recover());
        assert!(a.health().is_susceptible());

        a.infect(Tick(1));
        // Re-infection keeps the original timestamp.
        assert!(!a.infect(Tick(9)));
        assert_eq!(a.health().infected_at(), Some(Tick(1)));

        a.recover();
        assert!(!a.infect(Tick(10)));
        assert!(a.health().is_recovered());
    }

    #[test]
    fn recover_if_due_is_strict() {
        let mut a = fresh();
        a.infect(Tick(10));
        assert!(!a.recover_if_due(Tick(20), 10));
        assert!(a.health().is_infected());
        assert!(a.recover_if_due(Tick(21), 10));
        assert!(a.health().is_recovered());
    }

    #[test]
    fn relocate_moves_marker_and_position() {
        let mut a = fresh();
        a.relocate(MarkerId(4), Point3::new(9.0, 2.0, 9.0));
        assert_eq!(a.marker(), MarkerId(4));
        assert_eq!(a.position(), Point3::new(9.0, 2.0, 9.0));
    }

    #[test]
    fn make_stay_sets_flag() {
        let mut a = fresh();
        assert!(!a.stays_put());
        a.make_stay();
        assert!(a.stays_put());
    }
}

#[cfg(test)]
mod store {
    use crowd_core::{AgentId, MarkerId, Point3};

    use crate::AgentStore;

    #[test]
    fn ids_start_at_one_and_are_sequential() {
        let mut store = AgentStore::new();
        let a = store.spawn(MarkerId(0), Point3::ORIGIN, false);
        let b = store.spawn(MarkerId(1), Point3::ORIGIN, false);
        assert_eq!(a, AgentId(1));
        assert_eq!(b, AgentId(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn counter_is_per_store() {
        let mut first = AgentStore::new();
        first.spawn(MarkerId(0), Point3::ORIGIN, false);
        first.spawn(MarkerId(0), Point3::ORIGIN, false);

        let mut second = AgentStore::default();
        assert_eq!(second.spawn(MarkerId(0), Point3::ORIGIN, false), AgentId(1));
    }

    #[test]
    fn lookup_by_id_and_slot() {
        let mut store = AgentStore::with_capacity(3);
        for m in 0..3 {
            store.spawn(MarkerId(m), Point3::new(m as f32, 0.0, 0.0), false);
        }
        assert_eq!(store.slot_of(AgentId(3)), Some(2));
        assert_eq!(store.get(AgentId(2)).unwrap().marker(), MarkerId(1));
        assert!(store.get(AgentId(99)).is_none());
        assert!(store.get(AgentId::INVALID).is_none());

        store.get_mut(AgentId(1)).unwrap().make_stay();
        assert!(store.at(0).stays_put());
    }

    #[test]
    fn iteration_is_creation_order() {
        let mut store = AgentStore::new();
        for m in [5, 3, 8] {
            store.spawn(MarkerId(m), Point3::ORIGIN, false);
        }
        let markers: Vec<_> = store.iter().map(|a| a.marker().0).collect();
        assert_eq!(markers, vec![5, 3, 8]);
        let ids: Vec<_> = (&store).into_iter().map(|a| a.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
