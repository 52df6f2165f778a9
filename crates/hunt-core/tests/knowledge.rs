use hunt_core::{Bounds, Cell, Coord, KnowledgeMap};
use proptest::prelude::*;

fn map() -> KnowledgeMap {
    KnowledgeMap::new(Bounds::new(5, 5), Coord::new(0, 0))
}

#[test]
fn origin_is_known_free_and_unknown_reads_free() {
    let k = map();
    assert_eq!(k.get(Coord::new(0, 0)), Some(Cell::Free));
    assert_eq!(k.get(Coord::new(3, 3)), None);
    assert_eq!(k.lookup(Coord::new(3, 3)), Cell::Free);
    assert_eq!(k.known_len(), 1);
}

#[test]
fn newer_observation_overwrites_older() {
    let mut k = map();
    let at = Coord::new(1, 1);
    k.observe(at, Cell::HazardHint);
    k.observe(at, Cell::Hazard);
    assert_eq!(k.lookup(at), Cell::Hazard);
}

#[test]
fn out_of_bounds_observations_are_dropped() {
    let mut k = map();
    k.observe(Coord::new(-1, 0), Cell::Goal);
    k.observe(Coord::new(0, 5), Cell::Goal);
    assert_eq!(k.find_goal(), None);
    assert_eq!(k.known_len(), 1);
}

#[test]
fn observe_if_unknown_keeps_existing_entry() {
    let mut k = map();
    let at = Coord::new(2, 2);
    k.observe(at, Cell::HintStrong);
    k.observe_if_unknown(at, Cell::Free);
    assert_eq!(k.lookup(at), Cell::HintStrong);
}

#[test]
fn find_goal_reports_stored_goal() {
    let mut k = map();
    assert_eq!(k.find_goal(), None);
    k.observe(Coord::new(4, 4), Cell::Goal);
    assert_eq!(k.find_goal(), Some(Coord::new(4, 4)));
}

#[test]
fn nearest_hint_distance_counts_strong_and_mixed_hints_only() {
    let mut k = map();
    assert_eq!(k.nearest_hint_distance(Coord::new(0, 0)), None);

    k.observe(Coord::new(0, 1), Cell::HazardHint);
    assert_eq!(k.nearest_hint_distance(Coord::new(0, 0)), None);

    k.observe(Coord::new(3, 3), Cell::HintStrong);
    k.observe(Coord::new(1, 2), Cell::HintWeak);
    assert_eq!(k.nearest_hint_distance(Coord::new(0, 0)), Some(3));
    assert_eq!(k.nearest_hint_distance(Coord::new(3, 4)), Some(1));
}

#[test]
fn hint_resolves_once_all_its_neighbors_are_known() {
    let mut k = map();
    let hint = Coord::new(2, 2);
    k.observe(hint, Cell::HintStrong);
    assert!(k.is_unresolved_hint(hint));
    assert!(k.has_unresolved_hints());

    for n in k.bounds().neighbors(hint).collect::<Vec<_>>() {
        k.observe(n, Cell::Free);
    }
    assert!(!k.is_unresolved_hint(hint));
    assert!(!k.has_unresolved_hints());
}

fn any_cell() -> impl Strategy<Value = Cell> {
    prop::sample::select(Cell::ALL.to_vec())
}

proptest! {
    #[test]
    fn observe_is_idempotent(row in 0i32..5, col in 0i32..5, cell in any_cell()) {
        let at = Coord::new(row, col);
        let mut once = map();
        once.observe(at, cell);
        let mut twice = once.clone();
        twice.observe(at, cell);

        prop_assert_eq!(once.lookup(at), twice.lookup(at));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn knowledge_never_shrinks(obs in prop::collection::vec((0i32..5, 0i32..5, any_cell()), 0..40)) {
        let mut k = map();
        let mut prev = k.known_len();
        for (row, col, cell) in obs {
            k.observe(Coord::new(row, col), cell);
            prop_assert!(k.known_len() >= prev);
            prev = k.known_len();
        }
    }
}
