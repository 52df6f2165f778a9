use hunt_core::{Cell, CostModel};

#[test]
fn cost_follows_safety_ordering() {
    let costs = CostModel::default();
    let strong = costs.cost(Cell::HintStrong);
    let free = costs.cost(Cell::Free);
    let hazard_hint = costs.cost(Cell::HazardHint);

    assert!(strong < free);
    assert!(free <= hazard_hint);
    assert!(hazard_hint < f64::INFINITY);
    assert_eq!(costs.cost(Cell::Hazard), f64::INFINITY);
    assert_eq!(costs.cost(Cell::Obstacle), f64::INFINITY);
}

#[test]
fn default_costs_match_table() {
    let costs = CostModel::default();
    assert_eq!(costs.cost(Cell::Free), 1.0);
    assert_eq!(costs.cost(Cell::HintWeak), 5.0);
    assert_eq!(costs.cost(Cell::HazardHint), 10.0);
    assert_eq!(costs.cost(Cell::Goal), costs.cost(Cell::HintStrong));
}

#[test]
fn only_hazard_and_obstacle_are_impassable() {
    let costs = CostModel::default();
    for cell in Cell::ALL {
        assert_eq!(costs.is_passable(cell), !cell.is_blocking(), "{cell}");
    }
}

#[test]
fn priority_rank_orders_goal_first_and_obstacle_last() {
    let costs = CostModel::default();
    let ranked = [
        Cell::Goal,
        Cell::HintStrong,
        Cell::Free,
        Cell::HazardHint,
        Cell::Hazard,
        Cell::Obstacle,
    ];
    let ranks: Vec<u32> = ranked.iter().map(|c| costs.priority_rank(*c)).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(costs.priority_rank(Cell::HintWeak), costs.priority_rank(Cell::Free));
}
