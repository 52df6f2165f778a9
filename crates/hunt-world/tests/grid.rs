use hunt_core::{Cell, Coord, MoveOutcome, SplitMix64, WorldMut, WorldView};
use hunt_world::{CountRange, GridWorld, MixedHintPolicy, WorldConfig, WorldError};
use proptest::prelude::*;

const SMALL: &str = "\
..P
.X+
.+T";

#[test]
fn from_ascii_locates_goal_and_keeps_cells() {
    let world = GridWorld::from_ascii(SMALL, Coord::new(0, 0)).expect("valid map");
    assert_eq!(world.goal(), Coord::new(2, 2));
    assert_eq!(world.bounds().rows, 3);
    assert_eq!(world.bounds().cols, 3);
    assert_eq!(world.cell(Coord::new(0, 2)), Some(Cell::Hazard));
    assert_eq!(world.cell(Coord::new(1, 1)), Some(Cell::Obstacle));
    assert_eq!(world.cell(Coord::new(3, 0)), None);
    assert!(world.occupied().contains(&Coord::new(0, 0)));
}

#[test]
fn to_ascii_roundtrips_through_from_ascii() {
    let world = GridWorld::from_ascii(SMALL, Coord::new(0, 0)).expect("valid map");
    let again = GridWorld::from_ascii(&world.to_ascii(), world.start()).expect("reparse");
    assert_eq!(world, again);
}

#[test]
fn from_ascii_rejects_malformed_maps() {
    assert_eq!(
        GridWorld::from_ascii("", Coord::new(0, 0)),
        Err(WorldError::EmptyMap)
    );
    assert_eq!(
        GridWorld::from_ascii("..\n...\nT.", Coord::new(0, 0)),
        Err(WorldError::RaggedRows {
            row: 1,
            expected: 2,
            found: 3
        })
    );
    assert_eq!(
        GridWorld::from_ascii(".?\n.T", Coord::new(0, 0)),
        Err(WorldError::UnknownGlyph {
            glyph: '?',
            row: 0,
            col: 1
        })
    );
    assert_eq!(
        GridWorld::from_ascii("..\n..", Coord::new(0, 0)),
        Err(WorldError::MissingGoal)
    );
    assert_eq!(
        GridWorld::from_ascii("T.\n.T", Coord::new(0, 1)),
        Err(WorldError::MultipleGoals(2))
    );
    assert_eq!(
        GridWorld::from_ascii("..\n.T", Coord::new(2, 0)),
        Err(WorldError::StartOutOfBounds(Coord::new(2, 0)))
    );
    assert!(matches!(
        GridWorld::from_ascii("P.\n.T", Coord::new(0, 0)),
        Err(WorldError::StartBlocked { cell: Cell::Hazard, .. })
    ));
}

#[test]
fn percept_reports_in_bounds_orthogonal_neighbors_only() {
    let world = GridWorld::from_ascii(SMALL, Coord::new(0, 0)).expect("valid map");

    let corner = world.percept(Coord::new(0, 0));
    assert_eq!(corner.len(), 2);
    assert_eq!(corner.get(Coord::new(0, 1)), Some(Cell::Free));
    assert_eq!(corner.get(Coord::new(1, 0)), Some(Cell::Free));

    let center = world.percept(Coord::new(1, 1));
    assert_eq!(center.len(), 4);
    assert_eq!(center.get(Coord::new(1, 2)), Some(Cell::HintStrong));
    assert_eq!(center.get(Coord::new(0, 0)), None);
}

#[test]
fn commit_move_follows_cell_rules() {
    let mut world = GridWorld::from_ascii(SMALL, Coord::new(0, 0)).expect("valid map");

    assert_eq!(world.commit_move(Coord::new(0, 1)), MoveOutcome::Ok);
    assert_eq!(world.commit_move(Coord::new(0, 2)), MoveOutcome::HazardDeath);
    assert_eq!(world.commit_move(Coord::new(1, 1)), MoveOutcome::Invalid);
    assert_eq!(world.commit_move(Coord::new(-1, 0)), MoveOutcome::Invalid);
    assert_eq!(world.commit_move(Coord::new(2, 2)), MoveOutcome::GoalReached);

    let occupied: Vec<_> = world.occupied().iter().copied().collect();
    assert_eq!(
        occupied,
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(2, 2)]
    );
}

#[test]
fn generation_rejects_degenerate_configs() {
    let mut rng = SplitMix64::new(1);
    let tiny = WorldConfig {
        rows: 1,
        cols: 5,
        ..WorldConfig::default()
    };
    assert_eq!(
        GridWorld::generate(&tiny, &mut rng),
        Err(WorldError::InvalidDimensions { rows: 1, cols: 5 })
    );

    let outside = WorldConfig {
        start: Coord::new(10, 0),
        ..WorldConfig::default()
    };
    assert_eq!(
        GridWorld::generate(&outside, &mut rng),
        Err(WorldError::StartOutOfBounds(Coord::new(10, 0)))
    );

    let crowded = WorldConfig {
        rows: 2,
        cols: 2,
        hazards: CountRange::exactly(0),
        obstacles: CountRange::exactly(3),
        max_placement_attempts: 50,
        ..WorldConfig::default()
    };
    assert!(matches!(
        GridWorld::generate(&crowded, &mut rng),
        Err(WorldError::PlacementExhausted { what: "obstacle", .. })
    ));
}

#[test]
fn generation_is_reproducible_from_seed() {
    let config = WorldConfig::default();
    let a = GridWorld::generate(&config, &mut SplitMix64::new(2024)).expect("world");
    let b = GridWorld::generate(&config, &mut SplitMix64::new(2024)).expect("world");
    assert_eq!(a, b);
}

fn check_generated(world: &GridWorld, config: &WorldConfig) -> Result<(), TestCaseError> {
    let goal = world.goal();
    prop_assert_eq!(world.count(Cell::Goal), 1);
    prop_assert_eq!(world.cell(goal), Some(Cell::Goal));
    prop_assert!(goal.row >= 1);

    let start = world.cell(world.start()).expect("start in bounds");
    prop_assert!(!start.is_blocking());

    let hazards = world.count(Cell::Hazard) as u32;
    prop_assert!(hazards >= config.hazards.min && hazards <= config.hazards.max);
    let obstacles = world.count(Cell::Obstacle) as u32;
    prop_assert!(obstacles >= config.obstacles.min && obstacles <= config.obstacles.max);

    for at in goal.ring() {
        if let Some(cell) = world.cell(at) {
            match config.mixed_hints {
                MixedHintPolicy::Downgrade => {
                    prop_assert!(matches!(cell, Cell::HintStrong | Cell::HazardHint))
                }
                MixedHintPolicy::Preserve => {
                    prop_assert!(matches!(cell, Cell::HintStrong | Cell::HintWeak))
                }
            }
        }
    }

    for at in world.bounds().iter() {
        match world.cell(at) {
            Some(Cell::Hazard) => {
                prop_assert!(at.row >= 1 && at.col >= 1);
                for n in at.ring() {
                    prop_assert_ne!(world.cell(n), Some(Cell::Free));
                }
            }
            Some(Cell::Obstacle) => prop_assert!(at.col >= 1),
            Some(Cell::HintWeak) => {
                prop_assert_eq!(config.mixed_hints, MixedHintPolicy::Preserve)
            }
            _ => {}
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn generated_worlds_hold_placement_invariants(seed in any::<u64>(), preserve in any::<bool>()) {
        let config = WorldConfig {
            mixed_hints: if preserve {
                MixedHintPolicy::Preserve
            } else {
                MixedHintPolicy::Downgrade
            },
            ..WorldConfig::default()
        };
        let world = GridWorld::generate(&config, &mut SplitMix64::new(seed)).expect("world");
        check_generated(&world, &config)?;
    }
}
