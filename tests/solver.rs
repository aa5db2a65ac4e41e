//! End-to-end solver behavior on the shipped test puzzle
//!
//! The test tile set admits the solution tile 1 at 1-1, tile 3 at 2-1,
//! tile 4 at 3-1 and tile 2 at 4-1, all unrotated, which pins down the full
//! event traces of both backtracking variants.

mod common;

use common::load_test_puzzle;
use tetratile::puzzle::{Tile, TilePool};
use tetratile::solver::{
    BruteForceSolver, ExhaustiveSeed, NoMatchingOptions, NoMatchingSolver, OnlyValidSolver,
    PositionSelection, PrunedSeed, PuzzleChange, RotationSelection, Solver, TilePlacement,
    TileSelection,
};

fn place(position: &str, tile: u32, segments: &str) -> PuzzleChange {
    PuzzleChange::Place {
        placement: TilePlacement {
            position: position.to_string(),
            tile,
            rotations: 0,
            segments: segments.to_string(),
        },
    }
}

const TILE_1: &str = "100011001110";
const TILE_2: &str = "010010110111";
const TILE_3: &str = "000111011010";
const TILE_4: &str = "001000110101";

#[test]
fn test_brute_force_trace_is_deterministic() {
    let (tetrahedron, pool) = load_test_puzzle();
    let mut solver = BruteForceSolver::new(tetrahedron, pool, ExhaustiveSeed).unwrap();

    let expected = vec![
        place("1-1", 1, TILE_1),
        place("2-1", 2, TILE_2),
        PuzzleChange::Rotate {
            position: "2-1".to_string(),
            rotations: 1,
        },
        PuzzleChange::Rotate {
            position: "2-1".to_string(),
            rotations: 1,
        },
        PuzzleChange::Remove {
            placement: TilePlacement {
                position: "2-1".to_string(),
                tile: 2,
                rotations: 2,
                segments: TILE_2.to_string(),
            },
        },
        place("2-1", 3, TILE_3),
        place("3-1", 4, TILE_4),
        place("4-1", 2, TILE_2),
        PuzzleChange::Solved,
    ];

    let trace: Vec<PuzzleChange> = (0..expected.len())
        .map(|_| solver.next_state().unwrap())
        .collect();
    assert_eq!(trace, expected);
    assert_eq!(solver.steps(), 9);

    assert!(solver.tetrahedron().is_solved());
    assert_eq!(solver.tetrahedron().count_tile_sides_matching(), 12);
}

#[test]
fn test_brute_force_repeats_identically() {
    let run = || {
        let (tetrahedron, pool) = load_test_puzzle();
        let mut solver = BruteForceSolver::new(tetrahedron, pool, ExhaustiveSeed).unwrap();
        let mut trace = Vec::new();
        loop {
            let change = solver.next_state().unwrap();
            let terminal = change.is_terminal();
            trace.push(change);
            if terminal {
                return trace;
            }
        }
    };
    assert_eq!(run(), run());
}

#[test]
fn test_only_valid_prunes_to_a_straight_run() {
    let (tetrahedron, pool) = load_test_puzzle();
    let mut solver = OnlyValidSolver::new(tetrahedron, pool, PrunedSeed).unwrap();

    let expected = vec![
        place("1-1", 1, TILE_1),
        place("2-1", 3, TILE_3),
        place("3-1", 4, TILE_4),
        place("4-1", 2, TILE_2),
        PuzzleChange::Solved,
    ];
    let trace: Vec<PuzzleChange> = (0..expected.len())
        .map(|_| solver.next_state().unwrap())
        .collect();
    assert_eq!(trace, expected);
    assert_eq!(solver.steps(), 5);
}

#[test]
fn test_only_valid_matches_brute_force_with_fewer_steps() {
    let solve = |brute: bool| {
        let (tetrahedron, pool) = load_test_puzzle();
        let mut solver: Box<dyn Solver> = if brute {
            Box::new(BruteForceSolver::new(tetrahedron, pool, ExhaustiveSeed).unwrap())
        } else {
            Box::new(OnlyValidSolver::new(tetrahedron, pool, PrunedSeed).unwrap())
        };
        while !solver.next_state().unwrap().is_terminal() {}
        let steps = solver.steps();
        let finals = solver.final_state();
        (steps, finals)
    };

    let (brute_steps, brute_finals) = solve(true);
    let (pruned_steps, pruned_finals) = solve(false);

    assert_eq!(brute_finals, pruned_finals, "same solved configuration");
    assert!(
        pruned_steps < brute_steps,
        "pruning must shrink the search: {pruned_steps} vs {brute_steps}"
    );
}

#[test]
fn test_solved_is_sticky_until_forced() {
    let (tetrahedron, pool) = load_test_puzzle();
    let mut solver = BruteForceSolver::new(tetrahedron, pool, ExhaustiveSeed).unwrap();

    while !solver.next_state().unwrap().is_terminal() {}
    assert_eq!(solver.next_state().unwrap(), PuzzleChange::Solved);
    assert_eq!(solver.next_state().unwrap(), PuzzleChange::Solved);

    // Forcing resumes the search in place of the frozen result
    let change = solver.force_next_state().unwrap();
    assert!(
        matches!(change, PuzzleChange::Rotate { .. } | PuzzleChange::Remove { .. }),
        "expected the search to move on, got {change:?}"
    );
}

#[test]
fn test_search_exhausts_to_completed_after_solutions() {
    let (tetrahedron, pool) = load_test_puzzle();
    let mut solver = BruteForceSolver::new(tetrahedron, pool, ExhaustiveSeed).unwrap();

    let mut solutions = 0;
    let mut guard = 0;
    loop {
        let change = solver.next_state().unwrap();
        match change {
            PuzzleChange::Solved => {
                solutions += 1;
                solver.force_next_state().unwrap();
            }
            PuzzleChange::Completed => break,
            _ => {}
        }
        guard += 1;
        assert!(guard < 100_000, "search failed to terminate");
    }

    assert!(solutions >= 1);
    assert_eq!(solver.next_state().unwrap(), PuzzleChange::Completed);
    assert_eq!(solver.force_next_state().unwrap(), PuzzleChange::Completed);
}

#[test]
fn test_unsolvable_set_reports_completed() {
    let (tetrahedron, _) = load_test_puzzle();
    // All-zero edges can never present the 1-bearing reversals required
    // by tile 1's neighbors
    let tiles = vec![
        Tile::new(1, "1000", "1100", "1110").unwrap(),
        Tile::new(2, "0000", "0000", "0000").unwrap(),
        Tile::new(3, "0000", "0000", "0000").unwrap(),
        Tile::new(4, "0000", "0000", "0000").unwrap(),
    ];
    let pool = TilePool::new(tiles).unwrap();
    let mut solver = BruteForceSolver::new(tetrahedron, pool, ExhaustiveSeed).unwrap();

    let mut guard = 0;
    loop {
        let change = solver.next_state().unwrap();
        if change == PuzzleChange::Completed {
            break;
        }
        assert_ne!(change, PuzzleChange::Solved);
        guard += 1;
        assert!(guard < 100_000, "search failed to terminate");
    }
    assert!(!solver.tetrahedron().is_solved());
}

#[test]
fn test_solver_requires_one_tile_per_position() {
    let (tetrahedron, mut pool) = load_test_puzzle();
    pool.draw().unwrap();
    assert!(BruteForceSolver::new(tetrahedron, pool, ExhaustiveSeed).is_err());
}

#[test]
fn test_no_matching_fills_without_checking() {
    let (tetrahedron, pool) = load_test_puzzle();
    let mut solver =
        NoMatchingSolver::new(tetrahedron, pool, NoMatchingOptions::default()).unwrap();

    let mut places = 0;
    loop {
        match solver.next_state().unwrap() {
            PuzzleChange::Place { .. } => places += 1,
            PuzzleChange::Completed => break,
            other => panic!("unexpected event {other:?}"),
        }
    }

    assert_eq!(places, 4);
    assert_eq!(solver.steps(), 5);
    assert!(solver.tetrahedron().empty_positions().is_empty());
    // Sequential placement of tiles 1-4 in listing order is not a solution
    assert!(!solver.tetrahedron().is_solved());
    assert_eq!(solver.next_state().unwrap(), PuzzleChange::Completed);
}

#[test]
fn test_no_matching_random_policies_are_reproducible() {
    let run = |seed| {
        let (tetrahedron, pool) = load_test_puzzle();
        let options = NoMatchingOptions {
            position_selection: PositionSelection::Random,
            tile_selection: TileSelection::Random,
            rotation_selection: RotationSelection::Random,
            seed,
        };
        let mut solver = NoMatchingSolver::new(tetrahedron, pool, options).unwrap();
        let mut trace = Vec::new();
        loop {
            let change = solver.next_state().unwrap();
            if change == PuzzleChange::Completed {
                return trace;
            }
            trace.push(change);
        }
    };

    assert_eq!(run(7), run(7), "same seed, same filling");
    assert_eq!(run(7).len(), 4);
}

#[test]
fn test_initial_state_snapshots_every_position() {
    let (tetrahedron, pool) = load_test_puzzle();
    let mut solver = BruteForceSolver::new(tetrahedron, pool, ExhaustiveSeed).unwrap();

    let initial = solver.initial_state();
    assert_eq!(initial.len(), 4);
    assert!(initial
        .iter()
        .all(|change| matches!(change, PuzzleChange::Empty { .. })));

    solver.next_state().unwrap();
    let after_place = solver.initial_state();
    assert!(matches!(&after_place[0], PuzzleChange::Start { placement } if placement.tile == 1));
}

#[test]
fn test_final_state_reports_solution_snapshots() {
    let (tetrahedron, pool) = load_test_puzzle();
    let mut solver = OnlyValidSolver::new(tetrahedron, pool, PrunedSeed).unwrap();
    while !solver.next_state().unwrap().is_terminal() {}

    let finals = solver.final_state();
    assert_eq!(finals.len(), 4);
    let tiles: Vec<u32> = finals
        .iter()
        .map(|change| match change {
            PuzzleChange::Final { placement } => placement.tile,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(tiles, vec![1, 3, 4, 2]);
}
