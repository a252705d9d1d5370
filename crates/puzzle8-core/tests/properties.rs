//! Property tests for the problem-space operations over arbitrary boards.

use proptest::prelude::*;
use puzzle8_core::{Move, Position, ProblemSpace as _, PuzzleState, Tile, Transition};

fn arb_state() -> impl Strategy<Value = PuzzleState> {
    Just(Tile::ALL.to_vec())
        .prop_shuffle()
        .prop_map(|tiles| {
            let tiles: [Tile; 9] = tiles.try_into().unwrap();
            PuzzleState::from_tiles(tiles).unwrap()
        })
}

fn arb_move() -> impl Strategy<Value = Move> {
    prop::sample::select(Move::ALL.to_vec())
}

/// A state with every cell outside `mask` replaced by a wildcard.
fn masked(state: &PuzzleState, mask: u16) -> PuzzleState {
    let cells: Vec<i32> = state
        .cells()
        .into_iter()
        .enumerate()
        .map(|(i, value)| if mask & (1 << i) != 0 { value } else { -1 })
        .collect();
    PuzzleState::from_cells_with_wildcards(&cells).unwrap()
}

proptest! {
    #[test]
    fn test_apply_swaps_blank_with_one_neighbor(state in arb_state(), mv in arb_move()) {
        match state.apply(mv) {
            Transition::Moved(next) => {
                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|&pos| state.tile_at(pos) != next.tile_at(pos))
                    .collect();
                prop_assert_eq!(changed.len(), 2);
                let blank = state.blank_position().unwrap();
                prop_assert!(changed.contains(&blank));
                prop_assert_eq!(blank.neighbor(mv), next.blank_position());
                prop_assert_eq!(next.apply(mv.opposite()), Transition::Moved(state));
            }
            Transition::Rejected(_) => {
                prop_assert!(state.blank_position().unwrap().neighbor(mv).is_none());
            }
        }
    }

    #[test]
    fn test_distance_is_bounded_and_zero_on_self(a in arb_state(), b in arb_state()) {
        prop_assert_eq!(a.distance_to(&a), 0);
        prop_assert!(a.distance_to(&b) <= 9);
        prop_assert_eq!(a.distance_to(&b) == 0, a == b);
        prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_wildcards_never_increase_distance(a in arb_state(), b in arb_state(), mask in 0u16..512) {
        let pattern = masked(&b, mask);
        prop_assert!(a.distance_to(&pattern) <= a.distance_to(&b));
        prop_assert!(b.is_goal(&pattern));
    }

    #[test]
    fn test_heuristic_is_symmetric_and_zero_on_self(a in arb_state(), b in arb_state()) {
        prop_assert_eq!(a.heuristic(&a), 0);
        prop_assert_eq!(a.heuristic(&b), b.heuristic(&a));
        prop_assert_eq!(a.heuristic(&b) == 0, a == b);
    }

    #[test]
    fn test_single_move_changes_heuristic_by_two(state in arb_state(), mv in arb_move()) {
        if let Transition::Moved(next) = state.apply(mv) {
            prop_assert_eq!(state.heuristic(&next), 2);
            prop_assert_eq!(state.distance_to(&next), 2);
            prop_assert_eq!(state.can_reach(&next), Some(true));
        }
    }

    #[test]
    fn test_display_round_trips(state in arb_state(), mask in 0u16..512) {
        let pattern = masked(&state, mask);
        prop_assert_eq!(pattern.to_string().parse::<PuzzleState>(), Ok(pattern));
        prop_assert_eq!(format!("{pattern:#}").parse::<PuzzleState>(), Ok(pattern));
    }
}
