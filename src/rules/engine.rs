//! Pure-function rules engine: legal move enumeration for one turn.
//!
//! ## Legality constraints
//!
//! - Barred checkers must all re-enter before any other checker moves.
//!   Re-entry lands on points 1-6 (White) or 19-24 (Black); a die with no
//!   open entry point is forfeited.
//! - Every usable die must be used: only sequences playing the maximal
//!   number of dice are legal, and all equally-maximal sequences are
//!   enumerated. Doubles grant four moves.
//! - A checker may land on an open point (< 2 opposing checkers); landing on
//!   a lone opposing checker hits it to the bar. Two or more opposing
//!   checkers block the point.
//! - Bearing off requires all 15 of the mover's checkers home and none
//!   barred. A die bears off the exact-distance checker, or the farthest
//!   remaining checker when the die overshoots every remaining distance.
//!
//! Different orderings reaching the same final position are deduplicated;
//! the first-enumerated sequence is kept as the representative, so output
//! order is deterministic.
//!
//! An empty result is a valid outcome (no play, turn passes), not an error.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{BoardState, CandidateMove, DiceRoll, MoveSequence, MoveStep, Player, BAR, OFF};

/// Enumerate every legal complete turn for `state` and `dice`.
///
/// Each candidate's resulting state has the turn passed to the opponent.
/// The caller is expected to have validated `state` and `dice`.
#[must_use]
pub fn legal_move_sequences(state: &BoardState, dice: DiceRoll) -> Vec<CandidateMove> {
    let mut plays: Vec<(MoveSequence, BoardState)> = Vec::new();

    if dice.is_double() {
        extend_plays(state, &[dice.die1; 4], &mut plays);
    } else {
        extend_plays(state, &[dice.die1, dice.die2], &mut plays);
        extend_plays(state, &[dice.die2, dice.die1], &mut plays);
    }

    let max_len = plays.iter().map(|(seq, _)| seq.len()).max().unwrap_or(0);
    if max_len == 0 {
        return Vec::new();
    }

    // Keep only maximal-dice-use plays, dedup by resulting position.
    let mut seen: FxHashSet<BoardState> = FxHashSet::default();
    let mut candidates = Vec::new();
    for (sequence, board) in plays {
        if sequence.len() != max_len {
            continue;
        }
        let resulting = board.flipped_turn();
        if seen.insert(resulting.clone()) {
            candidates.push(CandidateMove {
                sequence,
                state: resulting,
            });
        }
    }
    candidates
}

/// Depth-first expansion of one die ordering.
///
/// Records a play whenever the dice run out or the position is stuck; the
/// caller filters for maximal length afterwards.
fn extend_plays(board: &BoardState, dice: &[u8], plays: &mut Vec<(MoveSequence, BoardState)>) {
    expand(board, dice, &MoveSequence::empty(), plays);
}

fn expand(
    board: &BoardState,
    dice: &[u8],
    prefix: &MoveSequence,
    plays: &mut Vec<(MoveSequence, BoardState)>,
) {
    let Some((&die, rest)) = dice.split_first() else {
        plays.push((prefix.clone(), board.clone()));
        return;
    };

    let steps = legal_steps(board, die);
    if steps.is_empty() {
        // Die forfeited; the play ends here. (With distinct dice the
        // reversed ordering covers plays starting with the other die.)
        plays.push((prefix.clone(), board.clone()));
        return;
    }

    for step in steps {
        let next = apply_step(board, step);
        let mut seq = prefix.clone();
        seq.push(step);
        expand(&next, rest, &seq, plays);
    }
}

/// All legal single steps for the mover using one die value.
///
/// Steps are produced in ascending from-point order (bar entry first), which
/// fixes the engine's enumeration order.
fn legal_steps(board: &BoardState, die: u8) -> SmallVec<[MoveStep; 8]> {
    let mover = board.player_to_move;
    let mut steps = SmallVec::new();

    if board.bar(mover) > 0 {
        let entry = mover.entry_point(die);
        if is_open(board, entry, mover) {
            steps.push(MoveStep::new(BAR, entry));
        }
        return steps;
    }

    let can_bear_off = board.all_home(mover);
    let max_distance = farthest_distance(board, mover);

    for from in 1..=24u8 {
        if board.checkers_on(from, mover) == 0 {
            continue;
        }
        let distance = mover.distance(from);

        if die < distance {
            let to = match mover {
                Player::White => from - die,
                Player::Black => from + die,
            };
            if is_open(board, to, mover) {
                steps.push(MoveStep::new(from, to));
            }
        } else if die == distance {
            if can_bear_off {
                steps.push(MoveStep::new(from, OFF));
            }
        } else if can_bear_off && distance == max_distance {
            // Overage: the die exceeds every remaining distance, so the
            // farthest checker comes off.
            steps.push(MoveStep::new(from, OFF));
        }
    }

    steps
}

/// Whether the mover may land on `point` (< 2 opposing checkers).
fn is_open(board: &BoardState, point: u8, mover: Player) -> bool {
    board.checkers_on(point, mover.opponent()) < 2
}

/// Largest remaining pip distance among the mover's board checkers.
fn farthest_distance(board: &BoardState, mover: Player) -> u8 {
    (1..=24u8)
        .filter(|&p| board.checkers_on(p, mover) > 0)
        .map(|p| mover.distance(p))
        .max()
        .unwrap_or(0)
}

/// Apply a single step for the player to move, producing a new state.
///
/// Assumes the step is legal for `board` (as produced by enumeration);
/// handles bar exit, hits, and bearing off. The turn is not passed.
#[must_use]
pub fn apply_step(board: &BoardState, step: MoveStep) -> BoardState {
    let mover = board.player_to_move;
    let mut next = board.clone();

    if step.from == BAR {
        match mover {
            Player::White => next.bar_white -= 1,
            Player::Black => next.bar_black -= 1,
        }
    } else {
        next.points[step.from as usize - 1] -= mover.sign();
    }

    if step.to == OFF {
        match mover {
            Player::White => next.off_white += 1,
            Player::Black => next.off_black += 1,
        }
    } else {
        let idx = step.to as usize - 1;
        if next.points[idx] == -mover.sign() {
            // Hit: the lone opposing checker goes to the bar.
            next.points[idx] = 0;
            match mover {
                Player::White => next.bar_black += 1,
                Player::Black => next.bar_white += 1,
            }
        }
        next.points[idx] += mover.sign();
    }

    next
}

/// Apply a complete turn and pass the turn to the opponent.
#[must_use]
pub fn apply_sequence(state: &BoardState, sequence: &MoveSequence) -> BoardState {
    let mut board = state.clone();
    for &step in sequence.iter() {
        board = apply_step(&board, step);
    }
    board.flipped_turn()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_roll_3_4_uses_both_dice() {
        let state = BoardState::starting();
        let candidates = legal_move_sequences(&state, DiceRoll::new(3, 4));
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert_eq!(c.sequence.len(), 2, "both dice must be used: {}", c.sequence);
            assert_eq!(c.state.player_to_move, Player::Black);
        }
    }

    #[test]
    fn test_double_gives_four_steps() {
        let state = BoardState::starting();
        let candidates = legal_move_sequences(&state, DiceRoll::new(1, 1));
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.sequence.len() == 4));
    }

    #[test]
    fn test_hit_sends_checker_to_bar() {
        // White on 8, lone black blot on 5; a 3 lands on it.
        let mut state = BoardState::empty();
        state.points[8 - 1] = 1;
        state.points[5 - 1] = -1;
        state.off_white = 14;
        state.off_black = 14;
        assert!(state.validate().is_ok());

        let next = apply_step(&state, MoveStep::new(8, 5));
        assert_eq!(next.points[5 - 1], 1);
        assert_eq!(next.bar_black, 1);
        assert_eq!(next.checker_count(Player::Black), 15);
    }

    #[test]
    fn test_blocked_point_is_not_a_step() {
        let mut state = BoardState::empty();
        state.points[8 - 1] = 1;
        state.points[13 - 1] = 1;
        state.points[5 - 1] = -2; // black anchor blocks 8/5
        state.off_white = 13;
        state.points[20 - 1] = -13;
        assert!(state.validate().is_ok());

        let candidates = legal_move_sequences(&state, DiceRoll::new(3, 3));
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert!(c.sequence.iter().all(|s| s.to != 5), "8/5 is blocked: {}", c.sequence);
        }
    }

    #[test]
    fn test_bar_must_enter_first() {
        let mut state = BoardState::starting();
        // Lift a white checker from point 6 onto the bar.
        state.points[6 - 1] -= 1;
        state.bar_white = 1;

        let candidates = legal_move_sequences(&state, DiceRoll::new(2, 5));
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert!(c.sequence.steps()[0].is_entry(), "bar first: {}", c.sequence);
        }
    }

    #[test]
    fn test_blocked_entry_forfeits_die() {
        let mut state = BoardState::empty();
        state.bar_white = 1;
        state.points[13 - 1] = 14;
        // Black holds every white entry point except point 5.
        for p in [1u8, 2, 3, 4, 6] {
            state.points[p as usize - 1] = -3;
        }
        assert!(state.validate().is_ok());

        let candidates = legal_move_sequences(&state, DiceRoll::new(5, 6));
        assert!(!candidates.is_empty());
        for c in &candidates {
            // Die 6 cannot enter (point 6 blocked); die 5 enters on point 5.
            assert_eq!(c.sequence.steps()[0], MoveStep::new(BAR, 5));
        }
    }

    #[test]
    fn test_fully_closed_board_means_no_play() {
        let mut state = BoardState::empty();
        state.bar_white = 1;
        state.points[13 - 1] = 14;
        for p in 1..=6u8 {
            state.points[p as usize - 1] = -2;
        }
        state.points[19 - 1] = -3; // remaining 3 black checkers
        assert!(state.validate().is_ok());

        let candidates = legal_move_sequences(&state, DiceRoll::new(3, 4));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_exact_bear_off() {
        let mut state = BoardState::empty();
        state.points[4 - 1] = 2;
        state.off_white = 13;
        state.points[20 - 1] = -15;

        let candidates = legal_move_sequences(&state, DiceRoll::new(4, 4));
        assert!(!candidates.is_empty());
        // Both checkers come straight off with two of the four 4s; the
        // remaining 4s are forfeited (nothing left to move).
        let best = &candidates[0];
        assert_eq!(best.state.off_white, 15);
    }

    #[test]
    fn test_overage_bear_off_with_either_die() {
        // One white checker on point 3, rest borne off, dice 6-5: either die
        // may bear it off.
        let mut state = BoardState::empty();
        state.points[3 - 1] = 1;
        state.off_white = 14;
        state.points[20 - 1] = -15;

        let candidates = legal_move_sequences(&state, DiceRoll::new(6, 5));
        assert_eq!(candidates.len(), 1, "one distinct resulting position");
        let c = &candidates[0];
        assert_eq!(c.state.off_white, 15);
        assert_eq!(c.sequence.steps()[0], MoveStep::new(3, OFF));
    }

    #[test]
    fn test_no_bear_off_before_all_home() {
        let mut state = BoardState::empty();
        state.points[3 - 1] = 14;
        state.points[13 - 1] = 1; // straggler outside home
        state.points[20 - 1] = -15;

        let candidates = legal_move_sequences(&state, DiceRoll::new(3, 5));
        for c in &candidates {
            assert!(c.sequence.iter().all(|s| !s.is_bear_off()));
        }
    }

    #[test]
    fn test_overage_requires_farthest_checker() {
        // Checkers on 5 and 2: a 6 must take the 5-point checker, never the 2.
        let mut state = BoardState::empty();
        state.points[5 - 1] = 1;
        state.points[2 - 1] = 1;
        state.off_white = 13;
        state.points[20 - 1] = -15;

        let candidates = legal_move_sequences(&state, DiceRoll::new(6, 6));
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert_ne!(c.sequence.steps()[0], MoveStep::new(2, OFF));
        }
    }

    #[test]
    fn test_maximal_use_filters_single_die_plays() {
        // Black anchors leave only the 6 playable: 24/18 works, but every
        // 3 (24/21 first, 18/15 after, 14/11) is blocked. The legal plays
        // are exactly the one-die plays of maximal length.
        let mut state = BoardState::empty();
        state.points[24 - 1] = 1;
        state.points[14 - 1] = 14;
        state.points[21 - 1] = -2; // blocks 24/21 (the 3 first)
        state.points[15 - 1] = -2; // blocks 18/15 after 24/18
        state.points[11 - 1] = -2; // blocks 14/11 (the 3 elsewhere)
        state.points[8 - 1] = -2; //  blocks 14/8 (the 6 elsewhere)
        state.points[19 - 1] = -7;

        // Sanity: both sides still account for 15.
        assert!(state.validate().is_ok());

        let candidates = legal_move_sequences(&state, DiceRoll::new(6, 3));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].sequence.steps(), &[MoveStep::new(24, 18)]);
    }

    #[test]
    fn test_dedup_keeps_one_per_resulting_position() {
        // Playing 2-then-1 or 1-then-2 with the same checker reaches the
        // same position; only one representative survives.
        let mut state = BoardState::empty();
        state.points[24 - 1] = 1;
        state.points[13 - 1] = 14;
        state.points[1 - 1] = -15;

        let candidates = legal_move_sequences(&state, DiceRoll::new(2, 1));
        let positions: FxHashSet<&BoardState> =
            candidates.iter().map(|c| &c.state).collect();
        assert_eq!(positions.len(), candidates.len());
    }

    #[test]
    fn test_black_moves_mirror_white() {
        let state = BoardState::starting().flipped_turn();
        let candidates = legal_move_sequences(&state, DiceRoll::new(3, 4));
        assert!(!candidates.is_empty());
        for c in &candidates {
            for s in c.sequence.iter() {
                assert!(s.to > s.from, "black travels upward: {s}");
            }
        }
    }

    #[test]
    fn test_apply_sequence_matches_stepwise() {
        let state = BoardState::starting();
        let candidates = legal_move_sequences(&state, DiceRoll::new(6, 5));
        for c in &candidates {
            assert_eq!(apply_sequence(&state, &c.sequence), c.state);
        }
    }

    #[test]
    fn test_conservation_after_any_candidate() {
        let state = BoardState::starting();
        for roll in DiceRoll::all() {
            for c in legal_move_sequences(&state, roll) {
                assert_eq!(c.state.checker_count(Player::White), 15);
                assert_eq!(c.state.checker_count(Player::Black), 15);
            }
        }
    }
}
