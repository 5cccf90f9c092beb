//! Turn generation: depth-first enumeration of every legal complete turn.
//!
//! A turn is a sequence of steps: a single plain move, a chain of canters,
//! a chain of jumps, or (knights only) canters followed by jumps. The
//! turn-level rules (mandatory jumps, no-revisit, castle restrictions) are
//! enforced by a single step checker that both the generator and the
//! interactive [`TurnBuilder`] go through.

use std::collections::HashSet;
use std::fmt;

use crate::board::{self, Square, DIRECTIONS};
use crate::position::Position;
use crate::rules::{self, StepError};
use crate::types::{Color, PieceKind};

/// Hard cap on steps within a single turn; reaching it emits the turn as-is.
pub const MAX_TURN_STEPS: usize = 15;

/// A fully-specified legal turn: the visited path, what each step captured,
/// and the position left behind.
#[derive(Clone, Debug, PartialEq)]
pub struct CompleteTurn {
    path: Vec<Square>,
    captures: Vec<Option<Square>>,
    notation: String,
    resulting: Position,
}

impl CompleteTurn {
    /// Square the turn started from.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Square {
        self.path[0]
    }

    /// Square the moving piece ended on.
    #[inline]
    #[must_use]
    pub fn terminal(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    /// Every square the piece visited, origin first.
    #[must_use]
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// Per-step capture record: `Some(square)` for the enemy cleared by that
    /// step, `None` for plain moves and canters.
    #[must_use]
    pub fn step_captures(&self) -> &[Option<Square>] {
        &self.captures
    }

    /// The squares cleared by captures during this turn.
    pub fn captured_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.captures.iter().filter_map(|c| *c)
    }

    /// Number of enemy pieces this turn removes.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.captures.iter().filter(|c| c.is_some()).count()
    }

    /// Whether this turn captures anything.
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captures.iter().any(|c| c.is_some())
    }

    /// Canonical notation: steps joined by `-`, or `x` where a step captured.
    #[must_use]
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// The position after this turn is played.
    #[must_use]
    pub fn resulting_position(&self) -> &Position {
        &self.resulting
    }

    /// Consume the turn, keeping only the resulting position.
    #[must_use]
    pub fn into_position(self) -> Position {
        self.resulting
    }
}

impl fmt::Display for CompleteTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

/// Working state of a turn under construction.
///
/// Holds the position with all steps so far applied (origin vacated,
/// jumped pieces removed) and the legality flags the step rules need.
#[derive(Clone)]
pub(crate) struct TurnState {
    position: Position,
    side: Color,
    kind: PieceKind,
    path: Vec<Square>,
    captures: Vec<Option<Square>>,
    cantered: bool,
    captured_any: bool,
    must_continue: bool,
    finished: bool,
    jump_at_start: bool,
}

impl TurnState {
    fn new(pos: &Position, side: Color, origin: Square, kind: PieceKind, jump_at_start: bool) -> Self {
        TurnState {
            position: pos.clone(),
            side,
            kind,
            path: vec![origin],
            captures: Vec::new(),
            cantered: false,
            captured_any: false,
            must_continue: false,
            finished: false,
            jump_at_start,
        }
    }

    #[inline]
    fn origin(&self) -> Square {
        self.path[0]
    }

    #[inline]
    fn current(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    #[inline]
    fn steps_taken(&self) -> usize {
        self.path.len() - 1
    }

    /// Whether `to` was already landed on this turn, origin excluded.
    fn revisits(&self, to: Square) -> bool {
        self.path[1..].contains(&to)
    }

    /// Validate and apply one step. On failure nothing changes.
    pub(crate) fn try_step(&mut self, to: Square) -> Result<(), StepError> {
        if self.finished || self.steps_taken() >= MAX_TURN_STEPS {
            return Err(StepError::InvalidMove);
        }
        let from = self.current();

        if board::is_one_step(from, to) {
            if self.position.piece_at(to).is_some() {
                return Err(StepError::InvalidMove);
            }
            if self.steps_taken() > 0 {
                return Err(if self.must_continue {
                    StepError::MustContinueJumping
                } else {
                    StepError::PlainMoveOnlyFirst
                });
            }
            if self.jump_at_start {
                return Err(StepError::MustContinueJumping);
            }
            self.position.move_piece(from, to);
            self.path.push(to);
            self.captures.push(None);
            self.finished = true; // a plain move is the whole turn
            return Ok(());
        }

        let Some(mid) = board::midpoint(from, to) else {
            return Err(StepError::InvalidMove);
        };
        if self.position.piece_at(to).is_some() {
            return Err(StepError::InvalidMove);
        }
        let Some(over) = self.position.piece_at(mid) else {
            return Err(StepError::InvalidMove);
        };

        if over.color == self.side {
            // Canter.
            if self.captured_any {
                return Err(StepError::MustContinueJumping);
            }
            if self.jump_at_start {
                return Err(StepError::MustContinueJumping);
            }
            if to == self.origin() || self.revisits(to) {
                return Err(StepError::InvalidMove);
            }
            if board::is_own_castle(self.side, to) {
                return Err(StepError::InvalidMove);
            }
            self.position.move_piece(from, to);
            self.path.push(to);
            self.captures.push(None);
            self.cantered = true;
            if board::is_enemy_castle(self.side, to) {
                self.finished = true;
            }
            Ok(())
        } else {
            // Jump.
            if self.cantered && !self.kind.can_charge() {
                return Err(StepError::KnightsOnlyAfterCanter);
            }
            if self.revisits(to) {
                return Err(StepError::InvalidMove);
            }
            self.position.remove(mid);
            self.position.move_piece(from, to);
            self.path.push(to);
            self.captures.push(Some(mid));
            self.captured_any = true;
            if board::is_enemy_castle(self.side, to) {
                // Entering the opponent's castle ends the turn on the spot.
                self.finished = true;
                self.must_continue = false;
            } else {
                self.must_continue = !self.jump_targets().is_empty();
            }
            Ok(())
        }
    }

    /// Squares a canter from the current square may land on.
    fn canter_targets(&self) -> Vec<Square> {
        let from = self.current();
        let mut targets = Vec::new();
        for &(df, dr) in &DIRECTIONS {
            if let Some((mid, to)) = rules::leap_squares(from, df, dr) {
                if self.position.piece_at(to).is_none()
                    && self.position.piece_at(mid).is_some_and(|p| p.color == self.side)
                    && to != self.origin()
                    && !self.revisits(to)
                    && !board::is_own_castle(self.side, to)
                {
                    targets.push(to);
                }
            }
        }
        targets
    }

    /// Squares a jump from the current square may land on.
    fn jump_targets(&self) -> Vec<Square> {
        let from = self.current();
        let mut targets = Vec::new();
        for &(df, dr) in &DIRECTIONS {
            if let Some((mid, to)) = rules::leap_squares(from, df, dr) {
                if self.position.piece_at(to).is_none()
                    && self.position.piece_at(mid).is_some_and(|p| p.color != self.side)
                    && !self.revisits(to)
                {
                    targets.push(to);
                }
            }
        }
        targets
    }

    /// Whether the turn can legally end where it stands.
    fn can_finish(&self) -> bool {
        self.steps_taken() > 0 && !self.must_continue && self.current() != self.origin()
    }

    /// Snapshot the state into a [`CompleteTurn`].
    fn make_turn(&self) -> CompleteTurn {
        let mut resulting = self.position.clone();
        let castle = board::enemy_castle(self.side);
        let origin = self.origin();
        let terminal = self.current();
        if castle.contains(&origin) && castle.contains(&terminal) && origin != terminal {
            resulting.bump_castle_moves(self.side);
        }
        CompleteTurn {
            path: self.path.clone(),
            captures: self.captures.clone(),
            notation: self.notation(),
            resulting,
        }
    }

    fn notation(&self) -> String {
        let mut out = self.path[0].to_string();
        for (i, sq) in self.path[1..].iter().enumerate() {
            out.push(if self.captures[i].is_some() { 'x' } else { '-' });
            out.push_str(&sq.to_string());
        }
        out
    }
}

/// Enumerate every distinct legal turn for `side`, deduplicated by notation.
///
/// When any jump is available the mandatory-capture rule restricts output to
/// jump-first turns; knight charges that would defer the capture are not
/// considered in that case.
#[must_use]
pub fn generate_turns(pos: &Position, side: Color) -> Vec<CompleteTurn> {
    let mut turns = Vec::new();
    let mut seen = HashSet::new();
    let must_jump = rules::any_jump_available(pos, side);

    for (origin, piece) in pos.pieces(side) {
        let base = TurnState::new(pos, side, origin, piece.kind, must_jump);

        for to in base.jump_targets() {
            let mut state = base.clone();
            if state.try_step(to).is_ok() {
                explore(state, &mut turns, &mut seen);
            }
        }

        if must_jump {
            continue;
        }

        for &(df, dr) in &DIRECTIONS {
            if let Some(to) = origin.offset(df, dr) {
                let mut state = base.clone();
                if state.try_step(to).is_ok() {
                    explore(state, &mut turns, &mut seen);
                }
            }
        }

        for to in base.canter_targets() {
            let mut state = base.clone();
            if state.try_step(to).is_ok() {
                explore(state, &mut turns, &mut seen);
            }
        }
    }
    turns
}

/// Recurse over continuations of a state that has taken at least one step.
fn explore(state: TurnState, turns: &mut Vec<CompleteTurn>, seen: &mut HashSet<String>) {
    if state.finished {
        emit(&state, turns, seen);
        return;
    }

    if state.captured_any {
        // Jump chain: continuation is mandatory while a jump exists.
        if state.must_continue && state.steps_taken() < MAX_TURN_STEPS {
            for to in state.jump_targets() {
                let mut next = state.clone();
                if next.try_step(to).is_ok() {
                    explore(next, turns, seen);
                }
            }
        } else {
            emit(&state, turns, seen);
        }
        return;
    }

    // Canter chain: the piece may stop here, canter on, or (knights only)
    // switch to jumping.
    emit(&state, turns, seen);
    if state.steps_taken() >= MAX_TURN_STEPS {
        return;
    }
    for to in state.canter_targets() {
        let mut next = state.clone();
        if next.try_step(to).is_ok() {
            explore(next, turns, seen);
        }
    }
    if state.kind.can_charge() {
        for to in state.jump_targets() {
            let mut next = state.clone();
            if next.try_step(to).is_ok() {
                explore(next, turns, seen);
            }
        }
    }
}

fn emit(state: &TurnState, turns: &mut Vec<CompleteTurn>, seen: &mut HashSet<String>) {
    if !state.can_finish() && !state.finished && state.steps_taken() < MAX_TURN_STEPS {
        return;
    }
    if state.current() == state.origin() {
        // The origin may never be the terminal square.
        return;
    }
    let turn = state.make_turn();
    if seen.insert(turn.notation.clone()) {
        turns.push(turn);
    }
}

/// The capture turns only, for quiescence.
#[must_use]
pub fn generate_capture_turns(pos: &Position, side: Color) -> Vec<CompleteTurn> {
    let mut turns = generate_turns(pos, side);
    turns.retain(CompleteTurn::is_capture);
    turns
}

/// Whether `side` has at least one legal turn.
///
/// Cheap early-out on the first available plain move; falls back to full
/// generation only in cramped or capture-bound positions.
#[must_use]
pub fn has_any_turn(pos: &Position, side: Color) -> bool {
    if rules::any_jump_available(pos, side) {
        return !generate_turns(pos, side).is_empty();
    }
    for (sq, _) in pos.pieces(side) {
        for &(df, dr) in &DIRECTIONS {
            if let Some(to) = sq.offset(df, dr) {
                if pos.piece_at(to).is_none() {
                    return true;
                }
            }
        }
    }
    !generate_turns(pos, side).is_empty()
}

/// Number of distinct first steps (plain, canter, or jump) available to
/// `side`, ignoring the mandatory-capture filter. Feeds the mobility term.
#[must_use]
pub fn count_initial_moves(pos: &Position, side: Color) -> usize {
    let mut count = 0;
    for (sq, _) in pos.pieces(side) {
        for &(df, dr) in &DIRECTIONS {
            let Some(one) = sq.offset(df, dr) else { continue };
            if pos.piece_at(one).is_none() {
                count += 1;
                continue;
            }
            if let Some(two) = sq.offset(2 * df, 2 * dr) {
                if pos.piece_at(two).is_none() {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Sort turns for the search: more captures first, then castle entries,
/// then forward progress in the side's advancing direction. Stable.
pub fn order_for_search(turns: &mut [CompleteTurn], side: Color) {
    turns.sort_by_key(|t| {
        let progress = (t.terminal().rank() as i32 - t.origin().rank() as i32)
            * crate::types::Color::forward(side) as i32;
        std::cmp::Reverse((
            t.capture_count() as i32,
            i32::from(board::is_enemy_castle(side, t.terminal())),
            progress,
        ))
    });
}

/// Incremental turn construction for interactive callers.
///
/// Applies the same step checker the generator uses; every rejected step
/// leaves the builder untouched and reports the reason.
pub struct TurnBuilder {
    state: TurnState,
}

impl TurnBuilder {
    /// Start a turn for the piece of `side` standing on `origin`.
    pub fn new(pos: &Position, side: Color, origin: Square) -> Result<Self, StepError> {
        match pos.piece_at(origin) {
            Some(piece) if piece.color == side => Ok(TurnBuilder {
                state: TurnState::new(
                    pos,
                    side,
                    origin,
                    piece.kind,
                    rules::any_jump_available(pos, side),
                ),
            }),
            _ => Err(StepError::InvalidMove),
        }
    }

    /// Attempt one more step. No state changes on error.
    pub fn step(&mut self, to: Square) -> Result<(), StepError> {
        self.state.try_step(to)
    }

    /// The square the moving piece currently stands on.
    #[must_use]
    pub fn current_square(&self) -> Square {
        self.state.current()
    }

    /// True while the last jump obliges another.
    #[must_use]
    pub fn must_continue(&self) -> bool {
        self.state.must_continue
    }

    /// Whether `finish` would currently succeed.
    #[must_use]
    pub fn can_finish(&self) -> bool {
        self.state.finished || self.state.can_finish()
    }

    /// The working position with all steps so far applied.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.state.position
    }

    /// Complete the turn.
    pub fn finish(self) -> Result<CompleteTurn, StepError> {
        if self.state.steps_taken() == 0 || self.state.current() == self.state.origin() {
            return Err(StepError::InvalidMove);
        }
        if self.state.must_continue {
            return Err(StepError::MustContinueJumping);
        }
        Ok(self.state.make_turn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn sq(text: &str) -> Square {
        text.parse().unwrap()
    }

    fn notations(turns: &[CompleteTurn]) -> Vec<&str> {
        turns.iter().map(|t| t.notation()).collect()
    }

    #[test]
    fn lone_man_has_eight_plain_moves() {
        let mut pos = Position::empty();
        pos.place(sq("F8"), Piece::man(Color::White));
        let turns = generate_turns(&pos, Color::White);
        assert_eq!(turns.len(), 8);
        assert!(notations(&turns).contains(&"F8-F9"));
        assert!(turns.iter().all(|t| !t.is_capture()));
    }

    #[test]
    fn mandatory_jump_suppresses_quiet_turns() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("F7"), Piece::man(Color::Black));
        let turns = generate_turns(&pos, Color::White);
        assert!(!turns.is_empty());
        assert!(turns.iter().all(CompleteTurn::is_capture));
        assert!(notations(&turns).contains(&"E6xG8"));
    }

    #[test]
    fn jump_chain_continues_while_captures_remain() {
        let mut pos = Position::empty();
        pos.place(sq("H4"), Piece::man(Color::White));
        pos.place(sq("I4"), Piece::man(Color::Black));
        pos.place(sq("K5"), Piece::man(Color::Black));
        let turns = generate_turns(&pos, Color::White);
        // H4xJ4 must continue over K5 to L6; the short form is illegal.
        assert_eq!(notations(&turns), vec!["H4xJ4xL6"]);
        let turn = &turns[0];
        assert_eq!(turn.capture_count(), 2);
        assert_eq!(turn.resulting_position().piece_count(Color::Black), 0);
        assert_eq!(turn.resulting_position().piece_at(sq("L6")), Some(Piece::man(Color::White)));
    }

    #[test]
    fn canter_chain_emits_every_stop() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("D7"), Piece::man(Color::White));
        pos.place(sq("B8"), Piece::man(Color::White));
        pos.place(sq("L13"), Piece::man(Color::Black));
        let turns = generate_turns(&pos, Color::White);
        let names = notations(&turns);
        assert!(names.contains(&"E6-C8"), "stop after the first canter: {names:?}");
        assert!(names.contains(&"E6-C8-A8"), "full canter chain: {names:?}");
    }

    #[test]
    fn men_may_not_jump_after_cantering() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("E7"), Piece::man(Color::White));
        pos.place(sq("E9"), Piece::man(Color::Black));
        // No jump is available from E6 itself, so the man may canter to E8;
        // from there a jump over E9 exists but men cannot charge.
        let turns = generate_turns(&pos, Color::White);
        assert!(notations(&turns).contains(&"E6-E8"));
        assert!(!notations(&turns).iter().any(|n| n.contains('x')));
    }

    #[test]
    fn knights_charge_canter_then_jump() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::knight(Color::White));
        pos.place(sq("E7"), Piece::man(Color::White));
        pos.place(sq("E9"), Piece::man(Color::Black));
        let turns = generate_turns(&pos, Color::White);
        assert!(notations(&turns).contains(&"E6-E8xE10"), "{:?}", notations(&turns));
    }

    #[test]
    fn landing_in_the_enemy_castle_ends_the_turn() {
        let mut pos = Position::empty();
        pos.place(sq("F14"), Piece::knight(Color::White));
        pos.place(sq("F15"), Piece::man(Color::Black));
        // From F16 a jump over G15 to H14 would be legal, but the castle
        // landing ends the turn first.
        pos.place(sq("G15"), Piece::man(Color::Black));
        let turns = generate_turns(&pos, Color::White);
        for turn in turns.iter().filter(|t| t.terminal() == sq("F16")) {
            assert_eq!(turn.notation(), "F14xF16");
            assert_eq!(turn.capture_count(), 1);
        }
        assert!(notations(&turns).contains(&"F14xF16"));
    }

    #[test]
    fn canters_may_not_enter_the_own_castle() {
        let mut pos = Position::empty();
        pos.place(sq("F3"), Piece::man(Color::White));
        pos.place(sq("F2"), Piece::man(Color::White));
        pos.place(sq("L13"), Piece::man(Color::Black));
        let turns = generate_turns(&pos, Color::White);
        // F3 over F2 would land on F1, a White castle square.
        assert!(!notations(&turns).contains(&"F3-F1"));
    }

    #[test]
    fn no_duplicate_notations() {
        let pos = Position::initial();
        let turns = generate_turns(&pos, Color::White);
        let mut names: Vec<_> = turns.iter().map(|t| t.notation().to_string()).collect();
        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn initial_position_has_turns_for_both_sides() {
        let pos = Position::initial();
        assert!(!generate_turns(&pos, Color::White).is_empty());
        assert!(!generate_turns(&pos, Color::Black).is_empty());
        assert!(has_any_turn(&pos, Color::White));
    }

    #[test]
    fn ordering_prefers_bigger_captures_then_progress() {
        // Two independent White jumpers: D4 takes one piece, H4 chains two.
        let mut pos = Position::empty();
        pos.place(sq("D4"), Piece::man(Color::White));
        pos.place(sq("E5"), Piece::man(Color::Black));
        pos.place(sq("H4"), Piece::man(Color::White));
        pos.place(sq("I4"), Piece::man(Color::Black));
        pos.place(sq("K5"), Piece::man(Color::Black));
        let mut turns = generate_turns(&pos, Color::White);
        order_for_search(&mut turns, Color::White);
        assert_eq!(turns[0].notation(), "H4xJ4xL6");
        assert_eq!(turns[0].capture_count(), 2);

        let mut quiet = Position::empty();
        quiet.place(sq("E6"), Piece::man(Color::White));
        quiet.place(sq("L13"), Piece::man(Color::Black));
        let mut turns = generate_turns(&quiet, Color::White);
        order_for_search(&mut turns, Color::White);
        // Best forward progress for White is rank-increasing.
        assert!(turns[0].terminal().rank() > turns[0].origin().rank());
    }

    #[test]
    fn builder_mirrors_generator_legality() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("F7"), Piece::man(Color::Black));

        // Plain move refused while a jump is available.
        let mut builder = TurnBuilder::new(&pos, Color::White, sq("E6")).unwrap();
        assert_eq!(builder.step(sq("D5")), Err(StepError::MustContinueJumping));
        assert_eq!(builder.step(sq("G8")), Ok(()));
        assert!(builder.can_finish());
        let turn = builder.finish().unwrap();
        assert_eq!(turn.notation(), "E6xG8");
    }

    #[test]
    fn builder_rejects_plain_moves_after_the_first_step() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("E7"), Piece::man(Color::White));
        pos.place(sq("L13"), Piece::man(Color::Black));
        let mut builder = TurnBuilder::new(&pos, Color::White, sq("E6")).unwrap();
        assert_eq!(builder.step(sq("E8")), Ok(())); // canter
        assert_eq!(builder.step(sq("E9")), Err(StepError::PlainMoveOnlyFirst));
    }

    #[test]
    fn builder_enforces_mandatory_continuation() {
        let mut pos = Position::empty();
        pos.place(sq("H4"), Piece::man(Color::White));
        pos.place(sq("I4"), Piece::man(Color::Black));
        pos.place(sq("K5"), Piece::man(Color::Black));
        let mut builder = TurnBuilder::new(&pos, Color::White, sq("H4")).unwrap();
        assert_eq!(builder.step(sq("J4")), Ok(()));
        assert!(builder.must_continue());
        assert!(matches!(
            builder.finish(),
            Err(StepError::MustContinueJumping)
        ));
    }

    #[test]
    fn builder_rejects_a_mans_charge() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::White));
        pos.place(sq("E7"), Piece::man(Color::White));
        pos.place(sq("E9"), Piece::man(Color::Black));
        let mut builder = TurnBuilder::new(&pos, Color::White, sq("E6")).unwrap();
        assert_eq!(builder.step(sq("E8")), Ok(()));
        assert_eq!(builder.step(sq("E10")), Err(StepError::KnightsOnlyAfterCanter));
    }

    #[test]
    fn builder_refuses_foreign_or_empty_origins() {
        let mut pos = Position::empty();
        pos.place(sq("E6"), Piece::man(Color::Black));
        assert!(TurnBuilder::new(&pos, Color::White, sq("E6")).is_err());
        assert!(TurnBuilder::new(&pos, Color::White, sq("A4")).is_err());
    }

    #[test]
    fn applying_a_turn_preserves_piece_accounting() {
        let pos = Position::initial();
        for turn in generate_turns(&pos, Color::White) {
            let after = turn.resulting_position();
            assert_eq!(after.piece_count(Color::White), pos.piece_count(Color::White));
            assert_eq!(
                after.piece_count(Color::Black),
                pos.piece_count(Color::Black) - turn.capture_count()
            );
            assert!(after.piece_at(turn.origin()).is_none() || turn.origin() == turn.terminal());
            assert!(pos.piece_at(turn.terminal()).is_none());
        }
    }
}
