//! Position model: a snapshot of piece placement plus castle-move counters.
//!
//! Positions are value-like: applying a turn produces a new snapshot. The
//! board is a fixed 160-slot array, so cloning is a small memcpy and the
//! search can treat positions as immutable.

use std::fmt;

use crate::board::{self, Square, SQUARE_COUNT};
use crate::movegen;
use crate::types::{Color, Piece, WinCondition};

/// A board snapshot: what stands where, plus how many times each color has
/// moved a piece between the two squares of the opponent's castle.
///
/// The castle counters are consumed (hashed) by the engine; the per-piece
/// cap on them is the game layer's responsibility.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Position {
    squares: [Option<Piece>; SQUARE_COUNT],
    castle_moves: [u8; 2],
}

/// White's starting knights; Black mirrors across the board's midline.
const KNIGHT_STARTS: [Square; 4] = [
    Square::at(2, 5), // C6
    Square::at(3, 6), // D7
    Square::at(8, 6), // I7
    Square::at(9, 5), // J6
];

/// White's starting men; Black mirrors across the board's midline.
const MAN_STARTS: [Square; 10] = [
    Square::at(3, 5), // D6
    Square::at(4, 5), // E6
    Square::at(4, 6), // E7
    Square::at(5, 5), // F6
    Square::at(5, 6), // F7
    Square::at(6, 5), // G6
    Square::at(6, 6), // G7
    Square::at(7, 5), // H6
    Square::at(7, 6), // H7
    Square::at(8, 5), // I6
];

/// Mirror a square across the horizontal midline (rank r -> 17 - r).
fn mirror(sq: Square) -> Square {
    Square::at(sq.file(), board::RANK_COUNT - 1 - sq.rank())
}

impl Position {
    /// An empty board with zeroed castle counters.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [None; SQUARE_COUNT],
            castle_moves: [0; 2],
        }
    }

    /// The standard initial placement.
    #[must_use]
    pub fn initial() -> Self {
        let mut pos = Position::empty();
        for sq in KNIGHT_STARTS {
            pos.place(sq, Piece::knight(Color::White));
            pos.place(mirror(sq), Piece::knight(Color::Black));
        }
        for sq in MAN_STARTS {
            pos.place(sq, Piece::man(Color::White));
            pos.place(mirror(sq), Piece::man(Color::Black));
        }
        pos
    }

    /// The piece standing on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Put `piece` on `sq`, replacing whatever stood there.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Move the piece on `from` to the empty square `to`.
    pub(crate) fn move_piece(&mut self, from: Square, to: Square) {
        self.squares[to.index()] = self.squares[from.index()].take();
    }

    /// All pieces on the board with their squares, in square order.
    pub fn all_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        board::squares()
            .iter()
            .enumerate()
            .filter_map(|(i, &sq)| self.squares[i].map(|p| (sq, p)))
    }

    /// All of `color`'s pieces with their squares, in square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.all_pieces().filter(move |(_, p)| p.color == color)
    }

    /// Number of pieces `color` has on the board.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// How many times `color` has moved a piece between the squares of the
    /// opponent's castle.
    #[inline]
    #[must_use]
    pub fn castle_moves(&self, color: Color) -> u8 {
        self.castle_moves[color.index()]
    }

    /// Overwrite a castle-move counter (game-layer bookkeeping).
    pub fn set_castle_moves(&mut self, color: Color, count: u8) {
        self.castle_moves[color.index()] = count;
    }

    pub(crate) fn bump_castle_moves(&mut self, color: Color) {
        let slot = &mut self.castle_moves[color.index()];
        *slot = slot.saturating_add(1);
    }

    /// Whether `color` has won this position, and how.
    ///
    /// Checks, in order: both enemy-castle squares occupied by own pieces,
    /// every enemy piece captured, or the opponent left without a legal turn.
    /// The latter two require at least two own pieces remaining.
    #[must_use]
    pub fn check_win_condition(&self, color: Color) -> Option<WinCondition> {
        let castle = board::enemy_castle(color);
        let occupied = castle
            .iter()
            .filter(|&&sq| self.piece_at(sq).is_some_and(|p| p.color == color))
            .count();
        if occupied >= 2 {
            return Some(WinCondition::CastleOccupation);
        }

        if self.piece_count(color) < 2 {
            return None;
        }
        if self.piece_count(color.opponent()) == 0 {
            return Some(WinCondition::CaptureAll);
        }
        if !movegen::has_any_turn(self, color.opponent()) {
            return Some(WinCondition::Stalemate);
        }
        None
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

impl fmt::Display for Position {
    /// Render the board as a diagram, rank 16 at the top. `M`/`K` are White
    /// men and knights, `m`/`k` Black's, `.` an empty square, blank cells
    /// lie outside the cross.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..board::RANK_COUNT).rev() {
            write!(f, "{:>2} ", rank + 1)?;
            for file in 0..board::FILE_COUNT {
                match Square::new(file, rank) {
                    None => write!(f, "  ")?,
                    Some(sq) => match self.piece_at(sq) {
                        None => write!(f, ". ")?,
                        Some(p) => {
                            let c = match (p.kind, p.color) {
                                (crate::types::PieceKind::Man, Color::White) => 'M',
                                (crate::types::PieceKind::Knight, Color::White) => 'K',
                                (crate::types::PieceKind::Man, Color::Black) => 'm',
                                (crate::types::PieceKind::Knight, Color::Black) => 'k',
                            };
                            write!(f, "{c} ")?;
                        }
                    },
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   A B C D E F G H I J K L")
    }
}
