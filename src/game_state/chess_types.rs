//! Core value types shared by every subsystem.
//!
//! Colors, piece kinds, tagged pieces, board coordinates, castling flags and
//! the move record. All of them are small `Copy` values so boards and search
//! nodes can be duplicated freely.

use std::fmt;

/// Side to move. `Light` plays the white pieces and starts on row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row holding this color's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row delta of a single forward pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }
}

/// A colored piece occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN letter: uppercase for Light, lowercase for Dark.
    pub const fn to_fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::Light => c.to_ascii_uppercase(),
            Color::Dark => c,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Some(Self::new(kind, color))
    }

    pub const fn to_unicode(self) -> char {
        match (self.color, self.kind) {
            (Color::Light, PieceKind::Pawn) => '♙',
            (Color::Light, PieceKind::Knight) => '♘',
            (Color::Light, PieceKind::Bishop) => '♗',
            (Color::Light, PieceKind::Rook) => '♖',
            (Color::Light, PieceKind::Queen) => '♕',
            (Color::Light, PieceKind::King) => '♔',
            (Color::Dark, PieceKind::Pawn) => '♟',
            (Color::Dark, PieceKind::Knight) => '♞',
            (Color::Dark, PieceKind::Bishop) => '♝',
            (Color::Dark, PieceKind::Rook) => '♜',
            (Color::Dark, PieceKind::Queen) => '♛',
            (Color::Dark, PieceKind::King) => '♚',
        }
    }
}

/// Board coordinate. Row 0 is Dark's back rank (rank 8), col 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Builds a square; callers guarantee `row, col < 8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }

    #[inline]
    pub const fn is_center(self) -> bool {
        (self.row == 3 || self.row == 4) && (self.col == 3 || self.col == 4)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Side implied by a king's column delta, if it is a castling delta.
    #[inline]
    pub const fn from_king_delta(d_col: i8) -> Option<Self> {
        match d_col {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    #[inline]
    pub const fn rook_origin_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }
}

/// Permanent "has moved" flags for one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingFlags {
    pub king_moved: bool,
    pub kingside_rook_moved: bool,
    pub queenside_rook_moved: bool,
}

/// Castling eligibility for both colors. Flags only ever go from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    flags: [CastlingFlags; 2],
}

impl CastlingRights {
    /// Rights with every king and rook marked as moved.
    pub const fn none() -> Self {
        let moved = CastlingFlags {
            king_moved: true,
            kingside_rook_moved: true,
            queenside_rook_moved: true,
        };
        Self {
            flags: [moved, moved],
        }
    }

    #[inline]
    pub const fn flags(&self, color: Color) -> CastlingFlags {
        self.flags[color.index()]
    }

    #[inline]
    pub const fn may_castle(&self, color: Color, side: CastleSide) -> bool {
        let flags = self.flags[color.index()];
        if flags.king_moved {
            return false;
        }
        match side {
            CastleSide::Kingside => !flags.kingside_rook_moved,
            CastleSide::Queenside => !flags.queenside_rook_moved,
        }
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.flags[color.index()].king_moved = true;
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        let flags = &mut self.flags[color.index()];
        match side {
            CastleSide::Kingside => flags.kingside_rook_moved = true,
            CastleSide::Queenside => flags.queenside_rook_moved = true,
        }
    }
}

/// A move as recorded in history: the mover, both squares, and what was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Castling is implicit: a king move spanning two columns.
    #[inline]
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.piece.kind != PieceKind::King || self.from.row != self.to.row {
            return None;
        }
        CastleSide::from_king_delta(self.to.col as i8 - self.from.col as i8)
    }
}

/// Coordinate notation, for example `e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
