// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("square index out of range: {0}")]
    OutOfRange(u8),
    #[error("malformed square: `{0}`")]
    Malformed(String),
    #[error(transparent)]
    File(#[from] FileParseError),
    #[error(transparent)]
    Rank(#[from] RankParseError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankParseError {
    #[error("rank index out of range: {0}")]
    OutOfRange(u8),
    #[error("invalid rank: {0}")]
    InvalidChar(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileParseError {
    #[error("file index out of range: {0}")]
    OutOfRange(u8),
    #[error("invalid file: {0}")]
    InvalidChar(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color: `{0}`")]
pub struct ColorParseError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("invalid piece: {0}")]
    InvalidChar(char),
}

/// A square on the chessboard.
///
/// Squares are stored as a single index, `rank * 8 + file`, with `a1` at zero and `h8` at 63. The text form is the
/// file letter followed by the rank digit, e.g. `a1` or `h8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(pub(in crate::core) u8);

impl Square {
    /// Returns the rank of this square on the chessboard.
    pub const fn rank(self) -> Rank {
        Rank(self.0 >> 3)
    }

    /// Returns the file of this square on the chessboard.
    pub const fn file(self) -> File {
        File(self.0 & 7)
    }

    /// Creates a new Square composed of a given rank and file.
    pub const fn of(rank: Rank, file: File) -> Square {
        Square(rank.0 * 8 + file.0)
    }

    pub(in crate::core) const fn plus(self, offset: i32) -> Square {
        Square((self.0 as i32 + offset) as u8)
    }

    /// Returns the closest square in the given direction. Invalid if the requested direction goes off of the
    /// board.
    pub const fn towards(self, dir: Direction) -> Square {
        self.plus(dir.as_vector())
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 64 {
            return Err(SquareParseError::OutOfRange(value));
        }

        Ok(Square(value))
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                let file = File::try_from(file)?;
                let rank = Rank::try_from(rank)?;
                Ok(Square::of(rank, file))
            }
            _ => Err(SquareParseError::Malformed(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = SquareParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

macro_rules! square_constants {
    ($($name:ident = $index:expr),* $(,)?) => {
        $(pub const $name: Square = Square($index);)*
    };
}

square_constants! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// The rank as players count it, 1 through 8.
    pub const fn number(self) -> u8 {
        self.0 + 1
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 8 {
            return Err(RankParseError::OutOfRange(value));
        }

        Ok(Rank(value))
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '1'..='8' => Ok(Rank(value as u8 - b'1')),
            c => Err(RankParseError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

pub const RANK_1: Rank = Rank(0);
pub const RANK_2: Rank = Rank(1);
pub const RANK_3: Rank = Rank(2);
pub const RANK_4: Rank = Rank(3);
pub const RANK_5: Rank = Rank(4);
pub const RANK_6: Rank = Rank(5);
pub const RANK_7: Rank = Rank(6);
pub const RANK_8: Rank = Rank(7);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<u8> for File {
    type Error = FileParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 8 {
            return Err(FileParseError::OutOfRange(value));
        }

        Ok(File(value))
    }
}

impl TryFrom<char> for File {
    type Error = FileParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'a'..='h' => Ok(File(value as u8 - b'a')),
            c => Err(FileParseError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

pub const FILE_A: File = File(0);
pub const FILE_B: File = File(1);
pub const FILE_C: File = File(2);
pub const FILE_D: File = File(3);
pub const FILE_E: File = File(4);
pub const FILE_F: File = File(5);
pub const FILE_G: File = File(6);
pub const FILE_H: File = File(7);

/// One of the two players. Also used as the turn state: the color whose turn it is to move.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    #[display(fmt = "WHITE")]
    White,
    #[display(fmt = "BLACK")]
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" | "WHITE" | "w" => Ok(Color::White),
            "black" | "BLACK" | "b" => Ok(Color::Black),
            _ => Err(ColorParseError(s.to_string())),
        }
    }
}

/// The kinds of pieces in play. There are no pawns and no queens in this variant.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceKind {
    King,
    Bishop,
    Rook,
    Knight,
}

impl PieceKind {
    /// The per-kind symbol used in roster listings.
    pub const fn symbol(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Bishop => "Bi",
            PieceKind::Rook => "R",
            PieceKind::Knight => "Kn",
        }
    }

    /// The single-letter placement code for this kind, upper case for White and lower case for Black.
    pub fn as_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
        };

        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Decodes a single-letter placement code into its color and kind.
    pub fn from_char(value: char) -> Result<(Color, PieceKind), PieceParseError> {
        let color = if value.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        let kind = match value.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            _ => return Err(PieceParseError::InvalidChar(value)),
        };

        Ok((color, kind))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const fn as_vector(self) -> i32 {
        match self {
            Direction::North => 8,
            Direction::NorthEast => 9,
            Direction::East => 1,
            Direction::SouthEast => -7,
            Direction::South => -8,
            Direction::SouthWest => -9,
            Direction::West => -1,
            Direction::NorthWest => 7,
        }
    }
}

macro_rules! type_iterator {
    ($name:ident, $type:ident, $max:expr) => {
        pub struct $name(u8, u8);

        impl Iterator for $name {
            type Item = $type;

            fn next(&mut self) -> Option<Self::Item> {
                if self.0 >= self.1 {
                    None
                } else {
                    let next = self.0;
                    self.0 += 1;
                    Some($type(next))
                }
            }
        }

        impl ::std::iter::DoubleEndedIterator for $name {
            fn next_back(&mut self) -> Option<Self::Item> {
                if self.1 <= self.0 {
                    None
                } else {
                    self.1 -= 1;
                    Some($type(self.1))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name(0, $max)
            }
        }
    };
}

type_iterator!(AllSquares, Square, 64);
type_iterator!(AllRanks, Rank, 8);
type_iterator!(AllFiles, File, 8);

pub fn squares() -> AllSquares {
    AllSquares::default()
}

pub fn ranks() -> AllRanks {
    AllRanks::default()
}

pub fn files() -> AllFiles {
    AllFiles::default()
}

pub fn colors() -> ::std::vec::IntoIter<Color> {
    vec![Color::White, Color::Black].into_iter()
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;

    #[test]
    fn square_text_roundtrip() {
        for sq in squares() {
            let text = sq.to_string();
            assert_eq!(sq, text.parse::<Square>().unwrap());
        }
    }

    #[test]
    fn square_corners() {
        assert_eq!(A1, "a1".parse().unwrap());
        assert_eq!(H8, "h8".parse().unwrap());
        assert_eq!(FILE_H, H1.file());
        assert_eq!(RANK_8, A8.rank());
    }

    #[test]
    fn square_bad_file() {
        assert_eq!(
            Err(SquareParseError::File(FileParseError::InvalidChar('i'))),
            "i1".parse::<Square>()
        );
    }

    #[test]
    fn square_bad_rank() {
        assert_eq!(
            Err(SquareParseError::Rank(RankParseError::InvalidChar('9'))),
            "a9".parse::<Square>()
        );
        assert_eq!(
            Err(SquareParseError::Rank(RankParseError::InvalidChar('0'))),
            "a0".parse::<Square>()
        );
    }

    #[test]
    fn square_malformed() {
        assert!(matches!(
            "a10".parse::<Square>(),
            Err(SquareParseError::Malformed(_))
        ));
        assert!(matches!(
            "".parse::<Square>(),
            Err(SquareParseError::Malformed(_))
        ));
    }

    #[test]
    fn square_index_out_of_range() {
        assert_eq!(Err(SquareParseError::OutOfRange(64)), Square::try_from(64u8));
    }

    #[test]
    fn square_serializes_as_text() {
        assert_eq!("\"c2\"", serde_json::to_string(&C2).unwrap());
        assert_eq!(C2, serde_json::from_str::<Square>("\"c2\"").unwrap());
        assert!(serde_json::from_str::<Square>("\"z2\"").is_err());
    }

    #[test]
    fn piece_chars() {
        assert_eq!('K', PieceKind::King.as_char(Color::White));
        assert_eq!('n', PieceKind::Knight.as_char(Color::Black));
        assert_eq!(
            Ok((Color::Black, PieceKind::Rook)),
            PieceKind::from_char('r')
        );
        assert_eq!(Err(PieceParseError::InvalidChar('q')), PieceKind::from_char('q'));
    }

    #[test]
    fn color_display() {
        assert_eq!("WHITE", Color::White.to_string());
        assert_eq!("BLACK", Color::Black.to_string());
        assert_eq!(Color::Black, Color::White.toggle());
    }

    #[test]
    fn ranks_reverse() {
        let ranks: Vec<u8> = ranks().rev().map(Rank::number).collect();
        assert_eq!(vec![8, 7, 6, 5, 4, 3, 2, 1], ranks);
    }
}
