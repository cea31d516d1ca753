// Copyright 2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pure coordinate arithmetic over squares: distances, slopes, and the squares that lie strictly between two
//! squares on a shared line or diagonal.

use std::convert::TryFrom;

use crate::core::{Direction, File, FileParseError, Square, SquareSet};

/// Translates a file letter (`a` through `h`) to its column index (0 through 7).
pub fn file_to_index(file: char) -> Result<u8, FileParseError> {
    File::try_from(file).map(File::as_u8)
}

/// Returns the (horizontal, vertical) distance between two squares.
pub fn distance(a: Square, b: Square) -> (u8, u8) {
    let horizontal = (a.file().as_u8() as i8 - b.file().as_u8() as i8).unsigned_abs();
    let vertical = (a.rank().as_u8() as i8 - b.rank().as_u8() as i8).unsigned_abs();
    (horizontal, vertical)
}

/// True iff `a` and `b` are distinct squares sharing a diagonal.
pub fn is_diagonal(a: Square, b: Square) -> bool {
    let (horizontal, vertical) = distance(a, b);
    horizontal == vertical && horizontal > 0
}

/// The slope of the line running from `a` to `b`, as `(rise, run)` reduced to lowest terms with a positive run.
/// Vertical lines (and `a == b`) have no slope.
pub fn slope(a: Square, b: Square) -> Option<(i8, i8)> {
    let run = b.file().as_u8() as i8 - a.file().as_u8() as i8;
    let rise = b.rank().as_u8() as i8 - a.rank().as_u8() as i8;
    if run == 0 {
        return None;
    }

    let divisor = gcd(rise.unsigned_abs(), run.unsigned_abs()) as i8;
    let sign = run.signum();
    Some((sign * rise / divisor, sign * run / divisor))
}

fn gcd(mut a: u8, mut b: u8) -> u8 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }

    a
}

impl Direction {
    /// The compass direction leading from `a` to `b`, if the two squares share a rank, file, or diagonal.
    pub fn between(a: Square, b: Square) -> Option<Direction> {
        if a == b {
            return None;
        }

        let eastward = b.file().as_u8() > a.file().as_u8();
        match slope(a, b) {
            None if b.rank().as_u8() > a.rank().as_u8() => Some(Direction::North),
            None => Some(Direction::South),
            Some((0, _)) if eastward => Some(Direction::East),
            Some((0, _)) => Some(Direction::West),
            Some((1, 1)) if eastward => Some(Direction::NorthEast),
            Some((1, 1)) => Some(Direction::SouthWest),
            Some((-1, 1)) if eastward => Some(Direction::SouthEast),
            Some((-1, 1)) => Some(Direction::NorthWest),
            Some(_) => None,
        }
    }
}

/// The squares lying strictly between `a` and `b`. Empty unless the two squares share a rank, file, or diagonal.
pub fn squares_between(a: Square, b: Square) -> SquareSet {
    let mut between = SquareSet::empty();
    if let Some(dir) = Direction::between(a, b) {
        let mut cursor = a.towards(dir);
        while cursor != b {
            between.insert(cursor);
            cursor = cursor.towards(dir);
        }
    }

    between
}
