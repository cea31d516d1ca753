// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::*;
use std::fmt;

const SOURCE_MASK: u16 = 0xFC00;
const DESTINATION_MASK: u16 = 0x03F0;
const CAPTURE_BIT: u16 = 0x0004;

/// A move from one square to another. It is designed to be as compact as possible.
/// ## Encoding
///
///  * 6 bits - source square
///  * 6 bits - destination square
///  * 1 bit  - unused
///  * 1 bit  - capture bit
///  * 2 bits - unused
///
/// There are no promotions, castles, or en-passant captures in this variant, so the capture bit is the only
/// attribute a move carries.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Constructs a new quiet move from the source square to the destination
    /// square.
    pub fn quiet(source: Square, dest: Square) -> Move {
        let source_bits = (source.0 as u16) << 10;
        let dest_bits = (dest.0 as u16) << 4;
        Move(source_bits | dest_bits)
    }

    /// Constructs a new capture move from the source square to the destination
    /// square.
    pub fn capture(source: Square, dest: Square) -> Move {
        let mut mov = Move::quiet(source, dest);
        mov.0 |= CAPTURE_BIT;
        mov
    }

    /// Returns the source square of this move.
    pub fn source(self) -> Square {
        Square(((self.0 & SOURCE_MASK) >> 10) as u8)
    }

    /// Returns the destination square of this move.
    pub fn destination(self) -> Square {
        Square(((self.0 & DESTINATION_MASK) >> 4) as u8)
    }

    /// Returns whether or not this move is a capture move.
    pub fn is_capture(self) -> bool {
        (self.0 & CAPTURE_BIT) != 0
    }

    /// Returns the source and destination squares concatenated, e.g. `b2c3`.
    pub fn as_uci(self) -> String {
        format!("{}{}", self.source(), self.destination())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_uci())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_capture() {
            write!(f, "{}x{}", self.source(), self.destination())
        } else {
            write!(f, "{}-{}", self.source(), self.destination())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::*;

    #[test]
    fn quiet() {
        let mov = Move::quiet(A4, A5);
        assert_eq!(A4, mov.source());
        assert_eq!(A5, mov.destination());
        assert!(!mov.is_capture());
        assert_eq!("a4a5", mov.as_uci());
    }

    #[test]
    fn capture() {
        let mov = Move::capture(H8, A1);
        assert_eq!(H8, mov.source());
        assert_eq!(A1, mov.destination());
        assert!(mov.is_capture());
        assert_eq!("h8xa1", format!("{:?}", mov));
    }
}
