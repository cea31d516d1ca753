// Copyright 2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! King safety.
//!
//! There is no formal check in this variant, but a move may not leave either King capturable on the reply. The
//! evaluator plays the candidate move on a throwaway copy of the piece placement and asks, for each side, whether
//! any active enemy piece has a shape-legal path onto that side's King. Capturing the enemy King outright is
//! exempt, since the game ends before a reply exists.

use crate::{
    board::{Board, Illegal},
    core::*,
    piece::Piece,
    rules,
};

/// The evaluator's conclusion about a move that passed every check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Neither King is capturable after the move.
    Safe,
    /// The move captures the opponent's King.
    KingCapture,
}

/// Evaluates moving `mover` to `destination` on `board`.
///
/// The caller has already established that `mover` is an active piece of the side to move and that `destination`
/// is not occupied by one of its own pieces.
pub fn evaluate(board: &Board, mover: &Piece, destination: Square) -> Result<Verdict, Illegal> {
    let origin = match mover.location() {
        Some(sq) => sq,
        None => return Err(Illegal::BadShape),
    };

    rules::check_shape(origin, destination, mover.kind(), board.occupancy())?;

    let us = mover.owner();
    let them = us.toggle();
    if board.roster(them).king() == Some(destination) {
        return Ok(Verdict::KingCapture);
    }

    let after = Hypothetical::after(board, mover, destination);
    if after.is_capturable(us) {
        return Err(Illegal::ExposesKing(us));
    }

    if after.is_capturable(them) {
        return Err(Illegal::ExposesKing(them));
    }

    Ok(Verdict::Safe)
}

/// Active pieces as they would stand after a candidate move. Captured pieces are never included.
struct Hypothetical {
    pieces: Vec<(Color, PieceKind, Square)>,
    occupancy: SquareSet,
}

impl Hypothetical {
    fn after(board: &Board, mover: &Piece, destination: Square) -> Hypothetical {
        let origin = mover.location();
        let mut pieces = Vec::with_capacity(12);
        for color in colors() {
            for piece in board.roster(color).active() {
                let sq = match piece.location() {
                    Some(sq) => sq,
                    None => continue,
                };

                if sq == destination {
                    // captured by the move
                    continue;
                }

                if Some(sq) == origin {
                    pieces.push((color, piece.kind(), destination));
                } else {
                    pieces.push((color, piece.kind(), sq));
                }
            }
        }

        let mut occupancy: SquareSet = pieces.iter().map(|&(_, _, sq)| sq).collect();

        // A King's origin square keeps blocking lines through it for the reply sweep. Other pieces vacate theirs.
        if let (PieceKind::King, Some(origin)) = (mover.kind(), origin) {
            occupancy.insert(origin);
        }

        Hypothetical { pieces, occupancy }
    }

    fn king(&self, color: Color) -> Option<Square> {
        self.pieces
            .iter()
            .find(|&&(owner, kind, _)| owner == color && kind == PieceKind::King)
            .map(|&(_, _, sq)| sq)
    }

    /// True if any piece of the other side could move onto `color`'s King.
    fn is_capturable(&self, color: Color) -> bool {
        let king = match self.king(color) {
            Some(sq) => sq,
            None => return false,
        };

        self.pieces
            .iter()
            .filter(|&&(owner, _, _)| owner != color)
            .any(|&(_, kind, sq)| rules::is_legal_shape(sq, king, kind, self.occupancy))
    }
}
