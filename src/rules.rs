// Copyright 2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Movement rules for each piece kind.
//!
//! A move is shape-legal when the piece kind's movement geometry permits the displacement and, for every kind but
//! the Knight, no occupied square lies strictly between origin and destination. These checks read occupancy and
//! nothing else; whose pieces stand where, and whether a King ends up exposed, is decided by the callers.

use crate::board::Illegal;
use crate::core::*;

/// Checks whether a piece of `kind` may travel from `origin` to `destination` given the occupied squares in
/// `occupancy`.
pub fn check_shape(
    origin: Square,
    destination: Square,
    kind: PieceKind,
    occupancy: SquareSet,
) -> Result<(), Illegal> {
    let (horizontal, vertical) = distance(origin, destination);
    let shaped = match kind {
        PieceKind::Knight => matches!((horizontal, vertical), (1, 2) | (2, 1)),
        PieceKind::Bishop => is_diagonal(origin, destination),
        PieceKind::Rook => (horizontal == 0) != (vertical == 0),
        PieceKind::King => horizontal.max(vertical) == 1,
    };

    if !shaped {
        return Err(Illegal::BadShape);
    }

    // Knights jump. For everything else, one step moves have nothing between them and so pass trivially.
    if kind != PieceKind::Knight && !(squares_between(origin, destination) & occupancy).is_empty() {
        return Err(Illegal::PathBlocked);
    }

    Ok(())
}

pub fn is_legal_shape(
    origin: Square,
    destination: Square,
    kind: PieceKind,
    occupancy: SquareSet,
) -> bool {
    check_shape(origin, destination, kind, occupancy).is_ok()
}
