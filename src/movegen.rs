// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Legal move enumeration. With six pieces a side there is no need for attack tables; every candidate destination
//! is run through the same checks as a submitted move.

use crate::board::Board;
use crate::core::*;

/// Appends every move the side to move could legally make on `board` to `moves`.
pub fn generate_moves(board: &Board, moves: &mut Vec<Move>) {
    let us = board.side_to_move();
    if !board.can_move(us) {
        return;
    }

    let targets = !board.roster(us).occupancy();
    for origin in board.roster(us).active().filter_map(|p| p.location()) {
        generate_moves_from(board, origin, targets, moves);
    }
}

fn generate_moves_from(board: &Board, origin: Square, targets: SquareSet, moves: &mut Vec<Move>) {
    for dest in targets {
        if let Ok(plan) = board.plan(origin, dest) {
            if plan.is_capture() {
                moves.push(Move::capture(origin, dest));
            } else {
                moves.push(Move::quiet(origin, dest));
            }
        }
    }
}
