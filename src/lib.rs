// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `kingsrow` is a move-legality engine for a small chess variant: each side has a King, two Bishops, a Rook and
//! two Knights, and the first King to reach the eighth rank wins. If White gets there first, Black has one reply
//! in which to reach the eighth rank as well and tie.
//!
//! The engine ([`Board`]) decides whether a move is legal, whether it would leave either King capturable, what it
//! captures, and how it changes the state of the game. [`Game`] wraps it for front ends, and [`console`] is a
//! small text front end built on top.

pub mod board;
pub mod console;
pub mod core;
pub mod game;
pub mod movegen;
pub mod piece;
pub mod rules;
pub mod safety;

pub use board::{Board, GameState, Illegal, MoveError, MoveOutcome, PlacementParseError};
pub use game::{Game, GameSnapshot};
pub use piece::{Piece, PieceStatus, Roster};
