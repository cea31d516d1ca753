// Copyright 2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The front-end facing side of the engine. A [`Game`] owns the one [`Board`] and exposes move submission plus
//! read-only snapshots of everything a renderer needs between moves.

use serde::Serialize;
use tracing::debug;

use crate::{
    board::{self, Board, GameState, MoveError, MoveOutcome, PlacementParseError},
    core::*,
    movegen,
    piece::Piece,
};

/// Everything a front end needs to draw the game after a move, in one serializable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub turn: Color,
    pub placement: String,
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new() -> Game {
        Game {
            board: Board::new(),
        }
    }

    pub fn from_placement(placement: &str) -> Result<Game, PlacementParseError> {
        Ok(Game {
            board: Board::from_placement(placement)?,
        })
    }

    /// Submits a move for the side whose turn it is. Returns true if the move was committed and false if it was
    /// rejected for any reason; rejections are a normal outcome and leave the turn unchanged.
    pub fn make_move(&mut self, origin: Square, destination: Square) -> bool {
        self.try_move(origin, destination).is_ok()
    }

    /// Like [`Game::make_move`], with squares in their text form (`"a1"` through `"h8"`).
    pub fn make_move_text(&mut self, origin: &str, destination: &str) -> bool {
        self.try_move_text(origin, destination).is_ok()
    }

    pub fn try_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<MoveOutcome, MoveError> {
        self.board.make_move(origin, destination)
    }

    pub fn try_move_text(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> Result<MoveOutcome, MoveError> {
        let origin: Square = origin.parse().map_err(|err| {
            debug!(%err, "rejected origin square");
            MoveError::InvalidSquare(err)
        })?;
        let destination: Square = destination.parse().map_err(|err| {
            debug!(%err, "rejected destination square");
            MoveError::InvalidSquare(err)
        })?;
        self.try_move(origin, destination)
    }

    pub fn game_state(&self) -> GameState {
        self.board.state()
    }

    pub fn turn_state(&self) -> Color {
        self.board.side_to_move()
    }

    /// Snapshots of the six pieces of `side`, in roster order, captured pieces included.
    pub fn roster(&self, side: Color) -> Vec<Piece> {
        self.board.roster(side).pieces().to_vec()
    }

    pub fn board_layout(&self) -> [[Square; 8]; 8] {
        board::board_layout()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        movegen::generate_moves(&self.board, &mut moves);
        moves
    }

    pub fn is_over(&self) -> bool {
        self.board.is_over()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Throws away the current game and starts over from the starting layout.
    pub fn reset(&mut self) {
        debug!("game reset");
        self.board = Board::new();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.game_state(),
            turn: self.turn_state(),
            placement: self.board.as_placement(),
            white: self.roster(Color::White),
            black: self.roster(Color::Black),
        }
    }
}

#[cfg(test)]
mod tests {
    mod scenarios {
        use crate::{
            board::{GameState, Illegal, MoveError},
            core::*,
            game::Game,
            piece::PieceStatus,
        };

        #[test]
        fn a_king_to_its_own_square() {
            let mut game = Game::new();
            assert!(!game.make_move(A1, A1));
            assert_eq!(Color::White, game.turn_state());
        }

        #[test]
        fn b_knight_straight_up() {
            let mut game = Game::new();
            assert!(!game.make_move_text("c1", "c3"));
            assert_eq!(
                Err(MoveError::IllegalMove(Illegal::BadShape)),
                game.try_move(C1, C3)
            );
            assert_eq!(Color::White, game.turn_state());
        }

        #[test]
        fn c_bishop_diagonal() {
            let mut game = Game::new();
            // c2 holds White's own knight in the starting layout
            assert!(!game.make_move_text("b1", "c2"));

            assert!(game.make_move_text("b2", "c3"));
            let bishops: Vec<_> = game
                .roster(Color::White)
                .into_iter()
                .filter(|p| p.kind() == PieceKind::Bishop)
                .filter_map(|p| p.location())
                .collect();
            assert!(bishops.contains(&C3));
            assert!(!bishops.contains(&B2));
            assert_eq!(Color::Black, game.turn_state());
        }

        #[test]
        fn d_race_to_a_tie() {
            let mut game = Game::from_placement("8/K6k/8/8/8/8/8/8 w").unwrap();
            assert!(game.make_move_text("a7", "a8"));
            assert_eq!(GameState::WhiteWon, game.game_state());
            assert_eq!(Color::Black, game.turn_state());
            assert!(!game.is_over());

            assert!(game.make_move_text("h7", "h8"));
            assert_eq!(GameState::Tie, game.game_state());
            assert!(game.is_over());
        }

        #[test]
        fn e_capture_deactivates_the_victim() {
            let mut game = Game::from_placement("k7/8/8/8/4n3/8/8/K3R3 w").unwrap();
            assert!(game.make_move(E1, E4));

            let black = game.roster(Color::Black);
            assert!(black
                .iter()
                .filter(|p| p.kind() == PieceKind::Knight)
                .all(|p| p.status() == PieceStatus::Captured && p.location().is_none()));
            let rook = game
                .roster(Color::White)
                .into_iter()
                .find(|p| p.kind() == PieceKind::Rook)
                .unwrap();
            assert_eq!(Some(E4), rook.location());
        }

        #[test]
        fn f_exposing_own_king() {
            let mut game = Game::from_placement("k3r3/8/8/8/8/8/4R3/4K3 w").unwrap();
            assert!(!game.make_move(E2, D2));
            assert_eq!(
                Err(MoveError::IllegalMove(Illegal::ExposesKing(Color::White))),
                game.try_move(E2, D2)
            );
            assert_eq!(Color::White, game.turn_state());
        }
    }

    mod facade {
        use crate::{board::MoveError, core::*, game::Game};

        #[test]
        fn off_board_squares_rejected() {
            let mut game = Game::new();
            let cases = [("a1", "a9"), ("a1", "i1"), ("a0", "a1"), ("a2", "a10"), ("", "a3")];
            for (origin, dest) in cases {
                assert!(matches!(
                    game.try_move_text(origin, dest),
                    Err(MoveError::InvalidSquare(_))
                ));
            }

            assert_eq!(Color::White, game.turn_state());
        }

        #[test]
        fn queries_are_idempotent() {
            let mut game = Game::new();
            game.make_move(B2, C3);
            assert_eq!(game.game_state(), game.game_state());
            assert_eq!(game.turn_state(), game.turn_state());
            assert_eq!(game.roster(Color::White), game.roster(Color::White));
            assert_eq!(game.snapshot(), game.snapshot());
        }

        #[test]
        fn turns_alternate() {
            let mut game = Game::new();
            for _ in 0..40 {
                let moves = game.legal_moves();
                let mov = match moves.first() {
                    Some(&mov) => mov,
                    None => break,
                };

                let before = game.turn_state();
                assert!(!game.make_move(mov.source(), mov.source()));
                assert_eq!(before, game.turn_state());
                assert!(game.make_move(mov.source(), mov.destination()));
                assert_ne!(before, game.turn_state());
            }
        }

        #[test]
        fn board_layout_is_static() {
            let mut game = Game::new();
            let before = game.board_layout();
            game.make_move(B2, C3);
            assert_eq!(before, game.board_layout());
            assert_eq!(A8, before[0][0]);
        }

        #[test]
        fn reset_restores_start() {
            let mut game = Game::new();
            game.make_move(B2, C3);
            game.reset();
            assert_eq!(Color::White, game.turn_state());
            assert_eq!("8/8/8/8/8/8/RBN2nbr/KBN2nbk w", game.board().as_placement());
        }

        #[test]
        fn snapshot_json() {
            let game = Game::new();
            let json = serde_json::to_value(game.snapshot()).unwrap();
            assert_eq!("UNFINISHED", json["state"]);
            assert_eq!("WHITE", json["turn"]);
            assert_eq!("8/8/8/8/8/8/RBN2nbr/KBN2nbk w", json["placement"]);
            assert_eq!(6, json["white"].as_array().unwrap().len());
            assert_eq!("h1", json["black"][0]["location"]);
        }
    }
}
