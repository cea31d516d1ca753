// Copyright 2017-2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, debug_span, info, warn};

use crate::{
    core::{self, *},
    piece::{Piece, Roster},
    safety::{self, Verdict},
};

/// The state of the race to the last rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    #[display(fmt = "UNFINISHED")]
    Unfinished,
    /// White's King reached the last rank. Black still has one reply with which to tie.
    #[display(fmt = "WHITE_WON")]
    WhiteWon,
    #[display(fmt = "BLACK_WON")]
    BlackWon,
    #[display(fmt = "TIE")]
    Tie,
}

impl GameState {
    pub fn is_won(self) -> bool {
        matches!(self, GameState::WhiteWon | GameState::BlackWon)
    }

    fn won_by(color: Color) -> GameState {
        match color {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }
}

/// Reasons a well-formed move is refused.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum Illegal {
    #[error("the game is over")]
    GameOver,
    #[error("origin and destination are the same square")]
    SameSquare,
    #[error("destination is occupied by the mover's own piece")]
    OwnPieceAtDestination,
    #[error("the piece does not move that way")]
    BadShape,
    #[error("another piece is in the way")]
    PathBlocked,
    #[error("the {0} king would be capturable")]
    ExposesKing(Color),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid square: {0}")]
    InvalidSquare(#[from] SquareParseError),
    #[error("no {1} piece on {0}")]
    NoPieceAtOrigin(Square, Color),
    #[error("illegal move: {0}")]
    IllegalMove(#[from] Illegal),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementParseError {
    #[error("unexpected end of placement")]
    UnexpectedEnd,
    #[error("unexpected character `{0}`, expected `{1}`")]
    UnexpectedChar(char, char),
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
    #[error("invalid digit")]
    InvalidDigit,
    #[error("rank does not sum to 8")]
    FileDoesNotSumToEight,
    #[error("invalid side to move")]
    InvalidSideToMove,
    #[error("too many {1} pieces for {0}")]
    TooManyPieces(Color, PieceKind),
    #[error("{0} has no king")]
    MissingKing(Color),
    #[error("trailing characters after side to move")]
    TrailingCharacters,
}

/// What a committed move did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mov: Move,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub state: GameState,
}

/// A move that has passed every check and is ready to be committed.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Plan {
    mover: usize,
    captured: Option<usize>,
    verdict: Verdict,
}

impl Plan {
    pub(crate) fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// The game engine. A Board owns both rosters, the turn, and the game state; all mutation goes through
/// [`Board::make_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Rosters indexed by color. These are the only record of where pieces stand.
    rosters: [Roster; 2],
    /// Color whose turn it is to move.
    side_to_move: Color,
    state: GameState,
}

impl Board {
    /// A fresh game in the starting layout, White to move.
    pub fn new() -> Board {
        Board {
            rosters: [
                Roster::starting(Color::White),
                Roster::starting(Color::Black),
            ],
            side_to_move: Color::White,
            state: GameState::Unfinished,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn roster(&self, color: Color) -> &Roster {
        &self.rosters[color as usize]
    }

    /// The active piece standing on `square`, of either color.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.rosters.iter().find_map(|r| r.piece_at(square))
    }

    /// Every square holding an active piece.
    pub fn occupancy(&self) -> SquareSet {
        self.rosters[0].occupancy() | self.rosters[1].occupancy()
    }

    /// Whether `color` is allowed to submit a move in the current game state. White plays only while the game is
    /// unfinished; Black additionally gets one reply after White's King reaches the last rank, provided Black still
    /// has a King.
    pub fn can_move(&self, color: Color) -> bool {
        match (self.state, color) {
            (GameState::Unfinished, _) => true,
            (GameState::WhiteWon, Color::Black) => self.roster(Color::Black).king().is_some(),
            _ => false,
        }
    }

    /// True once the side to move can no longer move.
    pub fn is_over(&self) -> bool {
        !self.can_move(self.side_to_move)
    }

    /// Runs every check on a candidate move without committing it.
    pub fn check_move(&self, origin: Square, destination: Square) -> Result<Verdict, MoveError> {
        self.plan(origin, destination).map(|plan| plan.verdict)
    }

    pub(crate) fn plan(&self, origin: Square, destination: Square) -> Result<Plan, MoveError> {
        let us = self.side_to_move;
        if !self.can_move(us) {
            return Err(Illegal::GameOver.into());
        }

        let ours = self.roster(us);
        let mover = ours
            .index_at(origin)
            .ok_or(MoveError::NoPieceAtOrigin(origin, us))?;

        if origin == destination {
            return Err(Illegal::SameSquare.into());
        }

        if ours.piece_at(destination).is_some() {
            return Err(Illegal::OwnPieceAtDestination.into());
        }

        let verdict = safety::evaluate(self, &ours.pieces()[mover], destination)?;
        Ok(Plan {
            mover,
            captured: self.roster(us.toggle()).index_at(destination),
            verdict,
        })
    }

    /// Validates and, if legal, commits a move for the side to move: relocates the mover, captures whatever
    /// opponent piece stood on the destination, evaluates the race to the last rank, and passes the turn.
    ///
    /// A move refused because it would leave a King capturable while a win is pending resets the game to
    /// unfinished before the error is returned. Callers should not assume the game state is unchanged by a
    /// rejected move.
    pub fn make_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<MoveOutcome, MoveError> {
        let span = debug_span!("make_move", side = %self.side_to_move, %origin, %destination);
        let _enter = span.enter();

        let plan = match self.plan(origin, destination) {
            Ok(plan) => plan,
            Err(err) => {
                if let MoveError::IllegalMove(Illegal::ExposesKing(_)) = err {
                    if self.state.is_won() {
                        warn!(
                            previous = %self.state,
                            "unsafe reply while a win is pending, game reset to unfinished"
                        );
                        self.state = GameState::Unfinished;
                    }
                }

                debug!(%err, "move rejected");
                return Err(err);
            }
        };

        let us = self.side_to_move;
        let them = us.toggle();
        let captured = plan.captured.map(|index| {
            let piece = self.rosters[them as usize].get_mut(index);
            piece.capture();
            piece.kind()
        });

        let mover = self.rosters[us as usize].get_mut(plan.mover);
        mover.relocate(destination);
        let piece = mover.kind();

        let previous = self.state;
        if plan.verdict == Verdict::KingCapture {
            self.state = GameState::won_by(us);
        } else if piece == PieceKind::King && SS_RANK_8.contains(destination) {
            self.state = match (us, self.state) {
                (Color::White, _) => GameState::WhiteWon,
                (Color::Black, GameState::WhiteWon) => GameState::Tie,
                (Color::Black, _) => GameState::BlackWon,
            };
        }

        self.side_to_move = them;
        let mov = if plan.is_capture() {
            Move::capture(origin, destination)
        } else {
            Move::quiet(origin, destination)
        };

        debug!(%mov, ?captured, "move committed");
        if self.state != previous {
            info!(%previous, state = %self.state, "game state changed");
        }

        Ok(MoveOutcome {
            mov,
            piece,
            captured,
            state: self.state,
        })
    }
}

/// The static 8x8 grid of squares, rank 8 first and file `a` first within each rank.
pub fn board_layout() -> [[Square; 8]; 8] {
    let mut layout = [[A1; 8]; 8];
    for (row, rank) in layout.iter_mut().zip(core::ranks().rev()) {
        for (cell, file) in row.iter_mut().zip(core::files()) {
            *cell = Square::of(rank, file);
        }
    }

    layout
}

//
// Placement text, modelled on the board field of FEN.
//

impl Board {
    /// Parses a position from placement text: ranks 8 through 1 separated by `/`, pieces as `KBRN` (White) and
    /// `kbrn` (Black), digits for runs of empty squares, then a space and `w` or `b` for the side to move.
    ///
    /// Roster slots without a piece on the board start out captured. Each side must have a King.
    pub fn from_placement(placement: impl AsRef<str>) -> Result<Board, PlacementParseError> {
        type Stream<'a> = std::iter::Peekable<std::str::Chars<'a>>;

        fn eat(iter: &mut Stream<'_>, expected: char) -> Result<(), PlacementParseError> {
            let c = peek(iter)?;
            if c == expected {
                advance(iter)
            } else {
                Err(PlacementParseError::UnexpectedChar(c, expected))
            }
        }

        fn advance(iter: &mut Stream<'_>) -> Result<(), PlacementParseError> {
            iter.next()
                .map(|_| ())
                .ok_or(PlacementParseError::UnexpectedEnd)
        }

        fn peek(iter: &mut Stream<'_>) -> Result<char, PlacementParseError> {
            iter.peek()
                .copied()
                .ok_or(PlacementParseError::UnexpectedEnd)
        }

        let mut placed = Vec::new();
        let iter = &mut placement.as_ref().chars().peekable();
        for rank in core::ranks().rev() {
            let mut file = 0;
            while file <= 7 {
                let c = peek(iter)?;
                // digits 1 through 8 indicate empty squares.
                if c.is_ascii_digit() {
                    if !('1'..='8').contains(&c) {
                        return Err(PlacementParseError::InvalidDigit);
                    }

                    file += c as usize - '0' as usize;
                    if file > 8 {
                        return Err(PlacementParseError::FileDoesNotSumToEight);
                    }

                    advance(iter)?;
                    continue;
                }

                if c == '/' || c == ' ' {
                    return Err(PlacementParseError::FileDoesNotSumToEight);
                }

                let (color, kind) =
                    PieceKind::from_char(c).map_err(|_| PlacementParseError::UnknownPiece(c))?;
                let file_index = File::try_from(file as u8)
                    .map_err(|_| PlacementParseError::FileDoesNotSumToEight)?;
                placed.push((Square::of(rank, file_index), color, kind));
                advance(iter)?;
                file += 1;
            }

            if rank != RANK_1 {
                eat(iter, '/')?;
            }
        }

        eat(iter, ' ')?;
        let side_to_move = match peek(iter)? {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return Err(PlacementParseError::InvalidSideToMove),
        };
        advance(iter)?;
        if iter.next().is_some() {
            return Err(PlacementParseError::TrailingCharacters);
        }

        // Roster slots of the same kind are filled from a1 upward, so the start placement yields the start rosters.
        placed.sort_by_key(|&(square, _, _)| square);
        let mut rosters = [Roster::empty(Color::White), Roster::empty(Color::Black)];
        for (square, color, kind) in placed {
            if !rosters[color as usize].place(kind, square) {
                return Err(PlacementParseError::TooManyPieces(color, kind));
            }
        }

        for color in core::colors() {
            if rosters[color as usize].king().is_none() {
                return Err(PlacementParseError::MissingKing(color));
            }
        }

        Ok(Board {
            rosters,
            side_to_move,
            state: GameState::Unfinished,
        })
    }

    pub fn as_placement(&self) -> String {
        let mut buf = String::new();
        for rank in core::ranks().rev() {
            let mut empty_squares = 0;
            for file in core::files() {
                let square = Square::of(rank, file);
                if let Some(piece) = self.piece_at(square) {
                    if empty_squares != 0 {
                        buf.push_str(&empty_squares.to_string());
                    }
                    buf.push(piece.kind().as_char(piece.owner()));
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                buf.push_str(&empty_squares.to_string());
            }

            if rank != RANK_1 {
                buf.push('/');
            }
        }

        buf.push(' ');
        match self.side_to_move {
            Color::White => buf.push('w'),
            Color::Black => buf.push('b'),
        }
        buf
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in core::ranks().rev() {
            for file in core::files() {
                let sq = Square::of(rank, file);
                if let Some(piece) = self.piece_at(sq) {
                    write!(f, " {} ", piece.kind().as_char(piece.owner()))?;
                } else {
                    f.write_str(" . ")?;
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        for _ in core::files() {
            f.write_str("---")?;
        }

        writeln!(f)?;
        for file in core::files() {
            write!(f, " {} ", file)?;
        }

        writeln!(f)?;
        writeln!(f, "{} to move, {}", self.side_to_move, self.state)
    }
}
