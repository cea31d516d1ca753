// Copyright 2023 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pieces and the per-side rosters that own them.
//!
//! Pieces are never destroyed. A captured piece keeps its roster slot with no location, so it can still be
//! inspected, but it no longer occupies a square or takes part in path and threat scans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::*;

/// Number of pieces each side starts with: one King, two Bishops, one Rook, two Knights.
pub const ROSTER_SIZE: usize = 6;

/// The kinds making up a full roster, in roster order.
pub const ROSTER_KINDS: [PieceKind; ROSTER_SIZE] = [
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Knight,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceStatus {
    Active,
    Captured,
}

/// A single piece. `location` is `Some` exactly when the piece is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    owner: Color,
    kind: PieceKind,
    status: PieceStatus,
    location: Option<Square>,
}

impl Piece {
    pub fn new(owner: Color, kind: PieceKind, location: Square) -> Piece {
        Piece {
            owner,
            kind,
            status: PieceStatus::Active,
            location: Some(location),
        }
    }

    /// A piece that is off the board from the start, used to fill roster slots of custom placements.
    pub fn captured(owner: Color, kind: PieceKind) -> Piece {
        Piece {
            owner,
            kind,
            status: PieceStatus::Captured,
            location: None,
        }
    }

    pub fn owner(&self) -> Color {
        self.owner
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn status(&self) -> PieceStatus {
        self.status
    }

    pub fn location(&self) -> Option<Square> {
        self.location
    }

    pub fn is_active(&self) -> bool {
        self.status == PieceStatus::Active
    }

    /// The owner-qualified symbol, e.g. `WHITE Kn`.
    pub fn symbol(&self) -> String {
        format!("{} {}", self.owner, self.kind.symbol())
    }

    pub(crate) fn relocate(&mut self, square: Square) {
        debug_assert!(self.is_active(), "relocating a captured piece");
        self.location = Some(square);
    }

    pub(crate) fn capture(&mut self) {
        self.status = PieceStatus::Captured;
        self.location = None;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(sq) => write!(f, "{} {}", self.symbol(), sq),
            None => write!(f, "{} captured", self.symbol()),
        }
    }
}

/// One side's fixed collection of pieces, in roster order (King, Bishop, Bishop, Rook, Knight, Knight).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    pieces: [Piece; ROSTER_SIZE],
}

impl Roster {
    /// The starting roster for the given side.
    pub fn starting(color: Color) -> Roster {
        let squares = match color {
            Color::White => [A1, B1, B2, A2, C1, C2],
            Color::Black => [H1, G1, G2, H2, F1, F2],
        };

        let mut pieces = [Piece::captured(color, PieceKind::King); ROSTER_SIZE];
        for (slot, (kind, sq)) in pieces.iter_mut().zip(ROSTER_KINDS.iter().zip(squares)) {
            *slot = Piece::new(color, *kind, sq);
        }

        Roster { pieces }
    }

    /// A roster with every piece off the board, to be filled by [`Roster::place`].
    pub fn empty(color: Color) -> Roster {
        let mut pieces = [Piece::captured(color, PieceKind::King); ROSTER_SIZE];
        for (slot, kind) in pieces.iter_mut().zip(ROSTER_KINDS) {
            *slot = Piece::captured(color, kind);
        }

        Roster { pieces }
    }

    /// Puts a piece of the given kind on `square`, using the first free roster slot of that kind. Returns false if
    /// every slot of that kind is already on the board.
    pub(crate) fn place(&mut self, kind: PieceKind, square: Square) -> bool {
        let owner = self.pieces[0].owner;
        match self
            .pieces
            .iter_mut()
            .find(|p| p.kind == kind && !p.is_active())
        {
            Some(slot) => {
                *slot = Piece::new(owner, kind, square);
                true
            }
            None => false,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn active(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_active())
    }

    /// The square of this side's King, if it has not been captured.
    pub fn king(&self) -> Option<Square> {
        self.active()
            .find(|p| p.kind == PieceKind::King)
            .and_then(Piece::location)
    }

    /// Index of the active piece standing on `square`, if any.
    pub fn index_at(&self, square: Square) -> Option<usize> {
        self.pieces
            .iter()
            .position(|p| p.location == Some(square))
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.index_at(square).map(|i| &self.pieces[i])
    }

    pub fn occupancy(&self) -> SquareSet {
        self.active().filter_map(Piece::location).collect()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Piece {
        &mut self.pieces[index]
    }
}

#[cfg(test)]
mod tests {
    use crate::{core::*, piece::*};

    #[test]
    fn starting_white() {
        let roster = Roster::starting(Color::White);
        let placed: Vec<_> = roster
            .pieces()
            .iter()
            .map(|p| (p.kind(), p.location()))
            .collect();
        assert_eq!(
            vec![
                (PieceKind::King, Some(A1)),
                (PieceKind::Bishop, Some(B1)),
                (PieceKind::Bishop, Some(B2)),
                (PieceKind::Rook, Some(A2)),
                (PieceKind::Knight, Some(C1)),
                (PieceKind::Knight, Some(C2)),
            ],
            placed
        );
        assert!(roster.pieces().iter().all(|p| p.owner() == Color::White));
        assert_eq!(Some(A1), roster.king());
    }

    #[test]
    fn starting_black() {
        let roster = Roster::starting(Color::Black);
        assert_eq!(Some(H1), roster.king());
        assert_eq!(6, roster.occupancy().len());
        assert_eq!(PieceKind::Rook, roster.piece_at(H2).unwrap().kind());
        assert!(roster.piece_at(A1).is_none());
    }

    #[test]
    fn capture_clears_location() {
        let mut roster = Roster::starting(Color::Black);
        let index = roster.index_at(F2).unwrap();
        roster.get_mut(index).capture();

        let knight = roster.pieces()[index];
        assert_eq!(PieceStatus::Captured, knight.status());
        assert_eq!(None, knight.location());
        assert!(roster.piece_at(F2).is_none());
        assert_eq!(5, roster.occupancy().len());
        assert_eq!(5, roster.active().count());
    }

    #[test]
    fn place_fills_free_slots() {
        let mut roster = Roster::empty(Color::White);
        assert!(roster.king().is_none());
        assert!(roster.place(PieceKind::Knight, D4));
        assert!(roster.place(PieceKind::Knight, E4));
        assert!(!roster.place(PieceKind::Knight, F4));
        assert!(roster.place(PieceKind::King, A8));
        assert_eq!(Some(A8), roster.king());
        assert_eq!(3, roster.active().count());
    }

    #[test]
    fn symbols() {
        let knight = Piece::new(Color::White, PieceKind::Knight, C1);
        assert_eq!("WHITE Kn", knight.symbol());
        assert_eq!("WHITE Kn c1", knight.to_string());
        let bishop = Piece::captured(Color::Black, PieceKind::Bishop);
        assert_eq!("BLACK Bi captured", bishop.to_string());
    }

    #[test]
    fn snapshot_json() {
        let king = Piece::new(Color::Black, PieceKind::King, H1);
        let json = serde_json::to_value(king).unwrap();
        assert_eq!(
            serde_json::json!({
                "owner": "BLACK",
                "kind": "KING",
                "status": "ACTIVE",
                "location": "h1",
            }),
            json
        );
    }
}
