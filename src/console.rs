// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented text front end. Each input line is one command and produces one response block; nothing
//! typed at the console can end the session except `quit` or end of input.

use std::io::{self, BufRead, Write};

use crate::{
    board::{GameState, MoveError},
    core::*,
    game::Game,
};

const HELP: &str = "\
commands:
  <from> <to>          move a piece, e.g. `b2 c3`
  move <from> <to>     same as above
  board                print the board
  roster <white|black> list one side's pieces
  state                print the game state and whose turn it is
  moves                list the legal moves for the side to move
  json                 print a JSON snapshot of the game
  reset                start a new game
  help                 print this message
  quit                 leave";

pub struct Console {
    game: Game,
    /// Print a JSON snapshot after every committed move.
    json: bool,
}

impl Console {
    pub fn new(game: Game, json: bool) -> Console {
        Console { game, json }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the console on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for maybe_line in input.lines() {
            let line = maybe_line?;
            let components: Vec<_> = line.split_whitespace().collect();
            let (&command, arguments) = components.split_first().unwrap_or((&"", &[]));
            match (command, arguments) {
                ("", []) => continue,
                ("quit", []) => break,
                ("move", [from, to]) => self.handle_move(from, to, &mut output)?,
                ("board", []) => write!(output, "{}", self.game.board())?,
                ("roster", [side]) => self.handle_roster(side, &mut output)?,
                ("state", []) => self.handle_state(&mut output)?,
                ("moves", []) => self.handle_moves(&mut output)?,
                ("json", []) => self.handle_json(&mut output)?,
                ("reset", []) => {
                    self.game.reset();
                    writeln!(output, "ok")?;
                }
                ("help", []) => writeln!(output, "{}", HELP)?,
                (from, [to]) if from.parse::<Square>().is_ok() => {
                    self.handle_move(from, to, &mut output)?
                }
                _ => writeln!(output, "unrecognized command: {}", line.trim())?,
            }

            output.flush()?;
        }

        Ok(())
    }

    fn handle_move<W: Write>(&mut self, from: &str, to: &str, output: &mut W) -> io::Result<()> {
        match self.game.try_move_text(from, to) {
            Ok(_) => {
                writeln!(output, "ok")?;
                if self.json {
                    self.handle_json(output)?;
                }

                if self.game.is_over() {
                    match self.game.game_state() {
                        GameState::WhiteWon => writeln!(output, "WHITE WINS")?,
                        GameState::BlackWon => writeln!(output, "BLACK WINS")?,
                        GameState::Tie => writeln!(output, "IT'S A TIE")?,
                        GameState::Unfinished => {}
                    }
                }
            }
            Err(err @ MoveError::InvalidSquare(_)) => writeln!(output, "error: {}", err)?,
            Err(MoveError::IllegalMove(reason)) => writeln!(output, "illegal: {}", reason)?,
            Err(err) => writeln!(output, "illegal: {}", err)?,
        }

        Ok(())
    }

    fn handle_roster<W: Write>(&self, side: &str, output: &mut W) -> io::Result<()> {
        let color: Color = match side.parse() {
            Ok(color) => color,
            Err(err) => return writeln!(output, "error: {}", err),
        };

        for piece in self.game.roster(color) {
            writeln!(output, "{}", piece)?;
        }

        Ok(())
    }

    fn handle_state<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "state: {}", self.game.game_state())?;
        writeln!(output, "turn: {}", self.game.turn_state())
    }

    fn handle_moves<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let moves: Vec<_> = self
            .game
            .legal_moves()
            .into_iter()
            .map(Move::as_uci)
            .collect();
        if moves.is_empty() {
            writeln!(output, "no legal moves")
        } else {
            writeln!(output, "{}", moves.join(" "))
        }
    }

    fn handle_json<W: Write>(&self, output: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *output, &self.game.snapshot())?;
        writeln!(output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::console::Console;
    use crate::game::Game;

    fn transcript(game: Game, json: bool, input: &str) -> String {
        let mut console = Console::new(game, json);
        let mut output = Vec::new();
        console
            .run_with(Cursor::new(input.as_bytes()), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn moves_and_state() {
        let out = transcript(Game::new(), false, "move b1 c2\nb2 c3\nstate\n");
        assert_eq!(
            "illegal: destination is occupied by the mover's own piece\nok\nstate: UNFINISHED\nturn: BLACK\n",
            out
        );
    }

    #[test]
    fn wrong_side_reports_missing_piece() {
        let out = transcript(Game::new(), false, "b2 c3\nb1 c2\n");
        assert_eq!("ok\nillegal: no BLACK piece on b1\n", out);
    }

    #[test]
    fn commands_with_stray_arguments() {
        let out = transcript(Game::new(), false, "board x\nstate x\nz9 a1\n");
        assert_eq!(
            "unrecognized command: board x\nunrecognized command: state x\nunrecognized command: z9 a1\n",
            out
        );
    }

    #[test]
    fn bad_input_keeps_going() {
        let out = transcript(Game::new(), false, "a1 z9\nfrobnicate\n\nroster green\nstate\n");
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("error: invalid square"));
        assert_eq!("unrecognized command: frobnicate", lines[1]);
        assert!(lines[2].starts_with("error: "));
        assert_eq!("state: UNFINISHED", lines[3]);
    }

    #[test]
    fn quit_stops_reading() {
        let out = transcript(Game::new(), false, "quit\nb2 c3\n");
        assert_eq!("", out);
    }

    #[test]
    fn roster_listing() {
        let out = transcript(Game::new(), false, "roster black\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(6, lines.len());
        assert_eq!("BLACK K h1", lines[0]);
    }

    #[test]
    fn announces_tie() {
        let game = Game::from_placement("8/K6k/8/8/8/8/8/8 w").unwrap();
        let out = transcript(game, false, "a7 a8\nh7 h8\nmoves\n");
        assert_eq!("ok\nok\nIT'S A TIE\nno legal moves\n", out);
    }

    #[test]
    fn announces_black_win() {
        let game = Game::from_placement("8/7k/8/8/8/8/8/K7 b").unwrap();
        let out = transcript(game, false, "h7 g8\n");
        assert_eq!("ok\nBLACK WINS\n", out);
    }

    #[test]
    fn json_after_moves() {
        let out = transcript(Game::new(), true, "b2 c3\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!("ok", lines[0]);
        let snapshot: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!("BLACK", snapshot["turn"]);
    }

    #[test]
    fn reset_and_board() {
        let out = transcript(Game::new(), false, "b2 c3\nreset\nboard\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!("ok", lines[1]);
        assert_eq!(" K  B  N  .  .  n  b  k | 1", lines[9]);
    }
}
