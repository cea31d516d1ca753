// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use structopt::StructOpt;

use kingsrow::{movegen, Board};

#[derive(Debug, StructOpt)]
struct Options {
    /// Placement text of the position to analyze.
    #[structopt(name = "PLACEMENT")]
    placement: String,
}

fn main() -> anyhow::Result<()> {
    let ops = Options::from_args();
    let board = Board::from_placement(&ops.placement)?;
    let mut moves = Vec::new();
    movegen::generate_moves(&board, &mut moves);
    for mov in moves {
        println!("{}", mov.as_uci());
    }

    Ok(())
}
