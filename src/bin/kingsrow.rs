// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Context;
use kingsrow::{console::Console, Game};
use structopt::StructOpt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Play kingsrow at the console. Type `help` for a list of commands.
#[derive(Debug, StructOpt)]
struct Options {
    /// Placement text of the position to start from, e.g. "8/K6k/8/8/8/8/8/8 w". Defaults to the starting layout.
    #[structopt(long)]
    position: Option<String>,
    /// Default log filter, overridden by RUST_LOG.
    #[structopt(long, default_value = "warn")]
    log_level: String,
    /// Print a JSON snapshot of the game after every move.
    #[structopt(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let ops = Options::from_args();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&ops.log_level))
        .context("invalid log level")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let game = match ops.position {
        Some(ref placement) => Game::from_placement(placement)
            .with_context(|| format!("invalid position: {}", placement))?,
        None => Game::new(),
    };

    Console::new(game, ops.json)
        .run()
        .context("fatal error while running console")
}
