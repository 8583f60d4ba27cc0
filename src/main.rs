// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use recibo::{cli, commands, config, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init_tracing(matches.get_count("verbose"));
    let loaded = config::load(matches.get_one::<String>("config").map(Path::new))?;
    let cfg = &loaded.config;

    match matches.subcommand() {
        Some(("preview", sub)) => commands::preview::handle(cfg, sub)?,
        Some(("issue", sub)) => commands::issue::handle(cfg, sub)?,
        Some(("session", sub)) => commands::session::handle(cfg, sub)?,
        Some(("bars", sub)) => commands::bars::handle(cfg, sub)?,
        Some(("format", sub)) => commands::format::handle(sub)?,
        Some(("mock", sub)) => commands::mock::handle(cfg, sub)?,
        Some(("config", _)) => commands::settings::handle(&loaded)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
