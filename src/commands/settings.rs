// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::LoadedConfig;
use anyhow::Result;

pub fn handle(loaded: &LoadedConfig) -> Result<()> {
    match (&loaded.path, loaded.found) {
        (Some(p), true) => println!("# read from {}", p.display()),
        (Some(p), false) => println!("# defaults ({} not found)", p.display()),
        (None, _) => println!("# defaults (no config dir on this platform)"),
    }
    print!("{}", toml::to_string_pretty(&loaded.config)?);
    Ok(())
}
