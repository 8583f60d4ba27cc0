// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency::format_currency;
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let raw = m.get_one::<String>("raw").unwrap();
    let formatted = format_currency(raw);
    if formatted.is_empty() {
        eprintln!("No digits in '{}'", raw);
    }
    println!("{}", formatted);
    Ok(())
}
