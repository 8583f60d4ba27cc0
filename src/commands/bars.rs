// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::barcode::{bars, draw};
use crate::commands::preview::paper_override;
use crate::config::AppConfig;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    let text = m.get_one::<String>("text").unwrap();
    let paper = paper_override(m)?.unwrap_or(cfg.paper_width);
    let data = bar_rows(text);
    if !maybe_print_json(m.get_flag("json"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .enumerate()
            .map(|(i, r)| {
                vec![
                    (i + 1).to_string(),
                    r.character.to_string(),
                    format!("U+{:04X}", r.code_point),
                    r.width.to_string(),
                    r.height.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["#", "Char", "Code point", "Width", "Height"], rows)
        );
        for line in draw(&bars(text), paper.columns()) {
            println!("{}", line);
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BarRow {
    pub character: char,
    pub code_point: u32,
    pub width: u8,
    pub height: u8,
}

pub fn bar_rows(text: &str) -> Vec<BarRow> {
    text.chars()
        .zip(bars(text))
        .map(|(c, b)| BarRow {
            character: c,
            code_point: c as u32,
            width: b.width,
            height: b.height,
        })
        .collect()
}
