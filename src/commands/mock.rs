// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::issue::IssuedRow;
use crate::commands::preview::paper_override;
use crate::config::AppConfig;
use crate::form::ISSUED_COPIES;
use crate::mock::{
    MOCK_BARCODES, MOCK_COMPANIES, MOCK_OBSERVATIONS, MOCK_VALUES, SAMPLE_RECEIPT, random_receipt,
};
use crate::utils::{maybe_print_json, pretty_table};
use crate::view::ReceiptView;
use anyhow::Result;

pub fn handle(cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    if m.get_flag("list") {
        if !maybe_print_json(json_flag, &mock_table())? {
            println!(
                "{}",
                pretty_table(&["#", "Company", "Barcode", "Value", "Observation"], mock_table())
            );
        }
        return Ok(());
    }

    let receipt = if m.get_flag("sample") {
        SAMPLE_RECEIPT.clone()
    } else {
        random_receipt()
    };
    if !maybe_print_json(json_flag, &IssuedRow::from(&receipt))? {
        let paper = paper_override(m)?.unwrap_or(cfg.paper_width);
        for copy in ISSUED_COPIES {
            print!("{}", ReceiptView::issued(&receipt, copy, paper).render());
        }
    }
    Ok(())
}

pub fn mock_table() -> Vec<Vec<String>> {
    (0..MOCK_COMPANIES.len())
        .map(|i| {
            vec![
                i.to_string(),
                MOCK_COMPANIES[i].to_string(),
                MOCK_BARCODES[i].to_string(),
                MOCK_VALUES[i].to_string(),
                MOCK_OBSERVATIONS[i].to_string(),
            ]
        })
        .collect()
}
