// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::preview::apply_form_args;
use crate::config::AppConfig;
use crate::form::{FormController, IssuedView};
use crate::models::Receipt;
use crate::utils::maybe_print_json;
use anyhow::{Result, anyhow};
use serde::Serialize;
use std::thread;

pub fn handle(cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    let mut form = FormController::new(cfg);
    apply_form_args(&mut form, m)?;
    let receipt = issue(&mut form)?;

    if !maybe_print_json(m.get_flag("json"), &IssuedRow::from(&receipt))? {
        let view = form.view();
        let issued = view
            .issued
            .ok_or_else(|| anyhow!("Receipt {} vanished after generation", receipt.id))?;
        print!("{}", render_copies(&issued));
    }
    if m.get_flag("print") {
        if let Some(msg) = form.request_print() {
            println!("\n{}", msg);
        }
    }
    Ok(())
}

/// Validates, waits out the generation delay and returns the new receipt.
pub fn issue(form: &mut FormController) -> Result<Receipt> {
    form.request_generation()?;
    eprintln!("Generating...");
    wait_for_receipt(form).ok_or_else(|| anyhow!("Generation was cancelled"))
}

/// Sleeps until the pending generation fires.
pub fn wait_for_receipt(form: &mut FormController) -> Option<Receipt> {
    loop {
        if let Some(r) = form.poll() {
            return Some(r.clone());
        }
        let due = form.next_deadline()?;
        let wait = (due - chrono::Local::now()).to_std().unwrap_or_default();
        thread::sleep(wait);
    }
}

pub fn render_copies(issued: &IssuedView) -> String {
    format!(
        "Customer copy\n{}\nCompany copy\n{}",
        issued.customer, issued.company
    )
}

/// JSON shape of an issued receipt: the record plus its parsed amount.
#[derive(Serialize)]
pub struct IssuedRow {
    #[serde(flatten)]
    pub receipt: Receipt,
    pub amount: Option<rust_decimal::Decimal>,
}

impl From<&Receipt> for IssuedRow {
    fn from(r: &Receipt) -> Self {
        Self {
            receipt: r.clone(),
            amount: r.amount(),
        }
    }
}
