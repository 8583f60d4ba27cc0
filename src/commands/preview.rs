// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::form::{FormController, PREVIEW_PLACEHOLDER};
use crate::models::{Field, PaperWidth};
use crate::utils::{parse_date, parse_paper};
use anyhow::Result;

pub fn handle(cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    let mut form = FormController::new(cfg);
    apply_form_args(&mut form, m)?;
    print!("{}", render_preview(&form));
    Ok(())
}

/// Copies the form flags into the controller, as if typed into the fields.
pub fn apply_form_args<C: Clock>(form: &mut FormController<C>, m: &clap::ArgMatches) -> Result<()> {
    for (arg, field) in [
        ("company", Field::CompanyName),
        ("barcode", Field::Barcode),
        ("value", Field::Value),
        ("obs", Field::Observation),
    ] {
        if let Some(text) = m.get_one::<String>(arg) {
            form.set_field(field, text);
        }
    }
    if let Some(d) = m.get_one::<String>("date") {
        form.set_date(parse_date(d)?);
    }
    if let Some(p) = paper_override(m)? {
        form.set_paper_width(p);
    }
    Ok(())
}

pub fn paper_override(m: &clap::ArgMatches) -> Result<Option<PaperWidth>> {
    m.get_one::<String>("paper").map(|s| parse_paper(s)).transpose()
}

pub fn render_preview<C: Clock>(form: &FormController<C>) -> String {
    let view = form.view();
    match view.preview {
        Some(p) => p,
        None => {
            let missing: Vec<&str> = view.missing.iter().map(|f| f.label()).collect();
            format!("{}\n(missing: {})\n", PREVIEW_PLACEHOLDER, missing.join(", "))
        }
    }
}
