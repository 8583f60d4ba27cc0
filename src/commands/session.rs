// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-driven form session. Each input line is one event; after it the
//! relevant part of the form's view is written back.

use crate::commands::issue::{render_copies, wait_for_receipt};
use crate::commands::preview::{paper_override, render_preview};
use crate::config::AppConfig;
use crate::form::{FormController, GenerationRequest};
use crate::models::Field;
use crate::utils::{parse_date, parse_paper, pretty_table};
use anyhow::Result;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  set <field> <text>   company | barcode | value | date | observation
  paper <58mm|80mm>    change the paper width
  generate             validate and issue the receipt (two copies)
  print                simulate printing both copies
  show                 show the fields and the preview
  help                 this text
  quit                 leave the form";

const PROMPT: &str = "recibo> ";

enum Flow {
    Continue,
    Quit,
}

pub fn handle(cfg: &AppConfig, m: &clap::ArgMatches) -> Result<()> {
    let mut form = FormController::new(cfg);
    if let Some(p) = paper_override(m)? {
        form.set_paper_width(p);
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut form, stdin.lock(), stdout.lock())
}

pub fn run<R: BufRead, W: Write>(form: &mut FormController, input: R, mut out: W) -> Result<()> {
    writeln!(out, "{}", HELP)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if let Flow::Quit = step(form, line, &mut out)? {
            break;
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    if form.cancel() {
        writeln!(out, "Pending generation discarded.")?;
    }
    Ok(())
}

/// Splits off the leading word. The remainder starts right after the single
/// whitespace character that ends the word.
fn split_word(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    line.split_once(char::is_whitespace).unwrap_or((line, ""))
}

fn step<W: Write>(form: &mut FormController, line: &str, out: &mut W) -> Result<Flow> {
    let (cmd, rest) = split_word(line);
    match cmd.to_lowercase().as_str() {
        "" => {}
        "set" => set(form, rest, out)?,
        "paper" => match parse_paper(rest) {
            Ok(p) => {
                form.set_paper_width(p);
                writeln!(out, "Paper width: {}", p)?;
            }
            Err(e) => writeln!(out, "{}", e)?,
        },
        "generate" => generate(form, out)?,
        "print" => match form.request_print() {
            Some(msg) => writeln!(out, "{}", msg)?,
            None => writeln!(out, "Nothing to print yet; generate a receipt first.")?,
        },
        "show" => show(form, out)?,
        "help" | "?" => writeln!(out, "{}", HELP)?,
        "quit" | "exit" => return Ok(Flow::Quit),
        other => writeln!(out, "Unknown command '{}' (type 'help')", other)?,
    }
    Ok(Flow::Continue)
}

fn set<W: Write>(form: &mut FormController, rest: &str, out: &mut W) -> Result<()> {
    // field text is stored as typed, surrounding spaces included
    let (name, text) = split_word(rest);
    let field = match name.parse::<Field>() {
        Ok(f) => f,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
    };
    if field == Field::Date {
        match parse_date(text) {
            Ok(d) => form.set_date(d),
            Err(e) => {
                writeln!(out, "{:#}", e)?;
                return Ok(());
            }
        }
    } else {
        form.set_field(field, text);
    }
    let shown = match form.draft().get(field) {
        Some(v) => v.to_string(),
        None => form.draft().date.to_string(),
    };
    writeln!(out, "{}: {}", field, shown)?;
    Ok(())
}

fn generate<W: Write>(form: &mut FormController, out: &mut W) -> Result<()> {
    match form.request_generation() {
        Err(e) => writeln!(out, "{}", e)?,
        Ok(GenerationRequest::AlreadyPending { .. }) => writeln!(out, "Already generating...")?,
        Ok(GenerationRequest::Scheduled { .. }) => {
            writeln!(out, "Generating...")?;
            out.flush()?;
            if wait_for_receipt(form).is_some() {
                if let Some(issued) = form.view().issued {
                    write!(out, "{}", render_copies(&issued))?;
                }
            }
        }
    }
    Ok(())
}

fn show<W: Write>(form: &FormController, out: &mut W) -> Result<()> {
    let d = form.draft();
    let rows = vec![
        vec![Field::CompanyName.to_string(), d.company_name.clone()],
        vec![Field::Barcode.to_string(), d.barcode.clone()],
        vec![Field::Value.to_string(), d.value.clone()],
        vec![Field::Date.to_string(), d.date.to_string()],
        vec![Field::Observation.to_string(), d.observation.clone()],
        vec!["Paper".to_string(), form.paper_width().to_string()],
    ];
    writeln!(out, "{}", pretty_table(&["Field", "Content"], rows))?;
    write!(out, "{}", render_preview(form))?;
    Ok(())
}
