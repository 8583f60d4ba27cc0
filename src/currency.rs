// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Brazilian real (pt-BR) formatting for the form's value field.
//!
//! Keystrokes are treated as a running count of cents: typing `1`, `5`, `0`
//! shows `R$ 1,50`. The field content is always re-derived from every digit
//! currently in it, so feeding a formatted value back in is harmless.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const SYMBOL: &str = "R$";
const THOUSANDS_SEP: char = '.';
const DECIMAL_SEP: char = ',';

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Formats the full current content of the value field.
///
/// Returns an empty string when the input holds no digits, which the form
/// reads as "value not set".
pub fn format_currency(raw: &str) -> String {
    let digits = NON_DIGIT.replace_all(raw, "");
    if digits.is_empty() {
        return String::new();
    }
    render_cents(&digits)
}

/// Reads a value produced by [`format_currency`] back into a decimal amount.
/// A leading `-` is accepted.
pub fn parse_brl(s: &str) -> Option<Decimal> {
    let s = s.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let body = s.strip_prefix(SYMBOL)?.trim_start();
    let (int_part, frac_part) = body.split_once(DECIMAL_SEP)?;
    if frac_part.len() != 2 || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let int_digits: String = int_part.chars().filter(|c| *c != THOUSANDS_SEP).collect();
    if int_digits.is_empty() || !int_digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let amount = Decimal::from_str(&format!("{}.{}", int_digits, frac_part)).ok()?;
    Some(if negative { -amount } else { amount })
}

/// `digits` is a non-empty ASCII digit string counting cents.
fn render_cents(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let padded = format!("{:0>3}", trimmed);
    let (int_part, cents) = padded.split_at(padded.len() - 2);

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEP);
        }
        grouped.push(ch);
    }
    format!("{} {}{}{}", SYMBOL, grouped, DECIMAL_SEP, cents)
}
