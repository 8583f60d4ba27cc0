// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Decorative bar pattern shown above the barcode text on a receipt.
//!
//! This is not a symbology: nothing is encoded, there is no checksum and
//! different strings may draw the same pattern.

use serde::Serialize;

pub const MIN_WIDTH: u8 = 1;
pub const MAX_WIDTH: u8 = 4;
pub const MIN_HEIGHT: u8 = 8;
pub const MAX_HEIGHT: u8 = 10;

const INK: char = '█';
const GAP: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub width: u8,
    pub height: u8,
}

impl Bar {
    pub fn for_char(c: char) -> Self {
        let code = c as u32;
        Self {
            width: (code % 4) as u8 + MIN_WIDTH,
            height: (code % 3) as u8 + MIN_HEIGHT,
        }
    }
}

/// One bar per character of `text`, in order.
pub fn bars(text: &str) -> Vec<Bar> {
    text.chars().map(Bar::for_char).collect()
}

/// Draws bars as block characters, bottom-aligned, one blank column apart.
///
/// Bars that do not fit in `columns` continue on a further band below; each
/// band is centered. Every height level from the tallest down to the shortest
/// gets its own row, plus one solid base row, so the 8/9/10 differences stay
/// visible at text resolution.
pub fn draw(bars: &[Bar], columns: usize) -> Vec<String> {
    let mut out = Vec::new();
    for band in bands(bars, columns) {
        let band_width = band_width(band);
        let pad = columns.saturating_sub(band_width) / 2;
        let levels = (MIN_HEIGHT..=MAX_HEIGHT).rev().chain(std::iter::once(MIN_HEIGHT));
        for level in levels {
            let mut row = " ".repeat(pad);
            for (i, bar) in band.iter().enumerate() {
                if i > 0 {
                    row.push_str(&" ".repeat(GAP));
                }
                let fill = if bar.height >= level { INK } else { ' ' };
                row.extend(std::iter::repeat_n(fill, bar.width as usize));
            }
            out.push(row.trim_end().to_string());
        }
    }
    out
}

fn band_width(band: &[Bar]) -> usize {
    let ink: usize = band.iter().map(|b| b.width as usize).sum();
    ink + GAP * band.len().saturating_sub(1)
}

fn bands(bars: &[Bar], columns: usize) -> Vec<&[Bar]> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (i, bar) in bars.iter().enumerate() {
        let w = bar.width as usize;
        let needed = if i == start { w } else { used + GAP + w };
        if i > start && needed > columns {
            out.push(&bars[start..i]);
            start = i;
            used = w;
        } else {
            used = needed;
        }
    }
    if start < bars.len() {
        out.push(&bars[start..]);
    }
    out
}
