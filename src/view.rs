// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use textwrap::{Options, WordSplitter};
use textwrap::core::display_width;

use crate::barcode;
use crate::models::{CopyLabel, PaperWidth, Receipt, ReceiptDraft};

pub const DISCLAIMER_NOT_INVOICE: &str = "This document is not a fiscal invoice.";
pub const DISCLAIMER_NO_FISCAL_VALUE: &str = "Simplified receipt - no fiscal value.";

const BORDER: char = '╌';
const RULE: char = '─';

/// Text rendering of one copy of a receipt. Borrows the record; rendering
/// never touches it.
pub struct ReceiptView<'a> {
    details: &'a ReceiptDraft,
    issued_at: Option<&'a str>,
    copy: CopyLabel,
    paper: PaperWidth,
}

impl<'a> ReceiptView<'a> {
    /// A live preview of the draft; the footer has no issue time yet.
    pub fn preview(draft: &'a ReceiptDraft, paper: PaperWidth) -> Self {
        Self {
            details: draft,
            issued_at: None,
            copy: CopyLabel::Preview,
            paper,
        }
    }

    pub fn issued(receipt: &'a Receipt, copy: CopyLabel, paper: PaperWidth) -> Self {
        Self {
            details: &receipt.details,
            issued_at: Some(&receipt.timestamp),
            copy,
            paper,
        }
    }

    pub fn render(&self) -> String {
        let d = self.details;
        let mut s = Sheet::new(self.paper.columns());

        s.border();
        s.center(&d.company_name);
        s.center(DISCLAIMER_NOT_INVOICE);
        s.center(DISCLAIMER_NO_FISCAL_VALUE);
        s.blank();
        s.center(self.copy.as_str());
        s.rule();

        s.left("BARCODE:");
        for row in barcode::draw(&barcode::bars(&d.barcode), s.width) {
            s.push(row);
        }
        s.literal(&d.barcode);
        s.rule();

        s.line_lr("VALUE:", &d.value);
        s.line_lr("DATE:", &d.date.format("%d/%m/%Y").to_string());
        if !d.observation.is_empty() {
            s.blank();
            s.left("OBSERVATION:");
            s.left(&d.observation);
        }
        s.rule();

        s.center(&format!("Issued at: {}", self.issued_at.unwrap_or_default()));
        s.border();
        s.finish()
    }
}

struct Sheet {
    width: usize,
    lines: Vec<String>,
}

impl Sheet {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    fn wrap(&self, text: &str) -> Vec<String> {
        let opts = Options::new(self.width)
            .break_words(true)
            .word_splitter(WordSplitter::NoHyphenation);
        textwrap::wrap(text, opts)
            .into_iter()
            .map(|l| l.trim_end().to_string())
            .collect()
    }

    fn left(&mut self, text: &str) {
        for line in self.wrap(text) {
            self.push(line);
        }
    }

    fn center(&mut self, text: &str) {
        for line in self.wrap(text.trim()) {
            let pad = self.width.saturating_sub(display_width(&line)) / 2;
            self.push(format!("{}{}", " ".repeat(pad), line));
        }
    }

    /// Centered on a single line and never broken; wider text overflows the
    /// paper.
    fn literal(&mut self, text: &str) {
        let pad = self.width.saturating_sub(display_width(text)) / 2;
        self.push(format!("{}{}", " ".repeat(pad), text));
    }

    /// `left` flush left and `right` flush right on one line, or on two when
    /// they don't fit together.
    fn line_lr(&mut self, left: &str, right: &str) {
        let (lw, rw) = (display_width(left), display_width(right));
        if lw + 1 + rw <= self.width {
            let gap = self.width - lw - rw;
            self.push(format!("{}{}{}", left, " ".repeat(gap), right));
        } else {
            self.left(left);
            for line in self.wrap(right) {
                let pad = self.width.saturating_sub(display_width(&line));
                self.push(format!("{}{}", " ".repeat(pad), line));
            }
        }
    }

    fn blank(&mut self) {
        self.push(String::new());
    }

    fn rule(&mut self) {
        self.push(RULE.to_string().repeat(self.width));
    }

    fn border(&mut self) {
        self.push(BORDER.to_string().repeat(self.width));
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
