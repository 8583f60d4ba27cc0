// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Sample data for demos and tests. The form never reads from here.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rand::Rng;

use crate::clock::{Clock, SystemClock};
use crate::form::TIMESTAMP_FORMAT;
use crate::models::{Receipt, ReceiptDraft};

// Parallel arrays: index i of each describes one sample receipt.
pub const MOCK_COMPANIES: [&str; 5] = [
    "ACME Comércio Ltda",
    "Tech Solutions Brasil",
    "Loja do João",
    "Mercado Central",
    "Serviços Express",
];

pub const MOCK_BARCODES: [&str; 5] = [
    "7891234567890",
    "1234567890123",
    "9876543210987",
    "5555666677778",
    "1111222233334",
];

pub const MOCK_VALUES: [&str; 5] = [
    "R$ 25,50",
    "R$ 150,00",
    "R$ 89,99",
    "R$ 350,75",
    "R$ 12,30",
];

pub const MOCK_OBSERVATIONS: [&str; 5] = [
    "Pagamento à vista",
    "Produto conforme pedido",
    "Entrega realizada",
    "Serviço prestado",
    "",
];

pub static SAMPLE_RECEIPT: Lazy<Receipt> = Lazy::new(|| Receipt {
    id: 1,
    details: ReceiptDraft {
        company_name: "ACME Comércio Ltda".into(),
        barcode: "7891234567890".into(),
        value: "R$ 125,50".into(),
        date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
        observation: "Pagamento à vista - Produto conforme pedido".into(),
    },
    timestamp: "15/01/2025 14:30:25".into(),
});

/// The sample receipt at `index` (wrapping), stamped with `clock`'s now.
pub fn mock_receipt_at(index: usize, clock: &impl Clock) -> Receipt {
    let i = index % MOCK_COMPANIES.len();
    let now = clock.now();
    Receipt {
        id: now.timestamp_millis(),
        details: ReceiptDraft {
            company_name: MOCK_COMPANIES[i].to_string(),
            barcode: MOCK_BARCODES[i].to_string(),
            value: MOCK_VALUES[i].to_string(),
            date: now.date_naive(),
            observation: MOCK_OBSERVATIONS[i].to_string(),
        },
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Picks one index shared by all the sample arrays.
pub fn generate_mock_receipt<R: Rng + ?Sized>(rng: &mut R, clock: &impl Clock) -> Receipt {
    let index = rng.gen_range(0..MOCK_COMPANIES.len());
    mock_receipt_at(index, clock)
}

pub fn random_receipt() -> Receipt {
    generate_mock_receipt(&mut rand::thread_rng(), &SystemClock)
}
