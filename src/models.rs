// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::currency::parse_brl;

/// The editable fields of a receipt. A draft has no id and no timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDraft {
    pub company_name: String,
    pub barcode: String,
    pub value: String, // always formatted, or empty
    pub date: NaiveDate,
    #[serde(default)]
    pub observation: String,
}

impl ReceiptDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            company_name: String::new(),
            barcode: String::new(),
            value: String::new(),
            date,
            observation: String::new(),
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).is_some_and(str::is_empty))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Text content of a field; `None` for the date, which is not text.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::CompanyName => Some(&self.company_name),
            Field::Barcode => Some(&self.barcode),
            Field::Value => Some(&self.value),
            Field::Observation => Some(&self.observation),
            Field::Date => None,
        }
    }
}

/// A finalized receipt: the draft fields frozen at generation time plus the
/// generation id and the human-readable issue time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: i64,
    #[serde(flatten)]
    pub details: ReceiptDraft,
    pub timestamp: String,
}

impl Receipt {
    pub fn amount(&self) -> Option<Decimal> {
        parse_brl(&self.details.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CompanyName,
    Barcode,
    Value,
    Date,
    Observation,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::CompanyName, Field::Barcode, Field::Value];

    pub fn label(self) -> &'static str {
        match self {
            Field::CompanyName => "Company name",
            Field::Barcode => "Barcode",
            Field::Value => "Value",
            Field::Date => "Date",
            Field::Observation => "Observation",
        }
    }
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "company" | "company-name" | "companyname" => Ok(Field::CompanyName),
            "barcode" => Ok(Field::Barcode),
            "value" => Ok(Field::Value),
            "date" => Ok(Field::Date),
            "observation" | "obs" => Ok(Field::Observation),
            other => Err(anyhow!(
                "Unknown field '{}' (use company|barcode|value|date|observation)",
                other
            )),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thermal paper presets. Only the rendered width depends on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperWidth {
    #[serde(rename = "58mm")]
    Mm58,
    #[default]
    #[serde(rename = "80mm")]
    Mm80,
}

impl PaperWidth {
    pub const ALL: [PaperWidth; 2] = [PaperWidth::Mm58, PaperWidth::Mm80];

    /// Printable characters per line at the standard font.
    pub fn columns(self) -> usize {
        match self {
            PaperWidth::Mm58 => 32,
            PaperWidth::Mm80 => 48,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaperWidth::Mm58 => "58mm",
            PaperWidth::Mm80 => "80mm",
        }
    }
}

impl FromStr for PaperWidth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "58mm" | "58" => Ok(PaperWidth::Mm58),
            "80mm" | "80" => Ok(PaperWidth::Mm80),
            other => Err(anyhow!("Unknown paper width '{}' (use 58mm|80mm)", other)),
        }
    }
}

impl fmt::Display for PaperWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which physical copy a rendering stands for. Only the label differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CopyLabel {
    Preview,
    Customer,
    Company,
}

impl CopyLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            CopyLabel::Preview => "PREVIEW",
            CopyLabel::Customer => "CUSTOMER COPY",
            CopyLabel::Company => "COMPANY COPY",
        }
    }
}

impl fmt::Display for CopyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
