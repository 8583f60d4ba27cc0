// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The receipt form: an editable draft, required-field validation, the
//! delayed (simulated) generation of a finalized receipt and the simulated
//! two-copy print.
//!
//! Nothing here renders on its own. After any event the host calls
//! [`FormController::view`] and redraws from the returned [`FormView`]. The
//! generation delay is a scheduled task owned by the controller and fired by
//! [`FormController::poll`]; there is never more than one, and it goes away
//! with the controller.

use chrono::{DateTime, Local, NaiveDate, TimeDelta};
use thiserror::Error;

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::currency::format_currency;
use crate::models::{CopyLabel, Field, PaperWidth, Receipt, ReceiptDraft};
use crate::view::ReceiptView;

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const VALIDATION_MESSAGE: &str = "Please fill in all required fields.";
pub const PREVIEW_PLACEHOLDER: &str = "Fill in the fields to see the preview";
pub const PRINT_CONFIRMATION: &str = "Simulating thermal print...\n\n\
     ✓ Customer copy - sent to printer\n\
     ✓ Company copy - sent to printer\n\n\
     Print complete!";

/// Copies produced for every finalized receipt, in print order.
pub const ISSUED_COPIES: [CopyLabel; 2] = [CopyLabel::Customer, CopyLabel::Company];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields. Missing: {}", join_labels(.0))]
    MissingFields(Vec<Field>),
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome of a generation request that passed (or skipped) validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationRequest {
    Scheduled { due: DateTime<Local> },
    /// A generation is already running; nothing new was scheduled.
    AlreadyPending { due: DateTime<Local> },
}

#[derive(Debug, Clone)]
struct PendingGeneration {
    due: DateTime<Local>,
    snapshot: ReceiptDraft,
}

/// Everything a renderer needs to draw the form.
#[derive(Debug, Clone)]
pub struct FormView {
    pub draft: ReceiptDraft,
    pub paper: PaperWidth,
    pub generating: bool,
    pub missing: Vec<Field>,
    /// `None` until the required fields are filled.
    pub preview: Option<String>,
    pub issued: Option<IssuedView>,
}

#[derive(Debug, Clone)]
pub struct IssuedView {
    pub receipt: Receipt,
    pub customer: String,
    pub company: String,
}

#[derive(Debug)]
pub struct FormController<C: Clock = SystemClock> {
    clock: C,
    delay: TimeDelta,
    draft: ReceiptDraft,
    paper: PaperWidth,
    issued: Option<Receipt>,
    pending: Option<PendingGeneration>,
    last_id: i64,
}

impl FormController<SystemClock> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> FormController<C> {
    /// Opens a form with today's date filled in and every other field empty.
    pub fn with_clock(clock: C, config: &AppConfig) -> Self {
        let today = clock.now().date_naive();
        Self {
            clock,
            delay: config.generation_delay(),
            draft: ReceiptDraft::new(today),
            paper: config.paper_width,
            issued: None,
            pending: None,
            last_id: 0,
        }
    }

    pub fn draft(&self) -> &ReceiptDraft {
        &self.draft
    }

    pub fn paper_width(&self) -> PaperWidth {
        self.paper
    }

    /// The current finalized receipt, if one was generated.
    pub fn issued(&self) -> Option<&Receipt> {
        self.issued.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending generation becomes due.
    pub fn next_deadline(&self) -> Option<DateTime<Local>> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Stores one field of the draft. The value field keeps only the
    /// formatted currency string derived from the digits in `text`.
    ///
    /// A date that is not `YYYY-MM-DD` leaves the current date in place, the
    /// way a date input ignores text it cannot read.
    pub fn set_field(&mut self, field: Field, text: &str) {
        match field {
            Field::CompanyName => self.draft.company_name = text.to_string(),
            Field::Barcode => self.draft.barcode = text.to_string(),
            Field::Value => self.draft.value = format_currency(text),
            Field::Observation => self.draft.observation = text.to_string(),
            Field::Date => match NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d") {
                Ok(date) => self.draft.date = date,
                Err(err) => tracing::warn!(input = text, %err, "ignoring unreadable date"),
            },
        }
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.draft.date = date;
    }

    pub fn set_paper_width(&mut self, paper: PaperWidth) {
        self.paper = paper;
    }

    /// Validates the draft and schedules its finalization after the
    /// configured delay.
    ///
    /// While a generation is pending this does nothing and reports the
    /// existing deadline. On validation failure nothing changes.
    pub fn request_generation(&mut self) -> Result<GenerationRequest, FormError> {
        if let Some(p) = &self.pending {
            tracing::debug!(due = %p.due, "generation already pending");
            return Ok(GenerationRequest::AlreadyPending { due: p.due });
        }
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            tracing::info!(missing = %join_labels(&missing), "generation rejected");
            return Err(FormError::MissingFields(missing));
        }
        let now = self.clock.now();
        // the delay is capped at one day, far from chrono's range limits
        let due = now + self.delay;
        self.pending = Some(PendingGeneration {
            due,
            snapshot: self.draft.clone(),
        });
        tracing::info!(%due, "generation scheduled");
        Ok(GenerationRequest::Scheduled { due })
    }

    /// Fires the pending generation if it is due and returns the new
    /// receipt, which replaces any previous one.
    pub fn poll(&mut self) -> Option<&Receipt> {
        let now = self.clock.now();
        if !self.pending.as_ref().is_some_and(|p| now >= p.due) {
            return None;
        }
        let pending = self.pending.take()?;
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        let receipt = Receipt {
            id,
            details: pending.snapshot,
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        };
        tracing::info!(
            id,
            company = %receipt.details.company_name,
            value = %receipt.details.value,
            "receipt generated"
        );
        self.issued = Some(receipt);
        self.issued.as_ref()
    }

    /// Drops the pending generation, if any. Returns whether one was dropped.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(p) => {
                tracing::info!(due = %p.due, "pending generation cancelled");
                true
            }
            None => false,
        }
    }

    /// Pretends to send both copies to the printer. `None` until a receipt
    /// has been generated.
    pub fn request_print(&self) -> Option<&'static str> {
        let receipt = self.issued.as_ref()?;
        for copy in ISSUED_COPIES {
            tracing::info!(id = receipt.id, %copy, paper = %self.paper, "simulated print");
        }
        Some(PRINT_CONFIRMATION)
    }

    pub fn view(&self) -> FormView {
        let missing = self.draft.missing_fields();
        let preview = missing
            .is_empty()
            .then(|| ReceiptView::preview(&self.draft, self.paper).render());
        let issued = self.issued.as_ref().map(|r| IssuedView {
            receipt: r.clone(),
            customer: ReceiptView::issued(r, CopyLabel::Customer, self.paper).render(),
            company: ReceiptView::issued(r, CopyLabel::Company, self.paper).render(),
        });
        FormView {
            draft: self.draft.clone(),
            paper: self.paper,
            generating: self.is_generating(),
            missing,
            preview,
            issued,
        }
    }
}

impl<C: Clock> Drop for FormController<C> {
    fn drop(&mut self) {
        if self.pending.is_some() {
            tracing::debug!("form closed with a generation pending; discarding it");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::rc::Rc;

    fn start() -> DateTime<Local> {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            .and_local_timezone(Local)
            .earliest()
            .unwrap()
    }

    fn form() -> (Rc<ManualClock>, FormController<Rc<ManualClock>>) {
        let clock = Rc::new(ManualClock::new(start()));
        let ctl = FormController::with_clock(Rc::clone(&clock), &AppConfig::default());
        (clock, ctl)
    }

    fn fill(ctl: &mut FormController<Rc<ManualClock>>) {
        ctl.set_field(Field::CompanyName, "ACME");
        ctl.set_field(Field::Barcode, "123");
        ctl.set_field(Field::Value, "12550");
    }

    #[test]
    fn opens_with_today_and_empty_fields() {
        let (_clock, ctl) = form();
        assert_eq!(ctl.draft().date, start().date_naive());
        assert!(ctl.draft().company_name.is_empty());
        assert!(ctl.issued().is_none());
        assert!(!ctl.is_generating());
        assert_eq!(ctl.paper_width(), PaperWidth::Mm80);
    }

    #[test]
    fn value_field_only_holds_formatted_text() {
        let (_clock, mut ctl) = form();
        ctl.set_field(Field::Value, "1");
        assert_eq!(ctl.draft().value, "R$ 0,01");
        ctl.set_field(Field::Value, "R$ 0,015");
        assert_eq!(ctl.draft().value, "R$ 0,15");
        ctl.set_field(Field::Value, "R$ 0,1");
        assert_eq!(ctl.draft().value, "R$ 0,01");
        ctl.set_field(Field::Value, "");
        assert_eq!(ctl.draft().value, "");
        ctl.set_field(Field::CompanyName, "  ACME 12 ");
        assert_eq!(ctl.draft().company_name, "  ACME 12 ");
    }

    #[test]
    fn unreadable_dates_are_ignored() {
        let (_clock, mut ctl) = form();
        ctl.set_field(Field::Date, "2025-01-15");
        assert_eq!(ctl.draft().date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        ctl.set_field(Field::Date, "15/01/2025");
        assert_eq!(ctl.draft().date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn each_missing_required_field_blocks_generation() {
        for skip in Field::REQUIRED {
            let (clock, mut ctl) = form();
            fill(&mut ctl);
            ctl.set_field(skip, "");
            let err = ctl.request_generation().unwrap_err();
            assert_eq!(err, FormError::MissingFields(vec![skip]));
            assert!(err.to_string().starts_with(VALIDATION_MESSAGE));
            assert!(!ctl.is_generating());
            clock.advance(TimeDelta::seconds(5));
            assert!(ctl.poll().is_none());
            assert!(ctl.issued().is_none());
        }
    }

    #[test]
    fn observation_is_optional() {
        let (_clock, mut ctl) = form();
        fill(&mut ctl);
        assert!(ctl.request_generation().is_ok());
    }

    #[test]
    fn generation_waits_for_the_delay() {
        let (clock, mut ctl) = form();
        fill(&mut ctl);
        let req = ctl.request_generation().unwrap();
        let due = start() + TimeDelta::milliseconds(1000);
        assert_eq!(req, GenerationRequest::Scheduled { due });
        assert!(ctl.is_generating());
        assert_eq!(ctl.next_deadline(), Some(due));

        clock.advance(TimeDelta::milliseconds(999));
        assert!(ctl.poll().is_none());
        assert!(ctl.issued().is_none());

        clock.advance(TimeDelta::milliseconds(1));
        let r = ctl.poll().cloned().unwrap();
        assert_eq!(r.id, due.timestamp_millis());
        assert_eq!(r.timestamp, due.format(TIMESTAMP_FORMAT).to_string());
        assert!(!ctl.is_generating());
        assert!(ctl.poll().is_none());
    }

    #[test]
    fn oversized_delays_wait_one_day() {
        let clock = Rc::new(ManualClock::new(start()));
        let cfg = AppConfig {
            generation_delay_ms: 10_000_000_000_000_000,
            ..AppConfig::default()
        };
        let mut ctl = FormController::with_clock(Rc::clone(&clock), &cfg);
        fill(&mut ctl);
        let due = start() + TimeDelta::days(1);
        assert_eq!(
            ctl.request_generation().unwrap(),
            GenerationRequest::Scheduled { due }
        );
        assert!(ctl.poll().is_none());
        clock.advance(TimeDelta::hours(23));
        assert!(ctl.poll().is_none());
        clock.advance(TimeDelta::hours(1));
        assert!(ctl.poll().is_some());
    }

    #[test]
    fn receipt_freezes_the_draft_at_request_time() {
        let (clock, mut ctl) = form();
        fill(&mut ctl);
        let at_call = ctl.draft().clone();
        ctl.request_generation().unwrap();
        ctl.set_field(Field::CompanyName, "Changed meanwhile");
        clock.advance(TimeDelta::seconds(1));
        let r = ctl.poll().cloned().unwrap();
        assert_eq!(r.details, at_call);
        // the draft is not cleared by finalization
        assert_eq!(ctl.draft().company_name, "Changed meanwhile");
    }

    #[test]
    fn duplicate_requests_schedule_once() {
        let (clock, mut ctl) = form();
        fill(&mut ctl);
        let first = ctl.request_generation().unwrap();
        clock.advance(TimeDelta::milliseconds(500));
        let second = ctl.request_generation().unwrap();
        let GenerationRequest::Scheduled { due } = first else {
            panic!("first request should schedule");
        };
        assert_eq!(second, GenerationRequest::AlreadyPending { due });

        clock.advance(TimeDelta::milliseconds(500));
        assert!(ctl.poll().is_some());
        clock.advance(TimeDelta::seconds(10));
        assert!(ctl.poll().is_none());
        assert!(!ctl.is_generating());
    }

    #[test]
    fn new_receipt_replaces_the_previous_one() {
        let (clock, mut ctl) = form();
        fill(&mut ctl);
        ctl.request_generation().unwrap();
        clock.advance(TimeDelta::seconds(1));
        let first = ctl.poll().cloned().unwrap();

        ctl.set_field(Field::Barcode, "456");
        ctl.request_generation().unwrap();
        clock.advance(TimeDelta::seconds(1));
        let second = ctl.poll().cloned().unwrap();

        assert!(second.id > first.id);
        assert_eq!(ctl.issued(), Some(&second));
        assert_eq!(ctl.issued().unwrap().details.barcode, "456");
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let clock = Rc::new(ManualClock::new(start()));
        let cfg = AppConfig {
            generation_delay_ms: 0,
            ..AppConfig::default()
        };
        let mut ctl = FormController::with_clock(Rc::clone(&clock), &cfg);
        fill(&mut ctl);
        ctl.request_generation().unwrap();
        let a = ctl.poll().unwrap().id;
        ctl.request_generation().unwrap();
        let b = ctl.poll().unwrap().id;
        assert_eq!(b, a + 1);
    }

    #[test]
    fn cancel_discards_the_pending_generation() {
        let (clock, mut ctl) = form();
        fill(&mut ctl);
        ctl.request_generation().unwrap();
        assert!(ctl.cancel());
        assert!(!ctl.cancel());
        clock.advance(TimeDelta::seconds(2));
        assert!(ctl.poll().is_none());
        assert!(ctl.issued().is_none());
    }

    #[test]
    fn print_needs_a_receipt() {
        let (clock, mut ctl) = form();
        assert!(ctl.request_print().is_none());
        fill(&mut ctl);
        ctl.request_generation().unwrap();
        clock.advance(TimeDelta::seconds(1));
        ctl.poll();
        let msg = ctl.request_print().unwrap();
        assert!(msg.contains("Customer copy - sent"));
        assert!(msg.contains("Company copy - sent"));
    }

    #[test]
    fn view_follows_the_state() {
        let (clock, mut ctl) = form();
        let v = ctl.view();
        assert!(v.preview.is_none());
        assert_eq!(v.missing.len(), 3);

        fill(&mut ctl);
        ctl.set_paper_width(PaperWidth::Mm58);
        let v = ctl.view();
        let preview = v.preview.unwrap();
        assert!(preview.contains("PREVIEW"));
        assert!(preview.lines().all(|l| textwrap::core::display_width(l) <= 32));
        assert!(v.issued.is_none());

        ctl.request_generation().unwrap();
        assert!(ctl.view().generating);
        clock.advance(TimeDelta::seconds(1));
        ctl.poll();
        let v = ctl.view();
        assert!(!v.generating);
        let issued = v.issued.unwrap();
        assert!(issued.customer.contains("CUSTOMER COPY"));
        assert!(issued.company.contains("COMPANY COPY"));
        assert!(issued.customer.contains(&issued.receipt.timestamp));
    }
}
