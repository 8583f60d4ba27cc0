// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use recibo::commands::session;
use recibo::config::AppConfig;
use recibo::form::FormController;
use recibo::models::PaperWidth;
use std::io::Cursor;

fn instant_form() -> FormController {
    FormController::new(&AppConfig {
        generation_delay_ms: 0,
        ..AppConfig::default()
    })
}

fn run(form: &mut FormController, script: &str) -> String {
    let mut out = Vec::new();
    session::run(form, Cursor::new(script.as_bytes()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn session_generates_and_prints_two_copies() {
    let mut form = instant_form();
    let out = run(
        &mut form,
        "set company ACME\n\
         set barcode 123\n\
         set value 12550\n\
         set date 2025-01-15\n\
         generate\n\
         print\n\
         quit\n",
    );
    assert!(out.contains("Value: R$ 125,50"));
    assert!(out.contains("Generating..."));
    assert!(out.contains("CUSTOMER COPY"));
    assert!(out.contains("COMPANY COPY"));
    assert!(out.contains("15/01/2025"));
    assert!(!out.contains("OBSERVATION:"));
    assert!(out.contains("Customer copy - sent to printer"));
    assert!(out.contains("Company copy - sent to printer"));

    let receipt = form.issued().unwrap();
    assert_eq!(receipt.details.company_name, "ACME");
    assert_eq!(receipt.details.value, "R$ 125,50");
}

#[test]
fn session_reports_missing_fields_and_keeps_going() {
    let mut form = instant_form();
    let out = run(&mut form, "set company ACME\ngenerate\nprint\nshow\n");
    assert!(out.contains("Please fill in all required fields. Missing: Barcode, Value"));
    assert!(out.contains("Nothing to print yet"));
    assert!(out.contains("Fill in the fields to see the preview"));
    assert!(form.issued().is_none());
}

#[test]
fn session_rejects_bad_input_without_stopping() {
    let mut form = instant_form();
    let out = run(
        &mut form,
        "set date 15/01/2025\nset total 10\npaper A4\nfrobnicate\npaper 58mm\nset obs Entrega realizada\n",
    );
    assert!(out.contains("Invalid date '15/01/2025'"));
    assert!(out.contains("Unknown field 'total'"));
    assert!(out.contains("Unknown paper width 'a4'"));
    assert!(out.contains("Unknown command 'frobnicate'"));
    assert!(out.contains("Paper width: 58mm"));
    assert!(out.contains("Observation: Entrega realizada"));
    assert_eq!(form.paper_width(), PaperWidth::Mm58);
    assert_eq!(form.draft().observation, "Entrega realizada");
}

#[test]
fn preview_appears_once_required_fields_are_set() {
    let mut form = instant_form();
    let out = run(
        &mut form,
        "set company Mercado Central\nset barcode 5555666677778\nset value 1230\nshow\n",
    );
    assert!(out.contains("PREVIEW"));
    assert!(out.contains("R$ 12,30"));
    assert!(out.contains("Issued at:"));
    assert!(form.issued().is_none());
}

#[test]
fn field_text_keeps_its_surrounding_spaces() {
    let mut form = instant_form();
    run(
        &mut form,
        "  set   company  ACME Ltda  \nset obs   Entregar ao porteiro \r\nset value  1 5 0 \n",
    );
    assert_eq!(form.draft().company_name, " ACME Ltda  ");
    assert_eq!(form.draft().observation, "  Entregar ao porteiro ");
    assert_eq!(form.draft().value, "R$ 1,50");
}
