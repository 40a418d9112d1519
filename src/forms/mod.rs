// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lead-capture form engine.
//!
//! Both kiosk forms (scheduling request, contact message) run on the same
//! state machine: a static [`FormSpec`] describes the fields, a
//! [`FormState`] holds the in-progress draft, and submission hands the
//! captured lead to a [`LeadTransport`](crate::dispatch::LeadTransport).
//!
//! Validation runs at submit time only, mirroring native form behavior:
//! `required` fails on empty values, email fields must look like an
//! address, date fields must be a real `YYYY-MM-DD` date. Phone fields
//! accept anything non-empty — tel inputs carry no format constraint.
//!
//! The draft is ephemeral. It is discarded when the submission completes,
//! when the visitor asks to submit another, and when the kiosk navigates
//! away from the page. Nothing is ever persisted.

pub mod contact;
pub mod scheduling;

pub use contact::CONTACT_FORM;
pub use scheduling::SCHEDULING_FORM;

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;

use crate::dispatch::{LeadRecord, LeadTransport};

/// What kind of input a field renders as, and which validation it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
    TextArea,
}

/// One choice in a select field.
///
/// `value` is the stable identifier captured into the lead record (kept in
/// English so the back office sees consistent data); `label_key` goes
/// through the catalog, with proper nouns passing through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct SelectOption {
    pub value: &'static str,
    pub label_key: &'static str,
}

/// Static description of a single form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label_key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder_key: Option<&'static str>,
    pub options: &'static [SelectOption],
}

/// Static description of a whole form, including the strings around it.
#[derive(Debug, Clone, Copy)]
pub struct FormSpec {
    pub name: &'static str,
    pub title_key: &'static str,
    pub submit_key: &'static str,
    pub success_title_key: &'static str,
    pub success_body_key: &'static str,
    pub assist_key: &'static str,
    pub another_key: &'static str,
    pub toast_key: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Whether a form is still being filled in or has completed its
/// (simulated) submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Editing,
    Submitted,
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Email,
    Date,
}

impl FieldError {
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required => "errRequired",
            FieldError::Email => "errEmail",
            FieldError::Date => "errDate",
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; the lead was handed to the transport and the
    /// status will flip once the acknowledgement delay elapses.
    Accepted,
    /// Validation failed; focus moved to the first offending field.
    Rejected { first_error: usize },
    /// A submission is already awaiting acknowledgement.
    InFlight,
}

/// In-memory state for one form instance.
pub struct FormState {
    spec: &'static FormSpec,
    values: Vec<String>,
    errors: Vec<Option<FieldError>>,
    focus: usize,
    status: SubmissionStatus,
    pending: Option<Instant>,
}

impl FormState {
    pub fn new(spec: &'static FormSpec) -> Self {
        let n = spec.fields.len();
        FormState {
            spec,
            values: vec![String::new(); n],
            errors: vec![None; n],
            focus: 0,
            status: SubmissionStatus::Editing,
            pending: None,
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// True when focus sits on the submit button rather than a field.
    pub fn is_submit_focused(&self) -> bool {
        self.focus == self.spec.fields.len()
    }

    pub fn value(&self, index: usize) -> &str {
        &self.values[index]
    }

    pub fn error(&self, index: usize) -> Option<FieldError> {
        self.errors[index]
    }

    /// Move focus forward through the fields and onto the submit button,
    /// wrapping back to the first field.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (self.spec.fields.len() + 1);
    }

    pub fn focus_prev(&mut self) {
        let stops = self.spec.fields.len() + 1;
        self.focus = (self.focus + stops - 1) % stops;
    }

    /// Append a character to the focused field. Select fields and the
    /// submit button ignore typed input.
    pub fn insert_char(&mut self, ch: char) {
        let i = self.focus;
        if i >= self.spec.fields.len() {
            return;
        }
        if self.spec.fields[i].kind == FieldKind::Select {
            return;
        }
        if ch.is_control() {
            return;
        }
        self.values[i].push(ch);
        self.errors[i] = None;
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let i = self.focus;
        if i >= self.spec.fields.len() {
            return;
        }
        if self.spec.fields[i].kind == FieldKind::Select {
            return;
        }
        self.values[i].pop();
        self.errors[i] = None;
    }

    /// Step the focused select field through its options. `step` is +1 or
    /// -1; an unset select starts at the first (or last) option.
    pub fn cycle_option(&mut self, step: i32) {
        let i = self.focus;
        if i >= self.spec.fields.len() {
            return;
        }
        let field = &self.spec.fields[i];
        if field.kind != FieldKind::Select || field.options.is_empty() {
            return;
        }
        let current = field.options.iter().position(|o| o.value == self.values[i]);
        let count = field.options.len();
        let next = match (current, step >= 0) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(p), true) => (p + 1) % count,
            (Some(p), false) => (p + count - 1) % count,
        };
        self.values[i] = field.options[next].value.to_string();
        self.errors[i] = None;
    }

    /// Validate every field, recording per-field errors. Returns the index
    /// of the first invalid field, if any.
    pub fn validate_all(&mut self) -> Option<usize> {
        let mut first = None;
        for (i, field) in self.spec.fields.iter().enumerate() {
            let error = validate_value(field.kind, field.required, &self.values[i]);
            if error.is_some() && first.is_none() {
                first = Some(i);
            }
            self.errors[i] = error;
        }
        first
    }

    /// Attempt to submit the form.
    ///
    /// On success the lead goes to the transport, which answers with the
    /// acknowledgement delay; [`FormState::tick`] flips the status once
    /// that deadline passes. On validation failure focus jumps to the
    /// first offending field and the transport is never consulted.
    pub fn submit(
        &mut self,
        now: Instant,
        transport: &mut dyn LeadTransport,
    ) -> Result<SubmitOutcome> {
        if self.pending.is_some() {
            return Ok(SubmitOutcome::InFlight);
        }
        if let Some(first_error) = self.validate_all() {
            self.focus = first_error;
            return Ok(SubmitOutcome::Rejected { first_error });
        }
        let record = self.lead_record();
        let delay = transport.dispatch(&record)?;
        self.pending = Some(now + delay);
        Ok(SubmitOutcome::Accepted)
    }

    /// Advance the simulated delivery clock. Returns true exactly once,
    /// when the pending submission completes; the caller raises the
    /// success toast. Completion discards the draft.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if now >= deadline => {
                self.pending = None;
                self.status = SubmissionStatus::Submitted;
                self.clear_draft();
                true
            }
            _ => false,
        }
    }

    /// The explicit "submit another" action on the success card: empty
    /// draft, back to editing.
    pub fn submit_another(&mut self) {
        self.reset();
    }

    /// Drop the draft and any in-flight acknowledgement. Navigating away
    /// from a form page lands here; an unacknowledged submission never
    /// raises its toast, the same as leaving a page mid-request.
    pub fn reset(&mut self) {
        self.pending = None;
        self.status = SubmissionStatus::Editing;
        self.clear_draft();
    }

    /// Snapshot the draft as a lead record for the transport.
    pub fn lead_record(&self) -> LeadRecord {
        let fields: BTreeMap<&'static str, String> = self
            .spec
            .fields
            .iter()
            .zip(&self.values)
            .map(|(f, v)| (f.id, v.clone()))
            .collect();
        LeadRecord::new(self.spec.name, fields)
    }

    fn clear_draft(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        for error in &mut self.errors {
            *error = None;
        }
        self.focus = 0;
    }
}

fn validate_value(kind: FieldKind, required: bool, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return required.then_some(FieldError::Required);
    }
    match kind {
        FieldKind::Email => {
            let email_re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
            if email_re.is_match(value) {
                None
            } else {
                Some(FieldError::Email)
            }
        }
        FieldKind::Date => {
            // chrono alone accepts unpadded months/days; the shape check
            // keeps captured dates uniform.
            let shape_re = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
            let parses = NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
            if shape_re.is_match(value) && parses {
                None
            } else {
                Some(FieldError::Date)
            }
        }
        _ => None,
    }
}
