// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Boundary validation. Each entity has one entry point returning every
//! violation found; callers run it before invoking a store mutator.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{Expense, Tracker};

pub fn validate_tracker(tracker: &Tracker) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    if tracker.name.trim().is_empty() {
        errors.push(ValidationError::EmptyTrackerName);
    }
    let mut seen = HashSet::new();
    for field in &tracker.custom_fields {
        if !seen.insert(field.as_str()) {
            errors.push(ValidationError::DuplicateCustomField(field.clone()));
        }
    }
    if let Some(limit) = tracker.budget_limit {
        if limit < Decimal::ZERO {
            errors.push(ValidationError::NegativeBudgetLimit);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// One-line rendering of a validation failure list for CLI surfaces.
pub fn message(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_expense(expense: &Expense) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    if expense.amount <= Decimal::ZERO {
        errors.push(ValidationError::NonPositiveAmount);
    }
    if expense.description.trim().is_empty() {
        errors.push(ValidationError::EmptyDescription);
    }
    if expense.tracker_id.is_empty() {
        errors.push(ValidationError::EmptyTrackerId);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
