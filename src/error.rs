// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Boundary validation failure. Produced by `validate` before a store
/// mutator runs; mutators themselves do not re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("tracker name must not be empty")]
    EmptyTrackerName,
    #[error("duplicate custom field '{0}'")]
    DuplicateCustomField(String),
    #[error("budget limit must not be negative")]
    NegativeBudgetLimit,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("an expense must reference a tracker")]
    EmptyTrackerId,
}

/// Persistence read/write failure. Logged and propagated; never retried.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Backend(String),
}

/// Store-level failure surfaced to callers of `ExpenseStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is not initialized; call initialize() first")]
    NotInitialized,
    #[error("no {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: &str) -> StoreError {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
