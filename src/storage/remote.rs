// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Remote backend: a JSON document API. Each mutator is one blocking
//! round-trip; documents carry a server-assigned `_id` which is mapped onto
//! the record's opaque string id on create.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::models::{Expense, Tracker, TrackerTemplate, UserPreferences};
use crate::storage::{PersistedState, StorageProvider};

const UA: &str = concat!(
    "trackly/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/trackly)"
);

pub fn http_client() -> Result<Client, StorageError> {
    let c = Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Wire shape of a stored document: the record plus the backend's own id.
#[derive(Debug, Deserialize)]
struct Doc<T> {
    #[serde(rename = "_id", default)]
    doc_id: Option<String>,
    #[serde(flatten)]
    record: T,
}

pub struct RemoteStore {
    base: String,
    client: Client,
}

impl RemoteStore {
    pub fn new(base_url: &str) -> Result<RemoteStore, StorageError> {
        Ok(RemoteStore {
            base: base_url.trim_end_matches('/').to_string(),
            client: http_client()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// GET a JSON body; a 404 reads as "nothing stored yet".
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, StorageError> {
        let resp = self.client.get(self.url(path)).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp.error_for_status()?;
        Ok(Some(resp.json()?))
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StorageError> {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()?
            .error_for_status()?;
        Ok(resp.json()?)
    }

    fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), StorageError> {
        self.client
            .put(self.url(path))
            .json(body)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<(), StorageError> {
        let resp = self.client.delete(self.url(path)).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        resp.error_for_status()?;
        Ok(())
    }
}

fn adopt_tracker(doc: Doc<Tracker>) -> Tracker {
    let mut tracker = doc.record;
    if tracker.id.is_empty() {
        if let Some(id) = doc.doc_id {
            tracker.id = id;
        }
    }
    tracker
}

fn adopt_expense(doc: Doc<Expense>) -> Expense {
    let mut expense = doc.record;
    if expense.id.is_empty() {
        if let Some(id) = doc.doc_id {
            expense.id = id;
        }
    }
    expense
}

impl StorageProvider for RemoteStore {
    fn load_all(&self) -> Result<PersistedState, StorageError> {
        let trackers: Vec<Doc<Tracker>> = self.get_json("trackers")?.unwrap_or_default();
        let expenses: Vec<Doc<Expense>> = self.get_json("expenses")?.unwrap_or_default();
        let templates: Vec<TrackerTemplate> = self.get_json("templates")?.unwrap_or_default();
        let preferences: Option<UserPreferences> = self.get_json("preferences")?;
        Ok(PersistedState {
            trackers: trackers.into_iter().map(adopt_tracker).collect(),
            expenses: expenses.into_iter().map(adopt_expense).collect(),
            templates,
            preferences,
        })
    }

    fn insert_tracker(&self, tracker: &Tracker) -> Result<Tracker, StorageError> {
        let doc: Doc<Tracker> = self.post_json("trackers", tracker)?;
        Ok(adopt_tracker(doc))
    }

    fn update_tracker(&self, tracker: &Tracker) -> Result<(), StorageError> {
        self.put_json(&format!("trackers/{}", tracker.id), tracker)
    }

    fn delete_tracker(&self, id: &str) -> Result<(), StorageError> {
        self.delete(&format!("trackers/{}", id))
    }

    fn insert_expense(&self, expense: &Expense) -> Result<Expense, StorageError> {
        let doc: Doc<Expense> = self.post_json("expenses", expense)?;
        Ok(adopt_expense(doc))
    }

    fn update_expense(&self, expense: &Expense) -> Result<(), StorageError> {
        self.put_json(&format!("expenses/{}", expense.id), expense)
    }

    fn delete_expense(&self, id: &str) -> Result<(), StorageError> {
        self.delete(&format!("expenses/{}", id))
    }

    fn delete_expenses_for_tracker(&self, tracker_id: &str) -> Result<(), StorageError> {
        self.delete(&format!("expenses?trackerId={}", tracker_id))
    }

    fn save_templates(&self, templates: &[TrackerTemplate]) -> Result<(), StorageError> {
        self.put_json("templates", &templates)
    }

    fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StorageError> {
        self.put_json("preferences", preferences)
    }

    fn describe(&self) -> String {
        format!("remote document store at {}", self.base)
    }
}
