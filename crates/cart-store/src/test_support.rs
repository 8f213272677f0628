// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;

use crate::{error::StoreError, store::KeyValueStore};

/// An in-memory [KeyValueStore].
///
/// Missing documents are reported with status 404, like the HTTP store does. Failures queued with
/// [MemoryStore::fail_next] are returned (in order) by the next calls, before any lookup.
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<(String, String), Value>>,
    failures: Mutex<VecDeque<StoreError>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, namespace: &str, key: &str, value: Value) {
        self.files
            .lock()
            .unwrap()
            .insert((namespace.to_string(), key.to_string()), value);
    }

    pub fn get(&self, namespace: &str, key: &str) -> Option<Value> {
        self.files
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
    }

    pub fn fail_next(&self, error: StoreError) {
        self.failures.lock().unwrap().push_back(error);
    }

    fn next_failure(&self) -> Option<StoreError> {
        self.failures.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_json(&self, namespace: &str, key: &str) -> Result<Value, StoreError> {
        if let Some(error) = self.next_failure() {
            return Err(error);
        }

        self.get(namespace, key).ok_or_else(|| {
            StoreError::status(
                StatusCode::NOT_FOUND,
                format!("File {namespace}/{key} not found"),
            )
        })
    }

    async fn save_json(
        &self,
        namespace: &str,
        key: &str,
        value: &Value,
    ) -> Result<(), StoreError> {
        if let Some(error) = self.next_failure() {
            return Err(error);
        }

        self.insert(namespace, key, value.clone());
        Ok(())
    }
}
