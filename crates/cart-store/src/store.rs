// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// JSON documents addressed by a namespace and a key.
///
/// A missing document must be reported as a [StoreError] whose
/// [status_code](StoreError::status_code) is `404`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_json(&self, namespace: &str, key: &str) -> Result<Value, StoreError>;

    async fn save_json(&self, namespace: &str, key: &str, value: &Value)
    -> Result<(), StoreError>;
}

#[async_trait]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get_json(&self, namespace: &str, key: &str) -> Result<Value, StoreError> {
        (**self).get_json(namespace, key).await
    }

    async fn save_json(
        &self,
        namespace: &str,
        key: &str,
        value: &Value,
    ) -> Result<(), StoreError> {
        (**self).save_json(namespace, key, value).await
    }
}
