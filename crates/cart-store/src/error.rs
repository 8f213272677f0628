// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store responded with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to reach the store: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse stored value: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Generic(String),
}

impl StoreError {
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        StoreError::Status {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status reported by the store, if the failure carries one.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            StoreError::Status { status, .. } => Some(*status),
            StoreError::Http(error) => error.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }
}
