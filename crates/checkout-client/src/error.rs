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

use crate::normalizer::GraphQLOperationError;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("{0}")]
    Operation(#[from] GraphQLOperationError),

    // The checkout service answered without errors but also without the requested data
    #[error("Checkout response is missing `{0}`")]
    MissingData(&'static str),

    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("Unexpected checkout payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl CheckoutError {
    /// Message that may be shown to the caller of a resolver. Only operation failures reported by
    /// the checkout service qualify; everything else is an internal detail.
    pub fn user_error_message(&self) -> Option<String> {
        match self {
            CheckoutError::Operation(error) => Some(error.message.clone()),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to reach the GraphQL endpoint: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GraphQL endpoint responded with status {0}: {1}")]
    Status(StatusCode, String),

    #[error("Failed to encode or decode a GraphQL payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Delegate(#[source] Box<dyn std::error::Error + Send + Sync>),
}
