// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use cart_store::StoreError;
use checkout_client::{CheckoutError, TransportError};
use thiserror::Error;
use xcart_env::EnvError;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Invalid field {0}")]
    InvalidField(String),

    #[error("Invalid arguments for {field}: {source}")]
    InvalidArguments {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize the result: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl ResolverError {
    // Message that should be emitted when the error is returned to the user.
    // This should hide any internal details of the error.
    pub fn user_error_message(&self) -> String {
        self.explicit_message()
            .unwrap_or_else(|| "Internal server error".to_string())
    }

    pub fn explicit_message(&self) -> Option<String> {
        match self {
            ResolverError::Checkout(error) => error.user_error_message(),
            ResolverError::InvalidField(_) | ResolverError::InvalidArguments { .. } => {
                Some(self.to_string())
            }
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientsInitError {
    #[error("{0}")]
    Env(#[from] EnvError),

    #[error("Failed to create the checkout transport: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to create the cart store: {0}")]
    Store(#[from] StoreError),
}
