// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::graphql::{GraphQLError, GraphQLResponse};

/// A GraphQL operation whose response carried errors.
///
/// `message` identifies the failed operation; `causes` holds the error entries exactly as the
/// server returned them.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct GraphQLOperationError {
    pub message: String,
    pub causes: Vec<GraphQLError>,
}

/// Fails a response that carries GraphQL errors, with a fixed message.
#[derive(Debug, Clone, Copy)]
pub struct ResponseNormalizer {
    message: &'static str,
}

impl ResponseNormalizer {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn classify<T>(
        &self,
        response: Option<GraphQLResponse<T>>,
    ) -> Result<Option<GraphQLResponse<T>>, GraphQLOperationError> {
        normalize(response, self.message)
    }
}

/// Returns the response untouched unless it carries a non-empty `errors` list.
///
/// Partial data does not rescue a response: any error fails the whole operation.
pub fn normalize<T>(
    response: Option<GraphQLResponse<T>>,
    message: &str,
) -> Result<Option<GraphQLResponse<T>>, GraphQLOperationError> {
    match response {
        Some(response) if !response.errors.is_empty() => Err(GraphQLOperationError {
            message: message.to_string(),
            causes: response.errors,
        }),
        response => Ok(response),
    }
}
