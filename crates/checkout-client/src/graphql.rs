// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A GraphQL-over-HTTP request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    #[serde(skip)]
    pub kind: OperationKind,
    pub query: &'static str,
    pub variables: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'static str>,
}

impl GraphQLRequest {
    pub fn query(query: &'static str, variables: Value) -> Self {
        Self {
            kind: OperationKind::Query,
            query,
            variables,
            operation_name: None,
        }
    }

    pub fn mutation(query: &'static str, variables: Value) -> Self {
        Self {
            kind: OperationKind::Mutation,
            query,
            variables,
            operation_name: None,
        }
    }

    pub fn with_operation_name(mut self, operation_name: &'static str) -> Self {
        self.operation_name = Some(operation_name);
        self
    }
}

/// Standard GraphQL response envelope.
///
/// A non-empty `errors` list means the operation (partially) failed, regardless of `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub errors: Vec<GraphQLError>,
}

/// An entry of a GraphQL `errors` list. Carried verbatim to callers for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<GraphQLError>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<GraphQLError>>::deserialize(deserializer)?.unwrap_or_default())
}
