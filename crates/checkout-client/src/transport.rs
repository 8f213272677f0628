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

use crate::{
    error::TransportError,
    graphql::{GraphQLRequest, GraphQLResponse},
};

/// Executes GraphQL requests against the checkout service.
///
/// Implementations own retries and backoff, if any. The `metric` tag names the operation for
/// observability only and must not change the outcome of a call.
///
/// A response body of `null` is reported as `Ok(None)`; the caller decides what an absent
/// response means.
#[async_trait]
pub trait GraphQLTransport: Send + Sync {
    async fn execute(
        &self,
        request: GraphQLRequest,
        metric: &'static str,
    ) -> Result<Option<GraphQLResponse<Value>>, TransportError>;
}

#[async_trait]
impl<T: GraphQLTransport + ?Sized> GraphQLTransport for Arc<T> {
    async fn execute(
        &self,
        request: GraphQLRequest,
        metric: &'static str,
    ) -> Result<Option<GraphQLResponse<Value>>, TransportError> {
        (**self).execute(request, metric).await
    }
}
