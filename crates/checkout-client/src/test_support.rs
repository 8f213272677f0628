// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    error::TransportError,
    graphql::{GraphQLRequest, GraphQLResponse},
    transport::GraphQLTransport,
};

type ScriptedResponse = Result<Option<GraphQLResponse<Value>>, TransportError>;

/// A [GraphQLTransport] that replays queued responses in order and records every request.
///
/// Running out of responses fails the call with [TransportError::Delegate].
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<ScriptedResponse>>,
    requests: Mutex<Vec<(GraphQLRequest, &'static str)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body. Panics if `body` is not a GraphQL response envelope.
    pub fn push_json(&self, body: Value) {
        let response: GraphQLResponse<Value> =
            serde_json::from_value(body).expect("Invalid scripted GraphQL response");
        self.push(Ok(Some(response)));
    }

    pub fn push_none(&self) {
        self.push(Ok(None));
    }

    pub fn push_error(&self, error: TransportError) {
        self.push(Err(error));
    }

    pub fn requests(&self) -> Vec<(GraphQLRequest, &'static str)> {
        self.requests.lock().unwrap().clone()
    }

    fn push(&self, response: ScriptedResponse) {
        self.responses.lock().unwrap().push_back(response);
    }
}

#[async_trait]
impl GraphQLTransport for ScriptedTransport {
    async fn execute(
        &self,
        request: GraphQLRequest,
        metric: &'static str,
    ) -> Result<Option<GraphQLResponse<Value>>, TransportError> {
        self.requests.lock().unwrap().push((request, metric));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Delegate("no scripted response left".into())))
    }
}
