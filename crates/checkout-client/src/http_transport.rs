// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    error::TransportError,
    graphql::{GraphQLRequest, GraphQLResponse},
    transport::GraphQLTransport,
};

pub(crate) const AUTH_TOKEN_HEADER: &str = "VtexIdclientAutCookie";
pub(crate) const METRIC_HEADER: &str = "x-vtex-metric";

/// [GraphQLTransport] posting requests to a GraphQL endpoint over HTTP.
///
/// Performs a single attempt per call. A non-2xx status is reported as
/// [TransportError::Status] with the response body as the message.
pub struct HttpGraphQLTransport {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpGraphQLTransport {
    pub fn new(
        endpoint: impl Into<String>,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphQLTransport for HttpGraphQLTransport {
    #[instrument(
        name = "HttpGraphQLTransport::execute",
        skip(self, request),
        fields(endpoint = %self.endpoint, kind = ?request.kind)
    )]
    async fn execute(
        &self,
        request: GraphQLRequest,
        metric: &'static str,
    ) -> Result<Option<GraphQLResponse<Value>>, TransportError> {
        let body = serde_json::to_vec(&request)?;

        let mut http_request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(METRIC_HEADER, metric)
            .body(body);

        if let Some(token) = &self.auth_token {
            http_request = http_request.header(AUTH_TOKEN_HEADER, token.as_str());
        }

        let response = http_request.send().await?;
        let status = response.status();
        let response_bytes = response.bytes().await?;

        debug!(%status, length = response_bytes.len(), "received GraphQL response");

        if !status.is_success() {
            return Err(TransportError::Status(
                status,
                String::from_utf8_lossy(&response_bytes).into_owned(),
            ));
        }

        parse_response(&response_bytes)
    }
}

fn parse_response(bytes: &[u8]) -> Result<Option<GraphQLResponse<Value>>, TransportError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    Ok(serde_json::from_slice(bytes)?)
}
