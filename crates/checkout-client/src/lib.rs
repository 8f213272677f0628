// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Client for the checkout GraphQL API.
//!
//! Every call goes through a [GraphQLTransport] and then through a [ResponseNormalizer], which
//! turns a response carrying GraphQL errors into a [GraphQLOperationError] (even when `data` is
//! also present). Only error-free responses are projected into the typed payloads of [types].

mod client;
mod error;
mod graphql;
mod http_transport;
mod normalizer;
pub mod queries;
mod transport;
pub mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use client::CheckoutClient;
pub use error::{CheckoutError, TransportError};
pub use graphql::{GraphQLError, GraphQLRequest, GraphQLResponse, OperationKind};
pub use http_transport::HttpGraphQLTransport;
pub use normalizer::{GraphQLOperationError, ResponseNormalizer, normalize};
pub use transport::GraphQLTransport;
