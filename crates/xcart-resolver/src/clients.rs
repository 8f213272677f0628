// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use cart_store::{CrossDeviceCartStore, HttpKeyValueStore};
use checkout_client::{CheckoutClient, HttpGraphQLTransport};
use common::env_const::{
    get_auth_token, get_checkout_graphql_url, get_request_timeout, get_store_url,
};
use tracing::debug;
use xcart_env::Environment;

use crate::error::ClientsInitError;

/// The backing clients available to every resolver.
#[derive(Clone)]
pub struct Clients {
    pub checkout: CheckoutClient,
    pub carts: CrossDeviceCartStore,
}

impl Clients {
    pub fn new(checkout: CheckoutClient, carts: CrossDeviceCartStore) -> Self {
        Self { checkout, carts }
    }

    /// Create HTTP-backed clients from `XCART_*` configuration.
    pub fn from_env(env: &dyn Environment) -> Result<Self, ClientsInitError> {
        let auth_token = get_auth_token(env);
        let timeout = get_request_timeout(env)?;

        let checkout_url = get_checkout_graphql_url(env)?;
        let store_url = get_store_url(env)?;

        debug!(%checkout_url, %store_url, ?timeout, "creating clients");

        let transport = HttpGraphQLTransport::new(checkout_url, auth_token.clone(), timeout)?;
        let store = HttpKeyValueStore::new(&store_url, auth_token, timeout)?;

        Ok(Self::new(
            CheckoutClient::new(Arc::new(transport)),
            CrossDeviceCartStore::new(Arc::new(store)),
        ))
    }
}
