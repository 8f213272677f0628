// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use xcart_env::{EnvError, Environment};

pub const XCART_CHECKOUT_GRAPHQL_URL: &str = "XCART_CHECKOUT_GRAPHQL_URL";
pub const XCART_STORE_URL: &str = "XCART_STORE_URL";
pub const XCART_AUTH_TOKEN: &str = "XCART_AUTH_TOKEN";
pub const XCART_REQUEST_TIMEOUT_SECS: &str = "XCART_REQUEST_TIMEOUT_SECS";

pub const XCART_LOG: &str = "XCART_LOG";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub fn get_checkout_graphql_url(env: &dyn Environment) -> Result<String, EnvError> {
    env.get_required(XCART_CHECKOUT_GRAPHQL_URL)
}

pub fn get_store_url(env: &dyn Environment) -> Result<String, EnvError> {
    env.get_required(XCART_STORE_URL)
        .map(|url| url.trim_end_matches('/').to_string())
}

pub fn get_auth_token(env: &dyn Environment) -> Option<String> {
    env.get(XCART_AUTH_TOKEN).filter(|token| !token.is_empty())
}

pub fn get_request_timeout(env: &dyn Environment) -> Result<Duration, EnvError> {
    xcart_env::get_number(
        env,
        XCART_REQUEST_TIMEOUT_SECS,
        DEFAULT_REQUEST_TIMEOUT_SECS,
    )
    .map(Duration::from_secs)
}
