// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::instrument;

use crate::{
    clients::Clients,
    error::ResolverError,
    resolvers::{get_x_cart, replace_cart, save_x_cart},
};

pub const GET_X_CART: &str = "getXCart";
pub const SAVE_X_CART: &str = "saveXCart";
pub const REPLACE_CART: &str = "replaceCart";

/// Resolve a single GraphQL field by name, taking its arguments as a JSON object.
///
/// Unknown fields are rejected with [ResolverError::InvalidField].
#[instrument(name = "field_resolver::resolve", skip(args, clients))]
pub async fn resolve(
    field_name: &str,
    args: Value,
    clients: &Clients,
) -> Result<Value, ResolverError> {
    match field_name {
        GET_X_CART => to_json(get_x_cart(parse_args(field_name, args)?, clients).await?),
        SAVE_X_CART => to_json(save_x_cart(parse_args(field_name, args)?, clients).await?),
        REPLACE_CART => to_json(replace_cart(parse_args(field_name, args)?, clients).await?),
        _ => Err(ResolverError::InvalidField(field_name.to_string())),
    }
}

fn parse_args<T: DeserializeOwned>(field_name: &str, args: Value) -> Result<T, ResolverError> {
    serde_json::from_value(args).map_err(|source| ResolverError::InvalidArguments {
        field: field_name.to_string(),
        source,
    })
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ResolverError> {
    serde_json::to_value(value).map_err(ResolverError::Serialization)
}
