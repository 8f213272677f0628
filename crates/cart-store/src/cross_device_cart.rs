// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use crate::{error::StoreError, store::KeyValueStore};

pub const CROSS_DEVICE_CART_NAMESPACE: &str = "vtex.cross-device-cart";

const ORDER_FORM_ID_FIELD: &str = "orderformId";

/// The stored record of a user's cross-device cart, kept exactly as the store returned it.
///
/// Records are normally `{ "orderformId": "..." }`, but nothing is validated: any stored JSON
/// value round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrossDeviceCart(Value);

impl CrossDeviceCart {
    pub fn new(order_form_id: impl Into<String>) -> Self {
        Self(json!({ ORDER_FORM_ID_FIELD: order_form_id.into() }))
    }

    /// The `orderformId` of the record, if it holds a string one.
    pub fn order_form_id(&self) -> Option<&str> {
        self.0.get(ORDER_FORM_ID_FIELD).and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for CrossDeviceCart {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Reads and writes cross-device carts, keyed by user id.
#[derive(Clone)]
pub struct CrossDeviceCartStore {
    store: Arc<dyn KeyValueStore>,
}

impl CrossDeviceCartStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Fetch the cross-device cart of `user_id`.
    ///
    /// Returns `None` when the store reports the record as not found (status 404). Any other
    /// failure is returned exactly as the store produced it.
    #[instrument(name = "CrossDeviceCartStore::lookup_cart", skip(self))]
    pub async fn lookup_cart(&self, user_id: &str) -> Result<Option<CrossDeviceCart>, StoreError> {
        debug!("looking up cross-device cart");

        match self
            .store
            .get_json(CROSS_DEVICE_CART_NAMESPACE, user_id)
            .await
        {
            Ok(value) if value.is_null() => {
                debug!("cross-device cart record is empty");
                Ok(None)
            }
            Ok(value) => {
                let cart = CrossDeviceCart::from(value);
                debug!(order_form_id = ?cart.order_form_id(), "found cross-device cart");
                Ok(Some(cart))
            }
            Err(error) if error.is_not_found() => {
                debug!("no cross-device cart stored");
                Ok(None)
            }
            Err(error) => {
                warn!(%error, "cross-device cart lookup failed");
                Err(error)
            }
        }
    }

    #[instrument(name = "CrossDeviceCartStore::save_cart", skip(self))]
    pub async fn save_cart(&self, user_id: &str, order_form_id: &str) -> Result<(), StoreError> {
        let cart = CrossDeviceCart::new(order_form_id);

        self.store
            .save_json(CROSS_DEVICE_CART_NAMESPACE, user_id, cart.as_value())
            .await
            .inspect_err(|error| warn!(%error, "failed to save cross-device cart"))
    }
}
