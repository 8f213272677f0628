// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Storage of cross-device carts: a mapping from a user id to the id of the order form the user
//! last worked on, kept in a key-value store.
//!
//! A missing record is a normal outcome ([CrossDeviceCartStore::lookup_cart] returns `None`), not
//! an error. Every other store failure reaches the caller untouched.

mod cross_device_cart;
mod error;
mod http_store;
mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cross_device_cart::{CROSS_DEVICE_CART_NAMESPACE, CrossDeviceCart, CrossDeviceCartStore};
pub use error::StoreError;
pub use http_store::HttpKeyValueStore;
pub use store::KeyValueStore;
