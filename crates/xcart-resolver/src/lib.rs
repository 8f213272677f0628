// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod clients;
mod error;
mod field_resolver;
mod merge;
mod resolvers;

pub use clients::Clients;
pub use error::{ClientsInitError, ResolverError};
pub use field_resolver::{GET_X_CART, REPLACE_CART, SAVE_X_CART, resolve};
pub use merge::{DEFAULT_SELLER, Strategy, plan_items};
pub use resolvers::{
    GetXCartArgs, ReplaceCartArgs, SaveXCartArgs, get_x_cart, replace_cart, save_x_cart,
};
