// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Tracing configuration setup.
//!
//! The checkout client, the cart store and the resolvers are instrumented with Rust's `tracing`
//! framework.
//!
//! Calling the `init` function will initialize a global tracing subscriber based on the value of
//! the `XCART_LOG` environment variable which follows the same conventions as `RUST_LOG`. Output
//! goes to stderr so that commands printing JSON on stdout stay machine readable.
//!
//! ```shell
//! $ XCART_LOG=checkout_client=debug,cart_store=debug xcart get --user user-42
//! ```

use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

use crate::env_const::XCART_LOG;

/// Initialize the tracing subscriber.
///
/// Creates a compact `tracing_subscriber::fmt` layer filtered by `XCART_LOG` (`warn` when unset).
pub fn init() -> Result<(), TracingInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(XCART_LOG)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[derive(Error, Debug)]
pub enum TracingInitError {
    #[error("Failed to install the tracing subscriber: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}
