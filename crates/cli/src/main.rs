// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use anyhow::Result;
use common::logging_tracing;
use xcart_env::SystemEnvironment;

use commands::{
    cart::{GetCommandDefinition, ReplaceCommandDefinition, SaveCommandDefinition},
    command::{CommandDefinition, SubcommandDefinition},
    order_form::ItemsCommandDefinition,
};

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    logging_tracing::init()?;

    let subcommand_definition = SubcommandDefinition::new(
        "xcart",
        "Inspect and move cross-device carts",
        vec![
            Box::new(GetCommandDefinition {}),
            Box::new(SaveCommandDefinition {}),
            Box::new(ItemsCommandDefinition {}),
            Box::new(ReplaceCommandDefinition {}),
        ],
    );

    let command = subcommand_definition
        .command()
        .version(env!("CARGO_PKG_VERSION"));

    let matches = command.get_matches();

    subcommand_definition
        .execute(&matches, Arc::new(SystemEnvironment))
        .await
}
