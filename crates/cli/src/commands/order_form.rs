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
use async_trait::async_trait;
use clap::{ArgMatches, Command};
use xcart_env::Environment;

use super::command::{CommandDefinition, clients, get_required, order_form_arg, print_json};

pub(crate) struct ItemsCommandDefinition {}

#[async_trait]
impl CommandDefinition for ItemsCommandDefinition {
    fn command(&self) -> Command {
        Command::new("items")
            .about("Print the items of an order form")
            .arg(order_form_arg())
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let order_form: String = get_required(matches, "order-form")?;
        let clients = clients(env.as_ref())?;

        let items = clients.checkout.get_order_form_items(&order_form).await?;

        print_json(&serde_json::to_value(items)?)
    }
}
