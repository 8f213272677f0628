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
use clap::{Arg, ArgMatches, Command};
use serde_json::json;
use xcart_env::Environment;
use xcart_resolver::{GET_X_CART, REPLACE_CART, SAVE_X_CART, Strategy, resolve};

use super::command::{
    CommandDefinition, clients, get, get_required, order_form_arg, print_json, user_arg,
};

pub(crate) struct GetCommandDefinition {}

#[async_trait]
impl CommandDefinition for GetCommandDefinition {
    fn command(&self) -> Command {
        Command::new("get")
            .about("Print the cross-device cart stored for a user")
            .arg(user_arg())
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let user: String = get_required(matches, "user")?;
        let clients = clients(env.as_ref())?;

        let cart = resolve(GET_X_CART, json!({ "userId": user }), &clients).await?;

        print_json(&cart)
    }
}

pub(crate) struct SaveCommandDefinition {}

#[async_trait]
impl CommandDefinition for SaveCommandDefinition {
    fn command(&self) -> Command {
        Command::new("save")
            .about("Remember an order form as the cross-device cart of a user")
            .arg(user_arg())
            .arg(order_form_arg())
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let user: String = get_required(matches, "user")?;
        let order_form: String = get_required(matches, "order-form")?;
        let clients = clients(env.as_ref())?;

        let saved = resolve(
            SAVE_X_CART,
            json!({ "userId": user, "orderFormId": order_form }),
            &clients,
        )
        .await?;

        print_json(&saved)
    }
}

pub(crate) struct ReplaceCommandDefinition {}

#[async_trait]
impl CommandDefinition for ReplaceCommandDefinition {
    fn command(&self) -> Command {
        Command::new("replace")
            .about("Bring the items of a cross-device cart into the current cart")
            .arg(
                Arg::new("current")
                    .help("The order form id of the current cart")
                    .long("current")
                    .required(true)
                    .num_args(1),
            )
            .arg(
                Arg::new("source")
                    .help("The order form id of the cross-device cart")
                    .long("source")
                    .required(true)
                    .num_args(1),
            )
            .arg(
                Arg::new("strategy")
                    .help("How to merge the carts: replace, add or combine. Default: combine")
                    .long("strategy")
                    .short('s')
                    .required(false)
                    .value_parser(clap::value_parser!(Strategy))
                    .num_args(1),
            )
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let current: String = get_required(matches, "current")?;
        let source: String = get_required(matches, "source")?;
        let strategy: Strategy = get(matches, "strategy").unwrap_or_default();
        let clients = clients(env.as_ref())?;

        let order_form = resolve(
            REPLACE_CART,
            json!({ "currentCart": current, "xCart": source, "strategy": strategy }),
            &clients,
        )
        .await?;

        print_json(&order_form)
    }
}
