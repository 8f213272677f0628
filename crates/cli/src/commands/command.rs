// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use serde_json::Value;
use tracing::debug;
use xcart_env::Environment;
use xcart_resolver::Clients;

#[async_trait]
pub trait CommandDefinition: Send + Sync {
    fn command(&self) -> Command;

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()>;
}

pub struct SubcommandDefinition {
    pub name: &'static str,
    pub about: &'static str,
    pub command_definitions: Vec<Box<dyn CommandDefinition>>,
}

impl SubcommandDefinition {
    pub fn new(
        name: &'static str,
        about: &'static str,
        command_definitions: Vec<Box<dyn CommandDefinition>>,
    ) -> Self {
        Self {
            name,
            about,
            command_definitions,
        }
    }
}

#[async_trait]
impl CommandDefinition for SubcommandDefinition {
    fn command(&self) -> Command {
        Command::new(self.name)
            .about(self.about)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .disable_help_subcommand(true)
            .subcommands(
                self.command_definitions
                    .iter()
                    .map(|command_definition| command_definition.command()),
            )
    }

    async fn execute(&self, matches: &ArgMatches, env: Arc<dyn Environment>) -> Result<()> {
        let (name, sub_matches) = matches
            .subcommand()
            .ok_or_else(|| anyhow!("No subcommand given"))?;

        for command_definition in &self.command_definitions {
            if command_definition.command().get_name() == name {
                debug!(command = name, "running command");
                return command_definition.execute(sub_matches, env).await;
            }
        }

        Err(anyhow!("Unknown subcommand: {}", name))
    }
}

pub fn get_required<T: Clone + Send + Sync + 'static>(
    matches: &ArgMatches,
    arg_id: &str,
) -> Result<T> {
    get(matches, arg_id).ok_or_else(|| anyhow!("Required argument `{}` is not present", arg_id))
}

pub fn get<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, arg_id: &str) -> Option<T> {
    matches.get_one::<T>(arg_id).cloned()
}

/// Clients for the checkout API and the cart store, configured from `env`.
pub fn clients(env: &dyn Environment) -> Result<Clients> {
    Ok(Clients::from_env(env)?)
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn user_arg() -> Arg {
    Arg::new("user")
        .help("The id of the user owning the cross-device cart")
        .long("user")
        .short('u')
        .required(true)
        .num_args(1)
}

pub fn order_form_arg() -> Arg {
    Arg::new("order-form")
        .help("The order form id")
        .long("order-form")
        .required(true)
        .num_args(1)
}
