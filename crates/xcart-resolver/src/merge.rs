// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{collections::HashSet, fmt, str::FromStr};

use checkout_client::types::{ItemInput, PartialItem};
use serde::{Deserialize, Serialize};

/// Seller id of the store itself, used for lines that don't name a seller.
pub const DEFAULT_SELLER: &str = "1";

/// How the items of a cross-device cart are brought into the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    /// Empty the current cart, then add every cross-device item
    Replace,
    /// Add every cross-device item, keeping the current lines
    Add,
    /// Add the cross-device items the current cart doesn't already have
    #[default]
    Combine,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "replace" => Ok(Strategy::Replace),
            "add" => Ok(Strategy::Add),
            "combine" => Ok(Strategy::Combine),
            _ => Err(format!(
                "Invalid strategy `{s}`. Expected one of replace, add, combine"
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Replace => "replace",
            Strategy::Add => "add",
            Strategy::Combine => "combine",
        };
        f.write_str(name)
    }
}

/// The cart mutation lines that apply `strategy` to `current` with the items of `source`.
///
/// An empty result means there is nothing to change.
pub fn plan_items(
    current: &[PartialItem],
    source: &[PartialItem],
    strategy: Strategy,
) -> Vec<ItemInput> {
    match strategy {
        Strategy::Replace => current
            .iter()
            .enumerate()
            .map(|(index, item)| {
                ItemInput::new(item.id.clone(), 0, seller_of(item)).at_index(index)
            })
            .chain(source.iter().map(to_input))
            .collect(),
        Strategy::Add => source.iter().map(to_input).collect(),
        Strategy::Combine => {
            let present: HashSet<(&str, &str)> = current
                .iter()
                .map(|item| (item.id.as_str(), seller_of(item)))
                .collect();

            source
                .iter()
                .filter(|&item| !present.contains(&(item.id.as_str(), seller_of(item))))
                .map(to_input)
                .collect()
        }
    }
}

fn seller_of(item: &PartialItem) -> &str {
    item.seller.as_deref().unwrap_or(DEFAULT_SELLER)
}

fn to_input(item: &PartialItem) -> ItemInput {
    ItemInput::new(item.id.clone(), item.quantity.unwrap_or(1), seller_of(item))
}
