// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// A cart line as selected by the queries in [crate::queries]. Fields the service leaves out are
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
}

impl PartialItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quantity: None,
            seller: None,
            name: None,
            sku_name: None,
            price: None,
            selling_price: None,
            list_price: None,
            image_url: None,
            detail_url: None,
            unique_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialOrderForm {
    pub id: String,
    #[serde(default)]
    pub items: Vec<PartialItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totalizers: Option<Vec<Totalizer>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totalizer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: f64,
}

/// A line sent to the cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub id: String,
    pub quantity: u32,
    pub seller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl ItemInput {
    pub fn new(id: impl Into<String>, quantity: u32, seller: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quantity,
            seller: seller.into(),
            index: None,
        }
    }

    /// Targets the existing cart line at `index`.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}
