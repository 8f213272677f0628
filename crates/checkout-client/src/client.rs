// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::{
    error::CheckoutError,
    graphql::{GraphQLRequest, GraphQLResponse},
    normalizer::ResponseNormalizer,
    queries,
    transport::GraphQLTransport,
    types::{ItemInput, PartialItem, PartialOrderForm},
};

pub const GET_ORDER_FORM_ITEMS_METRIC: &str = "get-orderform-items";
pub const GET_ORDER_FORM_METRIC: &str = "get-orderform";
pub const UPDATE_CART_METRIC: &str = "update-cart";

const GET_ORDER_FORM_ITEMS: ResponseNormalizer =
    ResponseNormalizer::new("Error getting order form items");
const GET_ORDER_FORM: ResponseNormalizer = ResponseNormalizer::new("Error getting order form");
const UPDATE_CART: ResponseNormalizer = ResponseNormalizer::new("Error updating cart");

/// Typed wrappers around the checkout GraphQL operations.
#[derive(Clone)]
pub struct CheckoutClient {
    transport: Arc<dyn GraphQLTransport>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderFormData<T> {
    order_form: Option<T>,
}

#[derive(Deserialize)]
struct OrderFormItems {
    items: Option<Vec<PartialItem>>,
}

impl CheckoutClient {
    pub fn new(transport: Arc<dyn GraphQLTransport>) -> Self {
        Self { transport }
    }

    #[instrument(name = "CheckoutClient::get_order_form_items", skip(self))]
    pub async fn get_order_form_items(
        &self,
        order_form_id: &str,
    ) -> Result<Vec<PartialItem>, CheckoutError> {
        let request = GraphQLRequest::query(
            queries::GET_ORDER_FORM_ITEMS,
            json!({ "orderFormId": order_form_id }),
        )
        .with_operation_name("getOrderFormItems");

        let response = self
            .transport
            .execute(request, GET_ORDER_FORM_ITEMS_METRIC)
            .await?;
        let response = GET_ORDER_FORM_ITEMS.classify(response)?;

        let items = order_form::<OrderFormItems>(response, "orderForm.items")?
            .items
            .ok_or(CheckoutError::MissingData("orderForm.items"))?;

        debug!(count = items.len(), "fetched order form items");
        Ok(items)
    }

    #[instrument(name = "CheckoutClient::get_order_form", skip(self))]
    pub async fn get_order_form(
        &self,
        order_form_id: &str,
    ) -> Result<PartialOrderForm, CheckoutError> {
        let request = GraphQLRequest::query(
            queries::GET_ORDER_FORM,
            json!({ "orderFormId": order_form_id }),
        )
        .with_operation_name("getOrderForm");

        let response = self
            .transport
            .execute(request, GET_ORDER_FORM_METRIC)
            .await?;
        let response = GET_ORDER_FORM.classify(response)?;

        order_form(response, "orderForm")
    }

    #[instrument(
        name = "CheckoutClient::update_cart",
        skip(self, items),
        fields(item_count = items.len())
    )]
    pub async fn update_cart(
        &self,
        order_form_id: &str,
        items: &[ItemInput],
    ) -> Result<PartialOrderForm, CheckoutError> {
        let request = GraphQLRequest::mutation(
            queries::UPDATE_CART,
            json!({ "orderFormId": order_form_id, "items": items }),
        )
        .with_operation_name("updateCart");

        let response = self.transport.execute(request, UPDATE_CART_METRIC).await?;
        let response = UPDATE_CART.classify(response)?;

        order_form(response, "orderForm")
    }
}

/// Projects an error-free response onto its `orderForm` field.
fn order_form<T: DeserializeOwned>(
    response: Option<GraphQLResponse<Value>>,
    field: &'static str,
) -> Result<T, CheckoutError> {
    let data = response
        .and_then(|response| response.data)
        .ok_or(CheckoutError::MissingData(field))?;

    let data: OrderFormData<T> = serde_json::from_value(data)?;

    data.order_form.ok_or(CheckoutError::MissingData(field))
}
