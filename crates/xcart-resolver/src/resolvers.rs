// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use cart_store::CrossDeviceCart;
use checkout_client::types::PartialOrderForm;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    clients::Clients,
    error::ResolverError,
    merge::{Strategy, plan_items},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetXCartArgs {
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveXCartArgs {
    pub user_id: String,
    pub order_form_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceCartArgs {
    pub current_cart: String,
    pub x_cart: String,
    #[serde(default)]
    pub strategy: Option<Strategy>,
}

/// The cross-device cart of a user, or `None` if the user has none stored.
#[instrument(name = "resolvers::get_x_cart", skip(clients))]
pub async fn get_x_cart(
    args: GetXCartArgs,
    clients: &Clients,
) -> Result<Option<CrossDeviceCart>, ResolverError> {
    Ok(clients.carts.lookup_cart(&args.user_id).await?)
}

#[instrument(name = "resolvers::save_x_cart", skip(clients))]
pub async fn save_x_cart(args: SaveXCartArgs, clients: &Clients) -> Result<bool, ResolverError> {
    clients
        .carts
        .save_cart(&args.user_id, &args.order_form_id)
        .await?;

    Ok(true)
}

/// Bring the items of the cross-device cart `x_cart` into `current_cart`.
#[instrument(name = "resolvers::replace_cart", skip(clients))]
pub async fn replace_cart(
    args: ReplaceCartArgs,
    clients: &Clients,
) -> Result<PartialOrderForm, ResolverError> {
    let ReplaceCartArgs {
        current_cart,
        x_cart,
        strategy,
    } = args;
    let strategy = strategy.unwrap_or_default();

    if current_cart == x_cart {
        debug!("cross-device cart is the current cart");
        return Ok(clients.checkout.get_order_form(&current_cart).await?);
    }

    let source = clients.checkout.get_order_form_items(&x_cart).await?;

    let current = match strategy {
        Strategy::Add => vec![],
        Strategy::Replace | Strategy::Combine => {
            clients.checkout.get_order_form_items(&current_cart).await?
        }
    };

    let items = plan_items(&current, &source, strategy);

    if items.is_empty() {
        debug!("nothing to merge");
        return Ok(clients.checkout.get_order_form(&current_cart).await?);
    }

    Ok(clients.checkout.update_cart(&current_cart, &items).await?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use cart_store::{
        CROSS_DEVICE_CART_NAMESPACE, CrossDeviceCartStore, StoreError, test_support::MemoryStore,
    };
    use checkout_client::{
        CheckoutClient, CheckoutError, OperationKind, test_support::ScriptedTransport,
    };
    use http::StatusCode;
    use serde_json::json;

    fn clients(transport: &Arc<ScriptedTransport>, store: &Arc<MemoryStore>) -> Clients {
        Clients::new(
            CheckoutClient::new(transport.clone()),
            CrossDeviceCartStore::new(store.clone()),
        )
    }

    fn fixtures() -> (Arc<ScriptedTransport>, Arc<MemoryStore>) {
        (Arc::new(ScriptedTransport::new()), Arc::new(MemoryStore::new()))
    }

    fn replace_args(strategy: Option<Strategy>) -> ReplaceCartArgs {
        ReplaceCartArgs {
            current_cart: "of-current".to_string(),
            x_cart: "of-x".to_string(),
            strategy,
        }
    }

    #[tokio::test]
    async fn get_x_cart_found() {
        let (transport, store) = fixtures();
        store.insert(
            CROSS_DEVICE_CART_NAMESPACE,
            "user-42",
            json!({ "orderformId": "of-x" }),
        );

        let cart = get_x_cart(
            GetXCartArgs {
                user_id: "user-42".to_string(),
            },
            &clients(&transport, &store),
        )
        .await
        .unwrap();

        assert_eq!(cart.unwrap().order_form_id(), Some("of-x"));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn get_x_cart_not_found() {
        let (transport, store) = fixtures();
        store.fail_next(StoreError::status(StatusCode::NOT_FOUND, "not found"));

        let cart = get_x_cart(
            GetXCartArgs {
                user_id: "user-42".to_string(),
            },
            &clients(&transport, &store),
        )
        .await
        .unwrap();

        assert_eq!(cart, None);
    }

    #[tokio::test]
    async fn get_x_cart_failure() {
        let (transport, store) = fixtures();
        store.fail_next(StoreError::status(StatusCode::INTERNAL_SERVER_ERROR, "down"));

        let error = get_x_cart(
            GetXCartArgs {
                user_id: "user-42".to_string(),
            },
            &clients(&transport, &store),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            error,
            ResolverError::Store(StoreError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn save_x_cart_writes_record() {
        let (transport, store) = fixtures();

        let saved = save_x_cart(
            SaveXCartArgs {
                user_id: "user-42".to_string(),
                order_form_id: "of-x".to_string(),
            },
            &clients(&transport, &store),
        )
        .await
        .unwrap();

        assert!(saved);
        assert_eq!(
            store.get(CROSS_DEVICE_CART_NAMESPACE, "user-42"),
            Some(json!({ "orderformId": "of-x" }))
        );
    }

    #[tokio::test]
    async fn replace_cart_combines_by_default() {
        let (transport, store) = fixtures();
        transport.push_json(json!({
            "data": { "orderForm": { "items": [
                { "id": "sku1", "quantity": 1, "seller": "1" },
                { "id": "sku2", "quantity": 2, "seller": "1" }
            ] } }
        }));
        transport.push_json(json!({
            "data": { "orderForm": { "items": [{ "id": "sku1", "quantity": 4, "seller": "1" }] } }
        }));
        transport.push_json(json!({
            "data": { "orderForm": { "id": "of-current", "items": [
                { "id": "sku1", "quantity": 4 },
                { "id": "sku2", "quantity": 2 }
            ] } }
        }));

        let order_form = replace_cart(replace_args(None), &clients(&transport, &store))
            .await
            .unwrap();

        assert_eq!(order_form.items.len(), 2);

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].0.variables, json!({ "orderFormId": "of-x" }));
        assert_eq!(
            requests[1].0.variables,
            json!({ "orderFormId": "of-current" })
        );
        assert_eq!(requests[2].0.kind, OperationKind::Mutation);
        assert_eq!(
            requests[2].0.variables,
            json!({
                "orderFormId": "of-current",
                "items": [{ "id": "sku2", "quantity": 2, "seller": "1" }]
            })
        );
    }

    #[tokio::test]
    async fn replace_cart_add_skips_current_items() {
        let (transport, store) = fixtures();
        transport.push_json(json!({
            "data": { "orderForm": { "items": [{ "id": "sku1", "quantity": 1, "seller": "1" }] } }
        }));
        transport.push_json(json!({
            "data": { "orderForm": { "id": "of-current", "items": [{ "id": "sku1" }] } }
        }));

        replace_cart(
            replace_args(Some(Strategy::Add)),
            &clients(&transport, &store),
        )
        .await
        .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].0.kind, OperationKind::Mutation);
    }

    #[tokio::test]
    async fn replace_cart_with_nothing_to_merge() {
        let (transport, store) = fixtures();
        transport.push_json(json!({ "data": { "orderForm": { "items": [] } } }));
        transport.push_json(json!({
            "data": { "orderForm": { "items": [{ "id": "sku1", "quantity": 1, "seller": "1" }] } }
        }));
        transport.push_json(json!({
            "data": { "orderForm": { "id": "of-current", "items": [{ "id": "sku1" }] } }
        }));

        let order_form = replace_cart(replace_args(None), &clients(&transport, &store))
            .await
            .unwrap();

        assert_eq!(order_form.id, "of-current");
        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert!(
            requests
                .iter()
                .all(|(request, _)| request.kind == OperationKind::Query)
        );
    }

    #[tokio::test]
    async fn replace_cart_same_cart_is_noop() {
        let (transport, store) = fixtures();
        transport.push_json(json!({
            "data": { "orderForm": { "id": "of-x", "items": [] } }
        }));

        let order_form = replace_cart(
            ReplaceCartArgs {
                current_cart: "of-x".to_string(),
                x_cart: "of-x".to_string(),
                strategy: Some(Strategy::Replace),
            },
            &clients(&transport, &store),
        )
        .await
        .unwrap();

        assert_eq!(order_form.id, "of-x");
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn replace_cart_propagates_classified_errors() {
        let (transport, store) = fixtures();
        transport.push_json(json!({
            "data": null,
            "errors": [{ "message": "order form not found" }]
        }));

        let error = replace_cart(replace_args(None), &clients(&transport, &store))
            .await
            .unwrap_err();

        match error {
            ResolverError::Checkout(CheckoutError::Operation(error)) => {
                assert_eq!(error.message, "Error getting order form items");
                assert_eq!(error.causes[0].message, "order form not found");
            }
            other => panic!("expected an operation error, got {other:?}"),
        }
    }
}
