// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! GraphQL documents sent to the checkout service.
//!
//! Every document selects its payload under `orderForm` (aliasing the mutation field), so that all
//! call sites project from the same place.

pub const GET_ORDER_FORM_ITEMS: &str = r#"
query getOrderFormItems($orderFormId: ID) {
  orderForm(orderFormId: $orderFormId) {
    items {
      id
      quantity
      seller
      name
      skuName
      price
      sellingPrice
      listPrice
      imageUrl
      detailUrl
      uniqueId
    }
  }
}
"#;

pub const GET_ORDER_FORM: &str = r#"
query getOrderForm($orderFormId: ID) {
  orderForm(orderFormId: $orderFormId) {
    id
    value
    items {
      id
      quantity
      seller
      name
      skuName
      price
      sellingPrice
      listPrice
      imageUrl
      detailUrl
      uniqueId
    }
    totalizers {
      id
      name
      value
    }
  }
}
"#;

/// Lines with an `index` change the existing line at that position; lines without one are added.
pub const UPDATE_CART: &str = r#"
mutation updateCart($orderFormId: ID, $items: [ItemInput]) {
  orderForm: updateItems(orderFormId: $orderFormId, orderItems: $items) {
    id
    value
    items {
      id
      quantity
      seller
      name
      skuName
      price
      sellingPrice
      listPrice
      imageUrl
      detailUrl
      uniqueId
    }
    totalizers {
      id
      name
      value
    }
  }
}
"#;
