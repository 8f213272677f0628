// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::{error::StoreError, store::KeyValueStore};

const AUTH_TOKEN_HEADER: &str = "VtexIdclientAutCookie";

/// [KeyValueStore] over a bucket/file HTTP API.
///
/// Documents live at `{base_url}/buckets/{namespace}/files/{key}`; both path segments are
/// percent-encoded. Non-2xx responses become [StoreError::Status] so that a 404 can be told apart
/// from other failures.
pub struct HttpKeyValueStore {
    client: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl HttpKeyValueStore {
    pub fn new(
        base_url: &str,
        auth_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::Generic(format!(
                "Store URL {base_url} cannot be used as a base URL"
            )));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            auth_token,
        })
    }

    fn file_url(&self, namespace: &str, key: &str) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Generic(format!("Invalid store URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(["buckets", namespace, "files", key]);
        Ok(url)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => request.header(AUTH_TOKEN_HEADER, token.as_str()),
            None => request,
        }
    }
}

#[async_trait]
impl KeyValueStore for HttpKeyValueStore {
    #[instrument(name = "HttpKeyValueStore::get_json", skip(self))]
    async fn get_json(&self, namespace: &str, key: &str) -> Result<Value, StoreError> {
        let url = self.file_url(namespace, key)?;

        let response = self.with_auth(self.client.get(url)).send().await?;
        let status = response.status();
        let response_bytes = response.bytes().await?;

        debug!(%status, length = response_bytes.len(), "store responded");

        if !status.is_success() {
            return Err(StoreError::status(
                status,
                String::from_utf8_lossy(&response_bytes),
            ));
        }

        Ok(serde_json::from_slice(&response_bytes)?)
    }

    #[instrument(name = "HttpKeyValueStore::save_json", skip(self, value))]
    async fn save_json(
        &self,
        namespace: &str,
        key: &str,
        value: &Value,
    ) -> Result<(), StoreError> {
        let url = self.file_url(namespace, key)?;
        let body = serde_json::to_vec(value)?;

        let response = self
            .with_auth(self.client.put(url))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let status = response.status();

        debug!(%status, "store responded");

        let response_bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(StoreError::status(
                status,
                String::from_utf8_lossy(&response_bytes),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CROSS_DEVICE_CART_NAMESPACE, CrossDeviceCartStore};
    use common::test_support::serve_once;
    use http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    fn store(base_url: &str) -> HttpKeyValueStore {
        HttpKeyValueStore::new(base_url, None, Duration::from_secs(1)).unwrap()
    }

    #[tokio::test]
    async fn get_json_reads_the_file() {
        let (base_url, server) = serve_once(200, r#"{"orderformId":"of-1"}"#).await;
        let store = HttpKeyValueStore::new(
            &base_url,
            Some("token-1".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();

        let value = store
            .get_json(CROSS_DEVICE_CART_NAMESPACE, "user-42")
            .await
            .unwrap();

        assert_eq!(value, json!({ "orderformId": "of-1" }));

        let request = server.await.unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(
            request.path,
            "/buckets/vtex.cross-device-cart/files/user-42"
        );
        assert_eq!(request.header(AUTH_TOKEN_HEADER), Some("token-1"));
    }

    #[tokio::test]
    async fn missing_file_is_a_404_status() {
        let (base_url, server) = serve_once(404, "File not found").await;

        let error = store(&base_url)
            .get_json(CROSS_DEVICE_CART_NAMESPACE, "user-42")
            .await
            .unwrap_err();

        match &error {
            StoreError::Status { status, message } => {
                assert_eq!(*status, StatusCode::NOT_FOUND);
                assert_eq!(message, "File not found");
            }
            other => panic!("expected a status error, got {other:?}"),
        }
        assert!(error.is_not_found());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn lookup_over_http_maps_404_to_absence() {
        let (base_url, server) = serve_once(404, "File not found").await;
        let carts = CrossDeviceCartStore::new(Arc::new(store(&base_url)));

        assert_eq!(carts.lookup_cart("user-42").await.unwrap(), None);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn lookup_over_http_propagates_server_errors() {
        let (base_url, server) = serve_once(500, "vbase is down").await;
        let carts = CrossDeviceCartStore::new(Arc::new(store(&base_url)));

        let error = carts.lookup_cart("user-42").await.unwrap_err();

        assert_eq!(error.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(matches!(error, StoreError::Status { ref message, .. } if message == "vbase is down"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn save_json_puts_the_file() {
        let (base_url, server) = serve_once(204, "").await;

        store(&base_url)
            .save_json(
                CROSS_DEVICE_CART_NAMESPACE,
                "user-42",
                &json!({ "orderformId": "of-2" }),
            )
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert_eq!(request.method, "PUT");
        assert_eq!(
            request.path,
            "/buckets/vtex.cross-device-cart/files/user-42"
        );
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(
            serde_json::from_str::<Value>(&request.body).unwrap(),
            json!({ "orderformId": "of-2" })
        );
    }

    #[tokio::test]
    async fn save_json_reports_failure_status_and_body() {
        let (base_url, server) = serve_once(404, "no such bucket").await;

        let error = store(&base_url)
            .save_json(CROSS_DEVICE_CART_NAMESPACE, "user-42", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            StoreError::Status { status: StatusCode::NOT_FOUND, ref message } if message == "no such bucket"
        ));
        server.await.unwrap();
    }

    #[test]
    fn file_urls() {
        let url = store("http://vbase.local/acme/master")
            .file_url("vtex.cross-device-cart", "user-42")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://vbase.local/acme/master/buckets/vtex.cross-device-cart/files/user-42"
        );
    }

    #[test]
    fn file_urls_with_trailing_slash() {
        let url = store("http://vbase.local/acme/master/")
            .file_url("vtex.cross-device-cart", "user-42")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://vbase.local/acme/master/buckets/vtex.cross-device-cart/files/user-42"
        );
    }

    #[test]
    fn keys_are_percent_encoded() {
        let url = store("http://vbase.local")
            .file_url("vtex.cross-device-cart", "user/42 x")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://vbase.local/buckets/vtex.cross-device-cart/files/user%2F42%20x"
        );
    }

    #[test]
    fn invalid_base_urls() {
        assert!(matches!(
            HttpKeyValueStore::new("not a url", None, Duration::from_secs(1)),
            Err(StoreError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpKeyValueStore::new("mailto:someone@example.com", None, Duration::from_secs(1)),
            Err(StoreError::Generic(_))
        ));
    }
}
