//! HTTP transport for the order service.
//!
//! ## Routes
//!
//! - `POST {base}/create-order` with a [`CreateOrderRequest`] body.
//! - `GET {base}/get-order?order_id=<id>` returning an [`Order`].
//!
//! The client does no field-level validation on lookups; that is the
//! caller's job. `create_order` is the exception: the service acknowledges
//! creation with a fixed status code and message, and anything else fails.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::constants::{routes, status_code, ORDER_CREATED_MESSAGE};
use crate::error::HarnessError;
use crate::order::{CreateOrderRequest, CreateOrderResponse, FaultFlags, Order};

/// Thin async client for the order service.
#[derive(Debug, Clone)]
pub struct OrderClient {
    http: reqwest::Client,
    base_url: String,
}

impl OrderClient {
    /// Create a client for the service at `base_url` (e.g. `"http://localhost"`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, HarnessError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(http, base_url))
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route)
    }

    /// `POST /create-order`. Fails unless the service answers 201 with
    /// `{"message": "Order created"}`.
    pub async fn create_order(
        &self,
        num_tokens: u64,
        faults: FaultFlags,
    ) -> Result<CreateOrderResponse, HarnessError> {
        let request = CreateOrderRequest::new(num_tokens, faults);
        debug!(num_tokens, ?faults, "POST {}", routes::CREATE_ORDER);

        let response = self
            .http
            .post(self.url(routes::CREATE_ORDER))
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != status_code::CREATED {
            return Err(HarnessError::UnexpectedStatus {
                endpoint: routes::CREATE_ORDER,
                expected: status_code::CREATED,
                actual: status,
            });
        }

        let body: CreateOrderResponse = decode(routes::CREATE_ORDER, response).await?;
        if body.message != ORDER_CREATED_MESSAGE {
            return Err(HarnessError::UnexpectedMessage {
                expected: ORDER_CREATED_MESSAGE.to_string(),
                actual: body.message,
            });
        }

        Ok(body)
    }

    /// `GET /get-order?order_id=<id>`. Only decodes the body; the status code
    /// and field values are left to the caller.
    pub async fn get_order(&self, order_id: u64) -> Result<Order, HarnessError> {
        debug!(order_id, "GET {}", routes::GET_ORDER);

        let response = self
            .http
            .get(self.url(routes::GET_ORDER))
            .query(&[("order_id", order_id)])
            .send()
            .await?;

        decode(routes::GET_ORDER, response).await
    }
}

async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<T, HarnessError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| HarnessError::Decode {
        endpoint,
        message: format!("{} (body: {})", e, String::from_utf8_lossy(&bytes)),
    })
}
