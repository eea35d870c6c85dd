//! Typed HTTP client for the Cashfree PG API.
//!
//! Every call attaches the API version plus the merchant credentials
//! and performs exactly one request/response exchange: no retries, no
//! circuit breaking. Only the fetch-order path carries an explicit
//! deadline; the other calls rely on the transport's defaults.

use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::error::GatewayError;
use crate::objects::{CreateOrderResponse, OrderDetails, OrderRequest, RefundRequest};

/// API version sent with every request. Cashfree rejects calls whose
/// version does not match what the endpoint family expects.
pub const API_VERSION: &str = "2023-08-01";

pub const API_VERSION_HEADER: &str = "x-api-version";
pub const CLIENT_ID_HEADER: &str = "x-client-id";
pub const CLIENT_SECRET_HEADER: &str = "x-client-secret";

/// Deadline for order status lookups.
const FETCH_ORDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Which Cashfree host to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

/// The `CASHFREE_ENVIRONMENT` value was neither `sandbox` nor
/// `production`.
#[derive(Debug, thiserror::Error)]
#[error("unknown gateway environment: {0:?} (expected \"sandbox\" or \"production\")")]
pub struct UnknownEnvironment(pub String);

impl Environment {
    /// Root URL of the gateway host for this environment.
    pub fn base_url(self) -> Url {
        let host = match self {
            Environment::Sandbox => "https://sandbox.cashfree.com",
            Environment::Production => "https://api.cashfree.com",
        };
        Url::parse(host).expect("valid gateway host url")
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sandbox") {
            Ok(Environment::Sandbox)
        } else if s.eq_ignore_ascii_case("production") {
            Ok(Environment::Production)
        } else {
            Err(UnknownEnvironment(s.to_owned()))
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Sandbox => f.write_str("sandbox"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Typed HTTP client for the Cashfree **PG API**.
///
/// Authentication uses the merchant's client id and secret sent as
/// plain headers on every request, alongside the pinned
/// [`API_VERSION`].
#[derive(Debug, Clone)]
pub struct CashfreeClient {
    http: Client,
    base_url: Url,
    client_id: String,
    client_secret: String,
    fetch_order_timeout: Duration,
}

impl CashfreeClient {
    /// Create a new `CashfreeClient`.
    ///
    /// * `base_url` – root URL of the gateway host (see
    ///   [`Environment::base_url`]); tests point this at a mock server.
    /// * `client_id` / `client_secret` – merchant credentials.
    pub fn new(
        base_url: Url,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            fetch_order_timeout: FETCH_ORDER_TIMEOUT,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Override the fetch-order deadline. Used by tests to exercise the
    /// timeout path without waiting out the real deadline.
    pub fn with_fetch_order_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_order_timeout = timeout;
        self
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(API_VERSION_HEADER, API_VERSION)
            .header(CLIENT_ID_HEADER, &self.client_id)
            .header(CLIENT_SECRET_HEADER, &self.client_secret)
    }

    /// `POST /pg/orders` – create a payment order.
    pub async fn create_order(
        &self,
        order: &OrderRequest,
    ) -> Result<CreateOrderResponse, GatewayError> {
        let url = self.base_url.join("/pg/orders")?;

        let resp = self.authed(self.http.post(url)).json(order).send().await?;

        parse_response(resp).await
    }

    /// `GET /pg/orders/{order_id}` – fetch an order's current status.
    ///
    /// This is the one call with an explicit deadline (10 seconds); a
    /// blown deadline surfaces as [`GatewayError::Timeout`].
    pub async fn fetch_order(&self, order_id: &str) -> Result<OrderDetails, GatewayError> {
        let url = self
            .base_url
            .join(&format!("/pg/orders/{}", urlencoding::encode(order_id)))?;

        let resp = self
            .authed(self.http.get(url))
            .timeout(self.fetch_order_timeout)
            .send()
            .await?;

        parse_response(resp).await
    }

    /// `POST /pg/orders/{order_id}/refunds` – initiate a refund.
    ///
    /// The gateway's payload is returned verbatim.
    pub async fn create_refund(
        &self,
        order_id: &str,
        refund: &RefundRequest,
    ) -> Result<Value, GatewayError> {
        let url = self.base_url.join(&format!(
            "/pg/orders/{}/refunds",
            urlencoding::encode(order_id)
        ))?;

        let resp = self.authed(self.http.post(url)).json(refund).send().await?;

        parse_response(resp).await
    }

    /// `GET /pg/orders/{order_id}/refunds/{refund_id}` – fetch a
    /// refund's current status. The gateway's payload is returned
    /// verbatim.
    pub async fn fetch_refund(
        &self,
        order_id: &str,
        refund_id: &str,
    ) -> Result<Value, GatewayError> {
        let url = self.base_url.join(&format!(
            "/pg/orders/{}/refunds/{}",
            urlencoding::encode(order_id),
            urlencoding::encode(refund_id)
        ))?;

        let resp = self.authed(self.http.get(url)).send().await?;

        parse_response(resp).await
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, GatewayError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        return Err(GatewayError::Api { status, body });
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(GatewayError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!(
            "PRODUCTION".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn environment_base_urls() {
        assert_eq!(
            Environment::Sandbox.base_url().as_str(),
            "https://sandbox.cashfree.com/"
        );
        assert_eq!(
            Environment::Production.base_url().as_str(),
            "https://api.cashfree.com/"
        );
    }
}
