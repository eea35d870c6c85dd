//! Error type shared by all gateway client calls.

use reqwest::StatusCode;

/// Errors produced by [`crate::CashfreeClient`].
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The outbound call exceeded its deadline.
    #[error("gateway request timed out")]
    Timeout,

    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Transport(reqwest::Error),

    /// The gateway returned a non-2xx status code. `body` carries the
    /// gateway's error payload verbatim (or its raw text if it was not
    /// valid JSON) so handlers can forward it to the caller.
    #[error("api error: status {status}, body: {body}")]
    Api {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Transport(err)
        }
    }
}

impl GatewayError {
    /// The gateway error payload if one exists, otherwise the error
    /// message as a JSON string. Mirrors what a caller would see from
    /// `error.response?.data || error.message` style forwarding.
    pub fn into_detail(self) -> serde_json::Value {
        match self {
            GatewayError::Api { body, .. } => body,
            other => serde_json::Value::String(other.to_string()),
        }
    }

    /// Returns `true` if the gateway answered with HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_detail_is_gateway_body() {
        let err = GatewayError::Api {
            status: StatusCode::BAD_REQUEST,
            body: json!({"message": "order_id invalid"}),
        };
        assert_eq!(err.into_detail(), json!({"message": "order_id invalid"}));
    }

    #[test]
    fn timeout_detail_is_message_string() {
        assert_eq!(
            GatewayError::Timeout.into_detail(),
            json!("gateway request timed out")
        );
    }

    #[test]
    fn not_found_detection() {
        let err = GatewayError::Api {
            status: StatusCode::NOT_FOUND,
            body: json!({}),
        };
        assert!(err.is_not_found());
        assert!(!GatewayError::Timeout.is_not_found());
    }
}
