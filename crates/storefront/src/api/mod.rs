//! REST clients for the storefront backend.
//!
//! The backend is a small JSON API: `GET /products`, `GET /products/{id}`
//! and `POST /cart`. Error responses carry `{"detail": "..."}` bodies.
//! These clients own the HTTP plumbing so the cart store never touches
//! the network.

mod catalog;
mod checkout;

pub use catalog::CatalogClient;
pub use checkout::{CheckoutClient, CheckoutError, submit_cart};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend rejected the request.
    #[error("API returned {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Decode a response, mapping backend error bodies onto [`ApiError`].
///
/// Reads the body as text first so failures can be logged with what the
/// server actually sent.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(extract_detail(&body)));
    }

    if !status.is_success() {
        tracing::error!(
            status = %status,
            body = %body.chars().take(500).collect::<String>(),
            "backend returned non-success status"
        );
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail: extract_detail(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(500).collect::<String>(),
            "failed to parse backend response"
        );
        ApiError::Parse(e)
    })
}

/// Pull the `detail` message out of a backend error body, falling back to
/// a truncated copy of the raw body.
fn extract_detail(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: String,
    }

    serde_json::from_str::<Detail>(body).map_or_else(
        |_| body.chars().take(200).collect(),
        |parsed| parsed.detail,
    )
}

/// Normalize a configured endpoint for path concatenation.
fn base_url(api_url: &url::Url) -> String {
    api_url.as_str().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_from_error_body() {
        assert_eq!(
            extract_detail(r#"{"detail": "Product not found"}"#),
            "Product not found"
        );
    }

    #[test]
    fn test_extract_detail_falls_back_to_raw_body() {
        assert_eq!(extract_detail("<html>bad gateway</html>"), "<html>bad gateway</html>");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_base_url_trims_trailing_slash() {
        let api_url = url::Url::parse("http://localhost:8000/api/").unwrap();
        assert_eq!(base_url(&api_url), "http://localhost:8000/api");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("Product not found".to_string());
        assert_eq!(err.to_string(), "Not found: Product not found");

        let err = ApiError::Status {
            status: 400,
            detail: "Items are required".to_string(),
        };
        assert_eq!(err.to_string(), "API returned 400: Items are required");
    }
}
