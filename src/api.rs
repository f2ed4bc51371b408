//! Remote Item API
//!
//! HTTP bindings for the grocery backend, behind a trait so tests can
//! substitute an in-memory fake.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::models::Item;

/// Base path the backend is served under
pub const DEFAULT_API_BASE: &str = "/api";

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors, split by whether the request reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never reached the server
    Connection,
    /// The server answered with a non-success status
    Status(u16),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Connection => write!(f, "connection failed"),
            ApiError::Status(code) => write!(f, "server returned status {}", code),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(code) => ApiError::Status(code.as_u16()),
            None => ApiError::Connection,
        }
    }
}

/// CRUD operations against the remote item store
#[async_trait(?Send)]
pub trait ItemApi {
    /// Fetch the full collection
    async fn fetch_items(&self) -> ApiResult<Vec<Item>>;

    /// Create an item; the server assigns id and timestamp
    async fn create_item(&self, name: &str) -> ApiResult<Item>;

    /// Set the bought flag; returns the server's updated item
    async fn update_bought(&self, id: &str, bought: bool) -> ApiResult<Item>;

    /// Delete an item
    async fn delete_item(&self, id: &str) -> ApiResult<()>;
}

#[derive(Serialize)]
struct CreateItemBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct UpdateBoughtBody {
    bought: bool,
}

/// `ItemApi` backed by the HTTP backend
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        HttpApi {
            client: Client::new(),
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn check_status(resp: &reqwest::Response) -> Result<(), ApiError> {
    if resp.status().is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status().as_u16()))
    }
}

#[async_trait(?Send)]
impl ItemApi for HttpApi {
    async fn fetch_items(&self) -> ApiResult<Vec<Item>> {
        let resp = self.client.get(self.url("/items")).send().await?;
        check_status(&resp)?;
        Ok(resp.json().await?)
    }

    async fn create_item(&self, name: &str) -> ApiResult<Item> {
        let resp = self
            .client
            .post(self.url("/items"))
            .json(&CreateItemBody { name })
            .send()
            .await?;
        check_status(&resp)?;
        Ok(resp.json().await?)
    }

    async fn update_bought(&self, id: &str, bought: bool) -> ApiResult<Item> {
        let resp = self
            .client
            .patch(self.url(&format!("/items/{}", id)))
            .json(&UpdateBoughtBody { bought })
            .send()
            .await?;
        check_status(&resp)?;
        Ok(resp.json().await?)
    }

    async fn delete_item(&self, id: &str) -> ApiResult<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/items/{}", id)))
            .send()
            .await?;
        check_status(&resp)?;
        // 204, body ignored
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_wire_format() {
        let body = serde_json::to_value(CreateItemBody { name: "Cheese" }).expect("serialize");
        assert_eq!(body, serde_json::json!({ "name": "Cheese" }));
    }

    #[test]
    fn test_update_body_wire_format() {
        let body = serde_json::to_value(UpdateBoughtBody { bought: true }).expect("serialize");
        assert_eq!(body, serde_json::json!({ "bought": true }));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let api = HttpApi::new(DEFAULT_API_BASE);
        assert_eq!(api.url("/items"), "/api/items");
        assert_eq!(api.url("/items/1"), "/api/items/1");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Connection.to_string(), "connection failed");
        assert_eq!(ApiError::Status(500).to_string(), "server returned status 500");
    }
}
