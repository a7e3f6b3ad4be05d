//! Typed client for the tour-booking REST API. One method per backend
//! operation; responses are decoded into `models` records at this boundary.

mod auth;
mod bookings;
mod catalog;
mod manage;
mod reviews;
mod transport;

pub use manage::Scope;
pub use transport::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::{ApiConfig, ApiError};
use crate::types::ErrorBody;

#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    transport: T,
    config: ApiConfig,
    token: Option<String>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport,
            config,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            bearer: self.token.clone(),
            body,
        };

        let response = self.transport.send(request).await?;

        if response.is_success() {
            Ok(response)
        } else {
            Err(error_from(&response, self.token.is_some()))
        }
    }

    async fn call<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = body.map(encode).transpose()?;
        let response = self.execute(method, path, body).await?;

        decode(&response)
    }

    /// Like `call`, but ignores the response body.
    async fn call_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(encode).transpose()?;
        self.execute(method, path, body).await.map(|_| ())
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.call::<(), R>(Method::Get, path, None).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(Method::Post, path, Some(body)).await
    }

    async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(Method::Put, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.call_unit::<()>(Method::Delete, path, None).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        log::warn!("Failed to decode response: {e}");
        ApiError::Decode(e.to_string())
    })
}

/// A 401 only ends the session when a token was sent; anonymous calls such as
/// login report the backend's message instead.
fn error_from(response: &ApiResponse, authenticated: bool) -> ApiError {
    if response.status == 401 && authenticated {
        return ApiError::Unauthorized;
    }

    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| match response.status {
            401 => "Invalid email or password".to_string(),
            403 => "You are not allowed to do that".to_string(),
            404 => "The requested resource was not found".to_string(),
            status => format!("Request failed with status {status}"),
        });

    ApiError::Status {
        status: response.status,
        message,
    }
}
