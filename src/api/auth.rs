use super::{ApiClient, Transport};
use crate::common::ApiError;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};

impl<T: Transport> ApiClient<T> {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request).await
    }
}
