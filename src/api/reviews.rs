use super::{ApiClient, Transport};
use crate::common::ApiError;
use crate::models::Review;
use crate::types::ReviewCreate;

impl<T: Transport> ApiClient<T> {
    pub async fn tour_reviews(&self, tour_id: i64) -> Result<Vec<Review>, ApiError> {
        self.get(&format!("/reviews/tour/{tour_id}")).await
    }

    pub async fn submit_review(&self, request: &ReviewCreate) -> Result<Review, ApiError> {
        self.post("/reviews", request).await
    }
}
