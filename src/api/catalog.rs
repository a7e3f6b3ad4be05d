use super::{ApiClient, Transport};
use crate::common::ApiError;
use crate::models::{Category, Discount, Location, Tour};

impl<T: Transport> ApiClient<T> {
    pub async fn tours(&self) -> Result<Vec<Tour>, ApiError> {
        self.get("/tours").await
    }

    pub async fn tour(&self, id: i64) -> Result<Tour, ApiError> {
        self.get(&format!("/tours/{id}")).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    pub async fn locations(&self) -> Result<Vec<Location>, ApiError> {
        self.get("/locations").await
    }

    /// Discounts a client may apply at checkout.
    pub async fn active_discounts(&self) -> Result<Vec<Discount>, ApiError> {
        self.get("/discounts/active").await
    }
}
