use super::{ApiClient, Method, Transport};
use crate::common::ApiError;
use crate::models::{Booking, Payment, Refund};
use crate::services::booking::BookingGateway;
use crate::types::{BookingCreate, PaymentCreate, RefundCreate};

impl<T: Transport> ApiClient<T> {
    pub async fn create_booking(&self, request: &BookingCreate) -> Result<Booking, ApiError> {
        self.post("/bookings", request).await
    }

    pub async fn my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("/bookings/my").await
    }

    pub async fn cancel_booking(&self, id: i64) -> Result<Booking, ApiError> {
        self.call::<(), _>(Method::Patch, &format!("/bookings/{id}/cancel"), None)
            .await
    }

    pub async fn create_payment(&self, request: &PaymentCreate) -> Result<Payment, ApiError> {
        self.post("/payments", request).await
    }

    pub async fn my_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get("/payments/my").await
    }

    pub async fn request_refund(&self, request: &RefundCreate) -> Result<Refund, ApiError> {
        self.post("/refunds", request).await
    }
}

impl<T: Transport> BookingGateway for ApiClient<T> {
    async fn create_booking(&self, request: &BookingCreate) -> Result<Booking, ApiError> {
        ApiClient::<T>::create_booking(self, request).await
    }

    async fn create_payment(&self, request: &PaymentCreate) -> Result<Payment, ApiError> {
        ApiClient::<T>::create_payment(self, request).await
    }
}
