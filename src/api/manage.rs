//! Endpoints behind the administration and manager dashboards.

use super::{ApiClient, Method, Transport};
use crate::common::ApiError;
use crate::models::{
    Booking, BookingStatus, Category, Discount, Location, Payment, Refund, ReviewAnalytics,
    Role, Tour, User,
};
use crate::types::{
    BookingStatusUpdate, CategoryUpsert, DiscountUpsert, LocationUpsert, RoleUpdate, TourUpsert,
};

/// Which dashboard a management call is made from. Both expose the same
/// sub-resources under different prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Admin,
    Manager,
}

impl Scope {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Manager => "/manager",
        }
    }

    fn path(&self, resource: &str) -> String {
        format!("{}/{}", self.prefix(), resource.trim_start_matches('/'))
    }
}

impl<T: Transport> ApiClient<T> {
    // Users (admin only)

    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get(&Scope::Admin.path("users")).await
    }

    pub async fn change_role(&self, user_id: i64, role: Role) -> Result<User, ApiError> {
        self.put(&Scope::Admin.path(&format!("users/{user_id}/role")), &RoleUpdate { role })
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.delete(&Scope::Admin.path(&format!("users/{user_id}"))).await
    }

    // Tours

    pub async fn managed_tours(&self, scope: Scope) -> Result<Vec<Tour>, ApiError> {
        self.get(&scope.path("tours")).await
    }

    pub async fn create_tour(&self, scope: Scope, tour: &TourUpsert) -> Result<Tour, ApiError> {
        self.post(&scope.path("tours"), tour).await
    }

    pub async fn update_tour(
        &self,
        scope: Scope,
        id: i64,
        tour: &TourUpsert,
    ) -> Result<Tour, ApiError> {
        self.put(&scope.path(&format!("tours/{id}")), tour).await
    }

    pub async fn delete_tour(&self, scope: Scope, id: i64) -> Result<(), ApiError> {
        self.delete(&scope.path(&format!("tours/{id}"))).await
    }

    // Categories and locations (admin only)

    pub async fn create_category(&self, category: &CategoryUpsert) -> Result<Category, ApiError> {
        self.post(&Scope::Admin.path("categories"), category).await
    }

    pub async fn update_category(
        &self,
        id: i64,
        category: &CategoryUpsert,
    ) -> Result<Category, ApiError> {
        self.put(&Scope::Admin.path(&format!("categories/{id}")), category)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&Scope::Admin.path(&format!("categories/{id}"))).await
    }

    pub async fn create_location(&self, location: &LocationUpsert) -> Result<Location, ApiError> {
        self.post(&Scope::Admin.path("locations"), location).await
    }

    pub async fn update_location(
        &self,
        id: i64,
        location: &LocationUpsert,
    ) -> Result<Location, ApiError> {
        self.put(&Scope::Admin.path(&format!("locations/{id}")), location)
            .await
    }

    pub async fn delete_location(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&Scope::Admin.path(&format!("locations/{id}"))).await
    }

    // Discounts

    pub async fn discounts(&self, scope: Scope) -> Result<Vec<Discount>, ApiError> {
        self.get(&scope.path("discounts")).await
    }

    pub async fn create_discount(
        &self,
        scope: Scope,
        discount: &DiscountUpsert,
    ) -> Result<Discount, ApiError> {
        self.post(&scope.path("discounts"), discount).await
    }

    pub async fn update_discount(
        &self,
        scope: Scope,
        id: i64,
        discount: &DiscountUpsert,
    ) -> Result<Discount, ApiError> {
        self.put(&scope.path(&format!("discounts/{id}")), discount).await
    }

    pub async fn delete_discount(&self, scope: Scope, id: i64) -> Result<(), ApiError> {
        self.delete(&scope.path(&format!("discounts/{id}"))).await
    }

    // Refunds (admin only)

    pub async fn refunds(&self) -> Result<Vec<Refund>, ApiError> {
        self.get(&Scope::Admin.path("refunds")).await
    }

    pub async fn approve_refund(&self, id: i64) -> Result<Refund, ApiError> {
        let path = Scope::Admin.path(&format!("refunds/{id}/approve"));
        self.call::<(), _>(Method::Patch, &path, None).await
    }

    pub async fn reject_refund(&self, id: i64) -> Result<Refund, ApiError> {
        self.call::<(), _>(Method::Patch, &Scope::Admin.path(&format!("refunds/{id}/reject")), None)
            .await
    }

    // Bookings and payments

    pub async fn all_bookings(&self, scope: Scope) -> Result<Vec<Booking>, ApiError> {
        self.get(&scope.path("bookings")).await
    }

    pub async fn update_booking_status(
        &self,
        scope: Scope,
        id: i64,
        status: BookingStatus,
    ) -> Result<Booking, ApiError> {
        self.call(
            Method::Patch,
            &scope.path(&format!("bookings/{id}/status")),
            Some(&BookingStatusUpdate { status }),
        )
        .await
    }

    pub async fn all_payments(&self, scope: Scope) -> Result<Vec<Payment>, ApiError> {
        self.get(&scope.path("payments")).await
    }

    // Reviews

    pub async fn review_analytics(&self, scope: Scope) -> Result<ReviewAnalytics, ApiError> {
        self.get(&scope.path("reviews/analytics")).await
    }
}
