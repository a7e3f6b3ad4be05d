//! Routed pages

mod admin;
mod bookings;
mod categories;
mod dashboard;
mod landing;
mod login;
mod manager;
mod not_found;
mod profile;
mod register;
mod tour_details;
mod tours;

pub use admin::AdminPage;
pub use bookings::BookingsPage;
pub use categories::CategoriesPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use manager::ManagerPage;
pub use not_found::NotFound;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use tour_details::TourDetailsPage;
pub use tours::ToursPage;
