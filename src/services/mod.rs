pub mod access;
pub mod auth;
pub mod booking;
pub mod catalog;
pub mod collections;
pub mod reviews;
pub mod session;
pub mod token;
pub mod validation;

pub use session::{AuthSession, RequestAuth, SessionCheck, SessionManager, SessionStorage};
