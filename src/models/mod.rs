pub use booking::*;
pub use category::*;
pub use discount::*;
pub use location::*;
pub use payment::*;
pub use refund::*;
pub use review::*;
pub use role::*;
pub use tour::*;
pub use user::*;

mod booking;
mod category;
mod discount;
mod location;
mod payment;
mod refund;
mod review;
mod role;
pub mod timestamp;
mod tour;
mod user;
