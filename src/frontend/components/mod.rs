//! Reusable UI components

mod alert;
mod button;
mod decor;
mod footer;
mod guard;
mod input;
mod layout;
mod nav;
mod review;
mod tour_card;

pub use alert::{
    Alert, AlertVariant, EmptyState, ErrorAlert, ErrorSlot, InfoAlert, Loading, SuccessAlert,
};
pub use button::{Button, ButtonVariant};
pub use decor::{FloatingParticles, Parallax, WaveBackground};
pub use footer::Footer;
pub use guard::{AccessDenied, RequireAuth};
pub use input::{Checkbox, EmailInput, PasswordInput, SelectInput, TextArea, TextInput};
pub use layout::{AuthLayout, MainLayout};
pub use nav::Navbar;
pub use review::{ReviewForm, ReviewList};
pub use tour_card::TourCard;
