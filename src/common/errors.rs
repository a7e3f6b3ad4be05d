use thiserror::Error;

use crate::models::Booking;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Your session has expired, please sign in again")]
    Unauthorized,

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the error should end the local session.
    pub fn is_session_fatal(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Browser storage is unavailable")]
    StorageUnavailable,

    #[error("Could not write '{0}' to browser storage")]
    Write(String),

    #[error("Stored user is malformed: {0}")]
    MalformedUser(String),

    #[error("Malformed session token: {0}")]
    MalformedToken(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Participants must be between 1 and {0}")]
    Participants(u32),

    #[error("{0} must be a positive number")]
    NotPositive(&'static str),

    #[error("{0} is not a valid number")]
    NotANumber(&'static str),

    #[error("{0} is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate(&'static str),

    #[error("A percentage discount cannot exceed 100%")]
    PercentageTooHigh,

    #[error("Tour is sold out")]
    SoldOut,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingFlowError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Booking failed: {0}")]
    Booking(ApiError),

    #[error(
        "Booking #{} was created but payment failed: {source}. It stays pending until paid.",
        .booking.id
    )]
    Payment {
        booking: Box<Booking>,
        source: ApiError,
    },
}

impl BookingFlowError {
    /// The booking left behind when only the payment step failed.
    pub fn unpaid_booking(&self) -> Option<&Booking> {
        match self {
            Self::Payment { booking, .. } => Some(booking),
            _ => None,
        }
    }

    pub fn is_session_fatal(&self) -> bool {
        match self {
            Self::Booking(e) | Self::Payment { source: e, .. } => e.is_session_fatal(),
            Self::Invalid(_) => false,
        }
    }
}
