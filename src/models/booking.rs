use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

crate::wire_enum!(BookingStatus {
    Pending => "PENDING", "Pending",
    Confirmed => "CONFIRMED", "Confirmed",
    Completed => "COMPLETED", "Completed",
    Cancelled => "CANCELLED", "Cancelled",
});

impl BookingStatus {
    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "bg-amber-500/10 text-amber-400 border-amber-500/30",
            Self::Confirmed => "bg-sky-500/10 text-sky-400 border-sky-500/30",
            Self::Completed => "bg-emerald-500/10 text-emerald-400 border-emerald-500/30",
            Self::Cancelled => "bg-red-500/10 text-red-400 border-red-500/30",
        }
    }
}

/// A user's reservation against a tour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub tour_id: i64,
    #[serde(default)]
    pub tour_title: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub participants: u32,
    pub total_price: f64,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub booking_date: Option<NaiveDateTime>,
}

impl Booking {
    pub fn awaits_payment(&self) -> bool {
        !self.paid && self.status == BookingStatus::Pending
    }

    pub fn can_request_refund(&self) -> bool {
        self.paid && self.status != BookingStatus::Cancelled
    }

    pub fn title(&self) -> String {
        self.tour_title
            .clone()
            .unwrap_or_else(|| format!("Tour #{}", self.tour_id))
    }
}
