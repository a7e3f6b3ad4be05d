use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RefundStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

crate::wire_enum!(RefundStatus {
    Pending => "PENDING", "Pending",
    Approved => "APPROVED", "Approved",
    Rejected => "REJECTED", "Rejected",
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub id: i64,
    pub booking_id: i64,
    #[serde(default)]
    pub payment_id: Option<i64>,
    pub amount: f64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: RefundStatus,
    #[serde(default, with = "timestamp::option")]
    pub requested_at: Option<NaiveDateTime>,
}

impl Refund {
    pub fn is_open(&self) -> bool {
        self.status == RefundStatus::Pending
    }
}
