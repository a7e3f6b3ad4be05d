use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    DebitCard,
    Paypal,
    BankTransfer,
}

crate::wire_enum!(PaymentMethod {
    CreditCard => "CREDIT_CARD", "Credit card",
    DebitCard => "DEBIT_CARD", "Debit card",
    Paypal => "PAYPAL", "PayPal",
    BankTransfer => "BANK_TRANSFER", "Bank transfer",
});

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

crate::wire_enum!(PaymentStatus {
    Pending => "PENDING", "Pending",
    Completed => "COMPLETED", "Completed",
    Failed => "FAILED", "Failed",
    Refunded => "REFUNDED", "Refunded",
});

/// A monetary transaction attached to a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub booking_id: i64,
    pub amount: f64,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default, with = "timestamp::option")]
    pub payment_date: Option<NaiveDateTime>,
}
