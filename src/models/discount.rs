use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DiscountType {
    #[default]
    Percentage,
    FixedAmount,
}

crate::wire_enum!(DiscountType {
    Percentage => "PERCENTAGE", "Percentage",
    FixedAmount => "FIXED_AMOUNT", "Fixed amount",
});

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub id: i64,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub discount_type: DiscountType,
    pub value: f64,
    /// Restricts the discount to one tour when set.
    #[serde(default)]
    pub tour_id: Option<i64>,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub active: bool,
}

impl Discount {
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.active
            && self.valid_from.map_or(true, |from| from <= day)
            && self.valid_until.map_or(true, |until| day <= until)
    }

    pub fn applies_to(&self, tour_id: i64) -> bool {
        self.tour_id.map_or(true, |id| id == tour_id)
    }

    /// Amount after the discount, never below zero.
    pub fn apply(&self, amount: f64) -> f64 {
        let reduced = match self.discount_type {
            DiscountType::Percentage => amount * (1.0 - self.value.clamp(0.0, 100.0) / 100.0),
            DiscountType::FixedAmount => amount - self.value.max(0.0),
        };

        reduced.max(0.0)
    }

    pub fn value_label(&self) -> String {
        match self.discount_type {
            DiscountType::Percentage => format!("{}% off", self.value),
            DiscountType::FixedAmount => format!("{} off", super::format_price(self.value)),
        }
    }
}
