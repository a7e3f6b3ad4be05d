use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Location;

/// A bookable trip product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Length of the tour in days.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub max_participants: u32,
    #[serde(default)]
    pub available_spots: Option<u32>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Tour {
    /// Seats left to book. Falls back to the group size when the backend does
    /// not report availability.
    pub fn remaining_capacity(&self) -> u32 {
        self.available_spots.unwrap_or(self.max_participants)
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining_capacity() == 0
    }

    pub fn location_label(&self) -> String {
        self.location
            .as_ref()
            .map(Location::label)
            .unwrap_or_default()
    }

    pub fn duration_label(&self) -> String {
        match self.duration {
            1 => "1 day".to_string(),
            n => format!("{n} days"),
        }
    }

    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

pub fn format_price(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}
