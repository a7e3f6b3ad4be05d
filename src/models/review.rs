use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub tour_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<NaiveDateTime>,
}

impl Review {
    pub fn author(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Anonymous traveller")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    pub rating: u8,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourRating {
    pub tour_id: i64,
    pub tour_title: String,
    pub average_rating: f64,
    pub review_count: u32,
}

/// Aggregated review statistics shown on the dashboards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalytics {
    pub total_reviews: u32,
    pub average_rating: f64,
    #[serde(default)]
    pub rating_distribution: Vec<RatingBucket>,
    #[serde(default)]
    pub top_tours: Vec<TourRating>,
}

impl ReviewAnalytics {
    /// Built-in figures shown when the analytics endpoint is unreachable.
    pub fn sample() -> Self {
        Self {
            total_reviews: 128,
            average_rating: 4.4,
            rating_distribution: vec![
                RatingBucket { rating: 5, count: 74 },
                RatingBucket { rating: 4, count: 31 },
                RatingBucket { rating: 3, count: 14 },
                RatingBucket { rating: 2, count: 6 },
                RatingBucket { rating: 1, count: 3 },
            ],
            top_tours: vec![
                TourRating {
                    tour_id: 1,
                    tour_title: "Alpine Lakes Trek".into(),
                    average_rating: 4.9,
                    review_count: 38,
                },
                TourRating {
                    tour_id: 2,
                    tour_title: "Coastal Villages by Boat".into(),
                    average_rating: 4.7,
                    review_count: 27,
                },
                TourRating {
                    tour_id: 3,
                    tour_title: "Desert Stars Safari".into(),
                    average_rating: 4.5,
                    review_count: 19,
                },
            ],
        }
    }

    pub fn bucket_share(&self, rating: u8) -> f64 {
        if self.total_reviews == 0 {
            return 0.0;
        }

        let count = self
            .rating_distribution
            .iter()
            .find(|b| b.rating == rating)
            .map(|b| b.count)
            .unwrap_or(0);

        f64::from(count) / f64::from(self.total_reviews)
    }

    /// `(stars, share)` rows from five stars down to one.
    pub fn distribution_rows(&self) -> Vec<(u8, f64)> {
        (1..=5u8)
            .rev()
            .map(|rating| (rating, self.bucket_share(rating)))
            .collect()
    }
}
