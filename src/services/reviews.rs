use crate::common::ValidationError;
use crate::models::{Booking, BookingStatus, Review};
use crate::types::ReviewCreate;

pub const MAX_COMMENT_LENGTH: usize = 1000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn validate(&self, tour_id: i64) -> Result<ReviewCreate, ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange);
        }

        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(ValidationError::Required("Comment"));
        }
        if comment.chars().count() > MAX_COMMENT_LENGTH {
            return Err(ValidationError::TooLong {
                field: "Comment",
                max: MAX_COMMENT_LENGTH,
            });
        }

        Ok(ReviewCreate {
            tour_id,
            rating: self.rating,
            comment: comment.to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewSummary {
    pub count: usize,
    pub average: f64,
    /// Number of reviews per star, index 0 holding one-star reviews.
    pub distribution: [usize; 5],
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut distribution = [0usize; 5];
        let mut total = 0u32;
        let mut count = 0usize;

        for review in reviews.iter().filter(|r| (1..=5).contains(&r.rating)) {
            distribution[usize::from(review.rating - 1)] += 1;
            total += u32::from(review.rating);
            count += 1;
        }

        let average = if count == 0 {
            0.0
        } else {
            (f64::from(total) / count as f64 * 10.0).round() / 10.0
        };

        Self {
            count,
            average,
            distribution,
        }
    }

    pub fn share(&self, stars: u8) -> f64 {
        if self.count == 0 || !(1..=5).contains(&stars) {
            return 0.0;
        }

        self.distribution[usize::from(stars - 1)] as f64 / self.count as f64
    }
}

/// Only travellers with a completed booking for the tour may review it.
pub fn can_review(bookings: &[Booking], tour_id: i64) -> bool {
    bookings
        .iter()
        .any(|b| b.tour_id == tour_id && b.status == BookingStatus::Completed)
}

pub fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
