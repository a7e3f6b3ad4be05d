//! Client-side filtering and sorting of the tour catalog.

use std::cmp::Ordering;

use crate::models::{Category, Tour};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TourSort {
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
    Duration,
}

impl TourSort {
    pub const ALL: &'static [TourSort] = &[
        Self::Featured,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Rating,
        Self::Duration,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price-asc",
            Self::PriceHighToLow => "price-desc",
            Self::Rating => "rating",
            Self::Duration => "duration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: low to high",
            Self::PriceHighToLow => "Price: high to low",
            Self::Rating => "Top rated",
            Self::Duration => "Shortest first",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|sort| sort.key() == key)
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourFilter {
    pub query: String,
    pub category_id: Option<i64>,
    pub max_price: Option<f64>,
    pub include_inactive: bool,
    pub sort: TourSort,
}

impl TourFilter {
    pub fn matches(&self, tour: &Tour) -> bool {
        if !self.include_inactive && !tour.active {
            return false;
        }
        if self.category_id.is_some() && tour.category_id != self.category_id {
            return false;
        }
        if self.max_price.is_some_and(|max| tour.price > max) {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || tour.title.to_lowercase().contains(&query)
            || tour.description.to_lowercase().contains(&query)
            || tour.location_label().to_lowercase().contains(&query)
    }

    pub fn apply(&self, tours: &[Tour]) -> Vec<Tour> {
        let mut matching: Vec<Tour> = tours.iter().filter(|t| self.matches(t)).cloned().collect();

        match self.sort {
            TourSort::Featured => {}
            TourSort::PriceLowToHigh => matching.sort_by(|a, b| cmp_f64(a.price, b.price)),
            TourSort::PriceHighToLow => matching.sort_by(|a, b| cmp_f64(b.price, a.price)),
            TourSort::Rating => matching.sort_by(|a, b| {
                cmp_f64(b.average_rating.unwrap_or(0.0), a.average_rating.unwrap_or(0.0))
            }),
            TourSort::Duration => matching.sort_by_key(|t| t.duration),
        }

        matching
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Categories paired with the number of active tours in each.
pub fn category_counts(categories: &[Category], tours: &[Tour]) -> Vec<(Category, usize)> {
    categories
        .iter()
        .map(|category| {
            let count = tours
                .iter()
                .filter(|t| t.active && t.category_id == Some(category.id))
                .count();
            (category.clone(), count)
        })
        .collect()
}

/// Highest rated active tours, for the landing page.
pub fn featured(tours: &[Tour], limit: usize) -> Vec<Tour> {
    TourFilter {
        sort: TourSort::Rating,
        ..Default::default()
    }
    .apply(tours)
    .into_iter()
    .take(limit)
    .collect()
}
