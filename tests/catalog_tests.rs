mod common;

#[cfg(test)]
pub mod catalog_tests {
    use super::common::*;

    use tourbook::common::ValidationError;
    use tourbook::models::*;
    use tourbook::services::catalog::*;
    use tourbook::services::collections::{remove, upsert};
    use tourbook::services::reviews::*;
    use tourbook::services::validation::*;

    fn seed_tours() -> Vec<Tour> {
        let mut cheap = get_seed_tour(1, "Old Town Walk", 25.0);
        cheap.duration = 1;
        cheap.average_rating = Some(4.1);
        cheap.category_id = Some(2);

        let mut pricey = get_seed_tour(2, "Alpine Lakes Trek", 899.0);
        pricey.duration = 7;
        pricey.average_rating = Some(4.9);

        let mut mid = get_seed_tour(3, "Wine Country Cycling", 240.0);
        mid.description = "Vineyards and cellars".to_string();
        mid.average_rating = None;
        mid.location = None;

        let mut hidden = get_seed_tour(4, "Retired Route", 10.0);
        hidden.active = false;

        vec![cheap, pricey, mid, hidden]
    }

    fn ids(tours: &[Tour]) -> Vec<i64> {
        tours.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_hides_inactive_tours() {
        let all = TourFilter::default().apply(&seed_tours());
        assert_eq!(ids(&all), [1, 2, 3]);

        let admin = TourFilter {
            include_inactive: true,
            ..Default::default()
        };
        assert_eq!(admin.apply(&seed_tours()).len(), 4);
    }

    #[test]
    fn test_filter_search_matches_title_description_and_location() {
        let by_title = TourFilter {
            query: "alpine".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_title.apply(&seed_tours())), [2]);

        let by_description = TourFilter {
            query: " CELLARS ".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_description.apply(&seed_tours())), [3]);

        let by_location = TourFilter {
            query: "slovenia".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_location.apply(&seed_tours())), [1, 2]);
    }

    #[test]
    fn test_filter_category_and_price() {
        let hiking = TourFilter {
            category_id: Some(1),
            ..Default::default()
        };
        assert_eq!(ids(&hiking.apply(&seed_tours())), [2, 3]);

        let budget = TourFilter {
            max_price: Some(240.0),
            ..Default::default()
        };
        assert_eq!(ids(&budget.apply(&seed_tours())), [1, 3]);
    }

    #[test]
    fn test_sorting() {
        let sorted = |sort| {
            ids(&TourFilter {
                sort,
                ..Default::default()
            }
            .apply(&seed_tours()))
        };

        assert_eq!(sorted(TourSort::Featured), [1, 2, 3]);
        assert_eq!(sorted(TourSort::PriceLowToHigh), [1, 3, 2]);
        assert_eq!(sorted(TourSort::PriceHighToLow), [2, 3, 1]);
        assert_eq!(sorted(TourSort::Rating), [2, 1, 3]);
        assert_eq!(sorted(TourSort::Duration), [1, 3, 2]);
    }

    #[test]
    fn test_sort_keys() {
        for sort in TourSort::ALL {
            assert_eq!(TourSort::from_key(sort.key()), *sort);
        }
        assert_eq!(TourSort::from_key("nonsense"), TourSort::Featured);
    }

    #[test]
    fn test_category_counts_and_featured() {
        let categories = vec![
            get_seed_category(1, "Hiking"),
            get_seed_category(2, "City"),
            get_seed_category(3, "Sea"),
        ];

        let counts: Vec<(i64, usize)> = category_counts(&categories, &seed_tours())
            .into_iter()
            .map(|(c, n)| (c.id, n))
            .collect();
        assert_eq!(counts, [(1, 2), (2, 1), (3, 0)]);

        assert_eq!(ids(&featured(&seed_tours(), 2)), [2, 1]);
    }

    #[test]
    fn test_review_summary() {
        let reviews = vec![
            get_seed_review(1, 1, 5),
            get_seed_review(2, 2, 4),
            get_seed_review(3, 3, 4),
            get_seed_review(4, 4, 0),
        ];

        let summary = ReviewSummary::from_reviews(&reviews);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.average, 4.3);
        assert_eq!(summary.distribution, [0, 0, 0, 2, 1]);
        assert_eq!(summary.share(4), 2.0 / 3.0);
        assert_eq!(summary.share(6), 0.0);
        assert_eq!(ReviewSummary::from_reviews(&[]).average, 0.0);
    }

    #[test]
    fn test_can_review_requires_completed_booking() {
        let bookings = vec![
            get_seed_booking(1, 1, BookingStatus::Confirmed),
            get_seed_booking(2, 2, BookingStatus::Completed),
        ];

        assert!(!can_review(&bookings, 1));
        assert!(can_review(&bookings, 2));
        assert!(!can_review(&[], 2));
    }

    #[test]
    fn test_review_draft_validation() {
        let draft = |rating, comment: &str| ReviewDraft {
            rating,
            comment: comment.to_string(),
        };

        assert_eq!(draft(0, "Nice").validate(1), Err(ValidationError::RatingOutOfRange));
        assert_eq!(draft(6, "Nice").validate(1), Err(ValidationError::RatingOutOfRange));
        assert_eq!(draft(4, "  ").validate(1), Err(ValidationError::Required("Comment")));
        assert!(matches!(
            draft(4, &"x".repeat(1001)).validate(1),
            Err(ValidationError::TooLong { .. })
        ));

        let request = draft(5, " Loved it ").validate(9).unwrap();
        assert_eq!(request.tour_id, 9);
        assert_eq!(request.comment, "Loved it");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.4), "★★★★☆");
        assert_eq!(stars(4.6), "★★★★★");
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut tours = seed_tours();

        let mut renamed = get_seed_tour(2, "Alpine Lakes Trek (updated)", 950.0);
        renamed.average_rating = None;
        upsert(&mut tours, renamed);
        assert_eq!(tours[1].title, "Alpine Lakes Trek (updated)");
        assert_eq!(tours.len(), 4);

        upsert(&mut tours, get_seed_tour(9, "New Route", 50.0));
        assert_eq!(tours[0].id, 9);
        assert_eq!(tours.len(), 5);

        assert!(remove(&mut tours, 3));
        assert!(!remove(&mut tours, 3));
        assert_eq!(ids(&tours), [9, 1, 2, 4]);
    }

    #[test]
    fn test_editor_field_helpers() {
        assert_eq!(require_text("  Rome ", "Name"), Ok("Rome".to_string()));
        assert_eq!(require_text("", "Name"), Err(ValidationError::Required("Name")));
        assert_eq!(optional_text("  "), None);

        assert_eq!(parse_positive("12.5", "Price"), Ok(12.5));
        assert_eq!(parse_positive("0", "Price"), Err(ValidationError::NotPositive("Price")));
        assert_eq!(parse_positive("abc", "Price"), Err(ValidationError::NotANumber("Price")));

        assert_eq!(parse_count("4", "Duration"), Ok(4));
        assert_eq!(parse_count("0", "Duration"), Err(ValidationError::NotPositive("Duration")));
        assert_eq!(parse_count("-1", "Duration"), Err(ValidationError::NotANumber("Duration")));

        assert_eq!(parse_optional_id("3"), Some(3));
        assert_eq!(parse_optional_id(""), None);

        assert_eq!(parse_optional_date("", "Start date"), Ok(None));
        assert_eq!(parse_optional_date("2026-05-01", "Start date"), Ok(Some(date(2026, 5, 1))));
        assert_eq!(
            parse_optional_date("01/05/2026", "Start date"),
            Err(ValidationError::InvalidDate("Start date"))
        );
    }
}
