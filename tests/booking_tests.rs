mod common;

#[cfg(test)]
pub mod booking_tests {
    use super::common::*;

    use tourbook::common::{ApiError, BookingFlowError, ValidationError};
    use tourbook::models::*;
    use tourbook::services::booking::*;

    fn order(participants: u32) -> BookingOrder {
        BookingOrder::for_tour(
            &get_seed_tour(1, "Alpine Lakes Trek", 199.0),
            participants,
            PaymentMethod::Paypal,
        )
    }

    fn step_names(steps: &[BookingStep]) -> Vec<&'static str> {
        steps
            .iter()
            .map(|s| match s {
                BookingStep::Idle => "idle",
                BookingStep::CreatingBooking => "creating",
                BookingStep::Paying { .. } => "paying",
                BookingStep::Paid(_) => "paid",
                BookingStep::Failed(_) => "failed",
            })
            .collect()
    }

    #[tokio::test]
    async fn test_book_and_pay_happy_path() {
        let booking = get_seed_booking(21, 1, BookingStatus::Pending);
        let payment = get_seed_payment(5, 21, 398.0);
        let api = authed_client(
            MockTransport::new()
                .respond_json(201, &booking)
                .respond_json(201, &payment),
        );
        let mut steps = Vec::new();

        let receipt = book_and_pay(&api, &order(2), |s| steps.push(s)).await.unwrap();

        assert_eq!(receipt.booking, booking);
        assert_eq!(receipt.payment, payment);
        assert_eq!(step_names(&steps), ["creating", "paying", "paid"]);
        assert_eq!(steps[1], BookingStep::Paying { booking_id: 21 });

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, format!("{TEST_API}/bookings"));
        assert_eq!(requests[1].url, format!("{TEST_API}/payments"));

        let payment_body = api.transport().body(1);
        assert_eq!(payment_body["bookingId"], 21);
        assert_eq!(payment_body["amount"], 398.0);
        assert_eq!(payment_body["paymentMethod"], "PAYPAL");
    }

    #[tokio::test]
    async fn test_booking_failure_skips_payment() {
        let transport = MockTransport::new().respond(409, r#"{"message":"Not enough spots"}"#);
        let api = authed_client(transport);
        let mut steps = Vec::new();

        let err = book_and_pay(&api, &order(2), |s| steps.push(s)).await.unwrap_err();

        assert!(matches!(err, BookingFlowError::Booking(ApiError::Status { status: 409, .. })));
        assert!(err.unpaid_booking().is_none());
        assert_eq!(api.transport().request_count(), 1);
        assert_eq!(step_names(&steps), ["creating", "failed"]);
    }

    #[tokio::test]
    async fn test_payment_failure_leaves_pending_booking() {
        let booking = get_seed_booking(22, 1, BookingStatus::Pending);
        let api = authed_client(
            MockTransport::new()
                .respond_json(201, &booking)
                .respond(402, r#"{"message":"Card declined"}"#),
        );
        let mut steps = Vec::new();

        let err = book_and_pay(&api, &order(2), |s| steps.push(s)).await.unwrap_err();

        assert_eq!(err.unpaid_booking(), Some(&booking));
        assert!(err.to_string().contains("Booking #22"));
        assert!(err.to_string().contains("Card declined"));
        assert_eq!(step_names(&steps), ["creating", "paying", "failed"]);
        assert_eq!(api.transport().request_count(), 2);
    }

    #[tokio::test]
    async fn test_retry_pays_the_booking_left_unpaid() {
        let booking = get_seed_booking(24, 1, BookingStatus::Pending);
        let failed = authed_client(
            MockTransport::new()
                .respond_json(201, &booking)
                .respond(402, r#"{"message":"Card declined"}"#),
        );
        let err = book_and_pay(&failed, &order(2), |_| {}).await.unwrap_err();
        let left_unpaid = err.unpaid_booking().cloned().unwrap();

        let payment = get_seed_payment(6, 24, 398.0);
        let api = authed_client(MockTransport::new().respond_json(201, &payment));
        let mut steps = Vec::new();

        let receipt = pay_pending(&api, left_unpaid, PaymentMethod::DebitCard, |s| steps.push(s))
            .await
            .unwrap();

        assert_eq!(receipt.booking.id, 24);
        assert_eq!(step_names(&steps), ["paying", "paid"]);
        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, format!("{TEST_API}/payments"));
        assert_eq!(api.transport().body(0)["bookingId"], 24);
        assert_eq!(api.transport().body(0)["paymentMethod"], "DEBIT_CARD");
    }

    #[tokio::test]
    async fn test_failed_retry_keeps_the_booking() {
        let booking = get_seed_booking(25, 1, BookingStatus::Pending);
        let transport = MockTransport::new().respond(402, r#"{"message":"Card declined"}"#);
        let api = authed_client(transport);

        let err = pay_pending(&api, booking.clone(), PaymentMethod::Paypal, |_| {})
            .await
            .unwrap_err();

        assert_eq!(err.unpaid_booking(), Some(&booking));
        assert_eq!(api.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn test_unauthorized_payment_is_session_fatal() {
        let api = authed_client(
            MockTransport::new()
                .respond_json(201, &get_seed_booking(23, 1, BookingStatus::Pending))
                .respond(401, ""),
        );

        let err = book_and_pay(&api, &order(1), |_| {}).await.unwrap_err();

        assert!(err.is_session_fatal());
    }

    #[tokio::test]
    async fn test_invalid_order_sends_nothing() {
        let api = authed_client(MockTransport::new());
        let mut steps = Vec::new();

        let err = book_and_pay(&api, &order(0), |s| steps.push(s)).await.unwrap_err();

        assert_eq!(err, BookingFlowError::Invalid(ValidationError::Participants(8)));
        assert_eq!(api.transport().request_count(), 0);
        assert_eq!(step_names(&steps), ["failed"]);
    }

    #[tokio::test]
    async fn test_pay_booking_uses_booked_total() {
        let mut booking = get_seed_booking(30, 1, BookingStatus::Pending);
        booking.total_price = 150.25;
        let payment = get_seed_payment(9, 30, 150.25);
        let api = authed_client(MockTransport::new().respond_json(201, &payment));

        let payment = pay_booking(&api, &booking, PaymentMethod::BankTransfer).await.unwrap();

        assert_eq!(payment.booking_id, 30);
        let body = api.transport().body(0);
        assert_eq!(body["amount"], 150.25);
        assert_eq!(body["paymentMethod"], "BANK_TRANSFER");
    }

    #[test]
    fn test_order_validation() {
        assert_eq!(order(1).validate(), Ok(()));
        assert_eq!(order(8).validate(), Ok(()));
        assert_eq!(order(9).validate(), Err(ValidationError::Participants(8)));

        let mut sold_out = get_seed_tour(2, "Full", 10.0);
        sold_out.available_spots = Some(0);
        let order = BookingOrder::for_tour(&sold_out, 1, PaymentMethod::CreditCard);
        assert_eq!(order.validate(), Err(ValidationError::SoldOut));
    }

    #[test]
    fn test_capacity_falls_back_to_group_size() {
        let mut tour = get_seed_tour(3, "Open", 10.0);
        tour.available_spots = None;

        let order = BookingOrder::for_tour(&tour, 12, PaymentMethod::CreditCard);

        assert_eq!(order.capacity, 12);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_special_requests_are_trimmed_and_limited() {
        let blank = order(1).with_special_requests("   ");
        assert_eq!(blank.special_requests, None);

        let long = order(1).with_special_requests("x".repeat(501));
        assert!(matches!(long.validate(), Err(ValidationError::TooLong { .. })));
    }

    #[test]
    fn test_order_pricing_with_discounts() {
        let plain = order(2);
        assert_eq!(plain.subtotal(), 398.0);
        assert_eq!(plain.total(), 398.0);
        assert_eq!(plain.savings(), 0.0);

        let summer = get_seed_discount("SUMMER10", DiscountType::Percentage, 10.0);
        let percent = order(2).with_discount(Some(summer));
        assert_eq!(percent.total(), 358.2);
        assert_eq!(percent.savings(), 39.8);

        let big = get_seed_discount("BIG", DiscountType::FixedAmount, 500.0);
        let fixed = order(1).with_discount(Some(big));
        assert_eq!(fixed.total(), 0.0);

        let request = percent.booking_request();
        assert_eq!(request.discount_code.as_deref(), Some("SUMMER10"));
        assert_eq!(request.participants, 2);
    }

    #[test]
    fn test_find_discount() {
        let mut tour_only = get_seed_discount("TOUR5", DiscountType::FixedAmount, 5.0);
        tour_only.tour_id = Some(2);
        let mut inactive = get_seed_discount("OLD", DiscountType::Percentage, 50.0);
        inactive.active = false;
        let summer = get_seed_discount("SUMMER10", DiscountType::Percentage, 10.0);
        let discounts = vec![summer, tour_only, inactive];
        let today = date(2026, 7, 1);

        assert_eq!(find_discount(&discounts, " summer10 ", 1, today).map(|d| d.id), Some(11));
        assert!(find_discount(&discounts, "TOUR5", 1, today).is_none());
        assert!(find_discount(&discounts, "TOUR5", 2, today).is_some());
        assert!(find_discount(&discounts, "OLD", 1, today).is_none());
        assert!(find_discount(&discounts, "SUMMER10", 1, date(2027, 1, 1)).is_none());
        assert!(find_discount(&discounts, "", 1, today).is_none());
    }

    #[test]
    fn test_step_flags() {
        assert!(BookingStep::CreatingBooking.is_busy());
        assert!(BookingStep::Paying { booking_id: 1 }.is_busy());
        assert!(!BookingStep::Failed("x".into()).is_busy());
        assert!(!BookingStep::Idle.is_paid());
    }
}
