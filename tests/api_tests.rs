mod common;

#[cfg(test)]
pub mod api_tests {
    use super::common::*;

    use tourbook::api::{Method, Scope};
    use tourbook::common::ApiError;
    use tourbook::models::*;
    use tourbook::types::*;

    #[tokio::test]
    async fn test_get_tours_decodes_list() {
        let tours = vec![
            get_seed_tour(1, "Alpine Lakes Trek", 199.0),
            get_seed_tour(2, "Old Town Walk", 25.0),
        ];
        let api = client(MockTransport::new().respond_json(200, &tours));

        let decoded = api.tours().await.unwrap();

        assert_eq!(decoded, tours);
        let request = &api.transport().requests()[0];
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, format!("{TEST_API}/tours"));
        assert_eq!(request.bearer, None);
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn test_tour_decodes_camel_case_and_defaults() {
        let body = r#"{
            "id": 5,
            "title": "Desert Stars Safari",
            "price": 349.5,
            "maxParticipants": 10,
            "availableSpots": 0,
            "categoryName": "Adventure",
            "startDate": "2026-09-01"
        }"#;
        let api = client(MockTransport::new().respond(200, body));

        let tour = api.tour(5).await.unwrap();

        assert_eq!(api.transport().requests()[0].url, format!("{TEST_API}/tours/5"));
        assert_eq!(tour.max_participants, 10);
        assert_eq!(tour.category_name.as_deref(), Some("Adventure"));
        assert_eq!(tour.start_date, Some(date(2026, 9, 1)));
        assert!(tour.active);
        assert!(tour.is_sold_out());
    }

    #[tokio::test]
    async fn test_authenticated_call_sends_bearer() {
        let api = authed_client(MockTransport::new().respond(200, "[]"));

        let bookings = api.my_bookings().await.unwrap();

        assert!(bookings.is_empty());
        let request = &api.transport().requests()[0];
        assert_eq!(request.url, format!("{TEST_API}/bookings/my"));
        assert_eq!(request.bearer.as_deref(), Some("test-token"));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_session_fatal_error() {
        let transport = MockTransport::new().respond(401, r#"{"message":"Token expired"}"#);
        let api = authed_client(transport);

        let err = api.my_payments().await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized);
        assert!(err.is_session_fatal());
    }

    #[tokio::test]
    async fn test_error_body_message_is_surfaced() {
        let transport = MockTransport::new().respond(400, r#"{"message":"Email already in use"}"#);
        let api = client(transport);
        let request = RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@test.com".into(),
            password: "secret1".into(),
        };

        let err = api.register(&request).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "Email already in use".into()
            }
        );
        assert_eq!(err.to_string(), "Email already in use");
        assert!(!err.is_session_fatal());
    }

    #[tokio::test]
    async fn test_error_without_body_uses_default_message() {
        let api = client(MockTransport::new().respond(404, ""));

        let err = api.tour(99).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "The requested resource was not found");
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_decode_error() {
        let api = client(MockTransport::new().respond(200, "<html>oops</html>"));

        assert!(matches!(api.categories().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_network_error_passes_through() {
        let api = client(MockTransport::new().fail(ApiError::Network("offline".into())));

        assert_eq!(api.locations().await, Err(ApiError::Network("offline".into())));
    }

    #[tokio::test]
    async fn test_register_body_is_camel_case() {
        let user = get_seed_user(Role::Client);
        let response = AuthResponse {
            token: make_token(NOW + 60),
            user,
        };
        let api = client(MockTransport::new().respond_json(200, &response));

        api.register(&RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@test.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();

        let body = api.transport().body(0);
        assert_eq!(api.transport().requests()[0].url, format!("{TEST_API}/auth/register"));
        assert_eq!(body["firstName"], "Ada");
        assert_eq!(body["lastName"], "Lovelace");
    }

    #[tokio::test]
    async fn test_cancel_booking_uses_patch() {
        let cancelled = get_seed_booking(4, 1, BookingStatus::Cancelled);
        let api = authed_client(MockTransport::new().respond_json(200, &cancelled));

        let booking = api.cancel_booking(4).await.unwrap();

        assert_eq!(booking.status, BookingStatus::Cancelled);
        let request = &api.transport().requests()[0];
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.url, format!("{TEST_API}/bookings/4/cancel"));
    }

    #[tokio::test]
    async fn test_create_booking_omits_empty_optionals() {
        let booking = get_seed_booking(1, 2, BookingStatus::Pending);
        let api = authed_client(MockTransport::new().respond_json(200, &booking));

        api.create_booking(&BookingCreate {
            tour_id: 2,
            participants: 3,
            special_requests: None,
            discount_code: None,
        })
        .await
        .unwrap();

        let body = api.transport().body(0);
        assert_eq!(body["tourId"], 2);
        assert_eq!(body["participants"], 3);
        assert!(body.get("specialRequests").is_none());
        assert!(body.get("discountCode").is_none());
    }

    #[tokio::test]
    async fn test_scope_prefixes_management_calls() {
        let api = authed_client(MockTransport::new().respond(200, "[]").respond(200, "[]"));

        api.managed_tours(Scope::Admin).await.unwrap();
        api.managed_tours(Scope::Manager).await.unwrap();

        let requests = api.transport().requests();
        assert_eq!(requests[0].url, format!("{TEST_API}/admin/tours"));
        assert_eq!(requests[1].url, format!("{TEST_API}/manager/tours"));
    }

    #[tokio::test]
    async fn test_change_role_puts_role() {
        let user = User {
            id: 9,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@test.com".into(),
            role: Role::Manager,
            phone: None,
            created_at: None,
        };
        let api = authed_client(MockTransport::new().respond_json(200, &user));

        let updated = api.change_role(9, Role::Manager).await.unwrap();

        assert_eq!(updated.role, Role::Manager);
        let request = &api.transport().requests()[0];
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, format!("{TEST_API}/admin/users/9/role"));
        assert_eq!(api.transport().body(0)["role"], "MANAGER");
    }

    #[tokio::test]
    async fn test_delete_ignores_empty_body() {
        let api = authed_client(MockTransport::new().respond(204, ""));

        api.delete_tour(Scope::Manager, 3).await.unwrap();

        let request = &api.transport().requests()[0];
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, format!("{TEST_API}/manager/tours/3"));
    }

    #[tokio::test]
    async fn test_update_booking_status_sends_wire_value() {
        let booking = get_seed_booking(6, 1, BookingStatus::Completed);
        let api = authed_client(MockTransport::new().respond_json(200, &booking));

        api.update_booking_status(Scope::Admin, 6, BookingStatus::Completed).await.unwrap();

        assert_eq!(
            api.transport().requests()[0].url,
            format!("{TEST_API}/admin/bookings/6/status")
        );
        assert_eq!(api.transport().body(0)["status"], "COMPLETED");
    }

    #[tokio::test]
    async fn test_refund_decisions() {
        let refund = Refund {
            id: 2,
            booking_id: 4,
            payment_id: Some(8),
            amount: 120.0,
            reason: "Sick".into(),
            status: RefundStatus::Approved,
            requested_at: None,
        };
        let api = authed_client(MockTransport::new().respond_json(200, &refund));

        let approved = api.approve_refund(2).await.unwrap();

        assert!(!approved.is_open());
        assert_eq!(
            api.transport().requests()[0].url,
            format!("{TEST_API}/admin/refunds/2/approve")
        );
    }

    #[tokio::test]
    async fn test_tour_reviews_path() {
        let api = client(MockTransport::new().respond_json(200, &vec![get_seed_review(1, 7, 5)]));

        let reviews = api.tour_reviews(1).await.unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(api.transport().requests()[0].url, format!("{TEST_API}/reviews/tour/1"));
    }
}
