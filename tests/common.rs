#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::NaiveDate;

use tourbook::api::{ApiClient, ApiRequest, ApiResponse, Transport};
use tourbook::common::*;
use tourbook::models::*;
use tourbook::services::session::{AuthSession, SessionStorage};

pub const TEST_API: &str = "http://api.test/api";

/// Records every request and replays queued responses in order.
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn respond_json<T: serde::Serialize>(self, status: u16, body: &T) -> Self {
        let body = serde_json::to_string(body).expect("serializable test body");
        self.respond(status, body)
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Parsed JSON body of the `index`-th request.
    pub fn body(&self, index: usize) -> serde_json::Value {
        let requests = self.requests.borrow();
        let body = requests[index].body.as_deref().expect("request has a body");
        serde_json::from_str(body).expect("request body is JSON")
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
    }
}

pub fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(transport, ApiConfig::new(TEST_API))
}

pub fn authed_client(transport: MockTransport) -> ApiClient<MockTransport> {
    client(transport).with_token("test-token")
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Unsigned JWT carrying the given claims JSON.
pub fn make_token_with(claims: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims)
    )
}

pub fn make_token(exp: i64) -> String {
    make_token_with(&format!(
        r#"{{"sub":"user0@test.com","role":"CLIENT","iat":1700000000,"exp":{exp}}}"#
    ))
}

pub const NOW: i64 = 1_767_225_600;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn get_seed_user(role: Role) -> SessionUser {
    SessionUser {
        id: 7,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@test.com".to_string(),
        role,
    }
}

pub fn get_seed_session(role: Role, exp: i64) -> AuthSession {
    AuthSession {
        token: make_token(exp),
        user: get_seed_user(role),
    }
}

pub fn get_seed_location() -> Location {
    Location {
        id: 3,
        name: "Lake Bled".to_string(),
        city: Some("Bled".to_string()),
        country: Some("Slovenia".to_string()),
        description: None,
    }
}

pub fn get_seed_tour(id: i64, title: &str, price: f64) -> Tour {
    Tour {
        id,
        title: title.to_string(),
        description: format!("A guided trip: {title}"),
        price,
        duration: 3,
        max_participants: 12,
        available_spots: Some(8),
        category_id: Some(1),
        category_name: Some("Hiking".to_string()),
        location: Some(get_seed_location()),
        image_url: None,
        start_date: Some(date(2026, 6, 1)),
        end_date: Some(date(2026, 6, 4)),
        average_rating: Some(4.5),
        active: true,
    }
}

pub fn get_seed_category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: None,
        image_url: None,
    }
}

pub fn get_seed_booking(id: i64, tour_id: i64, status: BookingStatus) -> Booking {
    Booking {
        id,
        tour_id,
        tour_title: Some("Alpine Lakes Trek".to_string()),
        user_id: Some(7),
        user_email: Some("ada@test.com".to_string()),
        participants: 2,
        total_price: 398.0,
        status,
        paid: false,
        special_requests: None,
        booking_date: None,
    }
}

pub fn get_seed_payment(id: i64, booking_id: i64, amount: f64) -> Payment {
    Payment {
        id,
        booking_id,
        amount,
        payment_method: PaymentMethod::CreditCard,
        status: PaymentStatus::Completed,
        transaction_id: Some(format!("tx-{id}")),
        payment_date: None,
    }
}

pub fn get_seed_discount(code: &str, discount_type: DiscountType, value: f64) -> Discount {
    Discount {
        id: 11,
        code: code.to_string(),
        description: None,
        discount_type,
        value,
        tour_id: None,
        valid_from: Some(date(2026, 1, 1)),
        valid_until: Some(date(2026, 12, 31)),
        active: true,
    }
}

pub fn get_seed_review(id: i64, user_id: i64, rating: u8) -> Review {
    Review {
        id,
        tour_id: 1,
        user_id: Some(user_id),
        user_name: Some(format!("user{user_id}")),
        rating,
        comment: "Great views".to_string(),
        created_at: None,
    }
}
