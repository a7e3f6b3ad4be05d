//! Booking-then-payment checkout.
//!
//! The booking is created first and the payment references its id. There is
//! no compensation: when the payment fails the booking remains pending and is
//! returned inside the error so it can be paid later from the bookings page.

use chrono::NaiveDate;

use crate::common::{ApiError, BookingFlowError, ValidationError};
use crate::models::{Booking, Discount, Payment, PaymentMethod, Tour};
use crate::types::{BookingCreate, PaymentCreate};

const MAX_SPECIAL_REQUESTS: usize = 500;

#[allow(async_fn_in_trait)]
pub trait BookingGateway {
    async fn create_booking(&self, request: &BookingCreate) -> Result<Booking, ApiError>;
    async fn create_payment(&self, request: &PaymentCreate) -> Result<Payment, ApiError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingOrder {
    pub tour_id: i64,
    pub unit_price: f64,
    pub capacity: u32,
    pub participants: u32,
    pub payment_method: PaymentMethod,
    pub discount: Option<Discount>,
    pub special_requests: Option<String>,
}

impl BookingOrder {
    pub fn for_tour(tour: &Tour, participants: u32, payment_method: PaymentMethod) -> Self {
        Self {
            tour_id: tour.id,
            unit_price: tour.price,
            capacity: tour.remaining_capacity(),
            participants,
            payment_method,
            discount: None,
            special_requests: None,
        }
    }

    pub fn with_discount(mut self, discount: Option<Discount>) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_special_requests(mut self, requests: impl Into<String>) -> Self {
        let requests = requests.into();
        let requests = requests.trim();
        self.special_requests = (!requests.is_empty()).then(|| requests.to_string());
        self
    }

    pub fn subtotal(&self) -> f64 {
        round_cents(self.unit_price * f64::from(self.participants))
    }

    /// Estimated total shown before checkout. The backend computes the
    /// authoritative price on the created booking.
    pub fn total(&self) -> f64 {
        let subtotal = self.subtotal();

        match &self.discount {
            Some(discount) => round_cents(discount.apply(subtotal)),
            None => subtotal,
        }
    }

    pub fn savings(&self) -> f64 {
        round_cents(self.subtotal() - self.total())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 {
            return Err(ValidationError::SoldOut);
        }
        if self.participants == 0 || self.participants > self.capacity {
            return Err(ValidationError::Participants(self.capacity));
        }
        if self
            .special_requests
            .as_ref()
            .is_some_and(|r| r.chars().count() > MAX_SPECIAL_REQUESTS)
        {
            return Err(ValidationError::TooLong {
                field: "Special requests",
                max: MAX_SPECIAL_REQUESTS,
            });
        }

        Ok(())
    }

    pub fn booking_request(&self) -> BookingCreate {
        BookingCreate {
            tour_id: self.tour_id,
            participants: self.participants,
            special_requests: self.special_requests.clone(),
            discount_code: self.discount.as_ref().map(|d| d.code.clone()),
        }
    }
}

/// Progress of a checkout, reported to the caller as each step starts or ends.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BookingStep {
    #[default]
    Idle,
    CreatingBooking,
    Paying { booking_id: i64 },
    Paid(BookingReceipt),
    Failed(String),
}

impl BookingStep {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::CreatingBooking | Self::Paying { .. })
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready to book",
            Self::CreatingBooking => "Reserving your seats...",
            Self::Paying { .. } => "Processing payment...",
            Self::Paid(_) => "Booking confirmed",
            Self::Failed(_) => "Booking failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingReceipt {
    pub booking: Booking,
    pub payment: Payment,
}

pub async fn book_and_pay<G, F>(
    gateway: &G,
    order: &BookingOrder,
    mut on_step: F,
) -> Result<BookingReceipt, BookingFlowError>
where
    G: BookingGateway,
    F: FnMut(BookingStep),
{
    if let Err(e) = order.validate() {
        on_step(BookingStep::Failed(e.to_string()));
        return Err(e.into());
    }

    on_step(BookingStep::CreatingBooking);

    let booking = match gateway.create_booking(&order.booking_request()).await {
        Ok(booking) => booking,
        Err(e) => {
            log::warn!("Booking for tour {} failed: {e}", order.tour_id);
            let err = BookingFlowError::Booking(e);
            on_step(BookingStep::Failed(err.to_string()));
            return Err(err);
        }
    };

    pay_pending(gateway, booking, order.payment_method, on_step).await
}

/// Pays a booking an earlier checkout left pending, reporting steps from
/// `Paying` on. A failure hands the booking back for another attempt.
pub async fn pay_pending<G, F>(
    gateway: &G,
    booking: Booking,
    payment_method: PaymentMethod,
    mut on_step: F,
) -> Result<BookingReceipt, BookingFlowError>
where
    G: BookingGateway,
    F: FnMut(BookingStep),
{
    on_step(BookingStep::Paying {
        booking_id: booking.id,
    });

    match pay_booking(gateway, &booking, payment_method).await {
        Ok(payment) => {
            log::info!("Booking {} paid with payment {}", booking.id, payment.id);
            let receipt = BookingReceipt { booking, payment };
            on_step(BookingStep::Paid(receipt.clone()));
            Ok(receipt)
        }
        Err(source) => {
            log::warn!("Payment for booking {} failed: {source}", booking.id);
            let err = BookingFlowError::Payment {
                booking: Box::new(booking),
                source,
            };
            on_step(BookingStep::Failed(err.to_string()));
            Err(err)
        }
    }
}

/// Pays an existing booking for the amount the backend priced it at.
pub async fn pay_booking<G: BookingGateway>(
    gateway: &G,
    booking: &Booking,
    payment_method: PaymentMethod,
) -> Result<Payment, ApiError> {
    gateway
        .create_payment(&PaymentCreate {
            booking_id: booking.id,
            amount: booking.total_price,
            payment_method,
        })
        .await
}

/// Looks up a discount code the client typed at checkout.
pub fn find_discount<'a>(
    discounts: &'a [Discount],
    code: &str,
    tour_id: i64,
    today: NaiveDate,
) -> Option<&'a Discount> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }

    discounts.iter().find(|d| {
        d.code.eq_ignore_ascii_case(code) && d.applies_to(tour_id) && d.is_active_on(today)
    })
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
