use leptos::prelude::*;

use crate::api::ApiClient;
use crate::frontend::components::{
    Button, ButtonVariant, EmptyState, ErrorAlert, ErrorSlot, Loading, MainLayout, RequireAuth,
    SelectInput, SuccessAlert, TextInput,
};
use crate::frontend::session::{fetch_on_mount, spawn_action, update_loaded, use_session, Remote};
use crate::models::{format_price, timestamp, Booking, PaymentMethod};
use crate::services::booking::pay_booking;
use crate::services::collections::upsert;
use crate::services::validation::require_text;
use crate::types::RefundCreate;

#[component]
pub fn BookingsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout>
                <MyBookings/>
            </MainLayout>
        </RequireAuth>
    }
}

#[component]
fn MyBookings() -> impl IntoView {
    let bookings: Remote<Vec<Booking>> = RwSignal::new(None);
    let notice = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    fetch_on_mount(bookings, |client: ApiClient| async move { client.my_bookings().await });

    view! {
        <header class="py-10">
            <h1 class="text-4xl font-bold text-white mb-2">"My bookings"</h1>
            <p class="text-slate-400">"Pay, cancel or ask for a refund on your reservations."</p>
        </header>

        {move || notice.get().map(|message| view! { <SuccessAlert message=message/> })}
        <ErrorSlot error=error/>

        {move || match bookings.get() {
            None => view! { <Loading label="Loading your bookings..."/> }.into_any(),
            Some(Err(e)) => view! { <ErrorAlert message=e/> }.into_any(),
            Some(Ok(list)) if list.is_empty() => view! {
                <EmptyState message="You have no bookings yet."/>
                <div class="text-center">
                    <a href="/tours" class="btn-primary">"Find a tour"</a>
                </div>
            }
            .into_any(),
            Some(Ok(list)) => view! {
                <ul class="space-y-4 pb-16">
                    {list
                        .into_iter()
                        .map(|booking| view! {
                            <BookingRow booking=booking bookings=bookings notice=notice error=error/>
                        })
                        .collect_view()}
                </ul>
            }
            .into_any(),
        }}
    }
}

#[component]
fn BookingRow(
    booking: Booking,
    bookings: Remote<Vec<Booking>>,
    notice: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let session = use_session();
    let pending = RwSignal::new(false);
    let method = RwSignal::new(PaymentMethod::default().as_str().to_string());
    let refund_open = RwSignal::new(false);
    let reason = RwSignal::new(String::new());

    let id = booking.id;
    let can_cancel = booking.status.can_cancel();
    let awaits_payment = booking.awaits_payment();
    let can_refund = booking.can_request_refund();
    let stored = StoredValue::new(booking.clone());

    let method_options = Signal::derive(|| {
        PaymentMethod::ALL
            .iter()
            .map(|m| (m.as_str().to_string(), m.label().to_string()))
            .collect::<Vec<_>>()
    });

    let cancel = move |_| {
        error.set(None);
        spawn_action(
            session,
            pending,
            move |client| async move { client.cancel_booking(id).await },
            move |result| match result {
                Ok(updated) => {
                    update_loaded(bookings, |list| upsert(list, updated));
                    notice.set(Some(format!("Booking #{id} was cancelled.")));
                }
                Err(e) => error.set(Some(e)),
            },
        );
    };

    let pay = move |_| {
        error.set(None);
        let booking = stored.get_value();
        let method = method.get_untracked().parse::<PaymentMethod>().unwrap_or_default();
        spawn_action(
            session,
            pending,
            move |client| async move { pay_booking(&client, &booking, method).await },
            move |result| match result {
                Ok(payment) => {
                    update_loaded(bookings, |list| {
                        if let Some(b) = list.iter_mut().find(|b| b.id == id) {
                            b.paid = true;
                        }
                    });
                    notice.set(Some(format!(
                        "Paid {} for booking #{id}.",
                        format_price(payment.amount)
                    )));
                }
                Err(e) => error.set(Some(e)),
            },
        );
    };

    let request_refund = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let request = match require_text(&reason.get_untracked(), "Reason") {
            Ok(reason) => RefundCreate { booking_id: id, reason },
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        spawn_action(
            session,
            pending,
            move |client| async move { client.request_refund(&request).await },
            move |result| match result {
                Ok(_) => {
                    refund_open.set(false);
                    reason.set(String::new());
                    notice.set(Some(format!("Refund requested for booking #{id}.")));
                }
                Err(e) => error.set(Some(e)),
            },
        );
    };

    view! {
        <li class="p-6 rounded-2xl bg-slate-900/60 border border-slate-800">
            <div class="flex flex-wrap items-start justify-between gap-4">
                <div>
                    <a href=format!("/tours/{}", booking.tour_id) class="text-lg font-semibold text-white hover:text-teal-300">
                        {booking.title()}
                    </a>
                    <p class="text-sm text-slate-400">
                        {format!(
                            "#{} · {} participant(s) · booked {}",
                            booking.id,
                            booking.participants,
                            timestamp::display(&booking.booking_date)
                        )}
                    </p>
                    {booking.special_requests.clone().map(|r| view! {
                        <p class="text-xs text-slate-500 mt-1">{format!("Requests: {r}")}</p>
                    })}
                </div>
                <div class="text-right">
                    <p class="text-xl font-bold text-teal-300">{format_price(booking.total_price)}</p>
                    <span class=format!("inline-block mt-1 px-2 py-1 rounded text-xs {}", booking.status.badge_class())>
                        {booking.status.label()}
                    </span>
                    {move || {
                        let paid = bookings.with(|b| match b {
                            Some(Ok(list)) => list.iter().any(|b| b.id == id && b.paid),
                            _ => false,
                        });
                        if paid {
                            view! { <p class="text-xs text-emerald-300 mt-1">"Paid"</p> }.into_any()
                        } else {
                            view! { <p class="text-xs text-amber-300 mt-1">"Unpaid"</p> }.into_any()
                        }
                    }}
                </div>
            </div>

            <div class="flex flex-wrap items-end gap-3 mt-4">
                {awaits_payment.then(|| view! {
                    <div class="w-48">
                        <SelectInput label="Pay with" name=format!("method-{id}") value=method options=method_options/>
                    </div>
                    <Button loading=pending button_type="button" loading_text="Paying..." on:click=pay>
                        "Pay now"
                    </Button>
                })}
                {can_cancel.then(|| view! {
                    <Button variant=ButtonVariant::Ghost loading=pending button_type="button" on:click=cancel>
                        "Cancel booking"
                    </Button>
                })}
                {can_refund.then(|| view! {
                    <Button
                        variant=ButtonVariant::Ghost
                        loading=pending
                        button_type="button"
                        on:click=move |_| refund_open.update(|open| *open = !*open)
                    >
                        "Request refund"
                    </Button>
                })}
            </div>

            <Show when=move || refund_open.get()>
                <form class="mt-4 flex flex-wrap items-end gap-3" on:submit=request_refund>
                    <div class="flex-1 min-w-64">
                        <TextInput label="Why do you need a refund?" name=format!("reason-{id}") value=reason required=true/>
                    </div>
                    <Button variant=ButtonVariant::Danger loading=pending loading_text="Sending...">
                        "Send request"
                    </Button>
                </form>
            </Show>
        </li>
    }
}
