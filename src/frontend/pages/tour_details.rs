use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::ApiClient;
use crate::frontend::browser;
use crate::frontend::components::{
    Button, EmptyState, ErrorAlert, InfoAlert, Loading, MainLayout, ReviewForm, ReviewList,
    SelectInput, SuccessAlert, TextArea, TextInput,
};
use crate::frontend::session::{fetch_on_mount, spawn_fetch, use_session, Remote};
use crate::models::{format_price, Booking, Discount, PaymentMethod, Review, Tour};
use crate::services::booking::{book_and_pay, find_discount, pay_pending, BookingOrder, BookingStep};
use crate::services::reviews::{can_review, stars};

#[component]
pub fn TourDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let tour_id = params.with_untracked(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));

    let Some(tour_id) = tour_id else {
        return view! {
            <MainLayout>
                <EmptyState message="That tour does not exist."/>
            </MainLayout>
        }
        .into_any();
    };

    let session = use_session();
    let tour: Remote<Tour> = RwSignal::new(None);
    let reviews: Remote<Vec<Review>> = RwSignal::new(None);
    let discounts: Remote<Vec<Discount>> = RwSignal::new(None);
    let bookings: Remote<Vec<Booking>> = RwSignal::new(None);

    fetch_on_mount(tour, move |client: ApiClient| async move { client.tour(tour_id).await });
    fetch_on_mount(reviews, move |client: ApiClient| async move {
        client.tour_reviews(tour_id).await
    });
    fetch_on_mount(discounts, |client: ApiClient| async move { client.active_discounts().await });

    // Review eligibility needs the visitor's own bookings.
    Effect::new(move |_| {
        if session.is_ready() && session.is_authenticated() {
            spawn_fetch(session, bookings, |client| async move { client.my_bookings().await });
        }
    });

    let show_review_form = move || {
        let Some(user) = session.user() else {
            return false;
        };
        let eligible = bookings.with(|b| matches!(b, Some(Ok(list)) if can_review(list, tour_id)));
        let already_reviewed = reviews.with(|r| {
            matches!(r, Some(Ok(list)) if list.iter().any(|review| review.user_id == Some(user.id)))
        });
        eligible && !already_reviewed
    };

    view! {
        <MainLayout>
            {move || match tour.get() {
                None => view! { <Loading label="Loading tour..."/> }.into_any(),
                Some(Err(e)) => view! { <ErrorAlert message=e/> }.into_any(),
                Some(Ok(tour)) => view! { <TourOverview tour=tour discounts=discounts/> }.into_any(),
            }}

            <section class="py-12 border-t border-slate-800">
                <h2 class="text-2xl font-bold text-white mb-6">"Reviews"</h2>
                <Show when=show_review_form>
                    <div class="mb-8">
                        <ReviewForm tour_id=tour_id reviews=reviews/>
                    </div>
                </Show>
                {move || match reviews.get() {
                    None => view! { <Loading/> }.into_any(),
                    Some(Err(e)) => view! { <ErrorAlert message=e/> }.into_any(),
                    Some(Ok(list)) => view! { <ReviewList reviews=list/> }.into_any(),
                }}
            </section>
        </MainLayout>
    }
    .into_any()
}

#[component]
fn TourOverview(tour: Tour, discounts: Remote<Vec<Discount>>) -> impl IntoView {
    let dates = match (tour.start_date, tour.end_date) {
        (Some(start), Some(end)) => Some(format!(
            "{} – {}",
            start.format("%b %-d, %Y"),
            end.format("%b %-d, %Y")
        )),
        (Some(start), None) => Some(format!("From {}", start.format("%b %-d, %Y"))),
        _ => None,
    };
    let spots = match tour.available_spots {
        Some(0) => "Sold out".to_string(),
        Some(n) => format!("{n} of {} spots left", tour.max_participants),
        None => format!("Groups of up to {}", tour.max_participants),
    };

    view! {
        <div class="grid gap-10 lg:grid-cols-3 py-10">
            <article class="lg:col-span-2 space-y-6">
                <div class="h-80 rounded-2xl overflow-hidden bg-slate-800">
                    {tour.image_url.clone().map(|src| view! {
                        <img src=src alt=tour.title.clone() class="w-full h-full object-cover"/>
                    })}
                </div>
                <div>
                    <p class="text-sm text-teal-300 mb-2">{tour.category_name.clone().unwrap_or_default()}</p>
                    <h1 class="text-4xl font-bold text-white mb-3">{tour.title.clone()}</h1>
                    <div class="flex flex-wrap gap-4 text-sm text-slate-400">
                        <span>{format!("📍 {}", tour.location_label())}</span>
                        <span>{format!("⏱ {}", tour.duration_label())}</span>
                        <span>{format!("👥 {spots}")}</span>
                        {dates.map(|d| view! { <span>{format!("📅 {d}")}</span> })}
                        {tour.average_rating.map(|r| view! {
                            <span class="text-amber-400">{format!("{} {:.1}", stars(r), r)}</span>
                        })}
                    </div>
                </div>
                <p class="text-slate-300 leading-relaxed whitespace-pre-line">{tour.description.clone()}</p>
            </article>

            <aside>
                <BookingPanel tour=tour discounts=discounts/>
            </aside>
        </div>
    }
}

/// Checkout card: reserves the seats, then pays for them.
#[component]
fn BookingPanel(tour: Tour, discounts: Remote<Vec<Discount>>) -> impl IntoView {
    let session = use_session();

    let tour_id = tour.id;
    let price_label = tour.price_label();
    let sold_out = tour.is_sold_out();
    let capacity = tour.remaining_capacity();
    let tour = StoredValue::new(tour);

    let participants = RwSignal::new("1".to_string());
    let method = RwSignal::new(PaymentMethod::default().as_str().to_string());
    let code = RwSignal::new(String::new());
    let special_requests = RwSignal::new(String::new());
    let step = RwSignal::new(BookingStep::Idle);
    let unpaid = RwSignal::new(None::<Booking>);

    let discount = move || {
        let code = code.get();
        discounts.with(|d| match d {
            Some(Ok(list)) => find_discount(list, &code, tour_id, browser::today()).cloned(),
            _ => None,
        })
    };
    let order = move || {
        let count = participants.get().trim().parse::<u32>().unwrap_or(0);
        let method = method.get().parse::<PaymentMethod>().unwrap_or_default();
        tour.with_value(|t| BookingOrder::for_tour(t, count, method))
            .with_discount(discount())
            .with_special_requests(special_requests.get())
    };

    let method_options = Signal::derive(|| {
        PaymentMethod::ALL
            .iter()
            .map(|m| (m.as_str().to_string(), m.label().to_string()))
            .collect::<Vec<_>>()
    });
    let busy = Signal::derive(move || step.with(BookingStep::is_busy));

    // A booking left unpaid by a failed payment is retried rather than booked again.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let order = order();
        let retry = unpaid.get_untracked();

        spawn_local(async move {
            let Some(client) = session.client() else {
                step.set(BookingStep::Idle);
                return;
            };

            let on_step = |s: BookingStep| step.set(s);
            let result = match retry {
                Some(booking) => pay_pending(&client, booking, order.payment_method, on_step).await,
                None => book_and_pay(&client, &order, on_step).await,
            };

            match result {
                Ok(_) => unpaid.set(None),
                Err(e) => {
                    unpaid.set(e.unpaid_booking().cloned());
                    if e.is_session_fatal() {
                        session.expire();
                    }
                }
            }
        });
    };
    let submit_label = move || match unpaid.get() {
        Some(booking) => format!("Retry payment for booking #{}", booking.id),
        None => "Book and pay".to_string(),
    };

    view! {
        <div class="sticky top-28 p-6 rounded-2xl bg-slate-900/80 border border-slate-800 shadow-xl">
            <p class="text-3xl font-bold text-teal-300 mb-1">{price_label}</p>
            <p class="text-slate-500 text-sm mb-6">"per person"</p>

            <StepTracker step=step/>

            {move || match step.get() {
                BookingStep::Paid(receipt) => view! {
                    <SuccessAlert message=format!("Booking #{} is confirmed.", receipt.booking.id)>
                        <p class="text-sm">{format!("Paid {} by {}", format_price(receipt.payment.amount), receipt.payment.payment_method.label())}</p>
                        {receipt.payment.transaction_id.clone().map(|tx| view! {
                            <p class="text-xs text-emerald-400/70">{format!("Transaction {tx}")}</p>
                        })}
                        <a href="/bookings" class="inline-block mt-3 text-emerald-200 underline">"View my bookings"</a>
                    </SuccessAlert>
                }
                .into_any(),
                BookingStep::Failed(message) => view! {
                    <ErrorAlert message=message/>
                    {move || unpaid.get().map(|_| view! {
                        <a href="/bookings" class="block -mt-3 mb-6 text-sm text-teal-300 underline">"Pay it from My Bookings"</a>
                    })}
                }
                .into_any(),
                _ => ().into_any(),
            }}

            {sold_out.then(|| view! { <InfoAlert message="This tour is fully booked."/> })}

            <Show when=move || { !sold_out && !step.with(BookingStep::is_paid) }>
                <form class="space-y-4" on:submit=on_submit>
                    <TextInput
                        label="Participants"
                        name="participants"
                        input_type="number"
                        value=participants
                        hint=format!("Up to {capacity}")
                        required=true
                    />
                    <SelectInput label="Payment method" name="payment_method" value=method options=method_options/>
                    <TextInput label="Discount code" name="discount_code" value=code placeholder="Optional"/>
                    {move || {
                        let entered = !code.get().trim().is_empty();
                        match discount() {
                            Some(d) => view! {
                                <p class="text-xs text-emerald-300">{format!("{} applied: {}", d.code, d.value_label())}</p>
                            }
                            .into_any(),
                            None if entered => view! {
                                <p class="text-xs text-amber-300">"That code is not valid for this tour."</p>
                            }
                            .into_any(),
                            None => ().into_any(),
                        }
                    }}
                    <TextArea label="Special requests" name="special_requests" value=special_requests placeholder="Dietary needs, accessibility..."/>

                    {move || {
                        let order = order();
                        view! {
                            <dl class="text-sm space-y-1 pt-2 border-t border-slate-800">
                                <div class="flex justify-between text-slate-400">
                                    <dt>"Subtotal"</dt>
                                    <dd>{format_price(order.subtotal())}</dd>
                                </div>
                                {(order.savings() > 0.0).then(|| view! {
                                    <div class="flex justify-between text-emerald-300">
                                        <dt>"Discount"</dt>
                                        <dd>{format!("-{}", format_price(order.savings()))}</dd>
                                    </div>
                                })}
                                <div class="flex justify-between text-white font-semibold text-base">
                                    <dt>"Total"</dt>
                                    <dd>{format_price(order.total())}</dd>
                                </div>
                            </dl>
                        }
                    }}

                    {move || if session.is_authenticated() {
                        view! {
                            <Button loading=busy loading_text="Processing..." full_width=true>
                                {submit_label}
                            </Button>
                            <p class="text-center text-xs text-slate-500">{move || step.with(BookingStep::label)}</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <a href="/login" class="btn-primary block text-center">"Sign in to book"</a>
                        }
                        .into_any()
                    }}
                </form>
            </Show>
        </div>
    }
}

#[component]
fn StepTracker(step: RwSignal<BookingStep>) -> impl IntoView {
    let stage = move || match step.get() {
        BookingStep::Idle | BookingStep::Failed(_) => 0,
        BookingStep::CreatingBooking => 1,
        BookingStep::Paying { .. } => 2,
        BookingStep::Paid(_) => 3,
    };

    view! {
        <ol class="flex items-center gap-2 mb-6 text-xs">
            {[(1, "Reserve"), (2, "Pay"), (3, "Confirmed")]
                .into_iter()
                .map(|(n, label)| view! {
                    <li
                        class="flex-1 text-center py-1 rounded-full border transition-colors"
                        class=("border-teal-400", move || stage() >= n)
                        class=("text-teal-300", move || stage() >= n)
                        class=("border-slate-700", move || stage() < n)
                        class=("text-slate-500", move || stage() < n)
                    >
                        {label}
                    </li>
                })
                .collect_view()}
        </ol>
    }
}
