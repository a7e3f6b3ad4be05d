use leptos::prelude::*;

use super::{remote_table, PanelCard, ROW, TABLE, THEAD};
use crate::api::{ApiClient, Scope};
use crate::frontend::components::ErrorSlot;
use crate::frontend::session::{fetch_on_mount, spawn_action, update_loaded, use_session, Remote};
use crate::models::{format_price, timestamp, Booking, BookingStatus};
use crate::services::collections::upsert;

#[component]
pub fn BookingsPanel(scope: Scope) -> impl IntoView {
    let session = use_session();
    let bookings: Remote<Vec<Booking>> = RwSignal::new(None);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let status_filter = RwSignal::new(String::new());
    fetch_on_mount(bookings, move |client: ApiClient| async move {
        client.all_bookings(scope).await
    });

    let set_status = move |id: i64, status: BookingStatus| {
        error.set(None);
        spawn_action(
            session,
            pending,
            move |client| async move { client.update_booking_status(scope, id, status).await },
            move |result| match result {
                Ok(booking) => update_loaded(bookings, |list| upsert(list, booking)),
                Err(e) => error.set(Some(e)),
            },
        );
    };

    view! {
        <PanelCard title="Bookings">
            <ErrorSlot error=error/>
            <div class="flex gap-2 mb-4 text-xs">
                <button class="px-3 py-1 rounded-full border border-slate-700" on:click=move |_| status_filter.set(String::new())>
                    "All"
                </button>
                {BookingStatus::ALL
                    .iter()
                    .map(|status| {
                        let key = status.as_str();
                        view! {
                            <button
                                class="px-3 py-1 rounded-full border border-slate-700"
                                class=("border-teal-400", move || status_filter.get() == key)
                                on:click=move |_| status_filter.set(key.to_string())
                            >
                                {status.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let filter = status_filter.get();
                let state = bookings.get().map(|r| {
                    r.map(|list| {
                        list.into_iter()
                            .filter(|b| filter.is_empty() || b.status == filter.as_str())
                            .collect::<Vec<_>>()
                    })
                });
                remote_table(state, "No bookings match.", |list| view! {
                    <table class=TABLE>
                        <thead class=THEAD>
                            <tr>
                                <th class="py-2">"#"</th>
                                <th>"Tour"</th>
                                <th>"Customer"</th>
                                <th>"Seats"</th>
                                <th>"Total"</th>
                                <th>"Paid"</th>
                                <th>"Booked"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|booking| {
                                    let id = booking.id;
                                    let current = booking.status;
                                    view! {
                                        <tr class=ROW>
                                            <td class="py-2">{id}</td>
                                            <td>{booking.title()}</td>
                                            <td>{booking.user_email.clone().unwrap_or_default()}</td>
                                            <td>{booking.participants}</td>
                                            <td>{format_price(booking.total_price)}</td>
                                            <td>{if booking.paid { "Yes" } else { "No" }}</td>
                                            <td>{timestamp::display(&booking.booking_date)}</td>
                                            <td>
                                                <select
                                                    class=format!("rounded-lg px-2 py-1 bg-slate-800 {}", current.badge_class())
                                                    disabled=move || pending.get()
                                                    on:change=move |ev| {
                                                        if let Ok(status) = event_target_value(&ev).parse::<BookingStatus>() {
                                                            if status != current {
                                                                set_status(id, status);
                                                            }
                                                        }
                                                    }
                                                >
                                                    {BookingStatus::ALL
                                                        .iter()
                                                        .map(|status| view! {
                                                            <option value=status.as_str() selected={*status == current}>
                                                                {status.label()}
                                                            </option>
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                })
            }}
        </PanelCard>
    }
}
