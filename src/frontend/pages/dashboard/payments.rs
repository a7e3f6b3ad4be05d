use leptos::prelude::*;

use super::{remote_table, PanelCard, ROW, TABLE, THEAD};
use crate::api::{ApiClient, Scope};
use crate::frontend::session::{fetch_on_mount, Remote};
use crate::models::{format_price, timestamp, Payment, PaymentStatus};
use crate::services::booking::round_cents;

/// Sum of completed payments.
fn revenue(payments: &[Payment]) -> f64 {
    round_cents(
        payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Completed)
            .map(|p| p.amount)
            .sum(),
    )
}

#[component]
pub fn PaymentsPanel(scope: Scope) -> impl IntoView {
    let payments: Remote<Vec<Payment>> = RwSignal::new(None);
    fetch_on_mount(payments, move |client: ApiClient| async move {
        client.all_payments(scope).await
    });

    let stats = move || {
        payments.with(|p| match p {
            Some(Ok(list)) => Some((list.len(), revenue(list))),
            _ => None,
        })
    };

    view! {
        {move || stats().map(|(count, total)| view! {
            <div class="grid gap-4 md:grid-cols-2 mb-6">
                <div class="p-6 rounded-2xl bg-slate-900/60 border border-slate-800">
                    <p class="text-slate-400 text-sm">"Payments"</p>
                    <p class="text-3xl font-bold text-white">{count}</p>
                </div>
                <div class="p-6 rounded-2xl bg-slate-900/60 border border-slate-800">
                    <p class="text-slate-400 text-sm">"Revenue collected"</p>
                    <p class="text-3xl font-bold text-teal-300">{format_price(total)}</p>
                </div>
            </div>
        })}
        <PanelCard title="Payments">
            {move || remote_table(payments.get(), "No payments yet.", |list| view! {
                <table class=TABLE>
                    <thead class=THEAD>
                        <tr>
                            <th class="py-2">"#"</th>
                            <th>"Booking"</th>
                            <th>"Amount"</th>
                            <th>"Method"</th>
                            <th>"Status"</th>
                            <th>"Transaction"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|p| view! {
                                <tr class=ROW>
                                    <td class="py-2">{p.id}</td>
                                    <td>{format!("#{}", p.booking_id)}</td>
                                    <td>{format_price(p.amount)}</td>
                                    <td>{p.payment_method.label()}</td>
                                    <td>{p.status.label()}</td>
                                    <td class="font-mono text-xs">{p.transaction_id.clone().unwrap_or_default()}</td>
                                    <td>{timestamp::display(&p.payment_date)}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            })}
        </PanelCard>
    }
}
