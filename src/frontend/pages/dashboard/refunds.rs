use leptos::prelude::*;

use super::{remote_table, PanelCard, ACTION, DANGER_ACTION, ROW, TABLE, THEAD};
use crate::api::ApiClient;
use crate::frontend::components::ErrorSlot;
use crate::frontend::session::{fetch_on_mount, spawn_action, update_loaded, use_session, Remote};
use crate::models::{format_price, timestamp, Refund};
use crate::services::collections::upsert;

#[component]
pub fn RefundsPanel() -> impl IntoView {
    let session = use_session();
    let refunds: Remote<Vec<Refund>> = RwSignal::new(None);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    fetch_on_mount(refunds, |client: ApiClient| async move { client.refunds().await });

    let decide = move |id: i64, approve: bool| {
        error.set(None);
        spawn_action(
            session,
            pending,
            move |client| async move {
                if approve {
                    client.approve_refund(id).await
                } else {
                    client.reject_refund(id).await
                }
            },
            move |result| match result {
                Ok(refund) => update_loaded(refunds, |list| upsert(list, refund)),
                Err(e) => error.set(Some(e)),
            },
        );
    };

    let open_count = move || {
        refunds.with(|r| match r {
            Some(Ok(list)) => list.iter().filter(|r| r.is_open()).count(),
            _ => 0,
        })
    };

    view! {
        <PanelCard title="Refund requests">
            <p class="text-sm text-slate-400 mb-4">{move || format!("{} awaiting a decision", open_count())}</p>
            <ErrorSlot error=error/>
            {move || remote_table(refunds.get(), "No refund requests.", |list| view! {
                <table class=TABLE>
                    <thead class=THEAD>
                        <tr>
                            <th class="py-2">"Booking"</th>
                            <th>"Amount"</th>
                            <th>"Reason"</th>
                            <th>"Requested"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|refund| {
                                let id = refund.id;
                                view! {
                                    <tr class=ROW>
                                        <td class="py-2">{format!("#{}", refund.booking_id)}</td>
                                        <td>{format_price(refund.amount)}</td>
                                        <td class="text-slate-400 max-w-xs truncate" title=refund.reason.clone()>{refund.reason.clone()}</td>
                                        <td>{timestamp::display(&refund.requested_at)}</td>
                                        <td>{refund.status.label()}</td>
                                        <td class="text-right space-x-2">
                                            {refund.is_open().then(|| view! {
                                                <button class=ACTION disabled=move || pending.get() on:click=move |_| decide(id, true)>
                                                    "Approve"
                                                </button>
                                                <button class=DANGER_ACTION disabled=move || pending.get() on:click=move |_| decide(id, false)>
                                                    "Reject"
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            })}
        </PanelCard>
    }
}
