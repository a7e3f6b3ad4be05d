use leptos::prelude::*;

use crate::api::ApiClient;
use crate::frontend::components::{EmptyState, ErrorAlert, Loading, MainLayout, RequireAuth};
use crate::frontend::session::{fetch_on_mount, use_session, Remote};
use crate::models::{format_price, timestamp, Payment};
use crate::services::access::dashboard_for;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <MainLayout>
                <Profile/>
            </MainLayout>
        </RequireAuth>
    }
}

#[component]
fn Profile() -> impl IntoView {
    let session = use_session();
    let payments: Remote<Vec<Payment>> = RwSignal::new(None);
    fetch_on_mount(payments, |client: ApiClient| async move { client.my_payments().await });

    let Some(user) = session.user() else {
        return ().into_any();
    };
    let dashboard = dashboard_for(user.role);

    view! {
        <div class="grid gap-8 lg:grid-cols-3 py-10">
            <section class="p-8 rounded-2xl bg-slate-900/60 border border-slate-800 text-center">
                <div class="mx-auto mb-4 w-24 h-24 rounded-full bg-gradient-to-br from-teal-500 to-cyan-600 flex items-center justify-center text-3xl font-bold">
                    {user.initials()}
                </div>
                <h1 class="text-2xl font-bold text-white">{user.full_name()}</h1>
                <p class="text-slate-400">{user.email.clone()}</p>
                <span class="inline-block mt-3 px-3 py-1 rounded-full bg-teal-500/10 border border-teal-500/30 text-teal-300 text-xs">
                    {user.role.label()}
                </span>
                <div class="flex flex-col gap-3 mt-8">
                    <a href="/bookings" class="btn-ghost">"My bookings"</a>
                    {dashboard.map(|path| view! { <a href=path class="btn-ghost">"Open dashboard"</a> })}
                    <button class="btn-primary" on:click=move |_| session.sign_out()>"Logout"</button>
                </div>
            </section>

            <section class="lg:col-span-2">
                <h2 class="text-xl font-semibold text-white mb-4">"Payment history"</h2>
                {move || match payments.get() {
                    None => view! { <Loading/> }.into_any(),
                    Some(Err(e)) => view! { <ErrorAlert message=e/> }.into_any(),
                    Some(Ok(list)) if list.is_empty() => view! { <EmptyState message="No payments yet."/> }.into_any(),
                    Some(Ok(list)) => view! {
                        <table class="w-full text-sm">
                            <thead class="text-left text-slate-500">
                                <tr>
                                    <th class="py-2">"Booking"</th>
                                    <th>"Amount"</th>
                                    <th>"Method"</th>
                                    <th>"Status"</th>
                                    <th>"Date"</th>
                                </tr>
                            </thead>
                            <tbody class="text-slate-300">
                                {list
                                    .into_iter()
                                    .map(|p| view! {
                                        <tr class="border-t border-slate-800">
                                            <td class="py-2">{format!("#{}", p.booking_id)}</td>
                                            <td>{format_price(p.amount)}</td>
                                            <td>{p.payment_method.label()}</td>
                                            <td>{p.status.label()}</td>
                                            <td>{timestamp::display(&p.payment_date)}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
    .into_any()
}
