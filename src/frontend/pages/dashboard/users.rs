use leptos::prelude::*;

use super::{remote_table, PanelCard, DANGER_ACTION, ROW, TABLE, THEAD};
use crate::api::ApiClient;
use crate::frontend::components::{ErrorSlot, SuccessAlert};
use crate::frontend::session::{fetch_on_mount, spawn_action, update_loaded, use_session, Remote};
use crate::models::{timestamp, Role, User};
use crate::services::access::can_edit_account;
use crate::services::collections::{remove, upsert};

#[component]
pub fn UsersPanel() -> impl IntoView {
    let session = use_session();
    let users: Remote<Vec<User>> = RwSignal::new(None);
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    fetch_on_mount(users, |client: ApiClient| async move { client.users().await });

    let own_id = move || session.user().map(|u| u.id);
    let locked = move |id: i64| !can_edit_account(own_id(), id) || pending.get();

    let change_role = move |user_id: i64, role: Role| {
        error.set(None);
        spawn_action(
            session,
            pending,
            move |client| async move { client.change_role(user_id, role).await },
            move |result| match result {
                Ok(user) => {
                    notice.set(Some(format!("{} is now {}.", user.full_name(), user.role.label())));
                    update_loaded(users, |list| upsert(list, user));
                }
                Err(e) => error.set(Some(e)),
            },
        );
    };

    let delete = move |user_id: i64| {
        error.set(None);
        spawn_action(
            session,
            pending,
            move |client| async move { client.delete_user(user_id).await },
            move |result| match result {
                Ok(()) => {
                    update_loaded(users, |list| {
                        remove(list, user_id);
                    });
                    notice.set(Some(format!("User #{user_id} was deleted.")));
                }
                Err(e) => error.set(Some(e)),
            },
        );
    };

    view! {
        <PanelCard title="Users">
            {move || notice.get().map(|message| view! { <SuccessAlert message=message/> })}
            <ErrorSlot error=error/>
            {move || remote_table(users.get(), "No users found.", |list| view! {
                <table class=TABLE>
                    <thead class=THEAD>
                        <tr>
                            <th class="py-2">"Name"</th>
                            <th>"Email"</th>
                            <th>"Joined"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|user| {
                                let id = user.id;
                                view! {
                                    <tr class=ROW>
                                        <td class="py-2">{user.full_name()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{timestamp::display(&user.created_at)}</td>
                                        <td>
                                            <select
                                                class="bg-slate-800 rounded-lg px-2 py-1"
                                                disabled=move || locked(id)
                                                on:change=move |ev| {
                                                    if let Ok(role) = event_target_value(&ev).parse::<Role>() {
                                                        change_role(id, role);
                                                    }
                                                }
                                            >
                                                {Role::ALL
                                                    .iter()
                                                    .map(|role| view! {
                                                        <option value=role.as_str() selected={*role == user.role}>
                                                            {role.label()}
                                                        </option>
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td class="text-right">
                                            <button
                                                class=DANGER_ACTION
                                                disabled=move || locked(id)
                                                on:click=move |_| delete(id)
                                            >
                                                "Delete"
                                            </button>
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
