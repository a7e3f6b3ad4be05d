use leptos::prelude::*;

use super::{remote_table, PanelCard, ACTION, DANGER_ACTION, ROW, TABLE, THEAD};
use crate::api::ApiClient;
use crate::frontend::components::{Button, ButtonVariant, ErrorSlot, TextInput};
use crate::frontend::session::{fetch_on_mount, spawn_action, update_loaded, use_session, Remote};
use crate::models::Location;
use crate::services::collections::{remove, upsert};
use crate::services::validation::{optional_text, require_text};
use crate::types::LocationUpsert;

#[component]
pub fn LocationsPanel() -> impl IntoView {
    let session = use_session();
    let locations: Remote<Vec<Location>> = RwSignal::new(None);
    fetch_on_mount(locations, |client: ApiClient| async move { client.locations().await });

    let editing = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let fill = move |location: &Location| {
        editing.set(Some(location.id));
        name.set(location.name.clone());
        city.set(location.city.clone().unwrap_or_default());
        country.set(location.country.clone().unwrap_or_default());
        description.set(location.description.clone().unwrap_or_default());
    };
    let reset = move || {
        editing.set(None);
        for field in [name, city, country, description] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let location = match require_text(&name.get_untracked(), "Name") {
            Ok(name) => LocationUpsert {
                name,
                city: optional_text(&city.get_untracked()),
                country: optional_text(&country.get_untracked()),
                description: optional_text(&description.get_untracked()),
            },
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let id = editing.get_untracked();

        spawn_action(
            session,
            pending,
            move |client| async move {
                match id {
                    Some(id) => client.update_location(id, &location).await,
                    None => client.create_location(&location).await,
                }
            },
            move |result| match result {
                Ok(saved) => {
                    update_loaded(locations, |list| upsert(list, saved));
                    reset();
                }
                Err(e) => error.set(Some(e)),
            },
        );
    };

    let delete = move |id: i64| {
        error.set(None);
        spawn_action(
            session,
            pending,
            move |client| async move { client.delete_location(id).await },
            move |result| match result {
                Ok(()) => update_loaded(locations, |list| {
                    remove(list, id);
                }),
                Err(e) => error.set(Some(e)),
            },
        );
    };

    view! {
        <PanelCard title="Locations">
            <ErrorSlot error=error/>
            <form class="grid gap-4 md:grid-cols-4 mb-6" on:submit=on_submit>
                <TextInput label="Name" name="location_name" value=name required=true/>
                <TextInput label="City" name="location_city" value=city/>
                <TextInput label="Country" name="location_country" value=country/>
                <TextInput label="Description" name="location_description" value=description/>
                <div class="md:col-span-4 flex gap-3">
                    <Button loading=pending loading_text="Saving...">
                        {move || if editing.get().is_some() { "Update location" } else { "Add location" }}
                    </Button>
                    <Show when=move || editing.get().is_some()>
                        <Button variant=ButtonVariant::Ghost loading=pending button_type="button" on:click=move |_| reset()>
                            "Cancel edit"
                        </Button>
                    </Show>
                </div>
            </form>

            {move || remote_table(locations.get(), "No locations yet.", |list| view! {
                <table class=TABLE>
                    <thead class=THEAD>
                        <tr>
                            <th class="py-2">"Name"</th>
                            <th>"Place"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|location| {
                                let id = location.id;
                                let label = location.label();
                                let stored = StoredValue::new(location.clone());
                                view! {
                                    <tr class=ROW>
                                        <td class="py-2">{location.name.clone()}</td>
                                        <td class="text-slate-400">{label}</td>
                                        <td class="text-right space-x-2">
                                            <button class=ACTION on:click=move |_| stored.with_value(|l| fill(l))>"Edit"</button>
                                            <button class=DANGER_ACTION on:click=move |_| delete(id)>"Delete"</button>
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
