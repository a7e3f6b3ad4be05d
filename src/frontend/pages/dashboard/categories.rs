use leptos::prelude::*;

use super::{remote_table, PanelCard, ACTION, DANGER_ACTION, ROW, TABLE, THEAD};
use crate::api::ApiClient;
use crate::frontend::components::{Button, ButtonVariant, ErrorSlot, TextInput};
use crate::frontend::session::{fetch_on_mount, spawn_action, update_loaded, use_session, Remote};
use crate::models::Category;
use crate::services::collections::{remove, upsert};
use crate::services::validation::{optional_text, require_text};
use crate::types::CategoryUpsert;

#[component]
pub fn CategoriesPanel() -> impl IntoView {
    let session = use_session();
    let categories: Remote<Vec<Category>> = RwSignal::new(None);
    fetch_on_mount(categories, |client: ApiClient| async move { client.categories().await });

    let editing = RwSignal::new(None::<i64>);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let reset = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
        image_url.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let category = match require_text(&name.get_untracked(), "Name") {
            Ok(name) => CategoryUpsert {
                name,
                description: optional_text(&description.get_untracked()),
                image_url: optional_text(&image_url.get_untracked()),
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
                    Some(id) => client.update_category(id, &category).await,
                    None => client.create_category(&category).await,
                }
            },
            move |result| match result {
                Ok(saved) => {
                    update_loaded(categories, |list| upsert(list, saved));
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
            move |client| async move { client.delete_category(id).await },
            move |result| match result {
                Ok(()) => update_loaded(categories, |list| {
                    remove(list, id);
                }),
                Err(e) => error.set(Some(e)),
            },
        );
    };

    view! {
        <PanelCard title="Categories">
            <ErrorSlot error=error/>
            <form class="grid gap-4 md:grid-cols-3 mb-6" on:submit=on_submit>
                <TextInput label="Name" name="category_name" value=name required=true/>
                <TextInput label="Description" name="category_description" value=description/>
                <TextInput label="Image URL" name="category_image" value=image_url/>
                <div class="md:col-span-3 flex gap-3">
                    <Button loading=pending loading_text="Saving...">
                        {move || if editing.get().is_some() { "Update category" } else { "Add category" }}
                    </Button>
                    <Show when=move || editing.get().is_some()>
                        <Button variant=ButtonVariant::Ghost loading=pending button_type="button" on:click=move |_| reset()>
                            "Cancel edit"
                        </Button>
                    </Show>
                </div>
            </form>

            {move || remote_table(categories.get(), "No categories yet.", |list| view! {
                <table class=TABLE>
                    <thead class=THEAD>
                        <tr>
                            <th class="py-2">"Name"</th>
                            <th>"Description"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|category| {
                                let Category { id, name: title, description: about, image_url: image } = category;
                                let fill = (title.clone(), about.clone().unwrap_or_default(), image.unwrap_or_default());
                                view! {
                                    <tr class=ROW>
                                        <td class="py-2">{title}</td>
                                        <td class="text-slate-400">{about.unwrap_or_default()}</td>
                                        <td class="text-right space-x-2">
                                            <button
                                                class=ACTION
                                                on:click=move |_| {
                                                    editing.set(Some(id));
                                                    name.set(fill.0.clone());
                                                    description.set(fill.1.clone());
                                                    image_url.set(fill.2.clone());
                                                }
                                            >
                                                "Edit"
                                            </button>
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
