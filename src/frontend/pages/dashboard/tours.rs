use leptos::prelude::*;

use super::{remote_table, PanelCard, ACTION, DANGER_ACTION, ROW, TABLE, THEAD};
use crate::api::{ApiClient, Scope};
use crate::common::ValidationError;
use crate::frontend::components::{
    Button, ButtonVariant, ErrorSlot, SelectInput, TextArea, TextInput,
};
use crate::frontend::session::{fetch_on_mount, spawn_action, update_loaded, use_session, Remote};
use crate::models::{Category, Location, Tour};
use crate::services::collections::{remove, upsert};
use crate::services::validation::{
    optional_text, parse_count, parse_optional_date, parse_optional_id, parse_positive,
    require_text,
};
use crate::types::TourUpsert;

#[derive(Clone, Copy)]
struct TourFields {
    editing: RwSignal<Option<i64>>,
    title: RwSignal<String>,
    description: RwSignal<String>,
    price: RwSignal<String>,
    duration: RwSignal<String>,
    max_participants: RwSignal<String>,
    category_id: RwSignal<String>,
    location_id: RwSignal<String>,
    image_url: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
}

impl TourFields {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            duration: RwSignal::new(String::new()),
            max_participants: RwSignal::new(String::new()),
            category_id: RwSignal::new(String::new()),
            location_id: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, tour: &Tour) {
        let id_text = |id: Option<i64>| id.map(|id| id.to_string()).unwrap_or_default();
        let date_text = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();

        self.editing.set(Some(tour.id));
        self.title.set(tour.title.clone());
        self.description.set(tour.description.clone());
        self.price.set(tour.price.to_string());
        self.duration.set(tour.duration.to_string());
        self.max_participants.set(tour.max_participants.to_string());
        self.category_id.set(id_text(tour.category_id));
        self.location_id.set(id_text(tour.location.as_ref().map(|l| l.id)));
        self.image_url.set(tour.image_url.clone().unwrap_or_default());
        self.start_date.set(date_text(tour.start_date));
        self.end_date.set(date_text(tour.end_date));
    }

    fn clear(&self) {
        self.editing.set(None);
        for field in [
            self.title,
            self.description,
            self.price,
            self.duration,
            self.max_participants,
            self.category_id,
            self.location_id,
            self.image_url,
            self.start_date,
            self.end_date,
        ] {
            field.set(String::new());
        }
    }

    fn to_upsert(&self) -> Result<TourUpsert, ValidationError> {
        let start_date = parse_optional_date(&self.start_date.get_untracked(), "Start date")?;
        let end_date = parse_optional_date(&self.end_date.get_untracked(), "End date")?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(ValidationError::InvalidDate("End date"));
            }
        }

        Ok(TourUpsert {
            title: require_text(&self.title.get_untracked(), "Title")?,
            description: require_text(&self.description.get_untracked(), "Description")?,
            price: parse_positive(&self.price.get_untracked(), "Price")?,
            duration: parse_count(&self.duration.get_untracked(), "Duration")?,
            max_participants: parse_count(
                &self.max_participants.get_untracked(),
                "Max participants",
            )?,
            category_id: parse_optional_id(&self.category_id.get_untracked()),
            location_id: parse_optional_id(&self.location_id.get_untracked()),
            image_url: optional_text(&self.image_url.get_untracked()),
            start_date,
            end_date,
        })
    }
}

fn options<T>(state: Option<Result<Vec<T>, String>>, none: &str, entry: impl Fn(T) -> (String, String)) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), none.to_string())];
    if let Some(Ok(items)) = state {
        options.extend(items.into_iter().map(entry));
    }
    options
}

#[component]
pub fn ToursPanel(scope: Scope) -> impl IntoView {
    let session = use_session();
    let tours: Remote<Vec<Tour>> = RwSignal::new(None);
    let categories: Remote<Vec<Category>> = RwSignal::new(None);
    let locations: Remote<Vec<Location>> = RwSignal::new(None);
    fetch_on_mount(tours, move |client: ApiClient| async move {
        client.managed_tours(scope).await
    });
    fetch_on_mount(categories, |client: ApiClient| async move { client.categories().await });
    fetch_on_mount(locations, |client: ApiClient| async move { client.locations().await });

    let fields = TourFields::new();
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let category_options = Signal::derive(move || {
        options(categories.get(), "No category", |c| (c.id.to_string(), c.name))
    });
    let location_options = Signal::derive(move || {
        options(locations.get(), "No location", |l| (l.id.to_string(), l.label()))
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let tour = match fields.to_upsert() {
            Ok(tour) => tour,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let editing = fields.editing.get_untracked();

        spawn_action(
            session,
            pending,
            move |client| async move {
                match editing {
                    Some(id) => client.update_tour(scope, id, &tour).await,
                    None => client.create_tour(scope, &tour).await,
                }
            },
            move |result| match result {
                Ok(saved) => {
                    update_loaded(tours, |list| upsert(list, saved));
                    fields.clear();
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
            move |client| async move { client.delete_tour(scope, id).await },
            move |result| match result {
                Ok(()) => update_loaded(tours, |list| {
                    remove(list, id);
                }),
                Err(e) => error.set(Some(e)),
            },
        );
    };

    view! {
        <PanelCard title="Tour editor">
            <ErrorSlot error=error/>
            <form class="grid gap-4 md:grid-cols-2" on:submit=on_submit>
                <TextInput label="Title" name="title" value=fields.title required=true/>
                <TextInput label="Image URL" name="image_url" value=fields.image_url/>
                <div class="md:col-span-2">
                    <TextArea label="Description" name="description" value=fields.description required=true/>
                </div>
                <TextInput label="Price" name="price" input_type="number" value=fields.price required=true/>
                <TextInput label="Duration (days)" name="duration" input_type="number" value=fields.duration required=true/>
                <TextInput label="Max participants" name="max_participants" input_type="number" value=fields.max_participants required=true/>
                <SelectInput label="Category" name="category_id" value=fields.category_id options=category_options/>
                <SelectInput label="Location" name="location_id" value=fields.location_id options=location_options/>
                <div class="grid grid-cols-2 gap-4">
                    <TextInput label="Start date" name="start_date" input_type="date" value=fields.start_date/>
                    <TextInput label="End date" name="end_date" input_type="date" value=fields.end_date/>
                </div>
                <div class="md:col-span-2 flex gap-3">
                    <Button loading=pending loading_text="Saving...">
                        {move || if fields.editing.get().is_some() { "Update tour" } else { "Create tour" }}
                    </Button>
                    <Show when=move || fields.editing.get().is_some()>
                        <Button variant=ButtonVariant::Ghost loading=pending button_type="button" on:click=move |_| fields.clear()>
                            "Cancel edit"
                        </Button>
                    </Show>
                </div>
            </form>
        </PanelCard>

        <PanelCard title="Tours">
            {move || remote_table(tours.get(), "No tours yet.", |list| view! {
                <table class=TABLE>
                    <thead class=THEAD>
                        <tr>
                            <th class="py-2">"Title"</th>
                            <th>"Price"</th>
                            <th>"Days"</th>
                            <th>"Seats"</th>
                            <th>"Location"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|tour| {
                                let id = tour.id;
                                let stored = StoredValue::new(tour.clone());
                                view! {
                                    <tr class=ROW>
                                        <td class="py-2">{tour.title.clone()}</td>
                                        <td>{tour.price_label()}</td>
                                        <td>{tour.duration}</td>
                                        <td>{format!("{}/{}", tour.remaining_capacity(), tour.max_participants)}</td>
                                        <td>{tour.location_label()}</td>
                                        <td class="text-right space-x-2">
                                            <button class=ACTION on:click=move |_| stored.with_value(|t| fields.fill(t))>"Edit"</button>
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
