use leptos::prelude::*;

use super::{remote_table, PanelCard, ACTION, DANGER_ACTION, ROW, TABLE, THEAD};
use crate::api::{ApiClient, Scope};
use crate::common::ValidationError;
use crate::frontend::components::{
    Button, ButtonVariant, Checkbox, ErrorSlot, SelectInput, TextInput,
};
use crate::frontend::session::{fetch_on_mount, spawn_action, update_loaded, use_session, Remote};
use crate::models::{Discount, DiscountType};
use crate::services::collections::{remove, upsert};
use crate::services::validation::{
    optional_text, parse_optional_date, parse_optional_id, parse_positive, require_text,
};
use crate::types::DiscountUpsert;

#[derive(Clone, Copy)]
struct DiscountFields {
    editing: RwSignal<Option<i64>>,
    code: RwSignal<String>,
    description: RwSignal<String>,
    discount_type: RwSignal<String>,
    value: RwSignal<String>,
    tour_id: RwSignal<String>,
    valid_from: RwSignal<String>,
    valid_until: RwSignal<String>,
    active: RwSignal<bool>,
}

impl DiscountFields {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            code: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            discount_type: RwSignal::new(DiscountType::default().as_str().to_string()),
            value: RwSignal::new(String::new()),
            tour_id: RwSignal::new(String::new()),
            valid_from: RwSignal::new(String::new()),
            valid_until: RwSignal::new(String::new()),
            active: RwSignal::new(true),
        }
    }

    fn fill(&self, discount: &Discount) {
        self.editing.set(Some(discount.id));
        self.code.set(discount.code.clone());
        self.description.set(discount.description.clone().unwrap_or_default());
        self.discount_type.set(discount.discount_type.as_str().to_string());
        self.value.set(discount.value.to_string());
        self.tour_id.set(discount.tour_id.map(|id| id.to_string()).unwrap_or_default());
        self.valid_from.set(discount.valid_from.map(|d| d.to_string()).unwrap_or_default());
        self.valid_until.set(discount.valid_until.map(|d| d.to_string()).unwrap_or_default());
        self.active.set(discount.active);
    }

    fn clear(&self) {
        self.editing.set(None);
        for field in [
            self.code,
            self.description,
            self.value,
            self.tour_id,
            self.valid_from,
            self.valid_until,
        ] {
            field.set(String::new());
        }
        self.discount_type.set(DiscountType::default().as_str().to_string());
        self.active.set(true);
    }

    fn to_upsert(&self) -> Result<DiscountUpsert, ValidationError> {
        let discount_type = self
            .discount_type
            .get_untracked()
            .parse::<DiscountType>()
            .unwrap_or_default();
        let value = parse_positive(&self.value.get_untracked(), "Value")?;
        if discount_type == DiscountType::Percentage && value > 100.0 {
            return Err(ValidationError::PercentageTooHigh);
        }

        let valid_from = parse_optional_date(&self.valid_from.get_untracked(), "Valid from")?;
        let valid_until = parse_optional_date(&self.valid_until.get_untracked(), "Valid until")?;
        if let (Some(from), Some(until)) = (valid_from, valid_until) {
            if until < from {
                return Err(ValidationError::InvalidDate("Valid until"));
            }
        }

        Ok(DiscountUpsert {
            code: require_text(&self.code.get_untracked(), "Code")?.to_uppercase(),
            description: optional_text(&self.description.get_untracked()),
            discount_type,
            value,
            tour_id: parse_optional_id(&self.tour_id.get_untracked()),
            valid_from,
            valid_until,
            active: self.active.get_untracked(),
        })
    }
}

#[component]
pub fn DiscountsPanel(scope: Scope) -> impl IntoView {
    let session = use_session();
    let discounts: Remote<Vec<Discount>> = RwSignal::new(None);
    fetch_on_mount(discounts, move |client: ApiClient| async move {
        client.discounts(scope).await
    });

    let fields = DiscountFields::new();
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let type_options = Signal::derive(|| {
        DiscountType::ALL
            .iter()
            .map(|t| (t.as_str().to_string(), t.label().to_string()))
            .collect::<Vec<_>>()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let discount = match fields.to_upsert() {
            Ok(discount) => discount,
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
                    Some(id) => client.update_discount(scope, id, &discount).await,
                    None => client.create_discount(scope, &discount).await,
                }
            },
            move |result| match result {
                Ok(saved) => {
                    update_loaded(discounts, |list| upsert(list, saved));
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
            move |client| async move { client.delete_discount(scope, id).await },
            move |result| match result {
                Ok(()) => update_loaded(discounts, |list| {
                    remove(list, id);
                }),
                Err(e) => error.set(Some(e)),
            },
        );
    };

    view! {
        <PanelCard title="Discounts">
            <ErrorSlot error=error/>
            <form class="grid gap-4 md:grid-cols-4 mb-6" on:submit=on_submit>
                <TextInput label="Code" name="discount_code" value=fields.code required=true/>
                <SelectInput label="Type" name="discount_type" value=fields.discount_type options=type_options/>
                <TextInput label="Value" name="discount_value" input_type="number" value=fields.value required=true/>
                <TextInput label="Tour id" name="discount_tour" value=fields.tour_id placeholder="All tours"/>
                <TextInput label="Valid from" name="valid_from" input_type="date" value=fields.valid_from/>
                <TextInput label="Valid until" name="valid_until" input_type="date" value=fields.valid_until/>
                <TextInput label="Description" name="discount_description" value=fields.description/>
                <div class="flex items-end pb-3">
                    <Checkbox label="Active" value=fields.active/>
                </div>
                <div class="md:col-span-4 flex gap-3">
                    <Button loading=pending loading_text="Saving...">
                        {move || if fields.editing.get().is_some() { "Update discount" } else { "Add discount" }}
                    </Button>
                    <Show when=move || fields.editing.get().is_some()>
                        <Button variant=ButtonVariant::Ghost loading=pending button_type="button" on:click=move |_| fields.clear()>
                            "Cancel edit"
                        </Button>
                    </Show>
                </div>
            </form>

            {move || remote_table(discounts.get(), "No discounts yet.", |list| view! {
                <table class=TABLE>
                    <thead class=THEAD>
                        <tr>
                            <th class="py-2">"Code"</th>
                            <th>"Value"</th>
                            <th>"Tour"</th>
                            <th>"Valid"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {list
                            .into_iter()
                            .map(|discount| {
                                let id = discount.id;
                                let window = match (discount.valid_from, discount.valid_until) {
                                    (None, None) => "Always".to_string(),
                                    (from, until) => format!(
                                        "{} → {}",
                                        from.map(|d| d.to_string()).unwrap_or_else(|| "…".into()),
                                        until.map(|d| d.to_string()).unwrap_or_else(|| "…".into())
                                    ),
                                };
                                let stored = StoredValue::new(discount.clone());
                                view! {
                                    <tr class=ROW>
                                        <td class="py-2 font-mono">{discount.code.clone()}</td>
                                        <td>{discount.value_label()}</td>
                                        <td>{discount.tour_id.map(|t| format!("#{t}")).unwrap_or_else(|| "All".into())}</td>
                                        <td class="text-slate-400">{window}</td>
                                        <td>{if discount.active { "Active" } else { "Inactive" }}</td>
                                        <td class="text-right space-x-2">
                                            <button class=ACTION on:click=move |_| stored.with_value(|d| fields.fill(d))>"Edit"</button>
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
