use leptos::prelude::*;

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-xl bg-slate-800/80 border border-slate-700 \
     text-white placeholder-slate-500 focus:outline-none focus:ring-2 focus:ring-teal-400 \
     focus:border-transparent transition-all";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
) -> impl IntoView {
    let has_hint = !hint.is_empty();

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            />
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-slate-500">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn EmailInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email"
            required=true
            value=value
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] hint: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name=name.unwrap_or_else(|| "password".to_string())
            placeholder="••••••••"
            input_type="password"
            required=true
            hint=hint
            value=value
        />
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <textarea
                id=name.clone()
                name=name
                rows="4"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class=FIELD_CLASSES
            ></textarea>
        </div>
    }
}

/// Select over `(value, label)` options.
#[component]
pub fn SelectInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-slate-300 mb-2">
                {label}
            </label>
            <select
                id=name.clone()
                name=name
                class=FIELD_CLASSES
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = value.get_untracked() == option_value;
                            view! {
                                <option value=option_value selected=selected>
                                    {option_label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
pub fn Checkbox(#[prop(into)] label: String, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-3 text-sm text-slate-300 cursor-pointer select-none">
            <input
                type="checkbox"
                class="w-4 h-4 rounded accent-teal-500"
                prop:checked=move || value.get()
                on:change=move |ev| value.set(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}
