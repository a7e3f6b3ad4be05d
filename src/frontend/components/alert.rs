use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
    Info,
}

#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (icon, classes) = match variant {
        AlertVariant::Success => ("✓", "bg-emerald-500/10 border-emerald-500/30 text-emerald-300"),
        AlertVariant::Error => ("✕", "bg-red-500/10 border-red-500/30 text-red-300"),
        AlertVariant::Info => ("ℹ", "bg-sky-500/10 border-sky-500/30 text-sky-300"),
    };

    view! {
        <div class=format!("mb-6 p-4 rounded-xl border text-sm backdrop-blur-sm {}", classes) role="alert">
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
            {children.map(|c| view! { <div class="mt-3">{c()}</div> })}
        </div>
    }
}

#[component]
pub fn SuccessAlert(
    #[prop(into)] message: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <Alert message=message variant=AlertVariant::Success>
            {children.map(|c| c())}
        </Alert>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Error /> }
}

#[component]
pub fn InfoAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Info /> }
}

/// Shows the error held in `error`, if any.
#[component]
pub fn ErrorSlot(error: RwSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <ErrorAlert message=message /> })
}

#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-16 text-slate-400">
            <span class="w-10 h-10 border-4 border-teal-400/20 border-t-teal-400 rounded-full animate-spin"></span>
            <span class="text-sm">{label.unwrap_or_else(|| "Loading...".to_string())}</span>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="py-16 text-center text-slate-500">
            <p class="text-4xl mb-3">"🧭"</p>
            <p>{message}</p>
        </div>
    }
}
