use leptos::prelude::*;

use crate::frontend::effects::glow_gradient;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-gradient-to-r from-teal-500 to-cyan-500 text-white hover:shadow-lg hover:shadow-teal-500/30 focus:ring-teal-400",
            Self::Ghost => "border border-slate-700 text-slate-300 hover:border-slate-500 hover:text-white hover:bg-slate-800/50 focus:ring-slate-500",
            Self::Danger => "bg-gradient-to-r from-rose-500 to-red-500 text-white hover:shadow-lg hover:shadow-rose-500/30 focus:ring-rose-400",
        }
    }
}

/// Submit button with a pointer-tracking glow and a loading state.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: Option<String>,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional)] full_width: bool,
) -> impl IntoView {
    let glow = RwSignal::new(None::<(f64, f64)>);

    let classes = format!(
        "relative overflow-hidden inline-flex items-center justify-center px-6 py-3 font-semibold rounded-xl \
         transition-all duration-200 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-slate-950 \
         disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        variant.classes(),
        if full_width { "w-full" } else { "" }
    );
    let loading_text = loading_text.unwrap_or_else(|| "Loading...".to_string());
    let content = children();

    view! {
        <button
            type=button_type.unwrap_or_else(|| "submit".to_string())
            class=classes
            disabled=move || loading.get()
            on:mousemove=move |ev| glow.set(Some((f64::from(ev.offset_x()), f64::from(ev.offset_y()))))
            on:mouseleave=move |_| glow.set(None)
        >
            <span
                class="pointer-events-none absolute inset-0 transition-opacity duration-300"
                style=move || match glow.get() {
                    Some((x, y)) => format!("background: {}; opacity: 1;", glow_gradient(x, y, 120.0, "rgba(255,255,255,0.25)")),
                    None => "opacity: 0;".to_string(),
                }
            ></span>
            <span class="relative flex items-center gap-2" class:hidden=move || loading.get()>
                {content}
            </span>
            <Show when=move || loading.get()>
                <span class="relative flex items-center justify-center gap-2">
                    <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                    {loading_text.clone()}
                </span>
            </Show>
        </button>
    }
}
