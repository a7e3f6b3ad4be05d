use leptos::prelude::*;

use crate::frontend::effects::glow_gradient;
use crate::models::Tour;
use crate::services::reviews::stars;

/// Catalog card with a glow that follows the pointer.
#[component]
pub fn TourCard(tour: Tour) -> impl IntoView {
    let glow = RwSignal::new(None::<(f64, f64)>);
    let href = format!("/tours/{}", tour.id);
    let location = tour.location_label();
    let rating = tour.average_rating;
    let sold_out = tour.is_sold_out();

    view! {
        <a
            href=href
            class="group relative block overflow-hidden rounded-2xl bg-slate-900/60 border border-slate-800 \
                   hover:border-teal-500/50 transition-all duration-300 hover:-translate-y-1"
            on:mousemove=move |ev| glow.set(Some((f64::from(ev.offset_x()), f64::from(ev.offset_y()))))
            on:mouseleave=move |_| glow.set(None)
        >
            <div
                class="pointer-events-none absolute inset-0 z-10 transition-opacity duration-300"
                style=move || match glow.get() {
                    Some((x, y)) => format!("background: {};", glow_gradient(x, y, 260.0, "rgba(45,212,191,0.15)")),
                    None => "opacity: 0;".to_string(),
                }
            ></div>
            <div class="h-48 bg-slate-800 overflow-hidden">
                {tour.image_url.clone().map(|src| view! {
                    <img src=src alt=tour.title.clone() class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"/>
                })}
            </div>
            <div class="p-5 space-y-2">
                <div class="flex items-center justify-between text-xs text-slate-400">
                    <span>{tour.category_name.clone().unwrap_or_default()}</span>
                    <span>{tour.duration_label()}</span>
                </div>
                <h3 class="text-lg font-semibold text-white">{tour.title.clone()}</h3>
                <p class="text-sm text-slate-400">{location}</p>
                <div class="flex items-center justify-between pt-2">
                    <span class="text-xl font-bold text-teal-300">{tour.price_label()}</span>
                    {match rating {
                        Some(r) => view! { <span class="text-amber-400 text-sm">{stars(r)}</span> }.into_any(),
                        None => view! { <span class="text-slate-500 text-xs">"No reviews yet"</span> }.into_any(),
                    }}
                </div>
                {sold_out.then(|| view! {
                    <span class="inline-block mt-1 px-2 py-1 rounded bg-red-500/10 text-red-300 text-xs">"Sold out"</span>
                })}
            </div>
        </a>
    }
}
