use leptos::prelude::*;

use crate::api::ApiClient;
use crate::frontend::components::{EmptyState, ErrorAlert, Loading, MainLayout};
use crate::frontend::effects::glow_gradient;
use crate::frontend::session::{fetch_on_mount, Remote};
use crate::models::{Category, Tour};
use crate::services::catalog::category_counts;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories: Remote<Vec<Category>> = RwSignal::new(None);
    let tours: Remote<Vec<Tour>> = RwSignal::new(None);
    fetch_on_mount(categories, |client: ApiClient| async move { client.categories().await });
    fetch_on_mount(tours, |client: ApiClient| async move { client.tours().await });

    view! {
        <MainLayout>
            <header class="py-10">
                <h1 class="text-4xl font-bold text-white mb-2">"Categories"</h1>
                <p class="text-slate-400">"Pick a style of travel and see every tour in it."</p>
            </header>

            {move || match categories.get() {
                None => view! { <Loading/> }.into_any(),
                Some(Err(e)) => view! { <ErrorAlert message=e/> }.into_any(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <EmptyState message="No categories yet."/> }.into_any()
                }
                Some(Ok(list)) => {
                    let tours = match tours.get() {
                        Some(Ok(tours)) => tours,
                        _ => Vec::new(),
                    };
                    view! {
                        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 pb-16">
                            {category_counts(&list, &tours)
                                .into_iter()
                                .map(|(category, count)| view! { <CategoryCard category=category count=count/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </MainLayout>
    }
}

#[component]
fn CategoryCard(category: Category, count: usize) -> impl IntoView {
    let glow = RwSignal::new(None::<(f64, f64)>);
    let href = format!("/tours?category={}", category.id);
    let tours_label = match count {
        1 => "1 tour".to_string(),
        n => format!("{n} tours"),
    };

    view! {
        <a
            href=href
            class="group relative block overflow-hidden rounded-2xl border border-slate-800 bg-slate-900/60 p-6 hover:border-teal-500/50 transition-all duration-300 hover:-translate-y-1"
            on:mousemove=move |ev| glow.set(Some((f64::from(ev.offset_x()), f64::from(ev.offset_y()))))
            on:mouseleave=move |_| glow.set(None)
        >
            <span
                class="pointer-events-none absolute inset-0"
                style=move || glow
                    .get()
                    .map(|(x, y)| format!("background: {};", glow_gradient(x, y, 220.0, "rgba(45,212,191,0.15)")))
                    .unwrap_or_default()
            ></span>
            {category.image_url.clone().map(|src| view! {
                <img src=src alt="" class="relative w-full h-36 object-cover rounded-xl mb-4"/>
            })}
            <h2 class="relative text-xl font-semibold text-white group-hover:text-teal-300 transition-colors">
                {category.name.clone()}
            </h2>
            <p class="relative text-slate-400 text-sm mt-2">{category.description.clone().unwrap_or_default()}</p>
            <p class="relative text-teal-300 text-sm mt-4">{tours_label}</p>
        </a>
    }
}
