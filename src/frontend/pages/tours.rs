use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::api::ApiClient;
use crate::frontend::components::{
    EmptyState, ErrorAlert, Loading, MainLayout, SelectInput, TextInput, TourCard,
};
use crate::frontend::session::{fetch_on_mount, Remote};
use crate::models::{Category, Tour};
use crate::services::catalog::{TourFilter, TourSort};
use crate::services::validation::parse_optional_id;

#[component]
pub fn ToursPage() -> impl IntoView {
    let query = use_query_map();

    let tours: Remote<Vec<Tour>> = RwSignal::new(None);
    let categories: Remote<Vec<Category>> = RwSignal::new(None);
    fetch_on_mount(tours, |client: ApiClient| async move { client.tours().await });
    fetch_on_mount(categories, |client: ApiClient| async move { client.categories().await });

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(query.with_untracked(|q| q.get("category")).unwrap_or_default());
    let max_price = RwSignal::new(String::new());
    let sort = RwSignal::new(TourSort::default().key().to_string());

    let category_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All categories".to_string())];
        if let Some(Ok(list)) = categories.get() {
            options.extend(list.into_iter().map(|c| (c.id.to_string(), c.name)));
        }
        options
    });
    let sort_options = Signal::derive(|| {
        TourSort::ALL
            .iter()
            .map(|s| (s.key().to_string(), s.label().to_string()))
            .collect::<Vec<_>>()
    });

    let filter = move || TourFilter {
        query: search.get(),
        category_id: parse_optional_id(&category.get()),
        max_price: max_price.get().trim().parse().ok(),
        include_inactive: false,
        sort: TourSort::from_key(&sort.get()),
    };

    view! {
        <MainLayout>
            <header class="py-10">
                <h1 class="text-4xl font-bold text-white mb-2">"All tours"</h1>
                <p class="text-slate-400">"Search, filter and sort every tour open for booking."</p>
            </header>

            <div class="grid gap-4 md:grid-cols-4 mb-10 p-6 rounded-2xl bg-slate-900/60 border border-slate-800">
                <TextInput label="Search" name="search" value=search placeholder="Title, description or place"/>
                <SelectInput label="Category" name="category" value=category options=category_options/>
                <TextInput label="Max price" name="max_price" value=max_price input_type="number" placeholder="Any"/>
                <SelectInput label="Sort by" name="sort" value=sort options=sort_options/>
            </div>

            {move || match tours.get() {
                None => view! { <Loading label="Loading tours..."/> }.into_any(),
                Some(Err(e)) => view! { <ErrorAlert message=e/> }.into_any(),
                Some(Ok(list)) => {
                    let shown = filter().apply(&list);
                    if shown.is_empty() {
                        view! { <EmptyState message="No tours match your filters."/> }.into_any()
                    } else {
                        view! {
                            <p class="text-sm text-slate-500 mb-4">{format!("{} of {} tours", shown.len(), list.len())}</p>
                            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3 pb-16">
                                {shown.into_iter().map(|tour| view! { <TourCard tour=tour/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </MainLayout>
    }
}
