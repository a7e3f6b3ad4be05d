//! Tabbed management dashboard shared by the admin and manager areas. Each
//! tab is a panel over one backend resource.

mod analytics;
mod bookings;
mod categories;
mod discounts;
mod locations;
mod payments;
mod refunds;
mod tours;
mod users;

use leptos::prelude::*;

use crate::api::Scope;
use analytics::AnalyticsPanel;
use bookings::BookingsPanel;
use categories::CategoriesPanel;
use discounts::DiscountsPanel;
use locations::LocationsPanel;
use payments::PaymentsPanel;
use refunds::RefundsPanel;
use tours::ToursPanel;
use users::UsersPanel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Users,
    Tours,
    Categories,
    Locations,
    Discounts,
    Refunds,
    Bookings,
    Payments,
    Reviews,
}

impl Tab {
    pub const ADMIN: &'static [Tab] = &[
        Self::Users,
        Self::Tours,
        Self::Categories,
        Self::Locations,
        Self::Discounts,
        Self::Refunds,
        Self::Bookings,
        Self::Payments,
        Self::Reviews,
    ];

    pub const MANAGER: &'static [Tab] = &[
        Self::Tours,
        Self::Bookings,
        Self::Payments,
        Self::Discounts,
        Self::Reviews,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Tours => "Tours",
            Self::Categories => "Categories",
            Self::Locations => "Locations",
            Self::Discounts => "Discounts",
            Self::Refunds => "Refunds",
            Self::Bookings => "Bookings",
            Self::Payments => "Payments",
            Self::Reviews => "Reviews",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Users => "👥",
            Self::Tours => "🗺",
            Self::Categories => "🏷",
            Self::Locations => "📍",
            Self::Discounts => "💸",
            Self::Refunds => "↩",
            Self::Bookings => "📋",
            Self::Payments => "💳",
            Self::Reviews => "⭐",
        }
    }

    fn render(self, scope: Scope) -> AnyView {
        match self {
            Self::Users => view! { <UsersPanel/> }.into_any(),
            Self::Tours => view! { <ToursPanel scope=scope/> }.into_any(),
            Self::Categories => view! { <CategoriesPanel/> }.into_any(),
            Self::Locations => view! { <LocationsPanel/> }.into_any(),
            Self::Discounts => view! { <DiscountsPanel scope=scope/> }.into_any(),
            Self::Refunds => view! { <RefundsPanel/> }.into_any(),
            Self::Bookings => view! { <BookingsPanel scope=scope/> }.into_any(),
            Self::Payments => view! { <PaymentsPanel scope=scope/> }.into_any(),
            Self::Reviews => view! { <AnalyticsPanel scope=scope/> }.into_any(),
        }
    }
}

#[component]
pub fn Dashboard(#[prop(into)] title: String, scope: Scope, tabs: &'static [Tab]) -> impl IntoView {
    let active = RwSignal::new(tabs.first().copied().unwrap_or(Tab::Tours));

    view! {
        <header class="py-10">
            <h1 class="text-4xl font-bold text-white">{title}</h1>
        </header>
        <nav class="flex flex-wrap gap-2 mb-8 border-b border-slate-800 pb-4">
            {tabs
                .iter()
                .copied()
                .map(|tab| view! {
                    <button
                        class="px-4 py-2 rounded-xl text-sm transition-colors"
                        class=("bg-teal-500/20", move || active.get() == tab)
                        class=("text-teal-200", move || active.get() == tab)
                        class=("text-slate-400", move || active.get() != tab)
                        class=("hover:text-white", move || active.get() != tab)
                        on:click=move |_| active.set(tab)
                    >
                        {format!("{} {}", tab.icon(), tab.label())}
                    </button>
                })
                .collect_view()}
        </nav>
        <section class="pb-16">{move || active.get().render(scope)}</section>
    }
}

/// Card framing a panel's list, with an optional form slot above it.
#[component]
fn PanelCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-slate-900/60 border border-slate-800 mb-6">
            <h2 class="text-xl font-semibold text-white mb-4">{title}</h2>
            {children()}
        </div>
    }
}

/// Loading, error and empty handling around a list panel's table.
fn remote_table<T, V>(
    state: Option<Result<Vec<T>, String>>,
    empty: &'static str,
    table: impl FnOnce(Vec<T>) -> V,
) -> AnyView
where
    V: IntoAny,
{
    use crate::frontend::components::{EmptyState, ErrorAlert, Loading};

    match state {
        None => view! { <Loading/> }.into_any(),
        Some(Err(e)) => view! { <ErrorAlert message=e/> }.into_any(),
        Some(Ok(items)) if items.is_empty() => view! { <EmptyState message=empty/> }.into_any(),
        Some(Ok(items)) => table(items).into_any(),
    }
}

const TABLE: &str = "w-full text-sm";
const THEAD: &str = "text-left text-slate-500 border-b border-slate-800";
const ROW: &str = "border-b border-slate-800/60 text-slate-300";
const ACTION: &str = "text-xs px-3 py-1 rounded-lg border border-slate-700 hover:border-teal-400 hover:text-teal-300 transition-colors";
const DANGER_ACTION: &str = "text-xs px-3 py-1 rounded-lg border border-rose-800 text-rose-300 hover:bg-rose-500/10 transition-colors";
