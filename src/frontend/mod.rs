pub mod browser;
pub mod components;
pub mod effects;
pub mod pages;
pub mod session;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::common::ApiConfig;
use pages::{
    AdminPage, BookingsPage, CategoriesPage, LandingPage, LoginPage, ManagerPage, NotFound,
    ProfilePage, RegisterPage, TourDetailsPage, ToursPage,
};
use session::SessionContext;

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-slate-950 text-slate-100 antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    SessionContext::provide(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/tourbook.css"/>
        <Title text="Tourbook - Discover and book guided tours"/>
        <Meta name="description" content="Browse hand-picked tours, book your seats and pay in one go."/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route path=path!("/tours") view=ToursPage/>
                <Route path=path!("/tours/:id") view=TourDetailsPage/>
                <Route path=path!("/categories") view=CategoriesPage/>
                <Route path=path!("/bookings") view=BookingsPage/>
                <Route path=path!("/profile") view=ProfilePage/>
                <Route path=path!("/admin") view=AdminPage/>
                <Route path=path!("/manager") view=ManagerPage/>
            </Routes>
        </Router>
    }
}
