use leptos::prelude::*;

use crate::api::ApiClient;
use crate::frontend::components::{
    EmptyState, ErrorAlert, FloatingParticles, Footer, Loading, Navbar, Parallax, TourCard,
    WaveBackground,
};
use crate::frontend::session::{fetch_on_mount, Remote};
use crate::models::Tour;
use crate::services::catalog::featured;

const FEATURED_COUNT: usize = 6;

#[component]
pub fn LandingPage() -> impl IntoView {
    let tours: Remote<Vec<Tour>> = RwSignal::new(None);
    fetch_on_mount(tours, |client: ApiClient| async move { client.tours().await });

    view! {
        <div class="relative min-h-screen flex flex-col bg-slate-950 text-slate-100 overflow-x-hidden">
            <Navbar/>

            <section class="relative pt-40 pb-32 px-6 overflow-hidden">
                <Parallax depth=0.4>
                    <div class="absolute -top-24 left-1/2 -translate-x-1/2 w-[48rem] h-[48rem] rounded-full bg-teal-500/10 blur-3xl"></div>
                </Parallax>
                <FloatingParticles count=48/>
                <WaveBackground/>

                <div class="relative z-10 max-w-3xl mx-auto text-center">
                    <p class="inline-block mb-6 px-4 py-1 rounded-full border border-teal-500/30 bg-teal-500/10 text-teal-300 text-sm">
                        "New season, new horizons"
                    </p>
                    <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight">
                        "Find your next"<br/>
                        <span class="bg-gradient-to-r from-teal-300 via-cyan-400 to-sky-400 bg-clip-text text-transparent">
                            "great adventure"
                        </span>
                    </h1>
                    <p class="text-xl text-slate-400 max-w-2xl mx-auto mb-10">
                        "Guided tours in the places worth the trip. Reserve your seats and pay in a single step."
                    </p>
                    <div class="flex flex-wrap gap-4 justify-center">
                        <a href="/tours" class="btn-primary btn-large">"Browse tours"</a>
                        <a href="/categories" class="btn-ghost btn-large">"Explore categories"</a>
                    </div>
                </div>
            </section>

            <section class="relative z-10 py-20 px-6">
                <div class="max-w-6xl mx-auto">
                    <div class="flex items-end justify-between mb-10">
                        <h2 class="text-3xl md:text-4xl font-bold">
                            "Featured "<span class="text-teal-300">"tours"</span>
                        </h2>
                        <a href="/tours" class="text-teal-300 hover:text-teal-200 text-sm">"See all →"</a>
                    </div>
                    {move || match tours.get() {
                        None => view! { <Loading/> }.into_any(),
                        Some(Err(e)) => view! { <ErrorAlert message=e/> }.into_any(),
                        Some(Ok(list)) => {
                            let picks = featured(&list, FEATURED_COUNT);
                            if picks.is_empty() {
                                view! { <EmptyState message="No tours are open for booking yet."/> }.into_any()
                            } else {
                                view! {
                                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                                        {picks.into_iter().map(|tour| view! { <TourCard tour=tour/> }).collect_view()}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                    }}
                </div>
            </section>

            <div class="flex-grow"></div>
            <Footer/>
        </div>
    }
}
