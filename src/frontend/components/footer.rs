use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative border-t border-slate-800 bg-slate-950/80">
            <div class="max-w-6xl mx-auto px-6 py-12 grid gap-8 md:grid-cols-3 text-sm">
                <div>
                    <p class="text-2xl font-bold mb-2">"🧭 Tourbook"</p>
                    <p class="text-slate-400">"Hand-picked journeys, booked in minutes."</p>
                </div>
                <div class="flex flex-col gap-2">
                    <p class="font-semibold text-slate-300">"Explore"</p>
                    <a href="/tours" class="text-slate-400 hover:text-white">"All tours"</a>
                    <a href="/categories" class="text-slate-400 hover:text-white">"Categories"</a>
                </div>
                <div class="flex flex-col gap-2">
                    <p class="font-semibold text-slate-300">"Account"</p>
                    <a href="/bookings" class="text-slate-400 hover:text-white">"My bookings"</a>
                    <a href="/profile" class="text-slate-400 hover:text-white">"Profile"</a>
                </div>
            </div>
            <p class="pb-8 text-center text-xs text-slate-600">"© 2024 Tourbook. All journeys reserved."</p>
        </footer>
    }
}
