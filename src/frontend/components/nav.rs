use leptos::prelude::*;

use crate::frontend::session::use_session;
use crate::services::access::dashboard_for;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let menu_open = RwSignal::new(false);

    let user = move || session.user();
    let dashboard = move || {
        user().and_then(|u| dashboard_for(u.role).map(|path| (path, u.role.label())))
    };

    let links = move || {
        view! {
            <a href="/tours" class="text-slate-300 hover:text-white transition-colors">"Tours"</a>
            <a href="/categories" class="text-slate-300 hover:text-white transition-colors">"Categories"</a>
            {move || user().map(|_| view! {
                <a href="/bookings" class="text-slate-300 hover:text-white transition-colors">"My Bookings"</a>
            })}
            {move || dashboard().map(|(path, label)| view! {
                <a href=path class="text-teal-300 hover:text-teal-200 transition-colors">{label}" Dashboard"</a>
            })}
        }
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-slate-950/70 border-b border-slate-800/80">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-3 group">
                    <span class="text-3xl group-hover:animate-bounce">"🧭"</span>
                    <span class="text-xl font-bold bg-gradient-to-r from-teal-300 to-cyan-400 bg-clip-text text-transparent">
                        "Tourbook"
                    </span>
                </a>
                <div class="hidden md:flex items-center gap-6">
                    {links}
                    {move || match user() {
                        Some(u) => view! {
                            <a href="/profile" class="w-9 h-9 rounded-full bg-gradient-to-br from-teal-500 to-cyan-600 flex items-center justify-center text-sm font-bold" title=u.full_name()>
                                {u.initials()}
                            </a>
                            <button class="btn-ghost text-sm px-4 py-2" on:click=move |_| session.sign_out()>
                                "Logout"
                            </button>
                        }.into_any(),
                        None => view! {
                            <a href="/login" class="btn-ghost text-sm px-4 py-2">"Login"</a>
                            <a href="/register" class="btn-primary text-sm px-4 py-2">"Get Started"</a>
                        }.into_any(),
                    }}
                </div>
                <button
                    class="md:hidden text-2xl text-slate-300"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-4 px-6 pb-6">
                    {links}
                    {move || if user().is_some() {
                        view! {
                            <a href="/profile" class="text-slate-300">"Profile"</a>
                            <button class="btn-ghost text-sm" on:click=move |_| session.sign_out()>"Logout"</button>
                        }.into_any()
                    } else {
                        view! {
                            <a href="/login" class="text-slate-300">"Login"</a>
                            <a href="/register" class="btn-primary text-sm text-center">"Get Started"</a>
                        }.into_any()
                    }}
                </div>
            </Show>
        </nav>
    }
}
