use leptos::prelude::*;

use super::{FloatingParticles, Footer, Navbar, WaveBackground};

/// Chrome for the catalog and dashboard pages.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="relative min-h-screen flex flex-col bg-slate-950 text-slate-100 overflow-x-hidden">
            <FloatingParticles count=24/>
            <Navbar/>
            <main class="relative z-10 flex-grow pt-24 px-6">
                <div class="max-w-6xl mx-auto">{children()}</div>
            </main>
            <Footer/>
        </div>
    }
}

/// Centered card over an animated backdrop, for the login and register pages.
#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="relative min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-br from-slate-950 via-slate-900 to-teal-950 overflow-hidden">
            <FloatingParticles count=36/>
            <WaveBackground/>
            <div class="relative z-10 w-full max-w-md">
                <div class="bg-slate-900/80 backdrop-blur-sm border border-slate-800 rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <a href="/" class="inline-block text-4xl mb-4 hover:animate-bounce">"🧭"</a>
                        <h1 class="text-2xl font-bold text-white">{title}</h1>
                        <p class="text-slate-400 mt-2">{subtitle}</p>
                    </div>
                    {children()}
                </div>
                <a href="/" class="block text-center text-slate-500 hover:text-slate-300 mt-6 text-sm transition-colors">
                    "← Back to home"
                </a>
            </div>
        </div>
    }
}
