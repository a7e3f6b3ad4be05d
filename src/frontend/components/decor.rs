use leptos::prelude::*;

use crate::frontend::browser;
use crate::frontend::effects::{parallax_offset, particles, Wave};

#[component]
pub fn FloatingParticles(count: usize) -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 overflow-hidden" aria-hidden="true">
            {particles(count)
                .into_iter()
                .map(|p| view! {
                    <span class="absolute rounded-full bg-teal-300/60 animate-float" style=p.style()></span>
                })
                .collect_view()}
        </div>
    }
}

/// Two layered sine waves along the bottom of the container.
#[component]
pub fn WaveBackground() -> impl IntoView {
    let back = Wave {
        phase: 1.2,
        amplitude: 30.0,
        ..Default::default()
    }
    .path();
    let front = Wave::default().path();

    view! {
        <svg
            class="pointer-events-none absolute bottom-0 left-0 w-full h-48"
            viewBox="0 0 1440 320"
            preserveAspectRatio="none"
            aria-hidden="true"
        >
            <path d=back fill="rgba(20,184,166,0.12)"></path>
            <path d=front fill="rgba(6,182,212,0.18)"></path>
        </svg>
    }
}

/// Background layer that drifts slower than the page while scrolling.
#[component]
pub fn Parallax(depth: f64, children: Children) -> impl IntoView {
    let offset = RwSignal::new(0.0_f64);
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        offset.set(parallax_offset(browser::scroll_y(), depth));
    });
    on_cleanup(move || handle.remove());

    view! {
        <div style=move || format!("transform: translate3d(0, {:.1}px, 0);", offset.get())>
            {children()}
        </div>
    }
}
