//! Scroll-driven chrome: progress bar and back-to-top button

use gloo::events::EventListener;
use leptos::*;

use crate::utils::{document_scroll_percent, scroll_to_top};

const BACK_TO_TOP_OFFSET: f64 = 300.0;

/// Runs `on_scroll` for every window scroll event until the component unmounts.
fn on_window_scroll(on_scroll: impl Fn() + 'static) {
    let listener = EventListener::new(&window(), "scroll", move |_| on_scroll());
    on_cleanup(move || drop(listener));
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (progress, set_progress) = create_signal(0.0_f64);
    on_window_scroll(move || set_progress.set(document_scroll_percent()));

    view! {
        <div class="scroll-progress">
            <div class="scroll-progress-fill" style=move || format!("width: {:.2}%", progress.get())></div>
        </div>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    on_window_scroll(move || {
        let y = window().scroll_y().unwrap_or(0.0);
        set_visible.set(y > BACK_TO_TOP_OFFSET);
    });

    view! {
        <Show when=move || visible.get()>
            <button class="back-to-top" aria-label="Back to top" on:click=move |_| scroll_to_top()>
                "↑"
            </button>
        </Show>
    }
}
