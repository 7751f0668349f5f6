//! Hero section with the typed-out title

use gloo::timers::future::TimeoutFuture;
use leptos::*;

use crate::defaults::{DEFAULT_DESCRIPTION, DEFAULT_NAME, DEFAULT_TITLE};
use crate::i18n::use_i18n;
use crate::models::PROFILE_KEY;
use crate::utils::scroll_to_section;
use crate::utils::store::{load_profile_or_default, watch_key};

const TYPING_INTERVAL_MS: u32 = 100;

/// First `count` characters of `text`
pub fn typed_prefix(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// Successive prefixes of `text`, one per character, ending with the full text.
pub fn typing_frames(text: &str) -> impl Iterator<Item = String> + '_ {
    (1..=text.chars().count()).map(move |shown| typed_prefix(text, shown))
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let i18n = use_i18n();
    let profile = create_rw_signal(load_profile_or_default());

    let watcher = watch_key(PROFILE_KEY, move || profile.set(load_profile_or_default()));
    on_cleanup(move || drop(watcher));

    let current_title = create_memo(move |_| {
        profile.with(|p| p.title_for(i18n.lang()).unwrap_or(DEFAULT_TITLE).to_string())
    });
    let current_description = move || {
        profile.with(|p| p.description_for(i18n.lang()).unwrap_or(DEFAULT_DESCRIPTION).to_string())
    };

    // Restart the typing effect whenever the title changes. A run stops once
    // the title is complete, when a newer run starts or when the hero unmounts.
    let (display_text, set_display_text) = create_signal(String::new());
    let typing_run = store_value(0_u32);
    create_effect(move |_| {
        let title = current_title.get();
        let run = typing_run.get_value().wrapping_add(1);
        typing_run.set_value(run);
        set_display_text.set(String::new());

        spawn_local(async move {
            for frame in typing_frames(&title) {
                TimeoutFuture::new(TYPING_INTERVAL_MS).await;
                if typing_run.try_get_value() != Some(run) {
                    return;
                }
                if set_display_text.try_set(frame).is_some() {
                    return;
                }
            }
        });
    });

    let neural_lines = (0..20)
        .map(|i| {
            let r = || js_sys::Math::random();
            let style = format!(
                "top: {:.1}%; left: {:.1}%; width: {:.0}px; transform: rotate({:.0}deg); animation-delay: {:.2}s",
                r() * 100.0,
                r() * 100.0,
                r() * 200.0 + 100.0,
                r() * 360.0,
                r() * 3.0,
            );
            view! { <div class="neural-line" data-index=i style=style></div> }
        })
        .collect_view();

    view! {
        <div class="hero">
            <div class="neural-bg">{neural_lines}</div>

            <div class="hero-content">
                <h1 class="hero-name glitch">
                    {move || profile.with(|p| p.name().unwrap_or(DEFAULT_NAME).to_string())}
                </h1>
                <h2 class="hero-title">
                    {move || display_text.get()}
                    <span class="cursor">"|"</span>
                </h2>
                <p class="hero-description">{current_description}</p>

                <div class="hero-actions">
                    <button class="btn primary" on:click=move |_| scroll_to_section("projects")>
                        {move || i18n.t("hero.explore")}
                    </button>
                    {move || profile.with(|p| p.resume_url().map(str::to_string)).map(|url| view! {
                        <a class="btn outline" href=url target="_blank" rel="noopener noreferrer">
                            {move || i18n.t("hero.resume")}
                        </a>
                    })}
                </div>

                <div class="hero-social">
                    {move || profile.with(|p| p.github_url().map(str::to_string)).map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" aria-label="GitHub">"GitHub"</a>
                    })}
                    {move || profile.with(|p| p.linkedin_url().map(str::to_string)).map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">"LinkedIn"</a>
                    })}
                    {move || profile.with(|p| p.email().map(str::to_string)).map(|email| view! {
                        <a href=format!("mailto:{}", email) aria-label="Email">"Email"</a>
                    })}
                </div>

                <button class="scroll-indicator" aria-label="Scroll to projects" on:click=move |_| scroll_to_section("projects")>
                    "⌄"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_prefix_counts_characters() {
        assert_eq!(typed_prefix("Visionario", 4), "Visi");
        assert_eq!(typed_prefix("Ciencia de Datos", 0), "");
        // multi-byte characters are never split
        assert_eq!(typed_prefix("Año IA", 2), "Añ");
        assert_eq!(typed_prefix("IA", 10), "IA");
    }

    #[test]
    fn test_typing_frames_end_at_the_full_title() {
        let frames: Vec<_> = typing_frames("Año").collect();
        assert_eq!(frames, vec!["A", "Añ", "Año"]);
        assert_eq!(typing_frames("").count(), 0);
    }
}
