//! Language toggle button

use leptos::*;

use crate::components::toast::use_toasts;
use crate::i18n::{translate, use_i18n, Language};

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let (pressed, set_pressed) = create_signal(false);

    let toggle = move |_| {
        let next = i18n.lang().toggled();
        i18n.set_language(next);

        // brief press feedback
        set_pressed.set(true);
        gloo::timers::callback::Timeout::new(150, move || set_pressed.set(false)).forget();

        toasts.info(
            translate(next, "language.changed"),
            Some(translate(next, "language.changed_to").to_string()),
            2000,
        );
    };

    view! {
        <div class="language-switcher">
            <button
                class=move || if pressed.get() { "lang-btn pressed" } else { "lang-btn" }
                title=move || i18n.t("language.switch_to")
                on:click=toggle
            >
                <span class="globe">"🌐"</span>
                <span class="lang-code">
                    {move || match i18n.lang() {
                        Language::En => "ES",
                        Language::Es => "EN",
                    }}
                </span>
            </button>
        </div>
    }
}
