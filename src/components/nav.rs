//! Top navigation bar

use leptos::*;

use crate::i18n::use_i18n;
use crate::utils::scroll_to_section;

const SECTIONS: &[(&str, &str)] = &[
    ("hero", "nav.home"),
    ("projects", "nav.projects"),
    ("timeline", "nav.timeline"),
    ("skills", "nav.skills"),
    ("ai-demo", "nav.ai_demo"),
    ("contact", "nav.contact"),
];

#[component]
pub fn Navigation() -> impl IntoView {
    let i18n = use_i18n();
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <nav class="site-nav">
            <a class="brand" href="#hero" on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section("hero");
            }>
                "AI.DS"
            </a>
            <button class="menu-toggle" on:click=move |_| set_menu_open.update(|o| *o = !*o)>
                {move || i18n.t("nav.menu")}
            </button>
            <ul class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                {SECTIONS.iter().map(|(id, key)| {
                    let id = *id;
                    let key = *key;
                    view! {
                        <li>
                            <a href=format!("#{}", id) on:click=move |ev| {
                                ev.prevent_default();
                                set_menu_open.set(false);
                                scroll_to_section(id);
                            }>
                                {move || i18n.t(key)}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
