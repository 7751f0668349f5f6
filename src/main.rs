//! Portfolio site
//!
//! Single-page portfolio rendered client-side with Leptos. Content comes from
//! local storage when the admin panel has saved any, otherwise from the
//! built-in dataset.

use leptos::*;

mod components;
mod defaults;
mod i18n;
mod models;
mod utils;
mod views;

use components::ai_chat::AIChatDemo;
use components::contact::ContactSection;
use components::hero::HeroSection;
use components::language_switcher::LanguageSwitcher;
use components::nav::Navigation;
use components::projects::ProjectsSection;
use components::scroll_progress::{BackToTop, ScrollProgress};
use components::skills::SkillsSection;
use components::skills_radar::SkillsRadar;
use components::timeline::ProjectTimeline;
use components::toast::{provide_toasts, Toaster};
use i18n::provide_i18n;
use utils::log_trace::log_info;
use views::admin_panel::AdminPanel;

#[component]
fn App() -> impl IntoView {
    let i18n = provide_i18n();
    provide_toasts();

    // Always start at the top, even when the browser restores the scroll position
    create_effect(|_| utils::scroll_to_top());
    log_info("app", &format!("started ({})", i18n.lang().code()));

    view! {
        <div class="app">
            <ScrollProgress />
            <Navigation />
            <LanguageSwitcher />

            <main>
                <section id="hero"><HeroSection /></section>
                <section id="projects"><ProjectsSection /></section>
                <section id="timeline"><ProjectTimeline /></section>
                <section id="skills"><SkillsSection /></section>
                <section id="skills-radar" class="container"><SkillsRadar /></section>
                <section id="ai-demo"><AIChatDemo /></section>
                <section id="contact"><ContactSection /></section>
            </main>

            <footer class="footer">
                <p>{move || i18n.t("footer.copyright")}</p>
                <p class="muted">{move || i18n.t("footer.powered")}</p>
            </footer>

            <BackToTop />
            <AdminPanel />
            <Toaster />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
