//! Contact details and the (simulated) message form

use gloo::timers::future::TimeoutFuture;
use leptos::*;

use crate::components::toast::use_toasts;
use crate::defaults::{DEFAULT_EMAIL, DEFAULT_LOCATION, DEFAULT_PHONE};
use crate::i18n::use_i18n;
use crate::models::PROFILE_KEY;
use crate::utils::log_trace::log_info;
use crate::utils::store::{load_profile_or_default, watch_key};

const SEND_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Every field is required
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let profile = create_rw_signal(load_profile_or_default());
    let form = create_rw_signal(ContactForm::default());
    let (sending, set_sending) = create_signal(false);

    let watcher = watch_key(PROFILE_KEY, move || profile.set(load_profile_or_default()));
    on_cleanup(move || drop(watcher));

    let email = move || profile.with(|p| p.email().unwrap_or(DEFAULT_EMAIL).to_string());
    let phone = move || profile.with(|p| p.phone().unwrap_or(DEFAULT_PHONE).to_string());
    let location = move || profile.with(|p| p.location().unwrap_or(DEFAULT_LOCATION).to_string());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() || !form.with_untracked(|f| f.is_complete()) {
            return;
        }
        set_sending.set(true);
        let subject = form.with_untracked(|f| f.subject.clone());
        spawn_local(async move {
            TimeoutFuture::new(SEND_DELAY_MS).await;
            log_info("contact", &format!("Message sent: {}", subject));
            form.try_set(ContactForm::default());
            set_sending.try_set(false);
            toasts.success(i18n.t("contact.sent"), None);
        });
    };

    let field = move |label: &'static str, placeholder: &'static str, get: fn(&ContactForm) -> String, set: fn(&mut ContactForm, String), kind: &'static str| {
        view! {
            <label class="field">
                <span>{move || i18n.t(label)}</span>
                <input
                    type=kind
                    required
                    placeholder=move || i18n.t(placeholder)
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="section contact">
            <div class="section-header">
                <h2>{move || i18n.t("contact.title")}</h2>
                <p>{move || i18n.t("contact.description")}</p>
            </div>

            <div class="contact-grid">
                <div class="contact-info">
                    <div class="card">
                        <h3>{move || i18n.t("contact.get_in_touch")}</h3>
                        <div class="contact-item">
                            <span class="contact-icon">"✉"</span>
                            <div>
                                <p class="muted">{move || i18n.t("contact.email")}</p>
                                <a href=move || format!("mailto:{}", email())>{email}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">"☎"</span>
                            <div>
                                <p class="muted">{move || i18n.t("contact.phone")}</p>
                                <p>{phone}</p>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="contact-icon">"📍"</span>
                            <div>
                                <p class="muted">{move || i18n.t("contact.location")}</p>
                                <p>{location}</p>
                            </div>
                        </div>
                    </div>

                    <div class="card">
                        <h3>{move || i18n.t("contact.follow")}</h3>
                        <div class="social-links">
                            {move || profile.with(|p| p.github_url().map(str::to_string)).map(|url| view! {
                                <a class="btn outline small" href=url target="_blank" rel="noopener noreferrer">"GitHub"</a>
                            })}
                            {move || profile.with(|p| p.linkedin_url().map(str::to_string)).map(|url| view! {
                                <a class="btn outline small" href=url target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                            })}
                            {move || profile.with(|p| p.twitter_url().map(str::to_string)).map(|url| view! {
                                <a class="btn outline small" href=url target="_blank" rel="noopener noreferrer">"Twitter"</a>
                            })}
                        </div>
                    </div>

                    <div class="card availability">
                        <h3>{move || i18n.t("contact.availability")}</h3>
                        <div class="availability-row">
                            <span>{move || i18n.t("contact.freelance")}</span>
                            <span class="badge online">{move || i18n.t("contact.available")}</span>
                        </div>
                        <div class="availability-row">
                            <span>{move || i18n.t("contact.full_time")}</span>
                            <span class="badge">{move || i18n.t("contact.open_to_offers")}</span>
                        </div>
                        <div class="availability-row">
                            <span>{move || i18n.t("contact.consulting")}</span>
                            <span class="badge online">{move || i18n.t("contact.available")}</span>
                        </div>
                    </div>
                </div>

                <form class="card contact-form" on:submit=on_submit>
                    <h3>{move || i18n.t("contact.send_message")}</h3>
                    <div class="form-row">
                        {field("contact.name", "contact.name_placeholder", |f| f.name.clone(), |f, v| f.name = v, "text")}
                        {field("contact.email", "contact.email", |f| f.email.clone(), |f, v| f.email = v, "email")}
                    </div>
                    {field("contact.subject", "contact.subject_placeholder", |f| f.subject.clone(), |f, v| f.subject = v, "text")}
                    <label class="field">
                        <span>{move || i18n.t("contact.message")}</span>
                        <textarea
                            rows="6"
                            required
                            placeholder=move || i18n.t("contact.message_placeholder")
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn primary wide" disabled=sending>
                        {move || if sending.get() { i18n.t("contact.sending") } else { i18n.t("contact.send") }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_requires_every_field() {
        let mut form = ContactForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            subject: "Hola".into(),
            message: "  ".into(),
        };
        assert!(!form.is_complete());
        form.message = "Let's talk".into();
        assert!(form.is_complete());
    }
}
