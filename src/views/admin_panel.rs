//! Admin panel
//!
//! Floating entry button, login dialog and the tabbed content editor.
//! Every tab reads and writes local storage directly; display sections pick
//! the changes up through their storage watchers.

use leptos::*;
use serde_json::json;

use crate::components::editors::{Editable, ProfileEditor};
use crate::components::toast::{use_toasts, Toasts};
use crate::i18n::{use_i18n, I18n};
use crate::models::{Certification, ProfileForm, ProfileInfo, Project, RadarSkill, Skill, TimelineProject};
use crate::utils::auth::{check_credentials, is_logged_in, set_logged_in};
use crate::utils::log_trace::{
    clear_logs, download_logs, log_count, log_error, log_error_with_data, log_info_with_data,
};
use crate::utils::now_ms;
use crate::utils::store::{load_for_admin, load_profile, remove_by_id, save_collection, save_profile, upsert, SaveOutcome};

// ============================================
// Tabs
// ============================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminTab {
    Profile,
    Projects,
    Skills,
    Radar,
    Timeline,
    Certifications,
    Diagnostics,
}

impl AdminTab {
    pub const ALL: [AdminTab; 7] = [
        AdminTab::Profile,
        AdminTab::Projects,
        AdminTab::Skills,
        AdminTab::Radar,
        AdminTab::Timeline,
        AdminTab::Certifications,
        AdminTab::Diagnostics,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            AdminTab::Profile => "admin.profile",
            AdminTab::Projects => "admin.projects",
            AdminTab::Skills => "admin.skills",
            AdminTab::Radar => "admin.radar",
            AdminTab::Timeline => "admin.timeline",
            AdminTab::Certifications => "admin.certifications",
            AdminTab::Diagnostics => "admin.diagnostics",
        }
    }
}

// ============================================
// Collection state
// ============================================

/// Stored records of one type plus the open editor, if any
pub struct CrudState<T: Editable> {
    items: RwSignal<Vec<T>>,
    /// Id of the record in the editor; `None` while creating
    editing: RwSignal<Option<String>>,
    draft: RwSignal<Option<T>>,
    toasts: Toasts,
    i18n: I18n,
}

impl<T: Editable> Clone for CrudState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Editable> Copy for CrudState<T> {}

impl<T: Editable> CrudState<T> {
    pub fn new() -> Self {
        Self::with(use_toasts(), use_i18n())
    }

    pub fn with(toasts: Toasts, i18n: I18n) -> Self {
        CrudState {
            items: create_rw_signal(Vec::new()),
            editing: create_rw_signal(None),
            draft: create_rw_signal(None),
            toasts,
            i18n,
        }
    }

    pub fn reload(&self) {
        match load_for_admin::<T>() {
            Ok(items) => self.items.set(items),
            Err(e) => {
                log_error("admin", &format!("load {} failed: {}", T::STORAGE_KEY, e));
                self.toasts.error(self.i18n.t("admin.load_failed"), Some(e.to_string()));
                self.items.set(Vec::new());
            }
        }
    }

    pub fn open_new(&self) {
        self.editing.set(None);
        self.draft.set(Some(T::blank()));
    }

    pub fn open_edit(&self, item: T) {
        self.editing.set(Some(item.id().to_string()));
        self.draft.set(Some(item));
    }

    pub fn close(&self) {
        self.editing.set(None);
        self.draft.set(None);
    }

    pub fn save(&self, item: T) {
        let mut items = self.items.get_untracked();
        let editing = self.editing.get_untracked();
        let outcome = upsert(&mut items, editing.as_deref(), item, now_ms());

        match save_collection(&items) {
            Ok(()) => {
                let saved_id = match (&outcome, &editing) {
                    (SaveOutcome::Updated, Some(id)) => id.clone(),
                    _ => items.last().map(|i| i.id().to_string()).unwrap_or_default(),
                };
                self.items.set(items);
                self.close();
                let verb = match outcome {
                    SaveOutcome::Created => "admin.created",
                    SaveOutcome::Updated => "admin.updated",
                };
                self.toasts
                    .success(format!("{}: {}", self.i18n.t(T::LABEL_KEY), self.i18n.t(verb)), None);
                log_info_with_data(
                    "admin",
                    "record saved",
                    json!({ "key": T::STORAGE_KEY, "id": saved_id, "outcome": format!("{:?}", outcome) }),
                );
            }
            Err(e) => {
                self.toasts.error(self.i18n.t("admin.save_failed"), Some(e.to_string()));
                log_error_with_data("admin", "record save failed", json!({ "key": T::STORAGE_KEY, "error": e.to_string() }));
            }
        }
    }

    pub fn delete(&self, id: &str) {
        let mut items = self.items.get_untracked();
        if !remove_by_id(&mut items, id) {
            return;
        }

        match save_collection(&items) {
            Ok(()) => {
                self.items.set(items);
                if self.editing.get_untracked().as_deref() == Some(id) {
                    self.close();
                }
                self.toasts.success(
                    format!("{}: {}", self.i18n.t(T::LABEL_KEY), self.i18n.t("admin.deleted")),
                    None,
                );
                log_info_with_data("admin", "record deleted", json!({ "key": T::STORAGE_KEY, "id": id }));
            }
            Err(e) => {
                self.toasts.error(self.i18n.t("admin.delete_failed"), Some(e.to_string()));
                log_error_with_data("admin", "record delete failed", json!({ "key": T::STORAGE_KEY, "error": e.to_string() }));
            }
        }
    }
}

// ============================================
// Panel
// ============================================

#[component]
pub fn AdminPanel() -> impl IntoView {
    let i18n = use_i18n();
    let (logged_in, set_logged_in_signal) = create_signal(is_logged_in());
    let (open, set_open) = create_signal(false);
    let (tab, set_tab) = create_signal(AdminTab::Profile);

    let logout = move |_| {
        set_logged_in(false);
        set_logged_in_signal.set(false);
        set_open.set(false);
    };

    view! {
        <button class="admin-fab" on:click=move |_| set_open.set(true)>
            "⚙ "
            {move || if logged_in.get() { i18n.t("admin.admin_panel") } else { i18n.t("admin.admin_access") }}
        </button>

        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| set_open.set(false)>
                <div class="modal admin-modal" on:click=|ev| ev.stop_propagation()>
                    <Show
                        when=move || logged_in.get()
                        fallback=move || view! {
                            <LoginForm on_success=Callback::new(move |_: ()| set_logged_in_signal.set(true)) />
                        }
                    >
                        <div class="modal-header">
                            <h2>{move || i18n.t("admin.admin_panel")}</h2>
                            <div class="header-actions">
                                <button class="btn outline small" on:click=logout>{move || i18n.t("admin.logout")}</button>
                                <button class="close-btn" on:click=move |_| set_open.set(false)>"×"</button>
                            </div>
                        </div>

                        <div class="tab-bar">
                            {AdminTab::ALL.iter().map(|t| {
                                let t = *t;
                                view! {
                                    <button
                                        class=move || if tab.get() == t { "tab active" } else { "tab" }
                                        on:click=move |_| set_tab.set(t)
                                    >
                                        {move || i18n.t(t.label_key())}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        <div class="tab-content">
                            {move || match tab.get() {
                                AdminTab::Profile => view! { <ProfileTab /> }.into_view(),
                                AdminTab::Projects => view! { <CollectionTab crud={CrudState::<Project>::new()} /> }.into_view(),
                                AdminTab::Skills => view! { <CollectionTab crud={CrudState::<Skill>::new()} /> }.into_view(),
                                AdminTab::Radar => view! { <CollectionTab crud={CrudState::<RadarSkill>::new()} /> }.into_view(),
                                AdminTab::Timeline => view! { <CollectionTab crud={CrudState::<TimelineProject>::new()} /> }.into_view(),
                                AdminTab::Certifications => view! { <CollectionTab crud={CrudState::<Certification>::new()} /> }.into_view(),
                                AdminTab::Diagnostics => view! { <DiagnosticsTab /> }.into_view(),
                            }}
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn LoginForm(on_success: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let (user, set_user) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (denied, set_denied) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if check_credentials(&user.get_untracked(), &password.get_untracked()) {
            set_logged_in(true);
            set_denied.set(false);
            set_password.set(String::new());
            on_success.call(());
        } else {
            set_denied.set(true);
        }
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>"🔒 " {move || i18n.t("admin.private_access")}</h2>
            <div class="form-group">
                <label>{move || i18n.t("admin.user")}</label>
                <input type="email" required autocomplete="username"
                    prop:value=user
                    on:input=move |ev| set_user.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>{move || i18n.t("admin.password")}</label>
                <input type="password" required autocomplete="current-password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || denied.get()>
                <div class="save-message error">{move || i18n.t("admin.access_denied")}</div>
            </Show>
            <button type="submit" class="btn primary wide">{move || i18n.t("admin.login")}</button>
        </form>
    }
}

/// Card list plus editor for one stored collection
#[component]
fn CollectionTab<T: Editable>(crud: CrudState<T>) -> impl IntoView {
    let i18n = use_i18n();
    crud.reload();

    let on_save = Callback::new(move |item: T| crud.save(item));
    let on_cancel = Callback::new(move |_: ()| crud.close());

    view! {
        <div class="collection-tab">
            <div class="tab-toolbar">
                <button class="btn primary small" on:click=move |_| crud.open_new()>
                    "+ " {move || i18n.t("admin.new")} " " {move || i18n.t(T::LABEL_KEY)}
                </button>
            </div>

            {move || crud.draft.get().map(|draft| view! {
                <div class="card editor-card">
                    <h3>
                        {move || if crud.editing.get().is_some() { i18n.t("admin.edit_entry") } else { i18n.t("admin.new_entry") }}
                    </h3>
                    {T::editor(draft, on_save, on_cancel)}
                </div>
            })}

            {move || crud.items.with(|items| {
                if items.is_empty() {
                    return view! { <p class="muted">{move || i18n.t("admin.empty")}</p> }.into_view();
                }
                items.iter().cloned().map(|item| {
                    let id = item.id().to_string();
                    let heading = item.heading();
                    let detail = item.detail();
                    view! {
                        <div class="card entity-card">
                            <div class="entity-text">
                                <h4>{heading}</h4>
                                <p class="muted">{detail}</p>
                            </div>
                            <div class="entity-actions">
                                <button class="btn small outline" on:click=move |_| crud.open_edit(item.clone())>
                                    {move || i18n.t("admin.edit")}
                                </button>
                                <button class="btn small danger" on:click=move |_| crud.delete(&id)>
                                    {move || i18n.t("admin.delete")}
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()
            })}
        </div>
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();

    let current = match load_profile() {
        Ok(profile) => profile.unwrap_or_default(),
        Err(e) => {
            log_error("admin", &format!("load profile failed: {}", e));
            toasts.error(i18n.t("admin.load_failed"), Some(e.to_string()));
            ProfileInfo::default()
        }
    };
    let initial = ProfileForm::from(&current);
    let current = store_value(current);

    let on_save = Callback::new(move |form: ProfileForm| {
        match current.with_value(|p| save_profile(p, form)) {
            Ok(updated) => {
                log_info_with_data("admin", "profile saved", json!({ "id": updated.id.clone() }));
                current.set_value(updated);
                toasts.success(i18n.t("admin.profile_saved"), None);
            }
            Err(e) => {
                toasts.error(i18n.t("admin.save_failed"), Some(e.to_string()));
                log_error_with_data("admin", "profile save failed", json!({ "error": e.to_string() }));
            }
        }
    });

    view! { <ProfileEditor initial=initial on_save=on_save /> }
}

#[component]
fn DiagnosticsTab() -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let (count, set_count) = create_signal(log_count());

    let download = move |_| {
        if let Err(e) = download_logs() {
            toasts.error(i18n.t("admin.logs_download"), Some(format!("{:?}", e)));
        }
    };

    let clear = move |_| {
        clear_logs();
        set_count.set(log_count());
        toasts.info(i18n.t("admin.logs_cleared"), None, 2000);
    };

    view! {
        <div class="diagnostics-tab">
            <p class="muted">{move || i18n.t("admin.logs_hint")}</p>
            <p class="log-count">{move || count.get()} " " {move || i18n.t("admin.logs_entries")}</p>
            <div class="editor-actions">
                <button class="btn primary" on:click=download>{move || i18n.t("admin.logs_download")}</button>
                <button class="btn outline" on:click=clear>{move || i18n.t("admin.logs_clear")}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_has_a_distinct_label() {
        let mut keys: Vec<_> = AdminTab::ALL.iter().map(|t| t.label_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), AdminTab::ALL.len());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::PROJECTS_KEY;
    use crate::utils::store::{load_collection, remove};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: "Object detection for retail shelves".to_string(),
            ..Project::blank()
        }
    }

    #[wasm_bindgen_test]
    fn project_tab_saves_edits_and_deletes_through_storage() {
        let runtime = create_runtime();
        remove(PROJECTS_KEY).unwrap();
        let crud = CrudState::<Project>::with(Toasts::new(), I18n { language: create_rw_signal(Language::En) });
        crud.reload();
        assert!(crud.items.get_untracked().is_empty());

        crud.open_new();
        crud.save(project("Shelf Vision"));
        let listed = crud.items.get_untracked();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].id.starts_with("proj_"));
        assert!(crud.draft.get_untracked().is_none());
        assert_eq!(load_collection::<Project>().unwrap(), Some(listed.clone()));

        let id = listed[0].id.clone();
        crud.open_edit(listed[0].clone());
        crud.save(Project { title: "Shelf Vision 2".into(), ..listed[0].clone() });
        let stored = load_collection::<Project>().unwrap().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].title, "Shelf Vision 2");

        crud.delete(&id);
        assert!(crud.items.get_untracked().is_empty());
        assert_eq!(load_collection::<Project>().unwrap(), Some(Vec::new()));

        remove(PROJECTS_KEY).unwrap();
        runtime.dispose();
    }
}
