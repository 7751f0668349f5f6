//! Admin editor forms
//!
//! One form per stored record type plus the profile form. Drafts keep the
//! raw input while typing; `Editable::tidy` normalizes them on save.

use leptos::*;

use crate::i18n::use_i18n;
use crate::models::{
    clamp_level, Certification, Entity, ProfileForm, Project, RadarSkill, Skill, TimelineProject,
    TimelineStatus, PROJECT_CATEGORIES, SKILL_CATEGORIES,
};
use crate::utils::{add_tag, current_year, optional, remove_tag};

/// Record types the admin panel can list and edit
pub trait Editable: Entity {
    /// Draft for the "new" form
    fn blank() -> Self;
    fn heading(&self) -> String;
    fn detail(&self) -> String;
    /// Trims text and turns empty optional fields into `None`
    fn tidy(self) -> Self {
        self
    }
    fn editor(initial: Self, on_save: Callback<Self>, on_cancel: Callback<()>) -> View;
}

fn tidy_text(value: String) -> String {
    value.trim().to_string()
}

fn tidy_optional(value: Option<String>) -> Option<String> {
    value.and_then(optional)
}

// ============================================
// Shared inputs
// ============================================

#[component]
fn TextField<G, S>(
    label: &'static str,
    get: G,
    set: S,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView
where
    G: Fn() -> String + 'static,
    S: Fn(String) + 'static,
{
    let i18n = use_i18n();
    let input = if multiline {
        view! {
            <textarea rows="3" placeholder=placeholder
                prop:value=get
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input type="text" placeholder=placeholder
                prop:value=get
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_view()
    };

    view! {
        <div class="form-group">
            <label>{move || i18n.t(label)} {required.then_some(" *")}</label>
            {input}
        </div>
    }
}

#[component]
fn SelectField<G, S>(label: &'static str, options: &'static [&'static str], get: G, set: S) -> impl IntoView
where
    G: Fn() -> String + Copy + 'static,
    S: Fn(String) + 'static,
{
    let i18n = use_i18n();
    view! {
        <div class="form-group">
            <label>{move || i18n.t(label)}</label>
            <select on:change=move |ev| set(event_target_value(&ev))>
                {options.iter().map(|option| {
                    let option = *option;
                    view! { <option value=option selected=move || get() == option>{option}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn LevelField<G, S>(get: G, set: S) -> impl IntoView
where
    G: Fn() -> u8 + Copy + 'static,
    S: Fn(u8) + 'static,
{
    let i18n = use_i18n();
    view! {
        <div class="form-group">
            <label>{move || i18n.t("field.level")} ": " {move || get()} "%"</label>
            <input type="range" min="0" max="100" step="1"
                prop:value=move || get().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                    set(clamp_level(raw));
                }
            />
        </div>
    }
}

/// Tag list editor: Enter or the add button appends, clicking a tag removes it.
#[component]
fn TagInput<G, S>(get: G, set: S) -> impl IntoView
where
    G: Fn() -> Vec<String> + Copy + 'static,
    S: Fn(Vec<String>) + Copy + 'static,
{
    let i18n = use_i18n();
    let (pending, set_pending) = create_signal(String::new());

    let commit = move || {
        let mut tags = get();
        if add_tag(&mut tags, &pending.get_untracked()) {
            set(tags);
        }
        set_pending.set(String::new());
    };

    view! {
        <div class="form-group">
            <label>{move || i18n.t("field.technologies")}</label>
            <div class="tag-input-row">
                <input type="text"
                    placeholder=move || i18n.t("field.add_technology")
                    prop:value=pending
                    on:input=move |ev| set_pending.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            commit();
                        }
                    }
                />
                <button type="button" class="btn small" on:click=move |_| commit()>
                    {move || i18n.t("admin.add")}
                </button>
            </div>
            <div class="tag-list">
                {move || get().into_iter().map(|tag| {
                    let label = tag.clone();
                    view! {
                        <button type="button" class="badge tech removable" on:click=move |_| {
                            let mut tags = get();
                            remove_tag(&mut tags, &tag);
                            set(tags);
                        }>
                            {label} " ×"
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Save/cancel wrapper; validation errors are shown above the buttons.
#[component]
fn EditorFrame<T: Editable>(
    draft: RwSignal<T>,
    on_save: Callback<T>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();
    let (error, set_error) = create_signal(None::<String>);

    let save = move |_| {
        let item = draft.get_untracked().tidy();
        match item.validate() {
            Ok(()) => {
                set_error.set(None);
                on_save.call(item);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="editor-form">
            {children()}
            {move || error.get().map(|msg| view! { <div class="save-message error">{msg}</div> })}
            <div class="editor-actions">
                <button type="button" class="btn outline" on:click=move |_| on_cancel.call(())>
                    {move || i18n.t("admin.cancel")}
                </button>
                <button type="button" class="btn primary" on:click=save>
                    {move || i18n.t("admin.save")}
                </button>
            </div>
        </div>
    }
}

// ============================================
// Project
// ============================================

impl Editable for Project {
    fn blank() -> Self {
        Project {
            category: PROJECT_CATEGORIES[0].to_string(),
            ..Default::default()
        }
    }

    fn heading(&self) -> String {
        self.title.clone()
    }

    fn detail(&self) -> String {
        let star = if self.featured { " ★" } else { "" };
        format!("{}{} · {}", self.category, star, self.technologies.join(", "))
    }

    fn tidy(self) -> Self {
        Project {
            title: tidy_text(self.title),
            description: tidy_text(self.description),
            long_description: tidy_optional(self.long_description),
            image_url: tidy_optional(self.image_url),
            demo_url: tidy_optional(self.demo_url),
            github_url: tidy_optional(self.github_url),
            ..self
        }
    }

    fn editor(initial: Self, on_save: Callback<Self>, on_cancel: Callback<()>) -> View {
        view! { <ProjectEditor initial=initial on_save=on_save on_cancel=on_cancel /> }.into_view()
    }
}

#[component]
pub fn ProjectEditor(initial: Project, on_save: Callback<Project>, on_cancel: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let draft = create_rw_signal(initial);

    view! {
        <EditorFrame draft=draft on_save=on_save on_cancel=on_cancel>
            <TextField label="field.title" required=true
                get=move || draft.with(|d| d.title.clone())
                set=move |v| draft.update(|d| d.title = v)
            />
            <SelectField label="field.category" options=PROJECT_CATEGORIES
                get=move || draft.with(|d| d.category.clone())
                set=move |v| draft.update(|d| d.category = v)
            />
            <TextField label="field.description" required=true multiline=true
                get=move || draft.with(|d| d.description.clone())
                set=move |v| draft.update(|d| d.description = v)
            />
            <TextField label="field.long_description" multiline=true
                get=move || draft.with(|d| d.long_description.clone().unwrap_or_default())
                set=move |v| draft.update(|d| d.long_description = Some(v))
            />
            <TagInput
                get=move || draft.with(|d| d.technologies.clone())
                set=move |tags| draft.update(|d| d.technologies = tags)
            />
            <TextField label="field.image_url" placeholder="https://"
                get=move || draft.with(|d| d.image_url.clone().unwrap_or_default())
                set=move |v| draft.update(|d| d.image_url = Some(v))
            />
            <div class="form-row">
                <TextField label="field.demo_url" placeholder="https://"
                    get=move || draft.with(|d| d.demo_url.clone().unwrap_or_default())
                    set=move |v| draft.update(|d| d.demo_url = Some(v))
                />
                <TextField label="field.github_url" placeholder="https://github.com/"
                    get=move || draft.with(|d| d.github_url.clone().unwrap_or_default())
                    set=move |v| draft.update(|d| d.github_url = Some(v))
                />
            </div>
            <label class="checkbox-label">
                <input type="checkbox"
                    prop:checked=move || draft.with(|d| d.featured)
                    on:change=move |ev| draft.update(|d| d.featured = event_target_checked(&ev))
                />
                <span>{move || i18n.t("field.featured")}</span>
            </label>
        </EditorFrame>
    }
}

// ============================================
// Skill
// ============================================

impl Editable for Skill {
    fn blank() -> Self {
        Skill {
            level: 50,
            category: SKILL_CATEGORIES[0].to_string(),
            icon: Some("⚡".to_string()),
            ..Default::default()
        }
    }

    fn heading(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.name),
            None => self.name.clone(),
        }
    }

    fn detail(&self) -> String {
        format!("{} · {}%", self.category, self.level)
    }

    fn tidy(self) -> Self {
        Skill {
            name: tidy_text(self.name),
            icon: tidy_optional(self.icon),
            ..self
        }
    }

    fn editor(initial: Self, on_save: Callback<Self>, on_cancel: Callback<()>) -> View {
        view! { <SkillEditor initial=initial on_save=on_save on_cancel=on_cancel /> }.into_view()
    }
}

#[component]
pub fn SkillEditor(initial: Skill, on_save: Callback<Skill>, on_cancel: Callback<()>) -> impl IntoView {
    let draft = create_rw_signal(initial);

    view! {
        <EditorFrame draft=draft on_save=on_save on_cancel=on_cancel>
            <div class="form-row">
                <TextField label="field.name" required=true
                    get=move || draft.with(|d| d.name.clone())
                    set=move |v| draft.update(|d| d.name = v)
                />
                <TextField label="field.icon"
                    get=move || draft.with(|d| d.icon.clone().unwrap_or_default())
                    set=move |v| draft.update(|d| d.icon = Some(v))
                />
            </div>
            <SelectField label="field.category" options=SKILL_CATEGORIES
                get=move || draft.with(|d| d.category.clone())
                set=move |v| draft.update(|d| d.category = v)
            />
            <LevelField
                get=move || draft.with(|d| d.level)
                set=move |level| draft.update(|d| d.level = level)
            />
        </EditorFrame>
    }
}

// ============================================
// Radar skill
// ============================================

impl Editable for RadarSkill {
    fn blank() -> Self {
        RadarSkill::default()
    }

    fn heading(&self) -> String {
        self.skill.clone()
    }

    fn detail(&self) -> String {
        format!("{} · {}% · {}", self.category, self.level, self.color)
    }

    fn tidy(self) -> Self {
        RadarSkill {
            skill: tidy_text(self.skill),
            category: tidy_text(self.category),
            color: tidy_text(self.color),
            ..self
        }
    }

    fn editor(initial: Self, on_save: Callback<Self>, on_cancel: Callback<()>) -> View {
        view! { <RadarSkillEditor initial=initial on_save=on_save on_cancel=on_cancel /> }.into_view()
    }
}

#[component]
pub fn RadarSkillEditor(initial: RadarSkill, on_save: Callback<RadarSkill>, on_cancel: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let draft = create_rw_signal(initial);

    view! {
        <EditorFrame draft=draft on_save=on_save on_cancel=on_cancel>
            <TextField label="field.name" required=true
                get=move || draft.with(|d| d.skill.clone())
                set=move |v| draft.update(|d| d.skill = v)
            />
            <LevelField
                get=move || draft.with(|d| d.level)
                set=move |level| draft.update(|d| d.level = level)
            />
            <TextField label="field.category" required=true
                get=move || draft.with(|d| d.category.clone())
                set=move |v| draft.update(|d| d.category = v)
            />
            <div class="form-group">
                <label>{move || i18n.t("field.color")}</label>
                <div class="color-row">
                    <input type="color"
                        prop:value=move || draft.with(|d| d.color.clone())
                        on:input=move |ev| draft.update(|d| d.color = event_target_value(&ev))
                    />
                    <input type="text"
                        prop:value=move || draft.with(|d| d.color.clone())
                        on:input=move |ev| draft.update(|d| d.color = event_target_value(&ev))
                    />
                </div>
            </div>
        </EditorFrame>
    }
}

// ============================================
// Timeline
// ============================================

impl Editable for TimelineProject {
    fn blank() -> Self {
        TimelineProject::default()
    }

    fn heading(&self) -> String {
        self.title.clone()
    }

    fn detail(&self) -> String {
        format!("{} {} · {} · {}", self.status.icon(), self.date, self.category, self.impact)
    }

    fn tidy(self) -> Self {
        TimelineProject {
            title: tidy_text(self.title),
            description: tidy_text(self.description),
            date: tidy_text(self.date),
            category: tidy_text(self.category),
            image: tidy_text(self.image),
            impact: tidy_text(self.impact),
            demo_url: tidy_optional(self.demo_url),
            github_url: tidy_optional(self.github_url),
            ..self
        }
    }

    fn editor(initial: Self, on_save: Callback<Self>, on_cancel: Callback<()>) -> View {
        view! { <TimelineEditor initial=initial on_save=on_save on_cancel=on_cancel /> }.into_view()
    }
}

#[component]
pub fn TimelineEditor(
    initial: TimelineProject,
    on_save: Callback<TimelineProject>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let draft = create_rw_signal(initial);

    view! {
        <EditorFrame draft=draft on_save=on_save on_cancel=on_cancel>
            <TextField label="field.title" required=true
                get=move || draft.with(|d| d.title.clone())
                set=move |v| draft.update(|d| d.title = v)
            />
            <TextField label="field.description" required=true multiline=true
                get=move || draft.with(|d| d.description.clone())
                set=move |v| draft.update(|d| d.description = v)
            />
            <div class="form-row">
                <TextField label="field.date" required=true placeholder="2024-06"
                    get=move || draft.with(|d| d.date.clone())
                    set=move |v| draft.update(|d| d.date = v)
                />
                <TextField label="field.category" required=true
                    get=move || draft.with(|d| d.category.clone())
                    set=move |v| draft.update(|d| d.category = v)
                />
            </div>
            <TextField label="field.image_url" required=true placeholder="https://"
                get=move || draft.with(|d| d.image.clone())
                set=move |v| draft.update(|d| d.image = v)
            />
            <TextField label="field.impact" required=true
                get=move || draft.with(|d| d.impact.clone())
                set=move |v| draft.update(|d| d.impact = v)
            />
            <TagInput
                get=move || draft.with(|d| d.technologies.clone())
                set=move |tags| draft.update(|d| d.technologies = tags)
            />
            <div class="form-group">
                <label>{move || i18n.t("field.status")}</label>
                <select on:change=move |ev| draft.update(|d| d.status = TimelineStatus::from_value(&event_target_value(&ev)))>
                    {TimelineStatus::SELECTABLE.iter().map(|status| {
                        let status = *status;
                        view! {
                            <option value=status.as_str() selected=move || draft.with(|d| d.status == status)>
                                {status.icon()} " " {move || i18n.t(status.label_key())}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <div class="form-row">
                <TextField label="field.demo_url" placeholder="https://"
                    get=move || draft.with(|d| d.demo_url.clone().unwrap_or_default())
                    set=move |v| draft.update(|d| d.demo_url = Some(v))
                />
                <TextField label="field.github_url" placeholder="https://github.com/"
                    get=move || draft.with(|d| d.github_url.clone().unwrap_or_default())
                    set=move |v| draft.update(|d| d.github_url = Some(v))
                />
            </div>
        </EditorFrame>
    }
}

// ============================================
// Certification
// ============================================

impl Editable for Certification {
    fn blank() -> Self {
        Certification {
            year: current_year(),
            icon: Some("🏆".to_string()),
            ..Default::default()
        }
    }

    fn heading(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.title),
            None => self.title.clone(),
        }
    }

    fn detail(&self) -> String {
        format!("{} · {}", self.issuer, self.year)
    }

    fn tidy(self) -> Self {
        Certification {
            title: tidy_text(self.title),
            issuer: tidy_text(self.issuer),
            year: tidy_text(self.year),
            icon: tidy_optional(self.icon),
            ..self
        }
    }

    fn editor(initial: Self, on_save: Callback<Self>, on_cancel: Callback<()>) -> View {
        view! { <CertificationEditor initial=initial on_save=on_save on_cancel=on_cancel /> }.into_view()
    }
}

#[component]
pub fn CertificationEditor(
    initial: Certification,
    on_save: Callback<Certification>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = create_rw_signal(initial);

    view! {
        <EditorFrame draft=draft on_save=on_save on_cancel=on_cancel>
            <TextField label="field.title" required=true
                get=move || draft.with(|d| d.title.clone())
                set=move |v| draft.update(|d| d.title = v)
            />
            <div class="form-row">
                <TextField label="field.issuer"
                    get=move || draft.with(|d| d.issuer.clone())
                    set=move |v| draft.update(|d| d.issuer = v)
                />
                <TextField label="field.year"
                    get=move || draft.with(|d| d.year.clone())
                    set=move |v| draft.update(|d| d.year = v)
                />
            </div>
            <TextField label="field.icon"
                get=move || draft.with(|d| d.icon.clone().unwrap_or_default())
                set=move |v| draft.update(|d| d.icon = Some(v))
            />
        </EditorFrame>
    }
}

// ============================================
// Profile
// ============================================

#[component]
pub fn ProfileEditor(initial: ProfileForm, on_save: Callback<ProfileForm>) -> impl IntoView {
    let i18n = use_i18n();
    let draft = create_rw_signal(initial);

    // (label, getter, setter) for the plain single-line fields
    type Accessor = (&'static str, fn(&ProfileForm) -> String, fn(&mut ProfileForm, String));
    const CONTACT_FIELDS: &[Accessor] = &[
        ("field.email", |f| f.email.clone(), |f, v| f.email = v),
        ("field.phone", |f| f.phone.clone(), |f, v| f.phone = v),
        ("field.location", |f| f.location.clone(), |f, v| f.location = v),
        ("field.resume_url", |f| f.resume_url.clone(), |f, v| f.resume_url = v),
        ("field.github_url", |f| f.github_url.clone(), |f, v| f.github_url = v),
        ("field.linkedin_url", |f| f.linkedin_url.clone(), |f, v| f.linkedin_url = v),
        ("field.twitter_url", |f| f.twitter_url.clone(), |f, v| f.twitter_url = v),
    ];

    view! {
        <div class="editor-form">
            <TextField label="field.name"
                get=move || draft.with(|d| d.name.clone())
                set=move |v| draft.update(|d| d.name = v)
            />
            <div class="form-row">
                <TextField label="field.title_en"
                    get=move || draft.with(|d| d.title_en.clone())
                    set=move |v| draft.update(|d| d.title_en = v)
                />
                <TextField label="field.title_es"
                    get=move || draft.with(|d| d.title_es.clone())
                    set=move |v| draft.update(|d| d.title_es = v)
                />
            </div>
            <TextField label="field.description_en" multiline=true
                get=move || draft.with(|d| d.description_en.clone())
                set=move |v| draft.update(|d| d.description_en = v)
            />
            <TextField label="field.description_es" multiline=true
                get=move || draft.with(|d| d.description_es.clone())
                set=move |v| draft.update(|d| d.description_es = v)
            />
            <div class="form-grid">
                {CONTACT_FIELDS.iter().map(|(label, get, set)| {
                    let (get, set) = (*get, *set);
                    view! {
                        <TextField label=*label
                            get=move || draft.with(get)
                            set=move |v| draft.update(|d| set(d, v))
                        />
                    }
                }).collect_view()}
            </div>
            <div class="editor-actions">
                <button type="button" class="btn primary" on:click=move |_| on_save.call(draft.get_untracked())>
                    {move || i18n.t("admin.save_profile")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_drafts_use_form_defaults() {
        assert_eq!(Project::blank().category, "ML");
        let skill = Skill::blank();
        assert_eq!((skill.level, skill.category.as_str(), skill.icon.as_deref()), (50, "Programming", Some("⚡")));
        let radar = RadarSkill::blank();
        assert_eq!((radar.level, radar.color.as_str()), (80, "#00D4FF"));
        assert_eq!(TimelineProject::blank().status, TimelineStatus::Completed);
    }

    #[test]
    fn test_tidy_trims_and_drops_empty_links() {
        let project = Project {
            title: "  Vision  ".into(),
            description: "Detector ".into(),
            long_description: Some("   ".into()),
            demo_url: Some(" https://demo.example ".into()),
            github_url: Some(String::new()),
            ..Project::blank()
        }
        .tidy();
        assert_eq!(project.title, "Vision");
        assert_eq!(project.description, "Detector");
        assert_eq!(project.long_description, None);
        assert_eq!(project.demo_url.as_deref(), Some("https://demo.example"));
        assert_eq!(project.github_url, None);
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_blank_radar_needs_name_and_category() {
        let draft = RadarSkill::blank().tidy();
        assert!(draft.validate().is_err());
        let draft = RadarSkill { skill: "Rust".into(), category: "Lang".into(), ..draft };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_card_text() {
        let skill = Skill { name: "Python".into(), level: 95, ..Skill::blank() };
        assert_eq!(skill.heading(), "⚡ Python");
        assert_eq!(skill.detail(), "Programming · 95%");

        let cert = Certification { title: "AWS".into(), issuer: "Amazon".into(), year: "2023".into(), icon: None, ..Default::default() };
        assert_eq!(cert.heading(), "AWS");
        assert_eq!(cert.detail(), "Amazon · 2023");
    }
}
