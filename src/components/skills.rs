//! Skills by category, extra skill tags and certifications

use leptos::*;

use crate::defaults::ADDITIONAL_SKILLS;
use crate::i18n::use_i18n;
use crate::models::{Certification, Skill, CERTIFICATIONS_KEY, SKILLS_KEY};
use crate::utils::observer::use_reveal;
use crate::utils::store::{load_or_defaults, watch_key};

const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("Programming", "skills.programming"),
    ("ML/AI", "skills.ml_ai"),
    ("Tools", "skills.tools"),
    ("Data", "skills.data"),
];

pub fn skills_in_category<'a>(skills: &'a [Skill], category: &'a str) -> impl Iterator<Item = &'a Skill> + 'a {
    skills.iter().filter(move |s| s.category == category)
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let i18n = use_i18n();
    let skills = create_rw_signal(load_or_defaults::<Skill>());
    let certifications = create_rw_signal(load_or_defaults::<Certification>());

    let skills_watcher = watch_key(SKILLS_KEY, move || skills.set(load_or_defaults::<Skill>()));
    let certs_watcher = watch_key(CERTIFICATIONS_KEY, move || {
        certifications.set(load_or_defaults::<Certification>())
    });
    on_cleanup(move || {
        drop(skills_watcher);
        drop(certs_watcher);
    });

    view! {
        <div class="section skills">
            <div class="section-header">
                <h2>{move || i18n.t("skills.title")}</h2>
                <p>{move || i18n.t("skills.description")}</p>
            </div>

            <div class="skills-grid">
                {CATEGORY_LABELS.iter().map(|(category, label)| {
                    let category = *category;
                    let label = *label;
                    view! {
                        <div class="skill-category card">
                            <h3>{move || i18n.t(label)}</h3>
                            {move || skills.with(|all| {
                                skills_in_category(all, category)
                                    .cloned()
                                    .map(|skill| view! { <SkillBar skill=skill /> })
                                    .collect_view()
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="additional-skills">
                <h3>{move || i18n.t("skills.additional")}</h3>
                <div class="tag-cloud">
                    {ADDITIONAL_SKILLS.iter().map(|tech| view! { <span class="badge tech">{*tech}</span> }).collect_view()}
                </div>
            </div>

            <div class="certifications">
                <h3>{move || i18n.t("skills.certifications")}</h3>
                <div class="cert-grid">
                    {move || certifications.get().into_iter().map(|cert| view! {
                        <div class="cert-card card">
                            <span class="cert-icon">{cert.icon.clone().unwrap_or_else(|| "🏆".to_string())}</span>
                            <h4>{cert.title.clone()}</h4>
                            <p class="issuer">{cert.issuer.clone()}</p>
                            <span class="badge">{cert.year.clone()}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Progress bar that fills once scrolled into view
#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    let visible = use_reveal(node);
    let level = skill.level;

    view! {
        <div class="skill-row" node_ref=node data-skill=skill.name.clone()>
            <div class="skill-label">
                <span class="skill-icon">{skill.icon.clone().unwrap_or_default()}</span>
                <span class="skill-name">{skill.name.clone()}</span>
                <span class="skill-level">{level}"%"</span>
            </div>
            <div class="progress">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", if visible.get() { level } else { 0 })
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    #[test]
    fn test_default_skills_cover_every_category() {
        let skills = defaults::skills();
        for (category, _) in CATEGORY_LABELS {
            assert_eq!(skills_in_category(&skills, category).count(), 1);
        }
    }

    #[test]
    fn test_unknown_category_is_not_shown() {
        let skills = vec![Skill { name: "Rust".into(), category: "Systems".into(), ..Default::default() }];
        let shown: usize = CATEGORY_LABELS.iter().map(|(c, _)| skills_in_category(&skills, c).count()).sum();
        assert_eq!(shown, 0);
    }
}
