//! Projects grid with category filter

use leptos::*;

use crate::defaults::FALLBACK_PROJECT_IMAGE;
use crate::i18n::use_i18n;
use crate::models::{usable_link, Project, PROJECTS_KEY};
use crate::utils::open_in_new_tab;
use crate::utils::store::{load_or_defaults, watch_key};

pub const ALL_CATEGORIES: &str = "All";

const CATEGORY_FILTERS: &[(&str, &str)] = &[
    (ALL_CATEGORIES, "category.all"),
    ("ML", "category.ml"),
    ("AI", "category.ai"),
    ("Data Science", "category.data_science"),
    ("Deep Learning", "category.deep_learning"),
];

/// Projects matching `category`, split into (featured, others).
pub fn split_projects(projects: &[Project], category: &str) -> (Vec<Project>, Vec<Project>) {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .cloned()
        .partition(|p| p.featured)
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let i18n = use_i18n();
    let projects = create_rw_signal(load_or_defaults::<Project>());
    let (selected_category, set_selected_category) = create_signal(ALL_CATEGORIES.to_string());
    let (hovered, set_hovered) = create_signal(None::<String>);

    // Admin saves in this tab and storage writes from other tabs both reload the list
    let watcher = watch_key(PROJECTS_KEY, move || projects.set(load_or_defaults::<Project>()));
    on_cleanup(move || drop(watcher));

    let split = create_memo(move |_| projects.with(|p| split_projects(p, &selected_category.get())));

    view! {
        <div class="section projects">
            <div class="section-header">
                <h2>{move || i18n.t("projects.title")}</h2>
                <p>{move || i18n.t("projects.description")}</p>
            </div>

            <div class="category-filter">
                {CATEGORY_FILTERS.iter().map(|(key, label)| {
                    let key = *key;
                    let label = *label;
                    view! {
                        <button
                            class=move || if selected_category.get() == key { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| set_selected_category.set(key.to_string())
                        >
                            {move || i18n.t(label)}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || {
                let (featured, others) = split.get();
                if featured.is_empty() && others.is_empty() {
                    return view! {
                        <p class="no-results">{move || i18n.t("projects.no_results")}</p>
                    }.into_view();
                }
                view! {
                    {(!featured.is_empty()).then(|| view! {
                        <h3 class="subsection-title">{move || i18n.t("projects.featured")}</h3>
                        <div class="projects-grid featured">
                            {featured.into_iter().map(|p| view! {
                                <FeaturedProjectCard project=p hovered=hovered set_hovered=set_hovered />
                            }).collect_view()}
                        </div>
                    })}
                    {(!others.is_empty()).then(|| view! {
                        <h3 class="subsection-title">{move || i18n.t("projects.more")}</h3>
                        <div class="projects-grid compact">
                            {others.into_iter().map(|p| view! { <CompactProjectCard project=p /> }).collect_view()}
                        </div>
                    })}
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn ProjectLinks(project: Project) -> impl IntoView {
    let i18n = use_i18n();
    let demo = usable_link(&project.demo_url).map(str::to_string);
    let github = usable_link(&project.github_url).map(str::to_string);

    view! {
        <div class="project-links">
            {demo.map(|url| view! {
                <button class="btn small" on:click=move |ev| {
                    ev.stop_propagation();
                    open_in_new_tab(&url);
                }>
                    "▶ " {move || i18n.t("projects.demo")}
                </button>
            })}
            {github.map(|url| view! {
                <button class="btn small outline" on:click=move |ev| {
                    ev.stop_propagation();
                    open_in_new_tab(&url);
                }>
                    {move || i18n.t("projects.code")}
                </button>
            })}
        </div>
    }
}

#[component]
fn FeaturedProjectCard(
    project: Project,
    hovered: ReadSignal<Option<String>>,
    set_hovered: WriteSignal<Option<String>>,
) -> impl IntoView {
    let id = project.id.clone();
    let id_for_enter = id.clone();
    let image = project
        .image_url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_PROJECT_IMAGE.to_string());
    let is_hovered = move || hovered.get().as_deref() == Some(id.as_str());

    view! {
        <div
            class=move || if is_hovered() { "project-card featured hovered" } else { "project-card featured" }
            on:mouseenter=move |_| set_hovered.set(Some(id_for_enter.clone()))
            on:mouseleave=move |_| set_hovered.set(None)
        >
            <div class="project-image">
                <img src=image alt=project.title.clone() loading="lazy" />
                <span class="badge category">{project.category.clone()}</span>
            </div>
            <div class="project-body">
                <h4>{project.title.clone()}</h4>
                <p class="description">{project.description.clone()}</p>
                {project.long_description.clone().map(|d| view! { <p class="long-description">{d}</p> })}
                <div class="tech-list">
                    {project.technologies.iter().map(|t| view! { <span class="badge tech">{t.clone()}</span> }).collect_view()}
                </div>
                <ProjectLinks project=project.clone() />
            </div>
        </div>
    }
}

#[component]
fn CompactProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="project-card compact">
            <div class="project-body">
                <div class="card-title-row">
                    <h4>{project.title.clone()}</h4>
                    <span class="badge category">{project.category.clone()}</span>
                </div>
                <p class="description">{project.description.clone()}</p>
                <div class="tech-list">
                    {project.technologies.iter().take(3).map(|t| view! { <span class="badge tech">{t.clone()}</span> }).collect_view()}
                </div>
                <ProjectLinks project=project.clone() />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str, featured: bool) -> Project {
        Project {
            id: id.into(),
            title: id.into(),
            category: category.into(),
            featured,
            ..Default::default()
        }
    }

    #[test]
    fn test_split_all_categories() {
        let projects = vec![project("a", "ML", true), project("b", "AI", false), project("c", "ML", false)];
        let (featured, others) = split_projects(&projects, ALL_CATEGORIES);
        assert_eq!(featured.len(), 1);
        assert_eq!(others.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_split_by_category() {
        let projects = vec![project("a", "ML", true), project("b", "AI", false), project("c", "ML", false)];
        let (featured, others) = split_projects(&projects, "ML");
        assert_eq!(featured[0].id, "a");
        assert_eq!(others[0].id, "c");

        let (featured, others) = split_projects(&projects, "Deep Learning");
        assert!(featured.is_empty() && others.is_empty());
    }
}
