//! Project timeline

use leptos::*;

use crate::i18n::use_i18n;
use crate::models::{usable_link, TimelineProject, TIMELINE_KEY};
use crate::utils::observer::use_reveal;
use crate::utils::store::{load_or_defaults, watch_key};

const VISIBLE_TECHNOLOGIES: usize = 3;

/// Badges to show plus how many were left out
pub fn technology_badges(technologies: &[String], expanded: bool) -> (&[String], usize) {
    if expanded || technologies.len() <= VISIBLE_TECHNOLOGIES {
        (technologies, 0)
    } else {
        (&technologies[..VISIBLE_TECHNOLOGIES], technologies.len() - VISIBLE_TECHNOLOGIES)
    }
}

#[component]
pub fn ProjectTimeline() -> impl IntoView {
    let i18n = use_i18n();
    let entries = create_rw_signal(load_or_defaults::<TimelineProject>());
    let (selected, set_selected) = create_signal(None::<String>);

    let watcher = watch_key(TIMELINE_KEY, move || entries.set(load_or_defaults::<TimelineProject>()));
    on_cleanup(move || drop(watcher));

    view! {
        <div class="section timeline">
            <div class="section-header">
                <h2>{move || i18n.t("timeline.title")}</h2>
                <p>{move || i18n.t("timeline.description")}</p>
            </div>

            <div class="timeline-track">
                <div class="timeline-line"></div>
                {move || entries.get().into_iter().enumerate().map(|(index, entry)| view! {
                    <TimelineCard entry=entry left=index % 2 == 0 selected=selected set_selected=set_selected />
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TimelineCard(
    entry: TimelineProject,
    left: bool,
    selected: ReadSignal<Option<String>>,
    set_selected: WriteSignal<Option<String>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let node = create_node_ref::<html::Div>();
    let visible = use_reveal(node);

    let id = entry.id.clone();
    let is_selected = {
        let id = id.clone();
        move || selected.get().as_deref() == Some(id.as_str())
    };
    let is_selected_for_class = is_selected.clone();
    let toggle = move |_| {
        let id = id.clone();
        set_selected.update(|s| {
            *s = if s.as_deref() == Some(id.as_str()) { None } else { Some(id) };
        });
    };

    let status = entry.status;
    let demo = usable_link(&entry.demo_url).map(str::to_string);
    let github = usable_link(&entry.github_url).map(str::to_string);
    let technologies = entry.technologies.clone();

    view! {
        <div node_ref=node class=if left { "timeline-item left" } else { "timeline-item right" } data-project-id=entry.id.clone()>
            <div class=move || if visible.get() { "timeline-dot active" } else { "timeline-dot" }></div>
            <div
                class=move || {
                    let mut class = String::from("timeline-card");
                    class.push_str(if visible.get() { " revealed" } else { " hidden" });
                    if is_selected_for_class() {
                        class.push_str(" selected");
                    }
                    class
                }
                on:click=toggle
            >
                <img class="timeline-image" src=entry.image.clone() alt=entry.title.clone() loading="lazy" />
                <div class="timeline-meta">
                    <span class=format!("badge status {}", status.css_class())>
                        {status.icon()} " " {move || i18n.t(status.label_key())}
                    </span>
                    <span class="date">"📅 " {entry.date.clone()}</span>
                </div>
                <span class="badge category">{entry.category.clone()}</span>
                <h4>{entry.title.clone()}</h4>
                <p class="description">{entry.description.clone()}</p>

                <div class="tech-list">
                    {move || {
                        let (shown, hidden) = technology_badges(&technologies, is_selected());
                        view! {
                            {shown.iter().map(|t| view! { <span class="badge tech">{t.clone()}</span> }).collect_view()}
                            {(hidden > 0).then(|| view! { <span class="badge tech more">"+" {hidden}</span> })}
                        }
                    }}
                </div>

                <div class="timeline-footer">
                    <span class="impact">"📊 " {entry.impact.clone()}</span>
                    <div class="project-links">
                        {demo.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" on:click=|ev| ev.stop_propagation()>"↗"</a>
                        })}
                        {github.map(|url| view! {
                            <a href=url target="_blank" rel="noopener noreferrer" on:click=|ev| ev.stop_propagation()>"GitHub"</a>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn techs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("t{}", i)).collect()
    }

    #[test]
    fn test_badges_collapse_after_three() {
        let list = techs(5);
        let (shown, hidden) = technology_badges(&list, false);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 2);
    }

    #[test]
    fn test_badges_expanded_or_short() {
        let list = techs(5);
        assert_eq!(technology_badges(&list, true), (&list[..], 0));

        let short = techs(3);
        assert_eq!(technology_badges(&short, false), (&short[..], 0));
    }
}
