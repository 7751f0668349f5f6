//! Browser helpers shared across components

pub mod auth;
pub mod log_trace;
pub mod observer;
pub mod store;

use wasm_bindgen::JsCast;

/// Milliseconds since the epoch, used for record ids
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn current_year() -> String {
    js_sys::Date::new_0().get_full_year().to_string()
}

/// Adds a trimmed tag unless it is blank or already present.
pub fn add_tag(tags: &mut Vec<String>, input: &str) -> bool {
    let tag = input.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

pub fn remove_tag(tags: &mut Vec<String>, tag: &str) {
    tags.retain(|t| t != tag);
}

/// Empty form inputs are stored as absent
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Smooth-scrolls the element with the given id into view.
pub fn scroll_to_section(id: &str) {
    let Some(element) = leptos::document().get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    leptos::window().scroll_to_with_scroll_to_options(&options);
}

pub fn open_in_new_tab(url: &str) {
    let _ = leptos::window().open_with_url_and_target(url, "_blank");
}

/// Vertical scroll position as a 0-100 percentage of the scrollable height.
pub fn scroll_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;
    if total <= 0.0 {
        return 0.0;
    }
    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}

/// Current scroll percentage of the document
pub fn document_scroll_percent() -> f64 {
    let window = leptos::window();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = leptos::document()
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_percent(scroll_y, height, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag_trims_and_dedupes() {
        let mut tags = vec!["Rust".to_string()];
        assert!(add_tag(&mut tags, "  Leptos "));
        assert!(!add_tag(&mut tags, "Rust"));
        assert!(!add_tag(&mut tags, "   "));
        assert_eq!(tags, vec!["Rust", "Leptos"]);

        remove_tag(&mut tags, "Rust");
        assert_eq!(tags, vec!["Leptos"]);
    }

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(optional(" https://x ".into()), Some("https://x".into()));
    }

    #[test]
    fn test_scroll_percent() {
        assert_eq!(scroll_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_percent(1500.0, 2000.0, 1000.0), 100.0);
        // page shorter than the viewport
        assert_eq!(scroll_percent(10.0, 800.0, 1000.0), 0.0);
    }
}
