//! LocalStorage persistence for content collections

use gloo::events::EventListener;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::models::{Entity, ProfileForm, ProfileInfo, PROFILE_ID_PREFIX, PROFILE_KEY, PROJECTS_UPDATED_EVENT};
use crate::utils::log_trace::{log_error, log_info, log_warn};
use crate::utils::now_ms;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),
    #[error("stored value under `{key}` is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not write `{key}`: {message}")]
    Write { key: &'static str, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

// ============================================
// Collection edits
// ============================================

/// `<prefix>_<millis>`, with a numeric suffix when that id is already taken.
pub fn new_id(prefix: &str, now_ms: f64, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{}_{}", prefix, now_ms as u64);
    if !taken(&base) {
        return base;
    }
    (1..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}

/// Replaces the record being edited, or appends `item` under a fresh id.
pub fn upsert<T: Entity>(items: &mut Vec<T>, editing_id: Option<&str>, mut item: T, now_ms: f64) -> SaveOutcome {
    if let Some(id) = editing_id {
        if let Some(slot) = items.iter_mut().find(|existing| existing.id() == id) {
            item.set_id(id.to_string());
            *slot = item;
            return SaveOutcome::Updated;
        }
    }

    let id = new_id(T::ID_PREFIX, now_ms, |candidate| {
        items.iter().any(|existing| existing.id() == candidate)
    });
    item.set_id(id);
    items.push(item);
    SaveOutcome::Created
}

pub fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

// ============================================
// Reads and writes
// ============================================

/// The window's local storage, when the browser exposes it.
pub fn local_storage() -> Result<web_sys::Storage, StoreError> {
    require_storage(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
}

fn require_storage<S>(storage: Option<S>) -> Result<S, StoreError> {
    storage.ok_or_else(|| StoreError::Unavailable("blocked or not supported by this browser".to_string()))
}

fn decode<T: DeserializeOwned>(key: &'static str, raw: Option<String>) -> Result<Option<T>, StoreError> {
    match raw {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key, source }),
        None => Ok(None),
    }
}

pub fn read<T: DeserializeOwned>(key: &'static str) -> Result<Option<T>, StoreError> {
    let raw = local_storage()?
        .get_item(key)
        .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
    decode(key, raw)
}

pub fn write<T: Serialize>(key: &'static str, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(|e| StoreError::Write {
        key,
        message: e.to_string(),
    })?;
    local_storage()?.set_item(key, &json).map_err(|e| StoreError::Write {
        key,
        message: format!("{:?}", e),
    })
}

pub fn remove(key: &'static str) -> Result<(), StoreError> {
    local_storage()?.remove_item(key).map_err(|e| StoreError::Write {
        key,
        message: format!("{:?}", e),
    })
}

pub fn load_collection<T: Entity>() -> Result<Option<Vec<T>>, StoreError> {
    read::<Vec<T>>(T::STORAGE_KEY)
}

/// Stored records for display, or the built-in dataset.
pub fn load_or_defaults<T: Entity>() -> Vec<T> {
    match load_collection::<T>() {
        Ok(Some(items)) => items,
        Ok(None) => T::defaults(),
        Err(e) => {
            log_warn("storage", &format!("falling back to defaults: {}", e));
            T::defaults()
        }
    }
}

/// Stored records for editing; nothing stored means an empty list.
pub fn load_for_admin<T: Entity>() -> Result<Vec<T>, StoreError> {
    Ok(load_collection::<T>()?.unwrap_or_default())
}

pub fn save_collection<T: Entity>(items: &[T]) -> Result<(), StoreError> {
    write(T::STORAGE_KEY, &items)?;
    log_info("storage", &format!("saved {} records to {}", items.len(), T::STORAGE_KEY));
    if let Some(event) = T::UPDATE_EVENT {
        dispatch_window_event(event);
    }
    Ok(())
}

pub fn load_profile() -> Result<Option<ProfileInfo>, StoreError> {
    read::<ProfileInfo>(PROFILE_KEY)
}

/// Stored profile for display; unreadable data counts as no profile.
pub fn load_profile_or_default() -> ProfileInfo {
    match load_profile() {
        Ok(profile) => profile.unwrap_or_default(),
        Err(e) => {
            log_warn("storage", &format!("ignoring stored profile: {}", e));
            ProfileInfo::default()
        }
    }
}

/// Merges the form over the stored profile and persists the result.
pub fn save_profile(current: &ProfileInfo, form: ProfileForm) -> Result<ProfileInfo, StoreError> {
    let updated = current.merged_with(form, || new_id(PROFILE_ID_PREFIX, now_ms(), |_| false));
    write(PROFILE_KEY, &updated)?;
    log_info("storage", "profile saved");
    Ok(updated)
}

// ============================================
// Change notifications
// ============================================

fn dispatch_window_event(name: &str) {
    match web_sys::CustomEvent::new(name) {
        Ok(event) => {
            let _ = leptos::window().dispatch_event(&event);
        }
        Err(e) => log_error("storage", &format!("could not create {} event: {:?}", name, e)),
    }
}

/// Listeners for changes to `key`; dropping them unsubscribes.
pub struct KeyWatcher {
    _listeners: Vec<EventListener>,
}

/// Calls `on_change` when another tab writes `key`, and for projects also on same-tab saves.
pub fn watch_key(key: &'static str, on_change: impl Fn() + Clone + 'static) -> KeyWatcher {
    let window = leptos::window();
    let mut listeners = Vec::new();

    let cross_tab = on_change.clone();
    listeners.push(EventListener::new(&window, "storage", move |event| {
        let changed = event
            .dyn_ref::<web_sys::StorageEvent>()
            .map(|e| e.key().map_or(true, |k| k == key))
            .unwrap_or(false);
        if changed {
            cross_tab();
        }
    }));

    if key == crate::models::PROJECTS_KEY {
        listeners.push(EventListener::new(&window, PROJECTS_UPDATED_EVENT, move |_| on_change()));
    }

    KeyWatcher { _listeners: listeners }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Certification, Project, PROJECTS_KEY};

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: "d".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_upsert_appends_with_prefixed_id() {
        let mut items = Vec::new();
        let outcome = upsert(&mut items, None, project("A"), 1_700_000_000_123.0);
        assert_eq!(outcome, SaveOutcome::Created);
        assert_eq!(items[0].id, "proj_1700000000123");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut items = Vec::new();
        upsert(&mut items, None, project("A"), 1.0);
        upsert(&mut items, None, project("B"), 2.0);
        let id = items[0].id.clone();

        let outcome = upsert(&mut items, Some(&id), project("A2"), 3.0);
        assert_eq!(outcome, SaveOutcome::Updated);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A2");
        assert_eq!(items[0].id, id);
        assert_eq!(items[1].title, "B");
    }

    #[test]
    fn test_upsert_missing_edit_target_appends() {
        let mut items = vec![Certification { id: "cert_1".into(), title: "X".into(), ..Default::default() }];
        let outcome = upsert(&mut items, Some("cert_gone"), Certification { title: "Y".into(), ..Default::default() }, 5.0);
        assert_eq!(outcome, SaveOutcome::Created);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "cert_5");
    }

    #[test]
    fn test_same_millisecond_ids_stay_unique() {
        let mut items = Vec::new();
        upsert(&mut items, None, project("A"), 10.0);
        upsert(&mut items, None, project("B"), 10.0);
        upsert(&mut items, None, project("C"), 10.0);
        let ids: Vec<_> = items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["proj_10", "proj_10-1", "proj_10-2"]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut items = Vec::new();
        upsert(&mut items, None, project("A"), 1.0);
        upsert(&mut items, None, project("B"), 2.0);
        assert!(remove_by_id(&mut items, "proj_1"));
        assert!(!remove_by_id(&mut items, "proj_1"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "B");
    }

    #[test]
    fn test_missing_storage_is_unavailable() {
        let err = require_storage::<()>(None).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(err.to_string().starts_with("local storage is unavailable"));
        assert_eq!(require_storage(Some(7)).unwrap(), 7);
    }

    #[test]
    fn test_decode_stored_text() {
        assert_eq!(decode::<Vec<Project>>(PROJECTS_KEY, None).unwrap(), None);
        assert_eq!(decode::<Vec<Project>>(PROJECTS_KEY, Some("[]".into())).unwrap(), Some(vec![]));
        let err = decode::<Vec<Project>>(PROJECTS_KEY, Some("{not json".into())).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { key: PROJECTS_KEY, .. }));
    }

    #[test]
    fn test_store_error_messages() {
        let source = serde_json::from_str::<Vec<Project>>("{").unwrap_err();
        let err = StoreError::Corrupt { key: "portfolio_projects", source };
        assert!(err.to_string().starts_with("stored value under `portfolio_projects` is corrupt"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::models::{Project, Skill, PROJECTS_KEY, SKILLS_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + Clone + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = count.clone();
        (count, move || bump.set(bump.get() + 1))
    }

    #[wasm_bindgen_test]
    fn saved_collection_reads_back() {
        remove(SKILLS_KEY).unwrap();
        let mut items = Vec::new();
        upsert(&mut items, None, Skill { name: "Rust".into(), level: 70, ..Default::default() }, now_ms());
        save_collection(&items).unwrap();

        let loaded = load_collection::<Skill>().unwrap().unwrap();
        assert_eq!(loaded, items);
        assert_eq!(load_or_defaults::<Skill>(), items);
        remove(SKILLS_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn corrupt_collection_falls_back_to_defaults() {
        local_storage().unwrap().set_item(SKILLS_KEY, "{not json").unwrap();
        assert!(matches!(load_collection::<Skill>(), Err(StoreError::Corrupt { .. })));
        assert!(load_for_admin::<Skill>().is_err());
        assert_eq!(load_or_defaults::<Skill>(), Skill::defaults());
        remove(SKILLS_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn nothing_stored_means_defaults_for_display_and_empty_for_admin() {
        remove(SKILLS_KEY).unwrap();
        assert_eq!(load_or_defaults::<Skill>(), Skill::defaults());
        assert!(load_for_admin::<Skill>().unwrap().is_empty());
    }

    #[wasm_bindgen_test]
    fn profile_save_keeps_id_across_saves() {
        remove(PROFILE_KEY).unwrap();
        let form = ProfileForm { name: "Ana".into(), ..Default::default() };
        let first = save_profile(&ProfileInfo::default(), form.clone()).unwrap();
        assert!(first.id.starts_with("profile_"));

        let second = save_profile(&first, ProfileForm { name: "Ana María".into(), ..form }).unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(load_profile().unwrap(), Some(second));
        remove(PROFILE_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn project_saves_announce_the_update_event() {
        let (fired, bump) = counter();
        let _listener = EventListener::new(&leptos::window(), PROJECTS_UPDATED_EVENT, move |_| bump());

        let project = Project { title: "Vision".into(), description: "d".into(), ..Default::default() };
        save_collection(&[project]).unwrap();
        assert_eq!(fired.get(), 1);

        // other collections stay quiet
        save_collection::<Skill>(&[]).unwrap();
        assert_eq!(fired.get(), 1);

        remove(PROJECTS_KEY).unwrap();
        remove(SKILLS_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn only_the_projects_watcher_hears_same_tab_saves() {
        let (projects_seen, on_projects) = counter();
        let (skills_seen, on_skills) = counter();
        let _projects = watch_key(PROJECTS_KEY, on_projects);
        let _skills = watch_key(SKILLS_KEY, on_skills);

        save_collection::<Project>(&[]).unwrap();
        assert_eq!(projects_seen.get(), 1);
        assert_eq!(skills_seen.get(), 0);
        remove(PROJECTS_KEY).unwrap();
    }

    #[wasm_bindgen_test]
    fn dropped_watcher_stops_listening() {
        let (seen, on_change) = counter();
        drop(watch_key(PROJECTS_KEY, on_change));
        dispatch_window_event(PROJECTS_UPDATED_EVENT);
        assert_eq!(seen.get(), 0);
    }
}
