//! Scroll-into-view detection via IntersectionObserver

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of an element that must be visible before it animates in
pub const REVEAL_THRESHOLD: f64 = 0.3;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Flips a signal to `true` the first time an element scrolls into view.
/// Disconnects when dropped.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityWatcher {
    pub fn watch(element: &web_sys::Element, threshold: f64, set_visible: WriteSignal<bool>) -> Option<Self> {
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|e| e.is_intersecting());
            if visible {
                set_visible.set(true);
                observer.disconnect();
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(element);

        Some(VisibilityWatcher {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Signal that turns `true` once the referenced element has been seen.
pub fn use_reveal<T>(node: NodeRef<T>) -> ReadSignal<bool>
where
    T: html::ElementDescriptor + Clone + 'static,
{
    let (visible, set_visible) = create_signal(false);
    let watcher = store_value(None::<VisibilityWatcher>);

    node.on_load(move |el| {
        let el = el.into_any();
        match VisibilityWatcher::watch(&el, REVEAL_THRESHOLD, set_visible) {
            Some(w) => watcher.set_value(Some(w)),
            // no observer support: show immediately
            None => set_visible.set(true),
        }
    });

    visible
}
