//! Motion capability checks and scroll-triggered reveals.
//!
//! Every animated component checks `prefers-reduced-motion` before it
//! registers timers, listeners or observers; with the preference set it
//! jumps elements straight to their end state instead.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// One-shot read of the platform's reduced-motion preference.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Reduced-motion preference as reactive state, re-read when the media
/// query fires its change event.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(prefers_reduced_motion);
    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let mql = web_sys::window().and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten());
                let listener = mql.as_ref().map(|mql| {
                    let reduced = reduced.clone();
                    let callback = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
                        reduced.set(event.matches());
                    }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
                    let _ = mql.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
                    callback
                });
                move || {
                    if let (Some(mql), Some(callback)) = (mql, listener) {
                        let _ = mql.remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }
    *reduced
}

/// Marks elements matching `selector` with the `in-view` class once they
/// cross into the viewport, then stops watching them. With `active` false
/// (the reveal gate still closed) nothing is registered yet; with reduced
/// motion everything is marked visible immediately.
#[hook]
pub fn use_scroll_reveal(selector: &'static str, active: bool) {
    use_effect_with_deps(
        move |&active| {
            let mut handle = None;
            if active {
                if prefers_reduced_motion() {
                    mark_all_in_view(selector);
                } else {
                    handle = observe_all(selector);
                }
            }
            move || {
                if let Some((observer, _callback)) = handle {
                    observer.disconnect();
                }
            }
        },
        active,
    );
}

fn mark_all_in_view(selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(nodes) = document.query_selector_all(selector) {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                let _ = element.class_list().add_1("in-view");
            }
        }
    }
}

type ObserverHandle = (
    IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
);

fn observe_all(selector: &str) -> Option<ObserverHandle> {
    let document = web_sys::window().and_then(|w| w.document())?;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("in-view");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(0.18));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    let nodes = document.query_selector_all(selector).ok()?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            observer.observe(&element);
        }
    }
    Some((observer, callback))
}
