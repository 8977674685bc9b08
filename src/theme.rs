use gloo::events::EventListener;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::EventTarget;

fn color_scheme_query() -> Option<JsValue> {
    let window = web_sys::window()?;
    let match_media = Reflect::get(&window, &"matchMedia".into()).ok()?;
    let match_media = match_media.dyn_into::<Function>().ok()?;
    match_media
        .call1(&window, &"(prefers-color-scheme: dark)".into())
        .ok()
}

pub(crate) fn prefers_dark_mode() -> bool {
    let Some(query) = color_scheme_query() else {
        return false;
    };
    Reflect::get(&query, &"matches".into())
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

/// Maps the OS preference onto the two mutually exclusive body classes.
pub(crate) fn apply_color_scheme() {
    let dark = prefers_dark_mode();
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.toggle_with_force("dark-mode", dark);
    let _ = classes.toggle_with_force("light-mode", !dark);
}

/// Re-applies the classes whenever the preference changes. The listener is
/// detached when the returned handle drops.
pub(crate) fn watch_color_scheme() -> Option<EventListener> {
    let target: EventTarget = color_scheme_query()?.dyn_into().ok()?;
    Some(EventListener::new(&target, "change", |_| {
        apply_color_scheme();
    }))
}
