//! Shared hooks for popover-style components.

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};
use yew::prelude::*;

/// Emit `on_dismiss` for every document `mousedown` outside `root`.
#[hook]
pub(crate) fn use_outside_click(root: NodeRef, on_dismiss: Callback<()>) {
    use_effect_with_deps(
        move |(root, on_dismiss)| {
            let root = root.clone();
            let on_dismiss = on_dismiss.clone();
            let document = gloo::utils::document();
            let listener = EventListener::new(&document, "mousedown", move |event| {
                let target = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok());
                let inside = root
                    .cast::<Element>()
                    .zip(target)
                    .is_some_and(|(root, target)| root.contains(Some(&target)));
                if !inside {
                    on_dismiss.emit(());
                }
            });
            move || drop(listener)
        },
        (root, on_dismiss),
    );
}

/// Lock body scrolling while `locked` holds; restore on change or unmount.
#[hook]
pub(crate) fn use_body_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            set_body_overflow(if *locked { "hidden" } else { "unset" });
            || set_body_overflow("unset")
        },
        locked,
    );
}

fn set_body_overflow(value: &str) {
    if let Some(body) = gloo::utils::document().body() {
        if let Err(err) = body.style().set_property("overflow", value) {
            console::warn!("body overflow update failed", value, err);
        }
    }
}
