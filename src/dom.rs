//! DOM helpers for delegated click handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Value of `attr` on the nearest element, starting at the event target and
/// walking up, that carries it.
pub fn closest_attribute(ev: &Event, attr: &str) -> Option<String> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let owner = target.closest(&format!("[{}]", attr)).ok().flatten()?;
    owner.get_attribute(attr)
}
