//! Vendor-prefix capability probes for the Fullscreen API.
//!
//! Browsers shipped fullscreen support under different method and property
//! names before standardisation. Each list below is ordered standard-first,
//! then Firefox, Safari, IE/Edge; the first name present on the target wins.
//! Probing goes through `js_sys::Reflect` so nothing is assumed about what
//! the running browser actually exposes.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Element-level request-fullscreen methods.
pub const REQUEST_FULLSCREEN_METHODS: &[&str] = &[
    "requestFullscreen",
    "mozRequestFullscreen",
    "webkitRequestFullscreen",
    "msRequestFullscreen",
];

/// Document-level exit-fullscreen methods.
pub const EXIT_FULLSCREEN_METHODS: &[&str] = &[
    "exitFullscreen",
    "mozCancelFullScreen",
    "webkitExitFullscreen",
    "msExitFullscreen",
];

/// Document properties naming the element currently rendered fullscreen.
pub const FULLSCREEN_ELEMENT_PROPS: &[&str] = &[
    "fullscreenElement",
    "mozFullScreenElement",
    "webkitFullscreenElement",
    "msFullscreenElement",
];

/// Event names fired by the matching vendor implementations on a
/// fullscreen transition.
pub const FULLSCREEN_CHANGE_EVENTS: &[&str] = &[
    "fullscreenchange",
    "mozfullscreenchange",
    "webkitfullscreenchange",
    "MSFullscreenChange",
];

/// Find the first name from `names` that is defined as a function on `target`.
pub fn first_supported_method(target: &JsValue, names: &[&'static str]) -> Option<&'static str> {
    names.iter().copied().find(|name| {
        Reflect::get(target, &JsValue::from_str(name))
            .map(|value| value.is_function())
            .unwrap_or(false)
    })
}

/// Invoke the first supported method from `names` on `target`, with no
/// arguments and `target` as the receiver. Returns the name that was invoked,
/// or `None` when no capability is present. The call's own return value
/// (usually a promise) is dropped; a synchronous throw is logged and swallowed.
pub fn call_first_supported(target: &JsValue, names: &[&'static str]) -> Option<&'static str> {
    let name = first_supported_method(target, names)?;
    let method: Function = Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into()
        .ok()?;
    if let Err(err) = method.call0(target) {
        log::warn!("{name} threw: {err:?}");
    }
    Some(name)
}

/// Whether any of `names` exists as a property on `target`, defined or not.
pub fn has_any_property(target: &JsValue, names: &[&'static str]) -> bool {
    names
        .iter()
        .any(|name| Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false))
}

/// Read the first property from `names` whose value on `target` is neither
/// `undefined` nor `null`.
pub fn first_set_property(target: &JsValue, names: &[&'static str]) -> Option<JsValue> {
    names.iter().find_map(|name| {
        Reflect::get(target, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    })
}
