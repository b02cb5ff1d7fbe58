//! Leptos hook toggling a designated element into and out of fullscreen.
//!
//! Fullscreen status is tracked from the platform's own fullscreen-element
//! state via the fullscreen-change event family. Browsers that expose no
//! `fullscreenElement`-style property at all fall back to a resize heuristic
//! (viewport height equals screen height). A screen wake-lock is held while
//! the tracked status is true.

use crate::capability::{
    call_first_supported, first_set_property, has_any_property, EXIT_FULLSCREEN_METHODS,
    FULLSCREEN_CHANGE_EVENTS, FULLSCREEN_ELEMENT_PROPS, REQUEST_FULLSCREEN_METHODS,
};
use crate::hooks::wake_lock::ScreenLock;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

/// Handle returned by [`use_fullscreen`].
pub struct FullscreenHandle {
    /// Best-known fullscreen status. Updated only by the change-event (or
    /// fallback resize) listener, never by the toggle itself.
    pub is_fullscreen: ReadSignal<bool>,
    /// Toggle fullscreen for the configured element. Stops propagation of the
    /// supplied event before anything else.
    pub toggle: Box<dyn Fn(Option<&web_sys::Event>)>,
    /// Leave fullscreen mode regardless of the tracked status.
    pub exit: Box<dyn Fn()>,
}

/// Put the element with the given id into fullscreen, using the first
/// request capability the browser offers. Missing element or missing
/// capability are both silent no-ops.
pub fn enter_fullscreen(container_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(container_id) else {
        log::debug!("fullscreen target #{container_id} not found");
        return;
    };
    let target: &JsValue = element.as_ref();
    let _ = call_first_supported(target, REQUEST_FULLSCREEN_METHODS);
}

/// Leave fullscreen using the first exit capability the document offers.
pub fn exit_fullscreen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let target: &JsValue = document.as_ref();
    let _ = call_first_supported(target, EXIT_FULLSCREEN_METHODS);
}

/// Whether the document can report the current fullscreen element at all.
fn supports_fullscreen_element(document: &Document) -> bool {
    has_any_property(document.as_ref(), FULLSCREEN_ELEMENT_PROPS)
}

/// Whether some element is currently fullscreen, per the platform's own state.
fn fullscreen_element_active(document: &Document) -> bool {
    first_set_property(document.as_ref(), FULLSCREEN_ELEMENT_PROPS).is_some()
}

/// Fallback check: a viewport spanning the entire screen height is taken to
/// be fullscreen. Browser chrome and multi-monitor layouts can fool this;
/// exact equality is the intended comparison.
#[allow(clippy::float_cmp)]
fn viewport_fills_screen(inner_height: f64, screen_height: f64) -> bool {
    inner_height == screen_height
}

fn viewport_is_fullscreen() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let inner = window.inner_height().ok().and_then(|h| h.as_f64());
    let screen = window.screen().ok().and_then(|s| s.height().ok());
    matches!((inner, screen), (Some(i), Some(s)) if viewport_fills_screen(i, f64::from(s)))
}

/// Track fullscreen status for the element with id `container_id`.
///
/// Returns the status signal plus toggle and exit functions. Listeners are
/// registered once and detached with the same stored handler on cleanup. The
/// wake-lock follows the status signal: acquired when it becomes true,
/// released when it becomes false or the owning component is disposed.
pub fn use_fullscreen(container_id: &str) -> FullscreenHandle {
    let container_id = container_id.to_owned();
    let (is_fullscreen, set_is_fullscreen) = create_signal(false);

    let native_tracking = web_sys::window()
        .and_then(|w| w.document())
        .map(|d| supports_fullscreen_element(&d))
        .unwrap_or(false);

    if native_tracking {
        let handler_storage = store_value::<Option<Closure<dyn FnMut(web_sys::Event)>>>(None);

        create_effect(move |_| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            // Initial sync; afterwards only the change events update the flag.
            set_is_fullscreen.set(fullscreen_element_active(&document));

            let handler = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                    set_is_fullscreen.set(fullscreen_element_active(&doc));
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            for event in FULLSCREEN_CHANGE_EVENTS {
                let _ = document
                    .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
            }
            handler_storage.set_value(Some(handler));

            on_cleanup(move || {
                handler_storage.with_value(|stored| {
                    let Some(handler) = stored.as_ref() else {
                        return;
                    };
                    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                        return;
                    };
                    for event in FULLSCREEN_CHANGE_EVENTS {
                        let _ = document.remove_event_listener_with_callback(
                            event,
                            handler.as_ref().unchecked_ref(),
                        );
                    }
                });
                handler_storage.set_value(None);
            });
        });
    } else {
        let _ = leptos_use::use_event_listener(leptos_use::use_window(), ev::resize, move |_| {
            set_is_fullscreen.set(viewport_is_fullscreen());
        });
    }

    let lock = ScreenLock::new();
    {
        let lock = lock.clone();
        create_effect(move |_| {
            if is_fullscreen.get() {
                lock.acquire();
            } else {
                lock.release();
            }
        });
    }

    // The platform drops wake-locks while the document is hidden; re-acquire
    // when it becomes visible again and we are still fullscreen.
    {
        let lock = lock.clone();
        let visibility = leptos_use::use_document_visibility();
        create_effect(move |_| {
            if visibility.get() == web_sys::VisibilityState::Visible
                && is_fullscreen.get_untracked()
            {
                lock.acquire();
            }
        });
    }

    on_cleanup(move || lock.release());

    let toggle: Box<dyn Fn(Option<&web_sys::Event>)> = Box::new(move |event| {
        if let Some(event) = event {
            event.stop_propagation();
        }
        if is_fullscreen.get_untracked() {
            exit_fullscreen();
        } else {
            enter_fullscreen(&container_id);
        }
    });
    let exit: Box<dyn Fn()> = Box::new(exit_fullscreen);

    FullscreenHandle {
        is_fullscreen,
        toggle,
        exit,
    }
}
