//! Best-effort screen wake-lock, held while fullscreen playback is active.
//!
//! The Wake Lock API is consumed behind runtime probes on the navigator
//! object, so unsupported browsers short-circuit to no-ops. Failures are
//! never surfaced to the caller; the worst case is that the display is
//! allowed to sleep.

use js_sys::{Function, Promise, Reflect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Whether the navigator exposes the Wake Lock API.
pub fn is_screen_lock_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator: JsValue = window.navigator().into();
    Reflect::has(&navigator, &JsValue::from_str("wakeLock")).unwrap_or(false)
}

/// Request a `"screen"` wake-lock sentinel. Resolves to `None` when the API
/// is unsupported or the request is rejected (permission denied, document
/// hidden).
pub async fn request_screen_lock() -> Option<JsValue> {
    if !is_screen_lock_supported() {
        return None;
    }
    let window = web_sys::window()?;
    let navigator: JsValue = window.navigator().into();
    let wake_lock = Reflect::get(&navigator, &JsValue::from_str("wakeLock")).ok()?;
    let request: Function = Reflect::get(&wake_lock, &JsValue::from_str("request"))
        .ok()?
        .dyn_into()
        .ok()?;
    let promise: Promise = request
        .call1(&wake_lock, &JsValue::from_str("screen"))
        .ok()?
        .dyn_into()
        .ok()?;
    match JsFuture::from(promise).await {
        Ok(sentinel) => Some(sentinel),
        Err(err) => {
            log::debug!("wake-lock request rejected: {err:?}");
            None
        }
    }
}

/// Whether the platform has already released this sentinel (it does so on its
/// own when the document is hidden).
fn sentinel_released(sentinel: &JsValue) -> bool {
    Reflect::get(sentinel, &JsValue::from_str("released"))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(false)
}

async fn release_sentinel(sentinel: JsValue) {
    let Ok(release) = Reflect::get(&sentinel, &JsValue::from_str("release")) else {
        return;
    };
    let Ok(release) = release.dyn_into::<Function>() else {
        return;
    };
    let Ok(result) = release.call0(&sentinel) else {
        return;
    };
    if let Ok(promise) = result.dyn_into::<Promise>() {
        if let Err(err) = JsFuture::from(promise).await {
            log::debug!("wake-lock release failed: {err:?}");
        }
    }
}

/// Owns at most one wake-lock sentinel. Acquisition and release both operate
/// on the single stored handle, and a `wanted` flag arbitrates the race
/// between an in-flight request and a release, so a late-resolving request
/// never leaves a stray lock held.
#[derive(Clone, Default)]
pub struct ScreenLock {
    sentinel: Rc<RefCell<Option<JsValue>>>,
    wanted: Rc<Cell<bool>>,
}

impl ScreenLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a sentinel is stored and the platform has not auto-released it.
    pub fn is_held(&self) -> bool {
        self.sentinel
            .borrow()
            .as_ref()
            .is_some_and(|sentinel| !sentinel_released(sentinel))
    }

    /// Request a lock and store the sentinel. Skipped when one is already
    /// held; released immediately if `release` ran while the request was
    /// still in flight.
    pub fn acquire(&self) {
        self.wanted.set(true);
        if self.is_held() {
            return;
        }
        let lock = self.clone();
        leptos::spawn_local(async move {
            let Some(sentinel) = request_screen_lock().await else {
                return;
            };
            if lock.wanted.get() {
                // A rapid release/acquire can leave two requests in flight;
                // the sentinel displaced here must still be released.
                let previous = lock.sentinel.borrow_mut().replace(sentinel);
                if let Some(previous) = previous {
                    release_sentinel(previous).await;
                }
            } else {
                release_sentinel(sentinel).await;
            }
        });
    }

    /// Release the stored sentinel, if any, and clear it.
    pub fn release(&self) {
        self.wanted.set(false);
        if let Some(sentinel) = self.sentinel.borrow_mut().take() {
            leptos::spawn_local(release_sentinel(sentinel));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Install a fake `navigator.wakeLock` whose request resolves to a
    /// sentinel with a working `release()` and `released` flag. The returned
    /// counter tracks how many sentinels are currently unreleased.
    fn install_fake_wake_lock(navigator: &Object) -> Rc<Cell<i32>> {
        let active = Rc::new(Cell::new(0));
        let counter = Rc::clone(&active);

        let request = Closure::wrap(Box::new(move || -> JsValue {
            counter.set(counter.get() + 1);
            let sentinel = Object::new();
            Reflect::set(
                sentinel.as_ref(),
                &JsValue::from_str("released"),
                &JsValue::FALSE,
            )
            .unwrap();

            let sentinel_js: JsValue = sentinel.clone().into();
            let releases = Rc::clone(&counter);
            let release = Closure::wrap(Box::new(move || -> JsValue {
                let already = Reflect::get(&sentinel_js, &JsValue::from_str("released"))
                    .ok()
                    .and_then(|value| value.as_bool())
                    .unwrap_or(false);
                if !already {
                    Reflect::set(&sentinel_js, &JsValue::from_str("released"), &JsValue::TRUE)
                        .unwrap();
                    releases.set(releases.get() - 1);
                }
                Promise::resolve(&JsValue::UNDEFINED).into()
            }) as Box<dyn FnMut() -> JsValue>);
            Reflect::set(
                sentinel.as_ref(),
                &JsValue::from_str("release"),
                release.as_ref(),
            )
            .unwrap();
            release.forget();

            Promise::resolve(sentinel.as_ref()).into()
        }) as Box<dyn FnMut() -> JsValue>);

        let wake_lock = Object::new();
        Reflect::set(
            wake_lock.as_ref(),
            &JsValue::from_str("request"),
            request.as_ref(),
        )
        .unwrap();
        request.forget();
        Reflect::set(
            navigator.as_ref(),
            &JsValue::from_str("wakeLock"),
            wake_lock.as_ref(),
        )
        .unwrap();

        active
    }

    fn remove_fake_wake_lock(navigator: &Object) {
        let _ = Reflect::delete_property(navigator, &JsValue::from_str("wakeLock"));
    }

    #[wasm_bindgen_test]
    async fn rapid_release_and_reacquire_leaves_no_stray_lock() {
        use gloo_timers::future::TimeoutFuture;

        let navigator: Object = web_sys::window().unwrap().navigator().unchecked_into();
        let active = install_fake_wake_lock(&navigator);

        // Two requests end up in flight: the first acquire's and the
        // re-acquire's. Whichever sentinel is displaced must be released.
        let lock = ScreenLock::new();
        lock.acquire();
        lock.release();
        lock.acquire();
        TimeoutFuture::new(50).await;
        assert!(lock.is_held());

        lock.release();
        TimeoutFuture::new(50).await;
        assert!(!lock.is_held());
        assert_eq!(active.get(), 0);

        remove_fake_wake_lock(&navigator);
    }

    #[wasm_bindgen_test]
    async fn release_mid_flight_discards_the_resolved_sentinel() {
        use gloo_timers::future::TimeoutFuture;

        let navigator: Object = web_sys::window().unwrap().navigator().unchecked_into();
        let active = install_fake_wake_lock(&navigator);

        let lock = ScreenLock::new();
        lock.acquire();
        lock.release();
        TimeoutFuture::new(50).await;
        assert!(!lock.is_held());
        assert_eq!(active.get(), 0);

        remove_fake_wake_lock(&navigator);
    }

    #[wasm_bindgen_test]
    async fn request_short_circuits_without_support() {
        let sentinel = request_screen_lock().await;
        if !is_screen_lock_supported() {
            assert!(sentinel.is_none());
        } else if let Some(sentinel) = sentinel {
            release_sentinel(sentinel).await;
        }
    }

    #[wasm_bindgen_test]
    fn release_without_a_held_lock_is_a_no_op() {
        let lock = ScreenLock::new();
        assert!(!lock.is_held());
        lock.release();
        assert!(!lock.is_held());
    }
}
