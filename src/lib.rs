//! Fullscreen toggling for Leptos apps, with a screen wake-lock held while
//! fullscreen is active.
//!
//! The Fullscreen and Wake Lock APIs are consumed behind runtime capability
//! probes, so vendor-prefixed browsers work through their own method names
//! and missing capabilities degrade every operation to a no-op.

pub mod app;
pub mod capability;
pub mod components;
pub mod hooks;

pub use hooks::{
    enter_fullscreen, exit_fullscreen, is_screen_lock_supported, request_screen_lock,
    use_fullscreen, FullscreenHandle, ScreenLock,
};

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(app::App);
}
