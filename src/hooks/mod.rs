mod fullscreen;
mod wake_lock;

pub use fullscreen::{enter_fullscreen, exit_fullscreen, use_fullscreen, FullscreenHandle};
pub use wake_lock::{is_screen_lock_supported, request_screen_lock, ScreenLock};
