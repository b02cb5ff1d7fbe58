mod fullscreen_button;

pub use fullscreen_button::FullscreenButton;
