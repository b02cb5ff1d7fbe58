use crate::components::FullscreenButton;
use leptos::*;

/// Demo shell: a fullscreenable "player" panel with its toggle button.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div
            id="player"
            style="width: 100vw; height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #1a1a1a; color: white;"
        >
            <h1>"Now playing"</h1>
            <FullscreenButton target_id="player" />
        </div>
    }
}
