use leptos::*;

use crate::runtime_context::use_shell_runtime;

#[component]
/// Boot splash. The logo shows immediately; the spinner and text fade in once
/// the splash timer has fired.
pub(super) fn BootScreen() -> impl IntoView {
    let runtime = use_shell_runtime();
    let splash_visible = Signal::derive(move || runtime.state.get().boot_splash_visible);

    view! {
        <div class="boot-screen">
            <div class="boot-logo" aria-hidden="true"></div>
            <Show when=move || splash_visible.get() fallback=|| ()>
                <div class="boot-progress">
                    <div class="boot-spinner" role="status" aria-label="Starting up"></div>
                    <p>"Starting up..."</p>
                </div>
            </Show>
        </div>
    }
}

#[component]
/// Black power-off screen. Terminal: reloading the page is the only way back.
pub(super) fn ShutdownScreen() -> impl IntoView {
    view! { <div class="shutdown-screen"></div> }
}
