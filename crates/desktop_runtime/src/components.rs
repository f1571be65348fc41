//! Shell UI composition: the session screens and the desktop surface.

mod boot;
mod desktop;
mod login;
mod setup;
mod taskbar;
mod window;

use leptos::*;

use self::{
    boot::{BootScreen, ShutdownScreen},
    desktop::DesktopShell,
    login::LoginScreen,
    setup::SetupScreen,
};

use crate::{
    model::{PointerPosition, SystemState},
    runtime_context::use_shell_runtime,
};

const TASKBAR_HEIGHT_PX: i32 = 48;

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

pub use crate::runtime_context::{use_shell_runtime as use_runtime, ShellProvider};

#[component]
/// Renders whichever screen the session machine is in.
pub fn ShellRoot() -> impl IntoView {
    let runtime = use_shell_runtime();
    let system = Signal::derive(move || runtime.state.get().system);

    view! {
        <div class="shell-root">
            {move || match system.get() {
                SystemState::Booting => view! { <BootScreen /> }.into_view(),
                SystemState::Setup => view! { <SetupScreen /> }.into_view(),
                SystemState::Login => view! { <LoginScreen /> }.into_view(),
                SystemState::Desktop => view! { <DesktopShell /> }.into_view(),
                SystemState::Shutdown => view! { <ShutdownScreen /> }.into_view(),
            }}
        </div>
    }
}
