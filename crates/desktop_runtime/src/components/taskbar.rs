use leptos::*;

use super::desktop::start_menu_apps;
use crate::apps;
use crate::model::{AppId, PowerAction};
use crate::reducer::ShellAction;
use crate::runtime_context::use_shell_runtime;

fn clock_text() -> String {
    let now = js_sys::Date::new_0();
    format!("{:02}:{:02}", now.get_hours(), now.get_minutes())
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_shell_runtime();

    let start_menu_open = Signal::derive(move || runtime.state.get().desktop.start_menu_open);

    let clock = create_rw_signal(clock_text());
    #[cfg(target_arch = "wasm32")]
    {
        let handle = set_interval_with_handle(
            move || clock.set(clock_text()),
            std::time::Duration::from_secs(15),
        );
        if let Ok(handle) = handle {
            on_cleanup(move || handle.clear());
        }
    }

    let toggle_start = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::ToggleStartMenu);
    };

    view! {
        <Show when=move || start_menu_open.get() fallback=|| ()>
            <StartMenu />
        </Show>
        <footer class="taskbar">
            <button class="start-button" class:active=start_menu_open on:click=toggle_start>
                <span class="start-glyph" aria-hidden="true"></span>
            </button>
            // Every registry app gets a button; clicking one launches,
            // restores, minimizes, or focuses depending on window state.
            <div class="taskbar-apps">
                {apps::app_registry()
                    .iter()
                    .map(|descriptor| {
                        let app_id = descriptor.app_id;
                        let running = Signal::derive(move || {
                            runtime.state.get().desktop.window_for_app(app_id).is_some()
                        });
                        let active = Signal::derive(move || {
                            let desktop = runtime.state.get().desktop;
                            desktop
                                .focused
                                .and_then(|id| desktop.window(id).map(|w| w.app_id))
                                == Some(app_id)
                        });
                        let activate = move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            runtime.dispatch_action(ShellAction::ActivateFromTaskbar { app_id });
                        };
                        view! {
                            <button
                                class="taskbar-app-button"
                                class:running=running
                                class:active=active
                                title=descriptor.name
                                on:click=activate
                            >
                                <span
                                    class=format!("taskbar-glyph glyph-{}", descriptor.icon_id)
                                    aria-hidden="true"
                                >
                                    {descriptor.glyph}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="taskbar-clock">{move || clock.get()}</div>
        </footer>
    }
}

#[component]
fn StartMenu() -> impl IntoView {
    let runtime = use_shell_runtime();

    let launch = move |app_id: AppId| {
        runtime.dispatch_action(ShellAction::LaunchApp { app_id });
    };
    let power = move |action: PowerAction| {
        runtime.dispatch_action(ShellAction::Power(action));
    };

    view! {
        <div class="start-menu" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
            <div class="start-menu-apps">
                {start_menu_apps()
                    .into_iter()
                    .map(|(descriptor, app_id)| {
                        view! {
                            <button
                                class=format!("start-menu-tile {}", descriptor.accent)
                                on:click=move |_| launch(app_id)
                            >
                                <span
                                    class=format!("tile-glyph glyph-{}", descriptor.icon_id)
                                    aria-hidden="true"
                                >
                                    {descriptor.glyph}
                                </span>
                                <span class="tile-label">{descriptor.name}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="start-menu-footer">
                <span class="start-menu-user">
                    {move || runtime.state.get().identity.username.clone()}
                </span>
            </div>
            <div class="start-menu-power">
                <button on:click=move |_| power(PowerAction::Sleep)>"Sleep"</button>
                <button on:click=move |_| power(PowerAction::Restart)>"Restart"</button>
                <button on:click=move |_| power(PowerAction::Shutdown)>"Shut down"</button>
                <button class="danger" on:click=move |_| power(PowerAction::Reset)>
                    "Reset this PC"
                </button>
            </div>
        </div>
    }
}
