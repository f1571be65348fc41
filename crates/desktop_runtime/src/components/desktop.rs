use leptos::*;

use super::{pointer_from_pointer_event, taskbar::Taskbar, window::ShellWindow};
use crate::apps::{self, AppDescriptor};
use crate::model::{AppId, Gesture, WindowId};
use crate::reducer::ShellAction;
use crate::runtime_context::use_shell_runtime;

#[component]
/// The desktop surface: wallpaper, icon column, window layer, and taskbar.
/// Pointer move/up handlers live here so gestures keep tracking when the
/// pointer leaves the window being dragged.
pub(super) fn DesktopShell() -> impl IntoView {
    let runtime = use_shell_runtime();

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        match runtime.interaction.get_untracked().gesture {
            Gesture::Idle => {}
            Gesture::Dragging(_) => runtime.dispatch_action(ShellAction::UpdateMove { pointer }),
            Gesture::Resizing(_) => runtime.dispatch_action(ShellAction::UpdateResize { pointer }),
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().gesture != Gesture::Idle {
            runtime.dispatch_action(ShellAction::EndGesture);
        }
    };
    let on_surface_click = move |_| {
        let desktop = runtime.state.get_untracked().desktop;
        if desktop.selected_icon.is_some() {
            runtime.dispatch_action(ShellAction::SelectIcon(None));
        }
        if desktop.start_menu_open {
            runtime.dispatch_action(ShellAction::CloseStartMenu);
        }
    };

    let wallpaper_style = Signal::derive(move || {
        format!(
            "background-image:url('{}');",
            runtime.state.get().wallpaper_url
        )
    });
    let window_ids = Signal::derive(move || {
        runtime
            .state
            .get()
            .desktop
            .windows
            .iter()
            .map(|w| w.id)
            .collect::<Vec<WindowId>>()
    });

    view! {
        <div
            class="desktop-shell"
            style=move || wallpaper_style.get()
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-surface" on:click=on_surface_click>
                <div class="desktop-icon-column">
                    {apps::desktop_icon_apps()
                        .into_iter()
                        .map(|descriptor| view! { <DesktopIcon descriptor=descriptor /> })
                        .collect_view()}
                </div>
                <div class="window-layer">
                    <For each=move || window_ids.get() key=|id| *id let:id>
                        <ShellWindow window_id=id />
                    </For>
                </div>
            </div>
            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIcon(descriptor: &'static AppDescriptor) -> impl IntoView {
    let runtime = use_shell_runtime();
    let app_id = descriptor.app_id;
    let label = descriptor.desktop_icon_label.unwrap_or(descriptor.name);

    let selected = Signal::derive(move || {
        runtime.state.get().desktop.selected_icon == Some(app_id)
    });
    let select = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::SelectIcon(Some(app_id)));
    };
    let open = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::LaunchApp { app_id });
    };
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            runtime.dispatch_action(ShellAction::LaunchApp { app_id });
        }
    };

    view! {
        <button
            class="desktop-icon"
            class:selected=selected
            on:click=select
            on:dblclick=open
            on:keydown=on_keydown
        >
            <span class=format!("icon-glyph glyph-{}", descriptor.icon_id) aria-hidden="true">
                {descriptor.glyph}
            </span>
            <span class="icon-label">{label}</span>
        </button>
    }
}

/// Apps shown in the start menu grid, in launcher order.
pub(super) fn start_menu_apps() -> Vec<(&'static AppDescriptor, AppId)> {
    apps::app_registry()
        .iter()
        .map(|descriptor| (descriptor, descriptor.app_id))
        .collect()
}
