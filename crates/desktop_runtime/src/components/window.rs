use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{pointer_from_pointer_event, TASKBAR_HEIGHT_PX};
use crate::apps;
use crate::model::{ResizeEdge, WindowId};
use crate::reducer::ShellAction;
use crate::runtime_context::use_shell_runtime;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

#[component]
pub(super) fn ShellWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .desktop
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });
    let focused = Signal::derive(move || {
        runtime.state.get().desktop.focused == Some(window_id)
    });

    let focus = move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(ShellAction::FocusWindow { window_id });
        }
    };
    let minimize = move || runtime.dispatch_action(ShellAction::MinimizeWindow { window_id });
    let toggle_maximize =
        move || runtime.dispatch_action(ShellAction::ToggleMaximizeWindow { window_id });
    let close = move || runtime.dispatch_action(ShellAction::CloseWindow { window_id });

    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(ShellAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        toggle_maximize();
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                // The record can vanish between the Show gate and this
                // closure re-running; render nothing for that frame.
                let Some(win) = window.get() else {
                    return ().into_view();
                };
                let ctx = runtime.app_view_context();
                // Maximized geometry comes from CSS; the stored rect stays
                // underneath for restore.
                let style = if win.maximized {
                    format!(
                        "left:0;top:0;width:100vw;height:calc(100vh - {TASKBAR_HEIGHT_PX}px);z-index:{};",
                        win.z_index
                    )
                } else {
                    format!(
                        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                        win.position.x, win.position.y, win.size.width, win.size.height, win.z_index
                    )
                };

                view! {
                    <section
                        class="shell-window"
                        class:focused=focused
                        class:minimized=win.minimized
                        class:maximized=win.maximized
                        style=style
                        role="dialog"
                        aria-label=win.title.clone()
                        on:pointerdown=focus
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=titlebar_double_click
                        >
                            <span class="titlebar-title">{win.title.clone()}</span>
                            <div class="titlebar-controls">
                                <button
                                    aria-label="Minimize window"
                                    on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                                    on:click=move |_| minimize()
                                >
                                    "\u{2013}"
                                </button>
                                <button
                                    aria-label=if win.maximized { "Restore window" } else { "Maximize window" }
                                    on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                                    on:click=move |_| toggle_maximize()
                                >
                                    {if win.maximized { "\u{2750}" } else { "\u{25A1}" }}
                                </button>
                                <button
                                    class="close"
                                    aria-label="Close window"
                                    on:pointerdown=|ev: web_sys::PointerEvent| ev.stop_propagation()
                                    on:click=move |_| close()
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                        </header>
                        <div class="window-body">
                            {apps::render_window_contents(&win, ctx)}
                        </div>
                        <Show when=move || window.get().map(|w| !w.maximized).unwrap_or(false) fallback=|| ()>
                            <ResizeHandle window_id=window_id edge=ResizeEdge::North />
                            <ResizeHandle window_id=window_id edge=ResizeEdge::South />
                            <ResizeHandle window_id=window_id edge=ResizeEdge::East />
                            <ResizeHandle window_id=window_id edge=ResizeEdge::West />
                            <ResizeHandle window_id=window_id edge=ResizeEdge::NorthEast />
                            <ResizeHandle window_id=window_id edge=ResizeEdge::NorthWest />
                            <ResizeHandle window_id=window_id edge=ResizeEdge::SouthEast />
                            <ResizeHandle window_id=window_id edge=ResizeEdge::SouthWest />
                        </Show>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn ResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_shell_runtime();
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(ShellAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! { <div class=class_name aria-hidden="true" on:pointerdown=on_pointerdown /> }
}
