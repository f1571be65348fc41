//! Shell actions, side-effect intents, and transition logic for the desktop
//! runtime.
//!
//! [`reduce_shell`] is the authoritative state transition engine: the session
//! machine (boot, setup, login, desktop, shutdown), the launch dispatcher, and
//! window gestures all run through it. It mutates state synchronously and
//! returns side-effect intents for the host layer to execute.

use thiserror::Error;

use platform_host::{SessionIdentity, DEFAULT_USERNAME};

use crate::apps;
use crate::geometry::{compute_move, compute_resize};
use crate::model::{
    AppId, DesktopState, DragGesture, Gesture, InteractionState, PointerPosition, PowerAction,
    ResizeEdge, ResizeGesture, ShellState, SystemState, WindowId,
};
use crate::registry;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_shell`] to mutate [`ShellState`].
pub enum ShellAction {
    /// Replace the in-memory identity with the one loaded from storage.
    HydrateIdentity(SessionIdentity),
    /// Enter the boot sequence, discarding any desktop session.
    BeginBoot,
    /// Boot splash timer fired for the given boot episode.
    BootSplashElapsed {
        /// Boot generation the timer was scheduled under.
        generation: u64,
    },
    /// Boot completion timer fired for the given boot episode.
    BootCompleteElapsed {
        /// Boot generation the timer was scheduled under.
        generation: u64,
    },
    /// Finish the first-run wizard with the chosen account.
    CompleteSetup {
        /// Chosen display name; blank falls back to the default.
        username: String,
        /// Chosen password, stored verbatim.
        password: String,
    },
    /// Attempt to unlock the session.
    SubmitLogin {
        /// Password as typed.
        password: String,
    },
    /// A keystroke on the login screen; clears a stale error.
    LoginInputChanged,
    /// Power action chosen from the start menu.
    Power(PowerAction),
    /// Replace the wallpaper image.
    SetWallpaper {
        /// New wallpaper URL.
        url: String,
    },
    /// Launch an app, or surface its existing window.
    LaunchApp {
        /// App to launch.
        app_id: AppId,
    },
    /// Taskbar button click: launch, restore, minimize, or focus.
    ActivateFromTaskbar {
        /// App associated with the taskbar button.
        app_id: AppId,
    },
    /// Focus (and raise) a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle a window between maximized and windowed.
    ToggleMaximizeWindow {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Close a window and remove it from the registry.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Select a desktop icon, or clear the selection with `None`.
    SelectIcon(Option<AppId>),
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Release the active gesture, whatever it is.
    EndGesture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_shell`] for the host to execute.
pub enum RuntimeEffect {
    /// Persist the current identity to storage.
    PersistIdentity,
    /// Remove the persisted identity from storage.
    ClearIdentity,
    /// Arm the boot splash and boot completion timers for one boot episode.
    ScheduleBootSequence {
        /// Generation the timers must echo back in their tick actions.
        generation: u64,
    },
    /// Show a transient user-facing notification.
    Notify {
        /// Message text.
        message: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions dispatched in the wrong system state.
pub enum ReducerError {
    /// A desktop-only action arrived while no desktop session was active.
    #[error("desktop session is not active")]
    DesktopNotActive,
}

/// Applies a [`ShellAction`] to the shell state and collects side effects.
///
/// Window actions addressed to an id that no longer exists are silent no-ops:
/// pointer events race with window closure, and a stale event must not take
/// the reducer down.
///
/// # Errors
///
/// Returns [`ReducerError::DesktopNotActive`] when a desktop-only action is
/// dispatched outside [`SystemState::Desktop`].
pub fn reduce_shell(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    action: ShellAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::HydrateIdentity(identity) => {
            state.identity = identity;
        }
        ShellAction::BeginBoot => {
            // Shutdown is terminal; only a page reload boots again.
            if state.system != SystemState::Shutdown {
                enter_booting(state, interaction, &mut effects);
            }
        }
        ShellAction::BootSplashElapsed { generation } => {
            if generation == state.boot_generation && state.system == SystemState::Booting {
                state.boot_splash_visible = true;
            }
        }
        ShellAction::BootCompleteElapsed { generation } => {
            if generation == state.boot_generation && state.system == SystemState::Booting {
                state.system = if state.identity.setup_complete {
                    SystemState::Login
                } else {
                    SystemState::Setup
                };
            }
        }
        ShellAction::CompleteSetup { username, password } => {
            let username = username.trim();
            state.identity = SessionIdentity {
                username: if username.is_empty() {
                    DEFAULT_USERNAME.to_string()
                } else {
                    username.to_string()
                },
                password,
                setup_complete: true,
            };
            state.login_error = false;
            // Setup flows straight onto the desktop; no extra login stop.
            state.system = SystemState::Desktop;
            effects.push(RuntimeEffect::PersistIdentity);
        }
        ShellAction::SubmitLogin { password } => {
            if password == state.identity.password {
                state.login_error = false;
                state.system = SystemState::Desktop;
            } else {
                state.login_error = true;
            }
        }
        ShellAction::LoginInputChanged => {
            state.login_error = false;
        }
        ShellAction::Power(power) => {
            ensure_desktop(state)?;
            state.desktop.start_menu_open = false;
            match power {
                PowerAction::Sleep => {
                    effects.push(RuntimeEffect::Notify {
                        message: "Sleeping... (everything stays where you left it)".to_string(),
                    });
                }
                PowerAction::Shutdown => {
                    state.system = SystemState::Shutdown;
                    interaction.gesture = Gesture::Idle;
                }
                PowerAction::Restart => {
                    enter_booting(state, interaction, &mut effects);
                }
                PowerAction::Reset => {
                    state.identity = SessionIdentity::default();
                    effects.push(RuntimeEffect::ClearIdentity);
                    enter_booting(state, interaction, &mut effects);
                }
            }
        }
        ShellAction::SetWallpaper { url } => {
            ensure_desktop(state)?;
            state.wallpaper_url = url;
        }
        ShellAction::LaunchApp { app_id } => {
            ensure_desktop(state)?;
            launch_app(&mut state.desktop, app_id);
        }
        ShellAction::ActivateFromTaskbar { app_id } => {
            ensure_desktop(state)?;
            state.desktop.start_menu_open = false;
            match state.desktop.window_for_app(app_id).map(|w| (w.id, w.minimized)) {
                None => launch_app(&mut state.desktop, app_id),
                Some((id, true)) => registry::focus_window(&mut state.desktop, id),
                Some((id, false)) if state.desktop.focused == Some(id) => {
                    registry::minimize_window(&mut state.desktop, id);
                }
                Some((id, false)) => registry::focus_window(&mut state.desktop, id),
            }
        }
        ShellAction::FocusWindow { window_id } => {
            ensure_desktop(state)?;
            registry::focus_window(&mut state.desktop, window_id);
        }
        ShellAction::MinimizeWindow { window_id } => {
            ensure_desktop(state)?;
            registry::minimize_window(&mut state.desktop, window_id);
        }
        ShellAction::ToggleMaximizeWindow { window_id } => {
            ensure_desktop(state)?;
            registry::toggle_maximize_window(&mut state.desktop, window_id);
        }
        ShellAction::CloseWindow { window_id } => {
            ensure_desktop(state)?;
            registry::close_window(&mut state.desktop, window_id);
            if interaction.gesture_window() == Some(window_id) {
                interaction.gesture = Gesture::Idle;
            }
        }
        ShellAction::ToggleStartMenu => {
            ensure_desktop(state)?;
            state.desktop.start_menu_open = !state.desktop.start_menu_open;
        }
        ShellAction::CloseStartMenu => {
            ensure_desktop(state)?;
            state.desktop.start_menu_open = false;
        }
        ShellAction::SelectIcon(app_id) => {
            ensure_desktop(state)?;
            state.desktop.selected_icon = app_id;
        }
        ShellAction::BeginMove { window_id, pointer } => {
            ensure_desktop(state)?;
            let Some(window) = state.desktop.window(window_id) else {
                return Ok(effects);
            };
            if window.maximized {
                return Ok(effects);
            }
            let position_start = window.position;
            registry::focus_window(&mut state.desktop, window_id);
            // A new gesture replaces whatever was active.
            interaction.gesture = Gesture::Dragging(DragGesture {
                window_id,
                pointer_start: pointer,
                position_start,
            });
        }
        ShellAction::UpdateMove { pointer } => {
            ensure_desktop(state)?;
            if let Gesture::Dragging(drag) = &interaction.gesture {
                let position = compute_move(drag.pointer_start, drag.position_start, pointer);
                registry::move_window(&mut state.desktop, drag.window_id, position);
            }
        }
        ShellAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            ensure_desktop(state)?;
            let Some(window) = state.desktop.window(window_id) else {
                return Ok(effects);
            };
            if window.maximized {
                return Ok(effects);
            }
            let (position_start, size_start) = (window.position, window.size);
            registry::focus_window(&mut state.desktop, window_id);
            interaction.gesture = Gesture::Resizing(ResizeGesture {
                window_id,
                edge,
                pointer_start: pointer,
                position_start,
                size_start,
            });
        }
        ShellAction::UpdateResize { pointer } => {
            ensure_desktop(state)?;
            if let Gesture::Resizing(resize) = &interaction.gesture {
                let (position, size) = compute_resize(
                    resize.edge,
                    resize.pointer_start,
                    pointer,
                    resize.position_start,
                    resize.size_start,
                );
                registry::resize_window(&mut state.desktop, resize.window_id, position, size);
            }
        }
        ShellAction::EndGesture => {
            ensure_desktop(state)?;
            interaction.gesture = Gesture::Idle;
        }
    }

    Ok(effects)
}

fn ensure_desktop(state: &ShellState) -> Result<(), ReducerError> {
    if state.system == SystemState::Desktop {
        Ok(())
    } else {
        Err(ReducerError::DesktopNotActive)
    }
}

/// Starts a fresh boot episode. The desktop session and any active gesture are
/// discarded, and the bumped generation invalidates timers armed by earlier
/// episodes.
fn enter_booting(
    state: &mut ShellState,
    interaction: &mut InteractionState,
    effects: &mut Vec<RuntimeEffect>,
) {
    state.system = SystemState::Booting;
    state.boot_generation += 1;
    state.boot_splash_visible = false;
    state.login_error = false;
    state.desktop = DesktopState::default();
    interaction.gesture = Gesture::Idle;
    effects.push(RuntimeEffect::ScheduleBootSequence {
        generation: state.boot_generation,
    });
}

/// One window per app: launching an app whose window exists surfaces that
/// window instead of opening a second one.
fn launch_app(desktop: &mut DesktopState, app_id: AppId) {
    desktop.start_menu_open = false;
    desktop.selected_icon = None;
    if let Some(existing) = desktop.window_for_app(app_id) {
        let id = existing.id;
        registry::focus_window(desktop, id);
        return;
    }
    let Some(descriptor) = apps::descriptor(app_id) else {
        return;
    };
    registry::create_window(desktop, app_id, descriptor.name, descriptor.default_size);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
    use crate::model::{Position, Size};

    fn dispatch(
        state: &mut ShellState,
        interaction: &mut InteractionState,
        action: ShellAction,
    ) -> Vec<RuntimeEffect> {
        reduce_shell(state, interaction, action).expect("action accepted")
    }

    fn saved_identity() -> SessionIdentity {
        SessionIdentity {
            username: "Alice".to_string(),
            password: "p1".to_string(),
            setup_complete: true,
        }
    }

    /// Drives a fresh shell through hydrate, boot, and login onto the desktop.
    fn booted_desktop() -> (ShellState, InteractionState) {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::HydrateIdentity(saved_identity()),
        );
        let effects = dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        let generation = match effects.as_slice() {
            [RuntimeEffect::ScheduleBootSequence { generation }] => *generation,
            other => panic!("unexpected effects: {other:?}"),
        };
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootSplashElapsed { generation },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation },
        );
        assert_eq!(state.system, SystemState::Login);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::SubmitLogin {
                password: "p1".to_string(),
            },
        );
        assert_eq!(state.system, SystemState::Desktop);
        (state, interaction)
    }

    fn launch(state: &mut ShellState, interaction: &mut InteractionState, app_id: AppId) -> WindowId {
        dispatch(state, interaction, ShellAction::LaunchApp { app_id });
        state.desktop.window_for_app(app_id).expect("window").id
    }

    #[test]
    fn first_boot_routes_to_setup() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        let effects = dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleBootSequence { generation: 1 }]
        );
        assert_eq!(state.system, SystemState::Booting);
        assert!(!state.boot_splash_visible);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootSplashElapsed { generation: 1 },
        );
        assert!(state.boot_splash_visible);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation: 1 },
        );
        assert_eq!(state.system, SystemState::Setup);
    }

    #[test]
    fn boot_routes_to_login_when_setup_already_complete() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::HydrateIdentity(saved_identity()),
        );
        dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation: 1 },
        );
        assert_eq!(state.system, SystemState::Login);
    }

    #[test]
    fn stale_boot_ticks_are_discarded() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();

        dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        // A second boot supersedes the first; its timers are now stale.
        dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        assert_eq!(state.boot_generation, 2);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootSplashElapsed { generation: 1 },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation: 1 },
        );
        assert!(!state.boot_splash_visible);
        assert_eq!(state.system, SystemState::Booting);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation: 2 },
        );
        assert_eq!(state.system, SystemState::Setup);
    }

    #[test]
    fn complete_setup_persists_and_lands_on_desktop() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation: 1 },
        );

        let effects = dispatch(
            &mut state,
            &mut interaction,
            ShellAction::CompleteSetup {
                username: "  Alice  ".to_string(),
                password: "p1".to_string(),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistIdentity]);
        assert_eq!(state.system, SystemState::Desktop);
        assert_eq!(state.identity.username, "Alice");
        assert!(state.identity.setup_complete);
    }

    #[test]
    fn blank_setup_username_falls_back_to_default() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation: 1 },
        );

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::CompleteSetup {
                username: "   ".to_string(),
                password: String::new(),
            },
        );
        assert_eq!(state.identity.username, DEFAULT_USERNAME);
    }

    #[test]
    fn login_rejects_wrong_password_until_corrected() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::HydrateIdentity(saved_identity()),
        );
        dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation: 1 },
        );

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::SubmitLogin {
                password: "wrong".to_string(),
            },
        );
        assert_eq!(state.system, SystemState::Login);
        assert!(state.login_error);

        dispatch(&mut state, &mut interaction, ShellAction::LoginInputChanged);
        assert!(!state.login_error);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::SubmitLogin {
                password: "p1".to_string(),
            },
        );
        assert_eq!(state.system, SystemState::Desktop);
    }

    #[test]
    fn launch_opens_one_window_per_app() {
        let (mut state, mut interaction) = booted_desktop();

        let first = launch(&mut state, &mut interaction, AppId::Notepad);
        let z_before = state.desktop.window(first).unwrap().z_index;

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::LaunchApp {
                app_id: AppId::Notepad,
            },
        );
        assert_eq!(state.desktop.windows.len(), 1);
        let record = state.desktop.window(first).unwrap();
        assert_eq!(record.id, first);
        assert!(record.z_index > z_before);
        assert_eq!(state.desktop.focused, Some(first));
    }

    #[test]
    fn launch_restores_minimized_singleton() {
        let (mut state, mut interaction) = booted_desktop();
        let id = launch(&mut state, &mut interaction, AppId::Explorer);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::MinimizeWindow { window_id: id },
        );

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::LaunchApp {
                app_id: AppId::Explorer,
            },
        );
        let record = state.desktop.window(id).unwrap();
        assert!(!record.minimized);
        assert_eq!(state.desktop.focused, Some(id));
    }

    #[test]
    fn launch_closes_the_start_menu() {
        let (mut state, mut interaction) = booted_desktop();
        dispatch(&mut state, &mut interaction, ShellAction::ToggleStartMenu);
        assert!(state.desktop.start_menu_open);

        launch(&mut state, &mut interaction, AppId::Calculator);
        assert!(!state.desktop.start_menu_open);
    }

    #[test]
    fn taskbar_click_cycles_launch_minimize_restore() {
        let (mut state, mut interaction) = booted_desktop();

        // No window yet: launches.
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ActivateFromTaskbar {
                app_id: AppId::Browser,
            },
        );
        let id = state.desktop.window_for_app(AppId::Browser).unwrap().id;
        assert_eq!(state.desktop.focused, Some(id));

        // Focused: minimizes. The start menu closes on every taskbar path.
        dispatch(&mut state, &mut interaction, ShellAction::ToggleStartMenu);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ActivateFromTaskbar {
                app_id: AppId::Browser,
            },
        );
        assert!(state.desktop.window(id).unwrap().minimized);
        assert_eq!(state.desktop.focused, None);
        assert!(!state.desktop.start_menu_open);

        // Minimized: restores and refocuses.
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ActivateFromTaskbar {
                app_id: AppId::Browser,
            },
        );
        assert!(!state.desktop.window(id).unwrap().minimized);
        assert_eq!(state.desktop.focused, Some(id));
    }

    #[test]
    fn taskbar_click_focuses_background_window() {
        let (mut state, mut interaction) = booted_desktop();
        let first = launch(&mut state, &mut interaction, AppId::Notepad);
        let second = launch(&mut state, &mut interaction, AppId::Photos);
        assert_eq!(state.desktop.focused, Some(second));

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ActivateFromTaskbar {
                app_id: AppId::Notepad,
            },
        );
        assert_eq!(state.desktop.focused, Some(first));
        assert_eq!(state.desktop.top_window_id(), Some(first));
    }

    #[test]
    fn drag_moves_window_and_releases_to_idle() {
        let (mut state, mut interaction) = booted_desktop();
        let id = launch(&mut state, &mut interaction, AppId::Notepad);
        let start = state.desktop.window(id).unwrap().position;

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 200, y: 150 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::UpdateMove {
                pointer: PointerPosition { x: 260, y: 120 },
            },
        );
        assert_eq!(
            state.desktop.window(id).unwrap().position,
            Position {
                x: start.x + 60,
                y: start.y - 30,
            }
        );

        dispatch(&mut state, &mut interaction, ShellAction::EndGesture);
        assert_eq!(interaction.gesture, Gesture::Idle);

        // Pointer events after release change nothing.
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::UpdateMove {
                pointer: PointerPosition { x: 900, y: 900 },
            },
        );
        assert_eq!(
            state.desktop.window(id).unwrap().position,
            Position {
                x: start.x + 60,
                y: start.y - 30,
            }
        );
    }

    #[test]
    fn maximized_window_refuses_drag_and_resize() {
        let (mut state, mut interaction) = booted_desktop();
        let id = launch(&mut state, &mut interaction, AppId::Notepad);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::ToggleMaximizeWindow { window_id: id },
        );

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(interaction.gesture, Gesture::Idle);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(interaction.gesture, Gesture::Idle);
    }

    #[test]
    fn beginning_a_gesture_replaces_the_active_one() {
        let (mut state, mut interaction) = booted_desktop();
        let first = launch(&mut state, &mut interaction, AppId::Notepad);
        let second = launch(&mut state, &mut interaction, AppId::Photos);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginMove {
                window_id: first,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginResize {
                window_id: second,
                edge: ResizeEdge::East,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert_eq!(interaction.gesture_window(), Some(second));
        assert!(matches!(interaction.gesture, Gesture::Resizing(_)));
    }

    #[test]
    fn closing_the_dragged_window_cancels_the_gesture() {
        let (mut state, mut interaction) = booted_desktop();
        let id = launch(&mut state, &mut interaction, AppId::Notepad);

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::CloseWindow { window_id: id },
        );
        assert_eq!(interaction.gesture, Gesture::Idle);

        // A trailing pointermove is harmless.
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::UpdateMove {
                pointer: PointerPosition { x: 50, y: 50 },
            },
        );
        assert!(state.desktop.windows.is_empty());
    }

    #[test]
    fn resize_clamps_to_minimums_and_keeps_the_anchored_edge() {
        let (mut state, mut interaction) = booted_desktop();
        let id = launch(&mut state, &mut interaction, AppId::Explorer);
        let (start_position, start_size) = {
            let w = state.desktop.window(id).unwrap();
            (w.position, w.size)
        };

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::NorthWest,
                pointer: PointerPosition { x: 300, y: 300 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::UpdateResize {
                pointer: PointerPosition { x: 300 + 5000, y: 300 + 5000 },
            },
        );

        let record = state.desktop.window(id).unwrap();
        assert_eq!(
            record.size,
            Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }
        );
        assert_eq!(
            record.position.x + record.size.width,
            start_position.x + start_size.width
        );
        assert_eq!(
            record.position.y + record.size.height,
            start_position.y + start_size.height
        );
    }

    #[test]
    fn begin_gesture_on_absent_window_is_a_noop() {
        let (mut state, mut interaction) = booted_desktop();
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginMove {
                window_id: WindowId(404),
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        assert_eq!(interaction.gesture, Gesture::Idle);
        assert_eq!(state.desktop.focused, None);
    }

    #[test]
    fn desktop_actions_outside_desktop_are_rejected() {
        let mut state = ShellState::default();
        let mut interaction = InteractionState::default();
        assert_eq!(state.system, SystemState::Booting);

        let err = reduce_shell(
            &mut state,
            &mut interaction,
            ShellAction::LaunchApp {
                app_id: AppId::Notepad,
            },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::DesktopNotActive);

        let err = reduce_shell(&mut state, &mut interaction, ShellAction::ToggleStartMenu)
            .unwrap_err();
        assert_eq!(err, ReducerError::DesktopNotActive);
    }

    #[test]
    fn sleep_notifies_and_keeps_the_session() {
        let (mut state, mut interaction) = booted_desktop();
        let id = launch(&mut state, &mut interaction, AppId::Notepad);
        dispatch(&mut state, &mut interaction, ShellAction::ToggleStartMenu);

        let effects = dispatch(
            &mut state,
            &mut interaction,
            ShellAction::Power(PowerAction::Sleep),
        );
        assert!(matches!(effects.as_slice(), [RuntimeEffect::Notify { .. }]));
        assert_eq!(state.system, SystemState::Desktop);
        assert!(state.desktop.window(id).is_some());
        assert!(!state.desktop.start_menu_open);
    }

    #[test]
    fn shutdown_ends_the_session_and_gates_desktop_actions() {
        let (mut state, mut interaction) = booted_desktop();
        let id = launch(&mut state, &mut interaction, AppId::Notepad);
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::Power(PowerAction::Shutdown),
        );
        assert_eq!(state.system, SystemState::Shutdown);
        assert_eq!(interaction.gesture, Gesture::Idle);

        let err = reduce_shell(
            &mut state,
            &mut interaction,
            ShellAction::FocusWindow { window_id: id },
        )
        .unwrap_err();
        assert_eq!(err, ReducerError::DesktopNotActive);
    }

    #[test]
    fn shutdown_is_terminal_until_reload() {
        let (mut state, mut interaction) = booted_desktop();
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::Power(PowerAction::Shutdown),
        );
        assert_eq!(state.system, SystemState::Shutdown);

        let effects = dispatch(&mut state, &mut interaction, ShellAction::BeginBoot);
        assert!(effects.is_empty());
        assert_eq!(state.system, SystemState::Shutdown);
        assert_eq!(state.boot_generation, 1);
    }

    #[test]
    fn restart_discards_the_desktop_session() {
        let (mut state, mut interaction) = booted_desktop();
        launch(&mut state, &mut interaction, AppId::Notepad);
        let generation_before = state.boot_generation;

        let effects = dispatch(
            &mut state,
            &mut interaction,
            ShellAction::Power(PowerAction::Restart),
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleBootSequence {
                generation: generation_before + 1,
            }]
        );
        assert_eq!(state.system, SystemState::Booting);
        assert!(state.desktop.windows.is_empty());
        // Identity survives a plain restart.
        assert_eq!(state.identity, saved_identity());
    }

    #[test]
    fn reset_clears_identity_and_returns_to_first_run() {
        let (mut state, mut interaction) = booted_desktop();
        let generation_before = state.boot_generation;

        let effects = dispatch(
            &mut state,
            &mut interaction,
            ShellAction::Power(PowerAction::Reset),
        );
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ClearIdentity,
                RuntimeEffect::ScheduleBootSequence {
                    generation: generation_before + 1,
                },
            ]
        );
        assert_eq!(state.identity, SessionIdentity::default());

        let generation = state.boot_generation;
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::BootCompleteElapsed { generation },
        );
        assert_eq!(state.system, SystemState::Setup);
    }

    #[test]
    fn set_wallpaper_updates_the_url() {
        let (mut state, mut interaction) = booted_desktop();
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::SetWallpaper {
                url: "https://example.com/wallpaper.jpg".to_string(),
            },
        );
        assert_eq!(state.wallpaper_url, "https://example.com/wallpaper.jpg");
    }

    #[test]
    fn icon_selection_is_cleared_by_launch() {
        let (mut state, mut interaction) = booted_desktop();
        dispatch(
            &mut state,
            &mut interaction,
            ShellAction::SelectIcon(Some(AppId::Explorer)),
        );
        assert_eq!(state.desktop.selected_icon, Some(AppId::Explorer));

        launch(&mut state, &mut interaction, AppId::Explorer);
        assert_eq!(state.desktop.selected_icon, None);
    }
}
