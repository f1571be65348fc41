//! Window registry helpers: creation, focus, stacking, and removal over
//! [`DesktopState`].
//!
//! Z-indices come from a monotonic allocator and are never renumbered or
//! reused; the most recently created or focused window therefore always owns
//! the highest value. Operations addressed to an absent window id are silent
//! no-ops so that events queued just before a close stay harmless.

use crate::model::{AppId, DesktopState, Position, Size, WindowId, WindowRecord};

/// Horizontal/vertical stagger applied per already-open window so freshly
/// launched windows cascade instead of stacking exactly.
const CASCADE_STEP: i32 = 30;
const CASCADE_ORIGIN_X: i32 = 100;
const CASCADE_ORIGIN_Y: i32 = 80;

fn alloc_z_index(state: &mut DesktopState) -> u32 {
    let z = state.next_z_index;
    state.next_z_index += 1;
    z
}

/// Creates a window for `app_id`, assigns it the next z-index, and focuses it.
pub fn create_window(
    state: &mut DesktopState,
    app_id: AppId,
    title: &str,
    default_size: Size,
) -> WindowId {
    let id = WindowId(state.next_window_serial);
    state.next_window_serial += 1;

    let open_count = state.windows.len() as i32;
    let record = WindowRecord {
        id,
        app_id,
        title: title.to_string(),
        is_open: true,
        minimized: false,
        maximized: false,
        z_index: alloc_z_index(state),
        position: Position {
            x: CASCADE_ORIGIN_X + open_count * CASCADE_STEP,
            y: CASCADE_ORIGIN_Y + open_count * CASCADE_STEP,
        },
        size: default_size,
    };
    state.windows.push(record);
    state.focused = Some(id);
    id
}

/// Raises and focuses `id`, clearing any minimized state.
pub fn focus_window(state: &mut DesktopState, id: WindowId) {
    if !state.windows.iter().any(|w| w.id == id) {
        return;
    }
    let z = alloc_z_index(state);
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == id) {
        window.minimized = false;
        window.z_index = z;
    }
    state.focused = Some(id);
}

/// Hides `id` from rendering; drops focus if it was the focused window.
pub fn minimize_window(state: &mut DesktopState, id: WindowId) {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == id) else {
        return;
    };
    window.minimized = true;
    if state.focused == Some(id) {
        state.focused = None;
    }
}

/// Toggles the maximized flag and brings the window to the front. The stored
/// rect is untouched; maximized rendering is computed from the viewport.
pub fn toggle_maximize_window(state: &mut DesktopState, id: WindowId) {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == id) else {
        return;
    };
    window.maximized = !window.maximized;
    focus_window(state, id);
}

/// Replaces the stored position. No focus side effect: the mouse-down that
/// started the drag already focused the window.
pub fn move_window(state: &mut DesktopState, id: WindowId, position: Position) {
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == id) {
        window.position = position;
    }
}

/// Replaces position and size together (resizes from north/west edges shift
/// the origin as well).
pub fn resize_window(state: &mut DesktopState, id: WindowId, position: Position, size: Size) {
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == id) {
        window.position = position;
        window.size = size;
    }
}

/// Removes `id` from the registry entirely; clears focus if it was focused.
pub fn close_window(state: &mut DesktopState, id: WindowId) {
    if let Some(window) = state.windows.iter_mut().find(|w| w.id == id) {
        window.is_open = false;
    }
    state.windows.retain(|w| w.id != id);
    if state.focused == Some(id) {
        state.focused = None;
    }
}
