//! State model for the desktop shell: session machine state, window records,
//! and transient gesture sessions.

use serde::{Deserialize, Serialize};

use platform_host::SessionIdentity;

/// First z-index handed out by the allocator. Layers below this value are
/// reserved for desktop icons and the wallpaper.
pub const INITIAL_Z_INDEX: u32 = 10;

/// Default wallpaper shown before the user picks another one in Settings.
pub const DEFAULT_WALLPAPER_URL: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2564&auto=format&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable identifier for one window instance. Serials are never reused, so a
/// relaunched app gets a fresh id.
pub struct WindowId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identity of an installed application.
pub enum AppId {
    Copilot,
    Explorer,
    Browser,
    Settings,
    Notepad,
    Calculator,
    Photos,
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Top-left window position in desktop layout coordinates.
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window extent in layout units.
pub struct Size {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer location in viewport coordinates.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Edge or corner grabbed during a resize gesture.
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    /// Whether this edge moves the top edge (and therefore the origin y).
    pub fn touches_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    /// Whether this edge grows the window downward.
    pub fn touches_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    /// Whether this edge grows the window rightward.
    pub fn touches_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// Whether this edge moves the left edge (and therefore the origin x).
    pub fn touches_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One open window instance.
pub struct WindowRecord {
    /// Unique instance id, stable for the record's lifetime.
    pub id: WindowId,
    /// Which app this window hosts. Normal flow keeps at most one record per
    /// app id (enforced by the launch path, not the registry).
    pub app_id: AppId,
    /// Display title, fixed at creation from the app descriptor.
    pub title: String,
    /// True from creation; flipped just before removal so consumers can
    /// observe a closing window. Registry membership is the canonical
    /// existence check.
    pub is_open: bool,
    /// Hidden from rendering when true.
    pub minimized: bool,
    /// Maximized rendering is computed from the viewport; `position`/`size`
    /// are preserved underneath for restore.
    pub maximized: bool,
    /// Stacking order; strictly increases on every create/focus.
    pub z_index: u32,
    pub position: Position,
    pub size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level system state. Exactly one is active and drives which screen the
/// shell renders.
pub enum SystemState {
    Booting,
    Setup,
    Login,
    Desktop,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Power action raised from the start menu.
pub enum PowerAction {
    Sleep,
    Shutdown,
    Restart,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Window registry and desktop-surface state. Exists only while the system is
/// in [`SystemState::Desktop`]; re-entering boot replaces it wholesale.
pub struct DesktopState {
    /// Open windows in insertion order.
    pub windows: Vec<WindowRecord>,
    /// Serial for the next [`WindowId`].
    pub next_window_serial: u64,
    /// Monotonic z-index allocator; never decremented, values never reused.
    pub next_z_index: u32,
    /// The window that currently has focus, if any.
    pub focused: Option<WindowId>,
    /// Whether the start menu overlay is open.
    pub start_menu_open: bool,
    /// Desktop icon selected by a single click, if any.
    pub selected_icon: Option<AppId>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_window_serial: 1,
            next_z_index: INITIAL_Z_INDEX,
            focused: None,
            start_menu_open: false,
            selected_icon: None,
        }
    }
}

impl DesktopState {
    /// Looks up a window record by id.
    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Returns the single window hosting `app_id`, if one is open.
    pub fn window_for_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    /// The non-minimized window with the highest z-index, i.e. the one
    /// rendered on top. In normal operation this always agrees with
    /// [`DesktopState::focused`].
    pub fn top_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The whole shell state: session machine plus the desktop session it gates.
pub struct ShellState {
    /// Current top-level state.
    pub system: SystemState,
    /// Boot episode counter. Timer ticks carry the generation they were
    /// scheduled under and are discarded when it no longer matches.
    pub boot_generation: u64,
    /// Whether the boot splash text/spinner has faded in (visual only).
    pub boot_splash_visible: bool,
    /// The persisted account, hydrated from storage at provider mount.
    pub identity: SessionIdentity,
    /// Set after a failed login attempt; cleared on the next keystroke.
    pub login_error: bool,
    /// Current wallpaper image, passed through to apps.
    pub wallpaper_url: String,
    /// Window registry and desktop surface.
    pub desktop: DesktopState,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            system: SystemState::Booting,
            boot_generation: 0,
            boot_splash_visible: false,
            identity: SessionIdentity::default(),
            login_error: false,
            wallpaper_url: DEFAULT_WALLPAPER_URL.to_string(),
            desktop: DesktopState::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Snapshot captured when a drag begins.
pub struct DragGesture {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Snapshot captured when a resize begins.
pub struct ResizeGesture {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub position_start: Position,
    pub size_start: Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// The single active pointer gesture. One global slot: beginning a new
/// gesture replaces whatever was active, and release always returns to
/// [`Gesture::Idle`].
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragGesture),
    Resizing(ResizeGesture),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer-interaction state. Never serialized; fully reset between
/// gestures.
pub struct InteractionState {
    pub gesture: Gesture,
}

impl InteractionState {
    /// Id of the window targeted by the active gesture, if any.
    pub fn gesture_window(&self) -> Option<WindowId> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging(drag) => Some(drag.window_id),
            Gesture::Resizing(resize) => Some(resize.window_id),
        }
    }
}
