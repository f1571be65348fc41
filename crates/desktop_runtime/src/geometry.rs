//! Pure drag/resize math shared by the gesture handling in the reducer.

use crate::model::{PointerPosition, Position, ResizeEdge, Size};

/// Minimum allowed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

/// Computes the window position for an in-progress drag.
///
/// The new position is the start position offset by the pointer delta. There
/// is deliberately no clamp to the viewport: windows may be dragged partially
/// or fully off-screen.
pub fn compute_move(
    pointer_start: PointerPosition,
    position_start: Position,
    pointer: PointerPosition,
) -> Position {
    Position {
        x: position_start.x + (pointer.x - pointer_start.x),
        y: position_start.y + (pointer.y - pointer_start.y),
    }
}

/// Computes position and size for an in-progress resize.
///
/// Growing edges (east/south) add the pointer delta to the size directly.
/// Shrinking-from-origin edges (west/north) clamp the candidate size first
/// and then shift the origin by the amount the size actually changed, which
/// keeps the opposite edge fixed in screen space even when the clamp engages.
/// Corner edges combine both axes independently.
pub fn compute_resize(
    edge: ResizeEdge,
    pointer_start: PointerPosition,
    pointer: PointerPosition,
    position_start: Position,
    size_start: Size,
) -> (Position, Size) {
    let dx = pointer.x - pointer_start.x;
    let dy = pointer.y - pointer_start.y;

    let mut position = position_start;
    let mut size = size_start;

    if edge.touches_east() {
        size.width = (size_start.width + dx).max(MIN_WINDOW_WIDTH);
    }
    if edge.touches_west() {
        let width = (size_start.width - dx).max(MIN_WINDOW_WIDTH);
        position.x = position_start.x + (size_start.width - width);
        size.width = width;
    }
    if edge.touches_south() {
        size.height = (size_start.height + dy).max(MIN_WINDOW_HEIGHT);
    }
    if edge.touches_north() {
        let height = (size_start.height - dy).max(MIN_WINDOW_HEIGHT);
        position.y = position_start.y + (size_start.height - height);
        size.height = height;
    }

    (position, size)
}
