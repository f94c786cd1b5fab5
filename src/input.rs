use glam::Vec2;
use particle_core::interactions::ElementRect;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn is_inside(rect: ElementRect, client: Vec2) -> bool {
    let local = rect.local(client);
    local.x >= 0.0 && local.y >= 0.0 && local.x <= rect.width && local.y <= rect.height
}

/// Map client coordinates to canvas backing-store pixels. A collapsed
/// rect maps 1:1 from its top-left corner.
#[inline]
pub fn client_to_canvas(client: Vec2, rect: ElementRect, canvas_px: Vec2) -> Vec2 {
    let local = rect.local(client);
    if rect.is_empty() {
        return local;
    }
    Vec2::new(
        local.x / rect.width * canvas_px.x,
        local.y / rect.height * canvas_px.y,
    )
}

/// Canvas position for a pointer event, or `None` when it falls outside
/// the canvas and should be treated as the pointer leaving.
#[inline]
pub fn pointer_on_canvas(client: Vec2, rect: ElementRect, canvas_px: Vec2) -> Option<Vec2> {
    is_inside(rect, client).then(|| client_to_canvas(client, rect, canvas_px))
}
