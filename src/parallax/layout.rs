use raylib::prelude::*;

use crate::constants::*;
use crate::engine::Surface;

/// Background position in percent for a pointer at `pointer`.
///
/// Mirrors `background-position: x% y%` with a factor of -2: the tile slides
/// against the pointer by up to two percent. Returns `None` for a zero-sized
/// surface so the caller keeps its previous offset.
pub fn background_offset(pointer: Vector2, surface: Surface) -> Option<Vector2> {
    if surface.is_empty() {
        return None;
    }
    Some(Vector2::new(
        (pointer.x / surface.width as f32) * PARALLAX_FACTOR,
        (pointer.y / surface.height as f32) * PARALLAX_FACTOR,
    ))
}

/// Pixel shift for a percentage position, as CSS computes it:
/// `(container - image) * percent / 100`.
pub fn percent_to_pixels(percent: f32, container: i32, image: i32) -> f32 {
    (container - image) as f32 * percent / 100.0
}

/// Left/top edge of the first tile so that tiles cover the surface from its origin.
pub fn first_tile_origin(shift: f32, tile: i32) -> f32 {
    if tile <= 0 {
        return 0.0;
    }
    let tile = tile as f32;
    let origin = shift.rem_euclid(tile);
    if origin > 0.0 { origin - tile } else { origin }
}
