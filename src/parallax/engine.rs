use std::path::PathBuf;
use raylib::prelude::*;
use tracing::{info, warn};

use crate::constants::*;
use crate::engine::{Engine, Mode, Surface};
use crate::error::DisplayError;
use crate::parallax::layout::{background_offset, first_tile_origin, percent_to_pixels};
use crate::texture_loader::load_texture_with_exif_rotation;

pub struct ParallaxEngine {
    image_path: Option<PathBuf>,
    tile: Option<Texture2D>,
    surface: Surface,
    /// Background position in percent
    offset: Vector2,
}

impl ParallaxEngine {
    pub fn new(image_path: Option<PathBuf>, surface: Surface) -> Self {
        Self {
            image_path,
            tile: None,
            surface,
            offset: Vector2::new(0.0, 0.0),
        }
    }

    // Checkered fallback when no image is configured or it fails to load
    fn generated_tile(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Texture2D, DisplayError> {
        let image = Image::gen_image_checked(
            PARALLAX_TILE_SIZE,
            PARALLAX_TILE_SIZE,
            PARALLAX_TILE_SIZE / 8,
            PARALLAX_TILE_SIZE / 8,
            Color::new(14, 16, 32, 255),
            Color::new(22, 26, 48, 255),
        );
        rl.load_texture_from_image(thread, &image)
            .map_err(|e| DisplayError::Texture { message: e.to_string() })
    }
}

impl Engine for ParallaxEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, surface: Surface) -> Result<(), DisplayError> {
        self.surface = surface;

        let tile = match &self.image_path {
            Some(path) => match load_texture_with_exif_rotation(rl, thread, path) {
                Ok(texture) => texture,
                Err(e) => {
                    warn!(error = %e, "background image unavailable, using generated tile");
                    Self::generated_tile(rl, thread)?
                }
            },
            None => Self::generated_tile(rl, thread)?,
        };

        info!(
            tile_width = tile.width(),
            tile_height = tile.height(),
            "parallax background mounted"
        );
        self.tile = Some(tile);
        Ok(())
    }

    fn pointer_moved(&mut self, pointer: Vector2, surface: Surface) {
        if let Some(offset) = background_offset(pointer, surface) {
            self.offset = offset;
        }
    }

    fn resized(&mut self, surface: Surface) {
        self.surface = surface;
    }

    // The position follows the pointer directly; nothing animates between events.
    fn update(&mut self, _dt: f32) {}

    fn draw(&mut self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);

        let Some(tile) = self.tile.as_ref() else {
            return;
        };
        let (tile_w, tile_h) = (tile.width(), tile.height());
        if tile_w <= 0 || tile_h <= 0 {
            return;
        }

        // Pointer offset in percent -> pixel offset -> first visible tile
        let start_x = first_tile_origin(percent_to_pixels(self.offset.x, self.surface.width, tile_w), tile_w);
        let start_y = first_tile_origin(percent_to_pixels(self.offset.y, self.surface.height, tile_h), tile_h);

        // Repeat in both directions until the surface is covered
        let mut y = start_y;
        while y < self.surface.height as f32 {
            let mut x = start_x;
            while x < self.surface.width as f32 {
                d.draw_texture_v(tile, Vector2::new(x, y), Color::WHITE);
                x += tile_w as f32;
            }
            y += tile_h as f32;
        }
    }

    fn teardown(&mut self) {
        info!("parallax background torn down");
    }

    fn mode(&self) -> Mode {
        Mode::Parallax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl ParallaxEngine {
        fn offset(&self) -> Vector2 {
            self.offset
        }
    }

    #[test]
    fn pointer_sets_offset_directly() {
        let surface = Surface::new(800, 400);
        let mut engine = ParallaxEngine::new(None, surface);
        engine.pointer_moved(Vector2::new(400.0, 100.0), surface);

        assert_eq!((engine.offset().x, engine.offset().y), (-1.0, -0.5));
    }

    #[test]
    fn zero_surface_keeps_previous_offset() {
        let surface = Surface::new(800, 400);
        let mut engine = ParallaxEngine::new(None, surface);
        engine.pointer_moved(Vector2::new(800.0, 400.0), surface);
        engine.pointer_moved(Vector2::new(10.0, 10.0), Surface::new(0, 0));

        let offset = engine.offset();
        assert!(offset.x.is_finite() && offset.y.is_finite());
        assert_eq!((offset.x, offset.y), (-2.0, -2.0));
        assert_eq!(engine.mode(), Mode::Parallax);
    }
}
