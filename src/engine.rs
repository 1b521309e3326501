use clap::ValueEnum;
use raylib::prelude::*;

use crate::error::DisplayError;

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub width: i32,
    pub height: i32,
}

impl Surface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Maps a pointer position to [-1, 1] on each axis, y pointing up.
    /// A zero-sized surface has no meaningful mapping and yields `None`.
    pub fn normalize(&self, pointer: Vector2) -> Option<Vector2> {
        if self.is_empty() {
            return None;
        }
        Some(Vector2::new(
            (pointer.x / self.width as f32) * 2.0 - 1.0,
            -((pointer.y / self.height as f32) * 2.0 - 1.0),
        ))
    }
}

/// Which background the display renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Shader backdrop, star field and drifting dust trails
    #[default]
    Particles,
    /// Tiled image shifted with the pointer
    Parallax,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Particles => Mode::Parallax,
            Mode::Parallax => Mode::Particles,
        }
    }
}

/// A full-viewport background owned by the display between mount and unmount.
pub trait Engine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, surface: Surface) -> Result<(), DisplayError>;
    /// Records the latest pointer position; applied by the next `update`, never immediately.
    fn pointer_moved(&mut self, pointer: Vector2, surface: Surface);
    fn resized(&mut self, surface: Surface);
    fn update(&mut self, dt: f32);
    fn draw(&mut self, d: &mut RaylibDrawHandle);
    /// Cancels everything the engine scheduled. GPU resources go with the engine on drop.
    fn teardown(&mut self);
    fn mode(&self) -> Mode;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_corners_and_center() {
        let surface = Surface::new(800, 600);

        let top_left = surface.normalize(Vector2::new(0.0, 0.0)).unwrap();
        assert_eq!((top_left.x, top_left.y), (-1.0, 1.0));

        let center = surface.normalize(Vector2::new(400.0, 300.0)).unwrap();
        assert_eq!((center.x, center.y), (0.0, 0.0));

        let bottom_right = surface.normalize(Vector2::new(800.0, 600.0)).unwrap();
        assert_eq!((bottom_right.x, bottom_right.y), (1.0, -1.0));
    }

    #[test]
    fn zero_sized_surface_does_not_normalize() {
        assert!(Surface::new(0, 600).normalize(Vector2::new(10.0, 10.0)).is_none());
        assert!(Surface::new(800, 0).normalize(Vector2::new(10.0, 10.0)).is_none());
        assert!(Surface::new(-5, 10).is_empty());
    }

    #[test]
    fn mode_toggles_between_variants() {
        assert_eq!(Mode::default(), Mode::Particles);
        assert_eq!(Mode::Particles.toggled(), Mode::Parallax);
        assert_eq!(Mode::Parallax.toggled(), Mode::Particles);
    }
}
