use raylib::prelude::*;
use tracing::{debug, info};

use crate::constants::*;
use crate::engine::{Engine, Mode, Surface};
use crate::error::DisplayError;
use crate::particles::scene::SceneState;
use crate::particles::shader::Backdrop;

pub struct ParticleEngine {
    scene: SceneState,
    backdrop: Option<Backdrop>,
}

impl ParticleEngine {
    pub fn new(surface: Surface, seed: Option<u64>) -> Self {
        Self {
            scene: SceneState::new(surface, seed),
            backdrop: None,
        }
    }
}

impl Engine for ParticleEngine {
    fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, surface: Surface) -> Result<(), DisplayError> {
        let mut backdrop = Backdrop::load(rl, thread);
        self.scene.resize(surface);
        backdrop.set_resolution(self.scene.resolution);
        backdrop.set_time(self.scene.shader_time);
        self.backdrop = Some(backdrop);

        info!(
            width = surface.width,
            height = surface.height,
            particles = self.scene.ambient.len(),
            "particle background mounted"
        );
        Ok(())
    }

    fn pointer_moved(&mut self, pointer: Vector2, surface: Surface) {
        if let Some(normalized) = surface.normalize(pointer) {
            self.scene.set_pointer(normalized);
        }
    }

    fn resized(&mut self, surface: Surface) {
        self.scene.resize(surface);
        if let Some(backdrop) = self.backdrop.as_mut() {
            backdrop.set_resolution(self.scene.resolution);
        }
        debug!(width = surface.width, height = surface.height, "particle background resized");
    }

    fn update(&mut self, dt: f32) {
        self.scene.update(dt);
        if let Some(backdrop) = self.backdrop.as_mut() {
            backdrop.set_time(self.scene.shader_time);
        }
    }

    fn draw(&mut self, d: &mut RaylibDrawHandle) {
        // --- Backdrop ---
        let surface = self.scene.surface;
        match self.backdrop.as_mut() {
            Some(backdrop) => backdrop.draw(d, surface.width, surface.height),
            None => d.clear_background(Color::BLACK),
        }

        // --- Points ---
        let mut d3 = d.begin_mode3D(self.scene.camera3d());
        let mut b = d3.begin_blend_mode(BlendMode::BLEND_ADDITIVE);

        for (point, color) in self.scene.ambient_points() {
            b.draw_point3D(point, color);
        }

        for trail in &self.scene.dust_trails {
            for point in trail.world_points() {
                b.draw_sphere(point, DUST_POINT_RADIUS, trail.color);
            }
        }
    }

    fn teardown(&mut self) {
        self.scene.teardown();
        info!(clock = self.scene.clock(), "particle background torn down");
    }

    fn mode(&self) -> Mode {
        Mode::Particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl ParticleEngine {
        fn scene(&self) -> &SceneState {
            &self.scene
        }

        fn surface(&self) -> Surface {
            self.scene.surface
        }
    }

    #[test]
    fn pointer_on_empty_surface_is_ignored() {
        let mut engine = ParticleEngine::new(Surface::new(1280, 720), Some(9));
        engine.pointer_moved(Vector2::new(100.0, 100.0), Surface::new(0, 0));

        let target = engine.scene().camera_target;
        assert!(target.x.is_finite() && target.y.is_finite());
        assert_eq!((target.x, target.y), (0.0, 0.0));
    }

    #[test]
    fn resize_before_mount_still_tracks_the_viewport() {
        let mut engine = ParticleEngine::new(Surface::new(1280, 720), Some(9));
        engine.resized(Surface::new(1024, 768));

        assert_eq!(engine.surface(), Surface::new(1024, 768));
        assert_eq!((engine.scene().resolution.x, engine.scene().resolution.y), (1024.0, 768.0));
    }

    #[test]
    fn teardown_stops_spawning() {
        let mut engine = ParticleEngine::new(Surface::new(1280, 720), Some(9));
        engine.update(1.0 / 60.0);
        engine.teardown();

        assert!(!engine.scene().is_spawning());
        assert_eq!(engine.mode(), Mode::Particles);
    }

    #[test]
    fn draw_camera_tracks_the_pointer() {
        let surface = Surface::new(1280, 720);
        let mut engine = ParticleEngine::new(surface, Some(9));
        let home = engine.scene().camera3d().position;

        engine.pointer_moved(Vector2::new(1280.0, 0.0), surface);
        engine.update(1.0 / 60.0);

        let camera = engine.scene().camera3d();
        assert!(camera.position.x > home.x && camera.position.y > home.y);
        assert_eq!(camera.target, Vector3::zero());
    }
}
