//! Simulation side of the particle background.
//!
//! Nothing here touches the GPU: the engine reads positions out of
//! [`SceneState`] every frame and draws them. Keeping the state plain makes
//! the easing and eviction rules checkable without a window.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::*;
use tracing::trace;

use crate::constants::*;
use crate::engine::Surface;
use crate::schedule::Interval;

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vector3,
    pub color: Color,
}

/// A short-lived cluster drifting toward the camera.
#[derive(Debug, Clone)]
pub struct DustTrail {
    pub position: Vector3,
    pub velocity: Vector3,
    pub spawned_at: f32,
    /// Offsets from `position`
    pub points: Vec<Vector3>,
    pub color: Color,
}

impl DustTrail {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, now: f32) -> Self {
        let position = Vector3::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-6.0..6.0),
            rng.random_range(-30.0..-10.0),
        );
        let velocity = Vector3::new(
            rng.random_range(-0.02..0.02),
            rng.random_range(-0.02..0.02),
            rng.random_range(0.15..0.45),
        );

        // Stretched along the direction of travel so the cluster reads as a streak
        let points = (0..DUST_POINTS)
            .map(|_| {
                Vector3::new(
                    rng.random_range(-0.3..0.3),
                    rng.random_range(-0.3..0.3),
                    rng.random_range(-2.5..0.0),
                )
            })
            .collect();

        let shade = rng.random_range(180..=255);
        Self {
            position,
            velocity,
            spawned_at: now,
            points,
            color: Color::new(shade, shade, rng.random_range(140..=220), 200),
        }
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    pub fn is_spent(&self, camera: Vector3) -> bool {
        self.position.z > DUST_DEPTH_THRESHOLD || self.position.distance_to(camera) > DUST_MAX_DISTANCE
    }

    pub fn world_points(&self) -> impl Iterator<Item = Vector3> + '_ {
        self.points.iter().map(move |offset| self.position + *offset)
    }
}

pub struct SceneState {
    rng: StdRng,

    // --- Camera ---
    pub camera: Vector3,
    pub camera_target: Vector3,

    // --- Ambient cloud ---
    pub ambient: Vec<Particle>,
    pub ambient_rotation: Vector3, // radians, z unused

    // --- Dust trails ---
    pub dust_trails: Vec<DustTrail>,
    spawner: Interval,

    // --- Backdrop ---
    pub surface: Surface,
    pub resolution: Vector2,
    pub shader_time: f32,
    clock: f32, // seconds since mount
}

impl SceneState {
    pub fn new(surface: Surface, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let ambient = (0..AMBIENT_PARTICLES)
            .map(|_| Particle {
                position: Vector3::new(
                    rng.random_range(-AMBIENT_HALF_EXTENT..AMBIENT_HALF_EXTENT),
                    rng.random_range(-AMBIENT_HALF_EXTENT..AMBIENT_HALF_EXTENT),
                    rng.random_range(-AMBIENT_HALF_EXTENT..AMBIENT_HALF_EXTENT),
                ),
                color: Color::new(
                    rng.random_range(64..=255),
                    rng.random_range(64..=255),
                    rng.random_range(64..=255),
                    255,
                ),
            })
            .collect();

        let spawner = Interval::jittered(DUST_SPAWN_MIN, DUST_SPAWN_MAX, StdRng::seed_from_u64(rng.random()));
        let home = Vector3::new(0.0, 0.0, CAMERA_BASE_Z);

        Self {
            rng,
            camera: home,
            camera_target: home,
            ambient,
            ambient_rotation: Vector3::zero(),
            dust_trails: Vec::new(),
            spawner,
            surface,
            resolution: Vector2::new(surface.width as f32, surface.height as f32),
            shader_time: 0.0,
            clock: 0.0,
        }
    }

    /// Takes a pointer already normalized to [-1, 1].
    pub fn set_pointer(&mut self, normalized: Vector2) {
        self.camera_target = Vector3::new(
            normalized.x * POINTER_SENSITIVITY,
            normalized.y * POINTER_SENSITIVITY,
            CAMERA_BASE_Z,
        );
    }

    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        self.resolution = Vector2::new(surface.width as f32, surface.height as f32);
    }

    pub fn update(&mut self, dt: f32) {
        self.clock += dt;

        // 1. Ambient drift
        self.ambient_rotation.x += AMBIENT_SPIN_X;
        self.ambient_rotation.y += AMBIENT_SPIN_Y;

        // 2. Camera easing
        self.camera = self.camera.lerp(self.camera_target, CAMERA_EASING);
        self.camera.z = self.camera.z.clamp(CAMERA_MIN_Z, CAMERA_MAX_Z);

        // 3. Dust trails
        let spawns = self.spawner.advance(dt);
        for _ in 0..spawns {
            let trail = DustTrail::spawn(&mut self.rng, self.clock);
            trace!(
                z = trail.position.z,
                next_in = self.spawner.remaining(),
                live = self.dust_trails.len() + 1,
                "dust trail spawned"
            );
            self.dust_trails.push(trail);
        }
        self.advance_dust_trails();

        // 4. Backdrop time
        self.shader_time += SHADER_TIME_STEP;
    }

    fn advance_dust_trails(&mut self) {
        let (camera, clock) = (self.camera, self.clock);
        self.dust_trails.retain_mut(|trail| {
            trail.advance();
            let spent = trail.is_spent(camera);
            if spent {
                trace!(age = clock - trail.spawned_at, z = trail.position.z, "dust trail evicted");
            }
            !spent
        });
    }

    pub fn ambient_points(&self) -> impl Iterator<Item = (Vector3, Color)> + '_ {
        let rotation = Matrix::rotate_xyz(self.ambient_rotation);
        self.ambient
            .iter()
            .map(move |p| (p.position.transform_with(rotation), p.color))
    }

    /// Perspective camera at the eased position, always looking at the origin.
    pub fn camera3d(&self) -> Camera3D {
        Camera3D::perspective(self.camera, Vector3::zero(), Vector3::up(), CAMERA_FOVY)
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn teardown(&mut self) {
        self.spawner.cancel();
        self.dust_trails.clear();
    }
}
