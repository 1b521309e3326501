//! The landing display: countdown, overlay and one background engine.
//!
//! [`Display::mount`] acquires the countdown timer, the pointer and resize
//! listeners and the background's GPU resources. [`Display::unmount`]
//! releases all of them once; dropping a mounted display unmounts it.

use chrono::Utc;
use raylib::prelude::*;
use tracing::{info, warn};

use crate::config::Config;
use crate::countdown::{Countdown, TargetMoment};
use crate::engine::{Engine, Mode, Surface};
use crate::error::DisplayError;
use crate::overlay::Overlay;
use crate::parallax::engine::ParallaxEngine;
use crate::particles::engine::ParticleEngine;

/// Pointer and viewport input, polled once per frame while attached.
#[derive(Debug, Default)]
struct Listeners {
    attached: bool,
    last_pointer: Option<Vector2>,
}

impl Listeners {
    /// Returns the pointer position when it moved since the last poll.
    fn pointer_moved(&mut self, pointer: Vector2) -> Option<Vector2> {
        if !self.attached {
            return None;
        }
        let moved = self
            .last_pointer
            .is_none_or(|last| last.x != pointer.x || last.y != pointer.y);
        self.last_pointer = Some(pointer);
        moved.then_some(pointer)
    }
}

pub struct Display {
    config: Config,
    countdown: Countdown,
    background: Box<dyn Engine>,
    surface: Surface,
    listeners: Listeners,
    mounted: bool,
}

// --- Helpers ---
fn build_engine(mode: Mode, config: &Config, surface: Surface) -> Box<dyn Engine> {
    match mode {
        Mode::Particles => Box::new(ParticleEngine::new(surface, config.seed)),
        Mode::Parallax => Box::new(ParallaxEngine::new(config.background.clone(), surface)),
    }
}

fn screen_surface(rl: &RaylibHandle) -> Surface {
    Surface::new(rl.get_screen_width(), rl.get_screen_height())
}

impl Display {
    pub fn mount(rl: &mut RaylibHandle, thread: &RaylibThread, config: Config) -> Result<Self, DisplayError> {
        let surface = screen_surface(rl);
        let countdown = Countdown::new(TargetMoment::new(config.target), Utc::now());

        let mut background = build_engine(config.mode, &config, surface);
        background.initialize(rl, thread, surface)?;

        info!(
            mode = ?config.mode,
            target = %config.target,
            seconds_left = countdown.remaining().total_seconds(),
            "display mounted"
        );

        Ok(Self {
            config,
            countdown,
            background,
            surface,
            listeners: Listeners { attached: true, last_pointer: None },
            mounted: true,
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// One animation frame: poll input, tick the countdown, update and draw.
    pub fn frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        if !self.mounted {
            return;
        }
        let dt = rl.get_frame_time();

        // 1. Input
        if self.listeners.attached && rl.is_window_resized() {
            self.surface = screen_surface(rl);
            self.background.resized(self.surface);
            info!(width = self.surface.width, height = self.surface.height, "viewport resized");
        }
        if let Some(pointer) = self.listeners.pointer_moved(rl.get_mouse_position()) {
            self.background.pointer_moved(pointer, self.surface);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            if let Err(e) = self.switch_mode(rl, thread) {
                warn!(error = %e, "could not switch background, keeping the current one");
            }
        }

        // 2. Update countdown and background
        self.countdown.advance(dt, Utc::now());
        self.background.update(dt);

        // 3. Draw: background first, text on top
        let overlay = Overlay::new(self.countdown.headline(&self.config.event), self.countdown.text());
        let mut d = rl.begin_drawing(thread);
        self.background.draw(&mut d);
        overlay.draw(&mut d, self.surface);
    }

    /// Replaces the background with the other variant. The new engine is
    /// initialized first, so a failure leaves the current one untouched.
    pub fn switch_mode(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Mode, DisplayError> {
        let next = self.background.mode().toggled();
        let mut engine = build_engine(next, &self.config, self.surface);
        engine.initialize(rl, thread, self.surface)?;

        self.background.teardown();
        self.background = engine;
        if let Some(pointer) = self.listeners.last_pointer {
            self.background.pointer_moved(pointer, self.surface);
        }

        info!(mode = ?next, "background switched");
        Ok(next)
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.countdown.cancel();
        self.listeners = Listeners::default(); // Detach pointer and resize polling
        self.background.teardown();
        self.mounted = false;
        info!("display unmounted");
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_listeners_report_nothing() {
        let mut listeners = Listeners::default();
        assert!(listeners.pointer_moved(Vector2::new(1.0, 2.0)).is_none());
        assert!(listeners.last_pointer.is_none());
    }

    #[test]
    fn pointer_is_reported_only_when_it_moves() {
        let mut listeners = Listeners { attached: true, last_pointer: None };

        assert!(listeners.pointer_moved(Vector2::new(10.0, 20.0)).is_some());
        assert!(listeners.pointer_moved(Vector2::new(10.0, 20.0)).is_none());
        assert!(listeners.pointer_moved(Vector2::new(11.0, 20.0)).is_some());
    }

    #[test]
    fn each_mode_builds_its_own_engine() {
        let config = <Config as clap::Parser>::try_parse_from(["countdown", "--target", "2025-07-11T17:00:00Z", "--seed", "1"]);
        let Ok(config) = config else {
            panic!("default arguments should parse");
        };
        let surface = Surface::new(640, 480);

        assert_eq!(build_engine(Mode::Particles, &config, surface).mode(), Mode::Particles);
        assert_eq!(build_engine(Mode::Parallax, &config, surface).mode(), Mode::Parallax);
    }
}
