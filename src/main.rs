use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod constants;
mod countdown;
mod display;
mod engine;
mod error;
mod overlay;
mod parallax;
mod particles;
mod schedule;
mod texture_loader;

use crate::config::Config;
use crate::display::Display;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = Config::parse();
    let surface = config.surface();
    info!(
        event = config.event,
        target = %config.target,
        mode = ?config.mode,
        "starting countdown display"
    );

    let (mut rl, thread) = raylib::init()
        .size(surface.width, surface.height)
        .title(&format!("{} countdown", config.event))
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut display = Display::mount(&mut rl, &thread, config).context("failed to mount the display")?;

    // --- Main Loop ---
    // Ends with the display, so no frame runs against released resources.
    while !rl.window_should_close() && display.is_mounted() {
        display.frame(&mut rl, &thread);
    }

    display.unmount();
    Ok(())
}
