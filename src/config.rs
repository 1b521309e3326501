use std::path::PathBuf;
use chrono::{DateTime, Utc};
use clap::Parser;

use crate::constants::*;
use crate::engine::{Mode, Surface};

/// Full-screen countdown to the next event.
#[derive(Debug, Clone, Parser)]
#[command(name = "countdown", version, about)]
pub struct Config {
    /// Moment the countdown runs to (RFC 3339)
    #[arg(long, env = "COUNTDOWN_TARGET", default_value = DEFAULT_TARGET)]
    pub target: DateTime<Utc>,

    /// Event name shown in the headline
    #[arg(long, default_value = DEFAULT_EVENT)]
    pub event: String,

    /// Background variant
    #[arg(long, value_enum, default_value_t = Mode::Particles)]
    pub mode: Mode,

    /// Tile image for the parallax background
    #[arg(long)]
    pub background: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Seed for reproducible particle layouts
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn surface(&self) -> Surface {
        Surface::new(self.width.max(1), self.height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_landing_page() {
        let config = Config::try_parse_from(["countdown", "--target", DEFAULT_TARGET]).unwrap();

        assert_eq!(config.target, DEFAULT_TARGET.parse::<DateTime<Utc>>().unwrap());
        assert_eq!(config.event, DEFAULT_EVENT);
        assert_eq!(config.mode, Mode::Particles);
        assert_eq!(config.surface(), Surface::new(960, 540));
        assert_eq!(config.fps, 60);
        assert!(config.background.is_none() && config.seed.is_none());
    }

    #[test]
    fn parses_mode_and_background() {
        let config = Config::try_parse_from([
            "countdown",
            "--target",
            "2024-05-24T00:00:00Z",
            "--mode",
            "parallax",
            "--background",
            "assets/stars.png",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(config.mode, Mode::Parallax);
        assert_eq!(config.background, Some(PathBuf::from("assets/stars.png")));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn rejects_malformed_targets() {
        assert!(Config::try_parse_from(["countdown", "--target", "May 24, 2024"]).is_err());
    }

    #[test]
    fn surface_is_never_zero_sized() {
        let config = Config::try_parse_from(["countdown", "--target", DEFAULT_TARGET, "--width", "0"]).unwrap();
        assert!(!config.surface().is_empty());
    }
}
