//! wirecube - a wireframe cube spinning in the terminal
//!
//! Runs until interrupted unless `--frames` is given. Set `RUST_LOG=debug`
//! for diagnostics on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::time::Duration;
use wirecube_core::scene::{DEFAULT_SCALE, DEFAULT_THETA};
use wirecube_core::{projection::DEFAULT_CAMERA_DISTANCE, SceneConfig};
use wirecube_terminal::{
    renderer::DEFAULT_GLYPH, AppConfig, AsciiRenderer, ClearMode, TerminalApp, DEFAULT_FRAME_DELAY,
};

#[derive(Debug, Parser)]
#[command(name = "wirecube")]
#[command(version)]
#[command(about = "Renders a rotating wireframe cube as ASCII art.", long_about = None)]
struct Args {
    /// Grid side length in cells, also the projection scale.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: usize,
    /// Radians added to every rotation angle after each frame.
    #[arg(long, default_value_t = DEFAULT_THETA, allow_negative_numbers = true)]
    theta: f64,
    /// Pause between frames, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY.as_millis() as u64)]
    delay_ms: u64,
    /// Perspective constant added to depth before dividing.
    #[arg(long, default_value_t = DEFAULT_CAMERA_DISTANCE)]
    camera_distance: f64,
    /// Character drawn for filled cells.
    #[arg(long, default_value_t = DEFAULT_GLYPH)]
    glyph: char,
    /// How the terminal is cleared between frames.
    #[arg(long, default_value_t = ClearMode::Ansi, value_enum)]
    clear: ClearMode,
    /// Stop after this many frames instead of running forever.
    #[arg(long)]
    frames: Option<u64>,
}

impl Args {
    fn config(&self) -> AppConfig {
        AppConfig {
            scene: SceneConfig {
                scale: self.scale,
                theta: self.theta,
                camera_distance: self.camera_distance,
            },
            frame_delay: Duration::from_millis(self.delay_ms),
            renderer: AsciiRenderer::new(self.glyph, ' '),
            frames: self.frames,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("{:?}", args);

    let mut app = TerminalApp::stdout(args.config(), args.clear)
        .context("invalid animation settings")?;
    app.run().context("animation stopped")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["wirecube"]);
        assert_eq!(args.config(), AppConfig::default());
        assert_eq!(args.clear, ClearMode::Ansi);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "wirecube", "--scale", "40", "--theta", "-0.01", "--glyph", "#", "--clear", "none",
            "--frames", "5",
        ]);
        let config = args.config();
        assert_eq!(config.scene.scale, 40);
        assert_eq!(config.scene.theta, -0.01);
        assert_eq!(config.renderer, AsciiRenderer::new('#', ' '));
        assert_eq!(config.frames, Some(5));
        assert_eq!(args.clear, ClearMode::None);
    }
}
