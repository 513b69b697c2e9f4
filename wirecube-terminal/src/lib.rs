//! Terminal front end: paces the scene and prints each frame as text
use log::{debug, info};
use std::io::{self, stdout, Stdout, Write};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use wirecube_core::{Scene, SceneConfig};

pub mod clear;
pub mod renderer;

pub use clear::{AnsiClear, ClearMode, CommandClear, NoClear, ScreenClear};
pub use renderer::AsciiRenderer;

pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(70);

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scene(#[from] wirecube_core::Error),

    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),
}

/// Everything the terminal app needs to know before the first frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub scene: SceneConfig,
    pub frame_delay: Duration,
    pub renderer: AsciiRenderer,
    /// Stop after this many frames; `None` runs until the process is killed
    pub frames: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            frame_delay: DEFAULT_FRAME_DELAY,
            renderer: AsciiRenderer::default(),
            frames: None,
        }
    }
}

/// Main application struct for the spinning wireframe
pub struct TerminalApp<W: Write, C: ScreenClear> {
    scene: Scene,
    renderer: AsciiRenderer,
    clear: C,
    out: W,
    frame_delay: Duration,
    frames: Option<u64>,
}

impl TerminalApp<Stdout, ClearMode> {
    /// An app writing to the process's stdout
    pub fn stdout(config: AppConfig, clear: ClearMode) -> Result<Self, AppError> {
        Self::new(config, stdout(), clear)
    }
}

impl<W: Write, C: ScreenClear> TerminalApp<W, C> {
    pub fn new(config: AppConfig, out: W, clear: C) -> Result<Self, AppError> {
        Ok(Self {
            scene: Scene::new(config.scene)?,
            renderer: config.renderer,
            clear,
            out,
            frame_delay: config.frame_delay,
            frames: config.frames,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Consume the app, handing back its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Draw frames until the frame limit is hit; returns the number drawn
    pub fn run(&mut self) -> Result<u64, AppError> {
        info!(
            "starting animation: scale {}, frame delay {:?}, limit {:?}",
            self.scene.scale(),
            self.frame_delay,
            self.frames
        );

        while !self.limit_reached() {
            self.render_frame()?;

            if !self.limit_reached() && !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }

        info!("animation finished after {} frames", self.scene.frame());
        Ok(self.scene.frame())
    }

    fn limit_reached(&self) -> bool {
        self.frames.map_or(false, |limit| self.scene.frame() >= limit)
    }

    /// Clear, rotate, draw, then advance the angles
    pub fn render_frame(&mut self) -> Result<(), AppError> {
        if let Err(err) = self.clear.clear(&mut self.out) {
            debug!("screen clear failed, continuing: {}", err);
        }

        self.scene.rotate();
        let grid = self.scene.rasterize();
        self.renderer.draw(&grid, &mut self.out)?;
        self.out.flush()?;

        self.scene.advance();
        debug!(
            "frame {} drawn, rotation {:?}",
            self.scene.frame(),
            self.scene.rotation()
        );
        Ok(())
    }
}
