//! Ways to wipe the terminal between frames
use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Clears whatever the previous frame left on screen
///
/// Failures are reported to the caller, which treats them as best effort.
pub trait ScreenClear {
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()>;
}

/// Erase the screen and home the cursor with escape sequences
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiClear;

impl ScreenClear for AnsiClear {
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

/// Run the host's `clear` program, sharing our stdout
#[derive(Debug, Clone)]
pub struct CommandClear {
    program: String,
}

impl CommandClear {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandClear {
    fn default() -> Self {
        Self::new("clear")
    }
}

impl ScreenClear for CommandClear {
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        // Anything still buffered belongs to the frame being wiped
        out.flush()?;
        let status = Command::new(&self.program)
            .stdout(Stdio::inherit())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("`{}` exited with {}", self.program, status),
            ))
        }
    }
}

/// Leave previous frames in place
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClear;

impl ScreenClear for NoClear {
    fn clear<W: Write>(&mut self, _out: &mut W) -> io::Result<()> {
        Ok(())
    }
}

/// Clearing strategy picked at startup
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ClearMode {
    /// Escape sequences written to the output
    #[default]
    Ansi,
    /// The external `clear` command
    Command,
    /// Never clear; frames stack up
    None,
}

impl ScreenClear for ClearMode {
    fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Ansi => AnsiClear.clear(out),
            Self::Command => CommandClear::default().clear(out),
            Self::None => NoClear.clear(out),
        }
    }
}
