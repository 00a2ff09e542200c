//! Setup failure.
//!
//! The simulation itself is total and never fails once a match is running.
//! Everything that can go wrong happens before the first frame and is
//! reported as a `SetupError`.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum SetupError {
    /// Play field is not finite or too small to hold the boundary margins.
    InvalidField { width: f32, height: f32 },
    /// The terminal can't fit the minimal rendering grid.
    TerminalTooSmall { cols: u16, rows: u16 },
    /// Raw mode, alternate screen or another terminal operation failed.
    Terminal(io::Error),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidField { width, height } => {
                write!(f, "invalid play field {width}x{height}")
            }
            SetupError::TerminalTooSmall { cols, rows } => {
                write!(f, "terminal too small ({cols}x{rows})")
            }
            SetupError::Terminal(err) => write!(f, "terminal setup failed: {err}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Terminal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SetupError {
    fn from(err: io::Error) -> Self {
        SetupError::Terminal(err)
    }
}
