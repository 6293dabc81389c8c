mod delay;
mod recording;
mod terminal;

pub use delay::{RecordingDelay, ThreadDelay};
pub use recording::{RecordingStrip, StripCall};
pub use terminal::TerminalStrip;

use thiserror::Error;

/// Error type for host strip operations.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("pixel index {0} is out of range")]
    PixelOutOfRange(usize),
    #[error("failed to write to terminal: {0}")]
    Io(#[from] std::io::Error),
    #[error("simulated strip failure")]
    Simulated,
}
