use std::io::{self, Write};

use smart_leds::RGB8;

use super::StripError;
use crate::{NUM_PIXELS, PixelStrip};
use crate::palette::BLACK;

/// Terminal-based strip for development on the host.
///
/// Each [`PixelStrip::show`] prints the strip as one row of ANSI
/// true-color cells. Colors are drawn at full intensity, since a
/// terminal cell dimmed to 10% is indistinguishable from black.
#[derive(Debug)]
pub struct TerminalStrip<W = io::Stdout> {
    out: W,
    pending: [RGB8; NUM_PIXELS],
}

impl TerminalStrip {
    /// Create a strip printing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalStrip<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: [BLACK; NUM_PIXELS],
        }
    }

    /// Consume the strip, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PixelStrip for TerminalStrip<W> {
    type Error = StripError;

    fn set_pixel(
        &mut self,
        index: usize,
        color: RGB8,
        _brightness: f32,
    ) -> Result<(), Self::Error> {
        let slot = self
            .pending
            .get_mut(index)
            .ok_or(StripError::PixelOutOfRange(index))?;
        *slot = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        render_pixels(&mut self.out, &self.pending)
    }
}

/// Render pixels to any writer, pixel 0 leftmost. Extracted for testability.
fn render_pixels(w: &mut impl Write, pixels: &[RGB8]) -> Result<(), StripError> {
    for &pixel in pixels {
        write!(w, "{}", format_pixel(pixel))?;
    }
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

/// Map a pixel color to an ANSI-colored cell string.
fn format_pixel(color: RGB8) -> String {
    if color == BLACK {
        " · ".to_owned()
    } else {
        format!("\x1b[48;2;{};{};{}m   \x1b[0m", color.r, color.g, color.b)
    }
}
