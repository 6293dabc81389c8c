use smart_leds::RGB8;

use super::StripError;
use crate::{NUM_PIXELS, PixelStrip};

/// One call made against a [`RecordingStrip`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripCall {
    SetPixel {
        index: usize,
        color: RGB8,
        brightness: f32,
    },
    Show,
}

/// Test double that records every call instead of driving hardware.
///
/// Keeps the staged pixels like a real strip so each [`PixelStrip::show`]
/// also captures a snapshot of what would be on the LEDs.
#[derive(Debug, Clone, Default)]
pub struct RecordingStrip {
    calls: Vec<StripCall>,
    pending: [RGB8; NUM_PIXELS],
    shown: Vec<[RGB8; NUM_PIXELS]>,
    fail_after: Option<usize>,
}

impl RecordingStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// A strip whose `show` fails once `frames` frames have been shown.
    pub fn failing_after(frames: usize) -> Self {
        Self {
            fail_after: Some(frames),
            ..Self::default()
        }
    }

    /// Every call in order.
    #[inline]
    pub fn calls(&self) -> &[StripCall] {
        &self.calls
    }

    /// Pixel snapshots taken at each successful `show`, indexed by pixel.
    #[inline]
    pub fn shown(&self) -> &[[RGB8; NUM_PIXELS]] {
        &self.shown
    }
}

impl PixelStrip for RecordingStrip {
    type Error = StripError;

    fn set_pixel(
        &mut self,
        index: usize,
        color: RGB8,
        brightness: f32,
    ) -> Result<(), Self::Error> {
        self.calls.push(StripCall::SetPixel {
            index,
            color,
            brightness,
        });
        let slot = self
            .pending
            .get_mut(index)
            .ok_or(StripError::PixelOutOfRange(index))?;
        *slot = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.calls.push(StripCall::Show);
        if self.fail_after.is_some_and(|n| self.shown.len() >= n) {
            return Err(StripError::Simulated);
        }
        self.shown.push(self.pending);
        Ok(())
    }
}
