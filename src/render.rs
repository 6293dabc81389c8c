use std::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::PixelStrip;
use crate::marquee::{FRAME_WIDTH, Frame, Marquee};
use crate::palette;

/// Brightness used when none is configured.
pub const DEFAULT_BRIGHTNESS: f32 = 0.1;

/// How long each frame stays on the strip when none is configured.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(500);

/// Fixed rendering parameters for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Brightness passed with every pixel, `0.0..=1.0`.
    pub brightness: f32,
    /// Time between consecutive frames.
    pub frame_delay: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

/// Drives a [`PixelStrip`] through a [`Marquee`], one frame per delay tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[inline]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Write every pixel of `frame` and flush it to the strip.
    ///
    /// Pixel `col` shows frame character `7 - col`, so the frame reads
    /// left to right across the physical strip.
    pub fn render_frame<S: PixelStrip>(
        &self,
        strip: &mut S,
        frame: &Frame,
    ) -> Result<(), S::Error> {
        for col in 0..FRAME_WIDTH {
            let color = palette::color_for(frame.pixel(col));
            log::trace!("pixel {col} <- {color:?}");
            strip.set_pixel(col, color, self.config.brightness)?;
        }
        strip.show()
    }

    /// Render every frame in order, holding each for the frame delay.
    ///
    /// Strip errors abort playback and are returned unchanged.
    pub fn play<S, D>(
        &self,
        strip: &mut S,
        delay: &mut D,
        marquee: &Marquee,
    ) -> Result<(), S::Error>
    where
        S: PixelStrip,
        D: DelayNs,
    {
        for (row, frame) in marquee.into_iter().enumerate() {
            log::debug!("frame {row:02}: {frame}");
            self.render_frame(strip, frame)?;
            hold(delay, self.config.frame_delay);
        }
        Ok(())
    }
}

/// Wait for `duration`, splitting it into `u32` millisecond chunks.
fn hold(delay: &mut impl DelayNs, duration: Duration) {
    let mut remaining = duration.as_millis();
    while remaining > 0 {
        let chunk = u32::try_from(remaining).unwrap_or(u32::MAX);
        delay.delay_ms(chunk);
        remaining -= u128::from(chunk);
    }
}
