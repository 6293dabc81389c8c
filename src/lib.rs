use smart_leds::RGB8;

pub mod config;
pub mod marquee;
pub mod palette;
pub mod render;

pub use marquee::{DigitString, Frame, Marquee};
pub use render::{RenderConfig, Renderer};

/// Number of pixels on the strip.
pub const NUM_PIXELS: usize = marquee::FRAME_WIDTH;

/// Trait for the LED strip the marquee is shown on.
///
/// Abstracts over LED hardware (ESP32) and terminal rendering. Writes are
/// buffered until [`PixelStrip::show`] pushes them to the display.
pub trait PixelStrip {
    /// Error type for strip update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Stage `color` at `brightness` (`0.0..=1.0`) for pixel `index`
    /// (`0..NUM_PIXELS`).
    fn set_pixel(
        &mut self,
        index: usize,
        color: RGB8,
        brightness: f32,
    ) -> Result<(), Self::Error>;

    /// Flush staged pixels to the display.
    fn show(&mut self) -> Result<(), Self::Error>;
}

#[cfg(target_os = "espidf")]
pub mod esp32;

#[cfg(not(target_os = "espidf"))]
pub mod mock;
