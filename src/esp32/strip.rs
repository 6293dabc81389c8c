use core::time::Duration;

use esp_idf_svc::hal::gpio::OutputPin;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::rmt::config::TransmitConfig;
use esp_idf_svc::hal::rmt::{FixedLengthSignal, PinState, Pulse, RmtChannel, TxRmtDriver};
use esp_idf_svc::sys::EspError;
use smart_leds::RGB8;

use crate::palette::{self, BLACK};
use crate::{NUM_PIXELS, PixelStrip};

/// Bits per WS2812 pixel (8 each for G, R, B).
const BITS_PER_PIXEL: usize = 24;

/// Error types for ESP32 LED strip operations.
#[derive(Debug, thiserror::Error)]
pub enum LedStripError {
    #[error("RMT driver error: {0}")]
    Driver(#[from] EspError),
    #[error("pixel index {0} is out of range")]
    PixelOutOfRange(usize),
}

/// WS2812 timing for one bit, as a high pulse followed by a low pulse.
#[derive(Debug, Clone, Copy)]
struct BitTiming {
    zero: (Pulse, Pulse),
    one: (Pulse, Pulse),
}

/// WS2812 strip of [`NUM_PIXELS`] LEDs driven via the ESP32 RMT peripheral.
///
/// WS2812 has no global brightness register, so brightness is applied by
/// scaling each color before it is latched.
pub struct Esp32LedStrip<'d> {
    tx: TxRmtDriver<'d>,
    timing: BitTiming,
    pending: [RGB8; NUM_PIXELS],
}

impl<'d> Esp32LedStrip<'d> {
    pub fn new<C: RmtChannel>(
        channel: impl Peripheral<P = C> + 'd,
        pin: impl Peripheral<P = impl OutputPin> + 'd,
    ) -> Result<Self, LedStripError> {
        let config = TransmitConfig::new().clock_divider(1);
        let tx = TxRmtDriver::new(channel, pin, &config)?;

        let ticks_hz = tx.counter_clock()?;
        let pulse = |state, ns| Pulse::new_with_duration(ticks_hz, state, &Duration::from_nanos(ns));
        let timing = BitTiming {
            zero: (pulse(PinState::High, 350)?, pulse(PinState::Low, 800)?),
            one: (pulse(PinState::High, 700)?, pulse(PinState::Low, 600)?),
        };
        log::info!("WS2812 strip ready, RMT counter at {ticks_hz}");

        Ok(Self {
            tx,
            timing,
            pending: [BLACK; NUM_PIXELS],
        })
    }
}

impl PixelStrip for Esp32LedStrip<'_> {
    type Error = LedStripError;

    fn set_pixel(
        &mut self,
        index: usize,
        color: RGB8,
        brightness: f32,
    ) -> Result<(), Self::Error> {
        let slot = self
            .pending
            .get_mut(index)
            .ok_or(LedStripError::PixelOutOfRange(index))?;
        *slot = palette::scale(color, brightness);
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        let mut signal = FixedLengthSignal::<{ NUM_PIXELS * BITS_PER_PIXEL }>::new();
        for (pixel, color) in self.pending.iter().enumerate() {
            // WS2812 expects GRB, most significant bit first.
            let grb = (u32::from(color.g) << 16) | (u32::from(color.r) << 8) | u32::from(color.b);
            for bit in 0..BITS_PER_PIXEL {
                let set = grb & (1 << (BITS_PER_PIXEL - 1 - bit)) != 0;
                let pulses = if set { &self.timing.one } else { &self.timing.zero };
                signal.set(pixel * BITS_PER_PIXEL + bit, pulses)?;
            }
        }
        self.tx.start_blocking(&signal)?;
        Ok(())
    }
}
