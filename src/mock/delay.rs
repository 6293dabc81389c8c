use std::thread;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Blocking delay backed by [`thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(ns.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms.into()));
    }
}

/// Delay that returns immediately and remembers what it was asked to wait.
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    waits: Vec<Duration>,
}

impl RecordingDelay {
    #[inline]
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }

    /// Sum of all requested waits.
    pub fn total(&self) -> Duration {
        self.waits.iter().sum()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits.push(Duration::from_nanos(ns.into()));
    }

    fn delay_us(&mut self, us: u32) {
        self.waits.push(Duration::from_micros(us.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits.push(Duration::from_millis(ms.into()));
    }
}
