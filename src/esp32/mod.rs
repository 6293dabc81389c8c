mod strip;

pub use strip::{Esp32LedStrip, LedStripError};
