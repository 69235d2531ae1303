//! Device stand-ins.
//!
//! Keyboard/screen placeholders: synchronous, side-effect-free beyond a log
//! entry. `read` returns a fixed value and `write` persists nothing.

/// A named stand-in for an I/O device.
#[derive(Debug, Clone)]
pub struct Device {
    name: String,
}

impl Device {
    /// Creates a device stand-in with a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The device's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads a word from the device. Stub: always returns 0.
    pub fn read(&self) -> i64 {
        tracing::info!(device = %self.name, "device read");
        0
    }

    /// Writes a word to the device. Logged, no persistent effect.
    pub fn write(&self, word: i64) {
        tracing::info!(device = %self.name, word, "device write");
    }
}
