//! I/O subsystem: external interrupts and device stand-ins.
//!
//! Two independent mechanisms live here, deliberately not merged with the
//! engine's internal pending flag:
//! 1. **Interrupt controller:** A FIFO queue of opaque tags. Draining it
//!    never touches the CPU by itself; a caller honors a popped tag by
//!    calling [`crate::Engine::raise_interrupt`].
//! 2. **Devices:** Synchronous keyboard/screen stand-ins with no effect
//!    beyond a log entry.

/// Device stand-ins (keyboard, screen).
pub mod device;

/// External interrupt controller.
pub mod interrupt;

pub use device::Device;
pub use interrupt::InterruptController;
