//! Common utilities and types used throughout the simulator.
//!
//! This module provides building blocks shared across all components:
//! 1. **Constants:** System-wide constants (interrupt service instruction, memory seed).
//! 2. **Error Handling:** The crate-wide error type for configuration and
//!    precondition violations.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration and runtime precondition violations.
pub mod error;

pub use error::SimError;
