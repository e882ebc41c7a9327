//! Simulated-shell domain layer.
//!
//! Everything in here is plain data and pure functions so it can be unit
//! tested on the native target. The component layer under `crate::app` owns
//! the timers and DOM wiring.

pub mod content;
pub mod interpreter;
pub mod konami;
pub mod session;
pub mod timing;
pub mod window;
