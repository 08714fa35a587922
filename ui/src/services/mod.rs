//! Infrastructure Services
//!
//! - **backend**: the submission backend seam and its simulated implementation
//! - **config**: timing and counter configuration
//! - **errors**: error types shared across the crate
//! - **timer**: browser and native fixed-delay timers
//!
//! Async traits are declared without Send bounds; everything runs on the
//! browser's single event loop.

pub mod backend;
pub mod config;
pub mod errors;
pub mod timer;
