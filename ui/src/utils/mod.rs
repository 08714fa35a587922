//! Utility macros
//!
//! - **console_macros**: timestamped logging that writes to the browser
//!   console under WASM and to `tracing` elsewhere

pub mod console_macros;
