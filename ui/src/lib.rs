//! This crate contains the contact page, its form validation and the
//! simulated submission flow.

pub mod app;
pub use app::ContactPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
