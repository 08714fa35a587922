//! User Interface Components
//!
//! Reusable Dioxus components for the contact page:
//!
//! - **forms**: the contact form and its submit flow
//! - **display**: busy indicator, character counter and success notification
//! - **input**: validated inputs and per-field error messages

pub mod display;
pub mod forms;
pub mod input;
