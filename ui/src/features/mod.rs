//! Application Features
//!
//! - **contact**: contact form state, field rules and submission lifecycle

pub mod contact;
