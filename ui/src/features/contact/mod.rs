//! Contact form core: field registry, validation and the submission lifecycle

pub mod form_validation;
pub mod lifecycle;
pub mod types;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use form_validation::*;
pub use lifecycle::*;
pub use types::*;
pub use validator::*;
