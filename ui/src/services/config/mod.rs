use crate::console_warn;
use crate::services::errors::{ContactError, ContactResult};

/// Delay standing in for the network round trip of a submission
pub const DEFAULT_SEND_DELAY_MS: u32 = 1500;
/// How long the success notification stays on screen
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;
/// Message length above which the counter switches to its warning style
pub const DEFAULT_CHAR_WARNING_THRESHOLD: usize = 450;
/// `maxlength` of the message textarea
pub const DEFAULT_MESSAGE_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormConfig {
    pub send_delay_ms: u32,
    pub toast_duration_ms: u32,
    pub char_warning_threshold: usize,
    pub message_max_length: usize,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: DEFAULT_SEND_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            char_warning_threshold: DEFAULT_CHAR_WARNING_THRESHOLD,
            message_max_length: DEFAULT_MESSAGE_MAX_LENGTH,
        }
    }
}

impl ContactFormConfig {
    pub fn validate(&self) -> ContactResult<()> {
        if self.send_delay_ms == 0 {
            return Err(configuration_error("send_delay_ms", self.send_delay_ms));
        }

        if self.toast_duration_ms == 0 {
            return Err(configuration_error(
                "toast_duration_ms",
                self.toast_duration_ms,
            ));
        }

        if self.message_max_length == 0 {
            return Err(configuration_error(
                "message_max_length",
                self.message_max_length,
            ));
        }

        // The warning has to be reachable before the textarea stops accepting input
        if self.char_warning_threshold >= self.message_max_length {
            return Err(configuration_error(
                "char_warning_threshold",
                self.char_warning_threshold,
            ));
        }

        Ok(())
    }
}

fn configuration_error(field: &str, value: impl ToString) -> ContactError {
    ContactError::Configuration {
        field: field.to_string(),
        value: value.to_string(),
    }
}

use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<ContactFormConfig> = OnceLock::new();

/// Install the page configuration. Must run before the form mounts;
/// rejected configurations leave the defaults in place.
pub fn init_global_config(config: ContactFormConfig) -> ContactResult<()> {
    if let Err(e) = config.validate() {
        console_warn!("Invalid configuration: {}", e);
        return Err(e);
    }

    GLOBAL_CONFIG.set(config).map_err(|rejected| ContactError::Configuration {
        field: "global_config".to_string(),
        value: format!("already initialized, ignoring {:?}", rejected),
    })
}

/// Get the global configuration, falling back to defaults when none was installed
pub fn get_global_config() -> ContactFormConfig {
    GLOBAL_CONFIG
        .get_or_init(ContactFormConfig::default)
        .clone()
}
