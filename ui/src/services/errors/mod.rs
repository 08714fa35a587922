use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },

    #[error("Submission error: {message}")]
    Submission { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<String> for ContactError {
    fn from(message: String) -> Self {
        ContactError::Submission { message }
    }
}

impl From<&str> for ContactError {
    fn from(message: &str) -> Self {
        ContactError::Submission {
            message: message.to_string(),
        }
    }
}

pub type ContactResult<T> = Result<T, ContactError>;

impl ContactError {
    /// Text shown to the visitor underneath the form
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Submission { message } => {
                format!("Your message could not be sent: {}", message)
            }
            _ => "Something went wrong while sending your message. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_surfaces_backend_message() {
        let error = ContactError::from("service unavailable");
        assert_eq!(
            error.user_message(),
            "Your message could not be sent: service unavailable"
        );
        assert_eq!(error.to_string(), "Submission error: service unavailable");
    }

    #[test]
    fn test_configuration_error_uses_generic_message() {
        let error = ContactError::Configuration {
            field: "send_delay_ms".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration error: send_delay_ms = 0");
        assert!(error.user_message().starts_with("Something went wrong"));
    }
}
