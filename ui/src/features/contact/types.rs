// Core types for the contact form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use crate::console_debug;

/// The fixed set of inputs on the contact form, in display order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Consent,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Message,
        FieldId::Consent,
    ];

    /// Element id of the input control
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
            FieldId::Consent => "consent",
        }
    }

    /// Element id of the error message shown under the input
    pub fn error_element_id(&self) -> &'static str {
        match self {
            FieldId::Name => "name-error",
            FieldId::Email => "email-error",
            FieldId::Phone => "phone-error",
            FieldId::Subject => "subject-error",
            FieldId::Message => "message-error",
            FieldId::Consent => "consent-error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(_) => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }

    /// The empty value of the same kind
    pub fn cleared(&self) -> Self {
        match self {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Checked(_) => FieldValue::Checked(false),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Field {
    pub id: FieldId,
    pub value: FieldValue,
    pub error_visible: bool,
}

impl Field {
    pub fn empty(id: FieldId) -> Self {
        let value = match id {
            FieldId::Consent => FieldValue::Checked(false),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            id,
            value,
            error_visible: false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
}

// Action enum for state mutations
#[derive(Clone, PartialEq, Debug)]
pub enum ContactAction {
    SetFieldValue(FieldId, FieldValue),
    SetFieldError(FieldId, bool),
    ResetFields,
    SetSubmission(SubmissionState),
    SetSubmitError(Option<String>),
}

/// Field values captured at submit time, shaped as the JSON body a
/// submission backend receives
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub consent: bool,
}

/// Derived display state of the message counter
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CharCount {
    pub length: usize,
    pub limit: usize,
    pub warning: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ContactState {
    pub fields: Vec<Field>,
    pub submission: SubmissionState,
    pub submit_error: Option<String>,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            fields: FieldId::ALL.iter().copied().map(Field::empty).collect(),
            submission: SubmissionState::Idle,
            submit_error: None,
        }
    }
}

impl ContactState {
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == id)
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.id == id)
    }

    pub fn value(&self, id: FieldId) -> Option<&FieldValue> {
        self.field(id).map(|field| &field.value)
    }

    pub fn text(&self, id: FieldId) -> &str {
        self.value(id).map(FieldValue::as_text).unwrap_or("")
    }

    pub fn is_checked(&self, id: FieldId) -> bool {
        self.value(id).is_some_and(FieldValue::is_checked)
    }

    pub fn error_visible(&self, id: FieldId) -> bool {
        self.field(id).is_some_and(|field| field.error_visible)
    }

    /// Submit control is disabled and shows the busy indicator
    pub fn is_sending(&self) -> bool {
        self.submission == SubmissionState::Sending
    }

    /// A new submit attempt is only considered while idle
    pub fn accepts_submit(&self) -> bool {
        self.submission == SubmissionState::Idle
    }

    /// Success notification is on screen
    pub fn toast_visible(&self) -> bool {
        self.submission == SubmissionState::Succeeded
    }

    pub fn submission_snapshot(&self) -> ContactSubmission {
        let phone = self.text(FieldId::Phone).trim();
        ContactSubmission {
            name: self.text(FieldId::Name).trim().to_string(),
            email: self.text(FieldId::Email).trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            subject: self.text(FieldId::Subject).to_string(),
            message: self.text(FieldId::Message).trim().to_string(),
            consent: self.is_checked(FieldId::Consent),
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: ContactAction) {
        match action {
            ContactAction::SetFieldValue(id, value) => {
                if let Some(field) = self.field_mut(id) {
                    field.value = value;
                }
            }
            ContactAction::SetFieldError(id, visible) => {
                if let Some(field) = self.field_mut(id) {
                    field.error_visible = visible;
                }
            }
            ContactAction::ResetFields => {
                for field in &mut self.fields {
                    field.value = field.value.cleared();
                    field.error_visible = false;
                }
            }
            ContactAction::SetSubmission(submission) => {
                console_debug!(
                    "[STATE] Submission changing: {:?} -> {:?}",
                    self.submission,
                    submission
                );
                self.submission = submission;
            }
            ContactAction::SetSubmitError(error) => {
                self.submit_error = error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn test_default_state_has_every_field_in_order() {
        let state = ContactState::default();
        let ids: Vec<FieldId> = state.fields.iter().map(|f| f.id).collect();
        assert_eq!(ids, FieldId::ALL.to_vec());
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.value(FieldId::Consent), Some(&FieldValue::Checked(false)));
        assert!(state.fields.iter().all(|f| !f.error_visible));
    }

    #[test]
    fn test_reduce_sets_values_and_errors() {
        let mut state = ContactState::default();
        state.reduce_in_place(ContactAction::SetFieldValue(FieldId::Name, text("Ada")));
        state.reduce_in_place(ContactAction::SetFieldError(FieldId::Email, true));

        assert_eq!(state.text(FieldId::Name), "Ada");
        assert!(state.error_visible(FieldId::Email));
        assert!(!state.error_visible(FieldId::Name));
    }

    #[test]
    fn test_reset_clears_values_and_hides_errors() {
        let mut state = ContactState::default();
        state.reduce_in_place(ContactAction::SetFieldValue(FieldId::Message, text("hello")));
        state.reduce_in_place(ContactAction::SetFieldValue(
            FieldId::Consent,
            FieldValue::Checked(true),
        ));
        state.reduce_in_place(ContactAction::SetFieldError(FieldId::Name, true));

        state.reduce_in_place(ContactAction::ResetFields);

        assert_eq!(state.text(FieldId::Message), "");
        assert!(!state.is_checked(FieldId::Consent));
        assert!(!state.error_visible(FieldId::Name));
    }

    #[test]
    fn test_submission_flags_follow_state() {
        let mut state = ContactState::default();
        state.reduce_in_place(ContactAction::SetSubmission(SubmissionState::Sending));
        assert!(state.is_sending());
        assert!(!state.toast_visible());

        state.reduce_in_place(ContactAction::SetSubmission(SubmissionState::Succeeded));
        assert!(!state.is_sending());
        assert!(state.toast_visible());
    }

    #[test]
    fn test_submit_is_accepted_only_while_idle() {
        let mut state = ContactState::default();
        assert!(state.accepts_submit());

        for submission in [SubmissionState::Sending, SubmissionState::Succeeded] {
            state.reduce_in_place(ContactAction::SetSubmission(submission));
            assert!(!state.accepts_submit(), "{:?} should not accept submit", submission);
        }

        state.reduce_in_place(ContactAction::SetSubmission(SubmissionState::Idle));
        assert!(state.accepts_submit());
    }

    #[test]
    fn test_repeated_checked_value_is_not_toggled() {
        let mut state = ContactState::default();
        for _ in 0..2 {
            state.reduce_in_place(ContactAction::SetFieldValue(
                FieldId::Consent,
                FieldValue::Checked(true),
            ));
        }
        assert!(state.is_checked(FieldId::Consent));
    }

    #[test]
    fn test_snapshot_trims_and_omits_empty_phone() {
        let mut state = ContactState::default();
        state.reduce_in_place(ContactAction::SetFieldValue(FieldId::Name, text("  Ada ")));
        state.reduce_in_place(ContactAction::SetFieldValue(FieldId::Email, text("ada@example.com")));
        state.reduce_in_place(ContactAction::SetFieldValue(FieldId::Phone, text("   ")));
        state.reduce_in_place(ContactAction::SetFieldValue(FieldId::Subject, text("Support")));
        state.reduce_in_place(ContactAction::SetFieldValue(FieldId::Message, text("hi\n")));
        state.reduce_in_place(ContactAction::SetFieldValue(
            FieldId::Consent,
            FieldValue::Checked(true),
        ));

        let snapshot = state.submission_snapshot();
        assert_eq!(snapshot.name, "Ada");
        assert_eq!(snapshot.phone, None);
        assert_eq!(snapshot.message, "hi");

        let body = serde_json::to_value(&snapshot).unwrap();
        assert!(body.get("phone").is_none());
        assert_eq!(body["consent"], serde_json::Value::Bool(true));
        assert_eq!(body["subject"], "Support");
    }
}
