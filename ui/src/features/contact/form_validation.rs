use crate::features::contact::types::*;

/// Pure validity check over a field's current value
pub type Predicate = fn(&FieldValue) -> bool;

/// Options offered by the subject select, the empty placeholder excluded
pub const SUBJECT_OPTIONS: [&str; 5] = [
    "General Inquiry",
    "Support",
    "Feedback",
    "Partnership",
    "Other",
];

/// Minimum number of digits in a phone number
const PHONE_MIN_DIGITS: usize = 7;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
    Checkbox,
}

/// One entry of the field registry: everything the validator and the
/// rendered form need to know about a field
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
    pub required: bool,
    pub error_message: &'static str,
    pub predicate: Predicate,
}

impl FieldSpec {
    pub fn input_id(&self) -> &'static str {
        self.id.element_id()
    }

    pub fn error_id(&self) -> &'static str {
        self.id.error_element_id()
    }

    pub fn check(&self, value: &FieldValue) -> bool {
        (self.predicate)(value)
    }
}

/// The registry of the contact form, in display order
pub fn contact_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec {
            id: FieldId::Name,
            label: "Full name",
            placeholder: "Jane Doe",
            kind: InputKind::Text,
            required: true,
            error_message: "Please enter your name.",
            predicate: is_present,
        },
        FieldSpec {
            id: FieldId::Email,
            label: "Email address",
            placeholder: "jane@example.com",
            kind: InputKind::Email,
            required: true,
            error_message: "Please enter a valid email address.",
            predicate: is_valid_email,
        },
        FieldSpec {
            id: FieldId::Phone,
            label: "Phone (optional)",
            placeholder: "+1 555 123 4567",
            kind: InputKind::Tel,
            required: false,
            error_message: "Please enter a valid phone number or leave it empty.",
            predicate: is_valid_optional_phone,
        },
        FieldSpec {
            id: FieldId::Subject,
            label: "Subject",
            placeholder: "Choose a subject",
            kind: InputKind::Select,
            required: true,
            error_message: "Please choose a subject.",
            predicate: is_known_subject,
        },
        FieldSpec {
            id: FieldId::Message,
            label: "Message",
            placeholder: "How can we help?",
            kind: InputKind::TextArea,
            required: true,
            error_message: "Please enter a message.",
            predicate: is_present,
        },
        FieldSpec {
            id: FieldId::Consent,
            label: "I agree to be contacted about my request",
            placeholder: "",
            kind: InputKind::Checkbox,
            required: true,
            error_message: "Please confirm that we may contact you.",
            predicate: is_checked,
        },
    ]
}

pub fn is_present(value: &FieldValue) -> bool {
    !value.as_text().trim().is_empty()
}

pub fn is_valid_email(value: &FieldValue) -> bool {
    let email = value.as_text().trim();
    !email.is_empty() && email_address::EmailAddress::is_valid(email)
}

/// Empty is accepted; otherwise digits with common separators only
pub fn is_valid_optional_phone(value: &FieldValue) -> bool {
    let phone = value.as_text().trim();
    if phone.is_empty() {
        return true;
    }

    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();

    allowed && digits >= PHONE_MIN_DIGITS
}

pub fn is_known_subject(value: &FieldValue) -> bool {
    SUBJECT_OPTIONS.contains(&value.as_text())
}

pub fn is_checked(value: &FieldValue) -> bool {
    value.is_checked()
}

/// Counter state for the message field; warns strictly above `threshold`.
///
/// Length is in UTF-16 code units, the unit the textarea `maxlength` is
/// enforced in, so an astral character such as an emoji counts as two.
pub fn char_count(message: &str, threshold: usize, limit: usize) -> CharCount {
    let length = message.encode_utf16().count();
    CharCount {
        length,
        limit,
        warning: length > threshold,
    }
}

pub fn field_class(kind: InputKind, invalid: bool) -> &'static str {
    match (kind, invalid) {
        (InputKind::Select, false) => "select select-bordered w-full",
        (InputKind::Select, true) => "select select-bordered select-error w-full",
        (InputKind::TextArea, false) => "textarea textarea-bordered w-full h-36",
        (InputKind::TextArea, true) => "textarea textarea-bordered textarea-error w-full h-36",
        (InputKind::Checkbox, false) => "checkbox checkbox-primary",
        (InputKind::Checkbox, true) => "checkbox checkbox-error",
        (_, false) => "input input-bordered w-full",
        (_, true) => "input input-bordered input-error w-full",
    }
}

pub fn char_count_class(count: &CharCount) -> &'static str {
    if count.warning {
        "label-text-alt text-warning font-semibold"
    } else {
        "label-text-alt opacity-70"
    }
}
