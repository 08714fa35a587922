use std::future::Future;

use crate::features::contact::form_validation::{char_count, contact_fields, FieldSpec};
use crate::features::contact::lifecycle::{
    abortable, run_submission_lifecycle, LifecycleOutcome, SubmissionHandle,
};
use crate::features::contact::types::*;
use crate::services::backend::SubmissionBackend;
use crate::services::config::ContactFormConfig;
use crate::services::timer::Timer;
use crate::{console_debug, console_info};

/// Result of a submit attempt
#[derive(Clone, PartialEq, Debug)]
pub enum SubmitOutcome {
    /// At least one field failed its predicate; errors are now visible
    Invalid,
    /// A previous submission is still running; nothing was touched
    Busy,
    /// Every field passed and the form moved to `Sending`
    Accepted(ContactSubmission),
}

/// Validates the registered fields and drives the submission lifecycle.
///
/// The validator holds no per-submission state: validity is recomputed
/// from the current field values on every call.
#[derive(Clone, Debug)]
pub struct FormValidator {
    fields: Vec<FieldSpec>,
    config: ContactFormConfig,
}

impl FormValidator {
    pub fn new(fields: Vec<FieldSpec>, config: ContactFormConfig) -> Self {
        Self { fields, config }
    }

    /// Validator over the contact form registry
    pub fn contact(config: ContactFormConfig) -> Self {
        Self::new(contact_fields(), config)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn spec(&self, id: FieldId) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.id == id)
    }

    pub fn config(&self) -> &ContactFormConfig {
        &self.config
    }

    /// Evaluates `predicate` against the field's current value and shows
    /// or hides its error accordingly. An unknown field counts as invalid.
    pub fn validate_field<P>(&self, state: &mut ContactState, id: FieldId, predicate: P) -> bool
    where
        P: Fn(&FieldValue) -> bool,
    {
        let valid = state.value(id).is_some_and(predicate);
        state.reduce_in_place(ContactAction::SetFieldError(id, !valid));
        valid
    }

    /// Validates a field with the predicate registered for it
    pub fn validate_registered(&self, state: &mut ContactState, id: FieldId) -> bool {
        match self.spec(id) {
            Some(spec) => {
                let predicate = spec.predicate;
                self.validate_field(state, id, predicate)
            }
            None => false,
        }
    }

    /// Validates every registered field; all errors are updated, no short-circuit
    pub fn validate_all(&self, state: &mut ContactState) -> bool {
        self.fields.iter().fold(true, |all_valid, spec| {
            let valid = self.validate_field(state, spec.id, |value| spec.check(value));
            all_valid && valid
        })
    }

    pub fn submit(&self, state: &mut ContactState) -> SubmitOutcome {
        if !state.accepts_submit() {
            console_debug!(
                "[FormValidator] Ignoring submit while {:?}",
                state.submission
            );
            return SubmitOutcome::Busy;
        }

        state.reduce_in_place(ContactAction::SetSubmitError(None));

        if !self.validate_all(state) {
            console_debug!("[FormValidator] Submit rejected, form has invalid fields");
            return SubmitOutcome::Invalid;
        }

        let submission = state.submission_snapshot();
        state.reduce_in_place(ContactAction::SetSubmission(SubmissionState::Sending));
        console_info!("[FormValidator] Form valid, sending");

        SubmitOutcome::Accepted(submission)
    }

    /// Counter state for the current message
    pub fn char_count(&self, message: &str) -> CharCount {
        char_count(
            message,
            self.config.char_warning_threshold,
            self.config.message_max_length,
        )
    }

    /// Builds the lifecycle for an accepted submission. Nothing happens until
    /// the returned future is spawned; the handle aborts it at any point.
    pub fn start_submission<B, T, D>(
        &self,
        submission: ContactSubmission,
        backend: B,
        timer: T,
        dispatch: D,
    ) -> (impl Future<Output = LifecycleOutcome> + 'static, SubmissionHandle)
    where
        B: SubmissionBackend + 'static,
        T: Timer + 'static,
        D: Fn(ContactAction) + 'static,
    {
        let toast_duration_ms = self.config.toast_duration_ms;
        abortable(async move {
            run_submission_lifecycle(submission, &backend, &timer, toast_duration_ms, dispatch)
                .await
        })
    }
}
