//! Test helpers shared by the contact form tests

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::features::contact::types::*;
use crate::services::backend::SimulatedBackend;
use crate::services::timer::Timer;

#[derive(Clone, PartialEq, Debug)]
pub enum Step {
    Slept(u32),
    Action(ContactAction),
}

/// Timer that returns immediately and records every requested delay,
/// interleaved with the actions dispatched through the same log
#[derive(Clone, Default)]
pub struct RecordingTimer {
    log: Rc<RefCell<Vec<Step>>>,
}

impl RecordingTimer {
    pub fn steps(&self) -> Vec<Step> {
        self.log.borrow().clone()
    }

    pub fn record(&self, step: Step) {
        self.log.borrow_mut().push(step);
    }
}

#[async_trait(?Send)]
impl Timer for RecordingTimer {
    async fn sleep_ms(&self, ms: u32) {
        self.record(Step::Slept(ms));
    }
}

/// Shared page state plus a dispatcher that reduces into it
pub struct Harness {
    pub state: Rc<RefCell<ContactState>>,
    pub timer: RecordingTimer,
}

impl Harness {
    pub fn new(state: ContactState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            timer: RecordingTimer::default(),
        }
    }

    /// A filled-in form that has just been accepted
    pub fn sending() -> Self {
        let mut state = filled_state();
        state.reduce_in_place(ContactAction::SetSubmission(SubmissionState::Sending));
        Self::new(state)
    }

    pub fn dispatcher(&self) -> impl Fn(ContactAction) + 'static {
        let state = Rc::clone(&self.state);
        let timer = self.timer.clone();
        move |action: ContactAction| {
            timer.record(Step::Action(action.clone()));
            state.borrow_mut().reduce_in_place(action);
        }
    }

    pub fn simulated_backend(&self, delay_ms: u32) -> SimulatedBackend<RecordingTimer> {
        SimulatedBackend::new(self.timer.clone(), delay_ms)
    }

    pub fn state(&self) -> ContactState {
        self.state.borrow().clone()
    }
}

/// Values that satisfy every field rule
pub fn filled_state() -> ContactState {
    let mut state = ContactState::default();
    for (id, value) in [
        (FieldId::Name, FieldValue::Text("Ada Lovelace".to_string())),
        (FieldId::Email, FieldValue::Text("ada@example.com".to_string())),
        (FieldId::Subject, FieldValue::Text("General Inquiry".to_string())),
        (FieldId::Message, FieldValue::Text("hi".to_string())),
        (FieldId::Consent, FieldValue::Checked(true)),
    ] {
        state.reduce_in_place(ContactAction::SetFieldValue(id, value));
    }
    state
}

pub fn sample_submission() -> ContactSubmission {
    filled_state().submission_snapshot()
}
