//! Timed submission lifecycle: `Sending -> Succeeded -> Idle`
//!
//! The caller has already moved the form to `Sending`. The lifecycle waits for
//! the backend, resets the fields and shows the success notification, then
//! hides it after the toast duration. Each future is paired with a
//! `SubmissionHandle` that aborts it, so a torn-down page never sees a late
//! transition.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};

use crate::features::contact::types::*;
use crate::services::backend::SubmissionBackend;
use crate::services::timer::Timer;
use crate::{console_info, console_warn};

#[derive(Clone, PartialEq, Debug)]
pub enum LifecycleOutcome {
    Completed,
    Failed(String),
    Cancelled,
}

/// Cancellation token for a running lifecycle
#[derive(Clone, Debug)]
pub struct SubmissionHandle {
    abort: AbortHandle,
}

impl SubmissionHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// The lifecycle a mounted form is currently running, if any.
///
/// Each tracked handle gets a generation so a finished lifecycle only clears
/// its own entry, never a newer one.
#[derive(Clone, Default, Debug)]
pub struct PendingSubmission {
    slot: Rc<RefCell<Option<(u64, SubmissionHandle)>>>,
    generation: Rc<Cell<u64>>,
}

impl PendingSubmission {
    /// Tracks `handle`, cancelling whatever was tracked before
    pub fn track(&self, handle: SubmissionHandle) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        if let Some((_, previous)) = self.slot.borrow_mut().replace((generation, handle)) {
            previous.cancel();
        }
        generation
    }

    /// Forgets the handle of a lifecycle that ran to the end
    pub fn finish(&self, generation: u64) {
        let mut slot = self.slot.borrow_mut();
        if slot.as_ref().is_some_and(|(tracked, _)| *tracked == generation) {
            slot.take();
        }
    }

    /// Cancels the tracked lifecycle; returns whether one was running
    pub fn cancel(&self) -> bool {
        match self.slot.borrow_mut().take() {
            Some((_, handle)) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

pub async fn run_submission_lifecycle<B, T, D>(
    submission: ContactSubmission,
    backend: &B,
    timer: &T,
    toast_duration_ms: u32,
    dispatch: D,
) -> LifecycleOutcome
where
    B: SubmissionBackend + ?Sized,
    T: Timer + ?Sized,
    D: Fn(ContactAction),
{
    if let Err(e) = backend.deliver(&submission).await {
        console_warn!("[Lifecycle] Submission failed: {}", e);
        dispatch(ContactAction::SetSubmitError(Some(e.user_message())));
        dispatch(ContactAction::SetSubmission(SubmissionState::Idle));
        return LifecycleOutcome::Failed(e.to_string());
    }

    dispatch(ContactAction::ResetFields);
    dispatch(ContactAction::SetSubmission(SubmissionState::Succeeded));
    console_info!("[Lifecycle] Message sent, notification shown");

    timer.sleep_ms(toast_duration_ms).await;

    dispatch(ContactAction::SetSubmission(SubmissionState::Idle));
    LifecycleOutcome::Completed
}

/// Wraps a lifecycle so it can be aborted through the returned handle
pub fn abortable<F>(lifecycle: F) -> (impl Future<Output = LifecycleOutcome>, SubmissionHandle)
where
    F: Future<Output = LifecycleOutcome>,
{
    let (abort, registration) = AbortHandle::new_pair();
    let lifecycle = Abortable::new(lifecycle, registration);

    let future = async move {
        lifecycle.await.unwrap_or_else(|_| {
            console_info!("[Lifecycle] Cancelled before completion");
            LifecycleOutcome::Cancelled
        })
    };

    (future, SubmissionHandle { abort })
}
