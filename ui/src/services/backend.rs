//! Submission backends
//!
//! The page never talks to a real form service. `SimulatedBackend` stands in
//! for one: it logs the JSON body a service would receive, waits a fixed
//! delay and reports success. A real integration implements
//! `SubmissionBackend` with a POST of that body and maps non-success
//! responses to `ContactError::Submission`.

use async_trait::async_trait;

use crate::console_info;
use crate::features::contact::ContactSubmission;
use crate::services::errors::ContactResult;
use crate::services::timer::Timer;

#[async_trait(?Send)]
pub trait SubmissionBackend {
    async fn deliver(&self, submission: &ContactSubmission) -> ContactResult<()>;
}

pub struct SimulatedBackend<T: Timer> {
    timer: T,
    delay_ms: u32,
}

impl<T: Timer> SimulatedBackend<T> {
    pub fn new(timer: T, delay_ms: u32) -> Self {
        Self { timer, delay_ms }
    }
}

#[async_trait(?Send)]
impl<T: Timer> SubmissionBackend for SimulatedBackend<T> {
    async fn deliver(&self, submission: &ContactSubmission) -> ContactResult<()> {
        let body = serde_json::to_string(submission)?;
        console_info!(
            "[SimulatedBackend] Sending {} byte body, responding in {}ms",
            body.len(),
            self.delay_ms
        );

        self.timer.sleep_ms(self.delay_ms).await;
        Ok(())
    }
}
