//! Fixed-delay timers for the submission lifecycle

use async_trait::async_trait;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::{sleep, Duration};

/// Suspends the current task without blocking the event loop
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep_ms(&self, ms: u32);
}

/// Browser timer backed by `setTimeout`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep_ms(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

/// Tokio timer for native targets and tests
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep_ms(&self, ms: u32) {
        sleep(Duration::from_millis(u64::from(ms))).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformTimer = BrowserTimer;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTimer = TokioTimer;
