//! Browser timer used for simulated latency.

use crate::core::auth::Delay;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;

/// [`Delay`] backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    async fn wait(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
