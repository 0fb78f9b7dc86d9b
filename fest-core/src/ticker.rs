//! Recurring countdown evaluation tied to the lifetime of a handle.

use chrono::{Duration, Local, NaiveDateTime};
use tokio::task::JoinHandle;

use crate::countdown::{self, CountdownState};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Re-evaluates a countdown on a fixed period until stopped.
///
/// The task is aborted when the ticker is stopped or dropped, so a
/// ticker can't outlive the view that owns it.
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the ticker on the current tokio runtime. `on_tick` runs once
    /// immediately and then every `period`.
    pub fn start<C, F>(
        clock: C,
        target: NaiveDateTime,
        duration: Duration,
        period: std::time::Duration,
        mut on_tick: F,
    ) -> Ticker
    where
        C: Clock + 'static,
        F: FnMut(CountdownState) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                on_tick(countdown::classify(clock.now(), target, duration));
            }
        });

        Ticker { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
