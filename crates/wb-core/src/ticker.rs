use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::clock::{ClockState, ExpiryClock, TimeSource};

/// Refresh cadence of listing countdowns
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Drives an [`ExpiryClock`] on a tokio interval.
///
/// The first tick fires immediately, then once per period. Ticking continues past expiry
/// until [`ClockTicker::stop`] is called or the ticker is dropped. Must be started from
/// within a tokio runtime.
pub struct ClockTicker {
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    pub fn start<T, F>(mut clock: ExpiryClock<T>, period: Duration, mut on_tick: F) -> Self
    where
        T: TimeSource + 'static,
        F: FnMut(ClockState) + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        debug!("Starting countdown ticker for expiry {} every {:?}", clock.expiry(), period);

        let handle = tokio::spawn(async move {
            let mut interval = interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                clock.tick();
                on_tick(clock.state());
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Stopped countdown ticker");
        }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
