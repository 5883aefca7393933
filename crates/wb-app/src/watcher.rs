use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use wb_core::{ClockError, ClockTicker, ExpiryClock, JobId, JobRecord, TimeSource};

use crate::events::WbEvent;

/// One countdown ticker per displayed listing, all reporting into a single event channel
pub struct ListingWatcher {
    window_ms: i64,
    period: Duration,
    events: UnboundedSender<WbEvent>,
    tickers: HashMap<JobId, ClockTicker>,
}

impl ListingWatcher {
    pub fn new(window_ms: i64, period: Duration, events: UnboundedSender<WbEvent>) -> Self {
        Self {
            window_ms,
            period,
            events,
            tickers: HashMap::new(),
        }
    }

    /// Starts a countdown for `job`, replacing any previous one for the same id
    pub fn watch<T>(&mut self, job: &JobRecord, time: T) -> Result<(), ClockError>
    where
        T: TimeSource + 'static,
    {
        let clock = ExpiryClock::for_job(job, self.window_ms, time)?;
        let events = self.events.clone();
        let job_id = job.id;

        let ticker = ClockTicker::start(clock, self.period, move |state| {
            // Receiver gone means the app is shutting down
            let _ = events.send(WbEvent::Tick { job_id, state });
        });

        debug!(%job_id, title = %job.title, "Watching listing");
        self.tickers.insert(job_id, ticker);
        Ok(())
    }

    pub fn unwatch(&mut self, job_id: JobId) -> bool {
        self.tickers.remove(&job_id).is_some()
    }

    pub fn is_watching(&self, job_id: JobId) -> bool {
        self.tickers.contains_key(&job_id)
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    pub fn stop_all(&mut self) {
        for ticker in self.tickers.values_mut() {
            ticker.stop();
        }
        self.tickers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::sleep;
    use wb_core::{ManualTimeSource, Urgency};

    const NOW: i64 = 1_700_000_000_000;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_reach_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut watcher = ListingWatcher::new(1_200_000, Duration::from_secs(1), tx);
        let time = ManualTimeSource::new(NOW);
        let job = JobRecord::new("Kitchen Plumbing Repair", "", "Plumbing", NOW + 600_000);

        watcher.watch(&job, time).unwrap();
        assert!(watcher.is_watching(job.id));

        let WbEvent::Tick { job_id, state } = rx.recv().await.unwrap();
        assert_eq!(job_id, job.id);
        assert_eq!(state.urgency, Urgency::Caution);
        assert_eq!(state.remaining_ms, 600_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unwatch_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut watcher = ListingWatcher::new(1_200_000, Duration::from_secs(1), tx);
        let job = JobRecord::new("Wedding Photography", "", "Photography", NOW + 60_000);

        watcher.watch(&job, ManualTimeSource::new(NOW)).unwrap();
        sleep(Duration::from_millis(1_500)).await;
        assert!(watcher.unwatch(job.id));
        assert!(watcher.is_empty());

        while rx.try_recv().is_ok() {}
        sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejects_invalid_window() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut watcher = ListingWatcher::new(0, Duration::from_secs(1), tx);
        let job = JobRecord::new("t", "d", "c", NOW);

        let err = watcher.watch(&job, ManualTimeSource::new(NOW)).unwrap_err();
        assert_eq!(err, ClockError::InvalidWindow(0));
        assert!(watcher.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rewatch_replaces_ticker() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut watcher = ListingWatcher::new(1_200_000, Duration::from_secs(1), tx);
        let job = JobRecord::new("Bathroom Pipe Repair", "", "Plumbing", NOW + 600_000);

        watcher.watch(&job, ManualTimeSource::new(NOW)).unwrap();
        sleep(Duration::from_millis(1_500)).await;

        watcher.watch(&job, ManualTimeSource::new(NOW + 10_000)).unwrap();
        assert_eq!(watcher.len(), 1);
        while rx.try_recv().is_ok() {}

        sleep(Duration::from_millis(3_500)).await;
        let mut remaining = Vec::new();
        while let Ok(WbEvent::Tick { state, .. }) = rx.try_recv() {
            remaining.push(state.remaining_ms);
        }
        assert!(!remaining.is_empty());
        assert!(remaining.iter().all(|&ms| ms == 590_000), "{:?}", remaining);
    }
}
