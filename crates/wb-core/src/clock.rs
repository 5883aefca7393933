use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::error::ClockError;
use crate::job::JobRecord;

/// Default countdown window used for listing cards (20 minutes)
pub const DEFAULT_WINDOW_MS: i64 = 20 * 60 * 1000;

/// Source of the current instant in epoch milliseconds
pub trait TimeSource: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<F> TimeSource for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now_millis(&self) -> i64 {
        self()
    }
}

/// Settable instant; clones share the same value
#[derive(Debug, Clone, Default)]
pub struct ManualTimeSource {
    now: Arc<AtomicI64>,
}

impl ManualTimeSource {
    pub fn new(now: i64) -> Self {
        Self {
            now: Arc::new(AtomicI64::new(now)),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Urgency band of a countdown, ordered from most to least urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    Critical,
    Warning,
    Caution,
    Normal,
}

impl Urgency {
    pub fn from_percent(percent: f64) -> Self {
        if percent < 10.0 {
            Self::Critical
        } else if percent < 40.0 {
            Self::Warning
        } else if percent < 70.0 {
            Self::Caution
        } else {
            Self::Normal
        }
    }

    /// Progress bar colour
    pub fn color(&self) -> &str {
        match self {
            Self::Critical => "red",
            Self::Warning => "yellow",
            Self::Caution => "orange",
            Self::Normal => "green",
        }
    }
}

/// Snapshot of a clock after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockState {
    pub remaining_ms: i64,
    pub percent_remaining: f64,
    pub urgency: Urgency,
}

impl ClockState {
    pub fn is_expired(&self) -> bool {
        self.remaining_ms <= 0
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_expired() {
            f.write_str("Expired")
        } else {
            write!(f, "{} left", format_countdown(self.remaining_ms))
        }
    }
}

/// Countdown towards a fixed expiry instant.
///
/// The clock never reads the wall clock directly; every reading goes through the injected
/// [`TimeSource`]. `remaining_ms` is only refreshed by [`ExpiryClock::tick`], so all derived
/// values are stable between ticks.
#[derive(Debug, Clone)]
pub struct ExpiryClock<T: TimeSource = SystemTimeSource> {
    expiry: i64,
    total_window_ms: i64,
    remaining_ms: i64,
    time: T,
}

impl<T: TimeSource> ExpiryClock<T> {
    pub fn new(expiry: i64, total_window_ms: i64, time: T) -> Result<Self, ClockError> {
        if total_window_ms <= 0 {
            return Err(ClockError::InvalidWindow(total_window_ms));
        }

        let remaining_ms = expiry.saturating_sub(time.now_millis());
        Ok(Self {
            expiry,
            total_window_ms,
            remaining_ms,
            time,
        })
    }

    pub fn for_job(job: &JobRecord, total_window_ms: i64, time: T) -> Result<Self, ClockError> {
        Self::new(job.expiry(), total_window_ms, time)
    }

    /// Re-reads the time source and returns the new remaining time
    pub fn tick(&mut self) -> i64 {
        self.remaining_ms = self.expiry.saturating_sub(self.time.now_millis());
        self.remaining_ms
    }

    pub fn expiry(&self) -> i64 {
        self.expiry
    }

    pub fn total_window_ms(&self) -> i64 {
        self.total_window_ms
    }

    /// Raw remaining time, negative once the expiry has passed
    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    pub fn percent_remaining(&self) -> f64 {
        let percent = self.remaining_ms as f64 / self.total_window_ms as f64 * 100.0;
        percent.clamp(0.0, 100.0)
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::from_percent(self.percent_remaining())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms <= 0
    }

    /// `M:SS`, or `Expired` once nothing remains
    pub fn formatted_remaining(&self) -> String {
        if self.is_expired() {
            "Expired".to_string()
        } else {
            format_countdown(self.remaining_ms)
        }
    }

    pub fn state(&self) -> ClockState {
        ClockState {
            remaining_ms: self.remaining_ms,
            percent_remaining: self.percent_remaining(),
            urgency: self.urgency(),
        }
    }
}

fn format_countdown(remaining_ms: i64) -> String {
    let minutes = remaining_ms / 60_000;
    let seconds = (remaining_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}
