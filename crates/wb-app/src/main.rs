mod config;
mod error;
mod events;
mod watcher;

use std::collections::HashMap;

use anyhow::Context;
use chrono::{DateTime, Local, Utc};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use wb_core::money::format_inr;
use wb_core::source::worker_applications;
use wb_core::{
    CustomerBoard, JobFilter, JobId, JobRecord, JobSource, MockJobSource, SystemTimeSource,
    TimeSource, Urgency, WorkerBoard,
};

use crate::config::WbConfig;
use crate::events::WbEvent;
use crate::watcher::ListingWatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let conf = WbConfig::load().context("Failed to load configuration")?;
    info!(?conf, "Starting WorkBee listing watcher");

    let now = SystemTimeSource.now_millis();

    let customer = CustomerBoard::new(MockJobSource::customer_jobs().jobs(now));
    let stats = customer.stats();
    info!(
        total = stats.total,
        active = stats.active,
        completed = stats.completed,
        applicants = stats.applicants,
        "Customer board"
    );

    let mut listings = MockJobSource::featured().jobs(now);
    listings.extend(MockJobSource::worker_listings().jobs(now));
    let mut worker = WorkerBoard::new(listings).with_applications(worker_applications(now));
    for application in worker.applications() {
        info!(
            "Earlier application: '{}' {} {}",
            application.title,
            format_inr(application.budget),
            application.status.icon()
        );
    }

    let filter = JobFilter::new(&conf.query, conf.category.clone());
    let visible: Vec<JobRecord> = worker.browse(&filter).into_iter().cloned().collect();
    info!(
        query = %conf.query,
        category = %conf.category,
        shown = visible.len(),
        "Browsing listings"
    );
    for job in &visible {
        info!(
            "  [{}] {} | {} | {} | closes {}",
            job.category,
            job.title,
            format_inr(job.budget),
            job.location,
            local_time(job.expiry())
        );
    }

    if let Some(first) = visible.first() {
        match worker.apply(first.id, now) {
            Ok(application) => {
                info!("Applied to '{}' {}", application.title, application.status.icon())
            }
            Err(e) => warn!("Could not apply: {}", e),
        }
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut watcher = ListingWatcher::new(conf.window_ms, conf.tick_period, tx);
    for job in &visible {
        watcher
            .watch(job, SystemTimeSource)
            .with_context(|| format!("Failed to start countdown for '{}'", job.title))?;
    }

    let titles: HashMap<JobId, &str> = visible.iter().map(|j| (j.id, j.title.as_str())).collect();
    let mut bands: HashMap<JobId, Urgency> = HashMap::new();

    let deadline = tokio::time::sleep(conf.run_for);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            Some(event) = rx.recv() => match event {
                WbEvent::Tick { job_id, state } => {
                    let title = titles.get(&job_id).copied().unwrap_or("?");
                    debug!(%job_id, remaining_ms = state.remaining_ms, "{}: {}", title, state);
                    if bands.insert(job_id, state.urgency) != Some(state.urgency) {
                        info!(
                            "{}: {} ({:.0}%, {})",
                            title,
                            state,
                            state.percent_remaining,
                            state.urgency.color()
                        );
                    }
                }
            },
            _ = &mut deadline => {
                info!("Run time elapsed");
                break;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    let running = watcher.len();
    watcher.stop_all();
    info!("Stopped {} countdowns", running);
    Ok(())
}

fn local_time(epoch_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_ms)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| epoch_ms.to_string())
}
