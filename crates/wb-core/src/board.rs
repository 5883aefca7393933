use log::info;

use crate::clock::DEFAULT_WINDOW_MS;
use crate::error::{BoardError, ClockError};
use crate::filter::JobFilter;
use crate::job::{Application, ApplicationStatus, JobId, JobRecord, JobStatus};

/// Form input for a new job posting
#[derive(Debug, Clone, Default)]
pub struct JobDraft {
    pub title: String,
    pub budget: Option<u64>,
    pub location: String,
    pub duration: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub applicants: u32,
}

/// Jobs posted by one customer, newest first
#[derive(Debug, Clone)]
pub struct CustomerBoard {
    jobs: Vec<JobRecord>,
    listing_window_ms: i64,
}

impl Default for CustomerBoard {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CustomerBoard {
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        Self {
            jobs,
            listing_window_ms: DEFAULT_WINDOW_MS,
        }
    }

    /// How long new postings stay open; must be positive
    pub fn with_listing_window(mut self, window_ms: i64) -> Result<Self, ClockError> {
        if window_ms <= 0 {
            return Err(ClockError::InvalidWindow(window_ms));
        }
        self.listing_window_ms = window_ms;
        Ok(self)
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Posts a new job at the front of the board. Title, budget and description are required.
    pub fn post_job(&mut self, draft: JobDraft, now: i64) -> Result<&JobRecord, BoardError> {
        if draft.title.trim().is_empty() {
            return Err(BoardError::MissingField("title"));
        }
        let budget = draft.budget.ok_or(BoardError::MissingField("budget"))?;
        if draft.description.trim().is_empty() {
            return Err(BoardError::MissingField("description"));
        }

        let job = JobRecord::new(
            draft.title,
            draft.description,
            draft.category,
            now.saturating_add(self.listing_window_ms),
        )
        .with_budget(budget)
        .with_location(draft.location)
        .with_duration(draft.duration);

        info!("Posted job {} '{}'", job.id, job.title);
        self.jobs.insert(0, job);
        Ok(&self.jobs[0])
    }

    pub fn set_status(&mut self, id: JobId, status: JobStatus) -> Result<(), BoardError> {
        let job = self
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(BoardError::UnknownJob(id))?;
        job.status = status;
        Ok(())
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            total: self.jobs.len(),
            active: self.jobs.iter().filter(|j| j.status.is_active()).count(),
            completed: self.jobs.iter().filter(|j| j.status.is_complete()).count(),
            applicants: self.jobs.iter().map(|j| j.applicants).sum(),
        }
    }
}

/// Listings visible to a worker plus the applications they have made
#[derive(Debug, Clone, Default)]
pub struct WorkerBoard {
    available: Vec<JobRecord>,
    applications: Vec<Application>,
}

impl WorkerBoard {
    pub fn new(available: Vec<JobRecord>) -> Self {
        Self {
            available,
            applications: Vec::new(),
        }
    }

    /// Starts from applications made earlier, newest first
    pub fn with_applications(mut self, applications: Vec<Application>) -> Self {
        self.applications = applications;
        self
    }

    pub fn available(&self) -> &[JobRecord] {
        &self.available
    }

    pub fn browse<'a>(&'a self, filter: &'a JobFilter) -> Vec<&'a JobRecord> {
        filter.apply(&self.available).collect()
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn has_applied(&self, id: JobId) -> bool {
        self.applications.iter().any(|a| a.job_id == id)
    }

    /// Applies to an open listing. Expired listings and repeat applications are refused.
    pub fn apply(&mut self, id: JobId, now: i64) -> Result<&Application, BoardError> {
        if self.has_applied(id) {
            return Err(BoardError::AlreadyApplied(id));
        }

        let job = self
            .available
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(BoardError::UnknownJob(id))?;
        if job.is_expired_at(now) {
            return Err(BoardError::ListingExpired(id));
        }

        job.applicants += 1;
        info!("Applied to job {} '{}'", job.id, job.title);
        self.applications.insert(0, Application::for_job(job, now));
        Ok(&self.applications[0])
    }

    pub fn set_application_status(
        &mut self,
        id: JobId,
        status: ApplicationStatus,
    ) -> Result<(), BoardError> {
        let application = self
            .applications
            .iter_mut()
            .find(|a| a.job_id == id)
            .ok_or(BoardError::UnknownJob(id))?;
        application.status = status;
        Ok(())
    }
}
