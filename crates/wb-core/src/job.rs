use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for JobId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Posted,
    InProgress,
    Completed,
}

impl JobStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Posted | Self::InProgress)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Posted => "posted",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            Self::Posted => "📢",
            Self::InProgress => "🔨",
            Self::Completed => "✅",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn icon(&self) -> &str {
        match self {
            Self::Pending => "⏳",
            Self::Accepted => "✅",
            Self::Rejected => "❌",
        }
    }
}

/// A posted job listing.
///
/// `expiry` is an absolute instant in epoch milliseconds, fixed when the record is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Whole rupees.
    pub budget: u64,
    pub location: String,
    pub duration: String,
    pub posted_by: Option<String>,
    pub rating: Option<f32>,
    pub applicants: u32,
    pub status: JobStatus,
    expiry: i64,
}

impl JobRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        expiry: i64,
    ) -> Self {
        Self {
            id: JobId::new(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            budget: 0,
            location: String::new(),
            duration: String::new(),
            posted_by: None,
            rating: None,
            applicants: 0,
            status: JobStatus::Posted,
            expiry,
        }
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn with_poster(mut self, name: impl Into<String>, rating: f32) -> Self {
        self.posted_by = Some(name.into());
        self.rating = Some(rating);
        self
    }

    pub fn with_applicants(mut self, applicants: u32) -> Self {
        self.applicants = applicants;
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn expiry(&self) -> i64 {
        self.expiry
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expiry
    }

    /// Copy whose expiry is shifted by `offset` ms; the id is kept
    pub(crate) fn shifted(&self, offset: i64) -> Self {
        Self {
            expiry: self.expiry.saturating_add(offset),
            ..self.clone()
        }
    }
}

/// A worker's application to a listing, with a snapshot of what they applied for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub job_id: JobId,
    pub title: String,
    pub category: String,
    pub budget: u64,
    pub status: ApplicationStatus,
    pub applied_at: i64,
}

impl Application {
    pub fn for_job(job: &JobRecord, applied_at: i64) -> Self {
        Self {
            job_id: job.id,
            title: job.title.clone(),
            category: job.category.clone(),
            budget: job.budget,
            status: ApplicationStatus::Pending,
            applied_at,
        }
    }
}
