use thiserror::Error;

use crate::job::JobId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Total countdown window must be positive, got {0}ms")]
    InvalidWindow(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Job field '{0}' is required")]
    MissingField(&'static str),
    #[error("No job with id {0}")]
    UnknownJob(JobId),
    #[error("Listing {0} has expired")]
    ListingExpired(JobId),
    #[error("Already applied to job {0}")]
    AlreadyApplied(JobId),
}
