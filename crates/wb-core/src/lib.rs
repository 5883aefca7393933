pub mod board;
pub mod category;
pub mod clock;
pub mod error;
pub mod filter;
pub mod job;
pub mod money;
pub mod source;
pub mod ticker;

pub use board::{BoardStats, CustomerBoard, JobDraft, WorkerBoard};
pub use category::Category;
pub use clock::{
    ClockState, ExpiryClock, ManualTimeSource, SystemTimeSource, TimeSource, Urgency,
};
pub use error::{BoardError, ClockError};
pub use filter::{filter_jobs, CategoryFilter, JobFilter};
pub use job::{Application, ApplicationStatus, JobId, JobRecord, JobStatus};
pub use source::{JobSource, MockJobSource};
pub use ticker::ClockTicker;
