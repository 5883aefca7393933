use wb_core::{ClockState, JobId};

#[derive(Debug, Clone)]
pub enum WbEvent {
    Tick {
        job_id: JobId,
        state: ClockState,
    },
}
