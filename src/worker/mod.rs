mod harness;
mod report;
mod session;

pub use harness::HARNESS_FILENAME;
pub use report::{ExecReport, RawFrame};
pub use session::{ExecutionOutcome, WorkerConfig, WorkerError, WorkerSession, DEFAULT_DEADLINE};
