//! scriptmedic: brute-force repair for Python snippets that refuse to run.
//!
//! The tool executes a candidate script inside a fresh, killable child
//! interpreter, reads back a structured failure report, and blanks exactly
//! one offending line per turn — in the candidate itself, or in a
//! collaborating file the error propagated through — until the script runs
//! cleanly or nothing runnable is left.

pub mod repair;
pub mod trace;
pub mod worker;

pub use repair::RepairDriver;
pub use worker::WorkerConfig;
