use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use super::harness::HARNESS;
use super::report::{ExecReport, RawFrame};

/// Wall-clock budget for one execution attempt. Candidates are assumed to
/// contain endless loops until proven otherwise.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(300);

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
const INTERPRETER_ENV: &str = "SCRIPTMEDIC_PYTHON";

/// How one execution attempt ended. Exactly one variant per run; a worker
/// that could not be started at all surfaces as [`WorkerError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The candidate ran to completion without raising.
    Success,
    /// The child was still running at the deadline and was killed. Anything
    /// it may have reported right at the boundary is not trusted.
    TimedOut,
    /// The candidate raised; the chain is oldest call first, unfiltered.
    Failed(Vec<RawFrame>),
}

/// The isolation mechanism itself failed, before any verdict existed.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("could not create report channel: {0}")]
    Channel(io::Error),
    #[error("could not spawn `{interpreter}`: {source}")]
    Spawn {
        interpreter: String,
        source: io::Error,
    },
    #[error("lost contact with worker: {0}")]
    Wait(io::Error),
}

/// Interpreter command line and timing knobs for the worker.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub interpreter: Vec<String>,
    pub deadline: Duration,
    pub poll_interval: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            interpreter: vec!["python3".to_string()],
            deadline: DEFAULT_DEADLINE,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WorkerConfig {
    /// Default config, with the interpreter overridable through
    /// `SCRIPTMEDIC_PYTHON` (split shell-style, e.g. `"python3.12 -X utf8"`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(INTERPRETER_ENV) {
            if let Some(parts) = shlex::split(&raw) {
                if !parts.is_empty() {
                    config.interpreter = parts;
                }
            }
        }
        config
    }
}

/// Runs candidate text in a fresh, killable child interpreter, one child per
/// call. The child never sees the engine's own state: the candidate executes
/// inside the harness's minimal scope, and results come back only through a
/// single-use report file the parent reads after the child has exited.
pub struct WorkerSession {
    config: WorkerConfig,
    identity: PathBuf,
}

impl WorkerSession {
    pub fn new(identity: PathBuf, config: WorkerConfig) -> Self {
        Self { config, identity }
    }

    /// Execute `source` and report how it ended. Blocks, but only via bounded
    /// polling: the child is checked every `poll_interval` and killed once
    /// elapsed wall time exceeds `deadline`.
    pub fn execute(&self, source: &str) -> Result<ExecutionOutcome, WorkerError> {
        let report = tempfile::NamedTempFile::new().map_err(WorkerError::Channel)?;

        let (program, extra_args) = match self.config.interpreter.split_first() {
            Some((program, rest)) => (program.as_str(), rest),
            None => ("python3", &[][..]),
        };

        let mut child = Command::new(program)
            .args(extra_args)
            .arg("-c")
            .arg(HARNESS)
            .arg(report.path())
            .arg(&self.identity)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| WorkerError::Spawn {
                interpreter: program.to_string(),
                source,
            })?;

        // Feed the candidate and close stdin so the harness sees EOF. A write
        // failure here means the child already died; the report read below
        // settles what that means.
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(source.as_bytes());
        }

        let started = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    debug!("worker exited with {status}");
                    break;
                }
                Ok(None) => {}
                Err(err) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(WorkerError::Wait(err));
                }
            }
            if started.elapsed() > self.config.deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Ok(ExecutionOutcome::TimedOut);
            }
            thread::sleep(self.config.poll_interval);
        }

        let raw = fs::read_to_string(report.path()).unwrap_or_default();
        let outcome = match serde_json::from_str::<ExecReport>(&raw) {
            Ok(ExecReport {
                frames: Some(frames),
            }) => ExecutionOutcome::Failed(frames),
            // No frames, or nothing readable at all: the run left no
            // attributable fault behind.
            _ => ExecutionOutcome::Success,
        };
        Ok(outcome)
    }
}
