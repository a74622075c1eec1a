use std::path::PathBuf;

use log::{info, warn};

use crate::worker::{WorkerConfig, WorkerSession};

use super::candidate::Candidate;
use super::patch;
use super::strategy::{decide, RepairAction};

/// The top-level repair loop: execute, diagnose, mutate, repeat.
///
/// One child worker exists at a time; each turn tears it down (normally or
/// forcibly) before the next begins. The candidate is mutated only in
/// memory — external files named by the failure chain are the one documented
/// on-disk side effect.
pub struct RepairDriver {
    worker: WorkerSession,
    identity: PathBuf,
}

impl RepairDriver {
    pub fn new(identity: impl Into<PathBuf>, config: WorkerConfig) -> Self {
        let identity = identity.into();
        Self {
            worker: WorkerSession::new(identity.clone(), config),
            identity,
        }
    }

    /// Repair `text` until it executes cleanly or no runnable lines remain.
    /// Never fails: every fault is absorbed by a mutation or a stop.
    pub fn clean(&self, text: &str) -> String {
        let mut candidate = Candidate::new(text, &self.identity);

        while !candidate.is_empty() {
            if candidate.is_exhausted() {
                // Only blank lines left, nothing more to try.
                break;
            }

            let outcome = match self.worker.execute(&candidate.join()) {
                Ok(outcome) => outcome,
                Err(err) => {
                    // Same recovery as a hang: assume the unrunnable tail.
                    warn!("worker could not run ({err}); removing last line");
                    candidate.drop_last_line();
                    continue;
                }
            };

            match decide(&outcome, candidate.identity()) {
                RepairAction::Stop => {
                    info!("candidate runs cleanly");
                    break;
                }
                RepairAction::DropLastLine => {
                    info!("execution timeout, removing last line");
                    candidate.drop_last_line();
                }
                RepairAction::BlankCandidateLine(line) => {
                    info!("resolving error on line {line}");
                    candidate.blank_line(line);
                }
                RepairAction::BlankExternalLine(path, line) => {
                    info!("correcting {}", path.display());
                    if let Err(err) = patch::blank_file_line(&path, line) {
                        warn!("skipping correction of {}: {err}", path.display());
                    }
                }
            }
        }

        candidate.into_text()
    }
}
