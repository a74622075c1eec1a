use std::path::{Path, PathBuf};

use crate::trace::{classify, FrameOrigin, TraceFrame};
use crate::worker::ExecutionOutcome;

/// The single mutation chosen for one execution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairAction {
    /// Nothing left to fix; keep the current text.
    Stop,
    /// Truncate the candidate by its final line (timeout fallback).
    DropLastLine,
    /// Blank the 1-indexed line in the in-memory candidate.
    BlankCandidateLine(usize),
    /// Blank the 1-indexed line in a collaborating file on disk.
    BlankExternalLine(PathBuf, usize),
}

/// Map one execution outcome to the mutation to apply next.
///
/// A timeout truncates: an endless loop is assumed to live in trailing,
/// not-yet-validated code. A failure is scanned innermost-first after engine
/// frames are filtered out; the first frame naming an existing external file
/// wins, otherwise the first candidate frame. An empty filtered chain means
/// the fault lies outside user code entirely, which counts as done.
pub fn decide(outcome: &ExecutionOutcome, identity: &Path) -> RepairAction {
    match outcome {
        ExecutionOutcome::Success => RepairAction::Stop,
        ExecutionOutcome::TimedOut => RepairAction::DropLastLine,
        ExecutionOutcome::Failed(frames) => {
            let chain = classify(frames, identity);
            select_frame(&chain, identity)
        }
    }
}

fn select_frame(chain: &[TraceFrame], identity: &Path) -> RepairAction {
    for frame in chain.iter().rev() {
        match &frame.origin {
            FrameOrigin::External(path) => {
                if path != identity && path.is_file() {
                    return RepairAction::BlankExternalLine(path.clone(), frame.line);
                }
                // Pseudo-files such as frozen importlib frames carry no
                // editable line; keep scanning outward.
            }
            FrameOrigin::Candidate => return RepairAction::BlankCandidateLine(frame.line),
        }
    }
    RepairAction::Stop
}
