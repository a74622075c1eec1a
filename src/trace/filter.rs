use std::path::{Path, PathBuf};

use crate::worker::{RawFrame, HARNESS_FILENAME};

use super::types::{FrameOrigin, TraceFrame};

/// Classify raw worker frames against the candidate's identity.
///
/// Frames naming the harness's own location are engine machinery, not user
/// code; they are dropped here and never reach the repair strategy. Retained
/// frames keep their oldest-first order.
pub fn classify(frames: &[RawFrame], identity: &Path) -> Vec<TraceFrame> {
    frames
        .iter()
        .filter_map(|frame| {
            if frame.file == HARNESS_FILENAME {
                return None;
            }
            let origin = if Path::new(&frame.file) == identity {
                FrameOrigin::Candidate
            } else {
                FrameOrigin::External(PathBuf::from(&frame.file))
            };
            Some(TraceFrame {
                origin,
                line: frame.line,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(file: &str, line: usize) -> RawFrame {
        RawFrame {
            file: file.to_string(),
            line,
        }
    }

    #[test]
    fn engine_frames_never_leak() {
        let identity = Path::new("/tmp/candidate.py");
        let chain = classify(
            &[frame("<string>", 14), frame("/tmp/candidate.py", 2)],
            identity,
        );
        assert_eq!(
            chain,
            vec![TraceFrame {
                origin: FrameOrigin::Candidate,
                line: 2
            }]
        );
    }

    #[test]
    fn other_files_are_external() {
        let identity = Path::new("/tmp/candidate.py");
        let chain = classify(&[frame("/tmp/helper.py", 10)], identity);
        assert_eq!(
            chain,
            vec![TraceFrame {
                origin: FrameOrigin::External(PathBuf::from("/tmp/helper.py")),
                line: 10
            }]
        );
    }

    #[test]
    fn order_is_preserved_among_retained_frames() {
        let identity = Path::new("/tmp/candidate.py");
        let chain = classify(
            &[
                frame("<string>", 14),
                frame("/tmp/candidate.py", 1),
                frame("<frozen importlib._bootstrap>", 1007),
                frame("/tmp/helper.py", 10),
            ],
            identity,
        );
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].origin, FrameOrigin::Candidate);
        assert_eq!(
            chain[1].origin,
            FrameOrigin::External(PathBuf::from("<frozen importlib._bootstrap>"))
        );
        assert_eq!(
            chain[2].origin,
            FrameOrigin::External(PathBuf::from("/tmp/helper.py"))
        );
    }

    #[test]
    fn engine_only_chain_filters_to_empty() {
        let identity = Path::new("/tmp/candidate.py");
        assert!(classify(&[frame("<string>", 14)], identity).is_empty());
    }
}
