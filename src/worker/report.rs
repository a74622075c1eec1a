use serde::Deserialize;

/// One-shot report written by the harness before the child exits.
///
/// `frames: None` means the candidate ran to completion. A missing or
/// unparsable report after a normal exit is treated the same way by the
/// session: a child that died without reporting (hard crash, `os._exit`)
/// has nothing attributable to repair.
#[derive(Debug, Deserialize)]
pub struct ExecReport {
    pub frames: Option<Vec<RawFrame>>,
}

/// One traceback frame as serialized by the harness, oldest call first in
/// the surrounding chain. `file` is whatever the interpreter recorded:
/// the candidate's identity path, a real file, or a pseudo-filename like
/// `<string>` or `<frozen importlib._bootstrap>`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawFrame {
    pub file: String,
    pub line: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_run_has_no_frames() {
        let report: ExecReport = serde_json::from_str(r#"{"frames": null}"#).unwrap();
        assert!(report.frames.is_none());
    }

    #[test]
    fn failure_frames_keep_order() {
        let raw = r#"{"frames": [
            {"file": "<string>", "line": 12},
            {"file": "/tmp/candidate.py", "line": 2},
            {"file": "/tmp/helper.py", "line": 10}
        ]}"#;
        let report: ExecReport = serde_json::from_str(raw).unwrap();
        let frames = report.frames.unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].file, "<string>");
        assert_eq!(frames[2], RawFrame { file: "/tmp/helper.py".into(), line: 10 });
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(serde_json::from_str::<ExecReport>("not json").is_err());
    }
}
