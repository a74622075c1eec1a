use std::path::{Path, PathBuf};

/// The in-progress snippet, owned for the duration of one repair session.
///
/// Lines are kept split so that single-line mutations stay 1-indexed against
/// the numbers the worker reports.
#[derive(Debug, Clone)]
pub struct Candidate {
    lines: Vec<String>,
    identity: PathBuf,
}

impl Candidate {
    pub fn new(text: &str, identity: impl Into<PathBuf>) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            identity: identity.into(),
        }
    }

    /// The path the candidate is evaluated under. Frames reporting this path
    /// point back into the in-memory text, not at a file.
    pub fn identity(&self) -> &Path {
        &self.identity
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when nothing runnable is left: every line blank or whitespace.
    pub fn is_exhausted(&self) -> bool {
        !self.lines.iter().any(|line| !line.trim().is_empty())
    }

    pub fn join(&self) -> String {
        self.lines.join("\n")
    }

    /// Blank the 1-indexed `line`. Out-of-range numbers are ignored.
    pub fn blank_line(&mut self, line: usize) {
        if line >= 1 && line <= self.lines.len() {
            self.lines[line - 1].clear();
        }
    }

    pub fn drop_last_line(&mut self) {
        self.lines.pop();
    }

    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}
