use std::path::PathBuf;

/// Where a frame points, relative to the text under repair. Frames pointing
/// at the harness itself never get an origin: the filter drops them before
/// anything downstream can see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOrigin {
    /// The in-memory candidate itself (no file behind it).
    Candidate,
    /// Some other file — which may or may not exist on disk.
    External(PathBuf),
}

/// One attribution point along a failure's propagation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    pub origin: FrameOrigin,
    pub line: usize,
}
