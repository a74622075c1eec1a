mod filter;
mod types;

pub use filter::classify;
pub use types::{FrameOrigin, TraceFrame};
