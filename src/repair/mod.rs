mod candidate;
mod driver;
mod patch;
mod strategy;

pub use candidate::Candidate;
pub use driver::RepairDriver;
pub use patch::{blank_file_line, PatchError};
pub use strategy::{decide, RepairAction};
