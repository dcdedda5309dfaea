//! Wire protocol: frame layout, checksum, and shared constants.

pub mod checksum;
pub mod constants;
pub mod report;

pub use report::{CommandId, Direction, FrameError, Report, Status};
