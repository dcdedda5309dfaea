//! XOR checksum over the frame body.
//!
//! The checksum covers bytes 2..88 of the packed frame, so the status and
//! transaction id bytes are deliberately excluded and the device may
//! rewrite them without invalidating the frame.

use super::constants::{CHECKSUM_END, CHECKSUM_START, REPORT_LEN};
use super::report::Report;

/// XOR of the checksummed region of a packed frame.
pub fn compute(frame: &[u8; REPORT_LEN]) -> u8 {
    frame[CHECKSUM_START..CHECKSUM_END]
        .iter()
        .fold(0, |acc, &b| acc ^ b)
}

/// Whether a report's stored checksum matches its contents.
pub fn validate(report: &Report) -> bool {
    compute(&report.pack()) == report.checksum
}
