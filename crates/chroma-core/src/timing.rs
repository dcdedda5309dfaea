//! Per-device response wait intervals.
//!
//! Most mice answer within well under a millisecond; the wireless
//! receivers need the firmware a full frame or two before the response
//! report is valid, so they get a much longer pause between the request
//! and the readback.

use std::time::Duration;

use crate::protocol::constants::pid;

/// Pause between request and response readback for ordinary devices.
pub const STANDARD_WAIT: Duration = Duration::from_micros(600);

/// Pause for wireless receivers and their wired counterparts.
pub const RECEIVER_WAIT: Duration = Duration::from_micros(31_000);

/// Product ids that require [`RECEIVER_WAIT`].
pub const LONG_WAIT_DEVICES: &[u16] = &[
    pid::LANCEHEAD_WIRELESS_RECEIVER,
    pid::LANCEHEAD_WIRELESS_WIRED,
    pid::MAMBA_WIRELESS_RECEIVER,
    pid::MAMBA_WIRELESS_WIRED,
];

/// Wait interval to apply before reading back a response.
pub fn wait_interval_for(product_id: u16) -> Duration {
    if LONG_WAIT_DEVICES.contains(&product_id) {
        RECEIVER_WAIT
    } else {
        STANDARD_WAIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receiver_devices_get_long_wait() {
        assert_eq!(wait_interval_for(pid::LANCEHEAD_WIRELESS_RECEIVER), RECEIVER_WAIT);
        assert_eq!(wait_interval_for(pid::LANCEHEAD_WIRELESS_WIRED), RECEIVER_WAIT);
        assert_eq!(wait_interval_for(pid::MAMBA_WIRELESS_RECEIVER), RECEIVER_WAIT);
        assert_eq!(wait_interval_for(pid::MAMBA_WIRELESS_WIRED), RECEIVER_WAIT);
    }

    #[test]
    fn test_ordinary_devices_get_standard_wait() {
        assert_eq!(wait_interval_for(pid::DEATHADDER_V2), STANDARD_WAIT);
        assert_eq!(wait_interval_for(pid::VIPER), STANDARD_WAIT);
    }

    #[test]
    fn test_unknown_device_gets_standard_wait() {
        assert_eq!(wait_interval_for(0xFFFF), STANDARD_WAIT);
    }
}
