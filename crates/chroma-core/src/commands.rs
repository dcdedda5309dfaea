//! Command encoders.
//!
//! Each encoder is a pure constructor: it returns an unchecksummed request
//! report for the dispatcher to stamp and send. The argument buffer carries
//! exactly the command payload from offset 0; bytes past `data_size` stay
//! zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatch::ProtocolError;
use crate::protocol::Report;
use crate::protocol::constants::{FIRMWARE_VERSION_DATA_SIZE, SERIAL_DATA_SIZE, class, cmd};

/// Whether a setting should survive power cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageTarget {
    /// Apply now, forget on power-down.
    #[default]
    NoStore,
    /// Write to on-device varstore.
    VarStore,
}

/// Addressable LED region on the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LedTarget {
    ScrollWheel,
    Battery,
    #[default]
    Logo,
    Backlight,
}

/// Built-in lighting effect codes for [`set_led_effect`].
pub mod effect {
    pub const STATIC: u8 = 0x00;
    pub const BLINKING: u8 = 0x01;
    pub const BREATHING: u8 = 0x02;
    pub const SPECTRUM: u8 = 0x04;
}

/// Turn an LED on or off.
pub fn set_led_state(storage: StorageTarget, led: LedTarget, on: bool) -> Report {
    debug!(?storage, ?led, on, "encoding led state");
    let mut report = Report::request(class::LED, cmd::SET_LED_STATE, 1);
    report.arguments[0] = on as u8;
    report
}

/// Set an LED's static color. `rgb` must be exactly three bytes; anything
/// else is rejected before a frame is ever built.
pub fn set_led_rgb(
    storage: StorageTarget,
    led: LedTarget,
    rgb: &[u8],
) -> Result<Report, ProtocolError> {
    if rgb.len() != 3 {
        return Err(ProtocolError::InvalidArgument(format!(
            "rgb payload must be 3 bytes, got {}",
            rgb.len()
        )));
    }
    debug!(?storage, ?led, r = rgb[0], g = rgb[1], b = rgb[2], "encoding led rgb");
    let mut report = Report::request(class::LED, cmd::SET_LED_RGB, 3);
    report.arguments[..3].copy_from_slice(rgb);
    Ok(report)
}

/// Select a built-in lighting effect (see [`effect`]).
pub fn set_led_effect(storage: StorageTarget, led: LedTarget, effect: u8) -> Report {
    debug!(?storage, ?led, effect, "encoding led effect");
    let mut report = Report::request(class::LED, cmd::SET_LED_EFFECT, 1);
    report.arguments[0] = effect;
    report
}

/// Set an LED's brightness (0x00..=0xFF).
pub fn set_led_brightness(storage: StorageTarget, led: LedTarget, value: u8) -> Report {
    debug!(?storage, ?led, value, "encoding led brightness");
    let mut report = Report::request(class::LED, cmd::SET_LED_BRIGHTNESS, 1);
    report.arguments[0] = value;
    report
}

/// Query firmware version; the response carries major/minor in its first
/// two argument bytes.
pub fn get_firmware_version() -> Report {
    Report::request(class::DEVICE, cmd::GET_FIRMWARE_VERSION, FIRMWARE_VERSION_DATA_SIZE)
}

/// Query the device serial; the response carries an ASCII string.
pub fn get_serial() -> Report {
    Report::request(class::DEVICE, cmd::GET_SERIAL, SERIAL_DATA_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::{ARGUMENTS_OFFSET, CHECKSUM_OFFSET, DATA_SIZE_OFFSET};
    use crate::protocol::{Direction, Status};

    #[test]
    fn test_effect_frame_layout() {
        let report = set_led_effect(StorageTarget::VarStore, LedTarget::Logo, effect::SPECTRUM);
        assert_eq!(report.status, Status::NewCommand);
        assert_eq!(report.command_class, class::LED);
        assert_eq!(report.command_id.raw(), cmd::SET_LED_EFFECT);

        let frame = report.pack();
        assert_eq!(frame[DATA_SIZE_OFFSET], 1);
        assert_eq!(frame[ARGUMENTS_OFFSET], effect::SPECTRUM);
        assert!(frame[ARGUMENTS_OFFSET + 1..CHECKSUM_OFFSET].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rgb_frame_layout() {
        let report =
            set_led_rgb(StorageTarget::NoStore, LedTarget::Logo, &[0xFF, 0x00, 0x80]).unwrap();
        assert_eq!(report.data_size, 3);
        assert_eq!(&report.arguments[..3], &[0xFF, 0x00, 0x80]);
        assert!(report.arguments[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rgb_rejects_wrong_payload_length() {
        for bad in [&[][..], &[1][..], &[1, 2][..], &[1, 2, 3, 4][..]] {
            let err = set_led_rgb(StorageTarget::NoStore, LedTarget::Logo, bad).unwrap_err();
            assert!(matches!(err, ProtocolError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_led_state_payload() {
        let on = set_led_state(StorageTarget::NoStore, LedTarget::Backlight, true);
        assert_eq!(on.arguments[0], 1);
        let off = set_led_state(StorageTarget::NoStore, LedTarget::Backlight, false);
        assert_eq!(off.arguments[0], 0);
    }

    #[test]
    fn test_query_commands_are_device_to_host() {
        assert_eq!(get_firmware_version().command_id.direction(), Direction::DeviceToHost);
        assert_eq!(get_serial().command_id.direction(), Direction::DeviceToHost);
        assert_eq!(get_serial().data_size, SERIAL_DATA_SIZE);
    }

    #[test]
    fn test_encoders_leave_checksum_unstamped() {
        let report = set_led_brightness(StorageTarget::NoStore, LedTarget::Logo, 0x7F);
        assert_eq!(report.checksum, 0);
    }
}
