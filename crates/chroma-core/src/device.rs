//! High-level device handle.
//!
//! `ChromaDevice` owns one transport and a transaction id, and pairs each
//! command encoder with a single dispatched exchange. One in-flight request
//! per handle; callers wanting concurrency serialize above this layer.

use std::fmt;
use tracing::instrument;

use crate::commands::{self, LedTarget, StorageTarget};
use crate::devices;
use crate::dispatch::{self, ProtocolError};
use crate::protocol::Report;
use crate::protocol::constants::{DEFAULT_TRANSACTION_ID, RAZER_VENDOR_ID};
use crate::transport::{NusbTransport, TransportError, UsbTransport};

/// Firmware revision as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}

/// A handle to one mouse.
pub struct ChromaDevice<T: UsbTransport> {
    transport: T,
    transaction_id: u8,
}

impl ChromaDevice<NusbTransport> {
    /// Open the first recognized mouse on the bus.
    pub fn open() -> Result<Self, TransportError> {
        Ok(Self::new(NusbTransport::open()?))
    }

    /// Open a specific product.
    pub fn open_with_pid(pid: u16) -> Result<Self, TransportError> {
        Ok(Self::new(NusbTransport::open_with_ids(RAZER_VENDOR_ID, pid)?))
    }
}

impl<T: UsbTransport> ChromaDevice<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            transaction_id: DEFAULT_TRANSACTION_ID,
        }
    }

    /// Override the correlation byte stamped on outgoing requests.
    pub fn set_transaction_id(&mut self, id: u8) {
        self.transaction_id = id;
    }

    pub fn product_id(&self) -> u16 {
        self.transport.product_id()
    }

    /// Marketing name of the connected product.
    pub fn device_type(&self) -> &'static str {
        devices::device_name(self.transport.product_id())
    }

    fn exchange(&self, mut request: Report) -> Result<Report, ProtocolError> {
        request.transaction_id = self.transaction_id;
        dispatch::send(&self.transport, request)
    }

    #[instrument(skip(self))]
    pub fn set_led_state(
        &self,
        storage: StorageTarget,
        led: LedTarget,
        on: bool,
    ) -> Result<(), ProtocolError> {
        self.exchange(commands::set_led_state(storage, led, on))?;
        Ok(())
    }

    #[instrument(skip(self, rgb))]
    pub fn set_led_rgb(
        &self,
        storage: StorageTarget,
        led: LedTarget,
        rgb: &[u8],
    ) -> Result<(), ProtocolError> {
        self.exchange(commands::set_led_rgb(storage, led, rgb)?)?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn set_led_effect(
        &self,
        storage: StorageTarget,
        led: LedTarget,
        effect: u8,
    ) -> Result<(), ProtocolError> {
        self.exchange(commands::set_led_effect(storage, led, effect))?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn set_led_brightness(
        &self,
        storage: StorageTarget,
        led: LedTarget,
        value: u8,
    ) -> Result<(), ProtocolError> {
        self.exchange(commands::set_led_brightness(storage, led, value))?;
        Ok(())
    }

    /// Query the firmware revision.
    #[instrument(skip(self))]
    pub fn firmware_version(&self) -> Result<FirmwareVersion, ProtocolError> {
        let response = self.exchange(commands::get_firmware_version())?;
        Ok(FirmwareVersion {
            major: response.arguments[0],
            minor: response.arguments[1],
        })
    }

    /// Query the device serial string.
    #[instrument(skip(self))]
    pub fn serial(&self) -> Result<String, ProtocolError> {
        let response = self.exchange(commands::get_serial())?;
        let raw = response.payload();
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Status;
    use crate::protocol::constants::{SERIAL_DATA_SIZE, class, cmd, pid};
    use crate::transport::MockTransport;

    fn device_with_reply(mut reply: Report) -> ChromaDevice<MockTransport> {
        let mock = MockTransport::new();
        reply.status = Status::Successful;
        mock.queue_report(reply);
        ChromaDevice::new(mock)
    }

    #[test]
    fn test_transaction_id_stamped_on_requests() {
        let mut device = device_with_reply(Report::request(class::LED, cmd::SET_LED_EFFECT, 1));
        device.set_transaction_id(0x1F);
        device
            .set_led_effect(StorageTarget::NoStore, LedTarget::Logo, 0x04)
            .unwrap();

        let writes = device.transport.get_writes();
        let sent = Report::unpack(&writes[0]).unwrap();
        assert_eq!(sent.transaction_id, 0x1F);
    }

    #[test]
    fn test_firmware_version_parsing() {
        let mut reply = Report::request(class::DEVICE, cmd::GET_FIRMWARE_VERSION, 2);
        reply.arguments[0] = 1;
        reply.arguments[1] = 7;
        let device = device_with_reply(reply);

        let version = device.firmware_version().unwrap();
        assert_eq!(version, FirmwareVersion { major: 1, minor: 7 });
        assert_eq!(version.to_string(), "v1.7");
    }

    #[test]
    fn test_serial_parsing_stops_at_nul() {
        let mut reply = Report::request(class::DEVICE, cmd::GET_SERIAL, SERIAL_DATA_SIZE);
        reply.arguments[..6].copy_from_slice(b"PM1234");
        let device = device_with_reply(reply);

        assert_eq!(device.serial().unwrap(), "PM1234");
    }

    #[test]
    fn test_rgb_precondition_checked_before_transport() {
        let device = ChromaDevice::new(MockTransport::new());
        let err = device
            .set_led_rgb(StorageTarget::NoStore, LedTarget::Logo, &[1, 2])
            .unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidArgument(_)));
        assert!(device.transport.get_writes().is_empty());
    }

    #[test]
    fn test_device_type_lookup() {
        let mut mock = MockTransport::new();
        mock.set_ids(RAZER_VENDOR_ID, pid::BASILISK);
        let device = ChromaDevice::new(mock);
        assert_eq!(device.device_type(), "Razer Basilisk");
    }
}
