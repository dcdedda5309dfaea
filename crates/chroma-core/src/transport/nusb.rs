//! nusb-based USB transport implementation.
//!
//! Frames travel as HID feature reports over the control endpoint:
//! SET_REPORT carries the request out, GET_REPORT pulls the response back.

use nusb::transfer::{ControlIn, ControlOut, ControlType, Recipient};
use nusb::{Interface, MaybeFuture, list_devices};
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::traits::{TransportError, UsbTransport};
use crate::devices;
use crate::protocol::constants::{
    HID_FEATURE_REPORT_0, HID_REQ_GET_REPORT, HID_REQ_SET_REPORT, RAZER_VENDOR_ID, REPORT_INDEX,
    REPORT_LEN,
};

const CONTROL_TIMEOUT: Duration = Duration::from_millis(1000);

/// nusb-based USB transport.
pub struct NusbTransport {
    interface: Interface,
    vid: u16,
    pid: u16,
}

impl NusbTransport {
    /// Open the first recognized mouse on the bus.
    #[instrument(level = "info")]
    pub fn open() -> Result<Self, TransportError> {
        let devices = list_devices()
            .wait()
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?;

        for device_info in devices {
            if device_info.vendor_id() == RAZER_VENDOR_ID
                && devices::is_known(device_info.product_id())
            {
                return Self::open_device_info(device_info);
            }
        }

        Err(TransportError::DeviceNotFound {
            vid: RAZER_VENDOR_ID,
            pid: 0,
        })
    }

    /// Open a device with specific VID/PID.
    #[instrument(level = "info", fields(vid = format!("{:04X}", vid), pid = format!("{:04X}", pid)))]
    pub fn open_with_ids(vid: u16, pid: u16) -> Result<Self, TransportError> {
        let device_info = list_devices()
            .wait()
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?
            .find(|d| d.vendor_id() == vid && d.product_id() == pid)
            .ok_or(TransportError::DeviceNotFound { vid, pid })?;

        Self::open_device_info(device_info)
    }

    fn open_device_info(device_info: nusb::DeviceInfo) -> Result<Self, TransportError> {
        let vid = device_info.vendor_id();
        let pid = device_info.product_id();

        info!(
            vendor_id = %format!("{:04X}", vid),
            product_id = %format!("{:04X}", pid),
            name = devices::device_name(pid),
            "Found device"
        );

        let device = device_info
            .open()
            .wait()
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?;

        // Interface 0 is normally bound to the kernel HID driver.
        let interface = device
            .detach_and_claim_interface(REPORT_INDEX as u8)
            .wait()
            .map_err(|e| TransportError::ClaimInterfaceFailed {
                interface: REPORT_INDEX as u8,
                message: e.to_string(),
            })?;

        info!("Device opened successfully");

        Ok(Self {
            interface,
            vid,
            pid,
        })
    }
}

impl UsbTransport for NusbTransport {
    #[instrument(skip(self, frame), fields(len = frame.len()))]
    fn send_report(&self, frame: &[u8]) -> Result<(), TransportError> {
        self.interface
            .control_out(
                ControlOut {
                    control_type: ControlType::Class,
                    recipient: Recipient::Interface,
                    request: HID_REQ_SET_REPORT,
                    value: HID_FEATURE_REPORT_0,
                    index: REPORT_INDEX,
                    data: frame,
                },
                CONTROL_TIMEOUT,
            )
            .wait()
            .map_err(|e| TransportError::WriteFailed(e.to_string()))?;

        debug!(bytes_written = frame.len(), "SET_REPORT complete");
        Ok(())
    }

    #[instrument(skip(self))]
    fn read_report(&self) -> Result<Vec<u8>, TransportError> {
        let buf = self
            .interface
            .control_in(
                ControlIn {
                    control_type: ControlType::Class,
                    recipient: Recipient::Interface,
                    request: HID_REQ_GET_REPORT,
                    value: HID_FEATURE_REPORT_0,
                    index: REPORT_INDEX,
                    length: REPORT_LEN as u16,
                },
                CONTROL_TIMEOUT,
            )
            .wait()
            .map_err(|e| TransportError::ReadFailed(e.to_string()))?;

        debug!(bytes_read = buf.len(), "GET_REPORT complete");

        if buf.len() < REPORT_LEN {
            return Err(TransportError::ShortTransfer {
                expected: REPORT_LEN,
                actual: buf.len(),
            });
        }
        Ok(buf)
    }

    fn is_connected(&self) -> bool {
        // nusb doesn't provide a direct "is connected" check.
        // Failed transfers surface a disconnect soon enough.
        true
    }

    fn vendor_id(&self) -> u16 {
        self.vid
    }

    fn product_id(&self) -> u16 {
        self.pid
    }
}
