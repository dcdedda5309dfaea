//! USB transport layer abstraction.
//!
//! Defines the `UsbTransport` trait for feature-report exchange,
//! allowing different implementations (nusb, mock, etc.).

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Device not found: VID={vid:04X} PID={pid:04X}")]
    DeviceNotFound { vid: u16, pid: u16 },

    #[error("Failed to open device: {0}")]
    OpenFailed(String),

    #[error("Failed to claim interface {interface}: {message}")]
    ClaimInterfaceFailed { interface: u8, message: String },

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Short transfer: expected {expected} bytes, got {actual}")]
    ShortTransfer { expected: usize, actual: usize },

    #[error("Device disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract USB transport interface.
///
/// This trait enables:
/// - Production implementation using nusb control transfers
/// - Mock implementation for unit testing
/// - Future alternative backends
pub trait UsbTransport: Send + Sync {
    /// Send one packed request frame to the device.
    fn send_report(&self, frame: &[u8]) -> Result<(), TransportError>;

    /// Read back one response frame from the device.
    fn read_report(&self) -> Result<Vec<u8>, TransportError>;

    /// Send a request, pause while the firmware prepares its answer,
    /// then read the response.
    fn round_trip(&self, frame: &[u8], wait: Duration) -> Result<Vec<u8>, TransportError> {
        self.send_report(frame)?;
        std::thread::sleep(wait);
        self.read_report()
    }

    /// Check if device is still connected.
    fn is_connected(&self) -> bool;

    /// Get the current VID.
    fn vendor_id(&self) -> u16;

    /// Get the current PID.
    fn product_id(&self) -> u16;
}
