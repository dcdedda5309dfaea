//! Request/response dispatcher.
//!
//! One call to [`send`] performs exactly one exchange: stamp the checksum,
//! write the frame, sleep for the device's wait interval, read the response,
//! then validate it before interpreting the status byte. There are no
//! retries at this layer.

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::protocol::constants::REPORT_LEN;
use crate::protocol::{Report, Status, checksum};
use crate::timing;
use crate::transport::{TransportError, UsbTransport};

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("response checksum mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    BadChecksum { expected: u8, actual: u8 },

    #[error(
        "response does not match request: sent class=0x{:02X} id={}, got class=0x{:02X} id={}",
        .request.command_class, .request.command_id,
        .response.command_class, .response.command_id
    )]
    Mismatch { request: Report, response: Report },

    #[error("device reported failure for class=0x{:02X} id={}", .0.command_class, .0.command_id)]
    CommandFailed(Report),

    #[error("device does not support class=0x{:02X} id={}", .0.command_class, .0.command_id)]
    Unsupported(Report),

    #[error("device timed out handling class=0x{:02X} id={}", .0.command_class, .0.command_id)]
    DeviceTimeout(Report),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Send one request and interpret the device's response.
///
/// The wait between write and readback comes from the transport's product
/// id (wireless receivers need far longer than wired mice). A `Busy`
/// status is passed through as success, matching the shipped vendor
/// driver; callers that care can inspect `response.status`.
#[instrument(
    skip(transport, request),
    fields(class = request.command_class, id = %request.command_id)
)]
pub fn send<T: UsbTransport>(transport: &T, mut request: Report) -> Result<Report, ProtocolError> {
    request.set_checksum();

    let wait = timing::wait_interval_for(transport.product_id());
    let raw = transport.round_trip(&request.pack(), wait)?;

    let response = Report::unpack(&raw).map_err(|_| TransportError::ShortTransfer {
        expected: REPORT_LEN,
        actual: raw.len(),
    })?;

    let expected = checksum::compute(&response.pack());
    if expected != response.checksum {
        return Err(ProtocolError::BadChecksum {
            expected,
            actual: response.checksum,
        });
    }

    if response.remaining_packets != request.remaining_packets
        || response.command_class != request.command_class
        || response.command_id != request.command_id
    {
        return Err(ProtocolError::Mismatch { request, response });
    }

    match response.status {
        Status::CommandFailure => Err(ProtocolError::CommandFailed(response)),
        Status::NotSupported => Err(ProtocolError::Unsupported(response)),
        Status::Timeout => Err(ProtocolError::DeviceTimeout(response)),
        Status::Busy => {
            warn!("device busy, treating response as success");
            Ok(response)
        }
        status => {
            debug!(%status, "exchange complete");
            Ok(response)
        }
    }
}
