//! The fixed-length report frame exchanged in both directions.
//!
//! Serialization is explicit offset-based pack/unpack rather than a
//! memory-layout cast, so the checksum boundary and the trailing reserved
//! byte stay independently testable.

use byteorder::{BigEndian, ByteOrder};
use std::fmt;
use thiserror::Error;

use super::constants::*;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("frame too short: expected {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
}

/// Response result code.
///
/// Requests carry [`Status::NewCommand`]; the device overwrites the byte
/// in its response. Unknown codes are preserved rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NewCommand,
    Busy,
    Successful,
    CommandFailure,
    Timeout,
    NotSupported,
    Other(u8),
}

impl Status {
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            STATUS_NEW_COMMAND => Status::NewCommand,
            STATUS_BUSY => Status::Busy,
            STATUS_SUCCESSFUL => Status::Successful,
            STATUS_FAILURE => Status::CommandFailure,
            STATUS_TIMEOUT => Status::Timeout,
            STATUS_NOT_SUPPORTED => Status::NotSupported,
            other => Status::Other(other),
        }
    }

    pub fn raw(self) -> u8 {
        match self {
            Status::NewCommand => STATUS_NEW_COMMAND,
            Status::Busy => STATUS_BUSY,
            Status::Successful => STATUS_SUCCESSFUL,
            Status::CommandFailure => STATUS_FAILURE,
            Status::Timeout => STATUS_TIMEOUT,
            Status::NotSupported => STATUS_NOT_SUPPORTED,
            Status::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NewCommand => write!(f, "new command"),
            Status::Busy => write!(f, "busy"),
            Status::Successful => write!(f, "successful"),
            Status::CommandFailure => write!(f, "command failure"),
            Status::Timeout => write!(f, "timeout"),
            Status::NotSupported => write!(f, "not supported"),
            Status::Other(raw) => write!(f, "unknown (0x{raw:02X})"),
        }
    }
}

/// Transfer direction encoded in a command id's top bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HostToDevice,
    DeviceToHost,
}

/// A command id: direction flag (bit 7) plus 7-bit numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandId(u8);

impl CommandId {
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    pub fn direction(self) -> Direction {
        if self.0 & 0x80 != 0 {
            Direction::DeviceToHost
        } else {
            Direction::HostToDevice
        }
    }

    pub fn id(self) -> u8 {
        self.0 & 0x7F
    }

    pub fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

/// One command or response frame (90 bytes on the wire).
///
/// A report is built fresh per call by a command encoder, stamped with a
/// checksum and transaction id by the dispatcher, transmitted once, and
/// never reused afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub transaction_id: u8,
    /// Sequence counter for multi-packet exchanges; must echo between
    /// request and response.
    pub remaining_packets: u16,
    pub protocol_type: u8,
    /// Length of the meaningful argument payload.
    pub data_size: u8,
    pub command_class: u8,
    pub command_id: CommandId,
    /// Command payload, zero-padded beyond `data_size`.
    pub arguments: [u8; MAX_ARGS],
    pub checksum: u8,
}

impl Report {
    /// Blank host-to-device request for the given command triple.
    pub fn request(command_class: u8, command_id: u8, data_size: u8) -> Self {
        Self {
            status: Status::NewCommand,
            transaction_id: DEFAULT_TRANSACTION_ID,
            remaining_packets: 0,
            protocol_type: PROTOCOL_TYPE,
            data_size,
            command_class,
            command_id: CommandId::from_raw(command_id),
            arguments: [0u8; MAX_ARGS],
            checksum: 0,
        }
    }

    /// Serialize into a wire frame. Always exactly [`REPORT_LEN`] bytes;
    /// the reserved tail byte is written as zero.
    pub fn pack(&self) -> [u8; REPORT_LEN] {
        let mut frame = [0u8; REPORT_LEN];
        frame[STATUS_OFFSET] = self.status.raw();
        frame[TRANSACTION_ID_OFFSET] = self.transaction_id;
        BigEndian::write_u16(
            &mut frame[REMAINING_PACKETS_OFFSET..REMAINING_PACKETS_OFFSET + 2],
            self.remaining_packets,
        );
        frame[PROTOCOL_TYPE_OFFSET] = self.protocol_type;
        frame[DATA_SIZE_OFFSET] = self.data_size;
        frame[COMMAND_CLASS_OFFSET] = self.command_class;
        frame[COMMAND_ID_OFFSET] = self.command_id.raw();
        frame[ARGUMENTS_OFFSET..ARGUMENTS_OFFSET + MAX_ARGS].copy_from_slice(&self.arguments);
        frame[CHECKSUM_OFFSET] = self.checksum;
        frame[RESERVED_OFFSET] = 0;
        frame
    }

    /// Parse a wire frame.
    pub fn unpack(data: &[u8]) -> Result<Self, FrameError> {
        if data.len() < REPORT_LEN {
            return Err(FrameError::TooShort {
                expected: REPORT_LEN,
                actual: data.len(),
            });
        }
        let mut arguments = [0u8; MAX_ARGS];
        arguments.copy_from_slice(&data[ARGUMENTS_OFFSET..ARGUMENTS_OFFSET + MAX_ARGS]);
        Ok(Self {
            status: Status::from_raw(data[STATUS_OFFSET]),
            transaction_id: data[TRANSACTION_ID_OFFSET],
            remaining_packets: BigEndian::read_u16(
                &data[REMAINING_PACKETS_OFFSET..REMAINING_PACKETS_OFFSET + 2],
            ),
            protocol_type: data[PROTOCOL_TYPE_OFFSET],
            data_size: data[DATA_SIZE_OFFSET],
            command_class: data[COMMAND_CLASS_OFFSET],
            command_id: CommandId::from_raw(data[COMMAND_ID_OFFSET]),
            arguments,
            checksum: data[CHECKSUM_OFFSET],
        })
    }

    /// Compute and store the checksum for the current field values.
    pub fn set_checksum(&mut self) {
        self.checksum = super::checksum::compute(&self.pack());
    }

    /// The leading `data_size` bytes of the argument buffer.
    pub fn payload(&self) -> &[u8] {
        let len = (self.data_size as usize).min(MAX_ARGS);
        &self.arguments[..len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::request(class::LED, cmd::SET_LED_EFFECT, 1);
        report.arguments[0] = 0x05;
        report.set_checksum();
        report
    }

    #[test]
    fn test_pack_offsets() {
        let mut report = sample();
        report.remaining_packets = 0x0102;
        report.transaction_id = 0x3F;
        let frame = report.pack();

        assert_eq!(frame.len(), REPORT_LEN);
        assert_eq!(frame[STATUS_OFFSET], STATUS_NEW_COMMAND);
        assert_eq!(frame[TRANSACTION_ID_OFFSET], 0x3F);
        assert_eq!(&frame[REMAINING_PACKETS_OFFSET..PROTOCOL_TYPE_OFFSET], &[0x01, 0x02]);
        assert_eq!(frame[PROTOCOL_TYPE_OFFSET], PROTOCOL_TYPE);
        assert_eq!(frame[DATA_SIZE_OFFSET], 1);
        assert_eq!(frame[COMMAND_CLASS_OFFSET], class::LED);
        assert_eq!(frame[COMMAND_ID_OFFSET], cmd::SET_LED_EFFECT);
        assert_eq!(frame[ARGUMENTS_OFFSET], 0x05);
    }

    #[test]
    fn test_reserved_byte_always_zero() {
        let mut report = sample();
        report.checksum = 0xAB;
        let frame = report.pack();
        assert_eq!(frame[RESERVED_OFFSET], 0);
    }

    #[test]
    fn test_arguments_zero_padded() {
        let report = sample();
        let frame = report.pack();
        assert!(frame[ARGUMENTS_OFFSET + 1..CHECKSUM_OFFSET].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_unpack_roundtrip() {
        let mut report = sample();
        report.remaining_packets = 0xBEEF;
        report.set_checksum();
        let parsed = Report::unpack(&report.pack()).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_unpack_short_frame() {
        let err = Report::unpack(&[0u8; 10]).unwrap_err();
        match err {
            FrameError::TooShort { expected, actual } => {
                assert_eq!(expected, REPORT_LEN);
                assert_eq!(actual, 10);
            }
        }
    }

    #[test]
    fn test_command_id_direction() {
        let get = CommandId::from_raw(cmd::GET_SERIAL);
        assert_eq!(get.direction(), Direction::DeviceToHost);
        assert_eq!(get.id(), 0x02);

        let set = CommandId::from_raw(cmd::SET_LED_RGB);
        assert_eq!(set.direction(), Direction::HostToDevice);
        assert_eq!(set.id(), 0x01);
    }

    #[test]
    fn test_status_raw_roundtrip() {
        for raw in 0x00..=0x06u8 {
            assert_eq!(Status::from_raw(raw).raw(), raw);
        }
        assert_eq!(Status::from_raw(0xAA), Status::Other(0xAA));
    }

    #[test]
    fn test_payload_bounded_by_data_size() {
        let mut report = Report::request(class::LED, cmd::SET_LED_RGB, 3);
        report.arguments[..3].copy_from_slice(&[1, 2, 3]);
        assert_eq!(report.payload(), &[1, 2, 3]);

        report.data_size = 0xFF; // hostile value must not panic
        assert_eq!(report.payload().len(), MAX_ARGS);
    }
}
