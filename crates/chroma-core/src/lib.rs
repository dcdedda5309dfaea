//! Chroma-Core: Razer mouse lighting protocol implementation in Rust.
//!
//! This crate drives the vendor command set Razer mice expose over HID
//! feature reports: LED effects, colors, brightness, and device identity
//! queries.
//!
//! # Architecture
//!
//! The crate is organized into layers:
//!
//! - **Protocol**: Constants, 90-byte report frame, XOR checksum
//! - **Transport**: USB communication abstraction (nusb, mock)
//! - **Timing**: Per-device response wait intervals
//! - **Dispatch**: One-shot request/response exchange with validation
//! - **Commands**: Pure request encoders
//! - **Device**: High-level per-mouse handle
//! - **Config**: TOML defaults for the CLI
//!
//! # Example
//!
//! ```no_run
//! use chroma_core::commands::{LedTarget, StorageTarget, effect};
//! use chroma_core::device::ChromaDevice;
//!
//! let device = ChromaDevice::open().expect("no mouse found");
//! println!("found {}", device.device_type());
//! device
//!     .set_led_effect(StorageTarget::NoStore, LedTarget::Logo, effect::SPECTRUM)
//!     .expect("effect change failed");
//! ```

pub mod commands;
pub mod config;
pub mod device;
pub mod devices;
pub mod dispatch;
pub mod protocol;
pub mod timing;
pub mod transport;

// Re-exports for convenience
pub use commands::{LedTarget, StorageTarget};
pub use config::{ConfigError, DriverConfig};
pub use device::{ChromaDevice, FirmwareVersion};
pub use dispatch::ProtocolError;
pub use protocol::{CommandId, Report, Status};
pub use transport::{MockTransport, NusbTransport, TransportError, UsbTransport};
