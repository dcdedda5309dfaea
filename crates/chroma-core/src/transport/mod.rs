//! Transport layer: how frames reach the device.

pub mod mock;
pub mod nusb;
pub mod traits;

pub use mock::MockTransport;
pub use nusb::NusbTransport;
pub use traits::{TransportError, UsbTransport};
