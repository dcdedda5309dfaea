//! Protocol constants for the vendor HID command set.
//!
//! Values match the shipped driver family for these mice; the report
//! layout they describe is the on-wire contract and must not drift.

// ============================================================================
// Device Identification
// ============================================================================

/// Razer Inc. Vendor ID
pub const RAZER_VENDOR_ID: u16 = 0x1532;

/// Mouse Product IDs, as enumerated by the vendor driver.
pub mod pid {
    pub const OROCHI_2011: u16 = 0x0013;
    pub const DEATHADDER_3_5G: u16 = 0x0016;
    pub const ABYSSUS_1800: u16 = 0x0020;
    pub const MAMBA_2012_WIRED: u16 = 0x0024;
    pub const MAMBA_2012_WIRELESS: u16 = 0x0025;
    pub const NAGA_2012: u16 = 0x002E;
    pub const IMPERATOR: u16 = 0x002F;
    pub const OUROBOROS: u16 = 0x0032;
    pub const TAIPAN: u16 = 0x0034;
    pub const NAGA_HEX_RED: u16 = 0x0036;
    pub const DEATHADDER_2013: u16 = 0x0037;
    pub const DEATHADDER_1800: u16 = 0x0038;
    pub const OROCHI_2013: u16 = 0x0039;
    pub const NAGA_2014: u16 = 0x0040;
    pub const NAGA_HEX: u16 = 0x0041;
    pub const ABYSSUS: u16 = 0x0042;
    pub const DEATHADDER_CHROMA: u16 = 0x0043;
    pub const MAMBA_WIRED: u16 = 0x0044;
    pub const MAMBA_WIRELESS: u16 = 0x0045;
    pub const MAMBA_TE_WIRED: u16 = 0x0046;
    pub const OROCHI_CHROMA: u16 = 0x0048;
    pub const DIAMONDBACK_CHROMA: u16 = 0x004C;
    pub const NAGA_HEX_V2: u16 = 0x0050;
    pub const NAGA_CHROMA: u16 = 0x0053;
    pub const DEATHADDER_3500: u16 = 0x0054;
    pub const LANCEHEAD_WIRED: u16 = 0x0059;
    pub const LANCEHEAD_WIRELESS: u16 = 0x005A;
    pub const ABYSSUS_V2: u16 = 0x005B;
    pub const DEATHADDER_ELITE: u16 = 0x005C;
    pub const ABYSSUS_2000: u16 = 0x005E;
    pub const LANCEHEAD_TE_WIRED: u16 = 0x0060;
    pub const BASILISK: u16 = 0x0064;
    pub const NAGA_TRINITY: u16 = 0x0067;
    pub const ABYSSUS_ELITE_DVA_EDITION: u16 = 0x006A;
    pub const ABYSSUS_ESSENTIAL: u16 = 0x006B;
    pub const MAMBA_ELITE: u16 = 0x006C;
    pub const DEATHADDER_ESSENTIAL: u16 = 0x006E;
    pub const LANCEHEAD_WIRELESS_RECEIVER: u16 = 0x006F;
    pub const LANCEHEAD_WIRELESS_WIRED: u16 = 0x0070;
    pub const DEATHADDER_ESSENTIAL_WHITE_EDITION: u16 = 0x0071;
    pub const MAMBA_WIRELESS_RECEIVER: u16 = 0x0072;
    pub const MAMBA_WIRELESS_WIRED: u16 = 0x0073;
    pub const VIPER: u16 = 0x0078;
    pub const VIPER_ULTIMATE_WIRED: u16 = 0x007A;
    pub const VIPER_ULTIMATE_WIRELESS: u16 = 0x007B;
    pub const DEATHADDER_V2: u16 = 0x0084;
}

// ============================================================================
// Report Geometry
// ============================================================================

/// Total wire frame size, both directions; short payloads are zero-padded,
/// never truncated.
pub const REPORT_LEN: usize = 90;

/// Capacity of the argument buffer inside a report.
pub const MAX_ARGS: usize = 80;

/// Byte offsets inside a packed frame.
pub const STATUS_OFFSET: usize = 0;
pub const TRANSACTION_ID_OFFSET: usize = 1;
pub const REMAINING_PACKETS_OFFSET: usize = 2;
pub const PROTOCOL_TYPE_OFFSET: usize = 4;
pub const DATA_SIZE_OFFSET: usize = 5;
pub const COMMAND_CLASS_OFFSET: usize = 6;
pub const COMMAND_ID_OFFSET: usize = 7;
pub const ARGUMENTS_OFFSET: usize = 8;
pub const CHECKSUM_OFFSET: usize = 88;
pub const RESERVED_OFFSET: usize = 89;

/// The checksum is the XOR of every frame byte in this half-open range.
pub const CHECKSUM_START: usize = REMAINING_PACKETS_OFFSET;
pub const CHECKSUM_END: usize = CHECKSUM_OFFSET;

/// Protocol version/family marker carried by every report.
pub const PROTOCOL_TYPE: u8 = 0x00;

/// Transaction id the shipped driver stamps on mouse requests.
pub const DEFAULT_TRANSACTION_ID: u8 = 0x3F;

// ============================================================================
// Command Classes and IDs
// ============================================================================

/// Command classes grouping related commands.
pub mod class {
    /// Device management: mode, serial, firmware version.
    pub const DEVICE: u8 = 0x00;
    /// Standard LED control.
    pub const LED: u8 = 0x03;
}

/// Command ids. Bit 7 is the direction flag: set for device-to-host
/// (get) commands, clear for host-to-device (set) commands.
pub mod cmd {
    // class DEVICE
    pub const SET_DEVICE_MODE: u8 = 0x04;
    pub const GET_FIRMWARE_VERSION: u8 = 0x81;
    pub const GET_SERIAL: u8 = 0x82;
    pub const GET_DEVICE_MODE: u8 = 0x84;

    // class LED
    pub const SET_LED_STATE: u8 = 0x00;
    pub const SET_LED_RGB: u8 = 0x01;
    pub const SET_LED_EFFECT: u8 = 0x02;
    pub const SET_LED_BRIGHTNESS: u8 = 0x03;
}

/// Payload sizes of the get commands' responses.
pub const FIRMWARE_VERSION_DATA_SIZE: u8 = 0x02;
pub const SERIAL_DATA_SIZE: u8 = 0x16;

// ============================================================================
// Response Status Codes
// ============================================================================

pub const STATUS_NEW_COMMAND: u8 = 0x00;
pub const STATUS_BUSY: u8 = 0x01;
pub const STATUS_SUCCESSFUL: u8 = 0x02;
pub const STATUS_FAILURE: u8 = 0x03;
pub const STATUS_TIMEOUT: u8 = 0x04;
pub const STATUS_NOT_SUPPORTED: u8 = 0x05;

// ============================================================================
// HID Control Transfer
// ============================================================================

/// HID class SET_REPORT bRequest.
pub const HID_REQ_SET_REPORT: u8 = 0x09;
/// HID class GET_REPORT bRequest.
pub const HID_REQ_GET_REPORT: u8 = 0x01;
/// wValue: feature report, report id 0.
pub const HID_FEATURE_REPORT_0: u16 = 0x0300;
/// wIndex (report number) used for every transfer in this protocol family.
pub const REPORT_INDEX: u16 = 0x00;
