//! Transport configuration.
//!
//! The Tux Droid's radio dongle is a composite USB device; its command
//! channel is the HID interface (interface 3) with one interrupt endpoint in
//! each direction. Identity and addresses are fixed by the hardware, not
//! negotiated, so they live in configuration with hardware-documented
//! defaults.

use serde::Deserialize;
use std::time::Duration;

/// Kysoh / Atmel vendor ID.
pub const TUX_VENDOR_ID: u16 = 0x03EB;
/// Tux Droid radio dongle product ID.
pub const TUX_PRODUCT_ID: u16 = 0xFF07;
/// Command (HID) interface number. Interfaces 0-2 and 4-5 are audio.
pub const TUX_COMMAND_INTERFACE: u8 = 3;
/// Interrupt OUT endpoint address on the command interface.
pub const TUX_ENDPOINT_OUT: u8 = 0x05;
/// Interrupt IN endpoint address on the command interface.
pub const TUX_ENDPOINT_IN: u8 = 0x84;

/// USB transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UsbConfig {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Interface carrying the command endpoints.
    pub interface: u8,
    /// Fallback OUT endpoint address when descriptor resolution fails.
    pub endpoint_out: u8,
    /// Fallback IN endpoint address when descriptor resolution fails.
    pub endpoint_in: u8,
    /// Bounded timeout for a single interrupt write.
    pub write_timeout_ms: u64,
    /// Bounded timeout for reads (ping replies).
    pub read_timeout_ms: u64,
    /// Pause after each accepted command so the firmware can process it.
    pub settle_delay_ms: u64,
}

impl Default for UsbConfig {
    fn default() -> Self {
        Self {
            vendor_id: TUX_VENDOR_ID,
            product_id: TUX_PRODUCT_ID,
            interface: TUX_COMMAND_INTERFACE,
            endpoint_out: TUX_ENDPOINT_OUT,
            endpoint_in: TUX_ENDPOINT_IN,
            write_timeout_ms: 1_000,
            read_timeout_ms: 500,
            settle_delay_ms: 50,
        }
    }
}

impl UsbConfig {
    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
