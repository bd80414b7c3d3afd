//! Transport status reporting.

use crate::sim::DeviceState;
use serde::Serialize;
use std::fmt;

/// Which transport backend produced a status record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverKind {
    Mock,
    HardwareUsb,
}

impl DriverKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DriverKind::Mock => "mock",
            DriverKind::HardwareUsb => "hardware_usb",
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform status record returned by every transport.
///
/// The controller merges this with its own `last_action` field; the shape is
/// identical for both backends, with `simulated_state` present only for the
/// simulator.
#[derive(Debug, Clone, Serialize)]
pub struct TransportStatus {
    pub connected: bool,
    pub driver: DriverKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
    pub commands_sent: u64,
    pub commands_failed: u64,
    pub actions_executed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_state: Option<DeviceState>,
}
