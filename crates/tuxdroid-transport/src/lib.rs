//! Tux Droid device transports.
//!
//! A transport owns the connection lifecycle and raw command I/O for one
//! Tux Droid. Two implementations conform to the [`DeviceTransport`]
//! capability trait:
//!
//! - [`UsbTransport`] drives the real dongle over its USB command interface
//!   (detach kernel driver, claim interface, interrupt transfers),
//! - [`SimulatedTransport`] mimics the same observable behavior against an
//!   in-memory [`DeviceState`], for development and tests without hardware.
//!
//! All transport-layer failures are captured, never thrown past the
//! transport boundary: callers see a boolean result, a failure counter and
//! an inspectable last-error string.

pub mod config;
pub mod error;
pub mod sim;
pub mod status;
pub mod transport;
pub mod usb;

pub use config::UsbConfig;
pub use error::TransportError;
pub use sim::{
    DeviceState, EyeState, HistoryEntry, LedPower, MouthState, SimulatedTransport, WingState,
};
pub use status::{DriverKind, TransportStatus};
pub use transport::DeviceTransport;
pub use usb::{UsbDiagnostics, UsbTransport};
