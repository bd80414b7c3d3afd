//! High-level Tux Droid control.
//!
//! [`TuxController`] wraps any [`tuxdroid_transport::DeviceTransport`] and
//! exposes one method per robot capability (blink, wave, spin, LEDs, sound,
//! sleep), each returning a structured [`ActionResult`] instead of a bare
//! boolean. Pick the transport at construction time:
//!
//! ```no_run
//! use tuxdroid_controller::TuxController;
//! use tuxdroid_transport::{SimulatedTransport, UsbTransport};
//!
//! let mut tux = TuxController::new(Box::new(SimulatedTransport::new()));
//! // or: TuxController::new(Box::new(UsbTransport::with_defaults()));
//! tux.connect();
//! tux.blink_eyes(2);
//! ```

pub mod controller;
pub mod result;

pub use controller::TuxController;
pub use result::{ActionResult, ControllerStatus};
