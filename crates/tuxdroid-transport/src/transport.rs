//! The transport capability trait.

use crate::status::TransportStatus;
use tuxdroid_protocol::Action;

/// A device link that can carry Tux Droid commands.
///
/// Implementations own their connection state and absorb their own failures:
/// every method reports success as a boolean and retains the failure detail
/// internally, surfaced through [`status`](DeviceTransport::status). The
/// controller holds one of these behind `Box<dyn DeviceTransport>` and never
/// needs to know which backend it is talking to.
pub trait DeviceTransport: Send {
    /// Establish the device link. Returns `true` when a link exists after the
    /// call, including when one already existed.
    fn connect(&mut self) -> bool;

    /// Tear down the device link. Always succeeds; disconnecting an already
    /// disconnected transport is a no-op returning `true`.
    fn disconnect(&mut self) -> bool;

    fn is_connected(&self) -> bool;

    /// Send a raw wire command. Payloads are padded or truncated to the
    /// 4-byte frame before transmission.
    fn send_command(&mut self, command: &[u8]) -> bool;

    /// Encode and send one action. Actions without a wire mapping fail
    /// without touching the device.
    fn execute_action(&mut self, action: &Action) -> bool;

    fn status(&self) -> TransportStatus;
}
