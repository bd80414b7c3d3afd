//! Transport error taxonomy.
//!
//! These errors never cross the transport boundary as faults: every public
//! transport operation catches them and reports a boolean failure plus a
//! retained last-error string.

/// Transport-layer errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No device with the configured identity is present.
    #[error("device not found: {vendor_id:04x}:{product_id:04x}")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    /// The device exists but could not be opened (permissions, OS error).
    #[error("failed to open device: {0}")]
    OpenFailed(String),

    /// Claiming the command interface failed.
    #[error("failed to claim interface {interface}: {message}")]
    ClaimFailed { interface: u8, message: String },

    /// The command interface lacks the expected interrupt endpoint.
    #[error("no interrupt {direction} endpoint on interface {interface}")]
    EndpointNotFound {
        interface: u8,
        direction: &'static str,
    },

    /// An interrupt write was rejected or truncated.
    #[error("write failed: {0}")]
    WriteFailed(String),

    /// An I/O operation exceeded its bounded timeout.
    #[error("timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// A send/execute was attempted while disconnected.
    #[error("not connected to Tux Droid")]
    NotConnected,
}

impl TransportError {
    /// Whether retrying the operation might succeed without intervention.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }

    /// Whether the error means no usable device link exists.
    pub fn is_device_unavailable(&self) -> bool {
        matches!(
            self,
            TransportError::DeviceNotFound { .. }
                | TransportError::OpenFailed(_)
                | TransportError::NotConnected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_identity() {
        let err = TransportError::DeviceNotFound {
            vendor_id: 0x03EB,
            product_id: 0xFF07,
        };
        assert_eq!(err.to_string(), "device not found: 03eb:ff07");
    }

    #[test]
    fn classification() {
        assert!(TransportError::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(!TransportError::NotConnected.is_retryable());
        assert!(TransportError::NotConnected.is_device_unavailable());
        assert!(!TransportError::WriteFailed("pipe".into()).is_device_unavailable());
    }

    #[test]
    fn is_a_std_error() {
        let err = TransportError::NotConnected;
        let _: &dyn std::error::Error = &err;
    }
}
