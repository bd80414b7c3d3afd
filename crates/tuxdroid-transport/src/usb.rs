//! Real USB transport for the Tux Droid radio dongle.
//!
//! Connection sequence: locate the device by vendor/product identity, open
//! it, detach any kernel driver bound to the command interface, claim that
//! interface and resolve its interrupt endpoints from the active
//! configuration descriptor. A wake-up ping confirms the link; silence in
//! reply is acceptable, the firmware does not acknowledge every frame.
//!
//! Disconnect reverses the sequence: release the interface and reattach the
//! kernel driver only if we were the ones who detached it.

use crate::config::UsbConfig;
use crate::error::TransportError;
use crate::status::{DriverKind, TransportStatus};
use crate::transport::DeviceTransport;
use rusb::{Device, DeviceHandle, Direction, GlobalContext, TransferType};
use serde::Serialize;
use tracing::{debug, info, warn};
use tuxdroid_protocol::{encode, ping_command, Action, ProtocolError, CMD_SIZE};

/// An open, claimed link to the dongle's command interface.
struct UsbLink {
    handle: DeviceHandle<GlobalContext>,
    endpoint_out: u8,
    endpoint_in: u8,
    /// Set only when we detached the kernel driver ourselves; reattach is
    /// symmetric with that.
    kernel_driver_detached: bool,
}

impl UsbLink {
    /// Release the interface and restore the kernel driver binding.
    fn release(&mut self, interface: u8) {
        if let Err(err) = self.handle.release_interface(interface) {
            debug!(interface, error = %err, "release_interface failed");
        }
        if self.kernel_driver_detached {
            if let Err(err) = self.handle.attach_kernel_driver(interface) {
                debug!(interface, error = %err, "attach_kernel_driver failed");
            }
            self.kernel_driver_detached = false;
        }
    }
}

/// Transport backed by the physical dongle.
pub struct UsbTransport {
    config: UsbConfig,
    link: Option<UsbLink>,
    last_error: Option<String>,
    commands_sent: u64,
    commands_failed: u64,
    actions_executed: u64,
}

impl UsbTransport {
    pub fn new(config: UsbConfig) -> Self {
        Self {
            config,
            link: None,
            last_error: None,
            commands_sent: 0,
            commands_failed: 0,
            actions_executed: 0,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(UsbConfig::default())
    }

    pub fn config(&self) -> &UsbConfig {
        &self.config
    }

    /// Most recent failure detail, if any operation has failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn find_device(&self) -> Result<Device<GlobalContext>, TransportError> {
        let devices = rusb::devices()
            .map_err(|err| TransportError::OpenFailed(err.to_string()))?;
        for device in devices.iter() {
            let descriptor = match device.device_descriptor() {
                Ok(descriptor) => descriptor,
                Err(_) => continue,
            };
            if descriptor.vendor_id() == self.config.vendor_id
                && descriptor.product_id() == self.config.product_id
            {
                return Ok(device);
            }
        }
        Err(TransportError::DeviceNotFound {
            vendor_id: self.config.vendor_id,
            product_id: self.config.product_id,
        })
    }

    /// Interrupt endpoint addresses for the command interface, read from the
    /// active configuration. Falls back to the configured addresses when the
    /// descriptor walk comes up empty.
    fn resolve_endpoints(
        &self,
        device: &Device<GlobalContext>,
    ) -> Result<(u8, u8), TransportError> {
        let config = match device.active_config_descriptor() {
            Ok(config) => config,
            Err(err) => {
                debug!(error = %err, "no active config descriptor, using configured endpoints");
                return Ok((self.config.endpoint_out, self.config.endpoint_in));
            }
        };

        let mut endpoint_out = None;
        let mut endpoint_in = None;
        for interface in config.interfaces() {
            if interface.number() != self.config.interface {
                continue;
            }
            for descriptor in interface.descriptors() {
                for endpoint in descriptor.endpoint_descriptors() {
                    if endpoint.transfer_type() != TransferType::Interrupt {
                        continue;
                    }
                    match endpoint.direction() {
                        Direction::Out => endpoint_out = Some(endpoint.address()),
                        Direction::In => endpoint_in = Some(endpoint.address()),
                    }
                }
            }
        }

        let endpoint_out = endpoint_out.ok_or(TransportError::EndpointNotFound {
            interface: self.config.interface,
            direction: "out",
        })?;
        let endpoint_in = endpoint_in.unwrap_or(self.config.endpoint_in);
        Ok((endpoint_out, endpoint_in))
    }

    fn try_connect(&mut self) -> Result<(), TransportError> {
        let device = self.find_device()?;
        let handle = device
            .open()
            .map_err(|err| TransportError::OpenFailed(err.to_string()))?;

        let interface = self.config.interface;
        let mut kernel_driver_detached = false;
        match handle.kernel_driver_active(interface) {
            Ok(true) => match handle.detach_kernel_driver(interface) {
                Ok(()) => kernel_driver_detached = true,
                Err(err) => {
                    // Claim may still succeed; record and continue.
                    debug!(interface, error = %err, "detach_kernel_driver failed");
                }
            },
            Ok(false) => {}
            Err(err) => debug!(interface, error = %err, "kernel_driver_active query failed"),
        }

        if let Err(err) = handle.claim_interface(interface) {
            if kernel_driver_detached {
                let _ = handle.attach_kernel_driver(interface);
            }
            return Err(TransportError::ClaimFailed {
                interface,
                message: err.to_string(),
            });
        }

        let (endpoint_out, endpoint_in) = match self.resolve_endpoints(&device) {
            Ok(endpoints) => endpoints,
            Err(err) => {
                let _ = handle.release_interface(interface);
                if kernel_driver_detached {
                    let _ = handle.attach_kernel_driver(interface);
                }
                return Err(err);
            }
        };

        self.link = Some(UsbLink {
            handle,
            endpoint_out,
            endpoint_in,
            kernel_driver_detached,
        });
        info!(
            vendor_id = format_args!("{:04x}", self.config.vendor_id),
            product_id = format_args!("{:04x}", self.config.product_id),
            interface,
            endpoint_out = format_args!("{endpoint_out:#04x}"),
            endpoint_in = format_args!("{endpoint_in:#04x}"),
            "connected to Tux Droid dongle"
        );

        self.wake_device();
        Ok(())
    }

    /// Ping the firmware and drain one reply frame if it offers one.
    fn wake_device(&mut self) {
        let ping = ping_command();
        if !self.write_frame(ping.as_bytes()) {
            warn!("wake-up ping was not accepted");
            return;
        }
        if let Some(link) = &self.link {
            let mut reply = [0u8; CMD_SIZE];
            match link
                .handle
                .read_interrupt(link.endpoint_in, &mut reply, self.config.read_timeout())
            {
                Ok(len) => debug!(len, reply = ?&reply[..len], "ping reply"),
                // Silence is fine, the firmware does not always answer.
                Err(err) => debug!(error = %err, "no ping reply"),
            }
        }
    }

    /// Write one padded frame; counters untouched, error retained on failure.
    fn write_frame(&mut self, command: &[u8]) -> bool {
        let frame = pad_command(command);
        let timeout = self.config.write_timeout();
        let timeout_ms = self.config.write_timeout_ms;
        let Some(link) = &self.link else {
            self.last_error = Some(TransportError::NotConnected.to_string());
            return false;
        };
        match link.handle.write_interrupt(link.endpoint_out, &frame, timeout) {
            Ok(written) if written == frame.len() => true,
            Ok(written) => {
                let err = TransportError::WriteFailed(format!(
                    "short write: {written} of {} bytes",
                    frame.len()
                ));
                self.last_error = Some(err.to_string());
                false
            }
            Err(rusb::Error::Timeout) => {
                self.last_error = Some(TransportError::Timeout { timeout_ms }.to_string());
                false
            }
            Err(err) => {
                self.last_error = Some(TransportError::WriteFailed(err.to_string()).to_string());
                false
            }
        }
    }

    /// Probe for the dongle without connecting.
    pub fn diagnostics(&self) -> UsbDiagnostics {
        let device_present = self.find_device().is_ok();
        UsbDiagnostics {
            vendor_id: self.config.vendor_id,
            product_id: self.config.product_id,
            device_present,
            connected: self.is_connected(),
        }
    }
}

impl DeviceTransport for UsbTransport {
    fn connect(&mut self) -> bool {
        if self.link.is_some() {
            debug!("already connected");
            return true;
        }
        match self.try_connect() {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                warn!(error = %err, "connect failed");
                self.last_error = Some(err.to_string());
                false
            }
        }
    }

    fn disconnect(&mut self) -> bool {
        if let Some(mut link) = self.link.take() {
            link.release(self.config.interface);
            info!(
                commands_sent = self.commands_sent,
                commands_failed = self.commands_failed,
                actions_executed = self.actions_executed,
                "disconnected from Tux Droid dongle"
            );
        }
        true
    }

    fn is_connected(&self) -> bool {
        self.link.is_some()
    }

    fn send_command(&mut self, command: &[u8]) -> bool {
        if self.link.is_none() {
            self.last_error = Some(TransportError::NotConnected.to_string());
            self.commands_failed += 1;
            return false;
        }
        if self.write_frame(command) {
            self.commands_sent += 1;
            std::thread::sleep(self.config.settle_delay());
            true
        } else {
            self.commands_failed += 1;
            false
        }
    }

    fn execute_action(&mut self, action: &Action) -> bool {
        let command = match encode(action) {
            Ok(command) => command,
            Err(ProtocolError::UnknownAction(action_type)) => {
                warn!(action = %action_type, "action has no wire command");
                self.last_error =
                    Some(ProtocolError::UnknownAction(action_type).to_string());
                self.commands_failed += 1;
                return false;
            }
        };
        debug!(action = %action.action_type(), command = %command, "executing action");
        if self.send_command(command.as_bytes()) {
            self.actions_executed += 1;
            true
        } else {
            false
        }
    }

    fn status(&self) -> TransportStatus {
        TransportStatus {
            connected: self.is_connected(),
            driver: DriverKind::HardwareUsb,
            last_error: self.last_error.clone(),
            commands_sent: self.commands_sent,
            commands_failed: self.commands_failed,
            actions_executed: self.actions_executed,
            simulated_state: None,
        }
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Some(mut link) = self.link.take() {
            link.release(self.config.interface);
        }
    }
}

/// Snapshot of dongle presence, for troubleshooting without a connection.
#[derive(Debug, Clone, Serialize)]
pub struct UsbDiagnostics {
    pub vendor_id: u16,
    pub product_id: u16,
    pub device_present: bool,
    pub connected: bool,
}

/// Fit a payload into the fixed 4-byte command frame, zero-padding short
/// payloads and truncating long ones.
fn pad_command(command: &[u8]) -> [u8; CMD_SIZE] {
    let mut frame = [0u8; CMD_SIZE];
    let len = command.len().min(CMD_SIZE);
    frame[..len].copy_from_slice(&command[..len]);
    frame
}
