//! In-memory Tux Droid simulator.
//!
//! The simulator runs every action through the wire encoder before touching
//! its state, so an action that would fail against hardware fails here too.
//! Only executed actions enter the history; connection lifecycle events do
//! not.

use crate::status::{DriverKind, TransportStatus};
use crate::transport::DeviceTransport;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};
use tuxdroid_protocol::{encode, Action, SleepMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MouthState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WingState {
    Raised,
    Lowered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LedPower {
    On,
    Off,
}

/// Snapshot of the simulated robot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    pub eyes: EyeState,
    pub mouth: MouthState,
    pub wings: WingState,
    pub left_led: LedPower,
    pub right_led: LedPower,
    pub sleeping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_mode: Option<SleepMode>,
    /// Body rotation in degrees, 0-359.
    pub rotation_angle: u16,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            eyes: EyeState::Open,
            mouth: MouthState::Closed,
            wings: WingState::Lowered,
            left_led: LedPower::Off,
            right_led: LedPower::Off,
            sleeping: false,
            sleep_mode: None,
            rotation_angle: 0,
        }
    }
}

/// One executed action, with the state it left behind.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub params: serde_json::Value,
    pub message: String,
    pub state: DeviceState,
}

/// Transport that executes actions against an in-memory [`DeviceState`].
pub struct SimulatedTransport {
    connected: bool,
    delay: Option<Duration>,
    state: DeviceState,
    history: Vec<HistoryEntry>,
    commands_sent: u64,
    commands_failed: u64,
    last_error: Option<String>,
}

impl SimulatedTransport {
    pub fn new() -> Self {
        Self {
            connected: false,
            delay: None,
            state: DeviceState::default(),
            history: Vec::new(),
            commands_sent: 0,
            commands_failed: 0,
            last_error: None,
        }
    }

    /// Simulator that pauses per operation, for demos that should feel like
    /// real hardware.
    pub fn with_delay(delay: Duration) -> Self {
        let mut sim = Self::new();
        sim.delay = Some(delay);
        sim
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("action history cleared");
    }

    pub fn reset_state(&mut self) {
        self.state = DeviceState::default();
        info!("simulated state reset to defaults");
    }

    fn pause(&self) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
    }

    /// Apply an action to the simulated state, returning the human-readable
    /// outcome message.
    fn apply(&mut self, action: &Action) -> String {
        match action {
            Action::BlinkEyes { count } => format!("Eyes blinked {count} time(s)"),
            Action::OpenEyes => {
                self.state.eyes = EyeState::Open;
                "Eyes are now open".to_string()
            }
            Action::CloseEyes => {
                self.state.eyes = EyeState::Closed;
                "Eyes are now closed".to_string()
            }
            Action::StopEyes => "Eye movement stopped".to_string(),

            Action::MoveMouth { count } => format!("Mouth moved {count} time(s)"),
            Action::OpenMouth => {
                self.state.mouth = MouthState::Open;
                "Mouth is now open".to_string()
            }
            Action::CloseMouth => {
                self.state.mouth = MouthState::Closed;
                "Mouth is now closed".to_string()
            }
            Action::StopMouth => "Mouth movement stopped".to_string(),

            Action::WaveWings { count, speed } => {
                format!("Wings waved {count} time(s) at speed {speed}")
            }
            Action::RaiseWings => {
                self.state.wings = WingState::Raised;
                "Wings are now raised".to_string()
            }
            Action::LowerWings => {
                self.state.wings = WingState::Lowered;
                "Wings are now lowered".to_string()
            }
            Action::StopWings => "Wing movement stopped".to_string(),
            Action::ResetWings => {
                self.state.wings = WingState::Lowered;
                "Wings reset to default position".to_string()
            }

            Action::SpinLeft { angle, speed } => {
                self.state.rotation_angle = rotate(self.state.rotation_angle, -(*angle as i32));
                format!("Spun left {angle} units at speed {speed}")
            }
            Action::SpinRight { angle, speed } => {
                self.state.rotation_angle = rotate(self.state.rotation_angle, *angle as i32);
                format!("Spun right {angle} units at speed {speed}")
            }
            Action::StopSpin => "Spinning stopped".to_string(),

            Action::LedOn { target } => {
                if target.includes_left() {
                    self.state.left_led = LedPower::On;
                }
                if target.includes_right() {
                    self.state.right_led = LedPower::On;
                }
                format!("LED(s) {target} turned on")
            }
            Action::LedOff { target } => {
                if target.includes_left() {
                    self.state.left_led = LedPower::Off;
                }
                if target.includes_right() {
                    self.state.right_led = LedPower::Off;
                }
                format!("LED(s) {target} turned off")
            }
            Action::LedToggle { count, .. } => format!("LEDs toggled {count} time(s)"),
            Action::LedPulse { count, .. } => format!("LEDs pulsed {count} time(s)"),

            Action::PlaySound {
                sound_number,
                volume,
            } => format!("Playing sound #{sound_number} at volume {volume}"),
            Action::Mute => "Audio muted".to_string(),
            Action::Unmute => "Audio unmuted".to_string(),

            Action::Sleep { mode } => {
                self.state.sleeping = true;
                self.state.sleep_mode = Some(*mode);
                format!("TUX is now sleeping (mode: {mode})")
            }
            Action::WakeUp => {
                self.state.sleeping = false;
                self.state.sleep_mode = None;
                "TUX is now awake".to_string()
            }

            other => format!("Action {} executed", other.name()),
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceTransport for SimulatedTransport {
    fn connect(&mut self) -> bool {
        self.pause();
        self.connected = true;
        info!("connected to simulated Tux Droid");
        true
    }

    fn disconnect(&mut self) -> bool {
        self.connected = false;
        info!("disconnected from simulated Tux Droid");
        true
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn send_command(&mut self, command: &[u8]) -> bool {
        if !self.connected {
            warn!("cannot send command: not connected");
            self.last_error = Some("not connected to Tux Droid".to_string());
            self.commands_failed += 1;
            return false;
        }
        self.pause();
        debug!(command = ?command, "simulated raw command");
        self.commands_sent += 1;
        true
    }

    fn execute_action(&mut self, action: &Action) -> bool {
        if !self.connected {
            warn!(action = %action.action_type(), "cannot execute action: not connected");
            self.last_error = Some("not connected to Tux Droid".to_string());
            self.commands_failed += 1;
            return false;
        }

        // Same encodability check the hardware path performs.
        let command = match encode(action) {
            Ok(command) => command,
            Err(err) => {
                warn!(action = %action.action_type(), error = %err, "action not executable");
                self.last_error = Some(err.to_string());
                self.commands_failed += 1;
                return false;
            }
        };

        self.pause();
        let message = self.apply(action);
        self.commands_sent += 1;
        self.history.push(HistoryEntry {
            timestamp: Utc::now(),
            action: action.name().to_string(),
            params: action.params_json(),
            message: message.clone(),
            state: self.state.clone(),
        });
        info!(action = %action.action_type(), command = %command, %message, "executed");
        true
    }

    fn status(&self) -> TransportStatus {
        TransportStatus {
            connected: self.connected,
            driver: DriverKind::Mock,
            last_error: self.last_error.clone(),
            commands_sent: self.commands_sent,
            commands_failed: self.commands_failed,
            actions_executed: self.history.len() as u64,
            simulated_state: Some(self.state.clone()),
        }
    }
}

/// Rotate by whole spin units (45 degrees each), wrapping to 0-359.
fn rotate(current: u16, units: i32) -> u16 {
    (current as i32 + units * 45).rem_euclid(360) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_wraps_both_directions() {
        assert_eq!(rotate(0, -4), 180);
        assert_eq!(rotate(0, 8), 0);
        assert_eq!(rotate(315, 1), 0);
        assert_eq!(rotate(0, -1), 315);
        // Units past a full turn still land on a 45-degree boundary.
        assert_eq!(rotate(0, 9), 45);
    }

    #[test]
    fn default_state_matches_power_on() {
        let state = DeviceState::default();
        assert_eq!(state.eyes, EyeState::Open);
        assert_eq!(state.mouth, MouthState::Closed);
        assert_eq!(state.wings, WingState::Lowered);
        assert_eq!(state.left_led, LedPower::Off);
        assert!(!state.sleeping);
        assert_eq!(state.rotation_angle, 0);
    }
}
