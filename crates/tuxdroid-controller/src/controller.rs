//! High-level Tux Droid controller.

use crate::result::{ActionResult, ControllerStatus};
use tracing::{error, info};
use tuxdroid_protocol::{Action, LedTarget, SleepMode};
use tuxdroid_transport::DeviceTransport;

/// Facade over a [`DeviceTransport`] with one method per robot capability.
///
/// The controller owns its transport and never inspects which backend it is.
/// Every action method funnels through [`execute`](TuxController::execute),
/// which records the attempt and converts the transport's boolean outcome
/// into an [`ActionResult`].
///
/// ```no_run
/// use tuxdroid_controller::TuxController;
/// use tuxdroid_transport::SimulatedTransport;
///
/// let mut tux = TuxController::new(Box::new(SimulatedTransport::new()));
/// tux.connect();
/// let result = tux.wave_wings(3, 4);
/// assert!(result.success);
/// tux.disconnect();
/// ```
pub struct TuxController {
    transport: Box<dyn DeviceTransport>,
    last_action: Option<&'static str>,
}

impl TuxController {
    pub fn new(transport: Box<dyn DeviceTransport>) -> Self {
        info!("controller initialized");
        Self {
            transport,
            last_action: None,
        }
    }

    pub fn connect(&mut self) -> bool {
        let connected = self.transport.connect();
        if connected {
            info!("connected to Tux Droid");
        }
        connected
    }

    pub fn disconnect(&mut self) -> bool {
        let disconnected = self.transport.disconnect();
        if disconnected {
            info!("disconnected from Tux Droid");
        }
        disconnected
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Execute any action and report the outcome.
    pub fn execute(&mut self, action: Action) -> ActionResult {
        let name = action.name();
        let params = action.params_json();
        self.last_action = Some(name);

        let success = self.transport.execute_action(&action);
        let message = if success {
            format!("Action '{name}' executed successfully")
        } else {
            let detail = self.transport.status().last_error;
            error!(action = name, detail = detail.as_deref(), "action failed");
            detail.unwrap_or_else(|| "Action failed".to_string())
        };

        ActionResult {
            success,
            action: name,
            params,
            message,
        }
    }

    // Eyes

    pub fn blink_eyes(&mut self, count: u8) -> ActionResult {
        self.execute(Action::BlinkEyes { count })
    }

    pub fn open_eyes(&mut self) -> ActionResult {
        self.execute(Action::OpenEyes)
    }

    pub fn close_eyes(&mut self) -> ActionResult {
        self.execute(Action::CloseEyes)
    }

    pub fn stop_eyes(&mut self) -> ActionResult {
        self.execute(Action::StopEyes)
    }

    // Mouth

    pub fn move_mouth(&mut self, count: u8) -> ActionResult {
        self.execute(Action::MoveMouth { count })
    }

    pub fn open_mouth(&mut self) -> ActionResult {
        self.execute(Action::OpenMouth)
    }

    pub fn close_mouth(&mut self) -> ActionResult {
        self.execute(Action::CloseMouth)
    }

    pub fn stop_mouth(&mut self) -> ActionResult {
        self.execute(Action::StopMouth)
    }

    // Wings

    pub fn wave_wings(&mut self, count: u8, speed: u8) -> ActionResult {
        self.execute(Action::WaveWings { count, speed })
    }

    pub fn raise_wings(&mut self) -> ActionResult {
        self.execute(Action::RaiseWings)
    }

    pub fn lower_wings(&mut self) -> ActionResult {
        self.execute(Action::LowerWings)
    }

    pub fn stop_wings(&mut self) -> ActionResult {
        self.execute(Action::StopWings)
    }

    pub fn reset_wings(&mut self) -> ActionResult {
        self.execute(Action::ResetWings)
    }

    // Rotation

    pub fn spin_left(&mut self, angle: u8, speed: u8) -> ActionResult {
        self.execute(Action::SpinLeft { angle, speed })
    }

    pub fn spin_right(&mut self, angle: u8, speed: u8) -> ActionResult {
        self.execute(Action::SpinRight { angle, speed })
    }

    pub fn stop_spin(&mut self) -> ActionResult {
        self.execute(Action::StopSpin)
    }

    // LEDs

    pub fn led_on(&mut self, target: LedTarget) -> ActionResult {
        self.execute(Action::LedOn { target })
    }

    pub fn led_off(&mut self, target: LedTarget) -> ActionResult {
        self.execute(Action::LedOff { target })
    }

    pub fn led_toggle(&mut self, count: u8, delay: u8) -> ActionResult {
        self.execute(Action::LedToggle { count, delay })
    }

    pub fn led_pulse(&mut self, target: LedTarget, count: u8, pulse_width: u8) -> ActionResult {
        self.execute(Action::LedPulse {
            target,
            count,
            pulse_width,
        })
    }

    // Sound

    pub fn play_sound(&mut self, sound_number: u8, volume: u8) -> ActionResult {
        self.execute(Action::PlaySound {
            sound_number,
            volume,
        })
    }

    pub fn mute(&mut self) -> ActionResult {
        self.execute(Action::Mute)
    }

    pub fn unmute(&mut self) -> ActionResult {
        self.execute(Action::Unmute)
    }

    // Power

    pub fn sleep(&mut self, mode: SleepMode) -> ActionResult {
        self.execute(Action::Sleep { mode })
    }

    pub fn wake_up(&mut self) -> ActionResult {
        self.execute(Action::WakeUp)
    }

    // Status

    pub fn status(&self) -> ControllerStatus {
        ControllerStatus {
            transport: self.transport.status(),
            last_action: self.last_action,
        }
    }
}
