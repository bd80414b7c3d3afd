//! High-level Tux Droid actions and their typed parameters.
//!
//! Each action variant carries only the fields the firmware command for that
//! action consumes; parameterless actions are unit variants. Range validation
//! (speed 1-5, volume 0-100, ...) is the calling boundary layer's job — this
//! model performs type coercion only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which LED(s) an LED action addresses.
///
/// The numeric values are the firmware's target codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedTarget {
    Both,
    Left,
    Right,
}

impl LedTarget {
    /// Firmware target code (left=1, right=2, both=3).
    pub fn wire_code(self) -> u8 {
        match self {
            LedTarget::Left => 0x01,
            LedTarget::Right => 0x02,
            LedTarget::Both => 0x03,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LedTarget::Both => "both",
            LedTarget::Left => "left",
            LedTarget::Right => "right",
        }
    }

    /// Whether this target includes the left LED.
    pub fn includes_left(self) -> bool {
        matches!(self, LedTarget::Both | LedTarget::Left)
    }

    /// Whether this target includes the right LED.
    pub fn includes_right(self) -> bool {
        matches!(self, LedTarget::Both | LedTarget::Right)
    }
}

impl fmt::Display for LedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sleep mode, as understood by the firmware's sleep command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepMode {
    Awake,
    Quick,
    Normal,
    Deep,
}

impl SleepMode {
    /// Firmware sleep-type code. Note `Deep` is 4, not 3.
    pub fn wire_code(self) -> u8 {
        match self {
            SleepMode::Awake => 0,
            SleepMode::Quick => 1,
            SleepMode::Normal => 2,
            SleepMode::Deep => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SleepMode::Awake => "awake",
            SleepMode::Quick => "quick",
            SleepMode::Normal => "normal",
            SleepMode::Deep => "deep",
        }
    }
}

impl fmt::Display for SleepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed enumeration of every Tux Droid action type.
///
/// New device capabilities require extending this set and the command table
/// in [`crate::commands`] together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    // Eyes
    BlinkEyes,
    OpenEyes,
    CloseEyes,
    StopEyes,
    // Mouth
    MoveMouth,
    OpenMouth,
    CloseMouth,
    StopMouth,
    // Wings
    WaveWings,
    RaiseWings,
    LowerWings,
    StopWings,
    ResetWings,
    // Rotation
    SpinLeft,
    SpinRight,
    StopSpin,
    // LEDs
    LedOn,
    LedOff,
    LedToggle,
    LedPulse,
    LedSetIntensity,
    // Sound
    PlaySound,
    Mute,
    Unmute,
    // Power
    Sleep,
    WakeUp,
    // Infrared
    IrOn,
    IrOff,
    IrSend,
}

impl ActionType {
    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::BlinkEyes => "blink_eyes",
            ActionType::OpenEyes => "open_eyes",
            ActionType::CloseEyes => "close_eyes",
            ActionType::StopEyes => "stop_eyes",
            ActionType::MoveMouth => "move_mouth",
            ActionType::OpenMouth => "open_mouth",
            ActionType::CloseMouth => "close_mouth",
            ActionType::StopMouth => "stop_mouth",
            ActionType::WaveWings => "wave_wings",
            ActionType::RaiseWings => "raise_wings",
            ActionType::LowerWings => "lower_wings",
            ActionType::StopWings => "stop_wings",
            ActionType::ResetWings => "reset_wings",
            ActionType::SpinLeft => "spin_left",
            ActionType::SpinRight => "spin_right",
            ActionType::StopSpin => "stop_spin",
            ActionType::LedOn => "led_on",
            ActionType::LedOff => "led_off",
            ActionType::LedToggle => "led_toggle",
            ActionType::LedPulse => "led_pulse",
            ActionType::LedSetIntensity => "led_set_intensity",
            ActionType::PlaySound => "play_sound",
            ActionType::Mute => "mute",
            ActionType::Unmute => "unmute",
            ActionType::Sleep => "sleep",
            ActionType::WakeUp => "wake_up",
            ActionType::IrOn => "ir_on",
            ActionType::IrOff => "ir_off",
            ActionType::IrSend => "ir_send",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Tux Droid action with its typed parameters.
///
/// Constructed fresh per request, consumed once by the encoder. Serializes
/// internally tagged, e.g. `{"action":"wave_wings","count":3,"speed":4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    BlinkEyes { count: u8 },
    OpenEyes,
    CloseEyes,
    StopEyes,
    MoveMouth { count: u8 },
    OpenMouth,
    CloseMouth,
    StopMouth,
    WaveWings { count: u8, speed: u8 },
    RaiseWings,
    LowerWings,
    StopWings,
    ResetWings,
    SpinLeft { angle: u8, speed: u8 },
    SpinRight { angle: u8, speed: u8 },
    StopSpin,
    LedOn { target: LedTarget },
    LedOff { target: LedTarget },
    LedToggle { count: u8, delay: u8 },
    LedPulse { target: LedTarget, count: u8, pulse_width: u8 },
    LedSetIntensity { target: LedTarget, intensity: u8 },
    PlaySound { sound_number: u8, volume: u8 },
    Mute,
    Unmute,
    Sleep { mode: SleepMode },
    WakeUp,
    IrOn,
    IrOff,
    IrSend,
}

/// Default parameter values, shared by the controller surface and callers
/// that want the documented "just do the thing" behavior.
pub mod defaults {
    use super::SleepMode;

    pub const BLINK_COUNT: u8 = 1;
    pub const MOUTH_COUNT: u8 = 1;
    pub const WAVE_COUNT: u8 = 1;
    /// PWM speed, 1 (slow) to 5 (fast).
    pub const MOVE_SPEED: u8 = 3;
    /// Spin angle in units of ~1/8th of a full turn.
    pub const SPIN_ANGLE: u8 = 4;
    pub const LED_TOGGLE_COUNT: u8 = 1;
    /// Delay between toggles, in 4 ms units.
    pub const LED_TOGGLE_DELAY: u8 = 25;
    pub const LED_PULSE_COUNT: u8 = 5;
    pub const LED_PULSE_WIDTH: u8 = 10;
    pub const SOUND_NUMBER: u8 = 0;
    pub const SOUND_VOLUME: u8 = 100;
    pub const SLEEP_MODE: SleepMode = SleepMode::Normal;
}

impl Action {
    /// The action's type tag.
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::BlinkEyes { .. } => ActionType::BlinkEyes,
            Action::OpenEyes => ActionType::OpenEyes,
            Action::CloseEyes => ActionType::CloseEyes,
            Action::StopEyes => ActionType::StopEyes,
            Action::MoveMouth { .. } => ActionType::MoveMouth,
            Action::OpenMouth => ActionType::OpenMouth,
            Action::CloseMouth => ActionType::CloseMouth,
            Action::StopMouth => ActionType::StopMouth,
            Action::WaveWings { .. } => ActionType::WaveWings,
            Action::RaiseWings => ActionType::RaiseWings,
            Action::LowerWings => ActionType::LowerWings,
            Action::StopWings => ActionType::StopWings,
            Action::ResetWings => ActionType::ResetWings,
            Action::SpinLeft { .. } => ActionType::SpinLeft,
            Action::SpinRight { .. } => ActionType::SpinRight,
            Action::StopSpin => ActionType::StopSpin,
            Action::LedOn { .. } => ActionType::LedOn,
            Action::LedOff { .. } => ActionType::LedOff,
            Action::LedToggle { .. } => ActionType::LedToggle,
            Action::LedPulse { .. } => ActionType::LedPulse,
            Action::LedSetIntensity { .. } => ActionType::LedSetIntensity,
            Action::PlaySound { .. } => ActionType::PlaySound,
            Action::Mute => ActionType::Mute,
            Action::Unmute => ActionType::Unmute,
            Action::Sleep { .. } => ActionType::Sleep,
            Action::WakeUp => ActionType::WakeUp,
            Action::IrOn => ActionType::IrOn,
            Action::IrOff => ActionType::IrOff,
            Action::IrSend => ActionType::IrSend,
        }
    }

    /// Stable snake_case name of this action.
    pub fn name(&self) -> &'static str {
        self.action_type().as_str()
    }

    /// The action's parameters as a JSON object (the tag field stripped),
    /// used to echo params back in results and history entries.
    pub fn params_json(&self) -> serde_json::Value {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(mut map)) => {
                map.remove("action");
                serde_json::Value::Object(map)
            }
            _ => serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}
