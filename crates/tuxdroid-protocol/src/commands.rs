//! Firmware command codes.
//!
//! Fixed mapping from [`ActionType`] to the dongle firmware's one-byte
//! command identifiers. The code's numeric range encodes its parameter
//! arity: `0x00..0x40` none, `0x40..0x80` one, `0x80..0xC0` two,
//! `0xC0..` three.

use crate::action::ActionType;

/// Every command is exactly this many bytes on the wire.
pub const CMD_SIZE: usize = 4;

/// Raw firmware command identifiers.
pub mod command_codes {
    pub const STOP_WINGS: u8 = 0x30;
    pub const RESET_WINGS: u8 = 0x31;
    pub const STOP_EYES: u8 = 0x32;
    pub const OPEN_EYES: u8 = 0x33;
    pub const OPEN_MOUTH: u8 = 0x34;
    pub const CLOSE_MOUTH: u8 = 0x35;
    pub const STOP_MOUTH: u8 = 0x36;
    pub const STOP_SPIN: u8 = 0x37;
    pub const CLOSE_EYES: u8 = 0x38;
    pub const RAISE_WINGS: u8 = 0x39;
    pub const LOWER_WINGS: u8 = 0x3A;

    pub const LED_ON: u8 = 0x1A;
    pub const LED_OFF: u8 = 0x1B;
    pub const IR_ON: u8 = 0x17;
    pub const IR_OFF: u8 = 0x18;

    pub const BLINK_EYES: u8 = 0x40;
    pub const MOVE_MOUTH: u8 = 0x41;

    /// Liveness probe; the dongle may answer on the IN endpoint.
    pub const PING: u8 = 0x7F;

    pub const WAVE_WINGS: u8 = 0x80;
    pub const SPIN_LEFT: u8 = 0x82;
    pub const SPIN_RIGHT: u8 = 0x83;
    pub const PLAY_SOUND: u8 = 0x90;
    pub const IR_SEND: u8 = 0x91;
    pub const MUTE: u8 = 0x92;
    pub const LED_TOGGLE: u8 = 0x9A;

    /// Sleep and wake share this code; param1 carries the sleep type.
    pub const SLEEP: u8 = 0xB7;
}

/// Look up the firmware command code for an action type.
///
/// Returns `None` for action types the firmware command header defines no
/// code for (`Unmute`, `LedPulse`, `LedSetIntensity`); encoding those is a
/// hard [`UnknownAction`](crate::wire::ProtocolError::UnknownAction) error,
/// never a silent default.
pub fn command_code(action_type: ActionType) -> Option<u8> {
    use command_codes as codes;
    match action_type {
        ActionType::BlinkEyes => Some(codes::BLINK_EYES),
        ActionType::StopEyes => Some(codes::STOP_EYES),
        ActionType::OpenEyes => Some(codes::OPEN_EYES),
        ActionType::CloseEyes => Some(codes::CLOSE_EYES),

        ActionType::MoveMouth => Some(codes::MOVE_MOUTH),
        ActionType::OpenMouth => Some(codes::OPEN_MOUTH),
        ActionType::CloseMouth => Some(codes::CLOSE_MOUTH),
        ActionType::StopMouth => Some(codes::STOP_MOUTH),

        ActionType::WaveWings => Some(codes::WAVE_WINGS),
        ActionType::StopWings => Some(codes::STOP_WINGS),
        ActionType::ResetWings => Some(codes::RESET_WINGS),
        ActionType::RaiseWings => Some(codes::RAISE_WINGS),
        ActionType::LowerWings => Some(codes::LOWER_WINGS),

        ActionType::SpinLeft => Some(codes::SPIN_LEFT),
        ActionType::SpinRight => Some(codes::SPIN_RIGHT),
        ActionType::StopSpin => Some(codes::STOP_SPIN),

        ActionType::LedOn => Some(codes::LED_ON),
        ActionType::LedOff => Some(codes::LED_OFF),
        ActionType::LedToggle => Some(codes::LED_TOGGLE),

        ActionType::PlaySound => Some(codes::PLAY_SOUND),
        ActionType::Mute => Some(codes::MUTE),

        // Compositional alias: wake is sleep with the "awake" sleep type.
        ActionType::Sleep => Some(codes::SLEEP),
        ActionType::WakeUp => Some(codes::SLEEP),

        ActionType::IrOn => Some(codes::IR_ON),
        ActionType::IrOff => Some(codes::IR_OFF),
        ActionType::IrSend => Some(codes::IR_SEND),

        // No firmware code defined.
        ActionType::Unmute | ActionType::LedPulse | ActionType::LedSetIntensity => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_and_wake_share_a_code() {
        assert_eq!(command_code(ActionType::Sleep), Some(0xB7));
        assert_eq!(command_code(ActionType::WakeUp), Some(0xB7));
    }

    #[test]
    fn unmapped_action_types_have_no_code() {
        assert_eq!(command_code(ActionType::Unmute), None);
        assert_eq!(command_code(ActionType::LedPulse), None);
        assert_eq!(command_code(ActionType::LedSetIntensity), None);
    }

    #[test]
    fn led_commands_sit_in_the_parameterless_range() {
        // The dongle drives LEDs with void commands; targets never reach
        // the wire (see the encoder).
        assert!(command_codes::LED_ON < 0x40);
        assert!(command_codes::LED_OFF < 0x40);
    }
}
