//! Wire command encoding.
//!
//! Every firmware command is exactly 4 bytes: `[code, param1, param2,
//! param3]`, zero-padded. The code's numeric range fixes how many of the
//! trailing bytes are meaningful — this is the hardware contract and must be
//! reproduced bit-for-bit for the device to respond.

use crate::action::{Action, ActionType, SleepMode};
use crate::commands::{command_code, command_codes, CMD_SIZE};
use std::fmt;

/// Encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The action's type has no entry in the firmware command table.
    #[error("no firmware command code for action '{0}'")]
    UnknownAction(ActionType),
}

/// Parameter arity implied by a command code's numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandArity {
    Zero,
    One,
    Two,
    Three,
}

impl CommandArity {
    /// The firmware's arity-by-range rule.
    pub fn of(code: u8) -> Self {
        match code {
            0x00..=0x3F => CommandArity::Zero,
            0x40..=0x7F => CommandArity::One,
            0x80..=0xBF => CommandArity::Two,
            0xC0..=0xFF => CommandArity::Three,
        }
    }

    /// Number of meaningful parameter bytes.
    pub fn param_count(self) -> usize {
        match self {
            CommandArity::Zero => 0,
            CommandArity::One => 1,
            CommandArity::Two => 2,
            CommandArity::Three => 3,
        }
    }
}

/// A fully encoded 4-byte firmware command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireCommand([u8; CMD_SIZE]);

impl WireCommand {
    pub const LEN: usize = CMD_SIZE;

    pub fn new(bytes: [u8; CMD_SIZE]) -> Self {
        Self(bytes)
    }

    /// The command code byte.
    pub fn code(&self) -> u8 {
        self.0[0]
    }

    /// Parameter byte 1..=3.
    pub fn param(&self, index: usize) -> u8 {
        debug_assert!((1..CMD_SIZE).contains(&index));
        self.0[index]
    }

    pub fn as_bytes(&self) -> &[u8; CMD_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; CMD_SIZE] {
        self.0
    }
}

impl fmt::Display for WireCommand {
    /// Lowercase hex, e.g. `40030000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Encode an action into its 4-byte wire command.
///
/// Pure and deterministic: the same action always yields the same bytes.
/// Fails with [`ProtocolError::UnknownAction`] when the action's type has no
/// command-table entry.
pub fn encode(action: &Action) -> Result<WireCommand, ProtocolError> {
    let code = command_code(action.action_type())
        .ok_or(ProtocolError::UnknownAction(action.action_type()))?;

    let bytes = match *action {
        // Sleep family: code 0xB7 carries the sleep type in param1. Wake is
        // the same command forced to the "awake" type, whatever the caller
        // thinks the current mode is.
        Action::Sleep { mode } => [code, mode.wire_code(), 0x00, 0x00],
        Action::WakeUp => [code, SleepMode::Awake.wire_code(), 0x00, 0x00],

        // One-parameter range (0x40..0x80): a repeat count.
        Action::BlinkEyes { count } => [code, count, 0x00, 0x00],
        Action::MoveMouth { count } => [code, count, 0x00, 0x00],

        // Two-parameter range (0x80..0xC0): count/angle then
        // speed/delay/volume.
        Action::WaveWings { count, speed } => [code, count, speed, 0x00],
        Action::SpinLeft { angle, speed } => [code, angle, speed, 0x00],
        Action::SpinRight { angle, speed } => [code, angle, speed, 0x00],
        Action::LedToggle { count, delay } => [code, count, delay, 0x00],
        // The sound index is not wire-addressable through this command;
        // param1 takes the range's default count of 1.
        Action::PlaySound { volume, .. } => [code, 0x01, volume, 0x00],
        // Range defaults: count 1, speed/delay/volume 3.
        Action::Mute => [code, 0x01, 0x03, 0x00],
        Action::IrSend => [code, 0x01, 0x03, 0x00],

        // Void range (< 0x40): command only. This includes the LED on/off
        // commands — the target never reaches the wire; the dongle drives
        // both LEDs.
        Action::OpenEyes
        | Action::CloseEyes
        | Action::StopEyes
        | Action::OpenMouth
        | Action::CloseMouth
        | Action::StopMouth
        | Action::RaiseWings
        | Action::LowerWings
        | Action::StopWings
        | Action::ResetWings
        | Action::StopSpin
        | Action::LedOn { .. }
        | Action::LedOff { .. }
        | Action::IrOn
        | Action::IrOff => [code, 0x00, 0x00, 0x00],

        // Unreachable: these have no command-table entry, the lookup above
        // already failed.
        Action::Unmute | Action::LedPulse { .. } | Action::LedSetIntensity { .. } => {
            [code, 0x00, 0x00, 0x00]
        }
    };

    Ok(WireCommand(bytes))
}

/// The liveness probe sent after connecting: `[0x7F, 1, 0, 0]`.
pub fn ping_command() -> WireCommand {
    WireCommand([command_codes::PING, 0x01, 0x00, 0x00])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::LedTarget;

    #[test]
    fn void_commands_carry_no_parameters() -> Result<(), ProtocolError> {
        assert_eq!(encode(&Action::OpenEyes)?.to_bytes(), [0x33, 0, 0, 0]);
        assert_eq!(encode(&Action::CloseEyes)?.to_bytes(), [0x38, 0, 0, 0]);
        assert_eq!(encode(&Action::StopSpin)?.to_bytes(), [0x37, 0, 0, 0]);
        Ok(())
    }

    #[test]
    fn led_target_never_reaches_the_wire() -> Result<(), ProtocolError> {
        for target in [LedTarget::Both, LedTarget::Left, LedTarget::Right] {
            assert_eq!(encode(&Action::LedOn { target })?.to_bytes(), [0x1A, 0, 0, 0]);
            assert_eq!(encode(&Action::LedOff { target })?.to_bytes(), [0x1B, 0, 0, 0]);
        }
        Ok(())
    }

    #[test]
    fn one_parameter_commands_carry_a_count() -> Result<(), ProtocolError> {
        assert_eq!(encode(&Action::BlinkEyes { count: 3 })?.to_bytes(), [0x40, 3, 0, 0]);
        assert_eq!(encode(&Action::MoveMouth { count: 7 })?.to_bytes(), [0x41, 7, 0, 0]);
        Ok(())
    }

    #[test]
    fn two_parameter_commands_carry_count_and_speed() -> Result<(), ProtocolError> {
        assert_eq!(
            encode(&Action::WaveWings { count: 2, speed: 5 })?.to_bytes(),
            [0x80, 2, 5, 0]
        );
        assert_eq!(
            encode(&Action::SpinLeft { angle: 4, speed: 3 })?.to_bytes(),
            [0x82, 4, 3, 0]
        );
        assert_eq!(
            encode(&Action::SpinRight { angle: 8, speed: 1 })?.to_bytes(),
            [0x83, 8, 1, 0]
        );
        assert_eq!(
            encode(&Action::LedToggle { count: 4, delay: 25 })?.to_bytes(),
            [0x9A, 4, 25, 0]
        );
        Ok(())
    }

    #[test]
    fn play_sound_pins_the_count_byte() -> Result<(), ProtocolError> {
        let cmd = encode(&Action::PlaySound { sound_number: 9, volume: 80 })?;
        assert_eq!(cmd.to_bytes(), [0x90, 1, 80, 0]);
        Ok(())
    }

    #[test]
    fn sleep_mode_is_carried_in_param1() -> Result<(), ProtocolError> {
        assert_eq!(
            encode(&Action::Sleep { mode: SleepMode::Deep })?.to_bytes(),
            [0xB7, 4, 0, 0]
        );
        assert_eq!(
            encode(&Action::Sleep { mode: SleepMode::Normal })?.to_bytes(),
            [0xB7, 2, 0, 0]
        );
        assert_eq!(
            encode(&Action::Sleep { mode: SleepMode::Quick })?.to_bytes(),
            [0xB7, 1, 0, 0]
        );
        Ok(())
    }

    #[test]
    fn wake_up_is_always_the_awake_sleep_type() -> Result<(), ProtocolError> {
        assert_eq!(encode(&Action::WakeUp)?.to_bytes(), [0xB7, 0, 0, 0]);
        Ok(())
    }

    #[test]
    fn unmapped_actions_fail_hard() {
        let err = encode(&Action::Unmute);
        assert_eq!(err, Err(ProtocolError::UnknownAction(ActionType::Unmute)));

        let err = encode(&Action::LedPulse {
            target: LedTarget::Both,
            count: 5,
            pulse_width: 10,
        });
        assert_eq!(err, Err(ProtocolError::UnknownAction(ActionType::LedPulse)));
    }

    #[test]
    fn ping_is_a_one_parameter_probe() {
        let ping = ping_command();
        assert_eq!(ping.to_bytes(), [0x7F, 1, 0, 0]);
        assert_eq!(CommandArity::of(ping.code()), CommandArity::One);
    }

    #[test]
    fn wire_command_displays_as_hex() {
        let cmd = WireCommand::new([0x40, 0x03, 0x00, 0x00]);
        assert_eq!(cmd.to_string(), "40030000");
        assert_eq!(cmd.code(), 0x40);
        assert_eq!(cmd.param(1), 0x03);
    }

    #[test]
    fn arity_ranges_cover_the_code_space() {
        assert_eq!(CommandArity::of(0x00), CommandArity::Zero);
        assert_eq!(CommandArity::of(0x3F), CommandArity::Zero);
        assert_eq!(CommandArity::of(0x40), CommandArity::One);
        assert_eq!(CommandArity::of(0x7F), CommandArity::One);
        assert_eq!(CommandArity::of(0x80), CommandArity::Two);
        assert_eq!(CommandArity::of(0xBF), CommandArity::Two);
        assert_eq!(CommandArity::of(0xC0), CommandArity::Three);
        assert_eq!(CommandArity::of(0xFF), CommandArity::Three);
        assert_eq!(CommandArity::Two.param_count(), 2);
    }
}
