use proptest::prelude::*;
use tuxdroid_protocol::{
    command_code, command_codes, encode, Action, CommandArity, LedTarget, ProtocolError,
    SleepMode, WireCommand,
};

fn arb_led_target() -> impl Strategy<Value = LedTarget> {
    prop_oneof![
        Just(LedTarget::Both),
        Just(LedTarget::Left),
        Just(LedTarget::Right),
    ]
}

fn arb_sleep_mode() -> impl Strategy<Value = SleepMode> {
    prop_oneof![
        Just(SleepMode::Awake),
        Just(SleepMode::Quick),
        Just(SleepMode::Normal),
        Just(SleepMode::Deep),
    ]
}

/// Every action variant, with arbitrary parameter bytes.
fn arb_action() -> impl Strategy<Value = Action> {
    let eyes = prop_oneof![
        any::<u8>().prop_map(|count| Action::BlinkEyes { count }),
        Just(Action::OpenEyes),
        Just(Action::CloseEyes),
        Just(Action::StopEyes),
    ];
    let mouth = prop_oneof![
        any::<u8>().prop_map(|count| Action::MoveMouth { count }),
        Just(Action::OpenMouth),
        Just(Action::CloseMouth),
        Just(Action::StopMouth),
    ];
    let wings = prop_oneof![
        (any::<u8>(), any::<u8>()).prop_map(|(count, speed)| Action::WaveWings { count, speed }),
        Just(Action::RaiseWings),
        Just(Action::LowerWings),
        Just(Action::StopWings),
        Just(Action::ResetWings),
    ];
    let spin = prop_oneof![
        (any::<u8>(), any::<u8>()).prop_map(|(angle, speed)| Action::SpinLeft { angle, speed }),
        (any::<u8>(), any::<u8>()).prop_map(|(angle, speed)| Action::SpinRight { angle, speed }),
        Just(Action::StopSpin),
    ];
    let led = prop_oneof![
        arb_led_target().prop_map(|target| Action::LedOn { target }),
        arb_led_target().prop_map(|target| Action::LedOff { target }),
        (any::<u8>(), any::<u8>()).prop_map(|(count, delay)| Action::LedToggle { count, delay }),
        (arb_led_target(), any::<u8>(), any::<u8>()).prop_map(|(target, count, pulse_width)| {
            Action::LedPulse { target, count, pulse_width }
        }),
        (arb_led_target(), any::<u8>()).prop_map(|(target, intensity)| {
            Action::LedSetIntensity { target, intensity }
        }),
    ];
    let sound = prop_oneof![
        (any::<u8>(), any::<u8>()).prop_map(|(sound_number, volume)| Action::PlaySound {
            sound_number,
            volume
        }),
        Just(Action::Mute),
        Just(Action::Unmute),
    ];
    let power = prop_oneof![
        arb_sleep_mode().prop_map(|mode| Action::Sleep { mode }),
        Just(Action::WakeUp),
    ];
    let infrared = prop_oneof![Just(Action::IrOn), Just(Action::IrOff), Just(Action::IrSend)];

    prop_oneof![eyes, mouth, wings, spin, led, sound, power, infrared]
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(500))]

    /// Encoding succeeds exactly when the action's type has a command-table
    /// entry, and failure is always the UnknownAction error.
    #[test]
    fn prop_encode_matches_command_table(action in arb_action()) {
        let action_type = action.action_type();
        match (command_code(action_type), encode(&action)) {
            (Some(code), Ok(cmd)) => prop_assert_eq!(cmd.code(), code),
            (None, Err(ProtocolError::UnknownAction(t))) => prop_assert_eq!(t, action_type),
            (expected, got) => {
                return Err(TestCaseError::fail(format!(
                    "table {expected:?} disagrees with encoder {got:?}"
                )));
            }
        }
    }

    /// Encode is a pure function: the same action yields identical bytes.
    #[test]
    fn prop_encode_is_deterministic(action in arb_action()) {
        prop_assert_eq!(encode(&action), encode(&action));
    }

    /// Encoded commands are always exactly 4 bytes.
    #[test]
    fn prop_encoded_length_is_four(action in arb_action()) {
        if let Ok(cmd) = encode(&action) {
            prop_assert_eq!(cmd.as_bytes().len(), WireCommand::LEN);
            prop_assert_eq!(cmd.as_bytes().len(), 4);
        }
    }

    /// Bytes beyond the code's arity are always zero. The sleep family is the
    /// documented exception: code 0xB7 carries the sleep type in param1.
    #[test]
    fn prop_param_layout_matches_arity(action in arb_action()) {
        let Ok(cmd) = encode(&action) else { return Ok(()) };
        if cmd.code() == command_codes::SLEEP {
            prop_assert_eq!(cmd.param(2), 0);
            prop_assert_eq!(cmd.param(3), 0);
            return Ok(());
        }
        match CommandArity::of(cmd.code()) {
            CommandArity::Zero => {
                prop_assert_eq!(cmd.param(1), 0);
                prop_assert_eq!(cmd.param(2), 0);
                prop_assert_eq!(cmd.param(3), 0);
            }
            CommandArity::One => {
                prop_assert_eq!(cmd.param(2), 0);
                prop_assert_eq!(cmd.param(3), 0);
            }
            CommandArity::Two => prop_assert_eq!(cmd.param(3), 0),
            CommandArity::Three => {}
        }
    }

    /// Serialized params echo round-trips back into the same action.
    #[test]
    fn prop_action_json_round_trip(action in arb_action()) {
        let json = serde_json::to_string(&action)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let back: Action = serde_json::from_str(&json)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(back, action);
    }
}
