//! Tux Droid firmware command protocol.
//!
//! The Tux Droid's radio dongle accepts fixed-size 4-byte commands:
//! `[code, param1, param2, param3]`, zero-padded. The command code's numeric
//! range determines how many of the trailing bytes carry parameters (the
//! firmware's arity-by-range convention, see [`wire::CommandArity`]).
//!
//! This crate is pure data and encoding — no I/O. Transports live in
//! `tuxdroid-transport`.

#![deny(unsafe_code)]

pub mod action;
pub mod commands;
pub mod wire;

pub use action::{defaults, Action, ActionType, LedTarget, SleepMode};
pub use commands::{command_code, command_codes, CMD_SIZE};
pub use wire::{encode, ping_command, CommandArity, ProtocolError, WireCommand};
