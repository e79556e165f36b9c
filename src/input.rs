//! Input surface: a queue of pending commands and device-to-command mapping
//!
//! Device callbacks only push commands; the scheduler drains the queue at the
//! start of every frame, so the simulation never sees input mid-step.

use std::collections::VecDeque;

pub use crate::sim::Command;

/// Commands waiting for the next frame, in arrival order
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Take everything queued so far
    pub fn drain(&mut self) -> Vec<Command> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Map a keyboard event to a command
///
/// `code` is the physical key (`KeyboardEvent.code`), `key` the produced
/// character (`KeyboardEvent.key`).
pub fn command_for_key(code: &str, key: &str, pressed: bool) -> Option<Command> {
    match (code, pressed) {
        ("Space" | "ArrowUp", true) => Some(Command::JumpBegin),
        ("Space" | "ArrowUp", false) => Some(Command::JumpEnd),
        _ if pressed && key.eq_ignore_ascii_case("r") => Some(Command::Restart),
        _ => None,
    }
}

/// Mouse buttons and touches act like the jump key
pub fn command_for_pointer(pressed: bool) -> Command {
    if pressed {
        Command::JumpBegin
    } else {
        Command::JumpEnd
    }
}

/// Whether the browser's default action for this key should be suppressed
pub fn is_game_key(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp")
}
