use enum_map::{Enum, EnumMap};
use std::fmt;
use std::io::Write;

/// The sound effects that the game plays
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum Effect {
    /// The snake ate the food
    FoodConsumed,

    /// The snake died
    SnakeDied,
}

impl Effect {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Effect::FoodConsumed => "food-consumed",
            Effect::SnakeDied => "snake-died",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Something that can play sound effects.  Playing is fire-and-forget:
/// failures are for the implementation to log, not for the game to handle.
pub(crate) trait AudioSink: Send {
    fn play_effect(&mut self, effect: Effect);
}

/// Plays effects by ringing the terminal bell
#[derive(Debug)]
pub(crate) struct TerminalBell<W> {
    out: W,
    enabled: EnumMap<Effect, bool>,
}

impl<W: Write + Send> TerminalBell<W> {
    pub(crate) fn new(out: W, enabled: EnumMap<Effect, bool>) -> Self {
        TerminalBell { out, enabled }
    }
}

impl<W: Write + Send> AudioSink for TerminalBell<W> {
    fn play_effect(&mut self, effect: Effect) {
        if !self.enabled[effect] {
            return;
        }
        if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            log::warn!("Failed to play {effect} sound: {e}");
        }
    }
}

#[cfg(test)]
impl AudioSink for Vec<Effect> {
    fn play_effect(&mut self, effect: Effect) {
        self.push(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum_map::enum_map;
    use std::io;

    #[test]
    fn effect_ids() {
        assert_eq!(Effect::FoodConsumed.to_string(), "food-consumed");
        assert_eq!(Effect::SnakeDied.to_string(), "snake-died");
    }

    #[test]
    fn bell_respects_enabled() {
        let enabled = enum_map! {
            Effect::FoodConsumed => true,
            Effect::SnakeDied => false,
        };
        let mut bell = TerminalBell::new(Vec::new(), enabled);
        bell.play_effect(Effect::FoodConsumed);
        bell.play_effect(Effect::SnakeDied);
        bell.play_effect(Effect::FoodConsumed);
        assert_eq!(bell.out, b"\x07\x07");
    }

    #[derive(Debug)]
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn failed_write_is_ignored() {
        let mut bell = TerminalBell::new(BrokenPipe, EnumMap::from_fn(|_| true));
        bell.play_effect(Effect::SnakeDied);
    }
}
