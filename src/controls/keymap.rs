//! Physical keys to engine inputs.
//!
//! | Key | Effect |
//! |---|---|
//! | Left / Right | previous / next station |
//! | Shift+Left / Shift+Right | first / last station |
//! | Enter | advance: begin, start, get off, next player, play again |
//! | Escape | new game, from the game-over screen |
//!
//! Name entry is free text and is not mapped here; UIs build
//! [`Input::SetPlayerName`] directly.

use serde::{Deserialize, Serialize};

use crate::core::{Input, PhaseTag};

/// Keys the game listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    ShiftLeft,
    ShiftRight,
    Enter,
    Escape,
}

impl Key {
    /// Combine a base key with the shift modifier.
    ///
    /// Shift only changes the arrows.
    #[must_use]
    pub fn with_shift(self, shift: bool) -> Self {
        match (self, shift) {
            (Key::Left, true) => Key::ShiftLeft,
            (Key::Right, true) => Key::ShiftRight,
            (key, _) => key,
        }
    }

    /// Parse a DOM-style key name (`"ArrowLeft"`, `"Enter"`, ...).
    #[must_use]
    pub fn from_name(name: &str, shift: bool) -> Option<Self> {
        let key = match name {
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            _ => return None,
        };
        Some(key.with_shift(shift))
    }
}

/// The input a key means in the given phase, if any.
#[must_use]
pub fn input_for_key(phase: PhaseTag, key: Key) -> Option<Input> {
    match (phase, key) {
        (PhaseTag::Begin, Key::Enter) => Some(Input::StartSetup),
        (PhaseTag::Setup, Key::Enter) => Some(Input::StartGame),

        (PhaseTag::Turn, Key::Left) => Some(Input::MoveLeft),
        (PhaseTag::Turn, Key::Right) => Some(Input::MoveRight),
        (PhaseTag::Turn, Key::ShiftLeft) => Some(Input::MoveToFirst),
        (PhaseTag::Turn, Key::ShiftRight) => Some(Input::MoveToLast),
        (PhaseTag::Turn, Key::Enter) => Some(Input::GetOff),

        (PhaseTag::TurnResult, Key::Enter) => Some(Input::Acknowledge),

        (PhaseTag::Over, Key::Enter) => Some(Input::PlayAgain),
        (PhaseTag::Over, Key::Escape) => Some(Input::NewGame),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("ArrowLeft", false), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowLeft", true), Some(Key::ShiftLeft));
        assert_eq!(Key::from_name("ArrowRight", true), Some(Key::ShiftRight));
        assert_eq!(Key::from_name("Enter", true), Some(Key::Enter));
        assert_eq!(Key::from_name("q", false), None);
    }

    #[test]
    fn test_turn_keys() {
        assert_eq!(input_for_key(PhaseTag::Turn, Key::Left), Some(Input::MoveLeft));
        assert_eq!(input_for_key(PhaseTag::Turn, Key::ShiftRight), Some(Input::MoveToLast));
        assert_eq!(input_for_key(PhaseTag::Turn, Key::Enter), Some(Input::GetOff));
        assert_eq!(input_for_key(PhaseTag::Turn, Key::Escape), None);
    }

    #[test]
    fn test_enter_advances_every_phase() {
        assert_eq!(input_for_key(PhaseTag::Begin, Key::Enter), Some(Input::StartSetup));
        assert_eq!(input_for_key(PhaseTag::Setup, Key::Enter), Some(Input::StartGame));
        assert_eq!(input_for_key(PhaseTag::TurnResult, Key::Enter), Some(Input::Acknowledge));
        assert_eq!(input_for_key(PhaseTag::Over, Key::Enter), Some(Input::PlayAgain));
    }

    #[test]
    fn test_arrows_outside_turn() {
        assert_eq!(input_for_key(PhaseTag::Setup, Key::Left), None);
        assert_eq!(input_for_key(PhaseTag::Over, Key::Right), None);
        assert_eq!(input_for_key(PhaseTag::Over, Key::Escape), Some(Input::NewGame));
    }
}
