//! Inputs: the vocabulary the presentation layer speaks to the engine.
//!
//! Every user intent (a click, a key press) is translated into one `Input`
//! before it reaches the engine. Inputs that make no sense for the current
//! phase are not errors; the engine simply stays where it is.

use serde::{Deserialize, Serialize};

use super::state::PhaseTag;

/// A single engine input.
///
/// ## Example
///
/// ```
/// use secret_station::core::{Input, InputKind};
///
/// let name = Input::set_player_name(0, "Ada");
/// assert_eq!(name.kind(), InputKind::SetPlayerName);
/// assert!(!name.is_movement());
/// assert!(Input::MoveLeft.is_movement());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// Leave the title screen for player setup.
    StartSetup,
    /// Name (or, with a blank name, empty) a seat.
    SetPlayerName {
        /// Seat index, `0..max_players`.
        seat: usize,
        /// Entered name.
        name: String,
    },
    /// Start playing with the seated players.
    StartGame,
    /// Current player one station left.
    MoveLeft,
    /// Current player one station right.
    MoveRight,
    /// Current player to the first station.
    MoveToFirst,
    /// Current player to the last station.
    MoveToLast,
    /// Current player declares they are getting off here.
    GetOff,
    /// Dismiss a missed guess and hand over to the next player.
    Acknowledge,
    /// Same players, fresh round.
    PlayAgain,
    /// Back to the title screen with nobody seated.
    NewGame,
}

impl Input {
    /// Convenience constructor for [`Input::SetPlayerName`].
    pub fn set_player_name(seat: usize, name: impl Into<String>) -> Self {
        Self::SetPlayerName {
            seat,
            name: name.into(),
        }
    }

    /// The payload-free discriminant.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Input::StartSetup => InputKind::StartSetup,
            Input::SetPlayerName { .. } => InputKind::SetPlayerName,
            Input::StartGame => InputKind::StartGame,
            Input::MoveLeft => InputKind::MoveLeft,
            Input::MoveRight => InputKind::MoveRight,
            Input::MoveToFirst => InputKind::MoveToFirst,
            Input::MoveToLast => InputKind::MoveToLast,
            Input::GetOff => InputKind::GetOff,
            Input::Acknowledge => InputKind::Acknowledge,
            Input::PlayAgain => InputKind::PlayAgain,
            Input::NewGame => InputKind::NewGame,
        }
    }

    /// Does this input move the current player?
    #[must_use]
    pub fn is_movement(&self) -> bool {
        self.kind().is_movement()
    }
}

/// [`Input`] without its payload. Used to list available controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    StartSetup,
    SetPlayerName,
    StartGame,
    MoveLeft,
    MoveRight,
    MoveToFirst,
    MoveToLast,
    GetOff,
    Acknowledge,
    PlayAgain,
    NewGame,
}

impl InputKind {
    /// Does this kind move the current player?
    #[must_use]
    pub const fn is_movement(self) -> bool {
        matches!(
            self,
            InputKind::MoveLeft | InputKind::MoveRight | InputKind::MoveToFirst | InputKind::MoveToLast
        )
    }

    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            InputKind::StartSetup => "begin",
            InputKind::SetPlayerName => "name a seat",
            InputKind::StartGame => "start the game",
            InputKind::MoveLeft => "go to previous station",
            InputKind::MoveRight => "go to next station",
            InputKind::MoveToFirst => "go to first station",
            InputKind::MoveToLast => "go to last station",
            InputKind::GetOff => "get off the train",
            InputKind::Acknowledge => "next player",
            InputKind::PlayAgain => "play again",
            InputKind::NewGame => "new game",
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A processed input with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Session checkpoints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// The input as received.
    pub input: Input,

    /// Phase the state was in when the input arrived.
    pub phase: PhaseTag,

    /// Did the input change the state?
    pub changed: bool,

    /// Position in the session's input stream.
    pub sequence: u32,
}

impl InputRecord {
    /// Create a new input record.
    #[must_use]
    pub fn new(input: Input, phase: PhaseTag, changed: bool, sequence: u32) -> Self {
        Self {
            input,
            phase,
            changed,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Input::StartSetup.kind(), InputKind::StartSetup);
        assert_eq!(Input::set_player_name(2, "x").kind(), InputKind::SetPlayerName);
        assert_eq!(Input::NewGame.kind(), InputKind::NewGame);
    }

    #[test]
    fn test_movement_kinds() {
        let moves = [Input::MoveLeft, Input::MoveRight, Input::MoveToFirst, Input::MoveToLast];
        assert!(moves.iter().all(Input::is_movement));

        assert!(!Input::GetOff.is_movement());
        assert!(!Input::StartGame.is_movement());
    }

    #[test]
    fn test_label() {
        assert_eq!(InputKind::GetOff.to_string(), "get off the train");
    }

    #[test]
    fn test_input_serialization() {
        let input = Input::set_player_name(1, "Ada");
        let json = serde_json::to_string(&input).unwrap();
        let deserialized: Input = serde_json::from_str(&json).unwrap();

        assert_eq!(input, deserialized);
    }

    #[test]
    fn test_input_record() {
        let record = InputRecord::new(Input::GetOff, PhaseTag::Turn, true, 4);

        assert_eq!(record.input, Input::GetOff);
        assert_eq!(record.phase, PhaseTag::Turn);
        assert!(record.changed);
        assert_eq!(record.sequence, 4);
    }
}
