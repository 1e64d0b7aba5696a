//! Session: the latest state plus everything needed to produce the next one.
//!
//! A presentation layer owns one `Session`. Each frame it renders
//! [`Session::view`], turns the user's intent into an [`Input`] (or a
//! [`Key`]), and hands it to [`Session::dispatch`]. The session swaps in the
//! new state and records what happened.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::SessionError;
use crate::controls::{input_for_key, Key};
use crate::core::{
    GameRng, GameRngState, GameState, Input, InputRecord, TrackConfig,
};
use crate::rules::apply;
use crate::view::GameView;

/// A running match.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    rng: GameRng,
    history: Vector<InputRecord>,
    sequence: u32,
}

impl Session {
    /// Start a match on the title screen with a seeded RNG.
    #[must_use]
    pub fn new(config: TrackConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a match with an entropy-seeded RNG.
    #[must_use]
    pub fn from_entropy(config: TrackConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a match with the given RNG.
    #[must_use]
    pub fn with_rng(config: TrackConfig, mut rng: GameRng) -> Self {
        let state = GameState::begin(config, &mut rng);
        debug!(seed = rng.seed(), "session started");
        Self {
            state,
            rng,
            history: Vector::new(),
            sequence: 0,
        }
    }

    /// The latest state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// What the players may see of the latest state.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    /// Every input processed so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<InputRecord> {
        &self.history
    }

    /// Feed one input through the engine.
    #[instrument(skip(self), fields(phase = %self.state.tag()))]
    pub fn dispatch(&mut self, input: Input) -> &GameState {
        let phase = self.state.tag();
        let next = apply(&self.state, &input, &mut self.rng);
        let changed = next != self.state;

        self.history
            .push_back(InputRecord::new(input, phase, changed, self.sequence));
        self.sequence = self.sequence.saturating_add(1);
        self.state = next;
        &self.state
    }

    /// Feed one key press. Keys with no meaning in this phase are dropped
    /// without being recorded.
    pub fn press(&mut self, key: Key) -> &GameState {
        match input_for_key(self.state.tag(), key) {
            Some(input) => self.dispatch(input),
            None => &self.state,
        }
    }

    /// Capture the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a session from a snapshot, rejecting impossible states.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self, SessionError> {
        snapshot
            .state
            .validate()
            .map_err(|err| SessionError::Invalid { reason: err.reason })?;
        let sequence = u32::try_from(snapshot.history.len()).map_err(|_| SessionError::Invalid {
            reason: "history too long",
        })?;

        Ok(Self {
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
            history: snapshot.history,
            sequence,
        })
    }

    /// Encode a checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        bincode::serialize(&self.snapshot()).map_err(|source| SessionError::Encode { source })
    }

    /// Decode and restore a checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        let snapshot: SessionSnapshot =
            bincode::deserialize(bytes).map_err(|source| SessionError::Decode { source })?;
        Self::restore(snapshot)
    }
}

/// Serializable session checkpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// State at capture time.
    pub state: GameState,
    /// RNG position, so later draws match an uninterrupted session.
    pub rng: GameRngState,
    /// Inputs processed before capture.
    pub history: Vector<InputRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Phase, PhaseTag, Player, PlayerId, Roster, Seats, Station};

    fn config() -> TrackConfig {
        TrackConfig::new(1, 3, 2, 2).unwrap()
    }

    fn seated_session() -> Session {
        let mut session = Session::new(config(), 9);
        session.dispatch(Input::StartSetup);
        session.dispatch(Input::set_player_name(0, "Ada"));
        session.dispatch(Input::set_player_name(1, "Bo"));
        session.dispatch(Input::StartGame);
        session
    }

    #[test]
    fn test_new_session_begins() {
        let session = Session::new(config(), 1);
        assert_eq!(session.state().tag(), PhaseTag::Begin);
        assert!(session.history().is_empty());
        assert!(config().contains(session.state().secret_station()));
    }

    #[test]
    fn test_dispatch_records_history() {
        let mut session = Session::new(config(), 1);
        session.dispatch(Input::StartGame);
        session.dispatch(Input::StartSetup);

        let history: Vec<_> = session.history().iter().cloned().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].phase, PhaseTag::Begin);
        assert!(!history[0].changed);
        assert_eq!(history[1].input, Input::StartSetup);
        assert!(history[1].changed);
        assert_eq!(history[1].sequence, 1);
    }

    #[test]
    fn test_press_maps_keys() {
        let mut session = seated_session();
        let before = session.history().len();

        session.press(Key::ShiftRight);
        assert_eq!(session.state().current().unwrap().station, Station::new(3));

        // escape means nothing mid-turn and is not recorded
        session.press(Key::Escape);
        assert_eq!(session.history().len(), before + 1);
    }

    #[test]
    fn test_snapshot_round_trip_keeps_rng() {
        let mut session = seated_session();
        let bytes = session.to_bytes().unwrap();
        let mut restored = Session::from_bytes(&bytes).unwrap();

        assert_eq!(restored.state(), session.state());
        assert_eq!(restored.history(), session.history());

        // win with the current player, then draw a new secret on both
        for s in [&mut session, &mut restored] {
            let secret = s.state().secret_station().raw();
            s.dispatch(Input::MoveToFirst);
            for _ in 1..secret {
                s.dispatch(Input::MoveRight);
            }
            s.dispatch(Input::GetOff);
            assert_eq!(s.state().tag(), PhaseTag::Over);
            s.dispatch(Input::PlayAgain);
        }
        assert_eq!(restored.state(), session.state());
        assert_eq!(restored.history().len(), session.history().len());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            Session::from_bytes(&[1, 2, 3]),
            Err(SessionError::Decode { .. })
        ));
    }

    #[test]
    fn test_restore_rejects_bad_current_player() {
        let roster: Roster = vec![
            Player::new("Ada", Station::new(1)),
            Player::new("Bo", Station::new(1)),
        ]
        .into_iter()
        .collect();
        let state = GameState::from_parts(
            config(),
            Station::new(2),
            Phase::Turn {
                roster,
                current: PlayerId::new(5),
            },
        );
        let snapshot = SessionSnapshot {
            state,
            rng: GameRng::new(1).state(),
            history: Vector::new(),
        };

        let err = Session::restore(snapshot).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid session checkpoint: current player not on the roster"
        );
    }

    fn snapshot_of(state: GameState) -> SessionSnapshot {
        SessionSnapshot {
            state,
            rng: GameRng::new(1).state(),
            history: Vector::new(),
        }
    }

    #[test]
    fn test_restore_rejects_winner_off_roster() {
        let roster: Roster = vec![
            Player::new("Ada", Station::new(1)),
            Player::new("Bo", Station::new(1)),
        ]
        .into_iter()
        .collect();
        let state = GameState::from_parts(
            config(),
            Station::new(2),
            Phase::Over {
                roster,
                current: PlayerId::new(0),
                winner: Player::new("Zed", Station::new(2)),
            },
        );

        let err = Session::restore(snapshot_of(state)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid session checkpoint: winner is not the current player"
        );
    }

    #[test]
    fn test_restore_rejects_blank_seat() {
        let mut seats = Seats::empty(2);
        seats.set(0, Player::new("   ", Station::new(3)));
        let state = GameState::from_parts(config(), Station::new(2), Phase::Setup { seats });

        assert!(matches!(
            Session::restore(snapshot_of(state)),
            Err(SessionError::Invalid {
                reason: "seated player has a blank name"
            })
        ));
    }

    #[test]
    fn test_restore_rejects_seat_off_first_station() {
        let mut seats = Seats::empty(2);
        seats.set(1, Player::new("Ada", Station::new(3)));
        let state = GameState::from_parts(config(), Station::new(2), Phase::Setup { seats });

        assert!(matches!(
            Session::restore(snapshot_of(state)),
            Err(SessionError::Invalid {
                reason: "seated player not at the first station"
            })
        ));
    }

    #[test]
    fn test_sequence_saturates() {
        let mut session = Session::new(config(), 1);
        session.sequence = u32::MAX;
        session.dispatch(Input::StartSetup);
        session.dispatch(Input::StartGame);

        let last = session.history().last().unwrap();
        assert_eq!(last.sequence, u32::MAX);
    }

    #[test]
    fn test_restore_rejects_off_track_secret() {
        let snapshot = SessionSnapshot {
            state: GameState::from_parts(config(), Station::new(9), Phase::Begin),
            rng: GameRng::new(1).state(),
            history: Vector::new(),
        };

        assert!(matches!(
            Session::restore(snapshot),
            Err(SessionError::Invalid { .. })
        ));
    }
}
