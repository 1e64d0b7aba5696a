//! Game state: one value per moment of the match.
//!
//! ## Phases
//!
//! A match moves through five phases:
//! - `Begin`: title screen, nobody seated
//! - `Setup`: players take seats and enter names
//! - `Turn`: the current player rides the train
//! - `TurnResult`: the current player got off at the wrong station
//! - `Over`: someone got off at the secret station
//!
//! Each phase carries exactly the data that is valid in it. Setup holds a
//! sparse [`Seats`] row; every later phase holds a dense [`Roster`] and a
//! current player.
//!
//! States are never mutated in place by the engine. Each input produces a
//! new `GameState`; cloning one is cheap since the roster is persistent.
//!
//! Deserialized states go through [`GameState::validate`], so a state read
//! from disk satisfies the same invariants as one built by the engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::config::TrackConfig;
use super::player::{Player, PlayerId, Roster, Seats};
use super::rng::StationSource;
use super::station::Station;

/// Payload-free phase discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseTag {
    Begin,
    Setup,
    Turn,
    TurnResult,
    Over,
}

impl std::fmt::Display for PhaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhaseTag::Begin => "BEGIN",
            PhaseTag::Setup => "SETUP",
            PhaseTag::Turn => "TURN",
            PhaseTag::TurnResult => "TURN_RESULT",
            PhaseTag::Over => "OVER",
        };
        f.write_str(name)
    }
}

/// Phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen.
    Begin,

    /// Seats being filled.
    Setup {
        /// One entry per seat, `max_players` long.
        seats: Seats,
    },

    /// `current` is riding the train.
    Turn {
        /// Players in seat order.
        roster: Roster,
        /// Whose turn it is.
        current: PlayerId,
    },

    /// `current` got off at the wrong station.
    TurnResult {
        /// Players in seat order.
        roster: Roster,
        /// The player who missed.
        current: PlayerId,
    },

    /// `winner` got off at the secret station.
    Over {
        /// Players in seat order, stations as they ended.
        roster: Roster,
        /// The player whose declaration won.
        current: PlayerId,
        /// The winning player's record.
        winner: Player,
    },
}

impl Phase {
    /// The phase discriminant.
    #[must_use]
    pub fn tag(&self) -> PhaseTag {
        match self {
            Phase::Begin => PhaseTag::Begin,
            Phase::Setup { .. } => PhaseTag::Setup,
            Phase::Turn { .. } => PhaseTag::Turn,
            Phase::TurnResult { .. } => PhaseTag::TurnResult,
            Phase::Over { .. } => PhaseTag::Over,
        }
    }
}

/// A state the engine could never have produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display("invalid game state: {reason}")]
pub struct InvalidState {
    /// Which invariant failed.
    pub reason: &'static str,
}

/// Unvalidated shape used for deserialization.
#[derive(Clone, Debug, Deserialize)]
struct RawGameState {
    config: TrackConfig,
    secret_station: Station,
    phase: Phase,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState::from_parts(raw.config, raw.secret_station, raw.phase);
        state.validate()?;
        Ok(state)
    }
}

/// Complete state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    config: TrackConfig,

    /// Target station for the current round. Hidden from players until `Over`.
    secret_station: Station,

    /// Phase and its data.
    pub phase: Phase,
}

impl GameState {
    /// A fresh match on the title screen, with a newly drawn secret.
    pub fn begin<S: StationSource + ?Sized>(config: TrackConfig, source: &mut S) -> Self {
        let secret_station = source.roll_station(&config);
        Self {
            config,
            secret_station,
            phase: Phase::Begin,
        }
    }

    /// Assemble a state from parts.
    ///
    /// Callers are responsible for the phase data agreeing with `config`;
    /// [`GameState::validate`] checks that they do.
    #[must_use]
    pub fn from_parts(config: TrackConfig, secret_station: Station, phase: Phase) -> Self {
        Self {
            config,
            secret_station,
            phase,
        }
    }

    /// Same config, new secret and phase.
    #[must_use]
    pub(crate) fn with(&self, secret_station: Station, phase: Phase) -> Self {
        Self {
            config: self.config,
            secret_station,
            phase,
        }
    }

    /// Same config and secret, new phase.
    #[must_use]
    pub(crate) fn with_phase(&self, phase: Phase) -> Self {
        self.with(self.secret_station, phase)
    }

    /// Match configuration.
    #[must_use]
    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    /// The secret station. Views should only show this once the game is over.
    #[must_use]
    pub fn secret_station(&self) -> Station {
        self.secret_station
    }

    /// Current phase discriminant.
    #[must_use]
    pub fn tag(&self) -> PhaseTag {
        self.phase.tag()
    }

    /// Setup seats, if in setup.
    #[must_use]
    pub fn seats(&self) -> Option<&Seats> {
        match &self.phase {
            Phase::Setup { seats } => Some(seats),
            _ => None,
        }
    }

    /// The dense roster, once play has started.
    #[must_use]
    pub fn players(&self) -> Option<&Roster> {
        match &self.phase {
            Phase::Turn { roster, .. }
            | Phase::TurnResult { roster, .. }
            | Phase::Over { roster, .. } => Some(roster),
            Phase::Begin | Phase::Setup { .. } => None,
        }
    }

    /// Whose turn it is, once play has started.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        match &self.phase {
            Phase::Turn { current, .. }
            | Phase::TurnResult { current, .. }
            | Phase::Over { current, .. } => Some(*current),
            Phase::Begin | Phase::Setup { .. } => None,
        }
    }

    /// The current player's record.
    #[must_use]
    pub fn current(&self) -> Option<&Player> {
        let current = self.current_player()?;
        self.players()?.get(current)
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match &self.phase {
            Phase::Over { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Has someone won?
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    /// Check that this state is one the engine can reach.
    ///
    /// - the secret is on the track
    /// - setup has `max_players` seats, each occupant named and at the first station
    /// - in play, the roster size is within bounds and `current` is on it
    /// - every player is on the track
    /// - a winner is the current player, standing on the secret
    pub fn validate(&self) -> Result<(), InvalidState> {
        let invalid = |reason| Err(InvalidState { reason });
        let config = &self.config;

        if !config.contains(self.secret_station) {
            return invalid("secret station off the track");
        }

        match &self.phase {
            Phase::Begin => Ok(()),
            Phase::Setup { seats } => {
                if seats.len() != config.max_players() {
                    return invalid("seat count does not match configuration");
                }
                for player in seats.iter().flatten() {
                    if player.name.trim().is_empty() {
                        return invalid("seated player has a blank name");
                    }
                    if player.station != config.first_station() {
                        return invalid("seated player not at the first station");
                    }
                }
                Ok(())
            }
            Phase::Turn { roster, current }
            | Phase::TurnResult { roster, current }
            | Phase::Over { roster, current, .. } => {
                if roster.len() < config.min_players() || roster.len() > config.max_players() {
                    return invalid("roster size outside configured bounds");
                }
                if current.index() >= roster.len() {
                    return invalid("current player not on the roster");
                }
                if roster.iter().any(|(_, p)| !config.contains(p.station)) {
                    return invalid("player off the track");
                }
                if let Some(winner) = self.winner() {
                    if roster.get(*current) != Some(winner) {
                        return invalid("winner is not the current player");
                    }
                    if winner.station != self.secret_station {
                        return invalid("winner is not at the secret station");
                    }
                }
                Ok(())
            }
        }
    }
}
