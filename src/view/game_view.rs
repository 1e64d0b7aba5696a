//! Render-ready projection of a [`GameState`].
//!
//! The view carries everything a presentation layer needs to draw a frame
//! and nothing it must not show: the secret station stays `None` until the
//! game is over.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, InputKind, Phase, PhaseTag, PlayerId, Station};
use crate::rules::legal_inputs;

/// One row of the player list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRow {
    /// Roster position.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Where the player is.
    pub station: Station,
    /// Is it this player's turn?
    pub is_current: bool,
}

/// One seat on the setup screen. `name` is `None` for an empty seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRow {
    /// Seat index.
    pub seat: usize,
    /// Occupant's name.
    pub name: Option<String>,
}

/// What the players are allowed to see of a state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Phase being shown.
    pub phase: PhaseTag,
    /// First station of the track.
    pub first_station: Station,
    /// Last station of the track.
    pub last_station: Station,
    /// Setup seats; empty outside setup.
    pub seats: Vec<SeatRow>,
    /// Player list; empty before the game starts.
    pub players: Vec<PlayerRow>,
    /// Winner's name, once someone has won.
    pub winner: Option<String>,
    /// The secret, revealed only when the game is over.
    pub secret_station: Option<Station>,
    /// Whether the setup roster is large enough to start.
    pub can_start: bool,
    /// Inputs that would change the state.
    pub controls: Vec<InputKind>,
}

impl GameView {
    /// Project a state for display.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let config = state.config();
        let current = state.current_player();

        let seats: Vec<SeatRow> = match &state.phase {
            Phase::Setup { seats } => seats
                .iter()
                .enumerate()
                .map(|(seat, occupant)| SeatRow {
                    seat,
                    name: occupant.map(|p| p.name.clone()),
                })
                .collect(),
            _ => Vec::new(),
        };

        let players: Vec<PlayerRow> = state
            .players()
            .map(|roster| {
                roster
                    .iter()
                    .map(|(id, p)| PlayerRow {
                        id,
                        name: p.name.clone(),
                        station: p.station,
                        is_current: Some(id) == current,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let can_start = state
            .seats()
            .is_some_and(|s| s.occupied() >= config.min_players());

        Self {
            phase: state.tag(),
            first_station: config.first_station(),
            last_station: config.last_station(),
            seats,
            players,
            winner: state.winner().map(|w| w.name.clone()),
            secret_station: state.is_over().then(|| state.secret_station()),
            can_start,
            controls: legal_inputs(state),
        }
    }

    /// The row for the current player, if there is one.
    #[must_use]
    pub fn current(&self) -> Option<&PlayerRow> {
        self.players.iter().find(|p| p.is_current)
    }
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        Self::from_state(state)
    }
}
