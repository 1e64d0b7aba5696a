//! The transition function.
//!
//! [`apply`] maps a state and an input to the next state. It is total:
//! any input the current phase does not handle returns the state unchanged.
//! The only non-determinism is the secret-station draw, which goes through
//! the caller-supplied [`StationSource`].

use tracing::{debug, info, trace};

use super::movement::{
    move_left, move_right, move_to_first, move_to_last, with_current_player, Movement,
};
use crate::core::{
    GameState, Input, InputKind, Phase, Player, PlayerId, Roster, Seats, StationSource,
};

/// Compute the state that follows `state` after `input`.
///
/// ## Example
///
/// ```
/// use secret_station::core::{GameRng, GameState, Input, PhaseTag, TrackConfig};
/// use secret_station::rules::apply;
///
/// let mut rng = GameRng::new(1);
/// let config = TrackConfig::new(1, 3, 2, 2).unwrap();
///
/// let state = GameState::begin(config, &mut rng);
/// let state = apply(&state, &Input::StartSetup, &mut rng);
/// assert_eq!(state.tag(), PhaseTag::Setup);
///
/// // Not enough players yet: stays in setup
/// let state = apply(&state, &Input::StartGame, &mut rng);
/// assert_eq!(state.tag(), PhaseTag::Setup);
/// ```
pub fn apply<S: StationSource + ?Sized>(
    state: &GameState,
    input: &Input,
    source: &mut S,
) -> GameState {
    let config = *state.config();

    let next = match (&state.phase, input) {
        (Phase::Begin, Input::StartSetup) => state.with_phase(Phase::Setup {
            seats: Seats::empty(config.max_players()),
        }),

        (Phase::Setup { seats }, Input::SetPlayerName { seat, name }) => {
            let mut seats = seats.clone();
            let seated = if name.trim().is_empty() {
                seats.clear(*seat)
            } else {
                seats.set(*seat, Player::new(name.as_str(), config.first_station()))
            };
            if !seated {
                return stay(state, input);
            }
            state.with_phase(Phase::Setup { seats })
        }

        (Phase::Setup { seats }, Input::StartGame) => {
            if seats.occupied() < config.min_players() {
                return stay(state, input);
            }
            let roster = seats.compact();
            debug!(players = roster.len(), "starting game");
            state.with(
                source.roll_station(&config),
                Phase::Turn {
                    roster,
                    current: PlayerId::default(),
                },
            )
        }

        (Phase::Turn { roster, current }, Input::MoveLeft) => {
            moved(state, roster, *current, move_left)
        }
        (Phase::Turn { roster, current }, Input::MoveRight) => {
            moved(state, roster, *current, move_right)
        }
        (Phase::Turn { roster, current }, Input::MoveToFirst) => {
            moved(state, roster, *current, move_to_first)
        }
        (Phase::Turn { roster, current }, Input::MoveToLast) => {
            moved(state, roster, *current, move_to_last)
        }

        (Phase::Turn { roster, current }, Input::GetOff) => {
            let Some(player) = roster.get(*current) else {
                return stay(state, input);
            };
            if player.station == state.secret_station() {
                info!(player = %player.name, station = %player.station, "got off at the secret station");
                state.with_phase(Phase::Over {
                    roster: roster.clone(),
                    current: *current,
                    winner: player.clone(),
                })
            } else {
                debug!(player = %player.name, station = %player.station, "wrong station");
                state.with_phase(Phase::TurnResult {
                    roster: roster.clone(),
                    current: *current,
                })
            }
        }

        (Phase::TurnResult { roster, current }, Input::Acknowledge) => {
            state.with_phase(Phase::Turn {
                roster: roster.clone(),
                current: roster.next_after(*current),
            })
        }

        (Phase::Over { roster, .. }, Input::PlayAgain) => state.with(
            source.roll_station(&config),
            Phase::Turn {
                roster: roster.reset_to(config.first_station()),
                current: PlayerId::default(),
            },
        ),

        (Phase::Over { .. }, Input::NewGame) => GameState::begin(config, source),

        _ => return stay(state, input),
    };

    debug!(from = %state.tag(), to = %next.tag(), input = ?input.kind(), "transition");
    next
}

/// Inputs that can change `state`.
///
/// Guarded inputs are listed only when their guard currently holds, so a
/// UI can show exactly the controls that do something. Movement is listed
/// when it would actually move the current player.
#[must_use]
pub fn legal_inputs(state: &GameState) -> Vec<InputKind> {
    let config = state.config();

    match &state.phase {
        Phase::Begin => vec![InputKind::StartSetup],
        Phase::Setup { seats } => {
            let mut kinds = vec![InputKind::SetPlayerName];
            if seats.occupied() >= config.min_players() {
                kinds.push(InputKind::StartGame);
            }
            kinds
        }
        Phase::Turn { roster, current } => {
            let mut kinds = Vec::new();
            if let Some(player) = roster.get(*current) {
                if player.station > config.first_station() {
                    kinds.push(InputKind::MoveLeft);
                    kinds.push(InputKind::MoveToFirst);
                }
                if player.station < config.last_station() {
                    kinds.push(InputKind::MoveRight);
                    kinds.push(InputKind::MoveToLast);
                }
                kinds.push(InputKind::GetOff);
            }
            kinds
        }
        Phase::TurnResult { .. } => vec![InputKind::Acknowledge],
        Phase::Over { .. } => vec![InputKind::PlayAgain, InputKind::NewGame],
    }
}

fn moved(state: &GameState, roster: &Roster, current: PlayerId, movement: Movement) -> GameState {
    state.with_phase(Phase::Turn {
        roster: with_current_player(state.config(), roster, current, movement),
        current,
    })
}

fn stay(state: &GameState, input: &Input) -> GameState {
    trace!(phase = %state.tag(), input = ?input.kind(), "input ignored");
    state.clone()
}
