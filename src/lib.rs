//! # secret-station
//!
//! Turn engine for a local party game. Players ride a train along a line of
//! stations and take turns deciding where to get off; whoever gets off at
//! the secret station wins.
//!
//! ## Design Principles
//!
//! 1. **States are values**: every input produces a new [`GameState`]. The
//!    presentation layer holds the latest one and renders from it.
//!
//! 2. **One variant per phase**: [`Phase`] carries only the data valid in
//!    that phase, so setup seats and the in-game roster cannot be confused.
//!
//! 3. **Out-of-phase input is not an error**: the engine stays where it is.
//!
//! ## Modules
//!
//! - `core`: Configuration, stations, players, inputs, RNG, state
//! - `rules`: The transition function and movement
//! - `view`: What players may see of a state
//! - `controls`: Keyboard mapping
//! - `session`: State-passing loop with history and checkpoints
//!
//! ## Example
//!
//! ```
//! use secret_station::{Input, PhaseTag, Session, TrackConfig};
//!
//! let mut session = Session::new(TrackConfig::default(), 42);
//! session.dispatch(Input::StartSetup);
//! session.dispatch(Input::set_player_name(0, "Ada"));
//! session.dispatch(Input::set_player_name(1, "Bo"));
//! session.dispatch(Input::StartGame);
//!
//! assert_eq!(session.state().tag(), PhaseTag::Turn);
//! assert_eq!(session.view().secret_station, None);
//! ```

pub mod core;
pub mod rules;
pub mod view;
pub mod controls;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, TrackConfig, TrackConfigBuilder,
    Station, Player, PlayerId, Roster, Seats,
    Input, InputKind, InputRecord,
    GameRng, GameRngState, StationSource,
    GameState, InvalidState, Phase, PhaseTag,
};

pub use crate::rules::{apply, legal_inputs};

pub use crate::view::{GameView, PlayerRow, SeatRow};

pub use crate::controls::{input_for_key, Key};

pub use crate::session::{Session, SessionError, SessionSnapshot};
