//! Core engine types: configuration, stations, players, inputs, RNG, state.
//!
//! This module holds the data the engine operates on. The transitions
//! between states live in [`crate::rules`].

pub mod config;
pub mod station;
pub mod player;
pub mod input;
pub mod rng;
pub mod state;

pub use config::{ConfigError, TrackConfig, TrackConfigBuilder, MAX_SEATS};
pub use station::Station;
pub use player::{Player, PlayerId, Roster, Seats};
pub use input::{Input, InputKind, InputRecord};
pub use rng::{GameRng, GameRngState, StationSource};
pub use state::{GameState, InvalidState, Phase, PhaseTag};
