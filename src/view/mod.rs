//! Presentation-facing projections of game state.
//!
//! A presentation layer should render from a [`GameView`] rather than from
//! the raw state, which carries the secret station in every phase.

pub mod game_view;

pub use game_view::{GameView, PlayerRow, SeatRow};
