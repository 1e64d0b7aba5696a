//! Game rules: the state machine.
//!
//! - [`apply`]: the transition function over `(phase, input)`
//! - [`legal_inputs`]: which inputs can change the current state
//! - movement transforms, applied only to the current player

pub mod engine;
pub mod movement;

pub use engine::{apply, legal_inputs};
pub use movement::{move_left, move_right, move_to_first, move_to_last, with_current_player, Movement};
