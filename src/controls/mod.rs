//! Keyboard controls for presentation layers.

pub mod keymap;

pub use keymap::{input_for_key, Key};
