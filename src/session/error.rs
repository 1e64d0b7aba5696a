//! Session error types.

use derive_more::{Display, Error};

/// Why a session checkpoint could not be saved or restored.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// Checkpoint bytes could not be produced.
    #[display("failed to encode session: {source}")]
    Encode {
        /// Underlying codec error.
        source: bincode::Error,
    },
    /// Checkpoint bytes could not be read.
    #[display("failed to decode session: {source}")]
    Decode {
        /// Underlying codec error.
        source: bincode::Error,
    },
    /// The checkpoint decoded but describes an impossible state.
    #[display("invalid session checkpoint: {reason}")]
    Invalid {
        /// Which invariant failed.
        reason: &'static str,
    },
}
