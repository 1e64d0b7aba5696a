//! Match sessions: state-passing loop, history, checkpoints.

pub mod error;
pub mod driver;

pub use error::SessionError;
pub use driver::{Session, SessionSnapshot};
