//! Stations: integer positions along the track.

use serde::{Deserialize, Serialize};

use super::config::TrackConfig;

/// A position on the track.
///
/// Stations are plain integers; the [`TrackConfig`] of the match decides
/// which of them exist. Movement helpers clamp to the track instead of
/// wrapping or failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Station(pub i32);

impl Station {
    /// Create a new station.
    #[must_use]
    pub const fn new(station: i32) -> Self {
        Self(station)
    }

    /// Get the raw station number.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// One station to the left, or `self` at the first station.
    #[must_use]
    pub fn left_within(self, config: &TrackConfig) -> Self {
        if self > config.first_station() {
            Self(self.0 - 1)
        } else {
            self
        }
    }

    /// One station to the right, or `self` at the last station.
    #[must_use]
    pub fn right_within(self, config: &TrackConfig) -> Self {
        if self < config.last_station() {
            Self(self.0 + 1)
        } else {
            self
        }
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "station {}", self.0)
    }
}
