//! Match configuration.
//!
//! A `TrackConfig` fixes the shape of a match before anything is played:
//! - the inclusive station bounds of the track
//! - how many players must join before the game can start
//! - how many seats the setup screen offers
//!
//! Configurations are validated once, at construction. Everything downstream
//! (the transition function, views, sessions) assumes a valid config.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::station::Station;

/// Most seats a track can offer. Player ids are `u8`.
pub const MAX_SEATS: usize = 255;

/// Why a configuration was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// The track needs at least two stations.
    #[display("track must have first < last, got {first}..={last}")]
    EmptyTrack {
        /// Requested first station.
        first: i32,
        /// Requested last station.
        last: i32,
    },
    /// At least one player is required to start.
    #[display("minimum player count must be at least 1")]
    NoPlayers,
    /// The minimum exceeds the number of seats.
    #[display("minimum of {min} players exceeds {max} seats")]
    PlayerBounds {
        /// Requested minimum.
        min: usize,
        /// Requested maximum.
        max: usize,
    },
    /// More seats than player ids can address.
    #[display("{max} seats requested, at most {} supported", MAX_SEATS)]
    TooManySeats {
        /// Requested maximum.
        max: usize,
    },
}

/// Unvalidated shape used for deserialization.
#[derive(Clone, Copy, Debug, Deserialize)]
struct RawTrackConfig {
    first_station: i32,
    last_station: i32,
    min_players: usize,
    max_players: usize,
}

impl TryFrom<RawTrackConfig> for TrackConfig {
    type Error = ConfigError;

    fn try_from(raw: RawTrackConfig) -> Result<Self, Self::Error> {
        TrackConfig::new(
            raw.first_station,
            raw.last_station,
            raw.min_players,
            raw.max_players,
        )
    }
}

/// Station bounds and roster limits for one match.
///
/// ## Example
///
/// ```
/// use secret_station::core::TrackConfig;
///
/// let config = TrackConfig::new(1, 5, 2, 4).unwrap();
/// assert_eq!(config.station_count(), 5);
///
/// assert!(TrackConfig::new(3, 3, 2, 4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTrackConfig")]
pub struct TrackConfig {
    first_station: Station,
    last_station: Station,
    min_players: usize,
    max_players: usize,
}

impl TrackConfig {
    /// Create a validated configuration.
    pub fn new(
        first_station: i32,
        last_station: i32,
        min_players: usize,
        max_players: usize,
    ) -> Result<Self, ConfigError> {
        if first_station >= last_station {
            return Err(ConfigError::EmptyTrack {
                first: first_station,
                last: last_station,
            });
        }
        if min_players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if min_players > max_players {
            return Err(ConfigError::PlayerBounds {
                min: min_players,
                max: max_players,
            });
        }
        if max_players > MAX_SEATS {
            return Err(ConfigError::TooManySeats { max: max_players });
        }

        Ok(Self {
            first_station: Station::new(first_station),
            last_station: Station::new(last_station),
            min_players,
            max_players,
        })
    }

    /// Start a builder seeded with the default configuration.
    #[must_use]
    pub fn builder() -> TrackConfigBuilder {
        TrackConfigBuilder::default()
    }

    /// First station of the track (inclusive).
    #[must_use]
    pub const fn first_station(&self) -> Station {
        self.first_station
    }

    /// Last station of the track (inclusive).
    #[must_use]
    pub const fn last_station(&self) -> Station {
        self.last_station
    }

    /// Players required before the game can start.
    #[must_use]
    pub const fn min_players(&self) -> usize {
        self.min_players
    }

    /// Seats offered during setup.
    #[must_use]
    pub const fn max_players(&self) -> usize {
        self.max_players
    }

    /// Number of stations on the track.
    #[must_use]
    pub fn station_count(&self) -> usize {
        (i64::from(self.last_station.raw()) - i64::from(self.first_station.raw()) + 1) as usize
    }

    /// Is `station` on the track?
    #[must_use]
    pub fn contains(&self, station: Station) -> bool {
        self.first_station <= station && station <= self.last_station
    }
}

impl Default for TrackConfig {
    /// Four stations (0 through 3), two to four players.
    fn default() -> Self {
        Self {
            first_station: Station::new(0),
            last_station: Station::new(3),
            min_players: 2,
            max_players: 4,
        }
    }
}

/// Builder for [`TrackConfig`]. Validation happens in [`build`](Self::build).
#[derive(Clone, Copy, Debug)]
pub struct TrackConfigBuilder {
    first_station: i32,
    last_station: i32,
    min_players: usize,
    max_players: usize,
}

impl Default for TrackConfigBuilder {
    fn default() -> Self {
        let config = TrackConfig::default();
        Self {
            first_station: config.first_station.raw(),
            last_station: config.last_station.raw(),
            min_players: config.min_players,
            max_players: config.max_players,
        }
    }
}

impl TrackConfigBuilder {
    /// Set both track bounds.
    #[must_use]
    pub fn stations(mut self, first: i32, last: i32) -> Self {
        self.first_station = first;
        self.last_station = last;
        self
    }

    /// Set the minimum roster size.
    #[must_use]
    pub fn min_players(mut self, count: usize) -> Self {
        self.min_players = count;
        self
    }

    /// Set the number of seats.
    #[must_use]
    pub fn max_players(mut self, count: usize) -> Self {
        self.max_players = count;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<TrackConfig, ConfigError> {
        TrackConfig::new(
            self.first_station,
            self.last_station,
            self.min_players,
            self.max_players,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = TrackConfig::new(1, 3, 2, 2).unwrap();

        assert_eq!(config.first_station(), Station::new(1));
        assert_eq!(config.last_station(), Station::new(3));
        assert_eq!(config.min_players(), 2);
        assert_eq!(config.max_players(), 2);
        assert_eq!(config.station_count(), 3);
    }

    #[test]
    fn test_rejects_empty_track() {
        assert_eq!(
            TrackConfig::new(3, 3, 1, 2),
            Err(ConfigError::EmptyTrack { first: 3, last: 3 })
        );
        assert!(TrackConfig::new(5, 1, 1, 2).is_err());
    }

    #[test]
    fn test_rejects_bad_player_bounds() {
        assert_eq!(TrackConfig::new(0, 3, 0, 2), Err(ConfigError::NoPlayers));
        assert_eq!(
            TrackConfig::new(0, 3, 3, 2),
            Err(ConfigError::PlayerBounds { min: 3, max: 2 })
        );
        assert_eq!(
            TrackConfig::new(0, 3, 2, 256),
            Err(ConfigError::TooManySeats { max: 256 })
        );
    }

    #[test]
    fn test_contains() {
        let config = TrackConfig::new(-1, 2, 1, 1).unwrap();

        assert!(config.contains(Station::new(-1)));
        assert!(config.contains(Station::new(2)));
        assert!(!config.contains(Station::new(-2)));
        assert!(!config.contains(Station::new(3)));
    }

    #[test]
    fn test_builder_defaults() {
        let config = TrackConfig::builder().build().unwrap();
        assert_eq!(config, TrackConfig::default());
        assert_eq!(config.station_count(), 4);
    }

    #[test]
    fn test_builder() {
        let config = TrackConfig::builder()
            .stations(1, 10)
            .min_players(3)
            .max_players(6)
            .build()
            .unwrap();

        assert_eq!(config.last_station(), Station::new(10));
        assert_eq!(config.min_players(), 3);
        assert_eq!(config.max_players(), 6);

        assert!(TrackConfig::builder().min_players(5).build().is_err());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::PlayerBounds { min: 3, max: 2 };
        assert_eq!(err.to_string(), "minimum of 3 players exceeds 2 seats");
    }

    #[test]
    fn test_serde_validates() {
        let config = TrackConfig::new(1, 3, 2, 2).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let restored: TrackConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);

        let bad = r#"{"first_station":4,"last_station":1,"min_players":1,"max_players":2}"#;
        assert!(serde_json::from_str::<TrackConfig>(bad).is_err());
    }
}
