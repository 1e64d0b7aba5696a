//! Movement transforms and the current-player projection.
//!
//! Every movement input is a per-player transform `(config, player) ->
//! player`. [`with_current_player`] applies a transform to the current
//! player only, so no movement can ever touch anyone else.

use crate::core::{Player, PlayerId, Roster, TrackConfig};

/// A per-player movement transform.
pub type Movement = fn(&TrackConfig, &Player) -> Player;

/// One station left, clamped at the first station.
#[must_use]
pub fn move_left(config: &TrackConfig, player: &Player) -> Player {
    player.at(player.station.left_within(config))
}

/// One station right, clamped at the last station.
#[must_use]
pub fn move_right(config: &TrackConfig, player: &Player) -> Player {
    player.at(player.station.right_within(config))
}

/// Jump to the first station.
#[must_use]
pub fn move_to_first(config: &TrackConfig, player: &Player) -> Player {
    player.at(config.first_station())
}

/// Jump to the last station.
#[must_use]
pub fn move_to_last(config: &TrackConfig, player: &Player) -> Player {
    player.at(config.last_station())
}

/// Apply `movement` to the current player, leaving everyone else as is.
#[must_use]
pub fn with_current_player(
    config: &TrackConfig,
    roster: &Roster,
    current: PlayerId,
    movement: Movement,
) -> Roster {
    roster.map_one(current, |player| movement(config, player))
}
