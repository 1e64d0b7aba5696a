//! Players, seats, and the roster.
//!
//! ## Seats
//!
//! During setup the table is a fixed row of `max_players` seats, each either
//! empty or holding a named player. Seats may have holes.
//!
//! ## Roster
//!
//! Once the game starts, the occupied seats are compacted into a dense,
//! ordered `Roster`. [`Seats::compact`] is the only way to build one from
//! setup, so no phase after setup ever sees an empty seat.
//!
//! The roster is backed by `im::Vector` so every state transition can hand
//! out a new roster without copying the old one. It never holds more than
//! [`MAX_SEATS`] players, so every position fits in a [`PlayerId`].

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::MAX_SEATS;
use super::station::Station;

/// Index into the dense roster. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A named player and where they are on the track.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Display name as entered at setup.
    pub name: String,

    /// Current station.
    pub station: Station,
}

impl Player {
    /// Create a player at the given station.
    pub fn new(name: impl Into<String>, station: Station) -> Self {
        Self {
            name: name.into(),
            station,
        }
    }

    /// Same player, different station.
    #[must_use]
    pub fn at(&self, station: Station) -> Self {
        Self {
            name: self.name.clone(),
            station,
        }
    }
}

/// Setup-phase seat row. `None` is an empty seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats {
    seats: SmallVec<[Option<Player>; 8]>,
}

impl Seats {
    /// A row of `count` empty seats.
    #[must_use]
    pub fn empty(count: usize) -> Self {
        Self {
            seats: (0..count).map(|_| None).collect(),
        }
    }

    /// Number of seats, occupied or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// True if there are no seats at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// The occupant of a seat, if any. Out-of-range seats read as empty.
    #[must_use]
    pub fn get(&self, seat: usize) -> Option<&Player> {
        self.seats.get(seat).and_then(Option::as_ref)
    }

    /// Seat a player. Returns false if `seat` does not exist.
    pub fn set(&mut self, seat: usize, player: Player) -> bool {
        match self.seats.get_mut(seat) {
            Some(slot) => {
                *slot = Some(player);
                true
            }
            None => false,
        }
    }

    /// Empty a seat. Returns false if `seat` does not exist.
    pub fn clear(&mut self, seat: usize) -> bool {
        match self.seats.get_mut(seat) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Number of occupied seats.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    /// Iterate over every seat in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Player>> {
        self.seats.iter().map(Option::as_ref)
    }

    /// Drop the empty seats, keeping seat order.
    #[must_use]
    pub fn compact(&self) -> Roster {
        self.seats.iter().flatten().cloned().collect()
    }
}

/// Dense, ordered player sequence used from the first turn onward.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vector<Player>", into = "Vector<Player>")]
pub struct Roster {
    players: Vector<Player>,
}

impl Roster {
    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if nobody is on the roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by id.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// The player after `player`, wrapping to the first.
    #[must_use]
    pub fn next_after(&self, player: PlayerId) -> PlayerId {
        if self.players.is_empty() {
            return PlayerId::default();
        }
        PlayerId(((player.index() + 1) % self.players.len()) as u8)
    }

    /// Rebuild the roster, transforming only the player at `target`.
    #[must_use]
    pub fn map_one(&self, target: PlayerId, f: impl FnOnce(&Player) -> Player) -> Self {
        let mut players = self.players.clone();
        if let Some(player) = players.get_mut(target.index()) {
            *player = f(player);
        }
        Self { players }
    }

    /// Everyone back to `station`, names and order kept.
    #[must_use]
    pub fn reset_to(&self, station: Station) -> Self {
        Self {
            players: self.players.iter().map(|p| p.at(station)).collect(),
        }
    }
}

impl From<Vector<Player>> for Roster {
    fn from(players: Vector<Player>) -> Self {
        players.into_iter().collect()
    }
}

impl From<Roster> for Vector<Player> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

/// Players past [`MAX_SEATS`] are dropped.
impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().take(MAX_SEATS).collect(),
        }
    }
}
