//! Seat identification and per-seat data storage.
//!
//! The duel has exactly two fixed actors: the human player and the house
//! bot. `SeatMap` stores one value per seat with O(1) access and
//! indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The human player.
    Player,
    /// The automated opponent.
    Bot,
}

impl Seat {
    /// The opposing seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::Player => Seat::Bot,
            Seat::Bot => Seat::Player,
        }
    }

    /// Both seats, player first.
    #[must_use]
    pub const fn both() -> [Seat; 2] {
        [Seat::Player, Seat::Bot]
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "Player 1"),
            Seat::Bot => write!(f, "Bot"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use sum_duel::core::{Seat, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::with_value(0);
/// wins[Seat::Player] += 1;
///
/// assert_eq!(wins[Seat::Player], 1);
/// assert_eq!(wins[Seat::Bot], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    player: T,
    bot: T,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            player: factory(Seat::Player),
            bot: factory(Seat::Bot),
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            bot: value,
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        match seat {
            Seat::Player => &self.player,
            Seat::Bot => &self.bot,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::Player => &mut self.player,
            Seat::Bot => &mut self.bot,
        }
    }

    /// Iterate over (Seat, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        [(Seat::Player, &self.player), (Seat::Bot, &self.bot)].into_iter()
    }

    /// Map both entries to a new SeatMap.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SeatMap<U> {
        SeatMap {
            player: f(&self.player),
            bot: f(&self.bot),
        }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Seat::Player.opponent(), Seat::Bot);
        assert_eq!(Seat::Bot.opponent(), Seat::Player);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Seat::Player), "Player 1");
        assert_eq!(format!("{}", Seat::Bot), "Bot");
    }

    #[test]
    fn test_seat_map_new() {
        let map = SeatMap::new(|seat| match seat {
            Seat::Player => 10,
            Seat::Bot => 20,
        });

        assert_eq!(map[Seat::Player], 10);
        assert_eq!(map[Seat::Bot], 20);
    }

    #[test]
    fn test_seat_map_mutation() {
        let mut map: SeatMap<Vec<u32>> = SeatMap::default();
        map[Seat::Bot].push(3);

        assert!(map[Seat::Player].is_empty());
        assert_eq!(map[Seat::Bot], vec![3]);
    }

    #[test]
    fn test_seat_map_iter() {
        let map = SeatMap::new(|seat| seat as u8);
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, Seat::Player);
        assert_eq!(pairs[1].0, Seat::Bot);
    }

    #[test]
    fn test_seat_map_map() {
        let piles: SeatMap<Vec<u32>> = SeatMap::new(|seat| match seat {
            Seat::Player => vec![1, 2, 3],
            Seat::Bot => vec![4],
        });
        let sizes = piles.map(Vec::len);

        assert_eq!(sizes[Seat::Player], 3);
        assert_eq!(sizes[Seat::Bot], 1);
    }

    #[test]
    fn test_seat_map_serialization() {
        let map: SeatMap<u32> = SeatMap::new(|s| s as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SeatMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
