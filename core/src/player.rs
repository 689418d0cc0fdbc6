use core::ops::{Index, IndexMut};
use serde::{Deserialize, Serialize};

use crate::CellCount;

/// One of the two hot-seat players sharing a multi-player board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Zero-based index, `0` for the first player and `1` for the second.
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::First
    }
}

/// Mines revealed by each player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tallies {
    counts: [CellCount; 2],
}

impl Tallies {
    pub const fn get(&self, player: Player) -> CellCount {
        self.counts[player.index()]
    }

    pub const fn total(&self) -> CellCount {
        self.counts[0] + self.counts[1]
    }

    /// The player with strictly more mines, `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        use core::cmp::Ordering::*;
        match self.counts[0].cmp(&self.counts[1]) {
            Greater => Some(Player::First),
            Less => Some(Player::Second),
            Equal => None,
        }
    }
}

impl Index<Player> for Tallies {
    type Output = CellCount;

    fn index(&self, player: Player) -> &Self::Output {
        &self.counts[player.index()]
    }
}

impl IndexMut<Player> for Tallies {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.counts[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        assert_eq!(Player::First.opponent().opponent(), Player::First);
    }

    #[test]
    fn leader_is_none_on_tie() {
        let mut tallies = Tallies::default();
        assert_eq!(tallies.leader(), None);

        tallies[Player::Second] += 1;
        assert_eq!(tallies.leader(), Some(Player::Second));

        tallies[Player::First] += 1;
        assert_eq!(tallies.leader(), None);
        assert_eq!(tallies.total(), 2);
    }
}
