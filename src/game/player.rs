use serde::{Deserialize, Serialize};

use super::board::DiscKind;

/// Discs of each special kind handed to every player at the start.
pub const SPECIAL_DISCS_PER_KIND: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    PlayerOne,
    PlayerTwo,
}

impl Owner {
    /// Get the other player
    pub fn other(self) -> Owner {
        match self {
            Owner::PlayerOne => Owner::PlayerTwo,
            Owner::PlayerTwo => Owner::PlayerOne,
        }
    }

    /// Seat index, 0 or 1
    pub fn index(self) -> usize {
        match self {
            Owner::PlayerOne => 0,
            Owner::PlayerTwo => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Owner> {
        match index {
            0 => Some(Owner::PlayerOne),
            1 => Some(Owner::PlayerTwo),
            _ => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Owner::PlayerOne => "Player 1",
            Owner::PlayerTwo => "Player 2",
        }
    }
}

/// One seat at the table and its disc inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: Owner,
    is_computer: bool,
    ordinary: u32,
    boring: u32,
    magnetic: u32,
}

impl Player {
    pub fn new(id: Owner, is_computer: bool, ordinary: u32, boring: u32, magnetic: u32) -> Self {
        Player {
            id,
            is_computer,
            ordinary,
            boring,
            magnetic,
        }
    }

    /// A player with the standard starting inventory for a game of `ordinary` ordinary discs
    pub fn starting(id: Owner, is_computer: bool, ordinary: u32) -> Self {
        Self::new(
            id,
            is_computer,
            ordinary,
            SPECIAL_DISCS_PER_KIND,
            SPECIAL_DISCS_PER_KIND,
        )
    }

    pub fn id(&self) -> Owner {
        self.id
    }

    pub fn is_computer(&self) -> bool {
        self.is_computer
    }

    /// Discs left of the given kind
    pub fn remaining(&self, kind: DiscKind) -> u32 {
        match kind {
            DiscKind::Ordinary => self.ordinary,
            DiscKind::Boring => self.boring,
            DiscKind::Magnetic => self.magnetic,
        }
    }

    pub fn has_disc(&self, kind: DiscKind) -> bool {
        self.remaining(kind) > 0
    }

    /// Kinds the player can still play, in `DiscKind::ALL` order
    pub fn available_kinds(&self) -> Vec<DiscKind> {
        DiscKind::ALL
            .into_iter()
            .filter(|&kind| self.has_disc(kind))
            .collect()
    }

    /// Take one disc of `kind` out of the inventory. Returns false if none are left.
    pub(crate) fn spend(&mut self, kind: DiscKind) -> bool {
        let count = match kind {
            DiscKind::Ordinary => &mut self.ordinary,
            DiscKind::Boring => &mut self.boring,
            DiscKind::Magnetic => &mut self.magnetic,
        };
        match count.checked_sub(1) {
            Some(left) => {
                *count = left;
                true
            }
            None => false,
        }
    }

    /// Credit one ordinary disc back, whatever kind was displaced.
    pub(crate) fn refund_ordinary(&mut self) {
        self.ordinary += 1;
    }
}
