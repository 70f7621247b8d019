//! Player record

use std::fmt;

use crate::world::START_POS;

/// Things that end up in the player's pack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Treasure,
    Potion,
}

impl Item {
    pub fn name(&self) -> &'static str {
        match self {
            Item::Treasure => "Treasure",
            Item::Potion => "Potion",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The adventurer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub treasures: u32,
    pub moves: u32,
    pub vendor_deals: u32,
    /// Append-only during play
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(name: impl Into<String>, hp: i32) -> Self {
        Self {
            name: name.into(),
            x: START_POS.0,
            y: START_POS.1,
            hp,
            max_hp: hp,
            treasures: 0,
            moves: 0,
            vendor_deals: 0,
            inventory: Vec::new(),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, (x, y): (i32, i32)) {
        self.x = x;
        self.y = y;
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Apply damage, flooring hp at 0. Returns true if the player is down.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp = (self.hp - amount.max(0)).max(0);
        self.is_defeated()
    }

    /// Count a treasure and put it in the pack
    pub fn gain_treasure(&mut self) {
        self.treasures += 1;
        self.inventory.push(Item::Treasure);
    }

    pub fn inventory_names(&self) -> Vec<&'static str> {
        self.inventory.iter().map(|item| item.name()).collect()
    }

    /// One-line summary, e.g. `Player: Ada | HP: 10 | Treasures: 1 | Inventory: [Treasure]`
    pub fn stats_line(&self) -> String {
        format!(
            "Player: {} | HP: {} | Treasures: {} | Inventory: [{}]",
            self.name,
            self.hp,
            self.treasures,
            self.inventory_names().join(", ")
        )
    }
}
