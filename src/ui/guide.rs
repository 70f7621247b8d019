//! Item guide
//!
//! Art and a short description for whatever the player is standing on.

use crate::world::Cell;

pub struct Guide {
    pub title: &'static str,
    pub art: &'static [&'static str],
    pub info: &'static str,
}

const SWORD: Guide = Guide {
    title: "Sword",
    art: &[
        "            /\\",
        "           / /",
        "          / /",
        "         / /",
        "    _   / /",
        "    \\\\_/ /",
        "     \\_ /",
        "     // \\",
        "    //",
    ],
    info: "Your trusty sword. Step on something to learn about it.",
};

const WALL: Guide = Guide {
    title: "Wall",
    art: &["#########", "## ### ##", "#########", "### ## ##", "#########"],
    info: "Wall: Blocks your path. Find a way around, or look for a secret door.",
};

const TREASURE: Guide = Guide {
    title: "Treasure",
    art: &["   _____", "  /$$$$$\\", " |$$$$$$$|", " |_______|"],
    info: "Treasure: Collect for rewards! Vendors will trade for it.",
};

const VENDOR: Guide = Guide {
    title: "Vendor",
    art: &["   ___", "  (o o)", "  / V \\", " /|___|\\", "  |   |"],
    info: "Vendor: Trade treasures for potions.",
};

const CAVE: Guide = Guide {
    title: "Cave",
    art: &["    ____", "   /    \\", "  /  ..  \\", " /  (  )  \\", "/___________\\"],
    info: "Cave: Face a challenge for a reward! Fight, solve, or react.",
};

const MONSTER: Guide = Guide {
    title: "Monster",
    art: &["  /\\_/\\", " ( o.o )", "  > M <", " /|   |\\"],
    info: "Monster: Fight or flee! Defeated monsters drop treasure.",
};

const POTION: Guide = Guide {
    title: "Potion",
    art: &["   _", "  | |", "  / \\", " /~~~\\", " \\___/"],
    info: "Potion: A restorative brew. Press [P] to add it to your pack.",
};

const NPC: Guide = Guide {
    title: "Stranger",
    art: &["   ___", "  (^ ^)", "  /|N|\\", "   | |", "  _| |_"],
    info: "NPC: Meet a mysterious character. Maybe they have a tip!",
};

/// Guide for a cell, falling back to the sword on empty ground
pub fn guide_for(cell: Cell) -> &'static Guide {
    match cell {
        Cell::Empty => &SWORD,
        Cell::Wall => &WALL,
        Cell::Treasure => &TREASURE,
        Cell::Vendor => &VENDOR,
        Cell::Cave => &CAVE,
        Cell::Monster => &MONSTER,
        Cell::Potion => &POTION,
        Cell::Npc => &NPC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_has_a_guide() {
        for cell in Cell::ALL {
            let guide = guide_for(cell);
            assert!(!guide.art.is_empty());
            assert!(!guide.info.is_empty());
        }
        assert_eq!(guide_for(Cell::Empty).title, "Sword");
    }
}
