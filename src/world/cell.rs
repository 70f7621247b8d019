//! Cell definitions
//!
//! The symbols a grid cell can hold and their display properties.

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Treasure,
    Vendor,
    Cave,
    Monster,
    Potion,
    Npc,
}

impl Cell {
    pub const ALL: [Cell; 8] = [
        Cell::Empty,
        Cell::Wall,
        Cell::Treasure,
        Cell::Vendor,
        Cell::Cave,
        Cell::Monster,
        Cell::Potion,
        Cell::Npc,
    ];

    /// Map symbol, as used in map layouts (`' '`, `#`, `T`, `V`, `C`, `M`, `P`, `N`)
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Treasure => 'T',
            Cell::Vendor => 'V',
            Cell::Cave => 'C',
            Cell::Monster => 'M',
            Cell::Potion => 'P',
            Cell::Npc => 'N',
        }
    }

    /// Parse a map symbol. `.` is accepted as an alias for empty.
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            ' ' | '.' => Some(Cell::Empty),
            '#' => Some(Cell::Wall),
            'T' => Some(Cell::Treasure),
            'V' => Some(Cell::Vendor),
            'C' => Some(Cell::Cave),
            'M' => Some(Cell::Monster),
            'P' => Some(Cell::Potion),
            'N' => Some(Cell::Npc),
            _ => None,
        }
    }

    /// Glyph drawn on screen
    pub fn glyph(&self) -> char {
        match self {
            Cell::Treasure => '$',
            other => other.symbol(),
        }
    }

    pub fn fg_color(&self) -> (u8, u8, u8) {
        match self {
            Cell::Empty => (80, 80, 80),
            Cell::Wall => (220, 220, 220),
            Cell::Treasure => (255, 215, 0),
            Cell::Vendor => (80, 120, 255),
            Cell::Cave => (200, 80, 200),
            Cell::Monster => (220, 50, 50),
            Cell::Potion => (60, 200, 220),
            Cell::Npc => (250, 250, 250),
        }
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Vendors and caves act as checkpoints
    pub fn is_checkpoint(&self) -> bool {
        matches!(self, Cell::Vendor | Cell::Cave)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cell::Empty => "Empty",
            Cell::Wall => "Wall",
            Cell::Treasure => "Treasure",
            Cell::Vendor => "Vendor",
            Cell::Cave => "Cave",
            Cell::Monster => "Monster",
            Cell::Potion => "Potion",
            Cell::Npc => "NPC",
        }
    }
}
