//! Game state machine
//!
//! Owns the grid, the player and everything else that changes during a run.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::prompt::Prompt;
use crate::config::GameConfig;
use crate::entities::Player;
use crate::input::{map_key, Key};
use crate::world::{generate_grid, Cell, Grid, START_POS};

/// Messages kept in the log
const MESSAGE_LOG_CAP: usize = 100;

/// The main game struct that holds all game data
pub struct Game {
    pub(super) state: GameState,
    pub(super) grid: Grid,
    pub(super) player: Player,
    pub(super) rng: StdRng,
    pub(super) config: GameConfig,
    pub(super) messages: Vec<GameMessage>,
    /// Question waiting for the player's next key
    pub(super) prompt: Option<Prompt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    Running,
    Terminated(Ending),
}

/// Why the run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    Quit,
    Defeated { cause: String },
}

impl Ending {
    /// Process exit status for this ending
    pub fn exit_code(&self) -> u8 {
        match self {
            Ending::Quit => 0,
            Ending::Defeated { .. } => 1,
        }
    }
}

/// A message to display in the game log
#[derive(Debug, Clone)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Combat,
    Item,
    System,
    Lore,
    Warning,
}

impl Game {
    /// Start a run on a freshly generated map
    pub fn new(name: impl Into<String>, config: GameConfig) -> Self {
        let mut rng = seeded_rng(config.seed);
        let grid = generate_grid(&mut rng, config.width, config.height, &config.weights);
        Self::assemble(name.into(), config, grid, rng)
    }

    /// Start a run on a prepared map. The start cell is cleared if needed.
    pub fn with_grid(name: impl Into<String>, config: GameConfig, grid: Grid) -> Self {
        let rng = seeded_rng(config.seed);
        Self::assemble(name.into(), config, grid, rng)
    }

    fn assemble(name: String, config: GameConfig, mut grid: Grid, rng: StdRng) -> Self {
        if !grid.is_walkable(START_POS.0, START_POS.1) {
            grid.set(START_POS.0, START_POS.1, Cell::Empty);
        }
        log::info!(
            "New run for {} on a {}x{} map ({} treasure)",
            name,
            grid.width(),
            grid.height(),
            grid.count(Cell::Treasure)
        );

        let mut game = Self {
            state: GameState::Running,
            player: Player::new(name, config.starting_hp),
            grid,
            rng,
            config,
            messages: Vec::new(),
            prompt: None,
        };
        game.add_message(
            format!("Welcome, {}! Find the treasure.", game.player.name),
            MessageCategory::System,
        );
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// The cell under the player
    pub fn current_cell(&self) -> Cell {
        self.grid.get(self.player.x, self.player.y).unwrap_or_default()
    }

    pub fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        let text = text.into();
        log::debug!("[{:?}] {}", category, text);
        self.messages.push(GameMessage { text, category });

        if self.messages.len() > MESSAGE_LOG_CAP {
            self.messages.remove(0);
        }
    }

    /// Route a keystroke: to the pending prompt if there is one, else
    /// through the mapper to the executor. `now` is when the key arrived.
    pub fn handle_key(&mut self, key: Key, now: Instant) {
        if !self.is_running() {
            return;
        }
        match self.prompt.take() {
            Some(prompt) => self.answer_prompt(prompt, key, now),
            None => self.execute(map_key(key)),
        }
    }

    /// End the run. The first ending sticks.
    pub(super) fn terminate(&mut self, ending: Ending) {
        if !self.is_running() {
            return;
        }
        log::info!("Run ended: {:?}", ending);
        self.prompt = None;
        self.state = GameState::Terminated(ending);
    }

    /// Throw the map away, roll a new one, and send the player home
    pub fn regenerate_map(&mut self) {
        self.grid = generate_grid(
            &mut self.rng,
            self.config.width,
            self.config.height,
            &self.config.weights,
        );
        self.player.set_position(START_POS);
        log::info!("Map regenerated");
    }

    /// End-of-session report, one line per entry
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec!["--- Game Summary ---".to_string()];
        if let GameState::Terminated(Ending::Defeated { cause }) = &self.state {
            lines.push(format!("Defeated: {}", cause));
        }
        lines.push(self.player.stats_line());
        lines.push(format!("Treasures found: {}", self.player.treasures));
        lines.push(format!("Vendor deals: {}", self.player.vendor_deals));
        lines.push(format!("Moves: {}", self.player.moves));
        lines.push(format!("Inventory: [{}]", self.player.inventory_names().join(", ")));
        lines.push("All treasure locations:".to_string());
        lines.extend(self.grid.treasure_locations().map(|(x, y)| format!("({}, {})", x, y)));
        lines.push(String::new());
        lines.push("Thanks for playing Gridquest!".to_string());
        lines
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}
