//! Follow-up questions
//!
//! Some interactions need one more answer from the player. While a prompt is
//! pending, keys go to it instead of the mapper.

use std::time::{Duration, Instant};

use super::state::{Ending, Game, MessageCategory};
use crate::entities::Item;
use crate::input::Key;

/// Longest answer the puzzle prompt accepts
const MAX_ANSWER_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Vendor offer: one treasure for one potion
    Trade,
    /// Arithmetic riddle, answered once
    Puzzle { a: i32, b: i32, input: String },
    /// Press any key before the window closes. The clock starts once the
    /// prompt has been drawn.
    Reaction { armed_at: Option<Instant> },
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::Trade => "Vendor",
            Prompt::Puzzle { .. } => "Cave Riddle",
            Prompt::Reaction { .. } => "Skill Check",
        }
    }

    pub fn question(&self) -> String {
        match self {
            Prompt::Trade => "Trade 1 treasure for 1 potion? [y/n]".to_string(),
            Prompt::Puzzle { a, b, input } => format!("What is {} + {}? > {}_", a, b, input),
            Prompt::Reaction { .. } => "Press any key as fast as you can!".to_string(),
        }
    }
}

impl Game {
    /// Start the clock on a reaction prompt that is now on screen. Prompts
    /// that are already armed keep their original time.
    pub fn arm_prompt(&mut self, now: Instant) {
        if let Some(Prompt::Reaction { armed_at }) = &mut self.prompt {
            armed_at.get_or_insert(now);
        }
    }

    pub(super) fn answer_prompt(&mut self, prompt: Prompt, key: Key, now: Instant) {
        match prompt {
            Prompt::Trade => self.answer_trade(key),
            Prompt::Puzzle { a, b, mut input } => match key {
                Key::Enter | Key::Esc => self.answer_puzzle(a, b, &input),
                Key::Backspace => {
                    input.pop();
                    self.prompt = Some(Prompt::Puzzle { a, b, input });
                }
                Key::Char(c) => {
                    if input.len() < MAX_ANSWER_LEN {
                        input.push(c);
                    }
                    self.prompt = Some(Prompt::Puzzle { a, b, input });
                }
                _ => self.prompt = Some(Prompt::Puzzle { a, b, input }),
            },
            Prompt::Reaction { armed_at } => {
                // A key that beats the first frame counts as instant
                let elapsed = armed_at
                    .map(|armed_at| now.saturating_duration_since(armed_at))
                    .unwrap_or_default();
                self.answer_reaction(elapsed)
            }
        }
    }

    fn answer_trade(&mut self, key: Key) {
        if !matches!(key, Key::Char('y') | Key::Char('Y')) {
            self.add_message("Maybe next time.", MessageCategory::System);
            return;
        }
        if self.player.treasures == 0 {
            self.add_message("You have no treasure to trade.", MessageCategory::Warning);
            return;
        }
        self.player.treasures -= 1;
        self.player.inventory.push(Item::Potion);
        self.player.vendor_deals += 1;
        log::info!("Vendor deal #{}", self.player.vendor_deals);
        self.add_message("You traded a treasure for a potion.", MessageCategory::Item);
    }

    /// Anything that does not parse to the right sum counts as wrong
    fn answer_puzzle(&mut self, a: i32, b: i32, input: &str) {
        if input.trim().parse::<i32>() == Ok(a + b) {
            self.player.gain_treasure();
            self.add_message("Correct! A hidden treasure is yours.", MessageCategory::Item);
        } else {
            self.add_message(format!("Wrong! It was {}.", a + b), MessageCategory::Warning);
        }
    }

    fn answer_reaction(&mut self, elapsed: Duration) {
        let window = Duration::from_millis(self.config.reaction_window_ms);
        log::debug!("Reaction time {:?} (window {:?})", elapsed, window);
        if elapsed <= window {
            self.player.gain_treasure();
            self.add_message(
                format!("Lightning fast ({} ms)! You grab a treasure.", elapsed.as_millis()),
                MessageCategory::Item,
            );
            return;
        }

        let penalty = self.config.reaction_penalty;
        self.add_message(
            format!("Too slow ({} ms)! Falling rocks hit you for {}.", elapsed.as_millis(), penalty),
            MessageCategory::Combat,
        );
        if self.player.take_damage(penalty) {
            self.add_message("You collapse under the rubble...", MessageCategory::Combat);
            self.terminate(Ending::Defeated {
                cause: "Crushed in a cave".to_string(),
            });
        }
    }
}
