//! Cave encounters and monster fights

use rand::Rng;

use super::prompt::Prompt;
use super::state::{Ending, Game, MessageCategory};
use crate::combat::{fight, roll_monster_hp, FightOutcome};

/// What waits inside a cave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterKind {
    /// A monster ambush, fought to the end
    Combat,
    /// An arithmetic riddle with a single guess
    Puzzle,
    /// A timed reaction check
    Reaction,
}

impl EncounterKind {
    pub const ALL: [EncounterKind; 3] = [
        EncounterKind::Combat,
        EncounterKind::Puzzle,
        EncounterKind::Reaction,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl Game {
    pub fn start_encounter(&mut self, kind: EncounterKind) {
        log::info!("Cave encounter: {:?}", kind);
        match kind {
            EncounterKind::Combat => {
                self.add_message("Something stirs in the dark and lunges at you!", MessageCategory::Combat);
                if self.run_fight("a cave lurker") == FightOutcome::Victory {
                    self.player.gain_treasure();
                    self.add_message("The lurker drops a treasure!", MessageCategory::Item);
                }
            }
            EncounterKind::Puzzle => {
                let a = self.rng.gen_range(1..=9);
                let b = self.rng.gen_range(1..=9);
                self.add_message(
                    "A riddle is carved into the cave wall. Type your answer and press Enter.",
                    MessageCategory::Lore,
                );
                self.prompt = Some(Prompt::Puzzle { a, b, input: String::new() });
            }
            EncounterKind::Reaction => {
                self.add_message("The ceiling rumbles...", MessageCategory::Warning);
                self.prompt = Some(Prompt::Reaction { armed_at: None });
            }
        }
    }

    /// Fight a freshly rolled monster to the end, logging every exchange.
    /// A loss ends the run.
    pub(super) fn run_fight(&mut self, foe: &str) -> FightOutcome {
        let monster_hp = roll_monster_hp(&mut self.rng);
        self.add_message(format!("You face {} ({} HP)!", foe, monster_hp), MessageCategory::Combat);

        let report = fight(&mut self.player, monster_hp, &mut self.rng);
        log::debug!("Fight against {} took {} rounds", foe, report.rounds.len());
        for round in &report.rounds {
            self.add_message(round.describe(), MessageCategory::Combat);
        }

        if report.outcome == FightOutcome::Defeat {
            self.add_message(format!("You were defeated by {}...", foe), MessageCategory::Combat);
            self.terminate(Ending::Defeated {
                cause: format!("Slain by {}", foe),
            });
        }
        report.outcome
    }
}
