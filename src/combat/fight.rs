//! The attack/defend exchange loop

use rand::Rng;

use super::damage::{roll_monster_damage, roll_player_damage};
use crate::entities::Player;

/// One exchange of blows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub player_hit: i32,
    /// None when the monster fell before it could strike back
    pub monster_hit: Option<i32>,
    pub monster_hp: i32,
    pub player_hp: i32,
}

impl Round {
    pub fn describe(&self) -> String {
        match self.monster_hit {
            Some(0) => format!(
                "You hit for {} (monster HP {}). It misses you!",
                self.player_hit, self.monster_hp
            ),
            Some(hit) => format!(
                "You hit for {} (monster HP {}). It hits back for {} (your HP {}).",
                self.player_hit, self.monster_hp, hit, self.player_hp
            ),
            None => format!("You hit for {} and the monster falls!", self.player_hit),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FightOutcome {
    Victory,
    Defeat,
}

#[derive(Debug, Clone)]
pub struct FightReport {
    pub rounds: Vec<Round>,
    pub outcome: FightOutcome,
}

/// Trade blows until one side drops. The player always swings first.
pub fn fight(player: &mut Player, monster_hp: i32, rng: &mut impl Rng) -> FightReport {
    let mut monster_hp = monster_hp.max(1);
    let mut rounds = Vec::new();

    let outcome = loop {
        if player.is_defeated() {
            break FightOutcome::Defeat;
        }

        let player_hit = roll_player_damage(rng);
        monster_hp = (monster_hp - player_hit).max(0);
        if monster_hp == 0 {
            rounds.push(Round {
                player_hit,
                monster_hit: None,
                monster_hp,
                player_hp: player.hp,
            });
            break FightOutcome::Victory;
        }

        let monster_hit = roll_monster_damage(rng);
        player.take_damage(monster_hit);
        rounds.push(Round {
            player_hit,
            monster_hit: Some(monster_hit),
            monster_hp,
            player_hp: player.hp,
        });
    };

    FightReport { rounds, outcome }
}
