//! Combat system

pub mod damage;
pub mod fight;

pub use damage::roll_monster_hp;
pub use fight::{fight, FightOutcome, FightReport, Round};
