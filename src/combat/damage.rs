//! Damage rolls
//!
//! All combat numbers live here.

use std::ops::RangeInclusive;

use rand::Rng;

/// Starting health of a freshly rolled monster
pub const MONSTER_HP: RangeInclusive<i32> = 3..=8;
/// Damage the player's sword deals per swing
pub const PLAYER_DAMAGE: RangeInclusive<i32> = 1..=3;
/// Damage a monster deals when it strikes back (it may miss)
pub const MONSTER_DAMAGE: RangeInclusive<i32> = 0..=2;

pub fn roll_monster_hp(rng: &mut impl Rng) -> i32 {
    rng.gen_range(MONSTER_HP)
}

pub fn roll_player_damage(rng: &mut impl Rng) -> i32 {
    rng.gen_range(PLAYER_DAMAGE)
}

pub fn roll_monster_damage(rng: &mut impl Rng) -> i32 {
    rng.gen_range(MONSTER_DAMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(MONSTER_HP.contains(&roll_monster_hp(&mut rng)));
            assert!(PLAYER_DAMAGE.contains(&roll_player_damage(&mut rng)));
            assert!(MONSTER_DAMAGE.contains(&roll_monster_damage(&mut rng)));
        }
    }

    #[test]
    fn test_player_always_deals_damage() {
        // Guarantees every fight terminates
        assert!(*PLAYER_DAMAGE.start() > 0);
    }
}
