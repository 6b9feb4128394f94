//! Experience and level-up rules.

use crate::character::player::Player;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// How many level-ups a single experience grant can trigger.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LevelUpPolicy {
    /// At most one level-up per grant, however far past the threshold.
    #[default]
    Single,
    /// One level-up per full threshold accumulated.
    Repeat,
}

/// Snapshot of a character right after leveling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

/// Applies the stat gains of one level and fully heals.
pub fn level_up(player: &mut Player) -> LevelUp {
    player.level += 1;
    player.experience = 0;
    player.stats.max_health = player
        .stats
        .max_health
        .saturating_add(LEVEL_UP_MAX_HEALTH_GAIN);
    player.stats.restore_full();
    player.stats.attack = player.stats.attack.saturating_add(LEVEL_UP_ATTACK_GAIN);
    player.stats.defense = player.stats.defense.saturating_add(LEVEL_UP_DEFENSE_GAIN);

    LevelUp {
        level: player.level,
        max_health: player.stats.max_health,
        attack: player.stats.attack,
        defense: player.stats.defense,
    }
}

/// Grants experience and processes level-ups according to `policy`.
///
/// Returns one entry per level gained; experience is 0 whenever the list
/// is non-empty.
pub fn gain_experience(player: &mut Player, amount: u32, policy: LevelUpPolicy) -> Vec<LevelUp> {
    let total = player.experience.saturating_add(amount);
    player.experience = total;

    if total < XP_PER_LEVEL {
        return Vec::new();
    }

    let levels = match policy {
        LevelUpPolicy::Single => 1,
        LevelUpPolicy::Repeat => total / XP_PER_LEVEL,
    };

    (0..levels).map(|_| level_up(player)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::combatant::Stats;
    use std::collections::BTreeMap;

    fn hero() -> Player {
        Player::with_stats("Hero".to_string(), Stats::new(100, 10, 5), BTreeMap::new())
    }

    #[test]
    fn test_below_threshold_accumulates() {
        let mut player = hero();
        let ups = gain_experience(&mut player, 40, LevelUpPolicy::Single);
        assert!(ups.is_empty());
        assert_eq!(player.experience, 40);
        assert_eq!(player.level, 1);
    }

    #[test]
    fn test_crossing_threshold_levels_once() {
        let mut player = hero();
        player.experience = 95;
        player.stats.take_damage(30);

        let ups = gain_experience(&mut player, 10, LevelUpPolicy::Single);

        assert_eq!(ups.len(), 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
        assert_eq!(player.stats.max_health, 110);
        assert_eq!(player.stats.health, 110);
        assert_eq!(player.stats.attack, 12);
        assert_eq!(player.stats.defense, 7);
    }

    #[test]
    fn test_exact_threshold_levels() {
        let mut player = hero();
        let ups = gain_experience(&mut player, 100, LevelUpPolicy::Single);
        assert_eq!(ups.len(), 1);
        assert_eq!(player.level, 2);
    }

    #[test]
    fn test_single_policy_ignores_overflow() {
        let mut player = hero();
        let ups = gain_experience(&mut player, 250, LevelUpPolicy::Single);
        assert_eq!(ups.len(), 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn test_repeat_policy_levels_per_threshold() {
        let mut player = hero();
        let ups = gain_experience(&mut player, 250, LevelUpPolicy::Repeat);
        assert_eq!(ups.len(), 2);
        assert_eq!(ups[0].level, 2);
        assert_eq!(ups[1].level, 3);
        assert_eq!(player.level, 3);
        assert_eq!(player.experience, 0);
        assert_eq!(player.stats.max_health, 120);
        assert_eq!(player.stats.attack, 14);
        assert_eq!(player.stats.defense, 9);
    }

    #[test]
    fn test_repeat_policy_matches_single_for_one_level() {
        let mut single = hero();
        let mut repeat = hero();
        single.experience = 95;
        repeat.experience = 95;
        gain_experience(&mut single, 10, LevelUpPolicy::Single);
        gain_experience(&mut repeat, 10, LevelUpPolicy::Repeat);
        assert_eq!(single, repeat);
    }
}
