use super::combatant::{Combatant, Stats};
use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The player character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub stats: Stats,
    pub experience: u32,
    pub level: u32,
    /// Spell name to magic value. Negative values heal the target.
    pub spells: BTreeMap<String, i32>,
    /// Item names in acquisition order.
    pub inventory: Vec<String>,
}

impl Player {
    /// Creates a fresh level 1 character with the starting stats and spells.
    pub fn new(name: String) -> Self {
        let spells = STARTING_SPELLS
            .iter()
            .map(|(spell, power)| (spell.to_string(), *power))
            .collect();
        Self::with_stats(
            name,
            Stats::new(STARTING_HEALTH, STARTING_ATTACK, STARTING_DEFENSE),
            spells,
        )
    }

    pub fn with_stats(name: String, stats: Stats, spells: BTreeMap<String, i32>) -> Self {
        Self {
            name,
            stats,
            experience: 0,
            level: 1,
            spells,
            inventory: Vec::new(),
        }
    }

    pub fn spell_power(&self, spell: &str) -> Option<i32> {
        self.spells.get(spell).copied()
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|owned| owned == item)
    }

    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    /// Removes the earliest acquired copy of `item`. Returns false if absent.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|owned| owned == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &Stats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level: {}, HP: {}/{}, ATK: {}, DEF: {}, EXP: {}/{})",
            self.name,
            self.level,
            self.stats.health,
            self.stats.max_health,
            self.stats.attack,
            self.stats.defense,
            self.experience,
            XP_PER_LEVEL
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starting_values() {
        let player = Player::new("Test Hero".to_string());
        assert_eq!(player.name, "Test Hero");
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 0);
        assert_eq!(player.health(), 100);
        assert_eq!(player.max_health(), 100);
        assert_eq!(player.attack(), 10);
        assert_eq!(player.defense(), 5);
        assert!(player.inventory.is_empty());
        assert_eq!(player.spell_power("Fireball"), Some(15));
        assert_eq!(player.spell_power("Heal"), Some(-10));
    }

    #[test]
    fn test_remove_item_takes_earliest_copy() {
        let mut player = Player::new("Test Hero".to_string());
        player.add_item("Health Potion");
        player.add_item("Attack Potion");
        player.add_item("Health Potion");

        assert!(player.remove_item("Health Potion"));
        assert_eq!(player.inventory, vec!["Attack Potion", "Health Potion"]);

        assert!(!player.remove_item("Elixir"));
        assert_eq!(player.inventory.len(), 2);
    }

    #[test]
    fn test_display_matches_status_line() {
        let player = Player::new("Ayla".to_string());
        assert_eq!(
            player.to_string(),
            "Ayla (Level: 1, HP: 100/100, ATK: 10, DEF: 5, EXP: 0/100)"
        );
    }
}
