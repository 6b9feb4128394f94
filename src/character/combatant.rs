use crate::core::combat_math::{apply_damage, apply_healing, apply_signed, is_alive};
use serde::{Deserialize, Serialize};

/// Numeric stats shared by everything that fights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Stats {
    /// Full-health stats. `max_health` is raised to 1 if given as 0.
    pub fn new(max_health: u32, attack: u32, defense: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            health: max_health,
            max_health,
            attack,
            defense,
        }
    }

    pub fn is_alive(&self) -> bool {
        is_alive(self.health)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = apply_damage(self.health, amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = apply_healing(self.health, amount, self.max_health);
    }

    pub fn apply_magic(&mut self, amount: i32) {
        self.health = apply_signed(self.health, amount, self.max_health);
    }

    pub fn restore_full(&mut self) {
        self.health = self.max_health;
    }
}

/// Capability set of anything that can attack or be attacked.
///
/// Implementors only expose their [`Stats`]; the provided methods do the rest.
pub trait Combatant {
    fn name(&self) -> &str;
    fn stats(&self) -> &Stats;
    fn stats_mut(&mut self) -> &mut Stats;

    fn health(&self) -> u32 {
        self.stats().health
    }

    fn max_health(&self) -> u32 {
        self.stats().max_health
    }

    fn attack(&self) -> u32 {
        self.stats().attack
    }

    fn defense(&self) -> u32 {
        self.stats().defense
    }

    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    fn take_damage(&mut self, amount: u32) {
        self.stats_mut().take_damage(amount);
    }
}
