use crate::character::combatant::{Combatant, Stats};
use crate::character::items::ItemEffect;
use crate::core::progression::{LevelUp, LevelUpPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub stats: Stats,
    pub experience_reward: u32,
}

impl Enemy {
    pub fn new(
        name: String,
        max_health: u32,
        attack: u32,
        defense: u32,
        experience_reward: u32,
    ) -> Self {
        Self {
            name,
            stats: Stats::new(max_health, attack, defense),
            experience_reward,
        }
    }
}

impl Combatant for Enemy {
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

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (HP: {}/{}, ATK: {}, DEF: {})",
            self.name,
            self.stats.health,
            self.stats.max_health,
            self.stats.attack,
            self.stats.defense
        )
    }
}

/// Immutable blueprint an [`Enemy`] is spawned from for each encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub experience_reward: u32,
}

impl EnemyTemplate {
    /// Spawns a full-health enemy.
    pub fn spawn(&self) -> Enemy {
        Enemy::new(
            self.name.to_string(),
            self.max_health,
            self.attack,
            self.defense,
            self.experience_reward,
        )
    }
}

/// Turn state machine of a single battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    PlayerTurn,
    EnemyTurn,
    Won,
    Lost,
}

impl BattlePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, BattlePhase::Won | BattlePhase::Lost)
    }
}

/// One decoded battle action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleCommand {
    Attack,
    Cast(String),
    UseItem(String),
    Talk,
    Quit,
}

/// A battle in progress against a freshly spawned enemy.
#[derive(Debug, Clone)]
pub struct Battle {
    pub enemy: Enemy,
    pub phase: BattlePhase,
    pub level_up_policy: LevelUpPolicy,
}

impl Battle {
    pub fn new(enemy: Enemy, level_up_policy: LevelUpPolicy) -> Self {
        Self {
            enemy,
            phase: BattlePhase::PlayerTurn,
            level_up_policy,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }
}

/// Something that happened during a battle, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack {
        attacker: String,
        target: String,
        damage: u32,
    },
    SpellCast {
        caster: String,
        spell: String,
        target: String,
        amount: i32,
    },
    ItemUsed {
        user: String,
        effect: ItemEffect,
    },
    /// The player's action failed but the turn was spent.
    ActionFailed {
        message: String,
    },
    NpcSpoke {
        npc: String,
        line: String,
    },
    EnemyAttack {
        attacker: String,
        target: String,
        damage: u32,
    },
    EnemyStatus {
        summary: String,
    },
    PlayerStatus {
        summary: String,
    },
    EnemyDefeated {
        enemy: String,
        xp_gained: u32,
    },
    LeveledUp {
        name: String,
        level_up: LevelUp,
    },
    PlayerDefeated {
        enemy: String,
    },
    /// Neither side can damage the other with a basic attack.
    Stalemate,
    QuitRequested,
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::PlayerAttack {
                attacker,
                target,
                damage,
            }
            | CombatEvent::EnemyAttack {
                attacker,
                target,
                damage,
            } => write!(f, "{} attacks {} for {} damage!", attacker, target, damage),
            CombatEvent::SpellCast {
                caster,
                spell,
                target,
                amount,
            } if *amount < 0 => write!(
                f,
                "{} casts {} on {}, healing {} health.",
                caster,
                spell,
                target,
                amount.unsigned_abs()
            ),
            CombatEvent::SpellCast {
                caster,
                spell,
                target,
                amount,
            } => write!(
                f,
                "{} casts {} on {} for {} damage!",
                caster, spell, target, amount
            ),
            CombatEvent::ItemUsed { user, effect } => match effect {
                ItemEffect::Restored { item, amount } => {
                    write!(f, "{} uses a {} and restores {} health.", user, item, amount)
                }
                ItemEffect::AttackRaised { item, amount } => {
                    write!(f, "{} uses an {} and gains {} attack.", user, item, amount)
                }
                ItemEffect::NoEffect { item } => {
                    write!(f, "{} uses the {}. Nothing happens.", user, item)
                }
            },
            CombatEvent::ActionFailed { message } => write!(f, "{}", message),
            CombatEvent::NpcSpoke { npc, line } => write!(f, "{}: {}", npc, line),
            CombatEvent::EnemyStatus { summary } | CombatEvent::PlayerStatus { summary } => {
                write!(f, "{}", summary)
            }
            CombatEvent::EnemyDefeated { enemy, xp_gained } => {
                write!(f, "You defeated the {}! (+{} XP)", enemy, xp_gained)
            }
            CombatEvent::LeveledUp { name, level_up } => {
                write!(f, "{} leveled up to level {}!", name, level_up.level)
            }
            CombatEvent::PlayerDefeated { enemy } => {
                write!(f, "You were defeated by the {}...", enemy)
            }
            CombatEvent::Stalemate => write!(
                f,
                "Neither of you can land a blow. Try a spell or an item."
            ),
            CombatEvent::QuitRequested => write!(f, "You flee the battle."),
        }
    }
}
