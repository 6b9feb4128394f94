//! Consumable items and their effects.

use super::combatant::Combatant;
use super::player::Player;
use crate::core::constants::*;
use crate::core::error::GameError;

/// Known item kinds, decoded from inventory names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    HealthPotion,
    AttackPotion,
    /// Present in the inventory but with no defined effect.
    Inert,
}

impl ItemKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            HEALTH_POTION => ItemKind::HealthPotion,
            ATTACK_POTION => ItemKind::AttackPotion,
            _ => ItemKind::Inert,
        }
    }
}

/// What a successfully used item did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEffect {
    /// Health actually restored, after clamping to max health.
    Restored { item: String, amount: u32 },
    AttackRaised { item: String, amount: u32 },
    /// Consumed without effect.
    NoEffect { item: String },
}

/// Uses one copy of `item` from the player's inventory.
///
/// Fails with [`GameError::ItemNotFound`] and leaves the player untouched
/// when the item is not carried.
pub fn use_item(player: &mut Player, item: &str) -> Result<ItemEffect, GameError> {
    if !player.remove_item(item) {
        return Err(GameError::ItemNotFound {
            owner: player.name.clone(),
            item: item.to_string(),
        });
    }

    let effect = match ItemKind::from_name(item) {
        ItemKind::HealthPotion => {
            let before = player.health();
            player.stats.heal(HEALTH_POTION_RESTORE);
            ItemEffect::Restored {
                item: item.to_string(),
                amount: player.health() - before,
            }
        }
        ItemKind::AttackPotion => {
            player.stats.attack = player.stats.attack.saturating_add(ATTACK_POTION_BONUS);
            ItemEffect::AttackRaised {
                item: item.to_string(),
                amount: ATTACK_POTION_BONUS,
            }
        }
        ItemKind::Inert => ItemEffect::NoEffect {
            item: item.to_string(),
        },
    };

    Ok(effect)
}
