//! Random encounter selection.

use super::data::{find_template, get_all_locations, get_all_npcs, Location, Npc};
use crate::combat::types::Enemy;
use crate::core::constants::FINDABLE_ITEMS;
use crate::core::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;

/// The explorable world: locations and the people in it.
#[derive(Debug, Clone)]
pub struct World {
    pub locations: Vec<Location>,
    pub npcs: Vec<Npc>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            locations: get_all_locations(),
            npcs: get_all_npcs(),
        }
    }
}

/// Result of one exploration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encounter {
    NoEvent,
    ItemFound {
        location: &'static str,
        item: &'static str,
    },
    Battle {
        location: &'static str,
        enemy: Enemy,
    },
}

/// Rolls an encounter. Every choice is an independent uniform draw.
///
/// Battles spawn a fresh enemy from its catalog template; a location that
/// names an enemy missing from the catalog yields
/// [`GameError::CatalogMismatch`].
pub fn explore<R: Rng>(world: &World, rng: &mut R) -> Result<Encounter, GameError> {
    if !rng.gen_bool(0.5) {
        return Ok(Encounter::NoEvent);
    }

    let is_battle = rng.gen_bool(0.5);

    let Some(location) = world.locations.choose(rng) else {
        return Ok(Encounter::NoEvent);
    };

    if is_battle {
        let Some(enemy_name) = location.enemies.choose(rng) else {
            return Ok(Encounter::NoEvent);
        };
        let template = find_template(enemy_name)
            .ok_or_else(|| GameError::CatalogMismatch(enemy_name.to_string()))?;
        Ok(Encounter::Battle {
            location: location.name,
            enemy: template.spawn(),
        })
    } else {
        let item = FINDABLE_ITEMS[rng.gen_range(0..FINDABLE_ITEMS.len())];
        Ok(Encounter::ItemFound {
            location: location.name,
            item,
        })
    }
}
