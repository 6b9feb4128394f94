//! Static world data: enemy catalog, locations and NPCs.

use crate::combat::types::EnemyTemplate;

/// A place the player can wander into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    /// Names of the catalog enemies that roam here.
    pub enemies: &'static [&'static str],
}

/// A character the player can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Npc {
    pub name: &'static str,
    pub dialog: &'static str,
}

pub const ENEMY_CATALOG: [EnemyTemplate; 3] = [
    EnemyTemplate {
        name: "Goblin",
        max_health: 30,
        attack: 5,
        defense: 2,
        experience_reward: 20,
    },
    EnemyTemplate {
        name: "Orc",
        max_health: 50,
        attack: 7,
        defense: 3,
        experience_reward: 30,
    },
    EnemyTemplate {
        name: "Dragon",
        max_health: 100,
        attack: 10,
        defense: 5,
        experience_reward: 50,
    },
];

/// Returns all locations in the game.
pub fn get_all_locations() -> Vec<Location> {
    vec![
        Location {
            name: "Forest",
            enemies: &["Goblin", "Orc"],
        },
        Location {
            name: "Cave",
            enemies: &["Orc", "Dragon"],
        },
        Location {
            name: "Castle",
            enemies: &["Dragon"],
        },
    ]
}

pub fn get_all_npcs() -> Vec<Npc> {
    vec![
        Npc {
            name: "Old Man",
            dialog: "Beware of the dragon in the castle!",
        },
        Npc {
            name: "Merchant",
            dialog: "I have potions for sale.",
        },
    ]
}

/// Looks up an enemy template by name.
pub fn find_template(name: &str) -> Option<&'static EnemyTemplate> {
    ENEMY_CATALOG.iter().find(|template| template.name == name)
}
