use super::combatant::Stats;
use super::player::Player;
use crate::core::error::GameError;
use crate::utils::persistence::{load_json, save_json_atomic};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Flat persisted form of a [`Player`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveRecord {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    // Older saves call the spell map `magic`
    #[serde(alias = "magic")]
    pub spells: BTreeMap<String, i32>,
    pub experience: u32,
    pub level: u32,
    pub inventory: Vec<String>,
}

impl SaveRecord {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            health: player.stats.health,
            max_health: player.stats.max_health,
            attack: player.stats.attack,
            defense: player.stats.defense,
            spells: player.spells.clone(),
            experience: player.experience,
            level: player.level,
            inventory: player.inventory.clone(),
        }
    }

    /// Rebuilds the player, normalizing values that break invariants.
    pub fn into_player(self) -> Player {
        let max_health = self.max_health.max(1);
        if max_health != self.max_health || self.health > max_health || self.level == 0 {
            log::warn!(
                "normalizing save for {}: health {}/{}, level {}",
                self.name,
                self.health,
                self.max_health,
                self.level
            );
        }

        Player {
            name: self.name,
            stats: Stats {
                health: self.health.min(max_health),
                max_health,
                attack: self.attack,
                defense: self.defense,
            },
            experience: self.experience,
            level: self.level.max(1),
            spells: self.spells,
            inventory: self.inventory,
        }
    }
}

/// Storage collaborator for the single save record.
pub trait SaveStore {
    fn save(&mut self, record: &SaveRecord) -> Result<(), GameError>;

    /// Fails with [`GameError::NoSaveFound`] when nothing was saved yet.
    fn load(&self) -> Result<SaveRecord, GameError>;

    /// Human-readable location, for messages.
    fn describe(&self) -> String;
}

/// Saves the record as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl SaveStore for JsonFileStore {
    fn save(&mut self, record: &SaveRecord) -> Result<(), GameError> {
        save_json_atomic(&self.path, record)?;
        log::debug!("saved {} to {}", record.name, self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<SaveRecord, GameError> {
        let record: SaveRecord = load_json(&self.path)?;
        log::debug!("loaded {} from {}", record.name, self.path.display());
        Ok(record)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps the record in memory. Used by tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<SaveRecord>,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: SaveRecord) -> Self {
        Self {
            record: Some(record),
            saves: 0,
        }
    }

    pub fn record(&self) -> Option<&SaveRecord> {
        self.record.as_ref()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> u32 {
        self.saves
    }
}

impl SaveStore for MemoryStore {
    fn save(&mut self, record: &SaveRecord) -> Result<(), GameError> {
        self.record = Some(record.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<SaveRecord, GameError> {
        self.record.clone().ok_or(GameError::NoSaveFound)
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Saves the player through `store`.
pub fn save_player<S: SaveStore + ?Sized>(store: &mut S, player: &Player) -> Result<(), GameError> {
    store.save(&SaveRecord::from_player(player))
}

/// Loads the player from `store`.
///
/// A record saved after a lost battle (no health left) is refused with
/// [`GameError::CharacterFallen`].
pub fn load_player<S: SaveStore + ?Sized>(store: &S) -> Result<Player, GameError> {
    let record = store.load()?;
    if record.health == 0 {
        log::info!("refusing to load fallen character {}", record.name);
        return Err(GameError::CharacterFallen { name: record.name });
    }
    Ok(record.into_player())
}
