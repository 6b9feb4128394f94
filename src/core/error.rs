//! Error taxonomy shared by the whole game.

use thiserror::Error;

/// Errors that can arise while playing, loading or saving.
///
/// Everything above `Io` is a gameplay condition: it is reported to the
/// player and the loop carries on with the state untouched.
#[derive(Debug, Error)]
pub enum GameError {
    /// Cast of a spell the player does not know.
    #[error("{caster} doesn't know the spell {spell}.")]
    UnknownSpell { caster: String, spell: String },

    /// Use of an item that is not in the inventory.
    #[error("{owner} doesn't have a {item}.")]
    ItemNotFound { owner: String, item: String },

    /// Load requested but no record exists yet.
    #[error("No saved game found.")]
    NoSaveFound,

    /// The saved character fell in battle and cannot be continued.
    #[error("{name} has fallen. Their adventure is over.")]
    CharacterFallen { name: String },

    /// Unrecognized command token, or an action taken out of turn.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Unrecognized entry in the start menu.
    #[error("Invalid choice: {0}")]
    InvalidMenuChoice(String),

    /// Wrapper around IO errors (directory creation, file writes).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The save record exists but could not be decoded.
    #[error("corrupt save: {0}")]
    CorruptSave(#[from] serde_json::Error),

    /// A location names an enemy missing from the catalog.
    #[error("enemy {0} is not in the catalog")]
    CatalogMismatch(String),
}

impl GameError {
    /// True for conditions the player can simply retry past.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::UnknownSpell { .. }
                | GameError::ItemNotFound { .. }
                | GameError::NoSaveFound
                | GameError::CharacterFallen { .. }
                | GameError::InvalidAction(_)
                | GameError::InvalidMenuChoice(_)
        )
    }
}
