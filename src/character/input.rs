//! UI-agnostic decoding of typed commands.
//!
//! Raw text is turned into closed command enums here, once, so nothing past
//! this boundary compares strings.

use crate::combat::types::BattleCommand;
use crate::core::error::GameError;

/// Start menu choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a new character
    NewGame,
    /// Continue from the save file
    LoadGame,
}

/// Overworld commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Wander to find an encounter
    Explore,
    /// Write the save file and keep playing
    Save,
    /// Show the character sheet
    Status,
    /// Save and end the session
    Quit,
}

/// A battle verb that still needs a free-text argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    Spell,
    Item,
}

impl ArgumentKind {
    pub fn prompt(&self) -> &'static str {
        match self {
            ArgumentKind::Spell => "Enter the spell to cast: ",
            ArgumentKind::Item => "Enter the item to use: ",
        }
    }

    /// Completes the command with the argument the player supplied.
    pub fn complete(&self, argument: &str) -> Result<BattleCommand, GameError> {
        let argument = argument.trim();
        if argument.is_empty() {
            return Err(GameError::InvalidAction(
                "a name is required".to_string(),
            ));
        }
        Ok(match self {
            ArgumentKind::Spell => BattleCommand::Cast(argument.to_string()),
            ArgumentKind::Item => BattleCommand::UseItem(argument.to_string()),
        })
    }
}

/// Result of decoding one battle line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleInput {
    /// Fully decoded command
    Ready(BattleCommand),
    /// `cast` or `use` typed alone; ask for the name
    NeedsArgument(ArgumentKind),
}

pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, GameError> {
    match line.trim() {
        "1" => Ok(MenuChoice::NewGame),
        "2" => Ok(MenuChoice::LoadGame),
        other => Err(GameError::InvalidMenuChoice(other.to_string())),
    }
}

pub fn parse_session_command(line: &str) -> Result<SessionCommand, GameError> {
    match line.trim().to_lowercase().as_str() {
        "explore" => Ok(SessionCommand::Explore),
        "save" => Ok(SessionCommand::Save),
        "status" => Ok(SessionCommand::Status),
        "quit" => Ok(SessionCommand::Quit),
        other => Err(GameError::InvalidAction(other.to_string())),
    }
}

/// Decodes a battle line. The verb is case-insensitive; a spell or item
/// name may follow on the same line and is kept as typed.
pub fn parse_battle_command(line: &str) -> Result<BattleInput, GameError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let verb = verb.to_lowercase();
    let simple = |command: BattleCommand| {
        if rest.is_empty() {
            Ok(BattleInput::Ready(command))
        } else {
            Err(GameError::InvalidAction(line.to_string()))
        }
    };

    match verb.as_str() {
        "attack" => simple(BattleCommand::Attack),
        "talk" => simple(BattleCommand::Talk),
        "quit" => simple(BattleCommand::Quit),
        "cast" | "use" => {
            let kind = if verb == "cast" {
                ArgumentKind::Spell
            } else {
                ArgumentKind::Item
            };
            if rest.is_empty() {
                Ok(BattleInput::NeedsArgument(kind))
            } else {
                kind.complete(rest).map(BattleInput::Ready)
            }
        }
        _ => Err(GameError::InvalidAction(line.to_string())),
    }
}
