//! Session orchestration: exploration, battles and persistence.
//!
//! The session never reads input or exits the process. Callers feed it
//! decoded commands and get back a [`Step`]; `Step::Ended` means the save
//! (if any) has already been attempted and the caller may stop.

use super::config::GameConfig;
use super::error::GameError;
use super::game_state::GameState;
use crate::character::combatant::Combatant;
use crate::character::input::SessionCommand;
use crate::character::player::Player;
use crate::character::save::{save_player, SaveStore};
use crate::combat::logic::{is_stalemate, play_round};
use crate::combat::types::{Battle, BattleCommand, BattlePhase, CombatEvent};
use crate::world::{explore, Encounter};
use rand::Rng;
use std::fmt;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    Defeated,
}

/// Something the player should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    NothingFound,
    Arrived { location: String },
    ItemFound { item: String },
    BattleStarted { enemy: String },
    Combat(CombatEvent),
    Status { summary: String },
    Saved { location: String },
    SaveFailed { message: String },
    GameOver,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEvent::NothingFound => write!(f, "You find nothing interesting."),
            SessionEvent::Arrived { location } => write!(f, "You arrive at the {}.", location),
            SessionEvent::ItemFound { item } => write!(f, "You found a {}!", item),
            SessionEvent::BattleStarted { enemy } => write!(f, "A wild {} appears!", enemy),
            SessionEvent::Combat(event) => write!(f, "{}", event),
            SessionEvent::Status { summary } => write!(f, "{}", summary),
            SessionEvent::Saved { location } => write!(f, "Game saved to {}.", location),
            SessionEvent::SaveFailed { message } => write!(f, "Could not save: {}", message),
            SessionEvent::GameOver => write!(f, "Game Over. Better luck next time!"),
        }
    }
}

/// Result of feeding one command to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Vec<SessionEvent>),
    Ended {
        reason: EndReason,
        events: Vec<SessionEvent>,
    },
}

impl Step {
    pub fn events(&self) -> &[SessionEvent] {
        match self {
            Step::Continue(events) => events,
            Step::Ended { events, .. } => events,
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Step::Ended { .. })
    }
}

pub struct Session<R: Rng, S: SaveStore> {
    state: GameState,
    config: GameConfig,
    rng: R,
    store: S,
    ended: Option<EndReason>,
}

impl<R: Rng, S: SaveStore> Session<R, S> {
    pub fn new(player: Player, config: GameConfig, rng: R, store: S) -> Self {
        log::info!("session started for {}", player.name);
        Self {
            state: GameState::new(player),
            config,
            rng,
            store,
            ended: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.state.battle.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn ended(&self) -> Option<EndReason> {
        self.ended
    }

    /// Handles an overworld command. Rejected while a battle is running.
    pub fn handle_command(&mut self, command: SessionCommand) -> Result<Step, GameError> {
        self.ensure_running()?;
        if self.state.in_battle() {
            return Err(GameError::InvalidAction(
                "finish the battle first".to_string(),
            ));
        }

        match command {
            SessionCommand::Explore => self.explore(),
            SessionCommand::Save => Ok(Step::Continue(vec![self.persist()])),
            SessionCommand::Status => Ok(Step::Continue(vec![SessionEvent::Status {
                summary: self.state.player.to_string(),
            }])),
            SessionCommand::Quit => Ok(self.end(EndReason::Quit, Vec::new())),
        }
    }

    /// Plays one battle round. Rejected when no battle is running.
    pub fn handle_battle_command(&mut self, command: BattleCommand) -> Result<Step, GameError> {
        self.ensure_running()?;
        let Some(battle) = self.state.battle.as_mut() else {
            return Err(GameError::InvalidAction("there is nothing to fight".to_string()));
        };

        let combat_events = play_round(
            battle,
            &mut self.state.player,
            command,
            &self.state.world.npcs,
        )?;
        let quit = combat_events.contains(&CombatEvent::QuitRequested);
        let phase = battle.phase;
        let events: Vec<SessionEvent> = combat_events.into_iter().map(SessionEvent::Combat).collect();

        if quit {
            log::info!("player quit mid-battle");
            return Ok(self.end(EndReason::Quit, events));
        }

        match phase {
            BattlePhase::Won => {
                log::info!("battle won by {}", self.state.player.name);
                self.state.battle = None;
                Ok(Step::Continue(events))
            }
            BattlePhase::Lost => {
                log::info!("{} was defeated", self.state.player.name);
                self.state.battle = None;
                Ok(self.end(EndReason::Defeated, events))
            }
            BattlePhase::PlayerTurn | BattlePhase::EnemyTurn => Ok(Step::Continue(events)),
        }
    }

    /// Ends the session as if the player quit, e.g. when input runs out.
    pub fn quit(&mut self) -> Step {
        if let Some(reason) = self.ended {
            return Step::Ended {
                reason,
                events: Vec::new(),
            };
        }
        self.state.battle = None;
        self.end(EndReason::Quit, Vec::new())
    }

    fn explore(&mut self) -> Result<Step, GameError> {
        let encounter = explore(&self.state.world, &mut self.rng)?;
        let mut events = Vec::new();

        match encounter {
            Encounter::NoEvent => events.push(SessionEvent::NothingFound),
            Encounter::ItemFound { location, item } => {
                self.state.current_location = Some(location);
                self.state.player.add_item(item);
                events.push(SessionEvent::Arrived {
                    location: location.to_string(),
                });
                events.push(SessionEvent::ItemFound {
                    item: item.to_string(),
                });
            }
            Encounter::Battle { location, enemy } => {
                log::debug!("battle at {} against {}", location, enemy.name);
                self.state.current_location = Some(location);
                events.push(SessionEvent::Arrived {
                    location: location.to_string(),
                });
                events.push(SessionEvent::BattleStarted {
                    enemy: enemy.name.clone(),
                });
                if is_stalemate(&self.state.player, &enemy) {
                    events.push(SessionEvent::Combat(CombatEvent::Stalemate));
                }
                self.state.battle = Some(Battle::new(enemy, self.config.level_up_policy));
            }
        }

        Ok(Step::Continue(events))
    }

    fn persist(&mut self) -> SessionEvent {
        match save_player(&mut self.store, &self.state.player) {
            Ok(()) => SessionEvent::Saved {
                location: self.store.describe(),
            },
            Err(e) => {
                log::error!("failed to save {}: {}", self.state.player.name, e);
                SessionEvent::SaveFailed {
                    message: e.to_string(),
                }
            }
        }
    }

    fn end(&mut self, reason: EndReason, mut events: Vec<SessionEvent>) -> Step {
        events.push(self.persist());
        if reason == EndReason::Defeated {
            events.push(SessionEvent::GameOver);
        }
        self.ended = Some(reason);
        log::info!("session ended: {:?}", reason);
        Step::Ended { reason, events }
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.ended.is_some() {
            return Err(GameError::InvalidAction("the session has ended".to_string()));
        }
        if !self.state.player.is_alive() {
            return Err(GameError::CharacterFallen {
                name: self.state.player.name.clone(),
            });
        }
        Ok(())
    }
}
