//! Mutable state of one running game.

use crate::character::player::Player;
use crate::combat::types::Battle;
use crate::world::World;

/// Everything that changes during a session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub world: World,
    pub current_location: Option<&'static str>,
    pub battle: Option<Battle>,
}

impl GameState {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            world: World::new(),
            current_location: None,
            battle: None,
        }
    }

    pub fn in_battle(&self) -> bool {
        self.battle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(Player::new("Test Hero".to_string()));
        assert_eq!(state.player.name, "Test Hero");
        assert!(state.current_location.is_none());
        assert!(!state.in_battle());
        assert_eq!(state.world.locations.len(), 3);
    }
}
