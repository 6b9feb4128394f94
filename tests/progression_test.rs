//! Integration test: experience and level-ups from battle rewards.

use wayfarer::character::{Combatant, Player};
use wayfarer::combat::{play_round, Battle, BattleCommand, CombatEvent, Enemy};
use wayfarer::core::{gain_experience, LevelUpPolicy};

fn wounded_hero(experience: u32) -> Player {
    let mut player = Player::new("Hero".to_string());
    player.experience = experience;
    player.stats.health = 40;
    player
}

#[test]
fn test_crossing_threshold_levels_and_heals() {
    let mut player = wounded_hero(95);

    let level_ups = gain_experience(&mut player, 10, LevelUpPolicy::Single);

    assert_eq!(level_ups.len(), 1);
    assert_eq!(player.level, 2);
    assert_eq!(player.experience, 0);
    assert_eq!(player.max_health(), 110);
    assert_eq!(player.health(), 110);
    assert_eq!(player.attack(), 12);
    assert_eq!(player.defense(), 7);
}

#[test]
fn test_below_threshold_only_accumulates() {
    let mut player = wounded_hero(50);
    assert!(gain_experience(&mut player, 49, LevelUpPolicy::Repeat).is_empty());
    assert_eq!(player.experience, 99);
    assert_eq!(player.level, 1);
}

#[test]
fn test_policies_differ_on_large_grants() {
    let mut single = wounded_hero(0);
    let mut repeat = wounded_hero(0);

    gain_experience(&mut single, 250, LevelUpPolicy::Single);
    gain_experience(&mut repeat, 250, LevelUpPolicy::Repeat);

    assert_eq!(single.level, 2);
    assert_eq!(repeat.level, 3);
    assert_eq!(single.experience, 0);
    assert_eq!(repeat.experience, 0);
    assert_eq!(repeat.attack(), 14);
}

#[test]
fn test_victory_reports_level_up() {
    let mut player = wounded_hero(90);
    let mut battle = Battle::new(
        Enemy::new("Goblin".to_string(), 5, 5, 2, 20),
        LevelUpPolicy::Single,
    );

    let events = play_round(&mut battle, &mut player, BattleCommand::Attack, &[]).unwrap();

    assert!(events
        .iter()
        .any(|event| matches!(event, CombatEvent::LeveledUp { level_up, .. } if level_up.level == 2)));
    assert_eq!(player.health(), player.max_health());
}
