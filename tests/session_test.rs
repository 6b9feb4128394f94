//! Integration test: driving a whole session the way the binary does.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wayfarer::character::{
    load_player, parse_battle_command, parse_session_command, use_item, BattleInput, Combatant,
    JsonFileStore, MemoryStore, Player, SaveRecord,
};
use wayfarer::combat::{BattleCommand, CombatEvent};
use wayfarer::core::{EndReason, GameConfig, GameError, Session, SessionEvent, Step};

fn memory_session(seed: u64) -> Session<ChaCha8Rng, MemoryStore> {
    Session::new(
        Player::new("Hero".to_string()),
        GameConfig::default(),
        ChaCha8Rng::seed_from_u64(seed),
        MemoryStore::new(),
    )
}

/// Explores until something other than "nothing" happens.
fn explore_until_event(session: &mut Session<ChaCha8Rng, MemoryStore>) -> Vec<SessionEvent> {
    for _ in 0..100 {
        let command = parse_session_command("explore").unwrap();
        let step = session.handle_command(command).unwrap();
        if step.events() != [SessionEvent::NothingFound] {
            return step.events().to_vec();
        }
    }
    panic!("exploration never produced an encounter");
}

#[test]
fn test_same_seed_same_adventure() {
    let mut a = memory_session(7);
    let mut b = memory_session(7);
    for _ in 0..5 {
        assert_eq!(explore_until_event(&mut a), explore_until_event(&mut b));
        if a.battle().is_some() {
            break;
        }
    }
}

#[test]
fn test_found_items_land_in_inventory() {
    let mut session = memory_session(3);
    let mut found = 0;

    for _ in 0..50 {
        if session.battle().is_some() {
            session.quit();
            break;
        }
        let events = explore_until_event(&mut session);
        if events
            .iter()
            .any(|event| matches!(event, SessionEvent::ItemFound { .. }))
        {
            found += 1;
        }
    }

    assert_eq!(session.player().inventory.len(), found);
}

#[test]
fn test_battle_runs_to_completion() {
    let mut session = memory_session(11);
    while session.battle().is_none() {
        explore_until_event(&mut session);
    }

    let mut ended = None;
    for _ in 0..100 {
        let BattleInput::Ready(command) = parse_battle_command("attack").unwrap() else {
            unreachable!("attack needs no argument");
        };
        match session.handle_battle_command(command).unwrap() {
            Step::Ended { reason, .. } => {
                ended = Some(reason);
                break;
            }
            Step::Continue(events) => {
                if events
                    .iter()
                    .any(|event| matches!(event, SessionEvent::Combat(CombatEvent::EnemyDefeated { .. })))
                {
                    break;
                }
            }
        }
    }

    // A fresh hero beats anything in the catalog with plain attacks
    assert_eq!(ended, None);
    assert!(session.battle().is_none());
    assert!(session.player().experience > 0);
}

#[test]
fn test_invalid_tokens_do_not_spend_turns() {
    let mut session = memory_session(5);
    while session.battle().is_none() {
        explore_until_event(&mut session);
    }
    let health = session.player().stats.health;

    assert!(matches!(
        parse_battle_command("dance"),
        Err(GameError::InvalidAction(_))
    ));
    assert!(matches!(
        session.handle_command(parse_session_command("explore").unwrap()),
        Err(GameError::InvalidAction(_))
    ));

    assert_eq!(session.player().stats.health, health);
    assert!(session.battle().is_some());
}

#[test]
fn test_end_of_input_in_battle_saves() {
    let mut session = memory_session(9);
    while session.battle().is_none() {
        explore_until_event(&mut session);
    }

    let step = session.quit();

    assert!(matches!(
        step,
        Step::Ended {
            reason: EndReason::Quit,
            ..
        }
    ));
    assert_eq!(session.store().save_count(), 1);
    assert!(session
        .handle_battle_command(BattleCommand::Attack)
        .is_err());
}

#[test]
fn test_quit_writes_save_file_that_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save_game.json");
    let config = GameConfig {
        save_path: path.clone(),
        seed: Some(1),
        ..GameConfig::default()
    };
    let rng = config.rng();
    let mut session = Session::new(
        Player::new("Ayla".to_string()),
        config,
        rng,
        JsonFileStore::new(&path),
    );

    session.handle_command(parse_session_command("status").unwrap()).unwrap();
    let step = session.handle_command(parse_session_command("quit").unwrap()).unwrap();

    assert!(step
        .events()
        .iter()
        .any(|event| matches!(event, SessionEvent::Saved { .. })));
    let loaded = load_player(&JsonFileStore::new(&path)).unwrap();
    assert_eq!(&loaded, session.player());
}

#[test]
fn test_save_failure_still_ends_session() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes the rename fail
    let path = dir.path().join("save_game.json");
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("occupied"), "x").unwrap();

    let mut session = Session::new(
        Player::new("Hero".to_string()),
        GameConfig::default(),
        ChaCha8Rng::seed_from_u64(1),
        JsonFileStore::new(&path),
    );
    let step = session.handle_command(parse_session_command("quit").unwrap()).unwrap();

    assert!(step.is_ended());
    assert!(step
        .events()
        .iter()
        .any(|event| matches!(event, SessionEvent::SaveFailed { .. })));
}

#[test]
fn test_loaded_game_continues_and_saves() {
    let mut veteran = Player::new("Veteran".to_string());
    veteran.level = 4;
    veteran.experience = 60;
    let store = MemoryStore::with_record(SaveRecord::from_player(&veteran));
    let player = load_player(&store).unwrap();

    let mut session = Session::new(
        player,
        GameConfig::default(),
        ChaCha8Rng::seed_from_u64(2),
        store,
    );
    session.handle_command(parse_session_command("SAVE").unwrap()).unwrap();

    let record = session.store().record().unwrap();
    assert_eq!(record.level, 4);
    assert_eq!(record.experience, 60);
    assert_eq!(session.store().save_count(), 1);
}

#[test]
fn test_lost_game_cannot_be_continued() {
    let mut hero = Player::new("Hero".to_string());
    // Every catalog enemy can hurt an unarmored hero
    hero.stats.defense = 0;
    let mut session = Session::new(
        hero,
        GameConfig::default(),
        ChaCha8Rng::seed_from_u64(4),
        MemoryStore::new(),
    );
    while session.battle().is_none() {
        explore_until_event(&mut session);
    }

    let mut reason = None;
    for _ in 0..100 {
        // Talking never hurts the enemy
        if let Step::Ended { reason: ended, events } =
            session.handle_battle_command(BattleCommand::Talk).unwrap()
        {
            assert!(events.contains(&SessionEvent::GameOver));
            reason = Some(ended);
            break;
        }
    }
    assert_eq!(reason, Some(EndReason::Defeated));

    let record = session.store().record().unwrap();
    assert_eq!(record.health, 0);
    match load_player(session.store()) {
        Err(GameError::CharacterFallen { name }) => assert_eq!(name, "Hero"),
        other => panic!("expected CharacterFallen, got {:?}", other),
    }

    let mut fallen = record.clone().into_player();
    fallen.add_item("Health Potion");
    use_item(&mut fallen, "Health Potion").unwrap();
    assert!(!fallen.is_alive());
    assert_eq!(fallen.health(), 0);
}
