use super::types::{Battle, BattleCommand, BattlePhase, CombatEvent, Enemy};
use crate::character::combatant::Combatant;
use crate::character::items::use_item;
use crate::character::player::Player;
use crate::core::combat_math::{calculate_damage_taken, can_trade_blows};
use crate::core::error::GameError;
use crate::core::progression::gain_experience;
use crate::world::Npc;

/// Outcome of a successful spell cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellCast {
    /// Signed magic value applied; negative means the target was healed.
    pub amount: i32,
}

/// Basic attack: deals `max(0, attack - defense)` and returns the damage.
pub fn resolve_attack<A, D>(attacker: &A, defender: &mut D) -> u32
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let damage = calculate_damage_taken(attacker.attack(), defender.defense());
    defender.take_damage(damage);
    damage
}

/// Casts one of the player's spells at `defender`.
///
/// The spell's value bypasses defense and may be negative, in which case it
/// heals the target.
pub fn cast_spell<D>(player: &Player, defender: &mut D, spell: &str) -> Result<SpellCast, GameError>
where
    D: Combatant + ?Sized,
{
    let amount = player
        .spell_power(spell)
        .ok_or_else(|| GameError::UnknownSpell {
            caster: player.name.clone(),
            spell: spell.to_string(),
        })?;
    defender.stats_mut().apply_magic(amount);
    Ok(SpellCast { amount })
}

/// Whether this fight can end without items, spells or retreat.
pub fn is_stalemate(player: &Player, enemy: &Enemy) -> bool {
    !can_trade_blows(
        player.attack(),
        player.defense(),
        enemy.attack(),
        enemy.defense(),
    )
}

/// Resolves the player's action. Only valid on [`BattlePhase::PlayerTurn`].
///
/// Moves the battle to `EnemyTurn`, or `Won` when the enemy falls, in which
/// case the reward is granted immediately. `Quit` leaves the phase untouched
/// and only reports [`CombatEvent::QuitRequested`].
pub fn take_player_turn(
    battle: &mut Battle,
    player: &mut Player,
    command: BattleCommand,
    npcs: &[Npc],
) -> Result<Vec<CombatEvent>, GameError> {
    if battle.phase != BattlePhase::PlayerTurn {
        return Err(GameError::InvalidAction(format!(
            "not the player's turn ({:?})",
            battle.phase
        )));
    }

    if !player.is_alive() {
        return Err(GameError::InvalidAction(format!(
            "{} has fallen",
            player.name
        )));
    }

    let mut events = Vec::new();

    match command {
        BattleCommand::Attack => {
            let damage = resolve_attack(&*player, &mut battle.enemy);
            events.push(CombatEvent::PlayerAttack {
                attacker: player.name.clone(),
                target: battle.enemy.name.clone(),
                damage,
            });
        }
        BattleCommand::Cast(spell) => match cast_spell(player, &mut battle.enemy, &spell) {
            Ok(cast) => events.push(CombatEvent::SpellCast {
                caster: player.name.clone(),
                spell,
                target: battle.enemy.name.clone(),
                amount: cast.amount,
            }),
            Err(e) => events.push(CombatEvent::ActionFailed {
                message: e.to_string(),
            }),
        },
        BattleCommand::UseItem(item) => match use_item(player, &item) {
            Ok(effect) => events.push(CombatEvent::ItemUsed {
                user: player.name.clone(),
                effect,
            }),
            Err(e) => events.push(CombatEvent::ActionFailed {
                message: e.to_string(),
            }),
        },
        BattleCommand::Talk => {
            events.extend(npcs.iter().map(|npc| CombatEvent::NpcSpoke {
                npc: npc.name.to_string(),
                line: npc.dialog.to_string(),
            }));
        }
        BattleCommand::Quit => {
            events.push(CombatEvent::QuitRequested);
            return Ok(events);
        }
    }

    events.push(CombatEvent::EnemyStatus {
        summary: battle.enemy.to_string(),
    });

    if battle.enemy.is_alive() {
        battle.phase = BattlePhase::EnemyTurn;
    } else {
        battle.phase = BattlePhase::Won;
        events.extend(award_victory(battle, player));
    }

    Ok(events)
}

/// Resolves the enemy's attack. Only valid on [`BattlePhase::EnemyTurn`].
pub fn take_enemy_turn(
    battle: &mut Battle,
    player: &mut Player,
) -> Result<Vec<CombatEvent>, GameError> {
    if battle.phase != BattlePhase::EnemyTurn {
        return Err(GameError::InvalidAction(format!(
            "not the enemy's turn ({:?})",
            battle.phase
        )));
    }

    let damage = resolve_attack(&battle.enemy, &mut *player);
    let mut events = vec![
        CombatEvent::EnemyAttack {
            attacker: battle.enemy.name.clone(),
            target: player.name.clone(),
            damage,
        },
        CombatEvent::PlayerStatus {
            summary: player.to_string(),
        },
    ];

    if player.is_alive() {
        battle.phase = BattlePhase::PlayerTurn;
    } else {
        battle.phase = BattlePhase::Lost;
        events.push(CombatEvent::PlayerDefeated {
            enemy: battle.enemy.name.clone(),
        });
    }

    Ok(events)
}

/// Plays one full round: the player's action, then the enemy's reply if the
/// battle is still running.
pub fn play_round(
    battle: &mut Battle,
    player: &mut Player,
    command: BattleCommand,
    npcs: &[Npc],
) -> Result<Vec<CombatEvent>, GameError> {
    let mut events = take_player_turn(battle, player, command, npcs)?;
    if battle.phase == BattlePhase::EnemyTurn {
        events.extend(take_enemy_turn(battle, player)?);
    }
    Ok(events)
}

fn award_victory(battle: &Battle, player: &mut Player) -> Vec<CombatEvent> {
    let xp_gained = battle.enemy.experience_reward;
    let mut events = vec![CombatEvent::EnemyDefeated {
        enemy: battle.enemy.name.clone(),
        xp_gained,
    }];

    for level_up in gain_experience(player, xp_gained, battle.level_up_policy) {
        log::info!("{} reached level {}", player.name, level_up.level);
        events.push(CombatEvent::LeveledUp {
            name: player.name.clone(),
            level_up,
        });
    }

    events
}
