//! Pure combat arithmetic.
//!
//! These functions calculate combat outcomes without side effects. Entity
//! types call them to mutate their own health.

/// Calculate actual damage dealt after defense.
///
/// # Arguments
/// * `attack` - Attacker's attack stat
/// * `defense` - Defender's defense stat
///
/// # Returns
/// `max(0, attack - defense)`
pub fn calculate_damage_taken(attack: u32, defense: u32) -> u32 {
    attack.saturating_sub(defense)
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Apply healing to HP, returning the new HP capped at `max_hp`.
///
/// A fallen target (`current_hp == 0`) stays fallen.
pub fn apply_healing(current_hp: u32, amount: u32, max_hp: u32) -> u32 {
    if !is_alive(current_hp) {
        return current_hp;
    }
    current_hp.saturating_add(amount).min(max_hp)
}

/// Apply a signed magic value: positive damages, negative heals.
pub fn apply_signed(current_hp: u32, amount: i32, max_hp: u32) -> u32 {
    if amount >= 0 {
        apply_damage(current_hp, amount.unsigned_abs())
    } else {
        apply_healing(current_hp, amount.unsigned_abs(), max_hp)
    }
}

/// Check if entity is still alive.
pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}

/// Whether either side of a fight can hurt the other with a basic attack.
pub fn can_trade_blows(
    player_attack: u32,
    player_defense: u32,
    enemy_attack: u32,
    enemy_defense: u32,
) -> bool {
    calculate_damage_taken(player_attack, enemy_defense) > 0
        || calculate_damage_taken(enemy_attack, player_defense) > 0
}
