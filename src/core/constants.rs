// Experience and leveling
pub const XP_PER_LEVEL: u32 = 100;
pub const LEVEL_UP_MAX_HEALTH_GAIN: u32 = 10;
pub const LEVEL_UP_ATTACK_GAIN: u32 = 2;
pub const LEVEL_UP_DEFENSE_GAIN: u32 = 2;

// Starting character
pub const STARTING_HEALTH: u32 = 100;
pub const STARTING_ATTACK: u32 = 10;
pub const STARTING_DEFENSE: u32 = 5;
pub const STARTING_SPELLS: [(&str, i32); 2] = [("Fireball", 15), ("Heal", -10)];

// Items
pub const HEALTH_POTION: &str = "Health Potion";
pub const ATTACK_POTION: &str = "Attack Potion";
pub const HEALTH_POTION_RESTORE: u32 = 20;
pub const ATTACK_POTION_BONUS: u32 = 5;
pub const FINDABLE_ITEMS: [&str; 2] = [HEALTH_POTION, ATTACK_POTION];

// Save system
pub const SAVE_FILE_NAME: &str = "save_game.json";
pub const SAVE_DIR_APPLICATION: &str = "wayfarer";
