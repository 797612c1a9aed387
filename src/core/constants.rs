// Starting character
pub const STARTING_HEALTH: i32 = 100;
pub const STARTING_ATTACK: i32 = 10;
pub const STARTING_DEFENSE: i32 = 7;
pub const STARTING_WEAPON: (&str, i32) = ("Sword", 3);
pub const STARTING_POTION: (&str, i32) = ("Health Potion", 20);

// XP and leveling
pub const XP_PER_LEVEL: u32 = 100;
pub const LEVEL_UP_MAX_HEALTH: i32 = 10;
pub const LEVEL_UP_ATTACK: i32 = 2;
pub const LEVEL_UP_DEFENSE: i32 = 2;

// Monster table: (name, health, attack, defense, xp reward)
pub const GOBLIN_STATS: (&str, i32, i32, i32, u32) = ("Goblin", 30, 8, 3, 20);
pub const DRAGON_STATS: (&str, i32, i32, i32, u32) = ("Dragon", 70, 10, 8, 100);
pub const SKELETON_STATS: (&str, i32, i32, i32, u32) = ("Skeleton", 40, 7, 5, 10);

// Percentage rolls (out of 100)
pub const DRAGON_BREATH_CHANCE_PERCENT: u32 = 20;
pub const DRAGON_BREATH_MULTIPLIER: i32 = 2;
pub const SKELETON_DOUBLE_ATTACK_CHANCE_PERCENT: u32 = 10;
pub const FLEE_CHANCE_PERCENT: u32 = 30;

// Post-battle recovery, inclusive
pub const VICTORY_HEAL_MIN: i32 = 5;
pub const VICTORY_HEAL_MAX: i32 = 25;

// Save slot
pub const SAVE_FILE_NAME: &str = "savegame.txt";
pub const SAVE_TAG_WEAPON: &str = "WEAPON";
pub const SAVE_TAG_POTION: &str = "POTION";
