//! Fixed game constants. The playfield is a logical coordinate space that the
//! renderer scales onto the terminal.

pub const GAME_WIDTH: f32 = 1200.0;
pub const GAME_HEIGHT: f32 = 800.0;

pub const SPACESHIP_WIDTH: f32 = 50.0;
pub const ENEMY_WIDTH: f32 = 50.0;

pub const ENEMY_COLUMNS: usize = 8;
pub const ENEMY_ROWS: usize = 5;
/// Distance between neighbouring enemies in the spawn grid
pub const ENEMY_SPACING: f32 = 80.0;

pub const PLAYER_STEP: f32 = 3.0;
/// Player is drawn slightly above its logical y
pub const PLAYER_RENDER_LIFT: f32 = 10.0;
pub const FIRE_COOLDOWN: f32 = 30.0;
pub const COOLDOWN_STEP: f32 = 0.5;

pub const PROJECTILE_STEP: f32 = 2.0;
/// Enemy projectiles are removed once they pass this margin above the bottom
pub const ENEMY_PROJECTILE_MARGIN: f32 = 30.0;
pub const ENEMY_PROJECTILE_RENDER_DY: f32 = 15.0;

/// Formation moves one column per tick and wraps every `FORMATION_COLUMNS` ticks
pub const FORMATION_COLUMNS: u64 = 14;
pub const FORMATION_STEP_X: f32 = 40.0;
pub const FORMATION_STEP_Y: f32 = 30.0;
/// Rows the formation may descend before it reaches the player zone
pub const FORMATION_MAX_ROW: u64 = 12;

/// Enemies start with a cooldown in `0..ENEMY_INITIAL_COOLDOWN_MAX`
pub const ENEMY_INITIAL_COOLDOWN_MAX: u32 = 100;
pub const ENEMY_RELOAD_MIN: u32 = 100;
pub const ENEMY_RELOAD_MAX: u32 = 150;

pub const FRAME_INTERVAL_MS: u64 = 16;
pub const LOG_FILE: &str = "debug.log";
