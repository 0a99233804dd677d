use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use super::game_state::GameState;
use super::projectile::spawn_enemy_projectile;
use crate::config::{
    COOLDOWN_STEP, ENEMY_INITIAL_COOLDOWN_MAX, ENEMY_RELOAD_MAX, ENEMY_RELOAD_MIN, ENEMY_SPACING,
    FORMATION_COLUMNS, FORMATION_MAX_ROW, FORMATION_STEP_X, FORMATION_STEP_Y,
};
use crate::scene::{Scene, Sprite, VisualHandle, place, resize};

#[derive(Debug, Clone)]
pub struct Enemy {
    /// Position in the spawn grid
    pub origin_x: f32,
    pub origin_y: f32,
    /// Position after the formation offset of the latest frame
    pub x: f32,
    pub y: f32,
    /// Counts down by half steps; the enemy fires when it runs out
    pub fire_cooldown: f32,
    pub handle: VisualHandle,
}

impl Enemy {
    pub fn new(x: f32, y: f32, fire_cooldown: f32, handle: VisualHandle) -> Self {
        Self {
            origin_x: x,
            origin_y: y,
            x,
            y,
            fire_cooldown,
            handle,
        }
    }

    /// Moves the enemy to its grid slot shifted by the formation offset
    pub fn follow_formation(&mut self, offset: FormationOffset) {
        let (dx, dy) = offset.displacement();
        self.x = self.origin_x + dx;
        self.y = self.origin_y + dy;
    }

    /// Ticks the cooldown and reports whether the enemy fires this frame.
    /// Firing reloads the cooldown with a fresh random value.
    pub fn tick_fire<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.fire_cooldown -= COOLDOWN_STEP;
        if self.fire_cooldown > 0.0 {
            return false;
        }
        self.fire_cooldown = rng.random_range(ENEMY_RELOAD_MIN..ENEMY_RELOAD_MAX) as f32;
        true
    }
}

/// Shared displacement of the whole formation, derived from the game clock.
///
/// The formation steps one column right per tick and drops a row every time
/// it wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationOffset {
    pub column: u64,
    pub row: u64,
}

impl FormationOffset {
    pub fn from_ticks(ticks: u64) -> Self {
        let column = ticks % FORMATION_COLUMNS;
        let row = (ticks - column) / FORMATION_COLUMNS;
        Self { column, row }
    }

    /// One tick per whole second
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self::from_ticks(elapsed.as_secs())
    }

    /// The formation has descended into the player zone
    pub fn has_landed(&self) -> bool {
        self.row > FORMATION_MAX_ROW
    }

    pub fn displacement(&self) -> (f32, f32) {
        (
            self.column as f32 * FORMATION_STEP_X,
            self.row as f32 * FORMATION_STEP_Y,
        )
    }
}

pub fn spawn_enemy<S: Scene, R: Rng>(
    state: &mut GameState,
    scene: &mut S,
    rng: &mut R,
    x: f32,
    y: f32,
) {
    let handle = scene.spawn(Sprite::Enemy);
    let fire_cooldown = rng.random_range(0..ENEMY_INITIAL_COOLDOWN_MAX) as f32;
    state.enemies.push(Enemy::new(x, y, fire_cooldown, handle));

    resize(scene, handle, state.enemy_width);
    place(scene, handle, x, y);
}

/// Fills the configured grid, row by row.
pub fn spawn_enemies<S: Scene, R: Rng>(state: &mut GameState, scene: &mut S, rng: &mut R) {
    for row in 0..state.enemy_rows {
        for column in 0..state.enemy_columns {
            let x = column as f32 * ENEMY_SPACING;
            let y = row as f32 * ENEMY_SPACING;
            spawn_enemy(state, scene, rng, x, y);
        }
    }
    info!(count = state.enemies.len(), "enemy formation spawned");
}

/// Moves the formation in lockstep and lets each enemy fire.
/// Does nothing once the game is over.
pub fn update_enemies<S: Scene, R: Rng>(
    state: &mut GameState,
    scene: &mut S,
    elapsed: Duration,
    rng: &mut R,
) {
    if state.game_over {
        return;
    }

    let offset = FormationOffset::from_elapsed(elapsed);
    if offset.has_landed() {
        info!(row = offset.row, "enemy formation reached the player zone");
        state.set_game_over();
        return;
    }

    let mut shots = Vec::new();
    for enemy in state.enemies.iter_mut() {
        enemy.follow_formation(offset);
        place(scene, enemy.handle, enemy.x, enemy.y);

        if enemy.tick_fire(rng) {
            shots.push((enemy.x, enemy.y));
        }
    }

    for (x, y) in shots {
        debug!(x, y, "enemy fired");
        spawn_enemy_projectile(state, scene, x, y);
    }
}
