use tracing::warn;

use super::game_state::GameState;
use super::projectile::spawn_projectile;
use crate::config::{
    COOLDOWN_STEP, FIRE_COOLDOWN, GAME_HEIGHT, GAME_WIDTH, PLAYER_RENDER_LIFT, PLAYER_STEP,
};
use crate::scene::{Scene, Sprite, place, resize};

/// Keeps the ship fully inside the playfield horizontally
pub fn clamp_player_x(x: f32, ship_width: f32) -> f32 {
    x.clamp(0.0, GAME_WIDTH - ship_width)
}

/// Places the ship at the bottom centre of the playfield.
pub fn spawn_player<S: Scene>(state: &mut GameState, scene: &mut S) {
    state.x_pos = GAME_WIDTH / 2.0;
    state.y_pos = GAME_HEIGHT - state.spaceship_width;

    let handle = scene.spawn(Sprite::Player);
    resize(scene, handle, state.spaceship_width);
    place(scene, handle, state.x_pos, state.y_pos - PLAYER_RENDER_LIFT);
    state.player = Some(handle);
}

/// Applies held movement, fires when allowed and ticks the fire cooldown.
///
/// Left is applied before right, so holding both cancels out. The shot
/// leaves from the clamped position.
pub fn update_player<S: Scene>(state: &mut GameState, scene: &mut S) {
    let mut x = state.x_pos;
    if state.move_left {
        x -= PLAYER_STEP;
    }
    if state.move_right {
        x += PLAYER_STEP;
    }
    state.x_pos = clamp_player_x(x, state.spaceship_width);

    if state.can_fire() {
        let (fire_x, fire_y) = (state.x_pos, state.y_pos);
        spawn_projectile(state, scene, fire_x, fire_y);
        state.cooldown = FIRE_COOLDOWN;
    }

    match state.player {
        Some(handle) => place(scene, handle, state.x_pos, state.y_pos - PLAYER_RENDER_LIFT),
        None => warn!("player has no visual element"),
    }

    if state.cooldown > 0.0 {
        state.cooldown = (state.cooldown - COOLDOWN_STEP).max(0.0);
    }
}
