//! Frame driver: builds a round and advances it one frame at a time.

use std::time::Duration;

use rand::Rng;
use tracing::trace;

use crate::entities::{
    GameState, Phase, spawn_enemies, spawn_player, update_enemies, update_enemy_projectiles,
    update_player, update_projectiles,
};
use crate::scene::Scene;

/// Creates the player ship and the enemy grid.
pub fn setup_game<S: Scene, R: Rng>(scene: &mut S, rng: &mut R) -> GameState {
    let mut state = GameState::new();
    spawn_player(&mut state, scene);
    spawn_enemies(&mut state, scene, rng);
    state
}

/// Runs every updater once, in order, then evaluates the outcome.
///
/// `elapsed` is the time since the round started. Once the round is won or
/// lost this is a no-op and returns the terminal phase.
pub fn run_frame<S: Scene, R: Rng>(
    state: &mut GameState,
    scene: &mut S,
    elapsed: Duration,
    rng: &mut R,
) -> Phase {
    if state.phase.is_terminal() {
        return state.phase;
    }

    update_player(state, scene);
    update_enemies(state, scene, elapsed, rng);
    update_projectiles(state, scene);
    update_enemy_projectiles(state, scene);

    trace!(
        enemies = state.enemies.len(),
        projectiles = state.projectiles.len(),
        enemy_projectiles = state.enemy_projectiles.len(),
        "frame advanced"
    );
    state.evaluate_phase()
}
