mod enemy;
mod game_state;
mod player;
mod projectile;

// Re-export all public types
pub use enemy::{Enemy, FormationOffset, spawn_enemies, spawn_enemy, update_enemies};
pub use game_state::{Control, GameState, Phase};
pub use player::{clamp_player_x, spawn_player, update_player};
pub use projectile::{
    Projectile, ProjectileOwner, spawn_enemy_projectile, spawn_projectile,
    update_enemy_projectiles, update_projectiles,
};

/// Removes the entries at `indices` and hands them back.
/// Duplicate and out-of-range indices are ignored.
pub(crate) fn take_indices<T>(items: &mut Vec<T>, mut indices: Vec<usize>) -> Vec<T> {
    // Remove in reverse order to avoid index issues
    indices.sort_unstable();
    indices.dedup();
    indices.reverse();

    let mut removed = Vec::with_capacity(indices.len());
    for idx in indices {
        if idx < items.len() {
            removed.push(items.remove(idx));
        }
    }
    removed
}
