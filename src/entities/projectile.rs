use tracing::debug;

use super::game_state::GameState;
use super::take_indices;
use crate::collision::overlaps;
use crate::config::{
    ENEMY_PROJECTILE_MARGIN, ENEMY_PROJECTILE_RENDER_DY, GAME_HEIGHT, PROJECTILE_STEP,
};
use crate::scene::{Scene, Sprite, VisualHandle, despawn, place};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub owner: ProjectileOwner,
    pub handle: VisualHandle,
}

impl Projectile {
    pub fn new(x: f32, y: f32, owner: ProjectileOwner, handle: VisualHandle) -> Self {
        Self {
            x,
            y,
            owner,
            handle,
        }
    }

    pub fn update(&mut self) {
        match self.owner {
            ProjectileOwner::Player => self.y -= PROJECTILE_STEP,
            ProjectileOwner::Enemy => self.y += PROJECTILE_STEP,
        }
    }

    /// Where the projectile is drawn. Enemy shots are drawn from the middle
    /// of the enemy sprite, slightly lower than their logical position.
    pub fn render_position(&self, enemy_width: f32) -> (f32, f32) {
        match self.owner {
            ProjectileOwner::Player => (self.x, self.y),
            ProjectileOwner::Enemy => (
                self.x + enemy_width / 2.0,
                self.y + ENEMY_PROJECTILE_RENDER_DY,
            ),
        }
    }

    pub fn is_out_of_bounds(&self) -> bool {
        match self.owner {
            ProjectileOwner::Player => self.y < 0.0,
            ProjectileOwner::Enemy => self.y > GAME_HEIGHT - ENEMY_PROJECTILE_MARGIN,
        }
    }
}

pub fn spawn_projectile<S: Scene>(state: &mut GameState, scene: &mut S, x: f32, y: f32) {
    let handle = scene.spawn(Sprite::Laser);
    let projectile = Projectile::new(x, y, ProjectileOwner::Player, handle);
    place(scene, handle, x, y);
    debug!(x, y, "player fired");
    state.projectiles.push(projectile);
}

pub fn spawn_enemy_projectile<S: Scene>(state: &mut GameState, scene: &mut S, x: f32, y: f32) {
    let handle = scene.spawn(Sprite::EnemyLaser);
    let projectile = Projectile::new(x, y, ProjectileOwner::Enemy, handle);
    let (render_x, render_y) = projectile.render_position(state.enemy_width);
    place(scene, handle, render_x, render_y);
    state.enemy_projectiles.push(projectile);
}

/// Moves player projectiles up and resolves hits against the formation.
/// A projectile destroys at most one enemy.
pub fn update_projectiles<S: Scene>(state: &mut GameState, scene: &mut S) {
    let mut projectiles_to_remove = Vec::new();
    let mut enemies_to_remove = Vec::new();

    for (p_idx, projectile) in state.projectiles.iter_mut().enumerate() {
        projectile.update();
        if projectile.is_out_of_bounds() {
            projectiles_to_remove.push(p_idx);
            continue;
        }
        place(scene, projectile.handle, projectile.x, projectile.y);

        let Some(projectile_bounds) = scene.bounds(projectile.handle) else {
            continue;
        };

        let hit = state.enemies.iter().enumerate().find(|(e_idx, enemy)| {
            !enemies_to_remove.contains(e_idx)
                && scene
                    .bounds(enemy.handle)
                    .is_some_and(|enemy_bounds| overlaps(&enemy_bounds, &projectile_bounds))
        });

        if let Some((e_idx, enemy)) = hit {
            debug!(x = enemy.x, y = enemy.y, "enemy destroyed");
            projectiles_to_remove.push(p_idx);
            enemies_to_remove.push(e_idx);
        }
    }

    for projectile in take_indices(&mut state.projectiles, projectiles_to_remove) {
        despawn(scene, projectile.handle);
    }
    for enemy in take_indices(&mut state.enemies, enemies_to_remove) {
        despawn(scene, enemy.handle);
    }
}

/// Moves enemy projectiles down. A projectile that reaches the ship ends the
/// game and is removed along with the ones that left the playfield.
pub fn update_enemy_projectiles<S: Scene>(state: &mut GameState, scene: &mut S) {
    let enemy_width = state.enemy_width;
    let player_bounds = state.player.and_then(|handle| scene.bounds(handle));
    let mut projectiles_to_remove = Vec::new();
    let mut player_hit = false;

    for (p_idx, projectile) in state.enemy_projectiles.iter_mut().enumerate() {
        projectile.update();
        if projectile.is_out_of_bounds() {
            projectiles_to_remove.push(p_idx);
            continue;
        }

        let (render_x, render_y) = projectile.render_position(enemy_width);
        place(scene, projectile.handle, render_x, render_y);

        let hits_player = match (player_bounds, scene.bounds(projectile.handle)) {
            (Some(player_bounds), Some(projectile_bounds)) => {
                overlaps(&player_bounds, &projectile_bounds)
            }
            _ => false,
        };
        if hits_player {
            debug!(x = projectile.x, y = projectile.y, "player hit");
            player_hit = true;
            projectiles_to_remove.push(p_idx);
        }
    }

    for projectile in take_indices(&mut state.enemy_projectiles, projectiles_to_remove) {
        despawn(scene, projectile.handle);
    }

    if player_hit {
        state.set_game_over();
    }
}
