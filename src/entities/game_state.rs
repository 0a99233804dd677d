use tracing::info;

use super::enemy::Enemy;
use super::projectile::Projectile;
use crate::config::{ENEMY_COLUMNS, ENEMY_ROWS, ENEMY_WIDTH, SPACESHIP_WIDTH};
use crate::scene::VisualHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Lost,
    Won,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// Inputs the player can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Shoot,
}

/// Everything the frame updaters read and write.
#[derive(Debug, Clone)]
pub struct GameState {
    pub x_pos: f32,
    pub y_pos: f32,
    pub move_left: bool,
    pub move_right: bool,
    pub shoot: bool,
    /// Frames (in half steps) until the player may fire again
    pub cooldown: f32,
    /// Player projectiles in flight
    pub projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub spaceship_width: f32,
    pub enemy_width: f32,
    /// Spawn grid size, only read when the grid is created
    pub enemy_columns: usize,
    pub enemy_rows: usize,
    /// Set once the player is hit or the formation lands; never cleared
    pub game_over: bool,
    pub phase: Phase,
    /// Visual element of the player's ship
    pub player: Option<VisualHandle>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            x_pos: 0.0,
            y_pos: 0.0,
            move_left: false,
            move_right: false,
            shoot: false,
            cooldown: 0.0,
            projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            enemies: Vec::new(),
            spaceship_width: SPACESHIP_WIDTH,
            enemy_width: ENEMY_WIDTH,
            enemy_columns: ENEMY_COLUMNS,
            enemy_rows: ENEMY_ROWS,
            game_over: false,
            phase: Phase::Playing,
            player: None,
        }
    }

    pub fn set_control(&mut self, control: Control, active: bool) {
        match control {
            Control::MoveLeft => self.move_left = active,
            Control::MoveRight => self.move_right = active,
            Control::Shoot => self.shoot = active,
        }
    }

    pub fn set_game_over(&mut self) {
        self.game_over = true;
    }

    /// Whether the ship may launch a projectile this frame
    pub fn can_fire(&self) -> bool {
        self.shoot && self.cooldown == 0.0 && self.projectiles.is_empty()
    }

    /// Moves to a terminal phase when the round is decided. Terminal phases stick.
    pub fn evaluate_phase(&mut self) -> Phase {
        if self.phase.is_terminal() {
            return self.phase;
        }

        if self.game_over {
            info!(enemies_left = self.enemies.len(), "player lost");
            self.phase = Phase::Lost;
        } else if self.enemies.is_empty() {
            info!("all enemies destroyed, player won");
            self.phase = Phase::Won;
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_state_new() {
        let state = GameState::new();
        assert_eq!(state.phase, Phase::Playing);
        assert!(!state.game_over);
        assert_eq!(state.cooldown, 0.0);
        assert_eq!(state.spaceship_width, 50.0);
        assert_eq!(state.enemy_columns, 8);
        assert_eq!(state.enemy_rows, 5);
        assert!(state.player.is_none());
    }

    #[test]
    fn test_set_control() {
        let mut state = GameState::new();
        state.set_control(Control::MoveLeft, true);
        state.set_control(Control::Shoot, true);
        assert!(state.move_left);
        assert!(!state.move_right);
        assert!(state.shoot);

        state.set_control(Control::MoveLeft, false);
        assert!(!state.move_left);
    }

    #[test]
    fn test_can_fire_requires_shoot_and_zero_cooldown() {
        let mut state = GameState::new();
        assert!(!state.can_fire());

        state.shoot = true;
        assert!(state.can_fire());

        state.cooldown = 0.5;
        assert!(!state.can_fire());
    }

    #[test]
    fn test_empty_formation_is_won() {
        let mut state = GameState::new();
        assert_eq!(state.evaluate_phase(), Phase::Won);
    }

    #[test]
    fn test_game_over_beats_empty_formation() {
        let mut state = GameState::new();
        state.set_game_over();
        assert_eq!(state.evaluate_phase(), Phase::Lost);
    }

    #[test]
    fn test_terminal_phase_sticks() {
        let mut state = GameState::new();
        state.evaluate_phase();
        assert_eq!(state.phase, Phase::Won);

        state.set_game_over();
        assert_eq!(state.evaluate_phase(), Phase::Won);
    }

    #[test]
    fn test_phase_is_terminal() {
        assert!(!Phase::Playing.is_terminal());
        assert!(Phase::Lost.is_terminal());
        assert!(Phase::Won.is_terminal());
    }
}
