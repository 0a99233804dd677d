/// Integration tests for game logic
///
/// These tests drive whole frames through the public API and check the
/// scenarios a round can go through: hits, misses, winning and losing.
use rand::SeedableRng;
use rand::rngs::StdRng;
use space_shooter::entities::{spawn_enemy_projectile, spawn_projectile};
use space_shooter::{GameState, Phase, Scene, SpriteScene, run_frame, setup_game};
use std::time::Duration;

fn new_round() -> (GameState, SpriteScene, StdRng) {
    let mut scene = SpriteScene::new();
    let mut rng = StdRng::seed_from_u64(42);
    let state = setup_game(&mut scene, &mut rng);
    (state, scene, rng)
}

#[test]
fn test_round_starts_with_full_grid() {
    let (state, scene, _) = new_round();
    assert_eq!(state.enemies.len(), 40);
    for (i, enemy) in state.enemies.iter().enumerate() {
        let row = (i / 8) as f32;
        let column = (i % 8) as f32;
        assert_eq!((enemy.origin_x, enemy.origin_y), (column * 80.0, row * 80.0));
    }
    // 40 enemies and the ship
    assert_eq!(scene.len(), 41);
}

#[test]
fn test_player_shot_destroys_one_enemy() {
    let (mut state, mut scene, mut rng) = new_round();
    state.shoot = true;

    let mut frames = 0;
    while state.enemies.len() == 40 && frames < 200 {
        run_frame(&mut state, &mut scene, Duration::ZERO, &mut rng);
        frames += 1;
    }

    assert_eq!(state.enemies.len(), 39);
    assert!(state.projectiles.is_empty());
    assert_eq!(state.phase, Phase::Playing);
    // The bottom enemy of the rightmost column sits in the shot's path
    assert!(
        !state
            .enemies
            .iter()
            .any(|e| e.origin_x == 560.0 && e.origin_y == 320.0)
    );
}

#[test]
fn test_only_one_player_projectile_in_flight() {
    let (mut state, mut scene, mut rng) = new_round();
    state.shoot = true;

    for _ in 0..150 {
        run_frame(&mut state, &mut scene, Duration::ZERO, &mut rng);
        assert!(state.projectiles.len() <= 1);
    }
}

#[test]
fn test_enemy_projectile_leaves_playfield() {
    let (mut state, mut scene, mut rng) = new_round();
    for enemy in &mut state.enemies {
        enemy.fire_cooldown = 1000.0;
    }
    spawn_enemy_projectile(&mut state, &mut scene, 1000.0, 769.0);

    run_frame(&mut state, &mut scene, Duration::ZERO, &mut rng);

    assert!(state.enemy_projectiles.is_empty());
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn test_enemy_projectile_hit_loses_round() {
    let (mut state, mut scene, mut rng) = new_round();
    for enemy in &mut state.enemies {
        enemy.fire_cooldown = 1000.0;
    }
    // Drawn 25 units to the right, straight onto the ship
    spawn_enemy_projectile(&mut state, &mut scene, 590.0, 720.0);

    let phase = run_frame(&mut state, &mut scene, Duration::ZERO, &mut rng);

    assert_eq!(phase, Phase::Lost);
    assert!(state.game_over);
    assert!(state.enemy_projectiles.is_empty());
}

#[test]
fn test_clearing_formation_wins_and_stays_won() {
    let (mut state, mut scene, mut rng) = new_round();
    for enemy in state.enemies.drain(..) {
        scene.remove(enemy.handle).unwrap();
    }

    assert_eq!(
        run_frame(&mut state, &mut scene, Duration::ZERO, &mut rng),
        Phase::Won
    );

    // Even a landing formation clock cannot undo the win
    for seconds in [1, 60, 200] {
        assert_eq!(
            run_frame(&mut state, &mut scene, Duration::from_secs(seconds), &mut rng),
            Phase::Won
        );
    }
    assert!(!state.game_over);
}

#[test]
fn test_formation_landing_loses_round() {
    let (mut state, mut scene, mut rng) = new_round();

    // 181 ticks is the last row before the player zone
    assert_eq!(
        run_frame(&mut state, &mut scene, Duration::from_secs(181), &mut rng),
        Phase::Playing
    );
    assert_eq!(
        run_frame(&mut state, &mut scene, Duration::from_secs(182), &mut rng),
        Phase::Lost
    );
    assert_eq!(state.enemies.len(), 40);
}

#[test]
fn test_formation_follows_clock() {
    let (mut state, mut scene, mut rng) = new_round();

    run_frame(&mut state, &mut scene, Duration::from_millis(29_500), &mut rng);

    // 29 ticks: column 1, row 2
    let first = &state.enemies[0];
    assert_eq!((first.x, first.y), (40.0, 60.0));
    let bounds = scene.bounds(first.handle).unwrap();
    assert_eq!((bounds.left, bounds.top), (40.0, 60.0));
}

#[test]
fn test_lost_round_freezes_state() {
    let (mut state, mut scene, mut rng) = new_round();
    run_frame(&mut state, &mut scene, Duration::from_secs(182), &mut rng);
    assert_eq!(state.phase, Phase::Lost);

    state.shoot = true;
    state.move_left = true;
    run_frame(&mut state, &mut scene, Duration::from_secs(183), &mut rng);

    assert!(state.projectiles.is_empty());
    assert_eq!(state.x_pos, 600.0);
}

#[test]
fn test_manual_shot_removes_projectile_and_enemy_elements() {
    let (mut state, mut scene, mut rng) = new_round();
    for enemy in &mut state.enemies {
        enemy.fire_cooldown = 1000.0;
    }
    // Just below the first enemy
    spawn_projectile(&mut state, &mut scene, 10.0, 52.0);
    let elements_before = scene.len();

    run_frame(&mut state, &mut scene, Duration::ZERO, &mut rng);

    assert_eq!(state.enemies.len(), 39);
    assert!(state.projectiles.is_empty());
    assert_eq!(scene.len(), elements_before - 2);
}
