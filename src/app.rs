use color_eyre::Result;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::FRAME_INTERVAL_MS;
use crate::entities::{GameState, Phase};
use crate::frame::{run_frame, setup_game};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::scene::SpriteScene;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    state: GameState,
    /// Visual elements of every live entity
    scene: SpriteScene,
    rng: ThreadRng,
    /// Game timers
    game_start_time: Instant,
    final_time_secs: Option<u64>,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`].
    ///
    /// `reports_key_release` tells the input layer whether the terminal sends
    /// key release events.
    pub fn new(reports_key_release: bool) -> Self {
        let mut scene = SpriteScene::new();
        let mut rng = rand::rng();
        let state = setup_game(&mut scene, &mut rng);

        Self {
            running: true,
            state,
            scene,
            rng,
            game_start_time: Instant::now(),
            final_time_secs: None,
            input_manager: InputManager::new(reports_key_release),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        info!("game started");
        while self.running {
            terminal.draw(|frame| {
                // Freeze the clock once the round is decided
                let elapsed_time_secs = self
                    .final_time_secs
                    .unwrap_or_else(|| self.game_start_time.elapsed().as_secs());
                let view = RenderView {
                    phase: self.state.phase,
                    scene: &self.scene,
                    enemies_left: self.state.enemies.len(),
                    elapsed_time_secs,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events()?;
            for action in self.input_manager.take_actions() {
                self.process_action(action);
            }

            self.update_game();

            std::thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
        }
        info!(phase = ?self.state.phase, "game closed");
        Ok(())
    }

    fn process_action(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => self.running = false,
            InputAction::Press(control) => self.state.set_control(control, true),
            InputAction::Release(control) => self.state.set_control(control, false),
        }
    }

    fn update_game(&mut self) {
        let elapsed = self.game_start_time.elapsed();
        let phase = run_frame(&mut self.state, &mut self.scene, elapsed, &mut self.rng);

        // Capture final time when the round is decided
        if phase != Phase::Playing && self.final_time_secs.is_none() {
            self.final_time_secs = Some(elapsed.as_secs());
            info!(?phase, seconds = elapsed.as_secs(), "round over");
        }
    }
}
