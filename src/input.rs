use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::entities::Control;

/// Without release events a key counts as held for this long after its last
/// press or auto-repeat.
pub const HOLD_TIMEOUT: Duration = Duration::from_millis(150);

/// Semantic actions produced from raw key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Press(Control),
    Release(Control),
    Quit,
}

/// Keys the game reacts to. Everything else is ignored.
pub fn control_for(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Left => Some(Control::MoveLeft),
        KeyCode::Right => Some(Control::MoveRight),
        KeyCode::Char(' ') => Some(Control::Shoot),
        _ => None,
    }
}

/// Polls the terminal and translates key events into game actions
pub struct InputManager {
    /// Whether the terminal reports key releases
    reports_release: bool,
    /// Last press of each held control, used when releases are not reported
    held: HashMap<Control, Instant>,
    actions: Vec<InputAction>,
}

impl InputManager {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            held: HashMap::new(),
            actions: Vec::new(),
        }
    }

    /// Drains all pending terminal events without blocking.
    /// Should be called once per frame before `take_actions`.
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event, Instant::now());
            }
        }
        self.expire_held(Instant::now());
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) {
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key_event, now),
            KeyEventKind::Release => {
                if let Some(control) = control_for(key_event.code) {
                    self.held.remove(&control);
                    self.actions.push(InputAction::Release(control));
                }
            }
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, now: Instant) {
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.actions.push(InputAction::Quit);
            return;
        }

        if let Some(control) = control_for(key_event.code) {
            if !self.reports_release {
                self.held.insert(control, now);
            }
            self.actions.push(InputAction::Press(control));
        }
    }

    /// Releases controls whose key has gone quiet for longer than
    /// [`HOLD_TIMEOUT`]. Only relevant when releases are not reported.
    pub fn expire_held(&mut self, now: Instant) {
        if self.reports_release {
            return;
        }

        let mut expired: Vec<Control> = self
            .held
            .iter()
            .filter(|(_, pressed_at)| now.duration_since(**pressed_at) > HOLD_TIMEOUT)
            .map(|(control, _)| *control)
            .collect();
        // Stable order for callers
        expired.sort_by_key(|control| *control as u8);

        for control in expired {
            self.held.remove(&control);
            self.actions.push(InputAction::Release(control));
        }
    }

    /// Returns the actions gathered since the last call
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.actions)
    }
}
