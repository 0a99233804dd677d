use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::{GAME_HEIGHT, GAME_WIDTH};
use crate::entities::Phase;
use crate::scene::{Sprite, SpriteNode, SpriteScene};

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub phase: Phase,
    pub scene: &'a SpriteScene,
    pub enemies_left: usize,
    pub elapsed_time_secs: u64,
    pub area: Rect,
}

/// Draws the playfield, the HUD and the end-of-round banner
#[derive(Debug, Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let playfield = self.render_game(frame, view);
        match view.phase {
            Phase::Playing => {}
            Phase::Won => self.render_banner(frame, playfield, "YOU WIN!", Color::Green),
            Phase::Lost => self.render_banner(frame, playfield, "GAME OVER", Color::Red),
        }
    }

    /// Renders the active playfield and returns its inner area
    fn render_game(&self, frame: &mut Frame, view: &RenderView) -> Rect {
        let area = view.area;

        // Leave a row for the header and one for the controls hint
        let field_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(2),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let playfield = block.inner(field_area);
        frame.render_widget(block, field_area);

        let buffer = frame.buffer_mut();
        for node in view.scene.nodes() {
            let Some(cells) = cell_rect(node, playfield) else {
                continue;
            };
            let style = sprite_style(node.sprite);
            let row: String = std::iter::repeat_n(node.sprite.glyph(), cells.width as usize)
                .collect();
            for y in cells.y..cells.y + cells.height {
                buffer.set_string(cells.x, y, &row, style);
            }
        }

        let minutes = view.elapsed_time_secs / 60;
        let seconds = view.elapsed_time_secs % 60;
        let header = Line::from(vec![
            Span::styled("Enemies: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.enemies_left),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:02}:{:02}", minutes, seconds),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let header_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height.min(1),
        };
        frame.render_widget(Paragraph::new(header), header_area);

        if area.height > 1 {
            let controls = Line::from(vec![Span::styled(
                "[Arrows: Move] [Space: Fire] [Q: Quit]",
                Style::default().fg(Color::DarkGray),
            )]);
            let controls_area = Rect {
                x: area.x + 1,
                y: area.y + area.height - 1,
                width: area.width.saturating_sub(2),
                height: 1,
            };
            frame.render_widget(Paragraph::new(controls).centered(), controls_area);
        }

        playfield
    }

    fn render_banner(&self, frame: &mut Frame, playfield: Rect, title: &str, color: Color) {
        let text = vec![
            Line::from(""),
            Line::from(title.to_string()).centered().bold().fg(color),
            Line::from(""),
            Line::from("Press Q to quit").centered().white(),
        ];

        let width = 30.min(playfield.width);
        let height = 6.min(playfield.height);
        let banner_area = Rect {
            x: playfield.x + (playfield.width - width) / 2,
            y: playfield.y + (playfield.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, banner_area);
        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .alignment(Alignment::Center),
            banner_area,
        );
    }
}

fn sprite_style(sprite: Sprite) -> Style {
    let color = match sprite {
        Sprite::Player => Color::Green,
        Sprite::Enemy => Color::Red,
        Sprite::Laser => Color::Yellow,
        Sprite::EnemyLaser => Color::Magenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Maps a node from playfield coordinates onto terminal cells inside `area`.
/// Every visible node covers at least one cell; nodes fully outside are skipped.
fn cell_rect(node: &SpriteNode, area: Rect) -> Option<Rect> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let bounds = node.bounds();
    if bounds.right < 0.0
        || bounds.bottom < 0.0
        || bounds.left >= GAME_WIDTH
        || bounds.top >= GAME_HEIGHT
    {
        return None;
    }

    let to_col = |x: f32| x * area.width as f32 / GAME_WIDTH;
    let to_row = |y: f32| y * area.height as f32 / GAME_HEIGHT;

    let left = (to_col(bounds.left.max(0.0)) as u16).min(area.width - 1);
    let top = (to_row(bounds.top.max(0.0)) as u16).min(area.height - 1);
    let right = (to_col(bounds.right).ceil() as u16).clamp(left + 1, area.width);
    let bottom = (to_row(bounds.bottom).ceil() as u16).clamp(top + 1, area.height);

    Some(Rect {
        x: area.x + left,
        y: area.y + top,
        width: right - left,
        height: bottom - top,
    })
}
