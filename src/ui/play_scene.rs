//! Playfield rendering: parallax backdrop, obstacles, the UFO and the score
//! overlay.

use super::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_status_bar,
};
use crate::game::GameSession;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Star,
    Skyline,
    Obstacle,
    Actor,
}

pub fn render_play(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    best_score: u32,
    show_backdrop: bool,
) {
    let layout = create_game_layout(frame, area, " Escape Earth ", Color::Cyan, 10, 22);

    render_play_area(frame, layout.content, session, show_backdrop);
    render_score_overlay(frame, layout.content, session.score, best_score);
    render_status_bar(
        frame,
        layout.status_bar,
        "Keep flying!",
        Color::Green,
        &[("[Space/Up/Click]", "Flap"), ("[Esc]", "Quit")],
    );
    render_info_panel(frame, layout.info_panel, session, best_score);
}

/// Classify the cell at `(col, row)` of a `width` x `height` grid that
/// covers the whole playfield.
pub fn classify_cell(
    session: &GameSession,
    col: u16,
    row: u16,
    width: u16,
    height: u16,
    show_backdrop: bool,
) -> Cell {
    let config = &session.config;
    let x = (col as f64 + 0.5) * config.screen_width / width.max(1) as f64;
    let y = (row as f64 + 0.5) * config.screen_height / height.max(1) as f64;

    if session.actor.bounds().contains_point(x, y) {
        return Cell::Actor;
    }

    let in_obstacle = session
        .obstacles
        .iter()
        .any(|o| o.top_rect().contains_point(x, y) || o.bottom_rect().contains_point(x, y));
    if in_obstacle {
        return Cell::Obstacle;
    }

    if show_backdrop {
        let skyline = session.backdrop.skyline_height(x, session.city_scroll);
        if skyline > 0.0 && y >= config.screen_height - skyline {
            return Cell::Skyline;
        }
        if session.backdrop.star_at(x, y, session.star_scroll) {
            return Cell::Star;
        }
    }

    Cell::Empty
}

fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession, show_backdrop: bool) {
    let width = area.width;
    let height = area.height;
    if width == 0 || height == 0 {
        return;
    }

    let actor_glyph = if session.actor.velocity < -2.0 {
        "▲"
    } else if session.actor.velocity > 4.0 {
        "▼"
    } else {
        "◆"
    };

    let mut lines = Vec::with_capacity(height as usize);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width as usize);
        for col in 0..width {
            let span = match classify_cell(session, col, row, width, height, show_backdrop) {
                Cell::Actor => Span::styled(
                    actor_glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Obstacle => Span::styled("█", Style::default().fg(Color::Gray)),
                Cell::Skyline => Span::styled("▓", Style::default().fg(Color::DarkGray)),
                Cell::Star => Span::styled("·", Style::default().fg(Color::Yellow)),
                Cell::Empty => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// "Score" and "High Score" in the top-left corner of the playfield.
fn render_score_overlay(frame: &mut Frame, area: Rect, score: u32, best_score: u32) {
    if area.width < 4 || area.height < 2 {
        return;
    }
    let style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(format!("Score: {}", score), style)),
        Line::from(Span::styled(format!("High Score: {}", best_score), style)),
    ];
    let overlay = Rect::new(area.x + 1, area.y, area.width - 1, 2);
    frame.render_widget(Paragraph::new(lines), overlay);
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession, best_score: u32) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let points_per_level = session.config.points_per_level.max(1);
    let to_next = points_per_level - session.score % points_per_level;

    let lines = vec![
        info_line("Score", session.score.to_string(), Color::White),
        info_line("Best", best_score.to_string(), Color::Yellow),
        Line::from(""),
        info_line("Level", session.difficulty_level.to_string(), Color::Cyan),
        info_line("Speed", format!("{:.1}", session.current_speed), Color::Cyan),
        info_line("Next in", to_next.to_string(), Color::DarkGray),
        Line::from(""),
        info_line("Obstacles", session.obstacles.len().to_string(), Color::Gray),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
