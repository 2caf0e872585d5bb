//! Title screen.

use super::game_common::{
    centered_button, render_button, render_centered_line, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

const BUTTON_WIDTH: u16 = 20;
const BUTTON_HEIGHT: u16 = 3;

/// Inner drawing area of the menu (inside the border).
fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Where the START button sits for a terminal of size `area`.
pub fn start_button(area: Rect) -> Rect {
    let inner = inner_area(area);
    let center_y = inner.y + inner.height / 2;
    centered_button(inner, center_y + 2, BUTTON_WIDTH, BUTTON_HEIGHT)
}

pub fn render_menu(frame: &mut Frame, area: Rect, best_score: u32) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let center_y = inner.y + inner.height / 2;

    render_centered_line(
        frame,
        inner,
        center_y.saturating_sub(5),
        Line::from(Span::styled(
            "Escape Earth!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    );
    render_centered_line(
        frame,
        inner,
        center_y.saturating_sub(2),
        Line::from(Span::styled(
            "Press Space to Begin",
            Style::default().fg(Color::White),
        )),
    );
    if best_score > 0 {
        render_centered_line(
            frame,
            inner,
            center_y,
            Line::from(Span::styled(
                format!("High Score: {}", best_score),
                Style::default().fg(Color::Green),
            )),
        );
    }

    render_button(frame, start_button(area), "START", Color::Green);

    let status = Rect {
        y: (inner.y + inner.height).saturating_sub(2),
        height: 2.min(inner.height),
        ..inner
    };
    render_status_bar(
        frame,
        status,
        "Fly through the gaps. Don't touch anything.",
        Color::DarkGray,
        &[("[Space/Click]", "Start"), ("[Esc/Q]", "Quit")],
    );
}
