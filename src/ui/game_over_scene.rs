//! Game-over screen with PLAY AGAIN / QUIT buttons.

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

fn inner_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// PLAY AGAIN and QUIT button rects for a terminal of size `area`.
pub fn game_over_buttons(area: Rect) -> (Rect, Rect) {
    let inner = inner_area(area);
    let center_y = inner.y + inner.height / 2;
    let play_again = centered_button(inner, center_y, BUTTON_WIDTH, BUTTON_HEIGHT);
    let quit = centered_button(
        inner,
        play_again.y + BUTTON_HEIGHT + 1,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );
    (play_again, quit)
}

pub fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    final_score: u32,
    best_score: u32,
    new_best: bool,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let center_y = inner.y + inner.height / 2;

    render_centered_line(
        frame,
        inner,
        center_y.saturating_sub(6),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    );
    render_centered_line(
        frame,
        inner,
        center_y.saturating_sub(4),
        Line::from(Span::styled(
            format!("Score: {}", final_score),
            Style::default().fg(Color::White),
        )),
    );

    let best_line = if new_best {
        Line::from(vec![
            Span::styled(
                format!("High Score: {}", best_score),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                "  NEW BEST!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("High Score: {}", best_score),
            Style::default().fg(Color::Green),
        ))
    };
    render_centered_line(frame, inner, center_y.saturating_sub(3), best_line);

    let (play_again, quit) = game_over_buttons(area);
    render_button(frame, play_again, "PLAY AGAIN", Color::Green);
    render_button(frame, quit, "QUIT", Color::Green);

    let status = Rect {
        y: (inner.y + inner.height).saturating_sub(2),
        height: 2.min(inner.height),
        ..inner
    };
    render_status_bar(
        frame,
        status,
        "",
        Color::DarkGray,
        &[("[Space/Enter]", "Play again"), ("[Esc/Q]", "Quit")],
    );
}
