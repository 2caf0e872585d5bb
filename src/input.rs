//! Turns raw terminal events into per-frame [`Triggers`].
//!
//! The same key means different things on different screens (Space starts,
//! flaps or replays), so mapping needs the current [`FlowState`] and the
//! clickable regions of the screen being shown.

use crate::flow::{FlowState, Triggers};
use crate::ui::game_common::rect_contains;
use crate::ui::ScreenButtons;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

/// Drain every pending terminal event without blocking.
pub fn drain_events(state: FlowState, buttons: &ScreenButtons) -> io::Result<Triggers> {
    let mut triggers = Triggers::default();
    while event::poll(Duration::ZERO)? {
        let event = event::read()?;
        triggers.merge(map_event(&event, state, buttons));
    }
    Ok(triggers)
}

/// Map one terminal event to the triggers it fires on the current screen.
pub fn map_event(event: &Event, state: FlowState, buttons: &ScreenButtons) -> Triggers {
    match event {
        Event::Key(key) => map_key(key, state),
        Event::Mouse(mouse) => map_mouse(mouse, state, buttons),
        _ => Triggers::default(),
    }
}

fn map_key(key: &KeyEvent, state: FlowState) -> Triggers {
    let mut triggers = Triggers::default();
    if key.kind != KeyEventKind::Press {
        return triggers;
    }

    // Ctrl+C is the terminal's close-window.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        triggers.quit = true;
        return triggers;
    }

    match state {
        FlowState::Menu => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => triggers.start = true,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => triggers.quit = true,
            _ => {}
        },
        FlowState::Playing => match key.code {
            KeyCode::Char(' ')
            | KeyCode::Enter
            | KeyCode::Up
            | KeyCode::Char('w')
            | KeyCode::Char('W') => triggers.flap = true,
            KeyCode::Esc => triggers.quit = true,
            _ => {}
        },
        FlowState::GameOver => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => triggers.replay = true,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => triggers.quit = true,
            _ => {}
        },
        FlowState::Exit => {}
    }
    triggers
}

fn map_mouse(mouse: &MouseEvent, state: FlowState, buttons: &ScreenButtons) -> Triggers {
    let mut triggers = Triggers::default();
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return triggers;
    };
    let hit = |rect: Option<ratatui::layout::Rect>| {
        rect.is_some_and(|r| rect_contains(r, mouse.column, mouse.row))
    };

    match state {
        // Anywhere on screen.
        FlowState::Playing => triggers.flap = true,
        FlowState::Menu => {
            triggers.start = hit(buttons.start);
        }
        FlowState::GameOver => {
            triggers.replay = hit(buttons.play_again);
            triggers.quit = hit(buttons.quit);
        }
        FlowState::Exit => {}
    }
    triggers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn buttons() -> ScreenButtons {
        ScreenButtons {
            start: Some(Rect::new(30, 14, 20, 3)),
            play_again: Some(Rect::new(30, 12, 20, 3)),
            quit: Some(Rect::new(30, 16, 20, 3)),
        }
    }

    #[test]
    fn test_space_depends_on_screen() {
        let b = buttons();
        let space = press(KeyCode::Char(' '));
        assert!(map_event(&space, FlowState::Menu, &b).start);
        assert!(map_event(&space, FlowState::Playing, &b).flap);
        assert!(map_event(&space, FlowState::GameOver, &b).replay);
        assert!(!map_event(&space, FlowState::Exit, &b).any());
    }

    #[test]
    fn test_flap_keys() {
        let b = buttons();
        for code in [KeyCode::Up, KeyCode::Enter, KeyCode::Char('w')] {
            assert!(map_event(&press(code), FlowState::Playing, &b).flap);
        }
        assert!(!map_event(&press(KeyCode::Char('x')), FlowState::Playing, &b).any());
    }

    #[test]
    fn test_quit_keys() {
        let b = buttons();
        assert!(map_event(&press(KeyCode::Esc), FlowState::Menu, &b).quit);
        assert!(map_event(&press(KeyCode::Char('q')), FlowState::GameOver, &b).quit);
        assert!(map_event(&press(KeyCode::Esc), FlowState::Playing, &b).quit);
        // 'q' is not a quit key mid-run.
        assert!(!map_event(&press(KeyCode::Char('q')), FlowState::Playing, &b).quit);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let b = buttons();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        for state in [FlowState::Menu, FlowState::Playing, FlowState::GameOver] {
            let triggers = map_event(&ctrl_c, state, &b);
            assert!(triggers.quit);
            assert!(!triggers.flap);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let b = buttons();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(!map_event(&release, FlowState::Playing, &b).any());
    }

    #[test]
    fn test_menu_click_on_start_only() {
        let b = buttons();
        assert!(map_event(&click(35, 15), FlowState::Menu, &b).start);
        assert!(!map_event(&click(5, 5), FlowState::Menu, &b).any());
    }

    #[test]
    fn test_game_over_clicks() {
        let b = buttons();
        let replay = map_event(&click(31, 13), FlowState::GameOver, &b);
        assert!(replay.replay && !replay.quit);
        let quit = map_event(&click(31, 17), FlowState::GameOver, &b);
        assert!(quit.quit && !quit.replay);
        assert!(!map_event(&click(0, 0), FlowState::GameOver, &b).any());
    }

    #[test]
    fn test_left_click_flaps_during_play() {
        let b = ScreenButtons::default();
        assert!(map_event(&click(0, 0), FlowState::Playing, &b).flap);
        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!map_event(&right, FlowState::Playing, &b).flap);
    }

    #[test]
    fn test_mouse_up_ignored() {
        let b = buttons();
        let up = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 35,
            row: 15,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!map_event(&up, FlowState::Menu, &b).any());
        assert!(!map_event(&up, FlowState::Playing, &b).any());
    }
}
