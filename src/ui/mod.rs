//! Terminal rendering for every screen of the game.

pub mod game_common;
pub mod game_over_scene;
pub mod menu_scene;
pub mod play_scene;

use crate::flow::{FlowController, FlowState};
use ratatui::{layout::Rect, Frame};

/// Clickable regions of the current screen, in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenButtons {
    pub start: Option<Rect>,
    pub play_again: Option<Rect>,
    pub quit: Option<Rect>,
}

/// Button placement for `state` on a terminal of size `area`. Drawing and
/// click handling both go through here so they always agree.
pub fn screen_buttons(state: FlowState, area: Rect) -> ScreenButtons {
    match state {
        FlowState::Menu => ScreenButtons {
            start: Some(menu_scene::start_button(area)),
            ..Default::default()
        },
        FlowState::GameOver => {
            let (play_again, quit) = game_over_scene::game_over_buttons(area);
            ScreenButtons {
                play_again: Some(play_again),
                quit: Some(quit),
                ..Default::default()
            }
        }
        FlowState::Playing | FlowState::Exit => ScreenButtons::default(),
    }
}

/// Draw the current screen.
pub fn draw(frame: &mut Frame, flow: &FlowController, show_backdrop: bool) {
    let area = frame.size();
    match flow.state() {
        FlowState::Menu => menu_scene::render_menu(frame, area, flow.best_score()),
        FlowState::Playing => {
            if let Some(session) = flow.session() {
                play_scene::render_play(frame, area, session, flow.best_score(), show_backdrop);
            }
        }
        FlowState::GameOver => game_over_scene::render_game_over(
            frame,
            area,
            flow.last_score().unwrap_or(0),
            flow.best_score(),
            flow.is_new_best(),
        ),
        FlowState::Exit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_per_screen() {
        let area = Rect::new(0, 0, 80, 24);
        let menu = screen_buttons(FlowState::Menu, area);
        assert!(menu.start.is_some());
        assert!(menu.play_again.is_none() && menu.quit.is_none());

        let over = screen_buttons(FlowState::GameOver, area);
        assert!(over.start.is_none());
        assert!(over.play_again.is_some() && over.quit.is_some());

        assert_eq!(
            screen_buttons(FlowState::Playing, area),
            ScreenButtons::default()
        );
    }
}
