pub mod icons;
pub mod ring;
pub mod screen;

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::app::{App, AppState};
use crate::ui::screen::{GameScreen, StartScreen};

impl<R: Rng> Widget for &App<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match (self.state, self.round.session()) {
            (AppState::Playing, Some(session)) => GameScreen { session }.render(area, buf),
            _ => StartScreen {
                selected: self.selected,
                pool: self.round.catalog().pool(self.selected),
                session_secs: self.round.config().session_secs,
                last_round: self.last_round,
            }
            .render(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentCue;
    use crate::round::RoundController;
    use crate::session::SessionConfig;
    use crate::sign::{Catalog, Difficulty};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::{Duration, Instant};

    fn create_test_app() -> App {
        let round =
            RoundController::with_seed(Catalog::standard().unwrap(), SessionConfig::default(), 5);
        App::new(
            round,
            Difficulty::Normal,
            Box::new(SilentCue),
            Duration::from_millis(200),
            Instant::now(),
        )
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn start_screen_lists_normal_signs() {
        let app = create_test_app();
        let content = render(&app, 80, 24);

        assert!(content.contains("REFLEX"));
        assert!(content.contains("Level 1: Normal"));
        assert!(content.contains("Forward"));
        assert!(content.contains("Brake"));
        assert!(!content.contains("Jump"));
    }

    #[test]
    fn start_screen_lists_hard_extras_when_selected() {
        let mut app = create_test_app();
        app.selected = Difficulty::Hard;
        let content = render(&app, 80, 24);

        assert!(content.contains("Jump"));
        assert!(content.contains("Turn x3"));
    }

    #[test]
    fn game_screen_shows_score_time_and_sign() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.start_round(now);
        let name = app.round.session().unwrap().current_sign.id.to_string();

        let content = render(&app, 80, 24);

        assert!(content.contains("Score"));
        assert!(content.contains("Time"));
        assert!(content.contains("60"));
        assert!(content.contains(&name));
    }

    #[test]
    fn game_screen_updates_after_a_correct_key() {
        let mut app = create_test_app();
        let now = Instant::now();
        app.start_round(now);
        let before = app.round.session().unwrap().current_sign.id;
        // every Normal sign has a letter as its second binding
        let own = app.round.session().unwrap().current_sign.accepted_keys[1];
        let c = own.chars().next().unwrap();

        app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);

        let session = app.round.session().unwrap();
        assert_eq!(session.score, 1);
        assert_ne!(session.current_sign.id, before);
        let content = render(&app, 80, 24);
        assert!(content.contains(&session.current_sign.id.to_string()));
    }

    #[test]
    fn renders_in_a_tiny_terminal() {
        let mut app = create_test_app();
        render(&app, 10, 5);
        app.start_round(Instant::now());
        render(&app, 10, 5);
    }
}
