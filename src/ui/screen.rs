use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::LastRound;
use crate::session::{Feedback, SessionState};
use crate::sign::{Difficulty, Pool};
use crate::ui::icons::{art_size, icon_art, icon_symbol, key_hint};
use crate::ui::ring::{centered, ring_rect, ProgressRing};

const HORIZONTAL_MARGIN: u16 = 4;
const VERTICAL_MARGIN: u16 = 1;

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

fn accent() -> Style {
    bold().fg(Color::Cyan)
}

fn feedback_color(feedback: Option<Feedback>) -> Color {
    match feedback {
        Some(Feedback::Correct) => Color::Green,
        Some(Feedback::Incorrect) => Color::Red,
        None => Color::Cyan,
    }
}

/// Title, rules, level picker and the list of signs for the chosen tier.
pub struct StartScreen<'a> {
    pub selected: Difficulty,
    pub pool: &'a Pool,
    pub session_secs: u32,
    pub last_round: Option<LastRound>,
}

impl Widget for StartScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sign_rows = self.pool.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2),         // title
                Constraint::Length(3),         // rules
                Constraint::Length(2),         // level picker
                Constraint::Length(sign_rows), // sign list
                Constraint::Min(0),
                Constraint::Length(1), // last round
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled("REFLEX", accent()))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Paragraph::new(format!(
            "Press the key for the sign before its ring runs out. \
             You have {} seconds to score as much as you can.",
            self.session_secs
        ))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);

        let level = |difficulty: Difficulty, label: &'static str| {
            if difficulty == self.selected {
                Span::styled(
                    format!("[ {label} ]"),
                    Style::default()
                        .patch(bold())
                        .fg(Color::Black)
                        .bg(Color::Cyan),
                )
            } else {
                Span::styled(format!("  {label}  "), Style::default().fg(Color::Gray))
            }
        };
        Paragraph::new(Line::from(vec![
            level(Difficulty::Normal, "Level 1: Normal"),
            Span::raw("   "),
            level(Difficulty::Hard, "Level 2: Hard"),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        let rows: Vec<Line> = self
            .pool
            .signs()
            .iter()
            .map(|sign| {
                Line::from(vec![
                    Span::styled(format!("{} ", icon_symbol(sign.icon)), accent()),
                    Span::styled(format!("{:<16}", sign.label), bold()),
                    Span::styled(key_hint(sign), Style::default().fg(Color::Gray)),
                ])
            })
            .collect();
        let list_width = 36.min(chunks[3].width);
        Paragraph::new(rows).render(
            centered(list_width, chunks[3].height, chunks[3]),
            buf,
        );

        if let Some(last) = self.last_round {
            Paragraph::new(Span::styled(
                format!("last round ({}): {} points", last.difficulty, last.score),
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
        }

        Paragraph::new(Span::styled(
            "(enter) start / (←/→) level / (esc) quit",
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);
    }
}

/// Score, session time, the countdown ring with the sign inside, sign name.
pub struct GameScreen<'a> {
    pub session: &'a SessionState,
}

impl Widget for GameScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.session;
        let color = feedback_color(session.last_feedback);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2), // score / time
                Constraint::Min(7),    // ring
                Constraint::Length(2), // sign name
                Constraint::Length(1), // legend
            ])
            .split(area);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let dim = Style::default().fg(Color::Gray);
        Paragraph::new(vec![
            Line::from(Span::styled("Score", dim)),
            Line::from(Span::styled(session.score.to_string(), bold())),
        ])
        .render(header[0], buf);
        Paragraph::new(vec![
            Line::from(Span::styled("Time", dim)),
            Line::from(Span::styled(
                session.session_seconds_remaining.to_string(),
                bold(),
            )),
        ])
        .alignment(Alignment::Right)
        .render(header[1], buf);

        let ring_area = ring_rect(chunks[1]);
        ProgressRing {
            fraction: session.sign_fraction(),
            color,
            track: Color::DarkGray,
        }
        .render(ring_area, buf);

        let icon = session.current_sign.icon;
        let (w, h) = art_size(icon);
        let art: Vec<Line> = icon_art(icon)
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(color))))
            .collect();
        Paragraph::new(art).render(centered(w, h, ring_area), buf);

        Paragraph::new(Span::styled(session.current_sign.id.to_string(), accent()))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        Paragraph::new(Span::styled(
            "(esc) back to menu",
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
    }
}
