use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Map a terminal key event to the token the sign table uses.
///
/// Letters keep their case ("w" vs "W"); arrows become "ArrowUp" and friends.
/// Releases and keys with no token map to `None`.
pub fn key_token(key: &KeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let token = match key.code {
        KeyCode::Char(c) => return Some(c.to_string()),
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Backspace => "Backspace",
        KeyCode::Tab => "Tab",
        _ => return None,
    };
    Some(token.to_string())
}
