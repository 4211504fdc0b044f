use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::sign::{Icon, Sign};

/// Five-row block art shown inside the ring.
pub fn icon_art(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::ArrowUp => &[
            "   ▲   ",
            "  ███  ",
            " █ █ █ ",
            "   █   ",
            "   █   ",
        ],
        Icon::ArrowDown => &[
            "   █   ",
            "   █   ",
            " █ █ █ ",
            "  ███  ",
            "   ▼   ",
        ],
        Icon::ArrowRight => &[
            "    █  ",
            "     █ ",
            "███████",
            "     █ ",
            "    █  ",
        ],
        Icon::ArrowLeft => &[
            "  █    ",
            " █     ",
            "███████",
            " █     ",
            "  █    ",
        ],
        Icon::Stop => &[
            "┏━━━━━┓",
            "┃█████┃",
            "┃█████┃",
            "┃█████┃",
            "┗━━━━━┛",
        ],
        Icon::Turn => &[
            " ╭───╮ ",
            " │   │ ",
            " │   ▼ ",
            " │     ",
            " ╰──── ",
        ],
        Icon::Jump => &[
            "  ▲ ▲  ",
            "   ●   ",
            "  ╱█╲  ",
            "  ╱ ╲  ",
            "═══════",
        ],
        Icon::Crouch => &[
            "       ",
            "   ●   ",
            "  ╱█╲  ",
            "  ╰─╯  ",
            "═══════",
        ],
        Icon::TurnX2 => &[
            " ╭───╮ ",
            " │   ▼ ",
            " │     ",
            " ╰──── ",
            "   x2  ",
        ],
        Icon::TurnX3 => &[
            " ╭───╮ ",
            " │   ▼ ",
            " │     ",
            " ╰──── ",
            "   x3  ",
        ],
    }
}

/// Single-cell symbol used in the sign list on the start screen.
pub fn icon_symbol(icon: Icon) -> &'static str {
    match icon {
        Icon::ArrowUp => "↑",
        Icon::ArrowDown => "↓",
        Icon::ArrowRight => "→",
        Icon::ArrowLeft => "←",
        Icon::Stop => "■",
        Icon::Turn => "↻",
        Icon::Jump => "⤒",
        Icon::Crouch => "⤓",
        Icon::TurnX2 => "②",
        Icon::TurnX3 => "③",
    }
}

pub fn art_size(icon: Icon) -> (u16, u16) {
    let art = icon_art(icon);
    let width = art.iter().map(|l| l.width()).max().unwrap_or(0);
    (width as u16, art.len() as u16)
}

fn display_key(token: &str) -> &str {
    match token {
        " " => "Space",
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        "ArrowLeft" => "←",
        "ArrowRight" => "→",
        other => other,
    }
}

/// "↑ w W" style hint for the keys bound to a sign.
pub fn key_hint(sign: &Sign) -> String {
    sign.accepted_keys
        .iter()
        .map(|k| display_key(k))
        .unique()
        .join(" ")
}
