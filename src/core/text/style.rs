//! SGR styling helpers.
//!
//! Every helper closes only the attribute it opened, so styles nest without a full reset.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Blue,
    Cyan,
    Purple,
    Pink,
    Orange,
    Yellow,
    Red,
    White,
    Gray,
    DarkGray,
}

impl Color {
    fn fg_code(self) -> &'static str {
        match self {
            Self::Green => "\x1b[38;5;84m",
            Self::Blue => "\x1b[38;5;75m",
            Self::Cyan => "\x1b[38;5;51m",
            Self::Purple => "\x1b[38;5;141m",
            Self::Pink => "\x1b[38;5;212m",
            Self::Orange => "\x1b[38;5;215m",
            Self::Yellow => "\x1b[38;5;221m",
            Self::Red => "\x1b[38;5;203m",
            Self::White => "\x1b[97m",
            Self::Gray => "\x1b[38;5;250m",
            Self::DarkGray => "\x1b[38;5;243m",
        }
    }

    fn bg_code(self) -> &'static str {
        match self {
            Self::Green => "\x1b[48;5;22m",
            Self::Blue => "\x1b[48;5;24m",
            Self::Cyan => "\x1b[48;5;30m",
            Self::Purple => "\x1b[48;5;54m",
            Self::Pink => "\x1b[48;5;89m",
            Self::Orange => "\x1b[48;5;130m",
            Self::Yellow => "\x1b[48;5;136m",
            Self::Red => "\x1b[48;5;88m",
            Self::White => "\x1b[107m",
            Self::Gray => "\x1b[48;5;238m",
            Self::DarkGray => "\x1b[48;5;235m",
        }
    }
}

fn ansi_wrap(text: &str, prefix: &str, suffix: &str) -> String {
    format!("{prefix}{text}{suffix}")
}

pub fn fg(text: &str, color: Color) -> String {
    ansi_wrap(text, color.fg_code(), "\x1b[39m")
}

pub fn bg(text: &str, color: Color) -> String {
    ansi_wrap(text, color.bg_code(), "\x1b[49m")
}

pub fn bold(text: &str) -> String {
    ansi_wrap(text, "\x1b[1m", "\x1b[22m")
}

pub fn dim(text: &str) -> String {
    ansi_wrap(text, "\x1b[2m", "\x1b[22m")
}

pub fn italic(text: &str) -> String {
    ansi_wrap(text, "\x1b[3m", "\x1b[23m")
}

pub fn underline(text: &str) -> String {
    ansi_wrap(text, "\x1b[4m", "\x1b[24m")
}

pub fn inverse(text: &str) -> String {
    ansi_wrap(text, "\x1b[7m", "\x1b[27m")
}

#[cfg(test)]
mod tests {
    use super::{bold, fg, Color};
    use crate::core::text::ansi::strip_ansi;

    #[test]
    fn styles_nest_without_changing_visible_text() {
        let styled = bold(&fg("deploy", Color::Green));
        assert_eq!(strip_ansi(&styled), "deploy");
        assert!(styled.ends_with("\x1b[39m\x1b[22m"));
    }
}
