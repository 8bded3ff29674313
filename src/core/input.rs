//! Key parsing for legacy (xterm/VT) terminal input.
//!
//! Modifier parameters on CSI sequences (`\x1b[1;5A`) are accepted but dropped: the
//! runtime only distinguishes the bare key.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key `F1..=F12`.
    Function(u8),
    /// Control chord with a lowercase ASCII letter (`Ctrl+C` is `Ctrl('c')`).
    Ctrl(char),
}

/// Splits a raw input chunk into individual key sequences and printable runs.
///
/// Escape sequences are kept whole; consecutive printable characters are grouped into one
/// token so a fast typist's burst becomes a single text event.
pub fn split_sequences(data: &str) -> Vec<&str> {
    let bytes = data.as_bytes();
    let mut tokens = Vec::new();
    let mut idx = 0usize;
    let mut text_start: Option<usize> = None;

    while idx < bytes.len() {
        let Some(ch) = data[idx..].chars().next() else {
            break;
        };

        if !ch.is_control() {
            text_start.get_or_insert(idx);
            idx += ch.len_utf8();
            continue;
        }

        if let Some(start) = text_start.take() {
            tokens.push(&data[start..idx]);
        }

        let end = if bytes[idx] == 0x1b {
            escape_end(bytes, idx)
        } else {
            idx + ch.len_utf8()
        };
        tokens.push(&data[idx..end]);
        idx = end;
    }

    if let Some(start) = text_start {
        tokens.push(&data[start..]);
    }

    tokens
}

fn escape_end(bytes: &[u8], start: usize) -> usize {
    match bytes.get(start + 1) {
        Some(b'[') => {
            let mut idx = start + 2;
            while idx < bytes.len() {
                if (0x40..=0x7e).contains(&bytes[idx]) {
                    return idx + 1;
                }
                idx += 1;
            }
            bytes.len()
        }
        Some(b'O') if start + 2 < bytes.len() => start + 3,
        _ => start + 1,
    }
}

/// Parses one key sequence produced by [`split_sequences`].
pub fn parse_key(sequence: &str) -> Option<Key> {
    let key = match sequence {
        "\r" | "\n" => Key::Enter,
        "\t" => Key::Tab,
        "\x1b[Z" => Key::BackTab,
        "\x7f" | "\x08" => Key::Backspace,
        "\x1b" => Key::Escape,
        "\x1bOA" => Key::Up,
        "\x1bOB" => Key::Down,
        "\x1bOC" => Key::Right,
        "\x1bOD" => Key::Left,
        "\x1bOH" => Key::Home,
        "\x1bOF" => Key::End,
        "\x1bOP" => Key::Function(1),
        "\x1bOQ" => Key::Function(2),
        "\x1bOR" => Key::Function(3),
        "\x1bOS" => Key::Function(4),
        _ => return parse_csi(sequence).or_else(|| parse_control(sequence)),
    };
    Some(key)
}

fn parse_csi(sequence: &str) -> Option<Key> {
    let body = sequence.strip_prefix("\x1b[")?;
    let final_byte = body.chars().last()?;
    let params = &body[..body.len() - final_byte.len_utf8()];

    match final_byte {
        'A' => Some(Key::Up),
        'B' => Some(Key::Down),
        'C' => Some(Key::Right),
        'D' => Some(Key::Left),
        'H' => Some(Key::Home),
        'F' => Some(Key::End),
        'P' => Some(Key::Function(1)),
        'Q' => Some(Key::Function(2)),
        // The runtime never requests cursor position reports, so `CSI R` is always F3.
        'R' => Some(Key::Function(3)),
        'S' => Some(Key::Function(4)),
        '~' => {
            let code: u16 = params.split(';').next()?.parse().ok()?;
            match code {
                1 | 7 => Some(Key::Home),
                3 => Some(Key::Delete),
                4 | 8 => Some(Key::End),
                5 => Some(Key::PageUp),
                6 => Some(Key::PageDown),
                11..=15 => Some(Key::Function((code - 10) as u8)),
                17..=21 => Some(Key::Function((code - 11) as u8)),
                23 | 24 => Some(Key::Function((code - 12) as u8)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn parse_control(sequence: &str) -> Option<Key> {
    let mut chars = sequence.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let code = ch as u32;
    if (1..=26).contains(&code) {
        return char::from_u32(u32::from(b'a') + code - 1).map(Key::Ctrl);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{parse_key, split_sequences, Key};

    #[test]
    fn split_groups_text_and_isolates_escapes() {
        assert_eq!(
            split_sequences("ab\x1b[Ac\r"),
            vec!["ab", "\x1b[A", "c", "\r"]
        );
        assert_eq!(split_sequences("\x1bOP\x1b"), vec!["\x1bOP", "\x1b"]);
    }

    #[test]
    fn split_keeps_multibyte_text_together() {
        assert_eq!(split_sequences("héllo📧"), vec!["héllo📧"]);
    }

    #[test]
    fn parses_navigation_keys() {
        assert_eq!(parse_key("\x1b[A"), Some(Key::Up));
        assert_eq!(parse_key("\x1b[1;5B"), Some(Key::Down));
        assert_eq!(parse_key("\x1b[5~"), Some(Key::PageUp));
        assert_eq!(parse_key("\x1b[6~"), Some(Key::PageDown));
        assert_eq!(parse_key("\x1b[H"), Some(Key::Home));
        assert_eq!(parse_key("\x1b[4~"), Some(Key::End));
    }

    #[test]
    fn parses_function_keys_in_both_encodings() {
        assert_eq!(parse_key("\x1bOP"), Some(Key::Function(1)));
        assert_eq!(parse_key("\x1b[12~"), Some(Key::Function(2)));
        assert_eq!(parse_key("\x1b[14~"), Some(Key::Function(4)));
        assert_eq!(parse_key("\x1b[24~"), Some(Key::Function(12)));
    }

    #[test]
    fn parses_control_chords() {
        assert_eq!(parse_key("\x03"), Some(Key::Ctrl('c')));
        assert_eq!(parse_key("\x0c"), Some(Key::Ctrl('l')));
        assert_eq!(parse_key("\r"), Some(Key::Enter));
        assert_eq!(parse_key("\x7f"), Some(Key::Backspace));
    }

    #[test]
    fn unknown_sequences_are_none() {
        assert_eq!(parse_key("\x1b[99~"), None);
        assert_eq!(parse_key("\x1b[?1u"), None);
    }
}
