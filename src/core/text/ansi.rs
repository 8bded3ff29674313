//! ANSI escape recognition.
//!
//! Only the shapes this crate emits or forwards are recognized: CSI (SGR, cursor moves) and
//! string-terminated OSC (hyperlinks, clipboard).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiCodeKind {
    Csi,
    Osc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnsiCode {
    pub length: usize,
    pub kind: AnsiCodeKind,
}

/// Returns the escape sequence starting at byte `pos`, if any.
pub fn extract_ansi_code(input: &str, pos: usize) -> Option<AnsiCode> {
    let bytes = input.as_bytes();
    if pos + 1 >= bytes.len() || bytes[pos] != 0x1b {
        return None;
    }

    match bytes[pos + 1] {
        b'[' => extract_csi(bytes, pos),
        b']' => extract_osc(bytes, pos),
        _ => None,
    }
}

fn extract_csi(bytes: &[u8], pos: usize) -> Option<AnsiCode> {
    let mut idx = pos + 2;
    while idx < bytes.len() {
        if (0x40..=0x7e).contains(&bytes[idx]) {
            return Some(AnsiCode {
                length: idx + 1 - pos,
                kind: AnsiCodeKind::Csi,
            });
        }
        idx += 1;
    }
    None
}

fn extract_osc(bytes: &[u8], pos: usize) -> Option<AnsiCode> {
    let mut idx = pos + 2;
    while idx < bytes.len() {
        if bytes[idx] == 0x07 {
            return Some(AnsiCode {
                length: idx + 1 - pos,
                kind: AnsiCodeKind::Osc,
            });
        }
        if bytes[idx] == 0x1b && bytes.get(idx + 1) == Some(&b'\\') {
            return Some(AnsiCode {
                length: idx + 2 - pos,
                kind: AnsiCodeKind::Osc,
            });
        }
        idx += 1;
    }
    None
}

/// Removes every recognized escape sequence, keeping the printable text.
pub fn strip_ansi(input: &str) -> String {
    let mut clean = String::with_capacity(input.len());
    let mut idx = 0;
    while idx < input.len() {
        if let Some(code) = extract_ansi_code(input, idx) {
            idx += code.length;
            continue;
        }
        let Some(ch) = input[idx..].chars().next() else {
            break;
        };
        clean.push(ch);
        idx += ch.len_utf8();
    }
    clean
}
