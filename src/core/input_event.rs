//! Structured input events produced by the runtime.

use crate::core::input::{parse_key, split_sequences, Key};

/// Input event delivered to the root view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// Printable text typed by the user.
    Text(String),
    /// Bracketed paste payload (markers removed).
    Paste(String),
    Resize {
        columns: u16,
        rows: u16,
    },
    /// A sequence the parser does not understand.
    UnknownRaw(String),
}

const PASTE_START: &str = "\x1b[200~";
const PASTE_END: &str = "\x1b[201~";

pub fn parse_input_events(data: &str) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mut remaining = data;

    loop {
        let Some(start) = remaining.find(PASTE_START) else {
            events.extend(parse_non_paste(remaining));
            break;
        };

        events.extend(parse_non_paste(&remaining[..start]));
        let after_start = &remaining[start + PASTE_START.len()..];
        match after_start.find(PASTE_END) {
            Some(end) => {
                events.push(InputEvent::Paste(after_start[..end].to_string()));
                remaining = &after_start[end + PASTE_END.len()..];
            }
            None => {
                events.push(InputEvent::Paste(after_start.to_string()));
                break;
            }
        }
    }

    events
}

fn parse_non_paste(data: &str) -> Vec<InputEvent> {
    split_sequences(data)
        .into_iter()
        .map(|sequence| {
            if let Some(key) = parse_key(sequence) {
                return InputEvent::Key(key);
            }
            if sequence.chars().all(|ch| !ch.is_control()) {
                return InputEvent::Text(sequence.to_string());
            }
            InputEvent::UnknownRaw(sequence.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_input_events, InputEvent};
    use crate::core::input::Key;

    #[test]
    fn typed_command_then_enter() {
        assert_eq!(
            parse_input_events("help\r"),
            vec![InputEvent::Text("help".to_string()), InputEvent::Key(Key::Enter)]
        );
    }

    #[test]
    fn bracketed_paste_is_unwrapped() {
        let events = parse_input_events("x\x1b[200~contact --email\r\x1b[201~\x1b[B");
        assert_eq!(
            events,
            vec![
                InputEvent::Text("x".to_string()),
                InputEvent::Paste("contact --email\r".to_string()),
                InputEvent::Key(Key::Down),
            ]
        );
    }

    #[test]
    fn unterminated_paste_takes_the_rest() {
        assert_eq!(
            parse_input_events("\x1b[200~abc"),
            vec![InputEvent::Paste("abc".to_string())]
        );
    }

    #[test]
    fn unknown_csi_is_reported_raw() {
        assert_eq!(
            parse_input_events("\x1b[?1u"),
            vec![InputEvent::UnknownRaw("\x1b[?1u".to_string())]
        );
    }
}
