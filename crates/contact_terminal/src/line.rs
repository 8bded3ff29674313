use std::fmt;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    System,
    Prompt,
    Input,
    Output,
    Success,
    Error,
}

/// Unique identity of a line in one session's log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Text a handler produces, before the session gives it an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineContent {
    pub kind: LineKind,
    pub text: String,
}

impl LineContent {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(LineKind::System, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }
}

/// A line in the display log.
///
/// `text` always holds the full line; while `complete` is false only a prefix of it has been
/// revealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub id: LineId,
    pub kind: LineKind,
    pub text: String,
    pub complete: bool,
}

impl OutputLine {
    pub(crate) fn revealed(content: LineContent) -> Self {
        Self {
            id: LineId::new(),
            kind: content.kind,
            text: content.text,
            complete: true,
        }
    }

    pub(crate) fn pending(content: LineContent) -> Self {
        Self {
            complete: false,
            ..Self::revealed(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LineContent, LineKind, OutputLine};

    #[test]
    fn kinds_serialize_lowercase() {
        let line = OutputLine::revealed(LineContent::success("ok"));
        let json = serde_json::to_value(&line).expect("serialize");
        assert_eq!(json["kind"], "success");
        assert_eq!(json["complete"], true);
        assert!(json["id"].as_str().is_some());
    }

    #[test]
    fn ids_are_unique() {
        let a = OutputLine::pending(LineContent::new(LineKind::Output, "a"));
        let b = OutputLine::pending(LineContent::new(LineKind::Output, "a"));
        assert_ne!(a.id, b.id);
        assert!(!a.complete);
    }
}
