use std::fmt;

/// Which textual input failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A header target line, `<platform> <option>*`.
    Target,
    /// A port or port range, `53` or `1024-65535`.
    PortRange,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Target => f.write_str("target line"),
            InputKind::PortRange => f.write_str("port range"),
        }
    }
}

/// A target line or port range that could not be parsed.
#[derive(Debug)]
pub struct ParseError {
    kind: InputKind,
    message: String,
}

impl ParseError {
    pub(crate) fn new(kind: InputKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> InputKind {
        self.kind
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error: invalid {}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}
