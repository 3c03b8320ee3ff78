use std::fmt;

use thiserror::Error;

/// The notation a piece of text was expected to be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Decimal,
    Hexadecimal,
    Binary,
    /// `.` groups thousands, `,` separates the fraction.
    Locale,
}

impl NumberKind {
    pub fn radix(self) -> u32 {
        match self {
            NumberKind::Decimal | NumberKind::Locale => 10,
            NumberKind::Hexadecimal => 16,
            NumberKind::Binary => 2,
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberKind::Decimal => "decimal",
            NumberKind::Hexadecimal => "hexadecimal",
            NumberKind::Binary => "binary",
            NumberKind::Locale => "locale formatted",
        };
        f.write_str(name)
    }
}

/// Raised when text cannot be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected a {kind} number but the input is empty")]
    Empty { kind: NumberKind },

    #[error("'{input}' is not a valid {kind} number")]
    NotNumeric { input: String, kind: NumberKind },
}

impl ParseError {
    pub fn not_numeric(input: impl Into<String>, kind: NumberKind) -> Self {
        ParseError::NotNumeric {
            input: input.into(),
            kind,
        }
    }

    pub fn kind(&self) -> NumberKind {
        match self {
            ParseError::Empty { kind } | ParseError::NotNumeric { kind, .. } => *kind,
        }
    }
}
