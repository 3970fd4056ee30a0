//! Error types for standoff parsing
//!
//! Errors nest from the inside out:
//!
//! - [`FieldError`] - a field parser rejected one sub-field of a line
//! - [`Violation`] - the grammar rule a line broke (column layout or a field)
//! - [`RecordError`] - a line could not be classified; carries the identifier and raw line
//! - [`LineError`] - a [`RecordError`] located at a 1-based line number of a document

use thiserror::Error;

/// Errors raised by the field parsers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// An offset group is not a `start end` pair of non-negative integers with `start <= end`
    #[error("malformed offsets `{input}`: {reason}")]
    MalformedOffsets { input: String, reason: String },

    /// An argument token is not of the form `role:id`
    #[error("malformed argument `{token}`: expected `role:id`")]
    MalformedArgument { token: String },

    /// An attribute payload does not have 2 or 3 tokens
    #[error("malformed attribute `{input}`: expected `type target [value]`, found {found} tokens")]
    MalformedAttribute { input: String, found: usize },

    /// A normalization reference is not `type target resource:entry`
    #[error("malformed normalization `{input}`: {reason}")]
    MalformedNormalization { input: String, reason: String },
}

impl FieldError {
    pub(crate) fn offsets(input: &str, reason: impl Into<String>) -> Self {
        FieldError::MalformedOffsets {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn normalization(input: &str, reason: impl Into<String>) -> Self {
        FieldError::MalformedNormalization {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// The grammar rule a line violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("expected 2 or 3 tab-separated columns, found {0}")]
    ColumnCount(usize),

    /// Column 1 lacks the space separating the type from the rest of the payload
    #[error("expected `<type> <{0}>` in the second column")]
    MissingPayload(&'static str),

    #[error("malformed trigger `{0}`: expected `type:id`")]
    MalformedTrigger(String),

    /// A record kind that needs the third column was written with two
    #[error("missing text column")]
    MissingText,

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// A line that could not be turned into a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("malformed record `{id}`: {violation}")]
    MalformedRecord {
        id: String,
        raw: String,
        #[source]
        violation: Violation,
    },
}

impl RecordError {
    pub fn id(&self) -> &str {
        match self {
            RecordError::MalformedRecord { id, .. } => id,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            RecordError::MalformedRecord { raw, .. } => raw,
        }
    }

    pub fn violation(&self) -> &Violation {
        match self {
            RecordError::MalformedRecord { violation, .. } => violation,
        }
    }
}

/// A [`RecordError`] located in a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_number}: {error}")]
pub struct LineError {
    /// 1-based
    pub line_number: usize,
    #[source]
    pub error: RecordError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_message_names_identifier_and_rule() {
        let error = RecordError::MalformedRecord {
            id: "T1".to_string(),
            raw: "T1\tPerson 0\tJones".to_string(),
            violation: Violation::Field(FieldError::offsets("0", "expected `start end`")),
        };
        assert_eq!(
            error.to_string(),
            "malformed record `T1`: malformed offsets `0`: expected `start end`"
        );
        assert_eq!(error.raw(), "T1\tPerson 0\tJones");
    }

    #[test]
    fn test_line_error_prefixes_line_number() {
        let error = LineError {
            line_number: 3,
            error: RecordError::MalformedRecord {
                id: "X".to_string(),
                raw: "X".to_string(),
                violation: Violation::ColumnCount(1),
            },
        };
        assert_eq!(
            error.to_string(),
            "line 3: malformed record `X`: expected 2 or 3 tab-separated columns, found 1"
        );
    }
}
