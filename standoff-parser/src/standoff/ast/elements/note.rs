//! Note element
//!
//!     Free text attached to another annotation: `#1	AnnotatorNotes T1	checked twice`.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: String,
    pub note_type: String,
    pub text: String,
    pub target: String,
}

impl Note {
    pub fn new(
        id: impl Into<String>,
        note_type: impl Into<String>,
        text: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            note_type: note_type.into(),
            text: text.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{} {}\t{}",
            self.id, self.note_type, self.target, self.text
        )
    }
}
