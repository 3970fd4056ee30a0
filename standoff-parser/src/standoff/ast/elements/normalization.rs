//! Normalization element
//!
//!     Links an annotation to an entry of an external resource, e.g.
//!     `N1	Reference T1 Wikipedia:534366	Barack Obama`: type `Reference`, target `T1`,
//!     resource `Wikipedia`, entry `534366`, and the normalized text.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalization {
    pub id: String,
    pub norm_type: String,
    pub target: String,
    pub resource: String,
    pub entry: String,
    pub text: String,
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{} {} {}:{}\t{}",
            self.id, self.norm_type, self.target, self.resource, self.entry, self.text
        )
    }
}
