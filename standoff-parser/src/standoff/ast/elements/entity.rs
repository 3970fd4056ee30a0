//! Entity element
//!
//!     An entity (a "text-bound annotation") assigns a type such as Person or Organization to
//!     a span of the reference text. Since brat v1.3 the span may be discontinuous: several
//!     `start end` pairs separated by `;`, whose union is the annotated text.
//!
//! Syntax
//!
//!     T<n> <tab> <type> <space> <start> <space> <end> (";" <start> <space> <end>)* <tab> <text>
//!
//!     The text column is kept as written. It is not recomputed from the offsets, which makes
//!     it usable to validate the offsets against the reference text later on.

use super::super::span::Span;
use serde::Serialize;
use std::fmt;

/// A typed, possibly discontinuous, text span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub id: String,
    pub entity_type: String,
    /// Non-empty, in file order.
    pub spans: Vec<Span>,
    pub text: String,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        entity_type: impl Into<String>,
        spans: Vec<Span>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            spans,
            text: text.into(),
        }
    }

    /// True when the entity covers more than one disjoint range.
    pub fn is_discontinuous(&self) -> bool {
        self.spans.len() > 1
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} ", self.id, self.entity_type)?;
        for (i, span) in self.spans.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}", span)?;
        }
        write!(f, "\t{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discontinuous_entity_renders_semicolons() {
        let entity = Entity::new(
            "T3",
            "Organization",
            vec![Span::new(0, 5).unwrap(), Span::new(16, 23).unwrap()],
            "North Company",
        );
        assert!(entity.is_discontinuous());
        assert_eq!(
            entity.to_string(),
            "T3\tOrganization 0 5;16 23\tNorth Company"
        );
    }
}
