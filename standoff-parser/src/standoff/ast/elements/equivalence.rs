//! Equivalence element
//!
//!     Declares a set of annotations interchangeable: `*	Equiv T1 T3 T5`. The identifier
//!     column is the literal `*` (equivalences are anonymous in brat), and the type is
//!     conventionally `Equiv` though nothing enforces it.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equivalence {
    pub id: String,
    pub relation_type: String,
    pub entities: Vec<String>,
}

impl Equivalence {
    pub fn new(id: impl Into<String>, relation_type: impl Into<String>, entities: Vec<String>) -> Self {
        Self {
            id: id.into(),
            relation_type: relation_type.into(),
            entities,
        }
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.id, self.relation_type)?;
        for entity in &self.entities {
            write!(f, " {}", entity)?;
        }
        Ok(())
    }
}
