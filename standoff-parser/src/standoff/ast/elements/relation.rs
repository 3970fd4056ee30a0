//! Relation element
//!
//!     A typed, binary (in practice) relation between two annotations, e.g.
//!     `R1	Origin Arg1:T3 Arg2:T4`. The argument list keeps exactly the pairs written on the
//!     line, in order.

use super::event::Argument;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
    pub id: String,
    pub relation_type: String,
    pub arguments: Vec<Argument>,
}

impl Relation {
    pub fn new(
        id: impl Into<String>,
        relation_type: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Self {
        Self {
            id: id.into(),
            relation_type: relation_type.into(),
            arguments,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.id, self.relation_type)?;
        for argument in &self.arguments {
            write!(f, " {}", argument)?;
        }
        Ok(())
    }
}
