//! Attribute element
//!
//!     Attributes qualify another annotation. Binary attributes are flags and carry no
//!     value (`A1	Negation E1`); multi-valued attributes carry one (`A2	Confidence E2 L1`).
//!     Older brat files use the `M` prefix ("modifier") for the same thing.
//!
//! Syntax
//!
//!     (A|M)<n> <tab> <type> <space> <target-id> (<space> <value>)?

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub id: String,
    pub attribute_type: String,
    pub target: String,
    /// `None` for flag attributes.
    pub value: Option<String>,
}

impl Attribute {
    pub fn new(
        id: impl Into<String>,
        attribute_type: impl Into<String>,
        target: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            attribute_type: attribute_type.into(),
            target: target.into(),
            value,
        }
    }

    pub fn is_flag(&self) -> bool {
        self.value.is_none()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} {}", self.id, self.attribute_type, self.target)?;
        if let Some(value) = &self.value {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_attribute_has_no_value() {
        let flag = Attribute::new("A1", "Negation", "E1", None);
        assert!(flag.is_flag());
        assert_eq!(flag.to_string(), "A1\tNegation E1");

        let valued = Attribute::new("A2", "Confidence", "E2", Some("L1".to_string()));
        assert!(!valued.is_flag());
        assert_eq!(valued.to_string(), "A2\tConfidence E2 L1");
    }
}
