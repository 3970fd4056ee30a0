//! Event element
//!
//!     An event ties a trigger (the entity whose text evokes the event) to a list of
//!     role-labelled participants.
//!
//!     Example: `E1	MERGE-ORG:T2 Org1:T1 Org2:T3`
//!         event id: E1
//!         trigger type: MERGE-ORG
//!         trigger id: T2 (a text span defined elsewhere in the file)
//!         arguments: (T1, Org1), (T3, Org2)
//!
//! Syntax
//!
//!     E<n> <tab> <type> ":" <trigger-id> (<space> <role> ":" <id>)*
//!
//!     Events without arguments exist, sometimes followed by a stray trailing space.

use serde::Serialize;
use std::fmt;

/// The trigger of an event: the annotation evoking it, and the event type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Trigger {
    pub id: String,
    pub trigger_type: String,
}

impl Trigger {
    pub fn new(id: impl Into<String>, trigger_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            trigger_type: trigger_type.into(),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.trigger_type, self.id)
    }
}

/// A role-labelled reference to a participant, used by events and relations
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Argument {
    pub id: String,
    pub role: String,
}

impl Argument {
    pub fn new(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: String,
    pub trigger: Trigger,
    pub arguments: Vec<Argument>,
}

impl Event {
    pub fn new(id: impl Into<String>, trigger: Trigger, arguments: Vec<Argument>) -> Self {
        Self {
            id: id.into(),
            trigger,
            arguments,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.id, self.trigger)?;
        for argument in &self.arguments {
            write!(f, " {}", argument)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let event = Event::new(
            "E1",
            Trigger::new("T2", "MERGE-ORG"),
            vec![Argument::new("T1", "Org1"), Argument::new("T3", "Org2")],
        );
        assert_eq!(event.to_string(), "E1\tMERGE-ORG:T2 Org1:T1 Org2:T3");
    }

    #[test]
    fn test_event_without_arguments_has_no_trailing_space() {
        let event = Event::new("E15", Trigger::new("T40", "Process"), Vec::new());
        assert_eq!(event.to_string(), "E15\tProcess:T40");
    }
}
