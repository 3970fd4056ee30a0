//! The annotation record sum type
//!
//!     [AnnotationRecord] is what the classifier produces for each recognized line. Each
//!     variant wraps the struct for its kind; the only thing they share is an identifier.
//!
//!     [RecordKind] is the dispatch table: the first character of an identifier picks the
//!     kind, and a character outside the table means the line is not an annotation we know
//!     about (and is skipped, so that files written by newer tools still load).

use super::{Attribute, Entity, Equivalence, Event, Normalization, Note, Relation};
use serde::Serialize;
use std::fmt;

/// The kind of record, as selected by the identifier prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Entity,
    Event,
    Relation,
    Equivalence,
    Attribute,
    Normalization,
    Note,
}

impl RecordKind {
    pub const ALL: [RecordKind; 7] = [
        RecordKind::Entity,
        RecordKind::Event,
        RecordKind::Relation,
        RecordKind::Equivalence,
        RecordKind::Attribute,
        RecordKind::Normalization,
        RecordKind::Note,
    ];

    /// Map the first character of an identifier to a record kind.
    ///
    /// `A` and `M` both denote attributes (`M` is the legacy "modifier" prefix).
    pub fn from_prefix(prefix: char) -> Option<RecordKind> {
        match prefix {
            'T' => Some(RecordKind::Entity),
            'E' => Some(RecordKind::Event),
            'R' => Some(RecordKind::Relation),
            '*' => Some(RecordKind::Equivalence),
            'A' | 'M' => Some(RecordKind::Attribute),
            'N' => Some(RecordKind::Normalization),
            '#' => Some(RecordKind::Note),
            _ => None,
        }
    }

    /// Kind of the record an identifier names, if any.
    pub fn from_id(id: &str) -> Option<RecordKind> {
        id.chars().next().and_then(RecordKind::from_prefix)
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::Entity => "entity",
            RecordKind::Event => "event",
            RecordKind::Relation => "relation",
            RecordKind::Equivalence => "equivalence",
            RecordKind::Attribute => "attribute",
            RecordKind::Normalization => "normalization",
            RecordKind::Note => "note",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One parsed line of an annotation file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationRecord {
    Entity(Entity),
    Event(Event),
    Relation(Relation),
    Equivalence(Equivalence),
    Attribute(Attribute),
    Normalization(Normalization),
    Note(Note),
}

impl AnnotationRecord {
    pub fn id(&self) -> &str {
        match self {
            AnnotationRecord::Entity(e) => &e.id,
            AnnotationRecord::Event(e) => &e.id,
            AnnotationRecord::Relation(r) => &r.id,
            AnnotationRecord::Equivalence(e) => &e.id,
            AnnotationRecord::Attribute(a) => &a.id,
            AnnotationRecord::Normalization(n) => &n.id,
            AnnotationRecord::Note(n) => &n.id,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            AnnotationRecord::Entity(_) => RecordKind::Entity,
            AnnotationRecord::Event(_) => RecordKind::Event,
            AnnotationRecord::Relation(_) => RecordKind::Relation,
            AnnotationRecord::Equivalence(_) => RecordKind::Equivalence,
            AnnotationRecord::Attribute(_) => RecordKind::Attribute,
            AnnotationRecord::Normalization(_) => RecordKind::Normalization,
            AnnotationRecord::Note(_) => RecordKind::Note,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            AnnotationRecord::Entity(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            AnnotationRecord::Event(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            AnnotationRecord::Relation(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_equivalence(&self) -> Option<&Equivalence> {
        match self {
            AnnotationRecord::Equivalence(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            AnnotationRecord::Attribute(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_normalization(&self) -> Option<&Normalization> {
        match self {
            AnnotationRecord::Normalization(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_note(&self) -> Option<&Note> {
        match self {
            AnnotationRecord::Note(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for AnnotationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationRecord::Entity(e) => fmt::Display::fmt(e, f),
            AnnotationRecord::Event(e) => fmt::Display::fmt(e, f),
            AnnotationRecord::Relation(r) => fmt::Display::fmt(r, f),
            AnnotationRecord::Equivalence(e) => fmt::Display::fmt(e, f),
            AnnotationRecord::Attribute(a) => fmt::Display::fmt(a, f),
            AnnotationRecord::Normalization(n) => fmt::Display::fmt(n, f),
            AnnotationRecord::Note(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl From<Entity> for AnnotationRecord {
    fn from(value: Entity) -> Self {
        AnnotationRecord::Entity(value)
    }
}

impl From<Event> for AnnotationRecord {
    fn from(value: Event) -> Self {
        AnnotationRecord::Event(value)
    }
}

impl From<Relation> for AnnotationRecord {
    fn from(value: Relation) -> Self {
        AnnotationRecord::Relation(value)
    }
}

impl From<Equivalence> for AnnotationRecord {
    fn from(value: Equivalence) -> Self {
        AnnotationRecord::Equivalence(value)
    }
}

impl From<Attribute> for AnnotationRecord {
    fn from(value: Attribute) -> Self {
        AnnotationRecord::Attribute(value)
    }
}

impl From<Normalization> for AnnotationRecord {
    fn from(value: Normalization) -> Self {
        AnnotationRecord::Normalization(value)
    }
}

impl From<Note> for AnnotationRecord {
    fn from(value: Note) -> Self {
        AnnotationRecord::Note(value)
    }
}
