//! Annotation model for the standoff format
//!
//!     This module holds the typed representation of an `.ann` file. There is no tree here:
//!     an annotation file is a flat, ordered sequence of records, and every record is built
//!     from exactly one line.
//!
//! Records and Identity
//!
//!     Every record carries the identifier from its first column, verbatim. The identifier is
//!     opaque: it is never checked against other records, so references between records
//!     (an event argument naming an entity, an attribute naming an event) are plain strings
//!     left for downstream resolution.
//!
//!     The seven record kinds are variants of [AnnotationRecord](elements::AnnotationRecord).
//!     They share nothing but identity: see [RecordKind](elements::RecordKind) for the
//!     prefix table that maps an identifier to a kind.
//!
//! Offsets
//!
//!     Text-bound annotations point into an external reference text through character
//!     offsets. A [Span](span::Span) is one contiguous range; an entity with more than one
//!     span is discontinuous, and its text is the union of those ranges.
//!
//! Rendering
//!
//!     Every record implements `Display` and renders to its canonical `.ann` line, so that
//!     parsing a rendered record gives the record back.

pub mod elements;
pub mod span;

pub use elements::{
    AnnotationRecord, Argument, Attribute, Entity, Equivalence, Event, Normalization, Note,
    RecordKind, Relation, Trigger,
};
pub use span::Span;
