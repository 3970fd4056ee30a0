//! Record types for the standoff format
//!
//!     One module per record kind. Text-bound records (entities) point into the reference
//!     text; every other kind points at other records by identifier.
//!
//!     Text-bound:
//!         - Entities: a type over one or more spans, with the covered text. See [entity](entity).
//!
//!     Structural:
//!         - Events: a trigger plus role-labelled arguments. See [event](event).
//!         - Relations: a type plus role-labelled arguments. See [relation](relation).
//!         - Equivalences: a set of interchangeable identifiers. See [equivalence](equivalence).
//!
//!     Metadata:
//!         - Attributes: a typed flag or value on another record. See [attribute](attribute).
//!         - Normalizations: a link from a record to an external resource entry. See [normalization](normalization).
//!         - Notes: free text attached to another record. See [note](note).
//!
//!     [record](record) ties them together in the [AnnotationRecord] sum type.

pub mod attribute;
pub mod entity;
pub mod equivalence;
pub mod event;
pub mod normalization;
pub mod note;
pub mod record;
pub mod relation;

pub use attribute::Attribute;
pub use entity::Entity;
pub use equivalence::Equivalence;
pub use event::{Argument, Event, Trigger};
pub use normalization::Normalization;
pub use note::Note;
pub use record::{AnnotationRecord, RecordKind};
pub use relation::Relation;
