//! Parsing of standoff lines
//!
//!     Parsing is split in two layers:
//!
//!         - [fields]: pure parsers for the sub-fields of a payload (offsets, argument lists,
//!           attribute values, normalization references).
//!         - [classifier]: takes one line, picks the record kind from the identifier prefix
//!           and builds the record with the field parsers.
//!
//!     Neither layer keeps state between lines. Whole documents are handled by the
//!     [loader](super::loader).

pub mod classifier;
pub mod fields;

pub use classifier::classify_line;
pub use fields::{
    parse_arguments, parse_attribute_value, parse_normalization, parse_offsets, AttributeFields,
    NormalizationFields,
};
