//! # standoff
//!
//! A parser for the brat standoff annotation format (`.ann` files).
//!
//! Each line of an `.ann` file is an independent record. The leading identifier
//! character selects the record kind:
//!
//!     T1	Person 0 5	Jones
//!     E1	MERGE-ORG:T2 Org1:T1 Org2:T3
//!     R1	Origin Arg1:T3 Arg2:T4
//!     *	Equiv T1 T3 T5
//!     A1	Negation E1
//!     N1	Reference T1 Wikipedia:534366	Barack Obama
//!     #1	AnnotatorNotes T1	this is a note
//!
//! File Layout
//!
//! src/standoff
//!   ├── ast        The typed annotation model (one struct per record kind)
//!   ├── parsing    Field parsers and the per-line record classifier
//!   ├── loader     Reads whole documents and accumulates records in line order
//!   └── error      Error taxonomy shared by the above
//!
//! The classifier is stateless: a caller may classify lines in any order or in
//! parallel, and the loader is only one possible driver.

pub mod standoff;
