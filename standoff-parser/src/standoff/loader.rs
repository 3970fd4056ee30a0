//! Document loading utilities
//!
//! This module provides `AnnotationLoader` - a utility for loading `.ann` sources from files
//! or strings and classifying every line of them, plus the free functions it is built on.
//!
//! # Example
//!
//! ```rust
//! use standoff_parser::standoff::loader::{AnnotationLoader, ErrorPolicy};
//!
//! // From file, stopping at the first malformed line
//! let records = AnnotationLoader::from_path("doc.ann").unwrap().parse().unwrap();
//!
//! // From string, collecting every malformed line
//! let report = AnnotationLoader::from_string("T1\tPerson 0 5\tJones\n")
//!     .parse_with(ErrorPolicy::CollectAll);
//! ```
//!
//! Records come back in line order. Lines with an unrecognized identifier prefix are
//! counted in [`ParseReport::skipped`] but produce no record and no error.

use crate::standoff::ast::AnnotationRecord;
use crate::standoff::error::LineError;
use crate::standoff::parsing::classify_line;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// What to do when a line fails to classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop at the first malformed line.
    #[default]
    FailFast,
    /// Classify every line, keeping all records and all errors.
    CollectAll,
}

/// Outcome of parsing a whole document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub records: Vec<AnnotationRecord>,
    pub errors: Vec<LineError>,
    /// Lines with an unrecognized identifier prefix.
    pub skipped: usize,
}

impl ParseReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Turn the report into a plain result, keeping only the first error.
    pub fn into_result(self) -> Result<Vec<AnnotationRecord>, LineError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.records),
        }
    }
}

/// Classify every line of `source`, under the given error policy.
///
/// Both `\n` and `\r\n` terminators are accepted; a final terminator does not produce an
/// extra empty line, but empty lines inside the document are malformed records. A leading
/// byte order mark is dropped.
pub fn parse_annotations_with(source: &str, policy: ErrorPolicy) -> ParseReport {
    let source = source.strip_prefix(BYTE_ORDER_MARK).unwrap_or(source);
    let mut report = ParseReport::default();
    for (index, line) in source.lines().enumerate() {
        match classify_line(line) {
            Ok(Some(record)) => report.records.push(record),
            Ok(None) => report.skipped += 1,
            Err(error) => {
                let error = LineError {
                    line_number: index + 1,
                    error,
                };
                tracing::debug!(%error, "malformed line");
                report.errors.push(error);
                if policy == ErrorPolicy::FailFast {
                    break;
                }
            }
        }
    }
    tracing::debug!(
        records = report.records.len(),
        errors = report.errors.len(),
        skipped = report.skipped,
        "parsed annotation document"
    );
    report
}

/// Classify every line of `source`, stopping at the first malformed one.
pub fn parse_annotations(source: &str) -> Result<Vec<AnnotationRecord>, LineError> {
    parse_annotations_with(source, ErrorPolicy::FailFast).into_result()
}

/// Error that can occur when loading documents
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] LineError),
}

/// Annotation document loader
///
/// `AnnotationLoader` owns the source text of one `.ann` document. It's used by the CLI and
/// by tests alike.
#[derive(Debug, Clone)]
pub struct AnnotationLoader {
    source: String,
}

impl AnnotationLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = source.len(), "loaded annotation file");
        Ok(AnnotationLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        AnnotationLoader {
            source: source.into(),
        }
    }

    /// Parse the source, stopping at the first malformed line
    pub fn parse(&self) -> Result<Vec<AnnotationRecord>, LoadError> {
        Ok(parse_annotations(&self.source)?)
    }

    /// Parse the source under an explicit error policy
    pub fn parse_with(&self, policy: ErrorPolicy) -> ParseReport {
        parse_annotations_with(&self.source, policy)
    }

    /// Get the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}
