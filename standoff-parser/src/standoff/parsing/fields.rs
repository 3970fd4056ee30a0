//! Field Parsers
//!
//! Parse the payload sub-fields of a single record. Each parser takes the substring it is
//! responsible for and either returns structured values or a [`FieldError`] naming the rule
//! that was broken. None of them look at the identifier or at other lines.

use crate::standoff::ast::{Argument, Span};
use crate::standoff::error::FieldError;

/// Separates the ranges of a discontinuous span.
const DISCONTINUITY_SEPARATOR: char = ';';
/// Separates a role from an identifier, and a resource from an entry.
const PAIR_SEPARATOR: char = ':';

/// Parses the offsets of a text-bound annotation.
///
/// example (continuous): "14 27" -> [Span(14, 27)]
/// example (discontinuous): "0 5;16 23" -> [Span(0, 5), Span(16, 23)]
pub fn parse_offsets(input: &str) -> Result<Vec<Span>, FieldError> {
    if !input.contains(DISCONTINUITY_SEPARATOR) {
        return parse_span(input, input).map(|span| vec![span]);
    }
    input
        .split(DISCONTINUITY_SEPARATOR)
        .map(|group| parse_span(group, input))
        .collect()
}

/// Parse one `start end` group. `input` is the whole offsets field, for error reporting.
fn parse_span(group: &str, input: &str) -> Result<Span, FieldError> {
    let mut tokens = group.split(' ');
    let (start, end) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(start), Some(end), None) => (start, end),
        _ => {
            return Err(FieldError::offsets(
                input,
                format!("`{}` is not a `start end` pair", group),
            ))
        }
    };
    let start = parse_offset(start, input)?;
    let end = parse_offset(end, input)?;
    Span::new(start, end).ok_or_else(|| {
        FieldError::offsets(input, format!("start {} is after end {}", start, end))
    })
}

fn parse_offset(token: &str, input: &str) -> Result<usize, FieldError> {
    // `usize::from_str` accepts a leading `+`
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::offsets(
            input,
            format!("`{}` is not a non-negative integer", token),
        ));
    }
    token
        .parse()
        .map_err(|_| FieldError::offsets(input, format!("`{}` is out of range", token)))
}

/// Parses a list of event/relation arguments, e.g. "Org1:T1 Org2:T3".
///
/// Events may have no arguments at all, sometimes with a trailing space left behind, so
/// empty and whitespace-only input gives an empty list.
pub fn parse_arguments(input: &str) -> Result<Vec<Argument>, FieldError> {
    input
        .split_whitespace()
        .map(|token| {
            let (role, id) = split_pair(token).ok_or_else(|| FieldError::MalformedArgument {
                token: token.to_string(),
            })?;
            Ok(Argument::new(id, role))
        })
        .collect()
}

/// Split `left:right` on its only colon. Both sides must be non-empty.
fn split_pair(token: &str) -> Option<(&str, &str)> {
    let (left, right) = token.split_once(PAIR_SEPARATOR)?;
    if left.is_empty() || right.is_empty() || right.contains(PAIR_SEPARATOR) {
        return None;
    }
    Some((left, right))
}

/// Split on single spaces. Returns `None` if any token is empty (doubled, leading or
/// trailing spaces), since the fixed-arity payloads give those no meaning.
fn split_tokens(input: &str) -> Option<Vec<&str>> {
    let tokens: Vec<&str> = input.split(' ').collect();
    if tokens.iter().any(|token| token.is_empty()) {
        return None;
    }
    Some(tokens)
}

/// The payload of an attribute line, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeFields<'a> {
    pub attribute_type: &'a str,
    pub target: &'a str,
    pub value: Option<&'a str>,
}

/// Parses the payload of an attribute: "Negation E1" or "Confidence E2 L1".
pub fn parse_attribute_value(input: &str) -> Result<AttributeFields<'_>, FieldError> {
    let malformed = |found| FieldError::MalformedAttribute {
        input: input.to_string(),
        found,
    };
    let tokens = split_tokens(input).ok_or_else(|| malformed(input.split(' ').count()))?;
    match *tokens.as_slice() {
        [attribute_type, target] => Ok(AttributeFields {
            attribute_type,
            target,
            value: None,
        }),
        [attribute_type, target, value] => Ok(AttributeFields {
            attribute_type,
            target,
            value: Some(value),
        }),
        _ => Err(malformed(tokens.len())),
    }
}

/// The payload of a normalization line, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationFields<'a> {
    pub norm_type: &'a str,
    pub target: &'a str,
    pub resource: &'a str,
    pub entry: &'a str,
    pub text: &'a str,
}

/// Parses a reference linking an annotation to an external resource, e.g.
/// "Reference T1 Wikipedia:534366". The text is kept verbatim.
pub fn parse_normalization<'a>(
    reference: &'a str,
    text: &'a str,
) -> Result<NormalizationFields<'a>, FieldError> {
    let tokens = split_tokens(reference).ok_or_else(|| {
        FieldError::normalization(reference, "expected single spaces between tokens")
    })?;
    let &[norm_type, target, resource_entry] = tokens.as_slice() else {
        return Err(FieldError::normalization(
            reference,
            format!(
                "expected `type target resource:entry`, found {} tokens",
                tokens.len()
            ),
        ));
    };
    let (resource, entry) = split_pair(resource_entry).ok_or_else(|| {
        FieldError::normalization(
            reference,
            format!("`{}` is not a `resource:entry` pair", resource_entry),
        )
    })?;
    Ok(NormalizationFields {
        norm_type,
        target,
        resource,
        entry,
        text,
    })
}
