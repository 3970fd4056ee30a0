//! Record Classifier
//!
//! Turns one line of an `.ann` file into at most one [`AnnotationRecord`].
//!
//! A line is split on tabs into 2 or 3 columns. The first column is the identifier, and
//! its first character selects the record kind (see [`RecordKind::from_prefix`]). The
//! second column is the payload, parsed per kind; the third column, when the kind uses it,
//! is literal text.
//!
//! Lines whose identifier prefix is unknown produce `Ok(None)`: newer brat versions add
//! record kinds, and older readers are expected to pass over them.

use crate::standoff::ast::{
    AnnotationRecord, Attribute, Entity, Equivalence, Event, Normalization, Note, RecordKind,
    Relation, Trigger,
};
use crate::standoff::error::{RecordError, Violation};
use crate::standoff::parsing::fields::{
    parse_arguments, parse_attribute_value, parse_normalization, parse_offsets,
};

const COLUMN_SEPARATOR: char = '\t';

/// The tab-separated columns of a line
struct Columns<'a> {
    id: &'a str,
    payload: &'a str,
    text: Option<&'a str>,
}

impl<'a> Columns<'a> {
    fn split(line: &'a str) -> Result<Self, Violation> {
        let columns: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
        match *columns.as_slice() {
            [id, payload] => Ok(Columns {
                id,
                payload,
                text: None,
            }),
            [id, payload, text] => Ok(Columns {
                id,
                payload,
                text: Some(text),
            }),
            _ => Err(Violation::ColumnCount(columns.len())),
        }
    }

    fn text(&self) -> Result<&'a str, Violation> {
        self.text.ok_or(Violation::MissingText)
    }
}

/// Classify a single line (without its line terminator).
///
/// Returns `Ok(None)` when the identifier prefix is not a known record kind.
pub fn classify_line(line: &str) -> Result<Option<AnnotationRecord>, RecordError> {
    let columns = Columns::split(line).map_err(|violation| RecordError::MalformedRecord {
        id: line.split(COLUMN_SEPARATOR).next().unwrap_or_default().to_string(),
        raw: line.to_string(),
        violation,
    })?;

    let Some(kind) = RecordKind::from_id(columns.id) else {
        tracing::debug!(id = columns.id, "skipping line with unrecognized identifier prefix");
        return Ok(None);
    };

    let record = build_record(kind, &columns).map_err(|violation| RecordError::MalformedRecord {
        id: columns.id.to_string(),
        raw: line.to_string(),
        violation,
    })?;
    tracing::trace!(id = record.id(), kind = %kind, "classified record");
    Ok(Some(record))
}

fn build_record(kind: RecordKind, columns: &Columns<'_>) -> Result<AnnotationRecord, Violation> {
    let id = columns.id;
    let payload = columns.payload;
    let record: AnnotationRecord = match kind {
        RecordKind::Entity => {
            let (entity_type, offsets) = payload
                .split_once(' ')
                .filter(|(entity_type, _)| !entity_type.is_empty())
                .ok_or(Violation::MissingPayload("offsets"))?;
            let spans = parse_offsets(offsets)?;
            Entity::new(id, entity_type, spans, columns.text()?.trim_end()).into()
        }
        RecordKind::Event => {
            // an event may have no arguments, with or without a trailing space
            let (trigger, arguments) = payload.split_once(' ').unwrap_or((payload, ""));
            let (trigger_type, trigger_id) = trigger
                .split_once(':')
                .filter(|(trigger_type, trigger_id)| {
                    !trigger_type.is_empty() && !trigger_id.is_empty() && !trigger_id.contains(':')
                })
                .ok_or_else(|| Violation::MalformedTrigger(trigger.to_string()))?;
            Event::new(
                id,
                Trigger::new(trigger_id, trigger_type),
                parse_arguments(arguments)?,
            )
            .into()
        }
        RecordKind::Relation => {
            let (relation_type, arguments) = payload.split_once(' ').unwrap_or((payload, ""));
            if relation_type.is_empty() {
                return Err(Violation::MissingPayload("arguments"));
            }
            Relation::new(id, relation_type, parse_arguments(arguments)?).into()
        }
        RecordKind::Equivalence => {
            let (relation_type, entities) = payload
                .split_once(' ')
                .ok_or(Violation::MissingPayload("ids"))?;
            let entities: Vec<String> = entities.split(' ').map(str::to_string).collect();
            if relation_type.is_empty() || entities.iter().any(|entity| entity.is_empty()) {
                return Err(Violation::MissingPayload("ids"));
            }
            Equivalence::new(id, relation_type, entities).into()
        }
        RecordKind::Attribute => {
            let fields = parse_attribute_value(payload)?;
            Attribute::new(
                id,
                fields.attribute_type,
                fields.target,
                fields.value.map(str::to_string),
            )
            .into()
        }
        RecordKind::Normalization => {
            let fields = parse_normalization(payload, columns.text()?)?;
            Normalization {
                id: id.to_string(),
                norm_type: fields.norm_type.to_string(),
                target: fields.target.to_string(),
                resource: fields.resource.to_string(),
                entry: fields.entry.to_string(),
                text: fields.text.to_string(),
            }
            .into()
        }
        RecordKind::Note => {
            let (note_type, target) = payload
                .split_once(' ')
                .filter(|(note_type, target)| {
                    !note_type.is_empty() && !target.is_empty() && !target.contains(' ')
                })
                .ok_or(Violation::MissingPayload("target-id"))?;
            Note::new(id, note_type, columns.text()?.trim_end(), target).into()
        }
    };
    Ok(record)
}
