//! Integration tests for the record classifier, one case per record kind and per grammar
//! violation.

use rstest::rstest;
use standoff_parser::standoff::ast::{
    AnnotationRecord, Argument, Attribute, Entity, Equivalence, Event, Normalization, Note,
    RecordKind, Relation, Span, Trigger,
};
use standoff_parser::standoff::error::{FieldError, RecordError, Violation};
use standoff_parser::standoff::parsing::classify_line;

fn spans(pairs: &[(usize, usize)]) -> Vec<Span> {
    pairs
        .iter()
        .map(|&(start, end)| Span::new(start, end).unwrap())
        .collect()
}

#[rstest]
#[case::entity(
    "T1\tPerson 0 5\tJones",
    Entity::new("T1", "Person", spans(&[(0, 5)]), "Jones").into()
)]
#[case::discontinuous_entity(
    "T7\tOrganization 0 5;16 23\tNorth Company",
    Entity::new("T7", "Organization", spans(&[(0, 5), (16, 23)]), "North Company").into()
)]
#[case::event(
    "E1\tMERGE-ORG:T2 Org1:T1 Org2:T3",
    Event::new(
        "E1",
        Trigger::new("T2", "MERGE-ORG"),
        vec![Argument::new("T1", "Org1"), Argument::new("T3", "Org2")],
    ).into()
)]
#[case::relation(
    "R1\tOrigin Arg1:T3 Arg2:T4",
    Relation::new(
        "R1",
        "Origin",
        vec![Argument::new("T3", "Arg1"), Argument::new("T4", "Arg2")],
    ).into()
)]
#[case::equivalence(
    "*\tEquiv T1 T3 T5",
    Equivalence::new("*", "Equiv", vec!["T1".into(), "T3".into(), "T5".into()]).into()
)]
#[case::flag_attribute(
    "A1\tNegation E1",
    Attribute::new("A1", "Negation", "E1", None).into()
)]
#[case::valued_attribute(
    "A2\tConfidence E2 L1",
    Attribute::new("A2", "Confidence", "E2", Some("L1".into())).into()
)]
#[case::legacy_modifier(
    "M1\tSpeculation E3",
    Attribute::new("M1", "Speculation", "E3", None).into()
)]
#[case::normalization(
    "N1\tReference T1 Wikipedia:534366\tBarack Obama",
    Normalization {
        id: "N1".into(),
        norm_type: "Reference".into(),
        target: "T1".into(),
        resource: "Wikipedia".into(),
        entry: "534366".into(),
        text: "Barack Obama".into(),
    }.into()
)]
#[case::note(
    "#1\tAnnotatorNotes T1\tthis is a note",
    Note::new("#1", "AnnotatorNotes", "this is a note", "T1").into()
)]
#[case::relation_without_arguments(
    "R1\tOrigin",
    Relation::new("R1", "Origin", vec![]).into()
)]
#[case::normalization_text_is_verbatim(
    "N1\tReference T1 Wikipedia:1\tSony  ",
    Normalization {
        id: "N1".into(),
        norm_type: "Reference".into(),
        target: "T1".into(),
        resource: "Wikipedia".into(),
        entry: "1".into(),
        text: "Sony  ".into(),
    }.into()
)]
#[case::note_text_is_trimmed(
    "#1\tAnnotatorNotes T1\tchecked  ",
    Note::new("#1", "AnnotatorNotes", "checked", "T1").into()
)]
fn test_classifies_each_kind(#[case] line: &str, #[case] expected: AnnotationRecord) {
    let record = classify_line(line).unwrap().unwrap();
    assert_eq!(record, expected);
    assert_eq!(Some(record.kind()), RecordKind::from_id(line));
}

#[rstest]
#[case::one_column("T1 Person 0 5 Jones")]
#[case::empty_line("")]
#[case::four_columns("T1\tPerson 0 5\tJones\textra")]
#[case::entity_without_text("T1\tPerson 0 5")]
#[case::entity_without_offsets("T1\tPerson\tJones")]
#[case::entity_empty_type("T1\t 0 5\tJones")]
#[case::entity_missing_end("T1\tPerson 0\tJones")]
#[case::entity_extra_offset("T1\tPerson 0 5 7\tJones")]
#[case::entity_non_numeric("T1\tPerson zero 5\tJones")]
#[case::event_without_trigger_colon("E1\tMERGE-ORG T2 Org1:T1")]
#[case::event_bad_argument("E1\tMERGE-ORG:T2 Org1T1")]
#[case::relation_bad_argument("R1\tOrigin Arg1:T3:x")]
#[case::equivalence_without_ids("*\tEquiv")]
#[case::attribute_too_short("A1\tNegation")]
#[case::attribute_too_long("A1\tConfidence E1 L1 L2")]
#[case::normalization_without_text("N1\tReference T1 Wikipedia:534366")]
#[case::normalization_without_entry("N1\tReference T1 Wikipedia\tBarack Obama")]
#[case::note_without_target("#1\tAnnotatorNotes\tnote")]
fn test_rejects_malformed_lines(#[case] line: &str) {
    let error = classify_line(line).unwrap_err();
    let RecordError::MalformedRecord { raw, .. } = &error;
    assert_eq!(raw, line);
}

#[test]
fn test_single_column_is_a_column_count_violation() {
    let error = classify_line("T1").unwrap_err();
    assert_eq!(error.id(), "T1");
    assert_eq!(error.violation(), &Violation::ColumnCount(1));
}

#[test]
fn test_entity_needs_a_type() {
    let error = classify_line("T1\t 0 5\tJones").unwrap_err();
    assert_eq!(error.violation(), &Violation::MissingPayload("offsets"));
}

#[rstest]
#[case("T1\tPerson 0\tJones")]
#[case("T1\tPerson 0 5;7\tJones")]
fn test_offset_errors_keep_their_kind(#[case] line: &str) {
    let error = classify_line(line).unwrap_err();
    assert!(matches!(
        error.violation(),
        Violation::Field(FieldError::MalformedOffsets { .. })
    ));
}

#[rstest]
#[case("Z1\tSomething 0 5\tfoo")]
#[case("t1\tPerson 0 5\tlowercase prefix")]
#[case("\tno identifier")]
#[case("X1\tnot even a payload we understand\tat all")]
fn test_unrecognized_prefixes_are_ignored(#[case] line: &str) {
    assert_eq!(classify_line(line), Ok(None));
}

#[test]
fn test_column_count_is_checked_before_prefix() {
    assert!(classify_line("Z1").is_err());
}

#[test]
fn test_unused_third_column_is_ignored() {
    let record = classify_line("R1\tOrigin Arg1:T3 Arg2:T4\tleftover").unwrap().unwrap();
    assert_eq!(record.as_relation().unwrap().arguments.len(), 2);
}

#[test]
fn test_classification_is_idempotent() {
    let line = "E1\tMERGE-ORG:T2 Org1:T1 Org2:T3";
    assert_eq!(classify_line(line), classify_line(line));
}
