//! Snapshot tests for documents rendered back to `.ann` lines and for diagnostics

use standoff_parser::standoff::loader::{parse_annotations, parse_annotations_with, ErrorPolicy};

const DOCUMENT: &str = "T1\tOrganization 0 4\tSony\n\
                        T2\tMERGE-ORG 14 27\tjoint venture \n\
                        T3\tOrganization 33 41;45 52\tEricsson Mobile\n\
                        E1\tMERGE-ORG:T2 Org1:T1 Org2:T3\n\
                        E2\tProcess:T2 \n\
                        R1\tOrigin Arg1:T3 Arg2:T1\n\
                        *\tEquiv T1 T3\n\
                        A1\tNegation E1\n\
                        M2\tConfidence E1 High\n\
                        N1\tReference T1 Wikipedia:534366\tSony\n\
                        #1\tAnnotatorNotes T1\tchecked\n\
                        X9\tSomething from the future\n";

fn render(source: &str) -> String {
    parse_annotations(source)
        .expect("document to parse")
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_document_renders_canonically() {
    insta::assert_snapshot!(render(DOCUMENT), @r"
    T1	Organization 0 4	Sony
    T2	MERGE-ORG 14 27	joint venture
    T3	Organization 33 41;45 52	Ericsson Mobile
    E1	MERGE-ORG:T2 Org1:T1 Org2:T3
    E2	Process:T2
    R1	Origin Arg1:T3 Arg2:T1
    *	Equiv T1 T3
    A1	Negation E1
    M2	Confidence E1 High
    N1	Reference T1 Wikipedia:534366	Sony
    #1	AnnotatorNotes T1	checked
    ");
}

#[test]
fn test_rendering_is_a_fixpoint() {
    let once = render(DOCUMENT);
    let twice = render(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_collected_diagnostics() {
    let source = "T1\tPerson 0 5\tJones\n\
                  T2\tPerson 5\tX\n\
                  E1\tDie T1\n\
                  A1\tNegation\n";
    let report = parse_annotations_with(source, ErrorPolicy::CollectAll);
    let diagnostics = report
        .errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(diagnostics, @r"
    line 2: malformed record `T2`: malformed offsets `5`: `5` is not a `start end` pair
    line 3: malformed record `E1`: malformed trigger `Die`: expected `type:id`
    line 4: malformed record `A1`: malformed attribute `Negation`: expected `type target [value]`, found 1 tokens
    ");
}
