//! Line filter tests.
//!
//! The filter must keep candidate action lines, drop solver noise, and
//! reject anything that is a domain/problem definition.

use planreel_parser::{Dialect, LineFilter};

#[test]
fn realistic_planner_output_is_cleaned() {
    let text = "\
; Command line: ff -o domain.pddl -f problem.pddl
; Parsing domain file... done.
Grounding the problem... done.
42 states evaluated
0: (load obj1 tru1 pos1)
1: (drive tru1 pos1 pos2)
2: (unload obj1 tru1 pos2)
Plan length: 3 step(s)
Search time: 0.02 seconds
";
    let lines = LineFilter::filter(text, Dialect::Classical).unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.text.contains('(')));
}

#[test]
fn line_numbers_refer_to_the_original_input() {
    let text = "; banner\n\n0: (noop)\n";
    let lines = LineFilter::filter(text, Dialect::Classical).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].line, 3);
}

#[test]
fn empty_input_is_an_explicit_empty_result() {
    assert!(LineFilter::filter("", Dialect::Hybrid).unwrap().is_empty());
}

#[test]
fn whitespace_only_input_is_empty() {
    assert!(
        LineFilter::filter("  \n\t\n   \n", Dialect::Hybrid)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn domain_definition_fails_before_any_parse() {
    let text = "\
0: (load obj1 tru1 pos1)
(define (domain logistics)
  (:requirements :strips :typing))
";
    let err = LineFilter::filter(text, Dialect::Classical).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("not a plan"));
    assert!(msg.contains("line 2"));
}

#[test]
fn problem_definition_is_also_rejected() {
    let text = "(define (problem log-x-1) (:domain logistics))";
    assert!(LineFilter::filter(text, Dialect::Temporal).is_err());
}

#[test]
fn dialect_tag_is_carried_on_every_line() {
    let text = "0.0: (move r1 a b)\n1.0: (move r1 b c)\n";
    let lines = LineFilter::filter(text, Dialect::Temporal).unwrap();
    assert!(lines.iter().all(|l| l.dialect == Dialect::Temporal));
}
