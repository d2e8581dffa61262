//! Dialect selection tests.

use planreel_parser::Dialect;

#[test]
fn names_parse_case_insensitively() {
    assert_eq!("CLASSICAL".parse::<Dialect>(), Ok(Dialect::Classical));
    assert_eq!("Temporal".parse::<Dialect>(), Ok(Dialect::Temporal));
    assert_eq!("numerical".parse::<Dialect>(), Ok(Dialect::Numerical));
    assert_eq!("HYBRID".parse::<Dialect>(), Ok(Dialect::Hybrid));
}

#[test]
fn aliases_are_accepted() {
    assert_eq!("strips".parse::<Dialect>(), Ok(Dialect::Classical));
    assert_eq!("numeric".parse::<Dialect>(), Ok(Dialect::Numerical));
    assert_eq!("hybrid-continuous".parse::<Dialect>(), Ok(Dialect::Hybrid));
}

#[test]
fn unknown_names_are_errors() {
    assert!("pddl".parse::<Dialect>().is_err());
    assert!("".parse::<Dialect>().is_err());
}

#[test]
fn display_matches_canonical_name() {
    for dialect in Dialect::ALL {
        assert_eq!(format!("{dialect}"), dialect.name());
    }
}
