//! Accept/reject matrices for every binary operator over the five value types.

use crate::diagnostics::DiagnosticKind;
use crate::{FilterType, QueryBuilder};

/// A minimal filter of each type.
const SAMPLES: [(FilterType, &str); 5] = [
    (FilterType::Set, "a"),
    (FilterType::Logical, "true"),
    (FilterType::Numeric, "1"),
    (FilterType::String, "\"s\""),
    (FilterType::Position, "currentposition"),
];

/// Asserts that `left op right` parses exactly for the pairs `accepts` allows,
/// producing a root child of kind `kind` with type `result`.
#[track_caller]
fn check_matrix(
    op: &str,
    kind: &str,
    accepts: impl Fn(FilterType, FilterType) -> Option<FilterType>,
) {
    for (lt, left) in SAMPLES {
        for (rt, right) in SAMPLES {
            let src = format!("{left} {op} {right}");
            let result = QueryBuilder::new(&src).build();
            match (accepts(lt, rt), result) {
                (Some(expected), Ok(query)) => {
                    let tree = query.tree();
                    let top = tree.children(query.root())[0];
                    assert_eq!(tree.kind(top).name(), kind, "{src}");
                    assert_eq!(tree.ty(top), expected, "{src}");
                }
                (None, Err(err)) => {
                    assert_eq!(
                        err.diagnostic().kind(),
                        DiagnosticKind::IncompatibleTypes,
                        "{src}"
                    );
                }
                (Some(_), Err(err)) => panic!("`{src}` should parse: {}", err.diagnostic()),
                (None, Ok(_)) => panic!("`{src}` should be rejected"),
            }
        }
    }
}

fn comparable(l: FilterType, r: FilterType) -> Option<FilterType> {
    use FilterType::*;
    matches!(
        (l, r),
        (Numeric, Numeric)
            | (String, String)
            | (Position, Position)
            | (Set, Numeric)
            | (Numeric, Set)
            | (Set, Set)
    )
    .then_some(Logical)
}

fn numeric_like(l: FilterType, r: FilterType) -> Option<FilterType> {
    (l.is_numeric_like() && r.is_numeric_like()).then_some(FilterType::Numeric)
}

fn sets(l: FilterType, r: FilterType) -> Option<FilterType> {
    (l == FilterType::Set && r == FilterType::Set).then_some(FilterType::Set)
}

#[test]
fn comparisons() {
    for (op, kind) in [
        ("<", "LT"),
        ("<=", "LE"),
        (">", "GT"),
        (">=", "GE"),
        ("==", "EQ"),
        ("!=", "NE"),
    ] {
        check_matrix(op, kind, comparable);
    }
}

#[test]
fn before_and_after() {
    for (op, kind) in [
        ("[<]", "BeforeLT"),
        ("[<=]", "BeforeLE"),
        ("[>]", "AfterGT"),
        ("[>=]", "AfterGE"),
    ] {
        check_matrix(op, kind, comparable);
    }
}

#[test]
fn logical_connectives() {
    check_matrix("and", "And", |_, _| Some(FilterType::Logical));
    check_matrix("or", "Or", |_, _| Some(FilterType::Logical));
}

#[test]
fn membership() {
    check_matrix("in", "In", |l, r| {
        matches!(
            (l, r),
            (FilterType::Set, FilterType::Set) | (FilterType::String, FilterType::String)
        )
        .then_some(FilterType::Logical)
    });
}

#[test]
fn set_operators() {
    check_matrix("|", "Union", sets);
    check_matrix("&", "Intersection", sets);
    check_matrix("-->", "AttackArrow", sets);
    check_matrix("<--", "AttackedArrow", sets);
}

#[test]
fn plus_concatenates_strings() {
    check_matrix("+", "Plus", |l, r| {
        if l == FilterType::String && r == FilterType::String {
            Some(FilterType::String)
        } else {
            numeric_like(l, r)
        }
    });
}

#[test]
fn arithmetic() {
    check_matrix("-", "Minus", numeric_like);
    check_matrix("*", "Multiply", numeric_like);
    check_matrix("/", "Divide", numeric_like);
    check_matrix("%", "Modulus", numeric_like);
}
