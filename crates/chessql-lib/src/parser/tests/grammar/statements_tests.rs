use crate::Query;
use crate::diagnostics::DiagnosticKind;

#[test]
fn empty_query() {
    let res = Query::expect_valid_types("");
    insta::assert_snapshot!(res, @"Cql :: Logical");
}

#[test]
fn statements_in_order() {
    let res = Query::expect_valid_dump("check // comment\n mate /* more */ stalemate");
    insta::assert_snapshot!(res, @r"
    Cql
      Check
      Mate
      Stalemate
    ");
}

#[test]
fn compound_takes_last_type() {
    let res = Query::expect_valid_types("{check ply} > 3");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      GT :: Logical
        BraceCompound :: Numeric
          Check :: Logical
          Ply :: Numeric
        Integer 3 :: Numeric
    ");
}

#[test]
fn parenthesized_number_in_braces() {
    let res = Query::expect_valid_dump("{(1)}");
    insta::assert_snapshot!(res, @r"
    Cql
      BraceCompound
        Parenthesized
          Integer 1
    ");
}

#[test]
fn integer_like_brace() {
    let diag = Query::expect_invalid("{1}");
    assert_eq!(diag.kind(), DiagnosticKind::IntegerLikeBrace);
    insta::assert_snapshot!(diag.to_string(), @"error at 0..3: a brace holding only a number reads as a repetition (help: wrap the number in parentheses: `{(1)}`)");

    assert_eq!(
        Query::expect_invalid_kind("function f(){1}"),
        DiagnosticKind::IntegerLikeBrace
    );
}

#[test]
fn empty_groups() {
    assert_eq!(Query::expect_invalid_kind("{}"), DiagnosticKind::EmptyGroup);
    assert_eq!(Query::expect_invalid_kind("()"), DiagnosticKind::EmptyGroup);
}

#[test]
fn unclosed_delimiters() {
    let diag = Query::expect_invalid("(check");
    assert_eq!(diag.kind(), DiagnosticKind::UnclosedParen);
    insta::assert_snapshot!(diag.text(), @"missing closing `)`; found end of input");
    assert_eq!(diag.related()[0].text(), "opened here");

    assert_eq!(
        Query::expect_invalid_kind("{check mate"),
        DiagnosticKind::UnclosedBrace
    );
}

#[test]
fn stray_closer() {
    let diag = Query::expect_invalid("check )");
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedFilter);
    insta::assert_snapshot!(diag.text(), @"expected a filter: found `)`");
}

#[test]
fn misplaced_assignment() {
    let diag = Query::expect_invalid("check = 1");
    assert_eq!(diag.kind(), DiagnosticKind::MisplacedAssignment);
    assert_eq!(diag.related()[0].text(), "left side");

    assert_eq!(
        Query::expect_invalid_kind("x = 1 (x) += 1"),
        DiagnosticKind::MisplacedAssignment
    );
}

#[test]
fn assignment_inside_compound() {
    let res = Query::expect_valid_dump("{x = 1} x < 2");
    insta::assert_snapshot!(res, @r"
    Cql
      BraceCompound
        Assign
          Variable x
          Integer 1
      LT
        Variable x
        Integer 2
    ");
}
