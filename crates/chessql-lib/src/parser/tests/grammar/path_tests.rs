use crate::Query;
use crate::diagnostics::DiagnosticKind;

#[test]
fn constituent_chain() {
    let res = Query::expect_valid_types("path Ka1--b2 --c3+");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      Path :: Numeric
        DashLR :: Set
          PieceDesignator Ka1 :: Set
          PieceDesignator b2 :: Set
        RepeatPlus :: Set
          DashIR :: Set
            AnySquare :: Set
            PieceDesignator c3 :: Set
    ");
}

#[test]
fn repetition_suffixes() {
    let res = Query::expect_valid_dump("path --* --? --{2} --{,3} --{1,} --{+}");
    insta::assert_snapshot!(res, @r"
    Cql
      Path
        RepeatStar
          DashII
            AnySquare
            AnySquare
        RepeatOptional
          DashII
            AnySquare
            AnySquare
        RepeatRange 2..2
          DashII
            AnySquare
            AnySquare
        RepeatRange ..3
          DashII
            AnySquare
            AnySquare
        RepeatRange 1..
          DashII
            AnySquare
            AnySquare
        RepeatPlus
          DashII
            AnySquare
            AnySquare
    ");
}

#[test]
fn group_ends_path() {
    let res = Query::expect_valid_dump("path (--)+ check");
    insta::assert_snapshot!(res, @r"
    Cql
      Path
        RepeatPlus
          ConstituentGroup
            DashII
              AnySquare
              AnySquare
      Check
    ");
}

#[test]
fn qualified_move_before_group() {
    let res = Query::expect_valid_dump("path K--(--)");
    insta::assert_snapshot!(res, @r"
    Cql
      Path
        DashLI
          PieceDesignator K
          AnySquare
        ConstituentGroup
          DashII
            AnySquare
            AnySquare
    ");
}

#[test]
fn bare_move_before_group_is_ambiguous() {
    let diag = Query::expect_invalid("path --(--)");
    assert_eq!(diag.kind(), DiagnosticKind::AmbiguousConstituentGroup);
    insta::assert_snapshot!(diag.to_string(), @"error at 5..8: parenthesis after a bare move is ambiguous inside `path` (help: qualify the move with a piece designator, e.g. `K--(...)`)");
}

#[test]
fn bare_move_before_spaced_group_is_ambiguous() {
    let diag = Query::expect_invalid("path -- (K)");
    assert_eq!(diag.kind(), DiagnosticKind::AmbiguousConstituentGroup);
    assert_eq!(u32::from(diag.range().start()), 5);
    assert_eq!(u32::from(diag.range().end()), 9);

    let kind = Query::expect_invalid_kind("path [x] (K)");
    assert_eq!(kind, DiagnosticKind::AmbiguousConstituentGroup);

    assert!(crate::parse("path K-- (K)").is_ok());
}

#[test]
fn compound_and_variable_constituents() {
    let res = Query::expect_valid_dump("x = Q  path {check} x--e4");
    insta::assert_snapshot!(res, @r"
    Cql
      Assign
        Variable x
        PieceDesignator Q
      Path
        BraceCompound
          Check
        DashLR
          Variable x
          PieceDesignator e4
    ");
}

#[test]
fn parameters() {
    let res = Query::expect_valid_dump(r#"path title "x" max 3 quiet --"#);
    insta::assert_snapshot!(res, @r#"
    Cql
      Path
        PathMax
          Integer 3
        Title
          String "x"
        Quiet
        DashII
          AnySquare
          AnySquare
    "#);
}

#[test]
fn focus_capture() {
    let res = Query::expect_valid_dump("path focus capture Q Ka1--b2");
    insta::assert_snapshot!(res, @r"
    Cql
      Path
        FocusCapture
          PieceDesignator Q
        DashLR
          PieceDesignator Ka1
          PieceDesignator b2
    ");
}

#[test]
fn primary_conflicts_with_focus() {
    let kind = Query::expect_invalid_kind("path primary focus Q Ka1--b2");
    assert_eq!(kind, DiagnosticKind::ConflictingParameters);
}

#[test]
fn title_needs_a_string() {
    let diag = Query::expect_invalid("path title 3 --");
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedString);
    insta::assert_snapshot!(diag.text(), @"expected a string: found `3`");
}

#[test]
fn repetition_range_is_ordered() {
    let kind = Query::expect_invalid_kind("path --{3,2}");
    assert_eq!(kind, DiagnosticKind::InvalidRange);
}

#[test]
fn needs_a_constituent() {
    let diag = Query::expect_invalid("path check");
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedConstituent);
    insta::assert_snapshot!(diag.text(), @"expected a path constituent: found `check`");
}

#[test]
fn empty_group() {
    let kind = Query::expect_invalid_kind("path K-- ()");
    assert_eq!(kind, DiagnosticKind::EmptyGroup);
}
