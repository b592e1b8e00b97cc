use crate::Query;
use crate::diagnostics::DiagnosticKind;

#[test]
fn pin_defaults() {
    let res = Query::expect_valid_dump("pin");
    insta::assert_snapshot!(res, @r"
    Cql
      Pin
        ThroughDefault
          AnyPiece
        FromDefault
          AnyPiece
        ToDefault
          AnyKing
    ");
}

#[test]
fn explicit_parameters_precede_defaults() {
    let res = Query::expect_valid_dump("pin from Q");
    insta::assert_snapshot!(res, @r"
    Cql
      Pin
        From
          PieceDesignator Q
        ThroughDefault
          AnyPiece
        ToDefault
          AnyKing
    ");
}

#[test]
fn parameters_in_canonical_order() {
    let res = Query::expect_valid_dump("pin to k through R from Q");
    insta::assert_snapshot!(res, @r"
    Cql
      Pin
        Through
          PieceDesignator R
        From
          PieceDesignator Q
        To
          PieceDesignator k
    ");
}

#[test]
fn move_defaults() {
    let res = Query::expect_valid_types("move");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      Move :: Set
        FromDefault :: Set
          AnyPiece :: Set
        ToDefault :: Set
          AnySquare :: Set
    ");
}

#[test]
fn move_parameters() {
    let res = Query::expect_valid_dump("move capture q to e4 | e5 from K");
    insta::assert_snapshot!(res, @r"
    Cql
      Move
        From
          PieceDesignator K
        To
          Union
            PieceDesignator e4
            PieceDesignator e5
        Capture
          PieceDesignator q
    ");
}

#[test]
fn move_flags() {
    let res = Query::expect_valid_dump("move null previous");
    insta::assert_snapshot!(res, @r"
    Cql
      Move
        Previous
        NullMove
        FromDefault
          AnyPiece
        ToDefault
          AnySquare
    ");
}

#[test]
fn parameter_argument_must_be_a_set() {
    let diag = Query::expect_invalid("move from 1");
    assert_eq!(diag.kind(), DiagnosticKind::UnexpectedType);
    insta::assert_snapshot!(diag.text(), @"unexpected filter type: the parameter must be Set, found Numeric");
}

#[test]
fn repeated_parameter() {
    let diag = Query::expect_invalid("move to e4 to e5");
    assert_eq!(diag.kind(), DiagnosticKind::DuplicateParameter);
    insta::assert_snapshot!(diag.text(), @"`to` given more than once");
    assert_eq!(diag.related()[0].text(), "first given here");
}

#[test]
fn legal_conflicts_with_pseudolegal() {
    let diag = Query::expect_invalid("move legal pseudolegal");
    assert_eq!(diag.kind(), DiagnosticKind::ConflictingParameters);
    insta::assert_snapshot!(diag.text(), @"conflicting parameters: `PseudoLegal` cannot be combined with `Legal`");
}

#[test]
fn find_forward() {
    let res = Query::expect_valid_types("find check");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      Find :: Position
        Check :: Logical
    ");
}

#[test]
fn find_all_options() {
    let res = Query::expect_valid_types("find all quiet <-- 2 5 check");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      Find :: Numeric
        FindAll :: Logical
        Quiet :: Logical
        FindBackward :: Logical
        Range 2..5 :: Numeric
        Check :: Logical
    ");
}

#[test]
fn find_single_bound() {
    let res = Query::expect_valid_dump("find 3 mate");
    insta::assert_snapshot!(res, @r"
    Cql
      Find
        Range 3..3
        Mate
    ");
}

#[test]
fn find_keywords_precede_arrow() {
    let kind = Query::expect_invalid_kind("find <-- all check");
    assert_eq!(kind, DiagnosticKind::ExpectedFilter);
}

#[test]
fn find_range_is_ordered() {
    let diag = Query::expect_invalid("find 5 2 check");
    assert_eq!(diag.kind(), DiagnosticKind::InvalidRange);
    insta::assert_snapshot!(diag.text(), @"range minimum exceeds maximum: 5 > 2");
}
