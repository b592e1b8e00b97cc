use crate::Query;
use crate::diagnostics::DiagnosticKind;

#[test]
fn operand_shapes() {
    let res = Query::expect_valid_dump("K--e4 K-- --e4 --");
    insta::assert_snapshot!(res, @r"
    Cql
      DashLR
        PieceDesignator K
        PieceDesignator e4
      DashLI
        PieceDesignator K
        AnySquare
      DashIR
        AnySquare
        PieceDesignator e4
      DashII
        AnySquare
        AnySquare
    ");
}

#[test]
fn captures() {
    let res = Query::expect_valid_types("Q[x]r [x]a");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      TakeLR :: Set
        PieceDesignator Q :: Set
        PieceDesignator r :: Set
      TakeIR :: Set
        AnySquare :: Set
        PieceDesignator a :: Set
    ");
}

#[test]
fn set_variable_as_destination() {
    let res = Query::expect_valid_dump("x = a1  K--x");
    insta::assert_snapshot!(res, @r"
    Cql
      Assign
        Variable x
        PieceDesignator a1
      DashLR
        PieceDesignator K
        Variable x
    ");
}

#[test]
fn numeric_variable_is_not_a_destination() {
    let res = Query::expect_valid_dump("x = 1  K-- x");
    insta::assert_snapshot!(res, @r"
    Cql
      Assign
        Variable x
        Integer 1
      DashLI
        PieceDesignator K
        AnySquare
      Variable x
    ");
}

#[test]
fn promotion() {
    let res = Query::expect_valid_dump("P--a8=Q");
    insta::assert_snapshot!(res, @r"
    Cql
      DashLR
        PieceDesignator P
        PieceDesignator a8
        Promotion
          PieceDesignator Q
    ");
}

#[test]
fn promotion_must_be_a_single_piece() {
    let diag = Query::expect_invalid("P--a8=Qa1");
    assert_eq!(diag.kind(), DiagnosticKind::InvalidPromotion);
    insta::assert_snapshot!(diag.text(), @"promotion must be a single unqualified piece: found `Qa1`");

    assert_eq!(
        Query::expect_invalid_kind("P--a8=check"),
        DiagnosticKind::InvalidPromotion
    );
}

#[test]
fn target_clause() {
    let res = Query::expect_valid_dump("-- (check)  K--{check mate}");
    insta::assert_snapshot!(res, @r"
    Cql
      DashII
        AnySquare
        AnySquare
        Target
          Check
      DashLI
        PieceDesignator K
        AnySquare
        Target
          BraceCompound
            Check
            Mate
    ");
}

#[test]
fn glued_bare_move_is_ambiguous() {
    for src in ["[x]--", "[x][x]", "[x]and[x]", "--(check)", "--[Aa]", "--{check}"] {
        assert_eq!(
            Query::expect_invalid_kind(src),
            DiagnosticKind::AmbiguousMove,
            "{src}"
        );
    }
}

#[test]
fn ambiguity_message() {
    let diag = Query::expect_invalid("[x]--");
    insta::assert_snapshot!(diag.text(), @"ambiguous move operator: `[x]` directly followed by `--`");
    assert_eq!(u32::from(diag.range().start()), 0);
    assert_eq!(u32::from(diag.range().end()), 5);
}

#[test]
fn whitespace_resolves_ambiguity() {
    let res = Query::expect_valid_dump("[x]and [x]");
    insta::assert_snapshot!(res, @r"
    Cql
      And
        TakeII
          AnySquare
          AnySquare
        TakeII
          AnySquare
          AnySquare
    ");
}

#[test]
fn moves_do_not_chain() {
    let res = Query::expect_valid_dump("K--e4--");
    insta::assert_snapshot!(res, @r"
    Cql
      DashLR
        PieceDesignator K
        PieceDesignator e4
      DashII
        AnySquare
        AnySquare
    ");
}
