use crate::Query;
use crate::diagnostics::DiagnosticKind;

#[test]
fn logical_precedence() {
    let res = Query::expect_valid_dump("check or mate and not stalemate");
    insta::assert_snapshot!(res, @r"
    Cql
      Or
        Check
        And
          Mate
          Not
            Stalemate
    ");
}

#[test]
fn arithmetic_precedence() {
    let res = Query::expect_valid_dump("1 + 2 * 3 < ply");
    insta::assert_snapshot!(res, @r"
    Cql
      LT
        Plus
          Integer 1
          Multiply
            Integer 2
            Integer 3
        Ply
    ");
}

#[test]
fn binary_operators_are_left_associative() {
    let res = Query::expect_valid_dump("10 - 3 - 2 > 0");
    insta::assert_snapshot!(res, @r"
    Cql
      GT
        Minus
          Minus
            Integer 10
            Integer 3
          Integer 2
        Integer 0
    ");
}

#[test]
fn not_takes_a_comparison() {
    let res = Query::expect_valid_dump("not a < 2");
    insta::assert_snapshot!(res, @r"
    Cql
      Not
        LT
          PieceDesignator a
          Integer 2
    ");
}

#[test]
fn set_operators_bind_tighter_than_in() {
    let res = Query::expect_valid_dump("K in a1 | h8 & ~A");
    insta::assert_snapshot!(res, @r"
    Cql
      In
        PieceDesignator K
        Union
          PieceDesignator a1
          Intersection
            PieceDesignator h8
            Complement
              PieceDesignator A
    ");
}

#[test]
fn attack_arrows() {
    let res = Query::expect_valid_dump("#(Q --> k) > 0");
    insta::assert_snapshot!(res, @r"
    Cql
      GT
        Cardinality
          Parenthesized
            AttackArrow
              PieceDesignator Q
              PieceDesignator k
        Integer 0
    ");
}

#[test]
fn before_and_after_are_distinct_kinds() {
    let res = Query::expect_valid_dump("parent [<] currentposition  ply [>=] 3");
    insta::assert_snapshot!(res, @r"
    Cql
      BeforeLT
        Parent
        CurrentPosition
      AfterGE
        Ply
        Integer 3
    ");
}

#[test]
fn prefix_keyword_filters() {
    let res = Query::expect_valid_dump("power light Q > abs -2");
    insta::assert_snapshot!(res, @r"
    Cql
      GT
        Power
          Light
            PieceDesignator Q
        Abs
          UnaryMinus
            Integer 2
    ");
}

#[test]
fn colon_is_right_associative() {
    let res = Query::expect_valid_dump("parent : initialposition : check");
    insta::assert_snapshot!(res, @r"
    Cql
      Colon
        Parent
        Colon
          InitialPosition
          Check
    ");
}

#[test]
fn colon_requires_position() {
    let diag = Query::expect_invalid("check : mate");
    assert_eq!(diag.kind(), DiagnosticKind::UnexpectedType);
    insta::assert_snapshot!(diag.text(), @"unexpected filter type: the left side of `:` must be Position, found Logical");
}

#[test]
fn colon_result_takes_right_type() {
    let res = Query::expect_valid_types("parent : ply > 3");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      GT :: Logical
        Colon :: Numeric
          Parent :: Position
          Ply :: Numeric
        Integer 3 :: Numeric
    ");
}

#[test]
fn if_then_else() {
    let res = Query::expect_valid_types("if check then 1 else ply");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      If :: Numeric
        Check :: Logical
        Integer 1 :: Numeric
        Ply :: Numeric
    ");
}

#[test]
fn if_without_else_is_logical() {
    let res = Query::expect_valid_types("if wtm mate");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      If :: Logical
        Wtm :: Logical
        Mate :: Logical
    ");
}

#[test]
fn square_binder() {
    let res = Query::expect_valid_types("square all x in a-h1-8 x & K");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      SquareAll :: Logical
        Variable x :: Set
        PieceDesignator a-h1-8 :: Set
        Intersection :: Set
          Variable x :: Set
          PieceDesignator K :: Set
    ");
}

#[test]
fn piece_binder() {
    let res = Query::expect_valid_dump("piece z in [RQ] z --> k");
    insta::assert_snapshot!(res, @r"
    Cql
      Piece
        Variable z
        PieceDesignator [RQ]
        AttackArrow
          Variable z
          PieceDesignator k
    ");
}

#[test]
fn binder_domain_must_be_a_set() {
    let kind = Query::expect_invalid_kind("square x in 3 check");
    assert_eq!(kind, DiagnosticKind::UnexpectedType);
}

#[test]
fn max_and_min() {
    let res = Query::expect_valid_dump("max(1 #a ply) > min(2 3)");
    insta::assert_snapshot!(res, @r"
    Cql
      GT
        Max
          Integer 1
          Cardinality
            PieceDesignator a
          Ply
        Min
          Integer 2
          Integer 3
    ");
}

#[test]
fn max_rejects_non_numeric_and_empty() {
    assert_eq!(
        Query::expect_invalid_kind(r#"max(1 "two") > 0"#),
        DiagnosticKind::UnexpectedType
    );
    assert_eq!(
        Query::expect_invalid_kind("max() > 0"),
        DiagnosticKind::EmptyGroup
    );
}

#[test]
fn player_filters() {
    let res = Query::expect_valid_dump(r#"player white == "Carlsen" player == site"#);
    insta::assert_snapshot!(res, @r#"
    Cql
      EQ
        PlayerWhite
        String "Carlsen"
      EQ
        Player
        Site
    "#);
}

#[test]
fn prefix_operand_types() {
    assert_eq!(
        Query::expect_invalid_kind("light 3"),
        DiagnosticKind::IncompatibleTypes
    );
    assert_eq!(
        Query::expect_invalid_kind("#check > 1"),
        DiagnosticKind::IncompatibleTypes
    );
    let diag = Query::expect_invalid("-\"s\" > 1");
    insta::assert_snapshot!(diag.text(), @"incompatible operand types: - String");
}

#[test]
fn missing_operand() {
    let diag = Query::expect_invalid("check and");
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedFilter);
    insta::assert_snapshot!(diag.text(), @"expected a filter: found end of input");
}

#[test]
fn integer_overflow() {
    let kind = Query::expect_invalid_kind("ply > 99999999999999999999");
    assert_eq!(kind, DiagnosticKind::IntegerOverflow);
}
