use indoc::indoc;

use crate::Query;
use crate::diagnostics::DiagnosticKind;

#[test]
fn declaration_and_call() {
    let res = Query::expect_valid_dump("function fn(y){y==1} x=1 fn(x)");
    insta::assert_snapshot!(res, @r"
    Cql
      Function fn
        BraceCompound
          EQ
            Parameter y
            Integer 1
      Assign
        Variable x
        Integer 1
      FunctionCall fn
        Variable x
        BraceCompound
          EQ
            Variable x
            Integer 1
    ");
}

#[test]
fn call_takes_expansion_type() {
    let res = Query::expect_valid_types("function both(s){s & K} #both(a) > 1");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      Function both :: Logical
        BraceCompound :: Set
          Intersection :: Set
            Parameter s :: Any
            PieceDesignator K :: Set
      GT :: Logical
        Cardinality :: Numeric
          FunctionCall both :: Set
            PieceDesignator a :: Set
            BraceCompound :: Set
              Intersection :: Set
                PieceDesignator a :: Set
                PieceDesignator K :: Set
        Integer 1 :: Numeric
    ");
}

#[test]
fn expansion_is_checked_against_arguments() {
    let diag = Query::expect_invalid("function both(s){s & K} both(1)");
    assert_eq!(diag.kind(), DiagnosticKind::IncompatibleTypes);
    insta::assert_snapshot!(diag.text(), @"incompatible operand types: Numeric & Set");
}

#[test]
fn parameter_as_move_destination() {
    let res = Query::expect_valid_dump("function m(s){--s} m(e4)");
    insta::assert_snapshot!(res, @r"
    Cql
      Function m
        BraceCompound
          DashIR
            AnySquare
            Parameter s
      FunctionCall m
        PieceDesignator e4
        BraceCompound
          DashIR
            AnySquare
            PieceDesignator e4
    ");
}

#[test]
fn empty_parameter_list() {
    let res = Query::expect_valid_dump("function always(){(1)} always() > 0");
    insta::assert_snapshot!(res, @r"
    Cql
      Function always
        BraceCompound
          Parenthesized
            Integer 1
      GT
        FunctionCall always
          BraceCompound
            Parenthesized
              Integer 1
        Integer 0
    ");
}

#[test]
fn calls_inside_bodies() {
    let query = Query::expect_valid(indoc! {"
        function near(s){s --> K}
        function guarded(s t){near(s) & near(t)}
        guarded(Q R)
    "});
    let guarded = query.functions().get("guarded").unwrap();
    assert_eq!(guarded.arity(), 2);
    assert_eq!(
        serde_json::to_string(&guarded.signature()).unwrap(),
        r#"{"name":"guarded","params":["s","t"],"body_type":"Set"}"#
    );
}

#[test]
fn body_assignments_apply_at_call_sites() {
    assert_eq!(
        Query::expect_invalid_kind("function setup(){z=1} z > 0"),
        DiagnosticKind::UndefinedName
    );

    let query = Query::expect_valid("function setup(){z=1} setup() z > 0");
    assert!(query.definitions().contains("z"));
}

#[test]
fn argument_count_mismatch() {
    let diag = Query::expect_invalid("function both(s t){s & t} both(a)");
    assert_eq!(diag.kind(), DiagnosticKind::ArgumentCountMismatch);
    insta::assert_snapshot!(diag.text(), @"wrong number of arguments: `both` takes 2 argument(s), found 1");
    assert_eq!(diag.related()[0].text(), "declared here");
}

#[test]
fn duplicate_parameter() {
    let diag = Query::expect_invalid("function f(s s){s}");
    assert_eq!(diag.kind(), DiagnosticKind::DuplicateParameter);
    insta::assert_snapshot!(diag.text(), @"`s` given more than once");
}

#[test]
fn duplicate_definitions() {
    let diag = Query::expect_invalid("function f(){check} function f(){mate}");
    assert_eq!(diag.kind(), DiagnosticKind::DuplicateDefinition);
    assert_eq!(diag.related()[0].text(), "first declared here");

    let diag = Query::expect_invalid("x=1 function x(){check}");
    assert_eq!(diag.kind(), DiagnosticKind::DuplicateDefinition);
    assert_eq!(diag.related()[0].text(), "declared as a variable here");

    assert_eq!(
        Query::expect_invalid_kind("function f(){check} f=1"),
        DiagnosticKind::DuplicateDefinition
    );
}

#[test]
fn nested_function() {
    let kind = Query::expect_invalid_kind("function outer(){function inner(){check}}");
    assert_eq!(kind, DiagnosticKind::NestedFunction);
}

#[test]
fn assign_to_parameter() {
    let diag = Query::expect_invalid("function f(s){s=1}");
    assert_eq!(diag.kind(), DiagnosticKind::AssignToParameter);
    insta::assert_snapshot!(diag.text(), @"cannot assign to parameter `s`");
}

#[test]
fn undefined_function() {
    let diag = Query::expect_invalid("g(1)");
    assert_eq!(diag.kind(), DiagnosticKind::UndefinedFunction);
    insta::assert_snapshot!(diag.text(), @"`g` is not a declared function");
}
