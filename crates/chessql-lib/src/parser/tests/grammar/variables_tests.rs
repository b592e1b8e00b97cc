use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::{FilterType, Query};

#[test]
fn assignment_and_reference() {
    let res = Query::expect_valid_types("x = K --> q  x > 0");
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      Assign :: Logical
        Variable x :: Set
        AttackArrow :: Set
          PieceDesignator K :: Set
          PieceDesignator q :: Set
      GT :: Logical
        Variable x :: Set
        Integer 0 :: Numeric
    ");
}

#[test]
fn type_is_fixed_by_first_assignment() {
    let diag = Query::expect_invalid("x=1 x=a");
    assert_eq!(diag.kind(), DiagnosticKind::VariableTypeMismatch);
    insta::assert_snapshot!(diag.text(), @"variable changes type: `x` is Numeric, not Set");
    assert_eq!(diag.related()[0].text(), "type fixed here");
}

#[test]
fn reassignment_with_same_type() {
    let query = Query::expect_valid("x = 1  x = ply");
    let x = query.definitions().get("x").unwrap();
    assert_eq!(x.ty, Some(FilterType::Numeric));
    assert!(x.bound);
}

#[test]
fn compound_assignment() {
    let res = Query::expect_valid_dump("x = 1  x += ply  x *= #a  x %= 2");
    insta::assert_snapshot!(res, @r"
    Cql
      Assign
        Variable x
        Integer 1
      PlusAssign
        Variable x
        Ply
      MultiplyAssign
        Variable x
        Cardinality
          PieceDesignator a
      ModulusAssign
        Variable x
        Integer 2
    ");
}

#[test]
fn compound_assignment_needs_numeric() {
    let diag = Query::expect_invalid("x=a x+=1");
    assert_eq!(diag.kind(), DiagnosticKind::UnexpectedType);
    insta::assert_snapshot!(diag.text(), @"unexpected filter type: `+=` needs a Numeric variable, `x` is Set");

    assert_eq!(
        Query::expect_invalid_kind("x+=1"),
        DiagnosticKind::UndefinedName
    );
    assert_eq!(
        Query::expect_invalid_kind(r#"x=1 x-="s""#),
        DiagnosticKind::UnexpectedType
    );
}

#[test]
fn binding_queries() {
    let res = Query::expect_valid_dump("x=1 unbind x isbound x isunbound x");
    insta::assert_snapshot!(res, @r"
    Cql
      Assign
        Variable x
        Integer 1
      Unbind
        Variable x
      IsBound
        Variable x
      IsUnbound
        Variable x
    ");
}

#[test]
fn reassignment_rebinds() {
    let query = Query::expect_valid("x=1 unbind x x=2");
    assert!(query.definitions().get("x").unwrap().bound);
}

#[test]
fn unbind_undefined() {
    let diag = Query::expect_invalid("unbind x");
    assert_eq!(diag.kind(), DiagnosticKind::UndefinedName);
    insta::assert_snapshot!(diag.text(), @"`x` is not defined");
}

#[test]
fn dictionary_declaration_with_entry() {
    let res = Query::expect_valid_dump(r#"dictionary v["key"]="value" unbind v"#);
    insta::assert_snapshot!(res, @r#"
    Cql
      DictionaryDeclaration v
        Assign
          DictionaryAccess v
            String "key"
          String "value"
      Unbind
        Dictionary v
    "#);
}

#[test]
fn dictionary_access_types() {
    let res = Query::expect_valid_types(indoc! {"
        dictionary v
        v[1] = 2
        v[ply] > 0
    "});
    insta::assert_snapshot!(res, @r"
    Cql :: Logical
      DictionaryDeclaration v :: Logical
      Assign :: Logical
        DictionaryAccess v :: Numeric
          Integer 1 :: Numeric
        Integer 2 :: Numeric
      GT :: Logical
        DictionaryAccess v :: Numeric
          Ply :: Numeric
        Integer 0 :: Numeric
    ");
}

#[test]
fn keyed_unbind() {
    let diag = Query::expect_invalid(r#"dictionary v["key"]="value" unbind v["key"]"#);
    assert_eq!(diag.kind(), DiagnosticKind::KeyedUnbind);
}

#[test]
fn dictionary_key_type_is_fixed() {
    let diag = Query::expect_invalid(r#"dictionary v v[1]="s" v["k"]="t""#);
    assert_eq!(diag.kind(), DiagnosticKind::VariableTypeMismatch);
    insta::assert_snapshot!(diag.text(), @"variable changes type: keys of `v` are Numeric, not String");
}

#[test]
fn dictionary_keys_are_numeric_or_string() {
    let kind = Query::expect_invalid_kind("dictionary v v[check]=1");
    assert_eq!(kind, DiagnosticKind::UnexpectedType);
}

#[test]
fn dictionary_without_key() {
    let diag = Query::expect_invalid("dictionary v v > 0");
    assert_eq!(diag.kind(), DiagnosticKind::DictionaryWithoutKey);
    insta::assert_snapshot!(diag.text(), @"dictionary `v` used without a key");
}

#[test]
fn keyed_assignment_needs_a_dictionary() {
    let kind = Query::expect_invalid_kind("x=1 x[1]=2");
    assert_eq!(kind, DiagnosticKind::NotADictionary);
}

#[test]
fn dictionary_name_conflicts_with_variable() {
    let kind = Query::expect_invalid_kind("x=1 dictionary x");
    assert_eq!(kind, DiagnosticKind::DuplicateDefinition);
}

#[test]
fn read_before_any_entry() {
    let diag = Query::expect_invalid("dictionary v v[1] > 0");
    assert_eq!(diag.kind(), DiagnosticKind::UnexpectedType);
    insta::assert_snapshot!(diag.text(), @"unexpected filter type: dictionary `v` has no entries yet");
}
