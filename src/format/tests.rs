//! Serializer and operator-template tests.

use crate::ast::builders::*;
use crate::ast::{Expr, Scalar};
use crate::error::ExprError;
use crate::format::{Environment, condition_to_sql, to_sql};

fn sql(e: &Expr) -> String {
    to_sql(e, None).unwrap()
}

// ==================== Serializer ====================

#[test]
fn test_null_node_renders_null() {
    assert_eq!(sql(&Expr::null()), "null");
    assert_eq!(sql(&Expr::Lit(Scalar::Null)), "null");
}

#[test]
fn test_list_renders_parenthesized_tuple() {
    let list = Expr::List(vec![1.into(), 2.into(), 3.into()]);
    assert_eq!(sql(&list), "(1,2,3)");
    assert_eq!(sql(&Expr::List(vec!["a".into()])), "('a')");
    assert_eq!(sql(&Expr::List(vec![])), "()");
}

#[test]
fn test_raw_passes_through_verbatim() {
    assert_eq!(sql(&Expr::raw("a=b")), "a=b");
}

#[test]
fn test_literals_go_through_the_encoder() {
    assert_eq!(sql(&"it's".into()), "'it''s'");
    assert_eq!(sql(&123.into()), "123");
    assert_eq!(sql(&true.into()), "true");
}

#[test]
fn test_condition_empty_sentinels_give_none() {
    assert_eq!(condition_to_sql(&Expr::null(), None).unwrap(), None);
    assert_eq!(condition_to_sql(&Expr::raw(""), None).unwrap(), None);
}

#[test]
fn test_condition_raw_string_returned_unchanged() {
    assert_eq!(
        condition_to_sql(&Expr::raw("a=b"), None).unwrap(),
        Some("a=b".to_string())
    );
}

#[test]
fn test_condition_rejects_bare_literals() {
    let err = condition_to_sql(&5.into(), None).unwrap_err();
    match err {
        ExprError::InvalidExpression(repr) => assert!(repr.contains('5'), "got {repr}"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(condition_to_sql(&Expr::List(vec![1.into()]), None).is_err());
}

// ==================== Operator templates ====================

#[test]
fn test_field_with_and_without_alias() {
    assert_eq!(sql(&field("id", Some("customer"))), "customer.id");
    assert_eq!(sql(&field("id", None)), "id");
}

#[test]
fn test_comparisons() {
    let a = || field("a", None);
    assert_eq!(sql(&eq(a(), 1)), "(a=1)");
    assert_eq!(sql(&eq(a(), "1")), "(a='1')");
    assert_eq!(sql(&ne(a(), 1)), "(a<>1)");
    assert_eq!(sql(&gt(a(), field("b", None))), "(a>b)");
    assert_eq!(sql(&ge(a(), field("b", None))), "(a>=b)");
    assert_eq!(sql(&lt(a(), field("b", None))), "(a<b)");
    assert_eq!(sql(&le(a(), field("b", None))), "(a<=b)");
}

#[test]
fn test_is_null() {
    assert_eq!(sql(&is_null(field("f", None))), "(f is null)");
}

#[test]
fn test_not_and_minus() {
    assert_eq!(sql(&not(field("a", None))), "not(a)");
    assert_eq!(sql(&minus(field("a", None))), "-(a)");
}

#[test]
fn test_arithmetic() {
    let abc = || vec![field("a", None), field("b", None), field("c", None)];
    assert_eq!(sql(&add(abc())), "(a+b+c)");
    assert_eq!(sql(&concat(abc())), "(a+b+c)");
    assert_eq!(sql(&sub(field("a", None), field("b", None))), "(a-b)");
    assert_eq!(sql(&div(field("a", None), 2)), "(a/2)");
}

#[test]
fn test_aggregates() {
    assert_eq!(sql(&sum(field("qty", None))), "sum(qty)");
    assert_eq!(sql(&min(field("qty", None))), "min(qty)");
    assert_eq!(sql(&max(field("qty", None))), "max(qty)");
}

#[test]
fn test_distinct_has_no_enclosing_parens() {
    let e = distinct(vec![field("a", None), field("b", None)]);
    assert_eq!(sql(&e), "distinct a,b");
}

#[test]
fn test_is_in() {
    let e = is_in(field("el", None), vec![1.into(), 2.into(), 3.into(), 4.into()]);
    assert_eq!(sql(&e), "(el in (1,2,3,4))");
    // single-element and string lists keep the tuple shape
    let e = is_in(field("el", None), vec!["x".into()]);
    assert_eq!(sql(&e), "(el in ('x'))");
}

#[test]
fn test_test_mask() {
    let e = test_mask(field("a", None), 5, 1);
    assert_eq!(sql(&e), "((a & 5)=1)");
}

#[test]
fn test_between() {
    let e = between(field("a", None), 1, 10);
    assert_eq!(sql(&e), "(a between 1 and 10)");
}

#[test]
fn test_like() {
    let e = like(field("name", None), "smith%");
    assert_eq!(sql(&e), "(name like 'smith%')");
}

#[test]
fn test_substring_and_convert() {
    let e = substring(field("a", None), 1, 2);
    assert_eq!(sql(&e), "SUBSTRING(a,1,2)");
    assert_eq!(sql(&convert_to_int(field("a", None))), "CONVERT(int,a)");
    assert_eq!(
        sql(&convert_to_string(field("a", None), 10)),
        "CONVERT(varchar(10),a)"
    );
}

#[test]
fn test_bit_tests_emit_balanced_parens() {
    let e = bit_set(field("a", None), 3);
    assert_eq!(sql(&e), "((a&(1<<3))<>0)");
    let e = bit_clear(field("a", None), 3);
    assert_eq!(sql(&e), "((a&(1<<3))=0)");
}

// ==================== Conjunctions ====================

#[test]
fn test_join_and_elides_empty_conditions() {
    let a = || eq(field("a", None), 1);
    let b = || gt(field("b", None), 2);
    let padded = join_and(vec![a(), Expr::raw(""), b(), Expr::null()]);
    let plain = join_and(vec![a(), b()]);
    assert_eq!(sql(&padded), sql(&plain));
    assert_eq!(sql(&plain), "((a=1) and (b>2))");
}

#[test]
fn test_join_or() {
    let e = join_or(vec![eq(field("a", None), 1), Expr::raw("b=2")]);
    assert_eq!(sql(&e), "((a=1) or b=2)");
}

#[test]
fn test_all_empty_conjunction_is_itself_empty() {
    let e = join_and(vec![Expr::null(), Expr::raw("")]);
    assert_eq!(sql(&e), "");
    assert_eq!(condition_to_sql(&e, None).unwrap(), None);
    // and it composes away one level up
    let outer = join_and(vec![eq(field("a", None), 1), e]);
    assert_eq!(sql(&outer), "((a=1))");
}

#[test]
fn test_nested_conditions() {
    let e = join_and(vec![
        join_or(vec![eq(field("a", None), 1), eq(field("a", None), 2)]),
        not(is_null(field("b", None))),
    ]);
    assert_eq!(sql(&e), "(((a=1) or (a=2)) and not((b is null)))");
}

// ==================== Environment ====================

#[test]
fn test_context_resolves_from_environment() {
    let mut env = Environment::new();
    env.set("user", "sa");
    env.set("limit", 5);
    let e = eq(field("owner", None), context("user"));
    assert_eq!(to_sql(&e, Some(&env)).unwrap(), "(owner='sa')");
    assert_eq!(to_sql(&context("limit"), Some(&env)).unwrap(), "5");
}

#[test]
fn test_context_without_binding_renders_null() {
    let env = Environment::new();
    assert_eq!(to_sql(&context("missing"), Some(&env)).unwrap(), "null");
    assert_eq!(to_sql(&context("missing"), None).unwrap(), "null");
}
