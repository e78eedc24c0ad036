mod common;

use common::*;
use lintscope_api::models::{Symbol, SymbolInfo};
use lintscope_api::semantic::InMemorySemanticModel;
use lintscope_api::syntax::{BinaryOp, Expr, InvocationView, SyntaxFactory, SyntaxNode};
use lintscope_api::Analyzer;
use lintscope_csharp::of_type::chain::{ChainMatch, ChainShapeMatcher};
use lintscope_csharp::of_type::try_detect;
use lintscope_csharp::OfTypeSingleAnalyzer;
use rayon::prelude::*;
use std::sync::Arc;

/// `seq.Where(x => x is <ty>).Select(x => (<ty>)x).<terminal>(args)`
fn where_select(f: &SyntaxFactory, ty: &str, terminal: &str, args: Vec<Expr>) -> Expr {
    let filtered = f.method_call(
        f.ident("seq"),
        "Where",
        vec![f.arg(f.lambda(&["x"], f.is_type(f.ident("x"), ty)))],
    );
    let projected = f.method_call(
        filtered,
        "Select",
        vec![f.arg(f.lambda(&["x"], f.cast(ty, f.ident("x"))))],
    );
    let args = args.into_iter().map(|a| f.arg(a)).collect();
    f.method_call(projected, terminal, args)
}

#[test]
fn test_where_select_single_is_flagged() {
    let f = SyntaxFactory::new();
    let call = where_select(&f, "Foo", "Single", vec![]);
    let model = InMemorySemanticModel::new()
        .bind_method(call.id, linq_method("Enumerable", "Single"));

    let diag = try_detect(&call, &ctx(&model)).unwrap();
    assert_eq!(diag.rule_id, "LS0002");
    assert_eq!(diag.message, "Replace with 'OfType<Foo>().Single()'");
    assert_eq!(diag.location.range, call.range);
}

#[test]
fn test_select_as_where_not_null_is_flagged() {
    let f = SyntaxFactory::new();
    let projected = f.method_call(
        f.ident("seq"),
        "Select",
        vec![f.arg(f.lambda(&["x"], f.as_type(f.ident("x"), "Bar")))],
    );
    let filtered = f.method_call(
        projected,
        "Where",
        vec![f.arg(f.lambda(
            &["y"],
            f.binary(BinaryOp::NotEquals, f.ident("y"), f.null()),
        ))],
    );
    let call = f.method_call(filtered, "Single", vec![]);
    let model = InMemorySemanticModel::new()
        .bind_method(call.id, linq_method("Queryable", "Single"));

    let diag = try_detect(&call, &ctx(&model)).unwrap();
    assert_eq!(diag.message, "Replace with 'OfType<Bar>().Single()'");
}

#[test]
fn test_single_with_predicate_not_flagged() {
    let f = SyntaxFactory::new();
    let call = where_select(&f, "Foo", "Single", vec![f.ident("predicate")]);
    let model = InMemorySemanticModel::new()
        .bind_method(call.id, linq_method("Enumerable", "Single"));

    assert!(try_detect(&call, &ctx(&model)).is_none());
}

#[test]
fn test_other_terminals_not_flagged() {
    let f = SyntaxFactory::new();
    for name in ["First", "SingleOrDefault", "Any"] {
        let call = where_select(&f, "Foo", name, vec![]);
        let model = InMemorySemanticModel::new()
            .bind_method(call.id, linq_method("Enumerable", name));
        assert!(try_detect(&call, &ctx(&model)).is_none(), "{}", name);
    }
}

#[test]
fn test_user_defined_single_not_flagged() {
    let f = SyntaxFactory::new();
    let call = where_select(&f, "Foo", "Single", vec![]);
    let own = lintscope_api::models::MethodSymbol::new(ty("Demo.SeqExtensions"), "Single", ty("T"))
        .as_extension();
    let model = InMemorySemanticModel::new().bind_method(call.id, own);

    assert!(try_detect(&call, &ctx(&model)).is_none());
}

#[test]
fn test_unresolved_call_not_flagged() {
    let f = SyntaxFactory::new();
    let call = where_select(&f, "Foo", "Single", vec![]);
    let model = InMemorySemanticModel::new();

    assert!(try_detect(&call, &ctx(&model)).is_none());
}

#[test]
fn test_ambiguous_binding_uses_query_operator_candidate() {
    let f = SyntaxFactory::new();
    let call = where_select(&f, "Foo", "Single", vec![]);
    let own = lintscope_api::models::MethodSymbol::new(ty("Demo.SeqExtensions"), "Single", ty("T"));
    let candidates = vec![
        Symbol::Method(own.clone()),
        Symbol::Method(linq_method("Enumerable", "Single")),
    ];
    let model = InMemorySemanticModel::new().bind(call.id, SymbolInfo::ambiguous(candidates));
    assert!(try_detect(&call, &ctx(&model)).is_some());

    let model = InMemorySemanticModel::new()
        .bind(call.id, SymbolInfo::ambiguous(vec![Symbol::Method(own)]));
    assert!(try_detect(&call, &ctx(&model)).is_none());
}

#[test]
fn test_generated_code_skipped() {
    let f = SyntaxFactory::new();
    let call = where_select(&f, "Foo", "Single", vec![]);
    let model = InMemorySemanticModel::new()
        .bind_method(call.id, linq_method("Enumerable", "Single"))
        .mark_generated(call.id);

    assert!(try_detect(&call, &ctx(&model)).is_none());
}

struct NeverMatches;

impl ChainShapeMatcher for NeverMatches {
    fn match_chain<'a>(&self, _terminal: InvocationView<'a>) -> Option<ChainMatch<'a>> {
        None
    }
}

#[test]
fn test_custom_chain_matcher() {
    let f = SyntaxFactory::new();
    let call = where_select(&f, "Foo", "Single", vec![]);
    let model = InMemorySemanticModel::new()
        .bind_method(call.id, linq_method("Enumerable", "Single"));

    let analyzer = OfTypeSingleAnalyzer::with_matcher(Arc::new(NeverMatches));
    assert!(analyzer.analyze(SyntaxNode::Expr(&call), &ctx(&model)).is_none());
    assert!(OfTypeSingleAnalyzer::new()
        .analyze(SyntaxNode::Expr(&call), &ctx(&model))
        .is_some());
}

#[test]
fn test_parallel_detection_matches_sequential() {
    let f = SyntaxFactory::new();
    let mut model = InMemorySemanticModel::new();
    let mut calls = Vec::new();
    for i in 0..64 {
        let terminal = if i % 3 == 0 { "First" } else { "Single" };
        let call = where_select(&f, &format!("T{}", i), terminal, vec![]);
        model = model.bind_method(call.id, linq_method("Enumerable", terminal));
        calls.push(call);
    }

    let sequential: Vec<_> = calls.iter().filter_map(|c| try_detect(c, &ctx(&model))).collect();
    let parallel: Vec<_> = calls
        .par_iter()
        .filter_map(|c| try_detect(c, &ctx(&model)))
        .collect();

    assert_eq!(sequential.len(), 42);
    assert_eq!(sequential, parallel);
}
