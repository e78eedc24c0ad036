//! Shared fixtures for the analyzer behavior tests.
#![allow(dead_code)]

use lintscope_api::models::{Conversion, MethodSymbol, ParameterSymbol, TypeRef};
use lintscope_api::semantic::InMemorySemanticModel;
use lintscope_api::syntax::NodeId;
use lintscope_api::AnalysisContext;
use std::path::Path;

pub const FILE: &str = "Program.cs";

pub fn ctx(model: &InMemorySemanticModel) -> AnalysisContext<'_> {
    AnalysisContext::new(model, Path::new(FILE))
}

pub fn ty(name: &str) -> TypeRef {
    TypeRef::named(name)
}

pub fn int() -> TypeRef {
    ty("System.Int32")
}

pub fn object() -> TypeRef {
    ty("System.Object")
}

pub fn util() -> TypeRef {
    ty("Demo.Util")
}

/// `static TReturn Demo.Util.<name>(T1 p0, T2 p1, ...)`
pub fn util_method(name: &str, params: &[TypeRef], ret: TypeRef) -> MethodSymbol {
    params
        .iter()
        .enumerate()
        .fold(MethodSymbol::new(util(), name, ret).as_static(), |m, (i, t)| {
            m.with_parameter(ParameterSymbol::new(format!("p{}", i), t.clone()))
        })
}

/// A `System.Func<..., TResult>` (or `System.Action<...>` for void) delegate
/// type and its invoke method.
pub fn delegate(params: &[TypeRef], ret: TypeRef) -> (TypeRef, MethodSymbol) {
    let mut arguments = params.to_vec();
    let ty = if ret == TypeRef::Void {
        TypeRef::generic("System.Action", arguments)
    } else {
        arguments.push(ret.clone());
        TypeRef::generic("System.Func", arguments)
    };
    let invoke = params
        .iter()
        .enumerate()
        .fold(MethodSymbol::new(ty.clone(), "Invoke", ret), |m, (i, t)| {
            m.with_parameter(ParameterSymbol::new(format!("arg{}", i + 1), t.clone()))
        });
    (ty, invoke)
}

/// Model in which `call` binds to `method`, returns through an identity
/// conversion, and `candidate` sits where `accepted` is expected.
pub fn forwarding_model(
    candidate: NodeId,
    call: NodeId,
    method: &MethodSymbol,
    accepted: &(TypeRef, MethodSymbol),
) -> InMemorySemanticModel {
    InMemorySemanticModel::new()
        .add_class(util(), None)
        .add_method(method.clone())
        .add_delegate(accepted.0.clone(), accepted.1.clone())
        .bind_method(call, method.clone())
        .conversion(call, candidate, Conversion::identity())
        .accept(candidate, vec![accepted.0.clone()])
}

/// `static T System.Linq.<class>.<name>(IEnumerable<T> source)`
pub fn linq_method(class: &str, name: &str) -> MethodSymbol {
    let source = TypeRef::generic("System.Collections.Generic.IEnumerable", vec![ty("T")]);
    MethodSymbol::new(ty(&format!("System.Linq.{}", class)), name, ty("T"))
        .with_type_parameter("TSource")
        .with_parameter(ParameterSymbol::new("source", source))
        .as_extension()
}
