//! OfType then Single (`LS0002`).
//!
//! Flags `seq.Where(x => x is Foo).Select(x => (Foo)x).Single()`, which is
//! `seq.OfType<Foo>().Single()` spelled out by hand.

pub mod chain;

use crate::rules::REPLACE_WITH_OF_TYPE_SINGLE;
use chain::{ChainShapeMatcher, SelectChainMatcher};
use lintscope_api::models::{Diagnostic, MethodSymbol, RuleDescriptor, TypeRef};
use lintscope_api::syntax::{Expr, SyntaxKind, SyntaxNode};
use lintscope_api::{AnalysisContext, Analyzer};
use std::sync::Arc;
use tracing::{debug, trace};

const LINQ_NAMESPACE: &str = "System.Linq";
const QUERY_EXTENSION_CLASSES: [&str; 3] = ["Enumerable", "ParallelEnumerable", "Queryable"];
const TERMINAL: &str = "Single";

/// True for the static classes declaring the standard query operators.
pub fn is_query_extension_class(ty: &TypeRef) -> bool {
    ty.namespace() == Some(LINQ_NAMESPACE)
        && ty
            .simple_name()
            .is_some_and(|name| QUERY_EXTENSION_CLASSES.contains(&name))
}

/// True if the method is a query operator `Single`, which also has an
/// overload taking a predicate.
pub fn has_predicate_version(method: &MethodSymbol) -> bool {
    is_query_extension_class(&method.containing_type) && method.name == TERMINAL
}

/// Detects hand-written type filters ending in `.Single()`.
#[derive(Clone)]
pub struct OfTypeSingleAnalyzer {
    matcher: Arc<dyn ChainShapeMatcher>,
}

impl OfTypeSingleAnalyzer {
    pub fn new() -> Self {
        Self::with_matcher(Arc::new(SelectChainMatcher))
    }

    pub fn with_matcher(matcher: Arc<dyn ChainShapeMatcher>) -> Self {
        Self { matcher }
    }

    /// Check one invocation expression.
    pub fn try_detect(&self, expr: &Expr, ctx: &AnalysisContext<'_>) -> Option<Diagnostic> {
        let call = expr.as_invocation()?;
        if call.member_name() != Some(TERMINAL) || call.receiver().is_none() {
            return None;
        }
        if !call.arguments().is_empty() {
            trace!(node = ?expr.id, "Single takes a predicate already");
            return None;
        }
        if ctx.is_cancelled() || ctx.is_suppressed(SyntaxNode::Expr(expr)) {
            return None;
        }

        let info = ctx.model.symbol_info(call.id());
        let resolved = match info.method() {
            Some(method) => Some(method),
            None => info.candidate_methods().find(|m| has_predicate_version(m)),
        };
        let Some(method) = resolved.filter(|m| has_predicate_version(m)) else {
            trace!(node = ?expr.id, "not a query operator Single");
            return None;
        };

        let Some(matched) = self.matcher.match_chain(call) else {
            trace!(node = ?expr.id, "receiver is not a type-filtering chain");
            return None;
        };

        debug!(
            node = ?expr.id,
            method = %method.id,
            element_type = %matched.element_type,
            "type filter can be OfType"
        );
        Some(ctx.diagnostic(
            &REPLACE_WITH_OF_TYPE_SINGLE,
            expr.range,
            &[matched.element_type.text.as_str()],
        ))
    }
}

impl Default for OfTypeSingleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for OfTypeSingleAnalyzer {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &REPLACE_WITH_OF_TYPE_SINGLE
    }

    fn interests(&self) -> &'static [SyntaxKind] {
        &[SyntaxKind::InvocationExpression]
    }

    fn analyze(&self, node: SyntaxNode<'_>, ctx: &AnalysisContext<'_>) -> Option<Diagnostic> {
        self.try_detect(node.as_expr()?, ctx)
    }
}

/// Check one invocation with the default chain matcher.
pub fn try_detect(expr: &Expr, ctx: &AnalysisContext<'_>) -> Option<Diagnostic> {
    OfTypeSingleAnalyzer::new().try_detect(expr, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(containing: &str, name: &str) -> MethodSymbol {
        MethodSymbol::new(TypeRef::named(containing), name, TypeRef::named("T")).as_extension()
    }

    #[test]
    fn test_query_extension_classes() {
        for class in ["Enumerable", "ParallelEnumerable", "Queryable"] {
            assert!(is_query_extension_class(&TypeRef::named(format!("System.Linq.{}", class))));
        }
        assert!(!is_query_extension_class(&TypeRef::named("System.Linq.Lookup")));
        assert!(!is_query_extension_class(&TypeRef::named("MyLinq.Enumerable")));
        assert!(!is_query_extension_class(&TypeRef::named("Enumerable")));
    }

    #[test]
    fn test_predicate_version_requires_exact_name() {
        assert!(has_predicate_version(&method("System.Linq.Enumerable", "Single")));
        assert!(!has_predicate_version(&method("System.Linq.Enumerable", "SingleOrDefault")));
        assert!(!has_predicate_version(&method("System.Linq.Enumerable", "single")));
        assert!(!has_predicate_version(&method("Demo.Extensions", "Single")));
    }
}
