//! Closure to method group (`LS0001`).
//!
//! Flags `(a, b) => f(a, b)` and `delegate (int a) { return f(a); }` where
//! the anonymous function can be replaced by `f` itself.
//!
//! The proof runs in three stages, each free to bail out:
//! 1. [`body::reduce_body`] finds the single forwarded call
//! 2. [`forwarding::ForwardingProof`] checks the call target and arguments
//! 3. [`delegate::DelegateCompatibility`] checks the delegate conversion

pub mod body;
pub mod delegate;
pub mod forwarding;

use crate::rules::{ANONYMOUS_METHOD_MESSAGE, CONVERT_CLOSURE_TO_METHOD_GROUP, LAMBDA_MESSAGE};
use delegate::DelegateCompatibility;
use forwarding::ForwardingProof;
use lintscope_api::models::{Diagnostic, RuleDescriptor};
use lintscope_api::syntax::{CandidateKind, Expr, SyntaxKind, SyntaxNode};
use lintscope_api::{AnalysisContext, Analyzer};
use tracing::debug;

/// Detects anonymous functions that only forward to one method.
#[derive(Debug, Default, Clone, Copy)]
pub struct MethodGroupAnalyzer;

impl MethodGroupAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for MethodGroupAnalyzer {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &CONVERT_CLOSURE_TO_METHOD_GROUP
    }

    fn interests(&self) -> &'static [SyntaxKind] {
        &[
            SyntaxKind::ParenthesizedLambdaExpression,
            SyntaxKind::SimpleLambdaExpression,
            SyntaxKind::AnonymousMethodExpression,
        ]
    }

    fn analyze(&self, node: SyntaxNode<'_>, ctx: &AnalysisContext<'_>) -> Option<Diagnostic> {
        try_detect(node.as_expr()?, ctx)
    }
}

/// Check one anonymous function expression.
pub fn try_detect(expr: &Expr, ctx: &AnalysisContext<'_>) -> Option<Diagnostic> {
    let func = expr.as_anonymous_function()?;
    if ctx.is_cancelled() || ctx.is_suppressed(SyntaxNode::Expr(expr)) {
        return None;
    }

    // `delegate { ... }` accepts any parameter list, so forwarding cannot be shown.
    let Some(parameters) = func.parameters.as_deref() else {
        debug!(node = ?expr.id, "anonymous method without parameter list");
        return None;
    };

    let invocation = body::reduce_body(&func.body)?;

    let proof = ForwardingProof::establish(parameters, invocation, ctx.model)?;
    if ctx.is_cancelled() {
        return None;
    }

    let compatible = DelegateCompatibility::new(ctx, expr.id, &proof.method).verify(invocation.id());
    if !compatible {
        debug!(node = ?expr.id, method = %proof.method.id, "delegate conversion not provably safe");
        return None;
    }

    let message = match func.candidate_kind() {
        CandidateKind::AnonymousDelegate => ANONYMOUS_METHOD_MESSAGE,
        CandidateKind::LambdaWithExpressionBody | CandidateKind::LambdaWithBlockBody => {
            LAMBDA_MESSAGE
        }
    };
    debug!(node = ?expr.id, method = %proof.method.id, "closure can be a method group");
    Some(ctx.diagnostic(&CONVERT_CLOSURE_TO_METHOD_GROUP, expr.range, &[message]))
}
