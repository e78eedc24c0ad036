//! Forwarding and call-target validation.

use lintscope_api::models::MethodSymbol;
use lintscope_api::syntax::{Expr, ExprKind, InvocationView, Parameter};
use lintscope_api::SemanticModel;
use tracing::trace;

/// True if evaluating `callee` has no side effects: a plain identifier, or a
/// member-access chain rooted at one (`a.b.C`). Generic names are excluded.
pub fn is_simple_target(callee: &Expr) -> bool {
    match &callee.kind {
        ExprKind::Identifier(_) => true,
        ExprKind::MemberAccess { target, .. } => is_simple_target(target),
        _ => false,
    }
}

/// Evidence that an invocation passes the anonymous function's parameters
/// straight through to a single resolved method.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardingProof {
    pub method: MethodSymbol,
}

impl ForwardingProof {
    /// Attempt to prove that `invocation` forwards `parameters` verbatim.
    pub fn establish(
        parameters: &[Parameter],
        invocation: InvocationView<'_>,
        model: &dyn SemanticModel,
    ) -> Option<Self> {
        if !is_simple_target(invocation.callee()) {
            trace!(node = ?invocation.id(), "callee is not a simple target");
            return None;
        }

        let info = model.symbol_info(invocation.id());
        let Some(method) = info.method() else {
            trace!(node = ?invocation.id(), "invocation does not bind to a single method");
            return None;
        };

        if method.has_call_site_sensitive_parameters() {
            trace!(method = %method.id, "method has ref, out or params parameters");
            return None;
        }

        let arguments = invocation.arguments();
        if method.parameters.len() != arguments.len() || parameters.len() != arguments.len() {
            trace!(method = %method.id, "argument count differs from parameter count");
            return None;
        }

        let forwarded = arguments
            .iter()
            .zip(parameters)
            .all(|(arg, param)| arg.expr.to_string() == param.name.as_str());
        if !forwarded {
            trace!(method = %method.id, "arguments are not the parameters in order");
            return None;
        }

        Some(Self {
            method: method.clone(),
        })
    }
}
