//! Delegate compatibility.
//!
//! Proves that replacing an anonymous function with a reference to the
//! forwarded method converts to the same delegate type and resolves to the
//! same overload.

use lintscope_api::models::{MethodSymbol, ParameterSymbol, TypeRef};
use lintscope_api::syntax::NodeId;
use lintscope_api::AnalysisContext;
use tracing::trace;

/// A delegate type accepted at the candidate position, with its invoke signature.
#[derive(Debug, Clone)]
pub struct AcceptedDelegate {
    pub ty: TypeRef,
    pub invoke: MethodSymbol,
}

/// Parameter lists match on count, passing mode and type. Names are ignored.
pub fn have_same_signature(a: &[ParameterSymbol], b: &[ParameterSymbol]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x.ref_kind == y.ref_kind && x.ty == y.ty)
}

/// Checks the forwarded `method` against the delegate types acceptable where
/// the anonymous function `candidate` sits.
pub struct DelegateCompatibility<'c, 'a> {
    ctx: &'c AnalysisContext<'a>,
    candidate: NodeId,
    method: &'c MethodSymbol,
}

impl<'c, 'a> DelegateCompatibility<'c, 'a> {
    pub fn new(ctx: &'c AnalysisContext<'a>, candidate: NodeId, method: &'c MethodSymbol) -> Self {
        Self {
            ctx,
            candidate,
            method,
        }
    }

    /// Run every check in order; `false` as soon as one fails or the
    /// analysis is cancelled.
    pub fn verify(&self, invocation: NodeId) -> bool {
        if !self.conversion_preserves_representation(invocation) {
            trace!(node = ?self.candidate, "return conversion changes representation");
            return false;
        }

        let acceptable = self.ctx.model.acceptable_types(self.candidate);
        let Some(delegates) = self.accepted_delegates(&acceptable) else {
            return false;
        };

        if self.is_ambiguous(&delegates) {
            trace!(method = %self.method.id, "method group is ambiguous at this position");
            return false;
        }

        if !self.has_compatible_return(&delegates) {
            trace!(method = %self.method.id, "no accepted delegate has a compatible return type");
            return false;
        }

        if !self.declaring_delegate_is_accepted(&acceptable) {
            trace!(method = %self.method.id, "declaring delegate is not accepted here");
            return false;
        }

        !self.ctx.is_cancelled()
    }

    /// The invocation's value must flow into the delegate return slot without
    /// an explicit, boxing, numeric or user-defined conversion.
    pub fn conversion_preserves_representation(&self, invocation: NodeId) -> bool {
        self.ctx
            .model
            .classify_conversion(invocation, self.candidate)
            .preserves_representation()
    }

    /// Acceptable types that are delegates, paired with their invoke method.
    /// `None` when cancelled.
    pub fn accepted_delegates(&self, acceptable: &[TypeRef]) -> Option<Vec<AcceptedDelegate>> {
        let mut delegates = Vec::new();
        for ty in acceptable {
            if self.ctx.is_cancelled() {
                return None;
            }
            if !self.ctx.model.is_delegate_type(ty) {
                continue;
            }
            if let Some(invoke) = self.ctx.model.delegate_invoke_method(ty) {
                delegates.push(AcceptedDelegate {
                    ty: ty.clone(),
                    invoke,
                });
            }
        }
        Some(delegates)
    }

    /// True if another member of the method group also matches an accepted
    /// invoke signature. Cancellation counts as ambiguous.
    pub fn is_ambiguous(&self, delegates: &[AcceptedDelegate]) -> bool {
        for delegate in delegates {
            for other in self.ctx.model.method_group(self.method) {
                if self.ctx.is_cancelled() {
                    return true;
                }
                if other.id == self.method.id {
                    continue;
                }
                if have_same_signature(&other.parameters, &delegate.invoke.parameters) {
                    trace!(
                        other = %other.id,
                        delegate = %delegate.ty,
                        "sibling overload matches invoke signature"
                    );
                    return true;
                }
            }
        }
        false
    }

    /// Some accepted delegate returns the method's return type or one of its
    /// base types.
    pub fn has_compatible_return(&self, delegates: &[AcceptedDelegate]) -> bool {
        let returned = &self.method.return_type;
        delegates.iter().any(|delegate| {
            let expected = &delegate.invoke.return_type;
            if returned == expected {
                return true;
            }
            for base in self.ctx.model.walk_base_types(returned) {
                if self.ctx.is_cancelled() {
                    return false;
                }
                if &base == expected {
                    return true;
                }
            }
            false
        })
    }

    /// A delegate's own invoke method may only be referenced where that
    /// delegate type is expected.
    pub fn declaring_delegate_is_accepted(&self, acceptable: &[TypeRef]) -> bool {
        let containing = &self.method.containing_type;
        !self.ctx.model.is_delegate_type(containing) || acceptable.contains(containing)
    }
}
