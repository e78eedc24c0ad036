//! The analyzer contract.
//!
//! An analyzer declares the node kinds it wants to see and inspects one node
//! at a time. It is stateless: everything it needs arrives through the
//! [`AnalysisContext`].

use crate::models::{Diagnostic, Range, RuleDescriptor};
use crate::semantic::SemanticModel;
use crate::syntax::{SyntaxKind, SyntaxNode};
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// A code-pattern detector.
pub trait Analyzer: Send + Sync {
    fn descriptor(&self) -> &'static RuleDescriptor;

    /// Node kinds this analyzer is invoked for.
    fn interests(&self) -> &'static [SyntaxKind];

    /// Inspect a node. Returns at most one diagnostic; `None` means the node
    /// does not match, or the analysis was cancelled.
    fn analyze(&self, node: SyntaxNode<'_>, ctx: &AnalysisContext<'_>) -> Option<Diagnostic>;
}

/// Services and settings for analyzing one file.
///
/// This is immutable; the `with_*` builders return updated copies.
#[derive(Clone)]
pub struct AnalysisContext<'a> {
    /// Semantic services for the file
    pub model: &'a dyn SemanticModel,
    /// Path reported in diagnostic locations
    pub file: &'a Path,
    pub cancel: CancellationToken,
    /// Whether nodes inside generated code are analyzed
    pub analyze_generated_code: bool,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(model: &'a dyn SemanticModel, file: &'a Path) -> Self {
        Self {
            model,
            file,
            cancel: CancellationToken::new(),
            analyze_generated_code: false,
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_generated_code(mut self, analyze: bool) -> Self {
        self.analyze_generated_code = analyze;
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// True when the node lies in generated code that should be skipped.
    pub fn is_suppressed(&self, node: SyntaxNode<'_>) -> bool {
        !self.analyze_generated_code && self.model.is_generated_code(node.id())
    }

    /// Build a diagnostic for `descriptor` at `range` in this file.
    pub fn diagnostic(&self, descriptor: &RuleDescriptor, range: Range, args: &[&str]) -> Diagnostic {
        Diagnostic::create(descriptor, self.file, range, args)
    }
}

impl std::fmt::Debug for AnalysisContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisContext")
            .field("file", &self.file)
            .field("cancelled", &self.cancel.is_cancelled())
            .field("analyze_generated_code", &self.analyze_generated_code)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::{InMemorySemanticModel, NoOpSemanticModel};
    use crate::syntax::SyntaxFactory;

    #[test]
    fn test_generated_code_suppression() {
        let f = SyntaxFactory::new();
        let expr = f.ident("x");
        let model = InMemorySemanticModel::new().mark_generated(expr.id);
        let path = Path::new("gen.cs");

        let ctx = AnalysisContext::new(&model, path);
        assert!(ctx.is_suppressed(SyntaxNode::Expr(&expr)));
        let ctx = ctx.with_generated_code(true);
        assert!(!ctx.is_suppressed(SyntaxNode::Expr(&expr)));
    }

    #[test]
    fn test_cancellation_is_shared() {
        let model = NoOpSemanticModel;
        let token = CancellationToken::new();
        let ctx = AnalysisContext::new(&model, Path::new("a.cs")).with_cancellation(token.clone());
        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }
}
