//! The analysis driver.
//!
//! Walks a syntax tree in pre-order and hands every node to the enabled
//! analyzers interested in its kind. Nodes are independent, so the walk fans
//! out over rayon when the options allow it.

use crate::error::{LintscopeError, Result};
use crate::options::AnalysisOptions;
use crate::registry::AnalyzerRegistry;
use crate::sink::{CollectingSink, DiagnosticSink};
use lintscope_api::{
    AnalysisContext, Analyzer, Diagnostic, SemanticModel, SyntaxKind, SyntaxNode, SyntaxTree,
};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct AnalysisDriver {
    registry: AnalyzerRegistry,
    options: AnalysisOptions,
}

impl AnalysisDriver {
    /// Fails if `options` configure a rule the registry does not know.
    pub fn new(registry: AnalyzerRegistry, options: AnalysisOptions) -> Result<Self> {
        options.validate(&registry)?;
        Ok(Self { registry, options })
    }

    pub fn registry(&self) -> &AnalyzerRegistry {
        &self.registry
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze one tree and return its diagnostics sorted by location,
    /// rule id and message.
    pub fn run(
        &self,
        tree: &SyntaxTree,
        model: &dyn SemanticModel,
        cancel: &CancellationToken,
    ) -> Result<Vec<Diagnostic>> {
        let sink = CollectingSink::new();
        self.run_with_sink(tree, model, cancel, &sink)?;
        Ok(sink.into_sorted())
    }

    /// Analyze one tree, reporting into `sink` in no particular order.
    pub fn run_with_sink(
        &self,
        tree: &SyntaxTree,
        model: &dyn SemanticModel,
        cancel: &CancellationToken,
        sink: &dyn DiagnosticSink,
    ) -> Result<()> {
        let ctx = AnalysisContext::new(model, &tree.path)
            .with_cancellation(cancel.clone())
            .with_generated_code(self.options.analyze_generated_code);
        let dispatch = self.dispatch_table();
        let nodes = tree.descendants();
        let reported = AtomicUsize::new(0);

        let visit = |node: &SyntaxNode<'_>| {
            if ctx.is_cancelled() {
                return;
            }
            let Some(analyzers) = dispatch.get(&node.kind()) else {
                return;
            };
            if ctx.is_suppressed(*node) {
                return;
            }
            for analyzer in analyzers {
                if ctx.is_cancelled() {
                    return;
                }
                if let Some(diagnostic) = analyzer.analyze(*node, &ctx) {
                    let severity = self.options.severity_for(analyzer.descriptor());
                    sink.report(diagnostic.with_severity(severity));
                    reported.fetch_add(1, Ordering::Relaxed);
                }
            }
        };

        if self.options.parallel {
            nodes.par_iter().for_each(visit);
        } else {
            nodes.iter().for_each(visit);
        }

        if cancel.is_cancelled() {
            warn!(file = %tree.path.display(), "analysis cancelled");
            return Err(LintscopeError::Cancelled);
        }

        info!(
            file = %tree.path.display(),
            nodes = nodes.len(),
            diagnostics = reported.load(Ordering::Relaxed),
            "analysis pass complete"
        );
        Ok(())
    }

    /// Enabled analyzers grouped by the node kinds they are interested in.
    fn dispatch_table(&self) -> HashMap<SyntaxKind, Vec<Arc<dyn Analyzer>>> {
        let kinds: HashSet<SyntaxKind> = self
            .registry
            .analyzers()
            .iter()
            .flat_map(|a| a.interests().iter().copied())
            .collect();
        kinds
            .into_iter()
            .filter_map(|kind| {
                let enabled: Vec<_> = self
                    .registry
                    .analyzers_for(kind)
                    .filter(|a| self.options.is_enabled(a.descriptor()))
                    .cloned()
                    .collect();
                (!enabled.is_empty()).then_some((kind, enabled))
            })
            .collect()
    }
}
