//! Analyzer registration and lookup by rule id or node kind.

use lintscope_api::{Analyzer, ApiError, ApiResult, RuleDescriptor, SyntaxKind};
use std::sync::Arc;

/// Holds the analyzers a driver dispatches to, one per rule id.
#[derive(Default, Clone)]
pub struct AnalyzerRegistry {
    analyzers: Vec<Arc<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `analyzers`, rejecting duplicate rule ids.
    pub fn with_analyzers(analyzers: impl IntoIterator<Item = Arc<dyn Analyzer>>) -> ApiResult<Self> {
        let mut registry = Self::new();
        for analyzer in analyzers {
            registry.register(analyzer)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, analyzer: Arc<dyn Analyzer>) -> ApiResult<()> {
        let id = analyzer.descriptor().id;
        if self.descriptor(id).is_some() {
            return Err(ApiError::DuplicateRule(id.to_string()));
        }
        tracing::debug!(rule = id, "registered analyzer");
        self.analyzers.push(analyzer);
        Ok(())
    }

    pub fn analyzers(&self) -> &[Arc<dyn Analyzer>] {
        &self.analyzers
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> Vec<&'static RuleDescriptor> {
        self.analyzers.iter().map(|a| a.descriptor()).collect()
    }

    pub fn descriptor(&self, id: &str) -> Option<&'static RuleDescriptor> {
        self.analyzers
            .iter()
            .map(|a| a.descriptor())
            .find(|d| d.id == id)
    }

    /// Analyzers interested in nodes of `kind`.
    pub fn analyzers_for(&self, kind: SyntaxKind) -> impl Iterator<Item = &Arc<dyn Analyzer>> {
        self.analyzers
            .iter()
            .filter(move |a| a.interests().contains(&kind))
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}
