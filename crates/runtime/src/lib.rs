use lintscope_api::ApiResult;
use lintscope_core::{AnalysisDriver, AnalysisOptions, AnalyzerRegistry};

/// Registry holding every built-in analyzer.
pub fn default_registry() -> ApiResult<AnalyzerRegistry> {
    AnalyzerRegistry::with_analyzers(lintscope_csharp::builtin_analyzers())
}

/// Bootstraps an analysis driver with all built-in analyzers.
///
/// This is the central factory for hosts: it assembles the registry from the
/// language crates and validates `options` against it.
pub fn build_default_driver(options: AnalysisOptions) -> lintscope_core::Result<AnalysisDriver> {
    let registry = default_registry()?;
    tracing::info!(rules = registry.len(), "built default analysis driver");
    AnalysisDriver::new(registry, options)
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module, logging to file only.
pub fn init_logging(component: &str) -> Option<impl Drop> {
    Some(lintscope_core::logging::init_logging(component, false))
}
