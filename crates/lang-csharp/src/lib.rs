//! Built-in C# analyzers.

pub mod method_group;
pub mod of_type;
pub mod rules;

use lintscope_api::Analyzer;
use std::sync::Arc;

pub use method_group::MethodGroupAnalyzer;
pub use of_type::OfTypeSingleAnalyzer;

/// Every analyzer this crate ships, in rule id order.
pub fn builtin_analyzers() -> Vec<Arc<dyn Analyzer>> {
    vec![
        Arc::new(MethodGroupAnalyzer::new()),
        Arc::new(OfTypeSingleAnalyzer::new()),
    ]
}
