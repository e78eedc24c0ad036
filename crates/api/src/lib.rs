pub mod analyzer;
pub mod error;
pub mod models;
pub mod semantic;
pub mod syntax;

// Re-export commonly used types
pub use analyzer::{AnalysisContext, Analyzer};
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use semantic::{
    GeneratedCodeOracle, SemanticModel, SymbolResolver, TargetTypeOracle, TypeProvider,
};
pub use syntax::{NodeId, SyntaxKind, SyntaxNode, SyntaxTree};
