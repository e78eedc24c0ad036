pub mod driver;
pub mod error;
pub mod logging;
pub mod options;
pub mod registry;
pub mod sink;

pub use driver::AnalysisDriver;
pub use error::{LintscopeError, Result};
pub use options::{AnalysisOptions, RuleOptions};
pub use registry::AnalyzerRegistry;
pub use sink::{CollectingSink, DiagnosticSink};
