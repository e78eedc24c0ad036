//! Analysis options.
//!
//! Loaded from JSON, e.g.
//!
//! ```json
//! {
//!   "rules": { "LS0001": { "enabled": false }, "LS0002": { "severity": "warning" } },
//!   "analyze_generated_code": false,
//!   "parallel": true
//! }
//! ```

use crate::error::Result;
use crate::registry::AnalyzerRegistry;
use lintscope_api::{ApiError, RuleDescriptor, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Per-rule overrides. Unset fields fall back to the rule's defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct RuleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl RuleOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: Some(false),
            severity: None,
        }
    }

    pub fn with_severity(severity: Severity) -> Self {
        Self {
            enabled: None,
            severity: Some(severity),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    /// Overrides keyed by rule id
    pub rules: BTreeMap<String, RuleOptions>,
    pub analyze_generated_code: bool,
    /// Fan out over nodes with rayon
    pub parallel: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            rules: BTreeMap::new(),
            analyze_generated_code: false,
            parallel: true,
        }
    }
}

impl AnalysisOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn with_rule(mut self, id: impl Into<String>, options: RuleOptions) -> Self {
        self.rules.insert(id.into(), options);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_generated_code(mut self, analyze: bool) -> Self {
        self.analyze_generated_code = analyze;
        self
    }

    /// Every configured rule id must be known to `registry`.
    pub fn validate(&self, registry: &AnalyzerRegistry) -> Result<()> {
        for id in self.rules.keys() {
            if registry.descriptor(id).is_none() {
                return Err(ApiError::UnknownRule(id.clone()).into());
            }
        }
        Ok(())
    }

    pub fn is_enabled(&self, descriptor: &RuleDescriptor) -> bool {
        self.rules
            .get(descriptor.id)
            .and_then(|r| r.enabled)
            .unwrap_or(descriptor.enabled_by_default)
    }

    pub fn severity_for(&self, descriptor: &RuleDescriptor) -> Severity {
        self.rules
            .get(descriptor.id)
            .and_then(|r| r.severity)
            .unwrap_or(descriptor.default_severity)
    }
}
