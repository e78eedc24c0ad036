use super::location::{DiagnosticLocation, Range};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;
use std::path::Path;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Hidden,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Hidden => "hidden",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    Opportunities,
    PracticesAndImprovements,
}

/// Static, versioned description of a rule. Ids and templates are a stable
/// format: downstream tooling keys on them.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    /// Message with positional `{0}`, `{1}`, ... placeholders.
    pub message_format: &'static str,
    pub category: RuleCategory,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
    pub help_link: &'static str,
}

impl RuleDescriptor {
    /// Substitute positional arguments into the message template in a single
    /// pass. Placeholders without a matching argument are kept verbatim.
    pub fn format_message(&self, args: &[&str]) -> String {
        let mut message = String::with_capacity(self.message_format.len());
        let mut rest = self.message_format;
        while let Some(open) = rest.find('{') {
            message.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let placeholder = after.find('}').and_then(|close| {
                let index: usize = after[..close].parse().ok()?;
                Some((close, *args.get(index)?))
            });
            match placeholder {
                Some((close, arg)) => {
                    message.push_str(arg);
                    rest = &after[close + 1..];
                }
                None => {
                    message.push('{');
                    rest = after;
                }
            }
        }
        message.push_str(rest);
        message
    }
}

/// A single reported finding. Immutable once built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct Diagnostic {
    #[schemars(with = "String")]
    pub rule_id: SmolStr,
    pub severity: Severity,
    pub location: DiagnosticLocation,
    pub message: String,
}

impl Diagnostic {
    pub fn create(descriptor: &RuleDescriptor, path: &Path, range: Range, args: &[&str]) -> Self {
        Self {
            rule_id: SmolStr::new_static(descriptor.id),
            severity: descriptor.default_severity,
            location: DiagnosticLocation {
                path: path.to_path_buf(),
                range,
            },
            message: descriptor.format_message(args),
        }
    }

    /// Same diagnostic with a different severity (used for configured overrides).
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Total order used to report diagnostics deterministically.
    pub fn sort_key(&self) -> (&DiagnosticLocation, &str, &str) {
        (&self.location, &self.rule_id, &self.message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.location.range;
        write!(
            f,
            "{}:{}:{}: {} {}: {}",
            self.location.path.display(),
            r.start_line + 1,
            r.start_col + 1,
            self.severity,
            self.rule_id,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: RuleDescriptor = RuleDescriptor {
        id: "LS9999",
        title: "Sample",
        message_format: "Replace '{0}' with '{1}'",
        category: RuleCategory::Opportunities,
        default_severity: Severity::Info,
        enabled_by_default: true,
        help_link: "docs/rules/LS9999.md",
    };

    #[test]
    fn test_format_message_positional() {
        assert_eq!(SAMPLE.format_message(&["a", "b"]), "Replace 'a' with 'b'");
        assert_eq!(SAMPLE.format_message(&[]), "Replace '{0}' with '{1}'");
        assert_eq!(SAMPLE.format_message(&["a"]), "Replace 'a' with '{1}'");
    }

    #[test]
    fn test_format_message_does_not_expand_arguments() {
        assert_eq!(
            SAMPLE.format_message(&["{1}", "b"]),
            "Replace '{1}' with 'b'"
        );
    }

    #[test]
    fn test_diagnostic_schema_describes_record() {
        let schema = serde_json::to_value(schemars::schema_for!(Diagnostic)).unwrap();
        let properties = &schema["properties"];
        for field in ["rule_id", "severity", "location", "message"] {
            assert!(properties[field].is_object(), "missing {}", field);
        }
        assert_eq!(properties["rule_id"]["type"], "string");
    }

    #[test]
    fn test_diagnostic_display_is_one_based() {
        let d = Diagnostic::create(&SAMPLE, Path::new("a.cs"), Range::new(0, 4, 0, 9), &["x", "y"]);
        assert_eq!(d.to_string(), "a.cs:1:5: info LS9999: Replace 'x' with 'y'");
    }

    #[test]
    fn test_diagnostic_serializes_stable_fields() {
        let d = Diagnostic::create(&SAMPLE, Path::new("a.cs"), Range::new(0, 0, 0, 1), &["x", "y"]);
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["rule_id"], "LS9999");
        assert_eq!(json["severity"], "info");
        let back: Diagnostic = serde_json::from_value(json).unwrap();
        assert_eq!(back, d);
    }
}
