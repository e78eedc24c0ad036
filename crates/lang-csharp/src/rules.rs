//! Rule descriptors for the built-in C# analyzers.
//!
//! Ids and message templates are persisted by downstream tooling and must
//! not change between versions.

use lintscope_api::{RuleCategory, RuleDescriptor, Severity};

pub static CONVERT_CLOSURE_TO_METHOD_GROUP: RuleDescriptor = RuleDescriptor {
    id: "LS0001",
    title: "Convert anonymous method to method group",
    message_format: "{0}",
    category: RuleCategory::Opportunities,
    default_severity: Severity::Info,
    enabled_by_default: true,
    help_link: "docs/rules/LS0001.md",
};

pub static REPLACE_WITH_OF_TYPE_SINGLE: RuleDescriptor = RuleDescriptor {
    id: "LS0002",
    title: "Replace with call to OfType<T>().Single()",
    message_format: "Replace with 'OfType<{0}>().Single()'",
    category: RuleCategory::PracticesAndImprovements,
    default_severity: Severity::Info,
    enabled_by_default: true,
    help_link: "docs/rules/LS0002.md",
};

pub const ANONYMOUS_METHOD_MESSAGE: &str = "Anonymous method can be simplified to method group";
pub const LAMBDA_MESSAGE: &str = "Lambda expression can be simplified to method group";

/// All descriptors shipped by this crate.
pub fn all() -> [&'static RuleDescriptor; 2] {
    [&CONVERT_CLOSURE_TO_METHOD_GROUP, &REPLACE_WITH_OF_TYPE_SINGLE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_ids_are_unique() {
        let ids: Vec<_> = all().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["LS0001", "LS0002"]);
    }

    #[test]
    fn test_of_type_message_names_element_type() {
        assert_eq!(
            REPLACE_WITH_OF_TYPE_SINGLE.format_message(&["Foo"]),
            "Replace with 'OfType<Foo>().Single()'"
        );
    }
}
