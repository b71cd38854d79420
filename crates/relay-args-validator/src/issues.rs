use serde::{Deserialize, Serialize};

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Information,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Information => write!(f, "info"),
        }
    }
}

/// Position of a token in a document (0-indexed line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

/// The kind of directive-consistency violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Fragment definition lacks `@argumentDefinitions` when the
    /// configuration requires every definition to declare parameters
    MissingArgumentDefinitions,
    /// Spread of a parameterized fragment lacks `@arguments`
    MissingArgumentsAtSpread,
    /// Spread supplies `@arguments` to a fragment that declares none
    UnexpectedArgumentsAtSpread,
    /// Spread names a fragment with no definition in the indexed set
    UndefinedFragmentReference,
}

/// A single rule violation, attributed to a fragment by name.
///
/// Issues are appended to an ordered list as rules fire and never mutated
/// afterwards. The `fragment_name` is what report rendering groups by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub kind: IssueKind,
    pub fragment_name: String,
    pub message: String,
    pub location: Option<SourceLocation>,
}

impl ValidationIssue {
    /// Create an error-level issue
    #[must_use]
    pub fn error(
        kind: IssueKind,
        fragment_name: impl Into<String>,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            fragment_name: fragment_name.into(),
            message: message.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructor() {
        let issue = ValidationIssue::error(
            IssueKind::MissingArgumentsAtSpread,
            "UserFields",
            "missing @arguments",
            Some(SourceLocation { line: 3, column: 8 }),
        );
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.kind, IssueKind::MissingArgumentsAtSpread);
        assert_eq!(issue.fragment_name, "UserFields");
        assert_eq!(issue.location, Some(SourceLocation { line: 3, column: 8 }));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Information.to_string(), "info");
    }

    #[test]
    fn test_issue_kind_serializes_snake_case() {
        let json = serde_json::to_string(&IssueKind::UndefinedFragmentReference).unwrap();
        assert_eq!(json, "\"undefined_fragment_reference\"");
    }
}
