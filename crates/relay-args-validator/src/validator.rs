use crate::config::ValidatorConfig;
use crate::index::DefinitionIndex;
use crate::issues::{Severity, ValidationIssue};
use crate::matcher::match_spreads;
use crate::spreads::SpreadCollector;
use apollo_parser::{cst, SyntaxTree};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Summary counts for a completed validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Distinct fragment names indexed during pass 1
    pub fragments_checked: usize,
    /// Distinct fragment names that appear in at least one issue
    pub fragments_with_issues: usize,
    pub total_issues: usize,
}

/// Ordered issue list plus summary counts for one validation run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
    pub summary: ValidationSummary,
}

impl ValidationReport {
    /// True iff the report contains at least one error-severity issue.
    /// The orchestrator uses this to decide whether the run failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    /// Issues grouped by fragment name, fragments in lexicographic order,
    /// issues within a fragment in emission order. This is the shape report
    /// rendering consumes.
    #[must_use]
    pub fn issues_by_fragment(&self) -> BTreeMap<&str, Vec<&ValidationIssue>> {
        let mut grouped: BTreeMap<&str, Vec<&ValidationIssue>> = BTreeMap::new();
        for issue in &self.issues {
            grouped
                .entry(issue.fragment_name.as_str())
                .or_default()
                .push(issue);
        }
        grouped
    }
}

/// Drives the three validation passes over a parsed document set.
///
/// Feed every document to [`Validator::index_document`] first, then every
/// document to [`Validator::collect_document`], then call
/// [`Validator::finish`]. The index must be complete before matching because
/// spreads may reference fragments defined in other files. The per-run
/// state (definition index, spread list, issue list) is owned here and
/// discarded with the validator; a fresh `Validator` on the same input
/// yields an identical report.
#[derive(Debug)]
pub struct Validator {
    config: ValidatorConfig,
    index: DefinitionIndex,
    spreads: SpreadCollector,
    issues: Vec<ValidationIssue>,
}

impl Validator {
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            index: DefinitionIndex::new(),
            spreads: SpreadCollector::new(),
            issues: Vec::new(),
        }
    }

    /// Pass 1: index every fragment definition in one document
    #[tracing::instrument(skip(self, source, tree), level = "debug")]
    pub fn index_document(&mut self, source: &str, tree: &SyntaxTree) {
        for definition in tree.document().definitions() {
            if let cst::Definition::FragmentDefinition(fragment) = definition {
                self.index.index_definition(
                    source,
                    &fragment,
                    self.config.require_argument_definitions,
                    &mut self.issues,
                );
            }
        }
    }

    /// Pass 2: collect every fragment spread reachable from one document's
    /// operations and fragment bodies
    #[tracing::instrument(skip(self, source, tree), level = "debug")]
    pub fn collect_document(&mut self, source: &str, tree: &SyntaxTree) {
        for definition in tree.document().definitions() {
            match definition {
                cst::Definition::OperationDefinition(operation) => {
                    if let Some(selection_set) = operation.selection_set() {
                        self.spreads.collect_from_selection_set(source, &selection_set);
                    }
                }
                cst::Definition::FragmentDefinition(fragment) => {
                    if let Some(selection_set) = fragment.selection_set() {
                        self.spreads.collect_from_selection_set(source, &selection_set);
                    }
                }
                _ => {}
            }
        }
    }

    /// Pass 3: match spreads against the definition index and produce the
    /// final report
    #[must_use]
    pub fn finish(mut self) -> ValidationReport {
        match_spreads(&self.index, self.spreads.records(), &mut self.issues);

        let fragments_with_issues = self
            .issues
            .iter()
            .map(|issue| issue.fragment_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        let summary = ValidationSummary {
            fragments_checked: self.index.len(),
            fragments_with_issues,
            total_issues: self.issues.len(),
        };

        tracing::debug!(
            fragments_checked = summary.fragments_checked,
            fragments_with_issues = summary.fragments_with_issues,
            total_issues = summary.total_issues,
            spreads = self.spreads.len(),
            "Validation run complete"
        );

        ValidationReport {
            issues: self.issues,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueKind;
    use apollo_parser::Parser;

    fn run(sources: &[&str], config: ValidatorConfig) -> ValidationReport {
        let parsed: Vec<(&str, SyntaxTree)> = sources
            .iter()
            .map(|source| (*source, Parser::new(source).parse()))
            .collect();
        for (source, tree) in &parsed {
            assert_eq!(tree.errors().len(), 0, "test source must parse: {source}");
        }

        let mut validator = Validator::new(config);
        for (source, tree) in &parsed {
            validator.index_document(source, tree);
        }
        for (source, tree) in &parsed {
            validator.collect_document(source, tree);
        }
        validator.finish()
    }

    fn lenient() -> ValidatorConfig {
        ValidatorConfig {
            require_argument_definitions: false,
        }
    }

    #[test]
    fn test_spread_before_definition_in_document_order() {
        let report = run(
            &["query Q { ...UserFields } fragment UserFields on User { id }"],
            lenient(),
        );
        assert!(report.issues.is_empty());
        assert_eq!(report.summary.fragments_checked, 1);
    }

    #[test]
    fn test_definition_and_spread_in_different_documents() {
        let report = run(
            &[
                "query Q { user { ...UserFields @arguments(userId: \"1\") } }",
                "fragment UserFields on User @argumentDefinitions(userId: {type: \"ID!\"}) { id }",
            ],
            lenient(),
        );
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let report = run(
            &[
                "fragment A on User { id } fragment B on Post { title }",
                "query Q { ...A ...B }",
            ],
            ValidatorConfig::default(),
        );
        // Both fragments lack @argumentDefinitions under the default policy
        assert_eq!(report.summary.fragments_checked, 2);
        assert_eq!(report.summary.total_issues, 2);
        assert_eq!(report.summary.fragments_with_issues, 2);
        assert!(report.has_errors());
    }

    #[test]
    fn test_clean_run_has_no_errors() {
        let report = run(
            &["fragment A on User @argumentDefinitions(id: {type: \"ID!\"}) { id } \
               query Q { ...A @arguments(id: \"1\") }"],
            ValidatorConfig::default(),
        );
        assert!(!report.has_errors());
        assert_eq!(report.summary.total_issues, 0);
        assert_eq!(report.summary.fragments_with_issues, 0);
    }

    #[test]
    fn test_issues_grouped_lexicographically() {
        let report = run(
            &["fragment Zeta on User { id } fragment Alpha on User { id }"],
            ValidatorConfig::default(),
        );
        let grouped = report.issues_by_fragment();
        let names: Vec<&str> = grouped.keys().copied().collect();
        assert_eq!(names, ["Alpha", "Zeta"]);
    }

    #[test]
    fn test_undefined_reference_appears_in_report() {
        let report = run(&["query Q { ...Nowhere }"], lenient());
        assert_eq!(report.summary.total_issues, 1);
        assert_eq!(report.issues[0].kind, IssueKind::UndefinedFragmentReference);
        assert_eq!(report.summary.fragments_checked, 0);
        assert_eq!(report.summary.fragments_with_issues, 1);
    }
}
