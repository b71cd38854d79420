use crate::directives::{has_directive, ARGUMENT_DEFINITIONS_DIRECTIVE};
use crate::issues::{IssueKind, SourceLocation, ValidationIssue};
use crate::position::offset_to_line_col;
use apollo_parser::cst::{self, CstNode};
use std::collections::HashMap;

/// Record for a single fragment definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDefinitionRecord {
    /// Fragment name, the lookup key during matching
    pub name: String,
    /// True iff the definition carries `@argumentDefinitions`
    pub declares_parameters: bool,
    /// Position of the fragment name token, when the node carries one
    pub location: Option<SourceLocation>,
}

/// Map from fragment name to its declares-parameters flag.
///
/// Built during pass 1, before any spread matching runs, because a spread
/// may reference a fragment defined later in document order or in a
/// different file. Duplicate names overwrite the prior record (last write
/// wins) but every definition is still visited, so the require policy fires
/// once per definition, not once per name.
#[derive(Debug, Default)]
pub struct DefinitionIndex {
    records: HashMap<String, FragmentDefinitionRecord>,
}

impl DefinitionIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one fragment definition.
    ///
    /// Computes the declares-parameters flag by exact directive-name match,
    /// stores the record keyed by fragment name, and, when
    /// `require_argument_definitions` is set and the directive is absent,
    /// appends an error issue attributed to the fragment. Definitions
    /// without a name token cannot be keyed and are skipped.
    pub fn index_definition(
        &mut self,
        source: &str,
        fragment: &cst::FragmentDefinition,
        require_argument_definitions: bool,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let Some(name_token) = fragment.fragment_name().and_then(|n| n.name()) else {
            return;
        };
        let name = name_token.text().to_string();

        let offset: usize = name_token.syntax().text_range().start().into();
        let (line, column) = offset_to_line_col(source, offset);
        let location = Some(SourceLocation { line, column });

        let declares_parameters = has_directive(
            fragment.directives().as_ref(),
            ARGUMENT_DEFINITIONS_DIRECTIVE,
        );

        if require_argument_definitions && !declares_parameters {
            issues.push(ValidationIssue::error(
                IssueKind::MissingArgumentDefinitions,
                name.clone(),
                format!("Fragment '{name}' must have @argumentDefinitions directive"),
                location,
            ));
        }

        tracing::trace!(fragment = %name, declares_parameters, "Indexed fragment definition");

        self.records.insert(
            name.clone(),
            FragmentDefinitionRecord {
                name,
                declares_parameters,
                location,
            },
        );
    }

    /// Look up the record for a fragment name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FragmentDefinitionRecord> {
        self.records.get(name)
    }

    /// Number of distinct fragment names indexed
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo_parser::Parser;

    fn index_all(source: &str, require: bool) -> (DefinitionIndex, Vec<ValidationIssue>) {
        let tree = Parser::new(source).parse();
        assert_eq!(tree.errors().len(), 0, "test source must parse cleanly");

        let mut index = DefinitionIndex::new();
        let mut issues = Vec::new();
        for definition in tree.document().definitions() {
            if let cst::Definition::FragmentDefinition(frag) = definition {
                index.index_definition(source, &frag, require, &mut issues);
            }
        }
        (index, issues)
    }

    #[test]
    fn test_every_definition_gets_a_record() {
        let source = "fragment A on User { id } fragment B on Post { title }";
        let (index, _) = index_all(source, false);

        assert_eq!(index.len(), 2);
        assert!(index.get("A").is_some());
        assert!(index.get("B").is_some());
        assert!(index.get("C").is_none());
    }

    #[test]
    fn test_declares_parameters_flag() {
        let source = "fragment A on User @argumentDefinitions(id: {type: \"ID!\"}) { id } \
                      fragment B on Post { title }";
        let (index, _) = index_all(source, false);

        assert!(index.get("A").unwrap().declares_parameters);
        assert!(!index.get("B").unwrap().declares_parameters);
    }

    #[test]
    fn test_require_policy_emits_error_per_undecorated_definition() {
        let source = "fragment UserFields on User { id } fragment PostFields on Post { title }";
        let (index, issues) = index_all(source, true);

        assert_eq!(index.len(), 2);
        assert_eq!(issues.len(), 2);
        for issue in &issues {
            assert_eq!(issue.kind, IssueKind::MissingArgumentDefinitions);
            assert!(issue.message.contains("must have @argumentDefinitions directive"));
        }
        assert!(issues.iter().any(|i| i.fragment_name == "UserFields"));
        assert!(issues.iter().any(|i| i.fragment_name == "PostFields"));
    }

    #[test]
    fn test_require_policy_quiet_when_declared() {
        let source = "fragment UserFields on User @argumentDefinitions(id: {type: \"ID!\"}) { id }";
        let (_, issues) = index_all(source, true);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_require_policy_disabled() {
        let source = "fragment UserFields on User { id }";
        let (_, issues) = index_all(source, false);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_duplicate_name_last_write_wins_but_both_visited() {
        let source = "fragment F on User { id } \
                      fragment F on User @argumentDefinitions(id: {type: \"ID!\"}) { id }";
        let (index, issues) = index_all(source, true);

        // One record, carrying the second definition's flag
        assert_eq!(index.len(), 1);
        assert!(index.get("F").unwrap().declares_parameters);
        // The first (undecorated) definition was still checked
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].fragment_name, "F");
    }

    #[test]
    fn test_location_points_at_fragment_name() {
        let source = "fragment UserFields on User { id }";
        let (index, _) = index_all(source, false);

        let record = index.get("UserFields").unwrap();
        // "fragment " is 9 bytes, name starts at column 9 on line 0
        assert_eq!(record.location, Some(SourceLocation { line: 0, column: 9 }));
    }
}
