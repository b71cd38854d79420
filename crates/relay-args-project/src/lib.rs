//! Project-level plumbing for the fragment-argument validator: config file
//! discovery and parsing, document loading from glob patterns, and the
//! three-pass pipeline over a loaded document set.

mod config;
mod error;
mod loader;

pub use config::{find_config, load_config, load_config_from_str, DocumentsConfig, ProjectConfig};
pub use error::{ProjectError, Result};
pub use loader::{DocumentLoader, LoadedDocument};

use relay_args_validator::{ValidationReport, Validator, ValidatorConfig};

/// Run the full validation pipeline over a loaded document set.
///
/// Indexes fragment definitions across every document before collecting any
/// spreads, then matches. The two loops cannot be fused: a spread may
/// reference a fragment defined in a document that has not been visited yet.
#[tracing::instrument(skip(config, documents), fields(documents = documents.len()))]
#[must_use]
pub fn run_validation(config: &ValidatorConfig, documents: &[LoadedDocument]) -> ValidationReport {
    let mut validator = Validator::new(config.clone());

    for document in documents {
        validator.index_document(&document.source, &document.tree);
    }
    for document in documents {
        validator.collect_document(&document.source, &document.tree);
    }

    validator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_args_validator::IssueKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cross_file_validation() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join("fragments.graphql"),
            "fragment UserFields on User @argumentDefinitions(userId: {type: \"ID!\"}) { id }",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("queries.graphql"),
            "query GetUser { user { ...UserFields } }",
        )
        .unwrap();

        let config = DocumentsConfig::Pattern("*.graphql".to_string());
        let documents = DocumentLoader::new(&config)
            .with_base_path(temp_dir.path())
            .load()
            .unwrap();

        let report = run_validation(&ValidatorConfig::default(), &documents);

        assert_eq!(report.summary.fragments_checked, 1);
        assert_eq!(report.summary.total_issues, 1);
        assert_eq!(report.issues[0].kind, IssueKind::MissingArgumentsAtSpread);
    }

    #[test]
    fn test_clean_project_reports_nothing() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join("all.graphql"),
            "fragment UserFields on User @argumentDefinitions(userId: {type: \"ID!\"}) { id }\n\
             query GetUser { user { ...UserFields @arguments(userId: \"1\") } }",
        )
        .unwrap();

        let config = DocumentsConfig::Pattern("*.graphql".to_string());
        let documents = DocumentLoader::new(&config)
            .with_base_path(temp_dir.path())
            .load()
            .unwrap();

        let report = run_validation(&ValidatorConfig::default(), &documents);

        assert!(!report.has_errors());
        assert_eq!(report.summary.fragments_checked, 1);
    }
}
