use crate::error::{ProjectError, Result};
use relay_args_validator::ValidatorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names to search for, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".relayargsrc.yml",
    ".relayargsrc.yaml",
    ".relayargsrc.json",
    "relay-args.config.yml",
    "relay-args.config.yaml",
    "relay-args.config.json",
];

/// Document patterns - a single glob or a list of globs
///
/// ```yaml
/// documents: "src/**/*.graphql"
/// # or
/// documents:
///   - "src/**/*.graphql"
///   - "!src/generated/**"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentsConfig {
    Pattern(String),
    Patterns(Vec<String>),
}

impl DocumentsConfig {
    /// All patterns as a slice view (normalizes single to vec)
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::Pattern(pattern) => vec![pattern.as_str()],
            Self::Patterns(patterns) => patterns.iter().map(String::as_str).collect(),
        }
    }
}

/// Project configuration loaded from a `.relayargsrc` style file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Glob patterns locating the GraphQL documents to validate
    pub documents: DocumentsConfig,

    /// Validation options, all defaulted when the section is omitted
    #[serde(default)]
    pub validate: ValidatorConfig,
}

/// Find a config file by walking up the directory tree from the given start
/// directory. Returns the path to the config file if found.
#[tracing::instrument(fields(start = %start_dir.display()))]
#[must_use]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        for file_name in CONFIG_FILES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                tracing::info!(path = %config_path.display(), "Found config file");
                return Some(config_path);
            }
        }

        if !current_dir.pop() {
            tracing::debug!("No config file found");
            return None;
        }
    }
}

/// Load a project config from the specified path.
/// Detects the format based on file extension.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a project config from a string.
/// The path is used for error messages and format detection.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<ProjectConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

    let config = match extension {
        "yml" | "yaml" => parse_yaml(contents, path)?,
        "json" => parse_json(contents, path)?,
        _ => return Err(ProjectError::UnsupportedFormat(path.to_path_buf())),
    };

    validate_config(&config, path)?;

    Ok(config)
}

fn parse_yaml(contents: &str, path: &Path) -> Result<ProjectConfig> {
    serde_yaml::from_str(contents).map_err(|e| ProjectError::InvalidConfig {
        path: path.to_path_buf(),
        message: format!("YAML parse error: {e}"),
    })
}

fn parse_json(contents: &str, path: &Path) -> Result<ProjectConfig> {
    serde_json::from_str(contents).map_err(|e| ProjectError::InvalidConfig {
        path: path.to_path_buf(),
        message: format!("JSON parse error: {e}"),
    })
}

fn validate_config(config: &ProjectConfig, path: &Path) -> Result<()> {
    let patterns = config.documents.patterns();
    if patterns.is_empty() {
        return Err(ProjectError::InvalidConfig {
            path: path.to_path_buf(),
            message: "Empty documents configuration".to_string(),
        });
    }

    for pattern in patterns {
        if pattern.trim().is_empty() {
            return Err(ProjectError::InvalidConfig {
                path: path.to_path_buf(),
                message: "Empty document pattern".to_string(),
            });
        }
    }

    Ok(())
}
