use crate::config::DocumentsConfig;
use crate::error::{ProjectError, Result};
use apollo_parser::{Parser, SyntaxTree};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One successfully parsed GraphQL document, ready for validation
#[derive(Debug)]
pub struct LoadedDocument {
    /// Normalized path, for report attribution
    pub path: String,
    pub source: String,
    pub tree: SyntaxTree,
}

/// Loads GraphQL documents matching the configured glob patterns.
///
/// Patterns support `{a,b}` brace expansion and gitignore-style `!`
/// negation. Files under `node_modules` are always skipped, and paths are
/// normalized so the same file matched by two pattern spellings is loaded
/// once. Files that fail to parse are excluded (with a warning) before the
/// validation run starts, so the run never sees an unparsable document.
pub struct DocumentLoader {
    patterns: Vec<String>,
    base_path: Option<PathBuf>,
}

impl DocumentLoader {
    #[must_use]
    pub fn new(config: &DocumentsConfig) -> Self {
        Self {
            patterns: config.patterns().iter().map(ToString::to_string).collect(),
            base_path: None,
        }
    }

    #[must_use]
    pub fn with_base_path(mut self, path: impl AsRef<Path>) -> Self {
        self.base_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load all documents matching the patterns
    #[tracing::instrument(skip(self), fields(pattern_count = self.patterns.len()))]
    pub fn load(&self) -> Result<Vec<LoadedDocument>> {
        let paths = self.find_files()?;
        tracing::debug!(files_found = paths.len(), "Files matched patterns");

        let mut documents = Vec::new();
        let mut skipped = 0;

        for path in paths {
            let source = std::fs::read_to_string(&path).map_err(|e| {
                ProjectError::DocumentLoad(format!("Failed to read {}: {e}", path.display()))
            })?;

            let tree = Parser::new(&source).parse();
            if tree.errors().len() > 0 {
                tracing::warn!(file = %path.display(), "Skipping document with syntax errors");
                skipped += 1;
                continue;
            }

            documents.push(LoadedDocument {
                path: normalize_path(&path),
                source,
                tree,
            });
        }

        tracing::info!(
            loaded = documents.len(),
            skipped,
            "Document loading complete"
        );
        Ok(documents)
    }

    /// Find files matching all patterns (supports gitignore-style negation)
    fn find_files(&self) -> Result<Vec<PathBuf>> {
        let expanded: Vec<String> = self
            .patterns
            .iter()
            .flat_map(|pattern| expand_braces(pattern))
            .collect();

        let (positive, negations): (Vec<_>, Vec<_>) = expanded
            .iter()
            .partition(|pattern| !pattern.trim_start().starts_with('!'));

        let mut files = self.glob_files(&positive)?;

        if !negations.is_empty() {
            files = self.apply_negations(files, &expanded)?;
        }

        Ok(files)
    }

    fn glob_files(&self, patterns: &[&String]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut seen_normalized: HashSet<String> = HashSet::new();

        for pattern in patterns {
            let full_pattern = self.base_path.as_ref().map_or_else(
                || (*pattern).clone(),
                |base| base.join(pattern).display().to_string(),
            );

            for entry in glob::glob(&full_pattern)
                .map_err(|e| ProjectError::DocumentLoad(format!("Invalid glob pattern: {e}")))?
            {
                match entry {
                    Ok(path) if path.is_file() => {
                        if path.components().any(|c| c.as_os_str() == "node_modules") {
                            continue;
                        }

                        // The same file matched by "./src/x.graphql" and
                        // "src/x.graphql" must only load once
                        if seen_normalized.insert(normalize_path(&path)) {
                            files.push(path);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        return Err(ProjectError::DocumentLoad(format!("Glob error: {e}")));
                    }
                }
            }
        }

        Ok(files)
    }

    /// Filter matched files through a gitignore-style matcher built from the
    /// `!` negation patterns, so negated paths are excluded
    fn apply_negations(&self, mut files: Vec<PathBuf>, patterns: &[String]) -> Result<Vec<PathBuf>> {
        use ignore::gitignore::GitignoreBuilder;

        let base = self.base_path.clone().unwrap_or_else(|| PathBuf::from("."));
        let mut builder = GitignoreBuilder::new(&base);

        for pattern in patterns {
            let Some(negated) = pattern.trim_start().strip_prefix('!') else {
                continue;
            };
            builder.add_line(None, negated).map_err(|e| {
                ProjectError::DocumentLoad(format!("Invalid negation pattern: {e}"))
            })?;
        }

        let gitignore = builder.build().map_err(|e| {
            ProjectError::DocumentLoad(format!("Failed to build pattern matcher: {e}"))
        })?;

        files.retain(|path| {
            let relative = path.strip_prefix(&base).unwrap_or(path);
            !gitignore.matched(relative, false).is_ignore()
        });

        Ok(files)
    }
}

/// Expand brace patterns like `**/*.{graphql,gql}` into multiple patterns.
/// Patterns without a matched `{...}` pair pass through unchanged.
fn expand_braces(pattern: &str) -> Vec<String> {
    if let Some(start) = pattern.find('{') {
        // The closing brace must come after the opening one; a stray `}`
        // earlier in the pattern is literal text
        if let Some(end) = pattern[start..].find('}').map(|i| start + i) {
            let before = &pattern[..start];
            let after = &pattern[end + 1..];
            let options = &pattern[start + 1..end];

            return options
                .split(',')
                .map(|opt| format!("{before}{opt}{after}"))
                .collect();
        }
    }

    vec![pattern.to_string()]
}

/// Normalize a file path by removing `./` components, so files matched by
/// different glob spellings dedupe to the same key
fn normalize_path(path: &Path) -> String {
    let components: Vec<_> = path
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .collect();

    components
        .iter()
        .collect::<PathBuf>()
        .display()
        .to_string()
}
