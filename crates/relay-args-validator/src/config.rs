use serde::{Deserialize, Serialize};

/// Options controlling fragment-argument validation.
///
/// Consumed from the `validate` section of the project config file:
///
/// ```yaml
/// documents: "src/**/*.graphql"
/// validate:
///   requireArgumentDefinitions: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidatorConfig {
    /// When true (the default), every fragment definition lacking
    /// `@argumentDefinitions` is itself an error, independent of how the
    /// fragment is spread.
    #[serde(default = "default_require_argument_definitions")]
    pub require_argument_definitions: bool,
}

const fn default_require_argument_definitions() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            require_argument_definitions: true,
        }
    }
}
