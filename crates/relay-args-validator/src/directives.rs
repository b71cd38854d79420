use apollo_parser::cst;

/// Directive marking a fragment definition as accepting named parameters
pub const ARGUMENT_DEFINITIONS_DIRECTIVE: &str = "argumentDefinitions";

/// Directive supplying argument values at a fragment spread
pub const ARGUMENTS_DIRECTIVE: &str = "arguments";

/// Check whether a directive list contains a directive with the exact name.
///
/// The two markers are recognized by string match on the directive name, not
/// as language syntax. A node with no directive list behaves identically to
/// one whose directives simply don't match.
#[must_use]
pub fn has_directive(directives: Option<&cst::Directives>, name: &str) -> bool {
    let Some(directives) = directives else {
        return false;
    };

    directives.directives().any(|directive| {
        directive
            .name()
            .is_some_and(|directive_name| directive_name.text() == name)
    })
}
