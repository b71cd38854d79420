use crate::index::DefinitionIndex;
use crate::issues::{IssueKind, ValidationIssue};
use crate::spreads::FragmentSpreadRecord;

/// Match every collected spread against the definition index (pass 3).
///
/// For each spread, the outcome is a pure function of the definition's
/// declares-parameters flag, the spread's supplies-arguments flag, and
/// whether the definition exists at all:
///
/// - definition absent: `UndefinedFragmentReference` error (the run always
///   degrades this to a reported issue and continues, so a complete report
///   is produced even for structurally broken input)
/// - declares but spread supplies nothing: `MissingArgumentsAtSpread`
/// - spread supplies but definition declares nothing: `UnexpectedArgumentsAtSpread`
/// - flags agree: no issue
///
/// A single linear pass over the spreads; issue location comes from the
/// spread site, attribution from the spread's fragment name.
pub fn match_spreads(
    index: &DefinitionIndex,
    spreads: &[FragmentSpreadRecord],
    issues: &mut Vec<ValidationIssue>,
) {
    for spread in spreads {
        let name = &spread.fragment_name;

        let Some(definition) = index.get(name) else {
            issues.push(ValidationIssue::error(
                IssueKind::UndefinedFragmentReference,
                name.clone(),
                format!("Fragment '{name}' is spread but never defined"),
                spread.location,
            ));
            continue;
        };

        match (definition.declares_parameters, spread.supplies_arguments) {
            (true, false) => {
                issues.push(ValidationIssue::error(
                    IssueKind::MissingArgumentsAtSpread,
                    name.clone(),
                    format!(
                        "Spread of fragment '{name}' must have @arguments directive \
                         because the fragment declares @argumentDefinitions"
                    ),
                    spread.location,
                ));
            }
            (false, true) => {
                issues.push(ValidationIssue::error(
                    IssueKind::UnexpectedArgumentsAtSpread,
                    name.clone(),
                    format!(
                        "Spread of fragment '{name}' supplies @arguments but the fragment \
                         does not define @argumentDefinitions"
                    ),
                    spread.location,
                ));
            }
            // Both declared and supplied, or neither: consistent
            (true, true) | (false, false) => {}
        }
    }
}
