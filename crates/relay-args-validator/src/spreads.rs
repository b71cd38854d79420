use crate::directives::{has_directive, ARGUMENTS_DIRECTIVE};
use crate::issues::SourceLocation;
use crate::position::offset_to_line_col;
use apollo_parser::cst::{self, CstNode};

/// Record for a single fragment-spread site.
///
/// The same fragment spread at two different call sites produces two
/// independent records. `fragment_name` may reference a name with no
/// definition in the index; that is an error the matcher reports, not a
/// crash condition here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSpreadRecord {
    pub fragment_name: String,
    /// True iff the spread carries `@arguments`
    pub supplies_arguments: bool,
    /// Position of the spread's fragment-name token, when present
    pub location: Option<SourceLocation>,
}

/// Ordered sequence of every spread site discovered during pass 2
#[derive(Debug, Default)]
pub struct SpreadCollector {
    records: Vec<FragmentSpreadRecord>,
}

impl SpreadCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one spread site. Pure data capture, no validation.
    pub fn collect_spread(&mut self, source: &str, spread: &cst::FragmentSpread) {
        let Some(name_token) = spread.fragment_name().and_then(|n| n.name()) else {
            return;
        };
        let fragment_name = name_token.text().to_string();

        let offset: usize = name_token.syntax().text_range().start().into();
        let (line, column) = offset_to_line_col(source, offset);

        let supplies_arguments = has_directive(spread.directives().as_ref(), ARGUMENTS_DIRECTIVE);

        tracing::trace!(fragment = %fragment_name, supplies_arguments, "Collected fragment spread");

        self.records.push(FragmentSpreadRecord {
            fragment_name,
            supplies_arguments,
            location: Some(SourceLocation { line, column }),
        });
    }

    /// Record every spread reachable from a root selection set, in source order
    pub fn collect_from_selection_set(&mut self, source: &str, selection_set: &cst::SelectionSet) {
        for spread in find_fragment_spreads(selection_set) {
            self.collect_spread(source, &spread);
        }
    }

    /// All spreads collected so far, in collection order
    #[must_use]
    pub fn records(&self) -> &[FragmentSpreadRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Recursively gather every fragment spread reachable from a selection set.
///
/// Returns spreads depth-first in source order. Fields and inline fragments
/// recurse into their nested selection sets; a fragment spread is included
/// but its target fragment's body is not followed. The traversal walks the
/// calling structure of the document, and each fragment body is walked once
/// when that definition itself is visited, so nothing is double counted.
#[must_use]
pub fn find_fragment_spreads(selection_set: &cst::SelectionSet) -> Vec<cst::FragmentSpread> {
    let mut spreads = Vec::new();
    collect_spreads_into(selection_set, &mut spreads);
    spreads
}

fn collect_spreads_into(selection_set: &cst::SelectionSet, spreads: &mut Vec<cst::FragmentSpread>) {
    for selection in selection_set.selections() {
        match selection {
            cst::Selection::FragmentSpread(spread) => {
                spreads.push(spread);
            }
            cst::Selection::Field(field) => {
                if let Some(nested) = field.selection_set() {
                    collect_spreads_into(&nested, spreads);
                }
            }
            cst::Selection::InlineFragment(inline) => {
                if let Some(nested) = inline.selection_set() {
                    collect_spreads_into(&nested, spreads);
                }
            }
        }
    }
}
