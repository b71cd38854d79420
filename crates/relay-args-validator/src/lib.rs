//! Consistency checks for Relay-style fragment argument directives.
//!
//! Relay overloads two conventionally-named directives to express fragment
//! parameters: `@argumentDefinitions` on a fragment definition declares the
//! parameters it accepts, and `@arguments` on a fragment spread supplies
//! values for them. Neither is first-class GraphQL syntax, so neither side
//! is checked by ordinary schema validation.
//!
//! This crate performs the cross-reference: every parameterized fragment
//! must receive `@arguments` at every spread site, and no spread may supply
//! `@arguments` to a fragment that declares nothing. Validation is three
//! sequential passes over an already-parsed document set:
//!
//! 1. index every fragment definition ([`DefinitionIndex`])
//! 2. collect every reachable fragment spread ([`SpreadCollector`])
//! 3. match spreads against definitions ([`match_spreads`])
//!
//! The pass split matters: a spread may reference a fragment defined later
//! in document order or in a different file, so the definition index must be
//! complete before any matching runs. [`Validator`] owns the per-run state
//! and drives the passes.

mod config;
mod directives;
mod index;
mod issues;
mod matcher;
mod position;
mod spreads;
mod validator;

pub use config::ValidatorConfig;
pub use directives::{has_directive, ARGUMENTS_DIRECTIVE, ARGUMENT_DEFINITIONS_DIRECTIVE};
pub use index::{DefinitionIndex, FragmentDefinitionRecord};
pub use issues::{IssueKind, Severity, SourceLocation, ValidationIssue};
pub use matcher::match_spreads;
pub use position::offset_to_line_col;
pub use spreads::{find_fragment_spreads, FragmentSpreadRecord, SpreadCollector};
pub use validator::{ValidationReport, ValidationSummary, Validator};
