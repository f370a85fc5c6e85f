//! Pattern pair classification
//!
//! This module classifies a search/replace pattern pair into the shape that
//! decides which substitution rule the mapper applies. Classification is a
//! pure function of the two patterns and happens once per run.

use crate::constants::{DOT_WILDCARD_SUFFIX, DOUBLE_DOT_WILDCARD, WILDCARD, WILDCARD_DOT_PREFIX};
use crate::pattern::Pattern;

/// Structural classification of a search/replace pattern pair
///
/// The variants are mutually exclusive. Precedence between them is fixed:
/// wildcard counts are inspected first, then the search pattern's shape is
/// tested anchor by anchor, then the replace pattern's. A wildcard whose
/// position matches none of the recognised shapes classifies as `Ambiguous`
/// and the mapper reports it instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternShape {
    /// Neither pattern has a wildcard; the destination is the replace pattern verbatim
    NoWildcardEither,
    /// Both patterns have exactly one wildcard; positional prefix/suffix substitution
    BothSingleWildcard,
    /// The search pattern wildcards both stem and extension (`*.*`)
    SearchDoubleDotWildcard,
    /// The search pattern starts with `*.`; the extension anchor is literal
    SearchWildcardWithDotSuffix,
    /// The search pattern starts with `*`; the trailing anchor is literal
    SearchWildcardAtStart,
    /// The search pattern ends with `.*`; the stem anchor is literal
    SearchDotWildcardSuffix,
    /// The search pattern ends with `*`; the leading anchor is literal
    SearchWildcardAtEnd,
    /// The replace pattern starts with `*.`; the wildcard carries the source stem
    ReplaceWildcardWithDotSuffix,
    /// The replace pattern starts with `*`; the wildcard carries the source stem
    ReplaceWildcardAtStart,
    /// The replace pattern ends with `.*`; the wildcard carries the source extension
    ReplaceDotWildcardSuffix,
    /// The replace pattern ends with `*`; the wildcard carries the whole source name
    ReplaceWildcardAtEnd,
    /// The wildcard position cannot be resolved to a deterministic substitution
    Ambiguous,
}

/// Classifies a search/replace pattern pair
///
/// Wildcard counts decide the first two variants; everything else falls
/// through to anchor-shape detection on the pattern that carries the
/// wildcard. Pure, no side effects: unrecognised combinations classify as
/// `Ambiguous` rather than failing.
///
/// # Arguments
/// * `search` - The search pattern
/// * `replace` - The replace pattern
///
/// # Returns
/// * `PatternShape` - The shape deciding which substitution rule applies
pub fn classify(search: &Pattern, replace: &Pattern) -> PatternShape {
    match (search.wildcard_count(), replace.wildcard_count()) {
        (1, 1) => PatternShape::BothSingleWildcard,
        (0, 0) => PatternShape::NoWildcardEither,
        (0, _) => replace_shape(replace.raw()),
        (_, _) => search_shape(search.raw()),
    }
}

/// Detects the anchor shape of a search pattern carrying a wildcard
///
/// Tests run in precedence order; the first match wins.
fn search_shape(raw: &str) -> PatternShape {
    if raw.contains(DOUBLE_DOT_WILDCARD) {
        PatternShape::SearchDoubleDotWildcard
    } else if raw.starts_with(WILDCARD_DOT_PREFIX) {
        PatternShape::SearchWildcardWithDotSuffix
    } else if raw.starts_with(WILDCARD) {
        PatternShape::SearchWildcardAtStart
    } else if raw.ends_with(DOT_WILDCARD_SUFFIX) {
        PatternShape::SearchDotWildcardSuffix
    } else if raw.ends_with(WILDCARD) {
        PatternShape::SearchWildcardAtEnd
    } else {
        PatternShape::Ambiguous
    }
}

/// Detects the anchor shape of a replace pattern whose search side is literal
///
/// Mirrors the search-side tests in the same precedence order. The leading
/// `*.` test subsumes `*.*` containment at the front of the pattern.
fn replace_shape(raw: &str) -> PatternShape {
    if raw.starts_with(WILDCARD_DOT_PREFIX) {
        PatternShape::ReplaceWildcardWithDotSuffix
    } else if raw.starts_with(WILDCARD) {
        PatternShape::ReplaceWildcardAtStart
    } else if raw.ends_with(DOT_WILDCARD_SUFFIX) {
        PatternShape::ReplaceDotWildcardSuffix
    } else if raw.ends_with(WILDCARD) {
        PatternShape::ReplaceWildcardAtEnd
    } else {
        PatternShape::Ambiguous
    }
}
