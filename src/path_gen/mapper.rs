//! Destination filename mapping
//!
//! This module computes the destination filename for a single source file
//! from a classified search/replace pattern pair. One handler per pattern
//! shape; every handler is a pure string transformation with no filesystem
//! access, so identical inputs always produce identical output.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DOT, WILDCARD, WILDCARD_CHAR};
use crate::errors::{
    ambiguous_wildcard_error, invalid_filename_error, unparsable_dot_pattern_error, Result,
};
use crate::pattern::{Pattern, PatternShape};

/// A single source-to-destination rename, immutable once computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameMapping {
    /// The source filename
    pub source_name: String,
    /// The computed destination filename
    pub dest_name: String,
}

/// Computes the destination filename for a source file
///
/// The shape comes from classifying the pattern pair once per run; the
/// mapper then applies the shape's substitution rule to each filename.
/// Anchors that cannot be located in the source name are reported as
/// ambiguous rather than guessed around.
///
/// # Arguments
/// * `shape` - The classification of the pattern pair
/// * `search` - The search pattern
/// * `replace` - The replace pattern
/// * `source_name` - A filename that matched the search pattern
///
/// # Returns
/// * `Result<String>` - The destination filename
///
/// # Errors
/// * Returns an error if a pattern component cannot be located in the source name
/// * Returns an error if a double-dot pattern does not split into stem and extension
/// * Returns an error if the shape is ambiguous
/// * Returns an error if the computed destination is not a valid filename
pub fn map_filename(
    shape: PatternShape,
    search: &Pattern,
    replace: &Pattern,
    source_name: &str,
) -> Result<String> {
    let destination = match shape {
        PatternShape::NoWildcardEither => replace.raw().to_string(),
        PatternShape::BothSingleWildcard => map_both_single(search, replace, source_name)?,
        PatternShape::SearchDoubleDotWildcard => map_double_dot(search, replace, source_name)?,
        PatternShape::SearchWildcardWithDotSuffix => {
            // Anchor is the literal extension part, dot included
            let anchor = &search.raw()[WILDCARD.len()..];
            replace_from_anchor(source_name, anchor, replace.raw(), search.raw())?
        }
        PatternShape::SearchWildcardAtStart => {
            let anchor = &search.raw()[WILDCARD.len()..];
            replace_from_anchor(source_name, anchor, replace.raw(), search.raw())?
        }
        PatternShape::SearchDotWildcardSuffix => {
            // Anchor is the literal stem part, dot included
            let anchor = &search.raw()[..search.raw().len() - WILDCARD.len()];
            replace_through_anchor(source_name, anchor, replace.raw(), search.raw())?
        }
        PatternShape::SearchWildcardAtEnd => {
            let anchor = &search.raw()[..search.raw().len() - WILDCARD.len()];
            replace_through_anchor(source_name, anchor, replace.raw(), search.raw())?
        }
        PatternShape::ReplaceWildcardWithDotSuffix => {
            // The wildcard carries the source stem, the literal carries the new extension
            let literal = &replace.raw()[WILDCARD.len()..];
            append_to_stem(source_name, literal, replace.raw())?
        }
        PatternShape::ReplaceWildcardAtStart => {
            let literal = &replace.raw()[WILDCARD.len()..];
            append_to_stem(source_name, literal, replace.raw())?
        }
        PatternShape::ReplaceDotWildcardSuffix => {
            // The wildcard carries the source extension
            let literal = &replace.raw()[..replace.raw().len() - WILDCARD.len()];
            prepend_to_extension(source_name, literal, replace.raw())?
        }
        PatternShape::ReplaceWildcardAtEnd => {
            // The wildcard carries the whole source name
            let literal = &replace.raw()[..replace.raw().len() - WILDCARD.len()];
            ensure_literal_anchor(literal, replace.raw(), source_name)?;
            format!("{literal}{source_name}")
        }
        PatternShape::Ambiguous => {
            return Err(ambiguous_wildcard_error(replace.raw(), source_name));
        }
    };

    ensure_valid_filename(&destination)?;
    Ok(destination)
}

/// Positional substitution for a pair of single-wildcard patterns
///
/// The search pattern splits into the text before and after its wildcard,
/// and so does the replace pattern. The first occurrence of each search
/// component in the source name is replaced by the paired replace
/// component; an empty search component prepends or appends instead, since
/// substituting an empty string would be a no-op.
fn map_both_single(search: &Pattern, replace: &Pattern, source_name: &str) -> Result<String> {
    let with_prefix = if search.prefix().is_empty() {
        format!("{}{}", replace.prefix(), source_name)
    } else {
        substitute_first(source_name, search.prefix(), replace.prefix(), search.raw())?
    };

    if search.suffix().is_empty() {
        Ok(format!("{}{}", with_prefix, replace.suffix()))
    } else {
        substitute_first(&with_prefix, search.suffix(), replace.suffix(), search.raw())
    }
}

/// Stem and extension substitution for a `*.*` search pattern
///
/// Both patterns must split at their first dot into exactly two components.
/// The source splits into its stem and extension the same way; a source
/// without a dot has its whole name as the stem and an empty extension.
/// Wildcards inside the replace components carry the matching source part.
fn map_double_dot(search: &Pattern, replace: &Pattern, source_name: &str) -> Result<String> {
    split_stem_ext(search.raw()).ok_or_else(|| unparsable_dot_pattern_error(search.raw()))?;
    let (replace_stem, replace_ext) =
        split_stem_ext(replace.raw()).ok_or_else(|| unparsable_dot_pattern_error(replace.raw()))?;

    let (source_stem, source_ext) = split_stem_ext(source_name).unwrap_or((source_name, ""));

    let stem = fill_component(replace_stem, source_stem);
    let ext = fill_component(replace_ext, source_ext);

    Ok(format!("{stem}{DOT}{ext}"))
}

/// Replaces the anchor and everything after it with the replacement text
///
/// Used by the leading-wildcard search shapes: the source text before the
/// anchor was matched by the wildcard and survives.
fn replace_from_anchor(
    source_name: &str,
    anchor: &str,
    replacement: &str,
    pattern: &str,
) -> Result<String> {
    ensure_literal_anchor(replacement, replacement, source_name)?;
    let position = locate_anchor(source_name, anchor, pattern)?;
    Ok(format!("{}{}", &source_name[..position], replacement))
}

/// Replaces the anchor and everything before it with the replacement text
///
/// Used by the trailing-wildcard search shapes: the source text after the
/// anchor was matched by the wildcard and survives.
fn replace_through_anchor(
    source_name: &str,
    anchor: &str,
    replacement: &str,
    pattern: &str,
) -> Result<String> {
    ensure_literal_anchor(replacement, replacement, source_name)?;
    let position = locate_anchor(source_name, anchor, pattern)?;
    Ok(format!(
        "{}{}",
        replacement,
        &source_name[position + anchor.len()..]
    ))
}

/// Appends the literal part of a leading-wildcard replace pattern to the source stem
fn append_to_stem(source_name: &str, literal: &str, pattern: &str) -> Result<String> {
    ensure_literal_anchor(literal, pattern, source_name)?;
    let stem = split_stem_ext(source_name)
        .map(|(stem, _)| stem)
        .unwrap_or(source_name);
    Ok(format!("{stem}{literal}"))
}

/// Prepends the literal part of a trailing-wildcard replace pattern to the source extension
fn prepend_to_extension(source_name: &str, literal: &str, pattern: &str) -> Result<String> {
    ensure_literal_anchor(literal, pattern, source_name)?;
    let ext = split_stem_ext(source_name).map(|(_, ext)| ext).unwrap_or("");
    Ok(format!("{literal}{ext}"))
}

/// Locates the first occurrence of a literal anchor in the source name
fn locate_anchor(source_name: &str, anchor: &str, pattern: &str) -> Result<usize> {
    ensure_literal_anchor(anchor, pattern, source_name)?;
    source_name
        .find(anchor)
        .ok_or_else(|| ambiguous_wildcard_error(pattern, source_name))
}

/// Rejects anchor or replacement text that still carries a wildcard
///
/// An anchor with a wildcard cannot be located literally, and a replacement
/// with one would leak the token into the destination name.
fn ensure_literal_anchor(anchor: &str, pattern: &str, source_name: &str) -> Result<()> {
    if anchor.contains(WILDCARD_CHAR) {
        return Err(ambiguous_wildcard_error(pattern, source_name));
    }
    Ok(())
}

/// Replaces the first occurrence of a pattern component in the value
fn substitute_first(value: &str, from: &str, to: &str, pattern: &str) -> Result<String> {
    if !value.contains(from) {
        return Err(ambiguous_wildcard_error(pattern, value));
    }
    Ok(value.replacen(from, to, 1))
}

/// Splits a filename or pattern at its first dot into stem and extension
fn split_stem_ext(value: &str) -> Option<(&str, &str)> {
    value
        .find(DOT)
        .map(|position| (&value[..position], &value[position + DOT.len_utf8()..]))
}

/// Fills a replace component's wildcard with the matching source part
fn fill_component(component: &str, value: &str) -> String {
    if component.contains(WILDCARD_CHAR) {
        component.replacen(WILDCARD, value, 1)
    } else {
        component.to_string()
    }
}

/// Verifies that a computed destination is a syntactically valid filename
fn ensure_valid_filename(name: &str) -> Result<()> {
    static INVALID_FILENAME: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"[/\\\x00]").expect("Failed to compile regex pattern for INVALID_FILENAME")
    });

    if name.is_empty() || INVALID_FILENAME.is_match(name) {
        return Err(invalid_filename_error(PathBuf::from(name)));
    }
    Ok(())
}
