//! Logical group derivation from column headers.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing sub-group suffix: `/N` or `-N` digits with an optional
/// final marker character.
static GROUP_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(/|-)\d+.?$").unwrap());

/// Derive the owning group label of one sub-column header.
///
/// A header without the suffix is its own label.
pub fn group_label(sub_column: &str) -> String {
    GROUP_SUFFIX.replace(sub_column, "").into_owned()
}

/// Group sub-column headers under their derived labels, preserving
/// first-seen order of groups and of members within a group.
pub fn resolve_groups(columns: &[String]) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for column in columns {
        groups
            .entry(group_label(column))
            .or_default()
            .push(column.clone());
    }
    groups
}
