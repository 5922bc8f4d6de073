//! Tag name normalization and reconciliation.
//!
//! Tags are identified by their exact name. Incoming tag lists are trimmed, stripped of
//! blanks and de-duplicated before they reach the data layer, and updates only touch the
//! links that actually changed.

use std::collections::HashSet;

/// Trims each name, drops blank names and removes duplicates, keeping first occurrence order.
pub fn normalize_tag_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();

    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() || !seen.insert(name.to_string()) {
            continue;
        }
        normalized.push(name.to_string());
    }

    normalized
}

/// Difference between the tags a post currently has and the tags it should have.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    /// Requested names not linked yet, in request order.
    pub to_add: Vec<String>,
    /// Linked names absent from the request, in current link order.
    pub to_remove: Vec<String>,
}

impl TagDiff {
    /// Computes the links to create and delete to turn `current` into `requested`.
    ///
    /// Tags present in both lists are left untouched.
    pub fn between(current: &[String], requested: &[String]) -> Self {
        let current_set: HashSet<&str> = current.iter().map(String::as_str).collect();
        let requested_set: HashSet<&str> = requested.iter().map(String::as_str).collect();

        Self {
            to_add: requested
                .iter()
                .filter(|name| !current_set.contains(name.as_str()))
                .cloned()
                .collect(),
            to_remove: current
                .iter()
                .filter(|name| !requested_set.contains(name.as_str()))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
