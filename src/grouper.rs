use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::models::{LicenseGroup, ResolvedEntry};

/// Characters that end a line for the purpose of building the dedup key.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_line_break(c: char) -> bool {
    LINE_BREAKS.contains(&c)
}

/// Canonical form of a license body: trailing whitespace stripped from every line,
/// blank lines dropped, joined with `\n`.
pub fn normalize_key(text: &str) -> String {
    text.split(is_line_break)
        .filter(|line| !line.trim().is_empty())
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse entries with identical normalized text into groups, in order of first occurrence.
///
/// The first entry of a group supplies its text; later members only add their
/// library name and URL.
pub fn group_entries(entries: Vec<ResolvedEntry>) -> Vec<LicenseGroup> {
    let mut groups: IndexMap<String, LicenseGroup> = IndexMap::new();

    for entry in entries {
        let key = normalize_key(&entry.text);
        let group = groups.entry(key).or_insert_with(|| LicenseGroup {
            libraries: BTreeSet::new(),
            text: entry.text.clone(),
            urls: BTreeSet::new(),
        });
        group.libraries.insert(entry.library);
        if let Some(url) = entry.url {
            group.urls.insert(url);
        }
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(library: &str, text: &str, url: Option<&str>) -> ResolvedEntry {
        ResolvedEntry {
            library: library.to_string(),
            text: text.to_string(),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("a  \n\n   \n  b\t\r\nc"), "a\n  b\nc");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn test_identical_after_normalization_merge() {
        let groups = group_entries(vec![
            resolved("LibB", "MIT License\n\nCopyright  ", None),
            resolved("LibA", "MIT License\r\nCopyright", None),
        ]);
        assert_eq!(groups.len(), 1);
        let libs: Vec<&str> = groups[0].libraries.iter().map(String::as_str).collect();
        assert_eq!(libs, vec!["LibA", "LibB"]);
        assert_eq!(groups[0].text, "MIT License\n\nCopyright  ");
    }

    #[test]
    fn test_merge_independent_of_order() {
        let a = resolved("LibA", "Same text", None);
        let b = resolved("LibB", "Same text\n", None);
        let c = resolved("LibC", "Other", None);

        let forward = group_entries(vec![a.clone(), c.clone(), b.clone()]);
        let backward = group_entries(vec![b, c, a]);
        assert_eq!(forward.len(), 2);
        assert_eq!(backward.len(), 2);
        assert_eq!(forward[0].libraries, backward[0].libraries);
    }

    #[test]
    fn test_groups_keep_first_occurrence_order_and_urls() {
        let url = "https://opensource.org/licenses/MIT";
        let groups = group_entries(vec![
            resolved("Zeta", "Apache License", None),
            resolved("Alpha", "[License URL] https://opensource.org/licenses/MIT", Some(url)),
            resolved("Beta", "[License URL] https://opensource.org/licenses/MIT", Some(url)),
        ]);
        assert_eq!(groups.len(), 2);
        assert!(groups[0].libraries.contains("Zeta"));
        assert_eq!(groups[1].libraries.len(), 2);
        assert_eq!(groups[1].urls.iter().collect::<Vec<_>>(), vec![url]);
        assert!(groups[0].urls.is_empty());
    }
}
