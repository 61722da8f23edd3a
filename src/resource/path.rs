//! Slash-delimited path algebra shared by every resource kind.
//! Paths here are virtual ('/'-separated, always absolute once normalized); nothing touches the host filesystem.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A name carried a '/' after normalization; only hand-built components can.
    #[error("path name '{0}' contains an embedded '/'")]
    EmbeddedSeparator(String),
}

/// A path split into its parent and final name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathComponents {
    pub parent: String,
    pub name: String,
}

impl PathComponents {
    pub fn new(parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self { parent: parent.into(), name: name.into() }
    }

    /// Reassemble the absolute path. The root parent yields `/name`; an empty name yields the parent.
    pub fn full_path(&self) -> String {
        if self.name.is_empty() {
            return self.parent.clone();
        }
        if self.parent == "/" {
            format!("/{}", self.name)
        } else {
            format!("{}/{}", self.parent, self.name)
        }
    }

    /// `Ok(false)` for malformed components (no name, blank parent),
    /// `Err` when the name holds a separator.
    pub fn is_valid(&self) -> Result<bool, PathError> {
        if self.name.contains('/') {
            return Err(PathError::EmbeddedSeparator(self.name.clone()));
        }
        if self.parent.trim().is_empty() || self.name.is_empty() {
            return Ok(false);
        }
        Ok(true)
    }
}

/// Normalize a UTF-8 name to NFC. Only used to compare names; paths keep their bytes.
pub fn normalize_nfc(input: &str) -> String {
    input.nfc().collect::<String>()
}

/// Split into segments, dropping the empty ones produced by leading, trailing
/// or repeated slashes. Segment bytes are kept as given.
pub fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn normalize(path: &str) -> PathComponents {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return PathComponents::new("/", "");
    }
    let mut segs: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
    // trimmed is non-empty and has no leading/trailing '/', so at least one segment survives
    let name = segs.pop().unwrap_or_default().to_string();
    let parent = if segs.is_empty() { "/".to_string() } else { format!("/{}", segs.join("/")) };
    PathComponents { parent, name }
}

pub fn is_valid(path: &str) -> Result<bool, PathError> {
    normalize(path).is_valid()
}

/// Every ancestor path including the path itself, shortest first:
/// `/A/B/C` -> `/A`, `/A/B`, `/A/B/C`.
pub fn all_parent_paths(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut acc = String::new();
    for seg in path.split('/').filter(|s| !s.is_empty()) {
        acc.push('/');
        acc.push_str(seg);
        out.push(acc.clone());
    }
    out
}

/// True when any segment is '.' or '..'.
pub fn contains_invalid_path(path: &str) -> bool {
    path.split('/').any(|seg| seg == "." || seg == "..")
}

/// Append segments to a root without doubling separators.
pub fn join<S: AsRef<str>>(root: &str, tail: &[S]) -> String {
    let mut out = root.trim_end_matches('/').to_string();
    for seg in tail {
        out.push('/');
        out.push_str(seg.as_ref());
    }
    if out.is_empty() { "/".to_string() } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_splits_parent_and_name() {
        assert_eq!(normalize("/A/B/C"), PathComponents::new("/A/B", "C"));
        assert_eq!(normalize("A//B///C/"), PathComponents::new("/A/B", "C"));
        assert_eq!(normalize("/single"), PathComponents::new("/", "single"));
        assert_eq!(normalize("///"), PathComponents::new("/", ""));
        assert_eq!(normalize(""), PathComponents::new("/", ""));
    }

    #[test]
    fn normalize_round_trip_is_idempotent() {
        for p in ["/A/B/C", "x", "//a//b/", "/My Files/docs/q1.pdf", "/a"] {
            let once = normalize(p);
            assert_eq!(normalize(&once.full_path()), once, "path {p}");
        }
    }

    #[test]
    fn validity_rules() {
        assert_eq!(is_valid("/a/b"), Ok(true));
        assert_eq!(is_valid("/a"), Ok(true));
        assert_eq!(is_valid("/"), Ok(false));
        assert_eq!(is_valid(""), Ok(false));
        assert_eq!(PathComponents::new("  ", "x").is_valid(), Ok(false));
        let err = PathComponents::new("/a", "b/c").is_valid().unwrap_err();
        assert_eq!(err, PathError::EmbeddedSeparator("b/c".into()));
    }

    #[test]
    fn parent_chain_is_shortest_first() {
        assert_eq!(all_parent_paths("/A/B/C"), vec!["/A", "/A/B", "/A/B/C"]);
        assert_eq!(all_parent_paths("A//B/"), vec!["/A", "/A/B"]);
        assert!(all_parent_paths("/").is_empty());
    }

    #[test]
    fn dot_segments_are_rejected() {
        assert!(contains_invalid_path("/a/./b"));
        assert!(contains_invalid_path("/a/../b"));
        assert!(contains_invalid_path(".."));
        assert!(!contains_invalid_path("/a/.hidden/b..c"));
    }

    #[test]
    fn segments_keep_decomposed_names() {
        let segs = split_segments("/f/1/Cafe\u{0301}//menu.md");
        assert_eq!(segs, vec!["f", "1", "Cafe\u{0301}", "menu.md"]);
    }

    #[test]
    fn nfc_composes_for_comparison() {
        // 'e' + combining acute becomes the precomposed form
        assert_eq!(normalize_nfc("Cafe\u{0301}"), "Caf\u{e9}");
        assert_eq!(normalize_nfc("Caf\u{e9}"), "Caf\u{e9}");
    }

    #[test]
    fn join_avoids_double_separators() {
        assert_eq!(join("/f/7/", &["docs", "x.txt"]), "/f/7/docs/x.txt");
        assert_eq!(join("/My Files", &[] as &[&str]), "/My Files");
        assert_eq!(join("/", &["a"]), "/a");
        assert_eq!(join("", &[] as &[&str]), "/");
    }
}
