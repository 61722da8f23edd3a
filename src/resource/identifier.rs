//! Identifier grammar. This is the only place that looks at the raw `f` / `cf` / `wf` prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ResolutionError;
use super::path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    TeamFile,
    ChannelFile,
    ChannelWiki,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::TeamFile, ResourceKind::ChannelFile, ResourceKind::ChannelWiki];

    /// Bare prefix segment ("f", "cf", "wf").
    pub fn segment(self) -> &'static str {
        match self {
            ResourceKind::TeamFile => "f",
            ResourceKind::ChannelFile => "cf",
            ResourceKind::ChannelWiki => "wf",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            ResourceKind::TeamFile => "/f",
            ResourceKind::ChannelFile => "/cf",
            ResourceKind::ChannelWiki => "/wf",
        }
    }

    pub fn resource_type(self) -> &'static str {
        match self {
            ResourceKind::TeamFile | ResourceKind::ChannelFile => "files",
            ResourceKind::ChannelWiki => "wiki",
        }
    }

    pub fn from_segment(seg: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.segment() == seg)
    }

    /// Kind named by the first segment of an identifier.
    pub fn from_identifier(identifier: &str) -> Result<Self, ResolutionError> {
        let first = identifier.split('/').find(|s| !s.is_empty());
        match first {
            None => Err(ResolutionError::malformed(identifier, "empty identifier")),
            Some(seg) => Self::from_segment(seg).ok_or_else(|| ResolutionError::malformed(identifier, "unknown resource prefix")),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.prefix()) }
}

/// A parsed `/<prefix>/<objectId>[/<rest...>]` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    pub kind: ResourceKind,
    pub object_id: i64,
    pub tail: Vec<String>,
}

impl ResourceIdentifier {
    /// Parse for a specific kind; the prefix must match.
    pub fn parse_as(identifier: &str, expected: ResourceKind) -> Result<Self, ResolutionError> {
        if path::contains_invalid_path(identifier) {
            return Err(ResolutionError::malformed(identifier, "'.' and '..' segments are not allowed"));
        }
        let mut segs = path::split_segments(identifier);
        if segs.len() < 2 {
            return Err(ResolutionError::malformed(identifier, "expected /<prefix>/<id>"));
        }
        if ResourceKind::from_segment(&segs[0]) != Some(expected) {
            return Err(ResolutionError::malformed(identifier, "prefix does not match resource kind"));
        }
        let object_id = parse_object_id(&segs[1]).ok_or_else(|| ResolutionError::malformed(identifier, "object id is not a decimal integer"))?;
        let tail = segs.split_off(2);
        Ok(Self { kind: expected, object_id, tail })
    }

    pub fn parse(identifier: &str) -> Result<Self, ResolutionError> {
        let kind = ResourceKind::from_identifier(identifier)?;
        Self::parse_as(identifier, kind)
    }

    /// `/<prefix>/<objectId>`
    pub fn base_path(&self) -> String {
        format!("{}/{}", self.kind.prefix(), self.object_id)
    }

    /// Tail as a slash-prefixed path; `/` when the identifier names the root.
    pub fn relative_path(&self) -> String {
        path::join("/", &self.tail)
    }

    /// Canonical identifier string (no empty segments, no trailing slash).
    pub fn canonical(&self) -> String {
        path::join(&self.base_path(), &self.tail)
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.canonical()) }
}

fn parse_object_id(seg: &str) -> Option<i64> {
    if seg.is_empty() || !seg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // One spelling per id: "007" would otherwise resolve as "7"
    if seg.len() > 1 && seg.starts_with('0') {
        return None;
    }
    seg.parse::<i64>().ok()
}
