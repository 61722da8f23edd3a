//! Mirrors team files that live under `Channels/<name>/files` into the owning
//! channel's shared-file tree.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

use crate::config::EffectiveConfig;
use crate::resource::identifier::{ResourceIdentifier, ResourceKind};
use crate::resource::lookup::DataLookup;
use crate::resource::model::{ChannelAssociation, PathType};
use crate::resource::path;

/// A team-file tail that sits inside a channel's file root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelFilesMatch {
    pub channel_name: String,
    /// Segments below the channel file root
    pub rest: Vec<String>,
}

// Compiled patterns keyed by (channels folder, channel files folder)
static SHAPES: Lazy<RwLock<HashMap<(String, String), Regex>>> = Lazy::new(|| RwLock::new(HashMap::new()));

fn channel_files_regex(cfg: &EffectiveConfig) -> Option<Regex> {
    let key = (cfg.channels_folder.clone(), cfg.channel_files_folder.clone());
    if let Some(rx) = SHAPES.read().get(&key) {
        return Some(rx.clone());
    }
    let pattern = format!(
        "^/{}/[^/]+/{}(?:/.*)?$",
        regex::escape(&path::normalize_nfc(&cfg.channels_folder)),
        regex::escape(&path::normalize_nfc(&cfg.channel_files_folder))
    );
    let rx = Regex::new(&pattern).ok()?;
    SHAPES.write().insert(key, rx.clone());
    Some(rx)
}

/// Match `/<channels>/<name>/<files>[/...]` against a team-relative path.
pub fn match_channel_files(relative_path: &str, cfg: &EffectiveConfig) -> Option<ChannelFilesMatch> {
    let rx = channel_files_regex(cfg)?;
    // Shape is tested in NFC; the channel name and rest keep the caller's bytes
    if !rx.is_match(&path::normalize_nfc(relative_path)) {
        return None;
    }
    let segs = path::split_segments(relative_path);
    let channel_name = segs.get(1)?.clone();
    let rest = segs.get(3..).map(<[String]>::to_vec).unwrap_or_default();
    Some(ChannelFilesMatch { channel_name, rest })
}

/// Stored `path_value` of the channel file root for `name` inside `team_base` (`/f/<teamId>`).
pub fn channel_files_root(team_base: &str, channel_name: &str, cfg: &EffectiveConfig) -> String {
    path::join(team_base, &[cfg.channels_folder.as_str(), channel_name, cfg.channel_files_folder.as_str()])
}

/// Channel-relative identifiers for a parsed team-file identifier.
pub fn team_file_associations(lookup: &dyn DataLookup, id: &ResourceIdentifier, cfg: &EffectiveConfig) -> Vec<ChannelAssociation> {
    let Some(m) = match_channel_files(&id.relative_path(), cfg) else { return Vec::new(); };
    let root = channel_files_root(&id.base_path(), &m.channel_name, cfg);
    let out: Vec<ChannelAssociation> = lookup
        .get_channel_paths_by_value(&root)
        .into_iter()
        .filter(|mapping| mapping.path_type == PathType::File)
        .map(|mapping| {
            let base = format!("{}/{}", ResourceKind::ChannelFile.prefix(), mapping.id);
            ChannelAssociation { channel_id: mapping.channel_id, channel_relative_path: path::join(&base, &m.rest) }
        })
        .collect();
    debug!(target: "teamfs::resolve", "{} mirrors into {} channel(s) via {}", id, out.len(), root);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_the_channel_files_shape() {
        let cfg = EffectiveConfig::default();
        let m = match_channel_files("/Channels/Eng/files/specs/a.md", &cfg).unwrap();
        assert_eq!(m.channel_name, "Eng");
        assert_eq!(m.rest, vec!["specs", "a.md"]);

        let root = match_channel_files("/Channels/Eng/files", &cfg).unwrap();
        assert!(root.rest.is_empty());

        assert!(match_channel_files("/Channels/Eng", &cfg).is_none());
        assert!(match_channel_files("/Channels/Eng/wiki/a.md", &cfg).is_none());
        assert!(match_channel_files("/docs/Channels/Eng/files/a.md", &cfg).is_none());
        assert!(match_channel_files("/Channels/Eng/filesX/a.md", &cfg).is_none());
    }

    #[test]
    fn folder_names_are_escaped() {
        let cfg = EffectiveConfig { channels_folder: "Chan.nels".into(), ..EffectiveConfig::default() };
        assert!(match_channel_files("/Chan.nels/Eng/files", &cfg).is_some());
        assert!(match_channel_files("/ChanXnels/Eng/files", &cfg).is_none());
    }

    #[test]
    fn decomposed_channel_names_are_kept() {
        let cfg = EffectiveConfig::default();
        let m = match_channel_files("/Channels/Cafe\u{0301}/files/menu.md", &cfg).unwrap();
        assert_eq!(m.channel_name, "Cafe\u{0301}");
        assert_eq!(channel_files_root("/f/7", &m.channel_name, &cfg), "/f/7/Channels/Cafe\u{0301}/files");
    }

    #[test]
    fn root_value_is_under_the_team_base() {
        let cfg = EffectiveConfig::default();
        assert_eq!(channel_files_root("/f/7", "Eng", &cfg), "/f/7/Channels/Eng/files");
    }
}
