use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Resolver settings applied to every team unless overridden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobalResolverConfig {
    /// Display root for team files
    pub my_files_root: String,
    /// Display root under which each channel's shared files appear
    pub shared_channels_root: String,
    /// Team-level folder holding one sub-folder per channel
    pub channels_folder: String,
    /// Folder inside a channel folder that backs the channel's shared files
    pub channel_files_folder: String,
    /// Drop the principal's cached permission state before channel checks
    pub invalidate_permission_cache: bool,
    /// Refuse delete on the channels folder and on channel roots inside team files
    pub protect_channel_folders: bool,
}

impl Default for GlobalResolverConfig {
    fn default() -> Self {
        Self {
            my_files_root: "/My Files".to_string(),
            shared_channels_root: "/Shared Channels".to_string(),
            channels_folder: "Channels".to_string(),
            channel_files_folder: "files".to_string(),
            invalidate_permission_cache: true,
            protect_channel_folders: true,
        }
    }
}

/// Per-team overrides. Unspecified values inherit from Global.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TeamConfigOverride {
    pub my_files_root: Option<String>,
    pub channels_folder: Option<String>,
    pub channel_files_folder: Option<String>,
    pub protect_channel_folders: Option<bool>,
}

/// Fully resolved config used during a single resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectiveConfig {
    pub my_files_root: String,
    pub shared_channels_root: String,
    pub channels_folder: String,
    pub channel_files_folder: String,
    pub invalidate_permission_cache: bool,
    pub protect_channel_folders: bool,
}

impl EffectiveConfig {
    /// Build an effective config from Global + optional team override.
    pub fn from_layers(global: &GlobalResolverConfig, team: Option<&TeamConfigOverride>) -> Self {
        let mut eff = Self {
            my_files_root: global.my_files_root.clone(),
            shared_channels_root: global.shared_channels_root.clone(),
            channels_folder: global.channels_folder.clone(),
            channel_files_folder: global.channel_files_folder.clone(),
            invalidate_permission_cache: global.invalidate_permission_cache,
            protect_channel_folders: global.protect_channel_folders,
        };
        if let Some(ov) = team {
            if let Some(v) = &ov.my_files_root { eff.my_files_root = v.clone(); }
            if let Some(v) = &ov.channels_folder { eff.channels_folder = v.clone(); }
            if let Some(v) = &ov.channel_files_folder { eff.channel_files_folder = v.clone(); }
            if let Some(v) = ov.protect_channel_folders { eff.protect_channel_folders = v; }
        }
        eff
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self { Self::from_layers(&GlobalResolverConfig::default(), None) }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ResolverConfig {
    pub global: GlobalResolverConfig,
    /// Keyed by team id
    pub teams: HashMap<i64, TeamConfigOverride>,
}

impl ResolverConfig {
    pub fn effective(&self, team_id: i64) -> EffectiveConfig {
        EffectiveConfig::from_layers(&self.global, self.teams.get(&team_id))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Self = serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    /// Apply `TEAMFS_*` environment overrides to the global layer.
    pub fn with_env(mut self) -> Self {
        self.apply_vars(|k| std::env::var(k).ok());
        self
    }

    pub fn from_env() -> Self { Self::default().with_env() }

    fn apply_vars<F: Fn(&str) -> Option<String>>(&mut self, get: F) {
        let g = &mut self.global;
        if let Some(v) = get("TEAMFS_MY_FILES_ROOT") { g.my_files_root = v; }
        if let Some(v) = get("TEAMFS_SHARED_CHANNELS_ROOT") { g.shared_channels_root = v; }
        if let Some(v) = get("TEAMFS_CHANNELS_FOLDER") { g.channels_folder = v; }
        if let Some(v) = get("TEAMFS_CHANNEL_FILES_FOLDER") { g.channel_files_folder = v; }
    }
}

#[cfg(test)]
mod config_tests;
