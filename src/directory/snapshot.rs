use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::resource::model::{Channel, ChannelMembership, ChannelPathMapping, ContextType, Team};
use crate::resource::role::PermissionLevel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultTeam {
    pub user_id: i64,
    pub team_id: i64,
}

/// Effective level granted to a user in one team or channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grant {
    pub user_id: i64,
    pub context: ContextType,
    pub context_id: i64,
    pub level: PermissionLevel,
}

/// Serializable state of a directory, as read from a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DirectorySnapshot {
    pub teams: Vec<Team>,
    pub channels: Vec<Channel>,
    pub memberships: Vec<ChannelMembership>,
    pub channel_paths: Vec<ChannelPathMapping>,
    pub default_teams: Vec<DefaultTeam>,
    pub grants: Vec<Grant>,
}

impl DirectorySnapshot {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing directory snapshot")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading snapshot {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }
}
