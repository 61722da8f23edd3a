//! Records handed to the resolver by the data-lookup collaborator.
//! Plain data; the resolver never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::ChannelRole;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    #[serde(default)]
    pub one_on_one: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelMembership {
    pub channel_id: i64,
    pub user_id: i64,
    pub role: ChannelRole,
    #[serde(default)]
    pub muted: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PathType {
    File,
    Wiki,
    Deleted,
}

impl PathType {
    pub fn as_str(self) -> &'static str {
        match self {
            PathType::File => "file",
            PathType::Wiki => "wiki",
            PathType::Deleted => "deleted",
        }
    }
}

/// Binds the numeric id exposed in `/cf/<id>` and `/wf/<id>` to a channel's
/// file root or wiki root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelPathMapping {
    pub id: i64,
    pub channel_id: i64,
    pub path_type: PathType,
    pub path_value: String,
    pub created_on: DateTime<Utc>,
    pub created_by: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContextType {
    Team,
    Channel,
}

/// One channel a resource is also reachable from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelAssociation {
    pub channel_id: i64,
    pub channel_relative_path: String,
}
