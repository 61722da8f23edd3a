//! Channel roles and effective permission levels.

use serde::{Deserialize, Serialize};

/// Effective access tier computed per (principal, context). Ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    #[default]
    NoAccess,
    Read,
    Write,
    Manage,
    Owner,
}

impl PermissionLevel {
    pub fn at_least(self, floor: PermissionLevel) -> bool { self >= floor }
}

/// Member role within a channel. `Public` is synthetic: it stands for public-link
/// access and is never stored on a membership.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChannelRole {
    Public,
    Viewer,
    Collaborator,
    CollaboratorWiki,
    Manager,
    Admin,
}

impl ChannelRole {
    pub fn rank(self) -> u32 {
        match self {
            ChannelRole::Public => 0,
            ChannelRole::Viewer => 10,
            ChannelRole::Collaborator => 20,
            ChannelRole::CollaboratorWiki => 30,
            ChannelRole::Manager => 50,
            ChannelRole::Admin => 100,
        }
    }

    pub fn is_below(self, other: ChannelRole) -> bool { self.rank() < other.rank() }
}

impl PartialOrd for ChannelRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
}

impl Ord for ChannelRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering { self.rank().cmp(&other.rank()) }
}
