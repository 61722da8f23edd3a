//! Gate shared by the channel file and channel wiki variants: mapping lookup,
//! membership check and effective level.

use tracing::{debug, info};

use crate::identity::Principal;
use crate::resource::error::ResolutionError;
use crate::resource::identifier::{ResourceIdentifier, ResourceKind};
use crate::resource::model::{Channel, ChannelMembership, ChannelPathMapping, ContextType, PathType, Team};
use crate::resource::role::{ChannelRole, PermissionLevel};

use super::Collaborators;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChannelAccess {
    ServiceAdmin,
    Member { role: ChannelRole, level: PermissionLevel, muted_one_on_one: bool },
}

#[derive(Debug, Clone)]
pub(crate) struct OpenedChannelPath {
    pub id: ResourceIdentifier,
    pub mapping: ChannelPathMapping,
    pub channel: Channel,
    pub team: Team,
    pub access: ChannelAccess,
}

/// Look up the mapping, channel and team behind a channel identifier without any access check.
pub(crate) fn lookup_channel_path(
    c: &Collaborators,
    identifier: &str,
    kind: ResourceKind,
    expected: PathType,
) -> Result<(ResourceIdentifier, ChannelPathMapping, Channel, Team), ResolutionError> {
    let id = ResourceIdentifier::parse_as(identifier, kind)?;
    let mapping = c.lookup.get_channel_path_by_id(id.object_id).ok_or_else(|| ResolutionError::UnknownChannelPath {
        identifier: identifier.to_string(),
        path_id: id.object_id,
    })?;
    match mapping.path_type {
        PathType::Deleted => return Err(ResolutionError::ChannelGone { identifier: identifier.to_string() }),
        t if t != expected => {
            return Err(ResolutionError::WrongPathType {
                identifier: identifier.to_string(),
                path_id: mapping.id,
                expected: expected.as_str(),
            })
        }
        _ => {}
    }
    let channel = c.lookup.get_channel_by_id(mapping.channel_id).ok_or_else(|| ResolutionError::ChannelGone { identifier: identifier.to_string() })?;
    let team = c.lookup.get_team_by_id(channel.team_id).ok_or_else(|| ResolutionError::UnknownTeam {
        identifier: identifier.to_string(),
        team_id: channel.team_id,
    })?;
    Ok((id, mapping, channel, team))
}

pub(crate) fn open_channel_path(
    c: &Collaborators,
    identifier: &str,
    kind: ResourceKind,
    expected: PathType,
    principal: &Principal,
) -> Result<OpenedChannelPath, ResolutionError> {
    let (id, mapping, channel, team) = lookup_channel_path(c, identifier, kind, expected)?;
    debug!(target: "teamfs::resolve", "{} mapping={} channel={} team={}", identifier, mapping.id, channel.id, team.id);

    if principal.service_admin {
        return Ok(OpenedChannelPath { id, mapping, channel, team, access: ChannelAccess::ServiceAdmin });
    }

    let membership: Option<ChannelMembership> = if principal.public {
        None
    } else {
        match c.lookup.get_user_channel_membership(channel.id, principal.user_id) {
            Some(m) => Some(m),
            None => {
                info!(target: "teamfs::resolve", "deny {}: user {} is not a member of channel {}", identifier, principal.user_id, channel.id);
                return Err(ResolutionError::forbidden(identifier, "not a channel member"));
            }
        }
    };
    let role = membership.as_ref().map(|m| m.role).unwrap_or(ChannelRole::Public);

    if c.config.effective(team.id).invalidate_permission_cache {
        c.lookup.invalidate_effective_permission_cache(principal.user_id);
    }
    let level = c.permissions.get_effective_permission(principal, ContextType::Channel, channel.id);
    if !level.at_least(PermissionLevel::Read) {
        info!(target: "teamfs::resolve", "deny {}: channel level {:?} below read", identifier, level);
        return Err(ResolutionError::forbidden(identifier, "channel permission below read"));
    }
    let muted_one_on_one = channel.one_on_one && membership.as_ref().map(|m| m.muted).unwrap_or(false);
    debug!(target: "teamfs::resolve", "{} role={:?} level={:?} muted_one_on_one={}", identifier, role, level, muted_one_on_one);

    Ok(OpenedChannelPath { id, mapping, channel, team, access: ChannelAccess::Member { role, level, muted_one_on_one } })
}
