//! `/wf/<mappingId>/...` — a channel's wiki.
//!
//! Wiki edit rights come from the member's role first and the effective level
//! second, so they are narrower than file rights for the same rank:
//!
//! | role              | write        | delete        |
//! |-------------------|--------------|---------------|
//! | public, viewer    | no           | no            |
//! | collaborator      | no           | no            |
//! | collaborator_wiki | level>=write | no            |
//! | manager           | level>=write | level>=write  |
//! | admin             | level>=write | level>=manage |
//!
//! Every role that passes the channel gate may list and read.

use tracing::debug;

use crate::identity::Principal;
use crate::resource::error::ResolutionError;
use crate::resource::identifier::ResourceKind;
use crate::resource::model::{ChannelAssociation, PathType};
use crate::resource::path;
use crate::resource::permission::{Capability, PermissionSet};
use crate::resource::role::{ChannelRole, PermissionLevel};
use crate::resource::translated::ResolvedPath;

use super::channel_access::{lookup_channel_path, open_channel_path, ChannelAccess};
use super::{Collaborators, Resource};

pub struct ChannelWikiResource {
    collab: Collaborators,
}

impl ChannelWikiResource {
    pub fn new(collab: Collaborators) -> Self { Self { collab } }
}

pub(crate) fn wiki_permissions(access: ChannelAccess) -> PermissionSet {
    let (role, level, muted) = match access {
        ChannelAccess::ServiceAdmin => return PermissionSet::full(),
        ChannelAccess::Member { role, level, muted_one_on_one } => (role, level, muted_one_on_one),
    };
    let can_write = level.at_least(PermissionLevel::Write);
    let (write, delete) = match role {
        ChannelRole::Public | ChannelRole::Viewer | ChannelRole::Collaborator => (false, false),
        ChannelRole::CollaboratorWiki => (can_write, false),
        ChannelRole::Manager => (can_write, can_write),
        ChannelRole::Admin => (can_write, level.at_least(PermissionLevel::Manage)),
    };
    let set = PermissionSet::from_pairs([
        (Capability::List, true),
        (Capability::Read, true),
        (Capability::Write, write),
        (Capability::Delete, delete),
        (Capability::Own, false),
    ]);
    if muted { set.without(&[Capability::Write, Capability::Delete]) } else { set }
}

impl Resource for ChannelWikiResource {
    fn kind(&self) -> ResourceKind { ResourceKind::ChannelWiki }

    fn resolve(&self, identifier: &str, principal: &Principal) -> Result<ResolvedPath, ResolutionError> {
        let opened = open_channel_path(&self.collab, identifier, self.kind(), PathType::Wiki, principal)?;
        let permissions = wiki_permissions(opened.access);

        let physical_path = path::join(&opened.mapping.path_value, &opened.id.tail);
        // The wiki is shown under its own identifier
        let display_path = opened.id.canonical();
        debug!(target: "teamfs::resolve", "{} -> {} perms={:?}", identifier, physical_path, permissions.granted());

        Ok(ResolvedPath {
            kind: self.kind(),
            physical_path,
            display_path,
            relative_path: opened.id.relative_path(),
            resource_base_path: opened.id.base_path(),
            channel_display_path: None,
            permissions,
            team: opened.team,
            channel: Some(opened.channel),
            path_type: Some(PathType::Wiki),
            protected: false,
        })
    }

    fn associated_channels(&self, identifier: &str) -> Result<Vec<ChannelAssociation>, ResolutionError> {
        match lookup_channel_path(&self.collab, identifier, self.kind(), PathType::Wiki) {
            Ok((id, mapping, _, _)) => Ok(vec![ChannelAssociation { channel_id: mapping.channel_id, channel_relative_path: id.canonical() }]),
            Err(e @ ResolutionError::MalformedIdentifier { .. }) => Err(e),
            Err(_) => Ok(Vec::new()),
        }
    }
}
