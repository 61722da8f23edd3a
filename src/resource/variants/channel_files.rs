//! `/cf/<mappingId>/...` — a channel's shared files.

use tracing::debug;

use crate::identity::Principal;
use crate::resource::error::ResolutionError;
use crate::resource::identifier::ResourceKind;
use crate::resource::model::{ChannelAssociation, PathType};
use crate::resource::path;
use crate::resource::permission::{Capability, PermissionSet};
use crate::resource::role::ChannelRole;
use crate::resource::translated::ResolvedPath;

use super::channel_access::{lookup_channel_path, open_channel_path, ChannelAccess};
use super::{level_permissions, Collaborators, Resource};

pub struct ChannelFileResource {
    collab: Collaborators,
}

impl ChannelFileResource {
    pub fn new(collab: Collaborators) -> Self { Self { collab } }
}

/// Level-derived set with the collaborator role floor: below collaborator nobody
/// writes or deletes, whatever the effective level says.
pub(crate) fn channel_file_permissions(access: ChannelAccess) -> PermissionSet {
    match access {
        ChannelAccess::ServiceAdmin => PermissionSet::full(),
        ChannelAccess::Member { role, level, muted_one_on_one } => {
            let base = level_permissions(level);
            if role.is_below(ChannelRole::Collaborator) || muted_one_on_one {
                base.without(&[Capability::Write, Capability::Delete])
            } else {
                base
            }
        }
    }
}

impl Resource for ChannelFileResource {
    fn kind(&self) -> ResourceKind { ResourceKind::ChannelFile }

    fn resolve(&self, identifier: &str, principal: &Principal) -> Result<ResolvedPath, ResolutionError> {
        let opened = open_channel_path(&self.collab, identifier, self.kind(), PathType::File, principal)?;
        let cfg = self.collab.config.effective(opened.team.id);
        let permissions = channel_file_permissions(opened.access);

        let physical_path = path::join(&opened.mapping.path_value, &opened.id.tail);
        let channel_root = path::join(&cfg.shared_channels_root, &[opened.channel.name.as_str()]);
        let display_path = path::join(&channel_root, &opened.id.tail);
        debug!(target: "teamfs::resolve", "{} -> {} perms={:?}", identifier, physical_path, permissions.granted());

        Ok(ResolvedPath {
            kind: self.kind(),
            physical_path,
            channel_display_path: Some(display_path.clone()),
            display_path,
            relative_path: opened.id.relative_path(),
            resource_base_path: opened.id.base_path(),
            permissions,
            team: opened.team,
            channel: Some(opened.channel),
            path_type: Some(PathType::File),
            protected: false,
        })
    }

    fn associated_channels(&self, identifier: &str) -> Result<Vec<ChannelAssociation>, ResolutionError> {
        match lookup_channel_path(&self.collab, identifier, self.kind(), PathType::File) {
            Ok((id, mapping, _, _)) => Ok(vec![ChannelAssociation { channel_id: mapping.channel_id, channel_relative_path: id.canonical() }]),
            Err(e @ ResolutionError::MalformedIdentifier { .. }) => Err(e),
            Err(_) => Ok(Vec::new()),
        }
    }
}
