//! `/f/<teamId>/...` — a team's "My Files" tree.

use tracing::{debug, info};

use crate::config::EffectiveConfig;
use crate::identity::Principal;
use crate::resource::error::ResolutionError;
use crate::resource::identifier::{ResourceIdentifier, ResourceKind};
use crate::resource::model::{ChannelAssociation, ContextType};
use crate::resource::path;
use crate::resource::permission::{Capability, PermissionSet};
use crate::resource::role::PermissionLevel;
use crate::resource::translated::ResolvedPath;

use super::associations::{match_channel_files, team_file_associations};
use super::{level_permissions, Collaborators, Resource};

pub struct TeamFileResource {
    collab: Collaborators,
}

impl TeamFileResource {
    pub fn new(collab: Collaborators) -> Self { Self { collab } }

    fn authorize(&self, identifier: &str, team_id: i64, principal: &Principal) -> Result<PermissionSet, ResolutionError> {
        if principal.service_admin {
            return Ok(PermissionSet::full());
        }
        let default_team = self.collab.lookup.get_default_team_for_user(principal.user_id);
        if default_team.as_ref().map(|t| t.id) != Some(team_id) {
            info!(target: "teamfs::resolve", "deny {}: team {} is not the default team of user {}", identifier, team_id, principal.user_id);
            return Err(ResolutionError::forbidden(identifier, "not the principal's team"));
        }
        let level = self.collab.permissions.get_effective_permission(principal, ContextType::Team, team_id);
        if !level.at_least(PermissionLevel::Read) {
            info!(target: "teamfs::resolve", "deny {}: team level {:?} below read", identifier, level);
            return Err(ResolutionError::forbidden(identifier, "team permission below read"));
        }
        Ok(level_permissions(level))
    }
}

/// True for the channels folder, a channel folder, and a channel file root.
/// These containers are created with the channel and must outlive any member's delete.
pub(crate) fn is_protected_container(tail: &[String], cfg: &EffectiveConfig) -> bool {
    if !cfg.protect_channel_folders || tail.is_empty() || tail.len() > 3 {
        return false;
    }
    // Names compare in NFC so either spelling of a folder is caught
    let tail: Vec<String> = tail.iter().map(|s| path::normalize_nfc(s)).collect();
    let channels_folder = path::normalize_nfc(&cfg.channels_folder);
    if tail[0] != channels_folder {
        return false;
    }
    let relative = path::join("/", &tail);
    let Some(channel_name) = tail.get(1) else { return true; };
    let files_folder = path::normalize_nfc(&cfg.channel_files_folder);
    let root = path::join("/", &[channels_folder.as_str(), channel_name.as_str(), files_folder.as_str()]);
    path::all_parent_paths(&root).contains(&relative)
}

impl Resource for TeamFileResource {
    fn kind(&self) -> ResourceKind { ResourceKind::TeamFile }

    fn resolve(&self, identifier: &str, principal: &Principal) -> Result<ResolvedPath, ResolutionError> {
        let id = ResourceIdentifier::parse_as(identifier, self.kind())?;
        let team = self.collab.lookup.get_team_by_id(id.object_id).ok_or_else(|| ResolutionError::UnknownTeam {
            identifier: identifier.to_string(),
            team_id: id.object_id,
        })?;
        let cfg = self.collab.config.effective(team.id);

        let mut permissions = self.authorize(identifier, team.id, principal)?;
        let protected = is_protected_container(&id.tail, &cfg);
        if protected {
            permissions = permissions.without(&[Capability::Delete]);
        }

        let relative_path = id.relative_path();
        let channel_display_path = match_channel_files(&relative_path, &cfg).map(|m| {
            let channel_root = path::join(&cfg.shared_channels_root, &[m.channel_name.as_str()]);
            path::join(&channel_root, &m.rest)
        });
        let physical_path = id.canonical();
        let display_path = path::join(&cfg.my_files_root, &id.tail);
        debug!(target: "teamfs::resolve", "{} -> {} protected={} perms={:?}", identifier, physical_path, protected, permissions.granted());

        Ok(ResolvedPath {
            kind: self.kind(),
            physical_path,
            display_path,
            relative_path,
            resource_base_path: id.base_path(),
            channel_display_path,
            permissions,
            team,
            channel: None,
            path_type: None,
            protected,
        })
    }

    fn associated_channels(&self, identifier: &str) -> Result<Vec<ChannelAssociation>, ResolutionError> {
        let id = ResourceIdentifier::parse_as(identifier, self.kind())?;
        let cfg = self.collab.config.effective(id.object_id);
        Ok(team_file_associations(self.collab.lookup.as_ref(), &id, &cfg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(p: &str) -> Vec<String> { path::split_segments(p) }

    #[test]
    fn channel_containers_are_protected() {
        let cfg = EffectiveConfig::default();
        assert!(is_protected_container(&tail("/Channels"), &cfg));
        assert!(is_protected_container(&tail("/Channels/Eng"), &cfg));
        assert!(is_protected_container(&tail("/Channels/Eng/files"), &cfg));
        assert!(!is_protected_container(&tail("/Channels/Eng/notes"), &cfg));
        assert!(!is_protected_container(&tail("/Channels/Eng/files/a.md"), &cfg));
        assert!(!is_protected_container(&tail("/docs"), &cfg));
        assert!(!is_protected_container(&[], &cfg));

        // Decomposed spelling of a configured folder name
        let accented = EffectiveConfig { channels_folder: "Kan\u{e4}le".into(), ..EffectiveConfig::default() };
        assert!(is_protected_container(&tail("/Kana\u{0308}le/Eng"), &accented));

        let off = EffectiveConfig { protect_channel_folders: false, ..EffectiveConfig::default() };
        assert!(!is_protected_container(&tail("/Channels"), &off));
    }
}
