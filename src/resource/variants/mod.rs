//! One struct per resource kind, all behind the [`Resource`] trait.
//! Each variant can be built and tested on its own from a [`Collaborators`] bundle.

use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::identity::Principal;

use super::error::ResolutionError;
use super::identifier::ResourceKind;
use super::lookup::{DataLookup, PermissionCalculator};
use super::model::ChannelAssociation;
use super::permission::{Capability, PermissionSet};
use super::role::PermissionLevel;
use super::translated::ResolvedPath;

pub mod associations;
mod channel_access;
pub mod channel_files;
pub mod channel_wiki;
pub mod team_files;

pub use channel_files::ChannelFileResource;
pub use channel_wiki::ChannelWikiResource;
pub use team_files::TeamFileResource;

/// Capability set every resource kind implements.
pub trait Resource: Send + Sync {
    fn kind(&self) -> ResourceKind;

    fn resource_prefix(&self) -> &'static str { self.kind().prefix() }

    fn resource_type(&self) -> &'static str { self.kind().resource_type() }

    fn resolve(&self, identifier: &str, principal: &Principal) -> Result<ResolvedPath, ResolutionError>;

    /// Channels the identified resource is also reachable from.
    fn associated_channels(&self, identifier: &str) -> Result<Vec<ChannelAssociation>, ResolutionError>;
}

/// Injected dependencies shared by the variants.
#[derive(Clone)]
pub struct Collaborators {
    pub lookup: Arc<dyn DataLookup>,
    pub permissions: Arc<dyn PermissionCalculator>,
    pub config: Arc<ResolverConfig>,
}

impl Collaborators {
    pub fn new(lookup: Arc<dyn DataLookup>, permissions: Arc<dyn PermissionCalculator>, config: ResolverConfig) -> Self {
        Self { lookup, permissions, config: Arc::new(config) }
    }
}

/// Level-derived set used by team files and as the base for channel files.
pub(crate) fn level_permissions(level: PermissionLevel) -> PermissionSet {
    let read = level.at_least(PermissionLevel::Read);
    let write = level.at_least(PermissionLevel::Write);
    PermissionSet::from_pairs([
        (Capability::List, read),
        (Capability::Read, read),
        (Capability::Write, write),
        (Capability::Delete, write),
        (Capability::Own, level.at_least(PermissionLevel::Owner)),
    ])
}
