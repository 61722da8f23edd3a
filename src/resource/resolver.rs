use std::sync::Arc;

use tracing::{info_span, warn};

use crate::config::ResolverConfig;
use crate::identity::{Principal, RequestContext};

use super::error::ResolutionError;
use super::identifier::ResourceKind;
use super::lookup::{DataLookup, PermissionCalculator};
use super::model::ChannelAssociation;
use super::translated::ResolvedPath;
use super::variants::{ChannelFileResource, ChannelWikiResource, Collaborators, Resource, TeamFileResource};

/// Dispatches identifiers to the variant that owns their prefix.
pub struct Resolver {
    team_files: TeamFileResource,
    channel_files: ChannelFileResource,
    channel_wiki: ChannelWikiResource,
}

impl Resolver {
    pub fn new(lookup: Arc<dyn DataLookup>, permissions: Arc<dyn PermissionCalculator>, config: ResolverConfig) -> Self {
        Self::from_collaborators(Collaborators::new(lookup, permissions, config))
    }

    pub fn from_collaborators(collab: Collaborators) -> Self {
        Self {
            team_files: TeamFileResource::new(collab.clone()),
            channel_files: ChannelFileResource::new(collab.clone()),
            channel_wiki: ChannelWikiResource::new(collab),
        }
    }

    pub fn variant(&self, kind: ResourceKind) -> &dyn Resource {
        match kind {
            ResourceKind::TeamFile => &self.team_files,
            ResourceKind::ChannelFile => &self.channel_files,
            ResourceKind::ChannelWiki => &self.channel_wiki,
        }
    }

    pub fn resolve(&self, identifier: &str, principal: &Principal) -> Result<ResolvedPath, ResolutionError> {
        let kind = ResourceKind::from_identifier(identifier)?;
        self.variant(kind).resolve(identifier, principal)
    }

    /// Resolve inside a span carrying the request's correlation id.
    pub fn resolve_in(&self, ctx: &RequestContext, identifier: &str) -> Result<ResolvedPath, ResolutionError> {
        let span = info_span!(target: "teamfs::resolve", "resolve", corr = %ctx.request_id, user = ctx.principal.user_id);
        let _guard = span.enter();
        let out = self.resolve(identifier, &ctx.principal);
        if let Err(e) = &out {
            warn!(target: "teamfs::resolve", "{} failed: {} [corr={}]", e.identifier(), e.kind(), ctx.request_id);
        }
        out
    }

    pub fn associated_channels(&self, identifier: &str) -> Result<Vec<ChannelAssociation>, ResolutionError> {
        let kind = ResourceKind::from_identifier(identifier)?;
        self.variant(kind).associated_channels(identifier)
    }
}
