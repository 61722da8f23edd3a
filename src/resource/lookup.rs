//! Collaborator seams. Implementations are injected into the resolver; the
//! resolver owns no cache and never reaches for a global to find them.

use crate::identity::Principal;

use super::model::{Channel, ChannelMembership, ChannelPathMapping, ContextType, Team};
use super::role::PermissionLevel;

/// Read access to teams, channels, memberships and channel path mappings.
pub trait DataLookup: Send + Sync {
    fn get_team_by_id(&self, id: i64) -> Option<Team>;
    fn get_channel_path_by_id(&self, id: i64) -> Option<ChannelPathMapping>;
    /// All mappings whose stored `path_value` equals `value` exactly.
    fn get_channel_paths_by_value(&self, value: &str) -> Vec<ChannelPathMapping>;
    fn get_channel_by_id(&self, id: i64) -> Option<Channel>;
    fn get_user_channel_membership(&self, channel_id: i64, user_id: i64) -> Option<ChannelMembership>;
    fn get_default_team_for_user(&self, user_id: i64) -> Option<Team>;
    /// Drop any cached authorization state held for the user.
    fn invalidate_effective_permission_cache(&self, user_id: i64);
}

pub trait PermissionCalculator: Send + Sync {
    fn get_effective_permission(&self, principal: &Principal, context: ContextType, context_id: i64) -> PermissionLevel;
}
