use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::identity::Principal;
use crate::resource::lookup::{DataLookup, PermissionCalculator};
use crate::resource::model::{Channel, ChannelMembership, ChannelPathMapping, ContextType, Team};
use crate::resource::role::PermissionLevel;
use crate::tprintln;

use super::snapshot::DirectorySnapshot;

type GrantKey = (i64, ContextType, i64);

#[derive(Debug, Default)]
struct Tables {
    teams: HashMap<i64, Team>,
    channels: HashMap<i64, Channel>,
    memberships: HashMap<(i64, i64), ChannelMembership>,
    channel_paths: HashMap<i64, ChannelPathMapping>,
    default_teams: HashMap<i64, i64>,
    grants: HashMap<GrantKey, PermissionLevel>,
}

/// In-process implementation of both collaborator traits.
///
/// Effective levels are memoized per (user, context) the way a database-backed
/// calculator would; `invalidate_effective_permission_cache` drops a user's
/// entries so grant changes become visible.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    tables: RwLock<Tables>,
    level_cache: RwLock<HashMap<GrantKey, PermissionLevel>>,
    invalidations: AtomicU64,
    level_queries: AtomicU64,
}

impl InMemoryDirectory {
    pub fn new() -> Self { Self::default() }

    pub fn from_snapshot(snap: DirectorySnapshot) -> Self {
        let dir = Self::new();
        {
            let mut t = dir.tables.write();
            for team in snap.teams { t.teams.insert(team.id, team); }
            for ch in snap.channels { t.channels.insert(ch.id, ch); }
            for m in snap.memberships { t.memberships.insert((m.channel_id, m.user_id), m); }
            for p in snap.channel_paths { t.channel_paths.insert(p.id, p); }
            for d in snap.default_teams { t.default_teams.insert(d.user_id, d.team_id); }
            for g in snap.grants { t.grants.insert((g.user_id, g.context, g.context_id), g.level); }
            tprintln!(
                "directory.load teams={} channels={} memberships={} channel_paths={} grants={}",
                t.teams.len(), t.channels.len(), t.memberships.len(), t.channel_paths.len(), t.grants.len()
            );
        }
        dir
    }

    pub fn insert_team(&self, team: Team) { self.tables.write().teams.insert(team.id, team); }

    pub fn insert_channel(&self, channel: Channel) { self.tables.write().channels.insert(channel.id, channel); }

    pub fn remove_channel(&self, channel_id: i64) { self.tables.write().channels.remove(&channel_id); }

    pub fn insert_membership(&self, m: ChannelMembership) {
        self.tables.write().memberships.insert((m.channel_id, m.user_id), m);
    }

    pub fn insert_channel_path(&self, p: ChannelPathMapping) { self.tables.write().channel_paths.insert(p.id, p); }

    pub fn set_default_team(&self, user_id: i64, team_id: i64) {
        self.tables.write().default_teams.insert(user_id, team_id);
    }

    /// Change a stored grant. Cached levels are left alone until invalidated.
    pub fn set_grant(&self, user_id: i64, context: ContextType, context_id: i64, level: PermissionLevel) {
        self.tables.write().grants.insert((user_id, context, context_id), level);
    }

    pub fn invalidation_count(&self) -> u64 { self.invalidations.load(Ordering::Relaxed) }

    /// Levels computed from the grant table (cache misses).
    pub fn level_query_count(&self) -> u64 { self.level_queries.load(Ordering::Relaxed) }
}

impl DataLookup for InMemoryDirectory {
    fn get_team_by_id(&self, id: i64) -> Option<Team> { self.tables.read().teams.get(&id).cloned() }

    fn get_channel_path_by_id(&self, id: i64) -> Option<ChannelPathMapping> {
        self.tables.read().channel_paths.get(&id).cloned()
    }

    fn get_channel_paths_by_value(&self, value: &str) -> Vec<ChannelPathMapping> {
        let t = self.tables.read();
        let mut out: Vec<ChannelPathMapping> = t.channel_paths.values().filter(|p| p.path_value == value).cloned().collect();
        out.sort_by_key(|p| p.id);
        out
    }

    fn get_channel_by_id(&self, id: i64) -> Option<Channel> { self.tables.read().channels.get(&id).cloned() }

    fn get_user_channel_membership(&self, channel_id: i64, user_id: i64) -> Option<ChannelMembership> {
        self.tables.read().memberships.get(&(channel_id, user_id)).cloned()
    }

    fn get_default_team_for_user(&self, user_id: i64) -> Option<Team> {
        let t = self.tables.read();
        t.default_teams.get(&user_id).and_then(|id| t.teams.get(id)).cloned()
    }

    fn invalidate_effective_permission_cache(&self, user_id: i64) {
        self.invalidations.fetch_add(1, Ordering::Relaxed);
        let mut cache = self.level_cache.write();
        let before = cache.len();
        cache.retain(|(uid, _, _), _| *uid != user_id);
        debug!(target: "teamfs::directory", "invalidated {} cached level(s) for user {}", before - cache.len(), user_id);
    }
}

impl PermissionCalculator for InMemoryDirectory {
    fn get_effective_permission(&self, principal: &Principal, context: ContextType, context_id: i64) -> PermissionLevel {
        let key = (principal.user_id, context, context_id);
        // Miss and fill under one guard so a concurrent invalidation cannot be overwritten
        let mut cache = self.level_cache.write();
        *cache.entry(key).or_insert_with(|| {
            self.level_queries.fetch_add(1, Ordering::Relaxed);
            self.tables.read().grants.get(&key).copied().unwrap_or_default()
        })
    }
}
