use super::*;
use crate::identity::Principal;
use crate::resource::{ContextType, DataLookup, PathType, PermissionCalculator, PermissionLevel};

const SNAPSHOT: &str = r#"{
    "teams": [{"id": 7, "name": "Acme"}],
    "channels": [{"id": 3, "team_id": 7, "name": "Eng"}],
    "memberships": [{"channel_id": 3, "user_id": 11, "role": "collaborator"}],
    "channel_paths": [
        {"id": 12, "channel_id": 3, "path_type": "FILE", "path_value": "/f/7/Channels/Eng/files", "created_on": "2024-03-01T10:00:00Z", "created_by": 1},
        {"id": 13, "channel_id": 3, "path_type": "WIKI", "path_value": "/f/7/Channels/Eng/wiki", "created_on": "2024-03-01T10:00:00Z", "created_by": 1}
    ],
    "default_teams": [{"user_id": 11, "team_id": 7}],
    "grants": [{"user_id": 11, "context": "CHANNEL", "context_id": 3, "level": "read"}]
}"#;

#[test]
fn loads_snapshot_json() {
    let dir = InMemoryDirectory::from_snapshot(DirectorySnapshot::from_json_str(SNAPSHOT).unwrap());
    assert_eq!(dir.get_team_by_id(7).map(|t| t.name), Some("Acme".to_string()));
    assert_eq!(dir.get_default_team_for_user(11).map(|t| t.id), Some(7));
    assert!(dir.get_default_team_for_user(99).is_none());
    assert_eq!(dir.get_channel_path_by_id(13).map(|p| p.path_type), Some(PathType::Wiki));
    let m = dir.get_user_channel_membership(3, 11).unwrap();
    assert!(!m.muted);
    let by_value = dir.get_channel_paths_by_value("/f/7/Channels/Eng/files");
    assert_eq!(by_value.len(), 1);
    assert_eq!(by_value[0].id, 12);
}

#[test]
fn snapshot_file_errors_carry_the_path() {
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("dir.json");
    std::fs::write(&p, "{ not json").unwrap();
    let err = DirectorySnapshot::load(&p).unwrap_err();
    assert!(format!("{err:#}").contains("dir.json"));

    std::fs::write(&p, SNAPSHOT).unwrap();
    assert_eq!(DirectorySnapshot::load(&p).unwrap().teams.len(), 1);
}

#[test]
fn cached_levels_go_stale_until_invalidated() {
    let dir = InMemoryDirectory::from_snapshot(DirectorySnapshot::from_json_str(SNAPSHOT).unwrap());
    let who = Principal::user(11);
    assert_eq!(dir.get_effective_permission(&who, ContextType::Channel, 3), PermissionLevel::Read);

    dir.set_grant(11, ContextType::Channel, 3, PermissionLevel::Write);
    assert_eq!(dir.get_effective_permission(&who, ContextType::Channel, 3), PermissionLevel::Read);
    assert_eq!(dir.level_query_count(), 1);

    dir.invalidate_effective_permission_cache(11);
    assert_eq!(dir.invalidation_count(), 1);
    assert_eq!(dir.get_effective_permission(&who, ContextType::Channel, 3), PermissionLevel::Write);
    assert_eq!(dir.level_query_count(), 2);
}

#[test]
fn invalidation_wins_over_concurrent_lookups() {
    let dir = InMemoryDirectory::from_snapshot(DirectorySnapshot::from_json_str(SNAPSHOT).unwrap());
    let who = Principal::user(11);
    let levels = [PermissionLevel::Write, PermissionLevel::Read, PermissionLevel::Manage];
    for round in 0..200 {
        let next = levels[round % levels.len()];
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..50 {
                        dir.get_effective_permission(&who, ContextType::Channel, 3);
                    }
                });
            }
            dir.set_grant(11, ContextType::Channel, 3, next);
            dir.invalidate_effective_permission_cache(11);
        });
        // Whatever the readers cached before the invalidation is gone
        assert_eq!(dir.get_effective_permission(&who, ContextType::Channel, 3), next, "round {round}");
    }
}

#[test]
fn unknown_grants_are_no_access() {
    let dir = InMemoryDirectory::new();
    let level = dir.get_effective_permission(&Principal::user(1), ContextType::Team, 1);
    assert_eq!(level, PermissionLevel::NoAccess);
}
