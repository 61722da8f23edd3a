use super::*;

#[test]
fn precedence_global_then_team() {
    let mut cfg = ResolverConfig::default();
    cfg.global.shared_channels_root = "/Channels Shared".into();
    cfg.teams.insert(7, TeamConfigOverride {
        my_files_root: Some("/Mes fichiers".into()),
        channels_folder: None,
        channel_files_folder: Some("docs".into()),
        protect_channel_folders: Some(false),
    });

    let eff = cfg.effective(7);
    assert_eq!(eff.my_files_root, "/Mes fichiers");
    assert_eq!(eff.shared_channels_root, "/Channels Shared");
    assert_eq!(eff.channels_folder, "Channels");
    assert_eq!(eff.channel_files_folder, "docs");
    assert!(!eff.protect_channel_folders);

    let other = cfg.effective(8);
    assert_eq!(other.my_files_root, "/My Files");
    assert!(other.protect_channel_folders);
}

#[test]
fn env_overrides_apply_to_global() {
    let mut cfg = ResolverConfig::default();
    cfg.apply_vars(|k| match k {
        "TEAMFS_MY_FILES_ROOT" => Some("/Files".to_string()),
        "TEAMFS_CHANNEL_FILES_FOLDER" => Some("shared".to_string()),
        _ => None,
    });
    assert_eq!(cfg.global.my_files_root, "/Files");
    assert_eq!(cfg.global.channel_files_folder, "shared");
    assert_eq!(cfg.global.channels_folder, "Channels");
}

#[test]
fn partial_json_inherits_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let p = tmp.path().join("teamfs.json");
    std::fs::write(&p, r#"{"global": {"my_files_root": "/Home"}, "teams": {"3": {"channels_folder": "Rooms"}}}"#).unwrap();
    let cfg = ResolverConfig::from_json_file(&p).unwrap();
    assert_eq!(cfg.global.my_files_root, "/Home");
    assert_eq!(cfg.global.shared_channels_root, "/Shared Channels");
    assert_eq!(cfg.effective(3).channels_folder, "Rooms");
    assert!(ResolverConfig::from_json_file(&tmp.path().join("missing.json")).is_err());
}
