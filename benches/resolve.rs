use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::sync::Arc;

use chrono::Utc;
use teamfs::config::ResolverConfig;
use teamfs::directory::InMemoryDirectory;
use teamfs::identity::Principal;
use teamfs::resource::{Channel, ChannelMembership, ChannelPathMapping, ChannelRole, ContextType, PathType, PermissionLevel, Team};
use teamfs::Resolver;

fn build_directory(channels: i64) -> Arc<InMemoryDirectory> {
    let dir = InMemoryDirectory::new();
    dir.insert_team(Team { id: 1, name: "Bench".into() });
    dir.set_default_team(100, 1);
    dir.set_grant(100, ContextType::Team, 1, PermissionLevel::Write);
    for c in 0..channels {
        let name = format!("chan-{c}");
        dir.insert_channel(Channel { id: c, team_id: 1, name: name.clone(), one_on_one: false });
        dir.insert_membership(ChannelMembership { channel_id: c, user_id: 100, role: ChannelRole::Manager, muted: false });
        dir.set_grant(100, ContextType::Channel, c, PermissionLevel::Write);
        for (offset, path_type, leaf) in [(0, PathType::File, "files"), (1, PathType::Wiki, "wiki")] {
            dir.insert_channel_path(ChannelPathMapping {
                id: c * 2 + offset,
                channel_id: c,
                path_type,
                path_value: format!("/f/1/Channels/{name}/{leaf}"),
                created_on: Utc::now(),
                created_by: 100,
            });
        }
    }
    Arc::new(dir)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let who = Principal::user(100);

    for &n in &[10i64, 1_000] {
        let dir = build_directory(n);
        let resolver = Resolver::new(dir.clone(), dir, ResolverConfig::default());
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("team_file", n), &n, |b, _| {
            b.iter(|| criterion::black_box(resolver.resolve("/f/1/docs/reports/q1.pdf", &who)).ok());
        });
        group.bench_with_input(BenchmarkId::new("channel_file", n), &n, |b, &n| {
            let ident = format!("/cf/{}/specs/a.md", (n / 2) * 2);
            b.iter(|| criterion::black_box(resolver.resolve(&ident, &who)).ok());
        });
        group.bench_with_input(BenchmarkId::new("wiki", n), &n, |b, &n| {
            let ident = format!("/wf/{}/index.md", (n / 2) * 2 + 1);
            b.iter(|| criterion::black_box(resolver.resolve(&ident, &who)).ok());
        });
        group.bench_with_input(BenchmarkId::new("associations", n), &n, |b, _| {
            b.iter(|| criterion::black_box(resolver.associated_channels("/f/1/Channels/chan-3/files/a.md")).ok());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
