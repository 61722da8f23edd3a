//!
//! teamfs CLI binary
//! -----------------
//! Resolves resource identifiers against a directory snapshot and prints the
//! resolved path (or the externally visible error) as JSON, one document per
//! identifier.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use teamfs::config::ResolverConfig;
use teamfs::directory::{DirectorySnapshot, InMemoryDirectory};
use teamfs::error::AppError;
use teamfs::identity::{Principal, RequestContext};
use teamfs::Resolver;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --snapshot <file.json> --user <id> [--admin] [--public] [--associations] [--config <file.json>] [--request-id <id>] <identifier>...\n\nFlags:\n  --snapshot <path>    Directory snapshot (teams, channels, memberships, channel paths, grants). Env: TEAMFS_SNAPSHOT\n  --config <path>      Resolver config JSON; TEAMFS_* env vars override its global section\n  --user <id>          Requesting user id\n  --admin              Treat the user as a service administrator\n  --public             Treat the request as public-link access\n  --associations       Print channel associations instead of resolving\n  --request-id <id>    Correlation id for log lines (generated when absent)\n  -h, --help           Show this help\n\nExamples:\n  {program} --snapshot dir.json --user 11 /f/7/docs/x.txt\n  {program} --snapshot dir.json --user 11 --associations /f/7/Channels/Eng/files/readme.md"
    );
}

struct Args {
    snapshot: PathBuf,
    config: Option<PathBuf>,
    principal: Principal,
    associations: bool,
    request_id: Option<String>,
    identifiers: Vec<String>,
}

fn parse_args(program: &str, argv: Vec<String>) -> Result<Option<Args>> {
    let mut snapshot = env::var("TEAMFS_SNAPSHOT").ok().map(PathBuf::from);
    let mut config = None;
    let mut user: Option<i64> = None;
    let mut admin = false;
    let mut public = false;
    let mut associations = false;
    let mut request_id = None;
    let mut identifiers = Vec::new();

    let mut it = argv.into_iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "-h" | "--help" => { print_usage(program); return Ok(None); }
            "--snapshot" => snapshot = Some(PathBuf::from(it.next().ok_or_else(|| anyhow!("--snapshot needs a path"))?)),
            "--config" => config = Some(PathBuf::from(it.next().ok_or_else(|| anyhow!("--config needs a path"))?)),
            "--user" => {
                let v = it.next().ok_or_else(|| anyhow!("--user needs an id"))?;
                user = Some(v.parse().with_context(|| format!("invalid user id '{v}'"))?);
            }
            "--admin" => admin = true,
            "--public" => public = true,
            "--associations" => associations = true,
            "--request-id" => request_id = Some(it.next().ok_or_else(|| anyhow!("--request-id needs a value"))?),
            other if other.starts_with("--") => return Err(anyhow!("unknown flag '{other}'")),
            other => identifiers.push(other.to_string()),
        }
    }

    let snapshot = snapshot.ok_or_else(|| anyhow!("--snapshot (or TEAMFS_SNAPSHOT) is required"))?;
    if identifiers.is_empty() {
        return Err(anyhow!("at least one identifier is required"));
    }
    let user_id = match (user, associations) {
        (Some(u), _) => u,
        (None, true) => 0,
        (None, false) => return Err(anyhow!("--user is required when resolving")),
    };
    let principal = Principal { user_id, service_admin: admin, public };
    Ok(Some(Args { snapshot, config, principal, associations, request_id, identifiers }))
}

fn load_resolver(args: &Args) -> Result<Resolver> {
    let config = match &args.config {
        Some(p) => ResolverConfig::from_json_file(p)?.with_env(),
        None => ResolverConfig::from_env(),
    };
    let snapshot = DirectorySnapshot::load(&args.snapshot)?;
    let directory = Arc::new(InMemoryDirectory::from_snapshot(snapshot));
    Ok(Resolver::new(directory.clone(), directory, config))
}

fn main() -> Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "teamfs".to_string());
    let Some(args) = parse_args(&program, argv.collect())? else { return Ok(()); };

    let resolver = match load_resolver(&args) {
        Ok(r) => r,
        Err(e) => {
            error!(target: "teamfs", "startup failed: {e:#}");
            let doc = serde_json::json!({ "error": AppError::from(e) });
            println!("{}", serde_json::to_string_pretty(&doc)?);
            std::process::exit(1);
        }
    };
    info!(target: "teamfs", "teamfs starting: snapshot='{}', identifiers={}", args.snapshot.display(), args.identifiers.len());

    let ctx = RequestContext::new(args.principal, args.request_id.as_deref());
    for ident in &args.identifiers {
        let doc = if args.associations {
            match resolver.associated_channels(ident) {
                Ok(list) => serde_json::json!({ "identifier": ident, "associations": list }),
                Err(e) => serde_json::json!({ "identifier": ident, "error": AppError::from(e) }),
            }
        } else {
            match resolver.resolve_in(&ctx, ident) {
                Ok(resolved) => serde_json::json!({ "identifier": ident, "resolved": resolved, "display_name": resolved.display_name() }),
                Err(e) => serde_json::json!({ "identifier": ident, "error": AppError::from(e) }),
            }
        };
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    Ok(())
}
